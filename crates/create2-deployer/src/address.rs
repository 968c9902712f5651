//! EIP-1014 address derivation.
//!
//! ```text
//! address = keccak256(0xff ‖ deployer ‖ salt ‖ keccak256(init_code))[12..]
//! ```
//!
//! Everything here is pure: the same inputs give the same address on every machine, which is
//! what lets a caller predict a deployment before it happens and cross-check it afterwards.

use alloy_primitives::{keccak256, Address, Bytes, B256};
use alloy_sol_types::{abi::TokenSeq, SolType, SolValue};

use crate::constants::eip1014::{ADDRESS_OFFSET, PREFIX, PREIMAGE_LEN};

/// Computes the address a contract gets when `deployer` creates it with `CREATE2`.
///
/// Only the hash of the init code is needed, never the code itself. The preimage layout and
/// widths are exact; any deviation yields an address no other tool agrees with.
pub fn compute_address(salt: B256, init_code_hash: B256, deployer: Address) -> Address {
    let mut preimage = [0u8; PREIMAGE_LEN];
    preimage[0] = PREFIX;
    preimage[1..21].copy_from_slice(deployer.as_slice());
    preimage[21..53].copy_from_slice(salt.as_slice());
    preimage[53..].copy_from_slice(init_code_hash.as_slice());

    let digest = keccak256(preimage);
    Address::from_slice(&digest[ADDRESS_OFFSET..])
}

/// Hashes init code the way the address derivation expects.
#[inline]
pub fn init_code_hash(init_code: impl AsRef<[u8]>) -> B256 {
    keccak256(init_code)
}

/// Derives a salt from a human-readable message: `keccak256(utf8(message))`.
///
/// This is the same derivation `ethers.id` and `cast keccak` use, so salts written as
/// strings in scripts line up with the ones passed here.
#[inline]
pub fn salt_from_message(message: &str) -> B256 {
    keccak256(message.as_bytes())
}

/// Appends ABI-encoded constructor parameters to creation code.
///
/// `args` must be a tuple and is encoded as a parameter list, so `(owner, start, duration)`
/// becomes the same bytes a Solidity constructor taking those three arguments decodes. A single
/// argument is passed as a 1-tuple, e.g. `&(owner,)`.
pub fn init_code_with_args<T>(creation_code: impl AsRef<[u8]>, args: &T) -> Bytes
where
    T: SolValue,
    for<'a> <T::SolType as SolType>::Token<'a>: TokenSeq<'a>,
{
    let creation_code = creation_code.as_ref();
    let encoded = args.abi_encode_params();
    let mut init_code = Vec::with_capacity(creation_code.len() + encoded.len());
    init_code.extend_from_slice(creation_code);
    init_code.extend_from_slice(&encoded);
    init_code.into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::{address, b256, bytes, hex};

    // Reference vectors from EIP-1014.
    #[test]
    fn test_eip1014_vectors() {
        let cases: [(Address, B256, &[u8], Address); 7] = [
            (
                Address::ZERO,
                B256::ZERO,
                &hex!("00"),
                address!("4d1a2e2bb4f88f0250f26ffff098b0b30b26bf38"),
            ),
            (
                address!("deadbeef00000000000000000000000000000000"),
                B256::ZERO,
                &hex!("00"),
                address!("b928f69bb1d91cd65274e3c79d8986362984fda3"),
            ),
            (
                address!("deadbeef00000000000000000000000000000000"),
                b256!("000000000000000000000000feed000000000000000000000000000000000000"),
                &hex!("00"),
                address!("d04116cdd17bebe565eb2422f2497e06cc1c9833"),
            ),
            (
                Address::ZERO,
                B256::ZERO,
                &hex!("deadbeef"),
                address!("70f2b2914a2a4b783faefb75f459a580616fcb5e"),
            ),
            (
                address!("00000000000000000000000000000000deadbeef"),
                b256!("00000000000000000000000000000000000000000000000000000000cafebabe"),
                &hex!("deadbeef"),
                address!("60f3f640a8508fc6a86d45df051962668e1e8ac7"),
            ),
            (
                address!("00000000000000000000000000000000deadbeef"),
                b256!("00000000000000000000000000000000000000000000000000000000cafebabe"),
                &hex!("deadbeefdeadbeefdeadbeefdeadbeefdeadbeefdeadbeefdeadbeefdeadbeefdeadbeefdeadbeefdeadbeef"),
                address!("1d8bfdc5d46dc4f61d6b6115972536ebe6a8854c"),
            ),
            (
                Address::ZERO,
                B256::ZERO,
                &[],
                address!("e33c0c7f7df4809055c3eba6c09cfe4baf1bd9e0"),
            ),
        ];

        for (deployer, salt, init_code, expected) in cases {
            let computed = compute_address(salt, init_code_hash(init_code), deployer);
            assert_eq!(computed, expected, "deployer {deployer}, salt {salt}");
        }
    }

    #[test]
    fn test_matches_alloy_create2() {
        let deployer = address!("5fbdb2315678afecb367f032d93f642f64180aa3");
        let salt = salt_from_message("salt message");
        let hash = init_code_hash(bytes!("6080604052348015600f57600080fd5b50"));
        assert_eq!(compute_address(salt, hash, deployer), deployer.create2(salt, hash));
    }

    #[test]
    fn test_salt_from_message() {
        // keccak256("") is the well-known empty hash.
        assert_eq!(
            salt_from_message(""),
            b256!("c5d2460186f7233c927e7db2dcc703c0e500b653ca82273b7bfad8045d85a470")
        );
        assert_eq!(salt_from_message("salt message"), keccak256(b"salt message"));
    }

    #[test]
    fn test_init_code_with_args_appends_params() {
        let owner = address!("70997970c51812dc3a010c7d01b50e0d17dc79c8");
        let init_code = init_code_with_args([0x60, 0x80], &(owner, 0u64, 0u64));

        assert_eq!(init_code.len(), 2 + 3 * 32);
        assert_eq!(&init_code[..2], &[0x60, 0x80]);
        assert_eq!(&init_code[2 + 12..2 + 32], owner.as_slice());
        assert!(init_code[2 + 32..].iter().all(|b| *b == 0));
    }

    #[test]
    fn test_init_code_with_single_arg() {
        let owner = address!("70997970c51812dc3a010c7d01b50e0d17dc79c8");
        let init_code = init_code_with_args([0x00u8], &(owner,));

        assert_eq!(init_code.len(), 1 + 32);
        assert_eq!(&init_code[1..], owner.into_word().as_slice());
    }
}
