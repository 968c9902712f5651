//! Tests for off-platform address derivation.

use alloy_primitives::{hex, keccak256, Address, B256};
use create2_deployer::*;
use proptest::prelude::*;

#[test]
fn test_deployer_compute_matches_free_function() {
    let deployer = test_utils::MemoryDatabase::default().into_deployer().unwrap();
    let salt = salt_from_message("hello");
    let hash = keccak256(test_utils::ANSWER_RUNTIME);

    assert_eq!(
        deployer.compute_address(salt, hash, None),
        compute_address(salt, hash, constants::DEFAULT_FACTORY_ADDRESS)
    );
}

proptest! {
    #[test]
    fn proptest_deterministic(
        deployer in any::<[u8; 20]>(),
        salt in any::<[u8; 32]>(),
        hash in any::<[u8; 32]>(),
    ) {
        let (deployer, salt, hash) = (Address::from(deployer), B256::from(salt), B256::from(hash));
        let first = compute_address(salt, hash, deployer);
        prop_assert_eq!(first, compute_address(salt, hash, deployer));
        prop_assert_eq!(first, deployer.create2(salt, hash));
    }

    #[test]
    fn proptest_salt_sensitive(salt in any::<[u8; 32]>(), bit in 0usize..256) {
        let deployer = constants::DEFAULT_FACTORY_ADDRESS;
        let hash = keccak256(hex!("00"));
        let salt = B256::from(salt);
        let mut flipped = salt;
        flipped[bit / 8] ^= 1 << (bit % 8);
        prop_assert_ne!(
            compute_address(salt, hash, deployer),
            compute_address(flipped, hash, deployer)
        );
    }

    #[test]
    fn proptest_init_code_sensitive(a in any::<Vec<u8>>(), b in any::<Vec<u8>>()) {
        prop_assume!(a != b);
        let deployer = constants::DEFAULT_FACTORY_ADDRESS;
        prop_assert_ne!(
            compute_address(B256::ZERO, init_code_hash(&a), deployer),
            compute_address(B256::ZERO, init_code_hash(&b), deployer)
        );
    }

    #[test]
    fn proptest_deployer_sensitive(a in any::<[u8; 20]>(), b in any::<[u8; 20]>()) {
        prop_assume!(a != b);
        let hash = keccak256(hex!("00"));
        prop_assert_ne!(
            compute_address(B256::ZERO, hash, Address::from(a)),
            compute_address(B256::ZERO, hash, Address::from(b))
        );
    }
}
