//! Account reads and writes for the deployer.
//!
//! Everything goes through the `Database`/`DatabaseCommit` pair so the deployer works on any
//! revm backend. Writes are expressed as [`EvmState`] change sets, the same shape an executed
//! transaction produces.

use alloy_primitives::{Address, Bytes, U256};
use revm::{
    primitives::KECCAK_EMPTY,
    state::{Account, AccountInfo, EvmState},
    Database, DatabaseCommit,
};
use tracing::{debug, trace};

use super::{forwarder_bytecode, Create2Error};

/// Loads an account, treating a missing account as empty.
pub(crate) fn load_account_info<DB: Database>(
    db: &mut DB,
    address: Address,
) -> Result<AccountInfo, Create2Error> {
    Ok(db.basic(address).map_err(Create2Error::database)?.unwrap_or_default())
}

/// Returns the runtime code stored at `address`, empty if there is none.
pub(crate) fn load_code<DB: Database>(
    db: &mut DB,
    address: Address,
) -> Result<Bytes, Create2Error> {
    let info = load_account_info(db, address)?;
    if info.code_hash == KECCAK_EMPTY {
        return Ok(Bytes::new());
    }
    let code = match info.code {
        Some(code) if !code.is_empty() => code,
        _ => db.code_by_hash(info.code_hash).map_err(Create2Error::database)?,
    };
    Ok(code.original_bytes())
}

/// Ensures the forwarder code is installed at `address`, keeping its balance and nonce.
pub(crate) fn install_forwarder<DB: Database + DatabaseCommit>(
    db: &mut DB,
    address: Address,
) -> Result<(), Create2Error> {
    let mut info = load_account_info(db, address)?;
    let bytecode = forwarder_bytecode();
    let code_hash = bytecode.hash_slow();

    // If the forwarder is already deployed with the correct code, leave the account alone
    if info.code_hash == code_hash {
        trace!(%address, "Forwarder already installed");
        return Ok(());
    }

    debug!(%address, balance = %info.balance, "Installing forwarder code");
    info.code_hash = code_hash;
    info.code = Some(bytecode);

    let mut account = Account::from(info);
    account.mark_touch();
    account.mark_created();
    db.commit(EvmState::from_iter([(address, account)]));
    Ok(())
}

/// Adds `amount` to the balance of `address` and returns the new balance.
///
/// Fails with [`Create2Error::BalanceOverflow`] without writing if the sum does not fit.
pub(crate) fn credit_balance<DB: Database + DatabaseCommit>(
    db: &mut DB,
    address: Address,
    amount: U256,
) -> Result<U256, Create2Error> {
    let mut info = load_account_info(db, address)?;
    let balance = info.balance.checked_add(amount).ok_or(Create2Error::BalanceOverflow {
        address,
        balance: info.balance,
        amount,
    })?;
    info.balance = balance;

    let mut account = Account::from(info);
    account.mark_touch();
    db.commit(EvmState::from_iter([(address, account)]));
    Ok(balance)
}
