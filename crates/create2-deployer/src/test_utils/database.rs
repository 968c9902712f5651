use core::convert::Infallible;

use alloy_primitives::{Address, Bytes, B256, U256};
use delegate::delegate;
use revm::{
    database::{AccountState, CacheDB, EmptyDB},
    primitives::{StorageKey, StorageValue},
    state::{AccountInfo, Bytecode},
};

use crate::{Create2Deployer, Create2Error, DeployerConfig};

/// A memory database for testing purposes.
#[derive(Debug, Default, Clone, derive_more::Deref, derive_more::DerefMut)]
pub struct MemoryDatabase {
    #[deref]
    #[deref_mut]
    db: CacheDB<EmptyDB>,
}

impl MemoryDatabase {
    /// Sets the code for an account in the database.
    pub fn set_account_code(&mut self, address: Address, code: Bytes) {
        let bytecode = Bytecode::new_legacy(code);
        let code_hash = bytecode.hash_slow();
        let Ok(account) = self.db.load_account(address);
        account.info.code = Some(bytecode);
        account.info.code_hash = code_hash;
        account.account_state = AccountState::None;
    }

    /// Sets the code for an account in the database.
    pub fn account_code(mut self, address: Address, code: Bytes) -> Self {
        self.set_account_code(address, code);
        self
    }

    /// Sets the balance for an account in the database.
    pub fn set_account_balance(&mut self, address: Address, balance: U256) {
        let Ok(account) = self.db.load_account(address);
        account.info.balance = balance;
        account.account_state = AccountState::None;
    }

    /// Sets the balance for an account in the database.
    pub fn account_balance(mut self, address: Address, balance: U256) -> Self {
        self.set_account_balance(address, balance);
        self
    }

    /// Sets the nonce for an account in the database.
    pub fn set_account_nonce(&mut self, address: Address, nonce: u64) {
        let Ok(account) = self.db.load_account(address);
        account.info.nonce = nonce;
        account.account_state = AccountState::None;
    }

    /// Sets the nonce for an account in the database.
    pub fn account_nonce(mut self, address: Address, nonce: u64) -> Self {
        self.set_account_nonce(address, nonce);
        self
    }

    /// Returns the value of a storage slot, zero if unset.
    pub fn storage_at(&mut self, address: Address, slot: StorageKey) -> StorageValue {
        let Ok(value) = revm::Database::storage(&mut self.db, address, slot);
        value
    }

    /// Wraps the database in a deployer with the default configuration.
    pub fn into_deployer(self) -> Result<Create2Deployer<Self>, Create2Error> {
        Create2Deployer::new(self, DeployerConfig::default())
    }
}

impl revm::Database for MemoryDatabase {
    type Error = Infallible;

    delegate! {
        to self.db {
            fn basic(&mut self, address: Address) -> Result<Option<AccountInfo>, Self::Error>;
            fn code_by_hash(&mut self, code_hash: B256) -> Result<Bytecode, Self::Error>;
            fn storage(&mut self, address: Address, index: StorageKey) -> Result<StorageValue, Self::Error>;
            fn block_hash(&mut self, number: u64) -> Result<B256, Self::Error>;
        }
    }
}

impl revm::DatabaseCommit for MemoryDatabase {
    delegate! {
        to self.db {
            fn commit(&mut self, changes: revm::primitives::HashMap<Address, revm::state::Account>);
        }
    }
}
