//! The deploy flow.

use alloy_primitives::{Address, Bytes, TxKind, B256, U256};
use revm::{
    context::{
        result::{ExecutionResult, HaltReason},
        Context, TxEnv,
    },
    state::EvmState,
    Database, DatabaseCommit, ExecuteEvm, MainBuilder, MainContext,
};
use tracing::{debug, info, warn};

use super::{
    decode_forwarder_output, encode_forwarder_call,
    state::{credit_balance, install_forwarder, load_account_info, load_code},
    Create2Error,
};
use crate::{compute_address, init_code_hash, DeployerConfig, DeploymentRecord};

/// A salted deployer backed by a revm database.
///
/// The deployer's identity is [`DeployerConfig::factory`]: every address it predicts uses that
/// account as the `deployer` term, and deployment value is paid from that account's balance.
/// The only state it keeps besides the database is the list of emitted records.
#[derive(Debug)]
pub struct Create2Deployer<DB> {
    db: DB,
    config: DeployerConfig,
    records: Vec<DeploymentRecord>,
}

impl<DB: Database + DatabaseCommit> Create2Deployer<DB> {
    /// Creates a deployer on `db`, installing the forwarder code at the factory address if it
    /// is not there yet. Balance and nonce already present at the factory are kept.
    ///
    /// Fails with [`Create2Error::OperatorIsFactory`] if the operator is the factory account.
    pub fn new(mut db: DB, config: DeployerConfig) -> Result<Self, Create2Error> {
        if config.operator == config.factory {
            return Err(Create2Error::OperatorIsFactory(config.operator));
        }
        install_forwarder(&mut db, config.factory)?;
        Ok(Self { db, config, records: Vec::new() })
    }

    /// The deployer's own address.
    pub const fn factory(&self) -> Address {
        self.config.factory
    }

    /// The deployer configuration.
    pub const fn config(&self) -> &DeployerConfig {
        &self.config
    }

    /// Records emitted by successful deployments, oldest first.
    pub fn records(&self) -> &[DeploymentRecord] {
        &self.records
    }

    /// Returns a reference to the underlying database.
    pub const fn db(&self) -> &DB {
        &self.db
    }

    /// Returns a mutable reference to the underlying database.
    pub fn db_mut(&mut self) -> &mut DB {
        &mut self.db
    }

    /// Consumes the deployer and returns the underlying database.
    pub fn into_db(self) -> DB {
        self.db
    }

    /// Predicts the address of a contract created with `salt` and init code hashing to
    /// `init_code_hash`.
    ///
    /// `deployer` defaults to [`Self::factory`] when `None`, i.e. the address this deployer
    /// would produce itself. Pass another address to predict deployments made by someone else.
    pub fn compute_address(
        &self,
        salt: B256,
        init_code_hash: B256,
        deployer: Option<Address>,
    ) -> Address {
        compute_address(salt, init_code_hash, deployer.unwrap_or(self.config.factory))
    }

    /// Returns the balance of `address`.
    pub fn balance_of(&mut self, address: Address) -> Result<U256, Create2Error> {
        Ok(load_account_info(&mut self.db, address)?.balance)
    }

    /// Returns the runtime code at `address`, empty if the account has none.
    pub fn code_at(&mut self, address: Address) -> Result<Bytes, Create2Error> {
        load_code(&mut self.db, address)
    }

    /// Credits `amount` to `address` and returns its new balance.
    ///
    /// Used to fund the factory before a deployment that transfers value. Fails with
    /// [`Create2Error::BalanceOverflow`] instead of capping the balance.
    pub fn deposit(&mut self, address: Address, amount: U256) -> Result<U256, Create2Error> {
        let balance = credit_balance(&mut self.db, address, amount)?;
        debug!(%address, %amount, %balance, "Deposited");
        Ok(balance)
    }

    /// Deploys `init_code` with `salt`, funding the new contract with `value` from the
    /// factory's balance, and returns the new contract's address.
    ///
    /// # Errors
    ///
    /// - [`Create2Error::EmptyBytecode`] if `init_code` is empty
    /// - [`Create2Error::InsufficientBalance`] if the factory holds less than `value`
    /// - [`Create2Error::FailedDeployment`] if `CREATE2` returned the zero address, which covers
    ///   both an occupied target address and failing init code
    ///
    /// On any error the database is left untouched and no record is emitted.
    pub fn deploy(
        &mut self,
        value: U256,
        salt: B256,
        init_code: Bytes,
    ) -> Result<Address, Create2Error> {
        let factory = self.config.factory;

        // Step 1: Validate preconditions, in order
        if init_code.is_empty() {
            return Err(Create2Error::EmptyBytecode);
        }
        let available = self.balance_of(factory)?;
        if available < value {
            return Err(Create2Error::InsufficientBalance { available, requested: value });
        }

        // Step 2: Predict the address
        let predicted = self.compute_address(salt, init_code_hash(&init_code), None);
        debug!(%factory, %salt, %value, %predicted, init_code_len = init_code.len(), "Deploying");

        // Step 3: Execute CREATE2 through the forwarder
        let (result, state) = self.execute_forwarder_call(value, salt, &init_code)?;

        // Step 4: Interpret the outcome. The execution state is only committed on success.
        let realized = match result {
            ExecutionResult::Success { output, .. } => {
                decode_forwarder_output(output.data()).ok_or_else(|| {
                    Create2Error::Evm(format!("malformed forwarder output: {output:?}"))
                })?
            }
            ExecutionResult::Revert { output, .. } => {
                warn!(%predicted, ?output, "Forwarder call reverted");
                return Err(Create2Error::FailedDeployment);
            }
            ExecutionResult::Halt { reason, .. } => {
                warn!(%predicted, ?reason, "Forwarder call halted");
                return Err(Create2Error::FailedDeployment);
            }
        };
        if realized.is_zero() {
            warn!(%predicted, "CREATE2 returned the zero address");
            return Err(Create2Error::FailedDeployment);
        }
        if realized != predicted {
            return Err(Create2Error::AddressMismatch { predicted, realized });
        }

        self.db.commit(state);
        let record = DeploymentRecord { addr: realized, value };
        info!(addr = %record.addr, value = %record.value, "Deployed");
        self.records.push(record);

        Ok(realized)
    }

    /// Runs the forwarder call from the operator account without committing its state.
    fn execute_forwarder_call(
        &mut self,
        value: U256,
        salt: B256,
        init_code: &[u8],
    ) -> Result<(ExecutionResult<HaltReason>, EvmState), Create2Error> {
        let DeployerConfig { factory, operator, gas_limit } = self.config;
        let nonce = load_account_info(&mut self.db, operator)?.nonce;

        let tx = TxEnv {
            caller: operator,
            kind: TxKind::Call(factory),
            data: encode_forwarder_call(value, salt, init_code),
            value: U256::ZERO,
            gas_limit,
            gas_price: 0,
            nonce,
            ..Default::default()
        };

        let mut evm = Context::mainnet().with_db(&mut self.db).build_mainnet();
        let outcome = evm.transact(tx).map_err(|e| Create2Error::Evm(e.to_string()))?;
        Ok((outcome.result, outcome.state))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::bytes;
    use revm::database::{CacheDB, EmptyDB};

    fn deployer() -> Create2Deployer<CacheDB<EmptyDB>> {
        Create2Deployer::new(CacheDB::default(), DeployerConfig::default()).unwrap()
    }

    #[test]
    fn test_compute_address_defaults_to_factory() {
        let deployer = deployer();
        let salt = B256::repeat_byte(1);
        let hash = B256::repeat_byte(2);

        assert_eq!(
            deployer.compute_address(salt, hash, None),
            compute_address(salt, hash, deployer.factory())
        );
        let other = Address::repeat_byte(3);
        assert_eq!(deployer.compute_address(salt, hash, Some(other)), other.create2(salt, hash));
    }

    #[test]
    fn test_operator_must_differ_from_factory() {
        let factory = Address::repeat_byte(0x0f);
        let config = DeployerConfig::default().with_factory(factory).with_operator(factory);
        let mut db = CacheDB::<EmptyDB>::default();

        let result = Create2Deployer::new(&mut db, config);
        assert!(matches!(result, Err(Create2Error::OperatorIsFactory(addr)) if addr == factory));
        // Nothing was installed
        assert!(load_code(&mut db, factory).unwrap().is_empty());
    }

    #[test]
    fn test_deposit_overflow_keeps_balance() {
        let mut deployer = deployer();
        let factory = deployer.factory();
        deployer.deposit(factory, U256::MAX).unwrap();

        assert!(matches!(
            deployer.deposit(factory, U256::from(1)),
            Err(Create2Error::BalanceOverflow { .. })
        ));
        assert_eq!(deployer.balance_of(factory).unwrap(), U256::MAX);
    }

    #[test]
    fn test_empty_bytecode_checked_before_balance() {
        let mut deployer = deployer();
        // Both preconditions are violated; the init code check wins.
        let result = deployer.deploy(U256::from(1), B256::ZERO, Bytes::new());
        assert_eq!(result, Err(Create2Error::EmptyBytecode));
        assert!(deployer.records().is_empty());
    }

    #[test]
    fn test_insufficient_balance() {
        let mut deployer = deployer();
        let result = deployer.deploy(U256::from(1), B256::ZERO, bytes!("00"));
        assert_eq!(
            result,
            Err(Create2Error::InsufficientBalance {
                available: U256::ZERO,
                requested: U256::from(1)
            })
        );
    }

    #[test]
    fn test_deploy_emits_record() {
        let mut deployer = deployer();
        // Init code that returns empty runtime code still creates an account.
        let init_code = bytes!("00");
        let predicted = deployer.compute_address(B256::ZERO, init_code_hash(&init_code), None);

        let addr = deployer.deploy(U256::ZERO, B256::ZERO, init_code).unwrap();
        assert_eq!(addr, predicted);
        assert_eq!(deployer.records(), &[DeploymentRecord { addr, value: U256::ZERO }]);
    }
}
