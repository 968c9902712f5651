//! Pre-deployment state seeding and post-deployment state dumps

use std::{collections::BTreeMap, path::PathBuf, str::FromStr};

use alloy_primitives::{utils::parse_units, Address, Bytes, B256, U256};
use clap::Args;
use create2_deployer::revm::{
    database::{CacheDB, DbAccount, EmptyDB},
    state::{Account, AccountInfo, Bytecode, EvmState, EvmStorageSlot},
    DatabaseCommit,
};
use tracing::{debug, info, trace};

use super::{CliError, Result};

/// In-memory database the deployments run against
pub type MemoryDb = CacheDB<EmptyDB>;

/// Pre-deployment state configuration arguments
#[derive(Args, Debug, Clone, Default)]
#[command(next_help_heading = "State Options")]
pub struct PreStateArgs {
    /// JSON file with prestate (genesis) accounts, keyed by address.
    #[arg(long = "prestate", visible_aliases = ["pre-state"])]
    pub prestate: Option<PathBuf>,

    /// Override balance for specified addresses. Each entry format: `ADDRESS=VALUE`
    /// VALUE can be: plain number (wei), or number with suffix (ether, gwei, wei).
    /// Examples: `--balance 0x1234=100ether`
    #[arg(long = "balance")]
    pub balance: Vec<String>,

    /// Add ether to specified addresses. Each entry format: `ADDRESS+=VALUE`
    /// VALUE can be: plain number (wei), or number with suffix (ether, gwei, wei).
    /// Examples: `--faucet 0x1234+=100ether`, `--faucet 0x5678+=1000000gwei`
    /// Can be repeated for multiple addresses.
    #[arg(long = "faucet")]
    pub faucet: Vec<String>,
}

/// Parse ether value string into wei (U256).
/// Supports: plain number (wei), or number with suffix (ether, gwei, wei, etc).
/// Examples: "1000000000000000000", "1ether", "100gwei", "1000wei"
pub fn parse_ether_value(s: &str) -> Result<U256> {
    let s = s.trim();

    // Find where digits/decimal end and unit begins
    let split_pos = s.find(|c: char| !c.is_ascii_digit() && c != '.').unwrap_or(s.len());

    let (num_str, unit) = s.split_at(split_pos);
    let unit = if unit.is_empty() { "wei" } else { unit };

    let parsed = parse_units(num_str, unit)
        .map_err(|e| CliError::InvalidInput(format!("Invalid ether value '{s}': {e}")))?;

    Ok(parsed.into())
}

/// Splits `ADDRESS<sep>VALUE` and parses both halves.
fn parse_address_value(entry: &str, sep: &str, kind: &str) -> Result<(Address, U256)> {
    let (addr_str, value_str) = entry.split_once(sep).ok_or_else(|| {
        CliError::InvalidInput(format!(
            "Invalid {kind} entry '{entry}': expected format 'ADDRESS{sep}VALUE'"
        ))
    })?;
    let address = Address::from_str(addr_str.trim()).map_err(|e| {
        CliError::InvalidInput(format!(
            "Invalid address '{addr_str}' in {kind} entry '{entry}': {e}"
        ))
    })?;
    Ok((address, parse_ether_value(value_str)?))
}

impl PreStateArgs {
    /// Parse faucet entries from CLI arguments.
    ///
    /// Each entry should be in the format `ADDRESS+=VALUE`.
    pub fn parse_faucet(&self) -> Result<Vec<(Address, U256)>> {
        self.faucet.iter().map(|entry| parse_address_value(entry, "+=", "faucet")).collect()
    }

    /// Parse balance override entries from CLI arguments.
    ///
    /// Each entry should be in the format `ADDRESS=VALUE`.
    pub fn parse_balance(&self) -> Result<Vec<(Address, U256)>> {
        self.balance.iter().map(|entry| parse_address_value(entry, "=", "balance")).collect()
    }

    /// Load prestate as [`EvmState`]: the prestate file first, then balance overrides, then
    /// faucet additions.
    pub fn load_prestate(&self) -> Result<EvmState> {
        let mut prestate = if let Some(pre_state_path) = &self.prestate {
            info!(prestate_path = ?pre_state_path, "Loading prestate from file");
            let prestate_content = std::fs::read_to_string(pre_state_path)?;
            let loaded: BTreeMap<Address, AccountState> = serde_json::from_str(&prestate_content)?;
            trace!(prestate = ?loaded, "Prestate loaded from file");
            loaded
                .into_iter()
                .map(|(address, state)| Ok((address, state.into_account()?)))
                .collect::<Result<EvmState>>()?
        } else {
            debug!("No prestate file provided");
            EvmState::default()
        };

        for (address, balance) in self.parse_balance()? {
            info!(%address, %balance, "Overriding balance");
            prestate.entry(address).or_default().info.balance = balance;
        }

        for (address, balance) in self.parse_faucet()? {
            info!(%address, %balance, "Faucet: adding balance");
            let info = &mut prestate.entry(address).or_default().info;
            info.balance = info.balance.checked_add(balance).ok_or_else(|| {
                CliError::InvalidInput(format!(
                    "Faucet overflows the balance of {address}: {} + {balance}",
                    info.balance
                ))
            })?;
        }

        Ok(prestate)
    }

    /// Creates the in-memory database holding the prestate.
    pub fn create_initial_state(&self) -> Result<MemoryDb> {
        let mut prestate = self.load_prestate()?;
        for account in prestate.values_mut() {
            account.mark_touch();
        }
        let mut db = MemoryDb::default();
        db.commit(prestate);
        Ok(db)
    }
}

/// State dump configuration arguments
#[derive(Args, Debug, Clone, Default)]
#[command(next_help_heading = "State Dump Options")]
pub struct StateDumpArgs {
    /// Dumps the state after the deployment
    #[arg(long = "dump")]
    pub dump: bool,

    /// Output file for state dump (if not specified, prints to console)
    #[arg(long = "dump.output", visible_aliases = ["dump-output"])]
    pub dump_output_file: Option<PathBuf>,
}

impl StateDumpArgs {
    /// Serializes the accounts held by `db` as JSON, in the prestate file format.
    pub fn serialize_state(&self, db: &MemoryDb) -> Result<String> {
        let accounts = db
            .cache
            .accounts
            .iter()
            .map(|(address, account)| (*address, AccountState::from_db_account(account)))
            .collect::<BTreeMap<_, _>>();
        Ok(serde_json::to_string_pretty(&accounts)?)
    }

    /// Dumps the state to file or console, if requested.
    pub fn dump_state(&self, db: &MemoryDb) -> Result<()> {
        if !self.dump {
            return Ok(());
        }
        debug!("Dumping state");
        let state_json = self.serialize_state(db)?;

        if let Some(ref output_file) = self.dump_output_file {
            debug!(output_file = ?output_file, "Writing dumped state to file");
            std::fs::write(output_file, state_json)?;
            eprintln!("State dump written to: {}", output_file.display());
        } else {
            println!("{state_json}");
        }
        Ok(())
    }
}

/// Account state information
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountState {
    /// Account balance
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub balance: Option<U256>,
    /// Account nonce
    #[serde(default, with = "alloy_serde::quantity::opt", skip_serializing_if = "Option::is_none")]
    pub nonce: Option<u64>,
    /// Account code (hex string with 0x prefix)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<Bytes>,
    /// Code hash, checked against the code if given
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code_hash: Option<B256>,
    /// Storage slots
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub storage: Option<BTreeMap<U256, U256>>,
}

impl AccountState {
    /// Creates a new [`AccountState`] from a cached database account.
    pub fn from_db_account(account: &DbAccount) -> Self {
        let info = &account.info;
        let code = info.code.as_ref().map(Bytecode::original_bytes).unwrap_or_default();
        Self {
            balance: Some(info.balance),
            nonce: Some(info.nonce),
            code: Some(code),
            code_hash: Some(info.code_hash),
            storage: Some(account.storage.iter().map(|(slot, value)| (*slot, *value)).collect()),
        }
    }

    /// Converts into [`Account`].
    pub fn into_account(self) -> Result<Account> {
        let code = self.code.unwrap_or_default();
        let bytecode = if code.is_empty() {
            Bytecode::default()
        } else {
            Bytecode::new_raw_checked(code)
                .map_err(|e| CliError::InvalidInput(format!("Invalid bytecode: {e}")))?
        };
        let computed = bytecode.hash_slow();
        if let Some(expected) = self.code_hash {
            if computed != expected {
                return Err(CliError::CodeHashMismatch { expected, computed });
            }
        }

        let info = AccountInfo::new(
            self.balance.unwrap_or_default(),
            self.nonce.unwrap_or_default(),
            computed,
            bytecode,
        );
        let storage = self
            .storage
            .unwrap_or_default()
            .into_iter()
            .map(|(slot, value)| (slot, EvmStorageSlot::new(value, 0)));
        Ok(Account::from(info).with_storage(storage))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::address;
    use create2_deployer::revm::Database;
    use rstest::rstest;
    use std::io::Write;

    const ALICE: Address = address!("0000000000000000000000000000000000a11ce0");

    #[rstest]
    #[case::plain_wei("1000", U256::from(1000))]
    #[case::wei_suffix("1000wei", U256::from(1000))]
    #[case::gwei("2gwei", U256::from(2_000_000_000u64))]
    #[case::ether("1ether", U256::from(10u64.pow(18)))]
    #[case::fractional_ether("1.5ether", U256::from(15 * 10u64.pow(17)))]
    fn test_parse_ether_value(#[case] input: &str, #[case] expected: U256) {
        assert_eq!(parse_ether_value(input).unwrap(), expected);
    }

    #[rstest]
    #[case::missing_separator("0x0000000000000000000000000000000000a11ce0")]
    #[case::bad_address("0x1234=1")]
    #[case::bad_unit("0x0000000000000000000000000000000000a11ce0=1parsec")]
    fn test_parse_balance_rejects(#[case] entry: &str) {
        let args = PreStateArgs { balance: vec![entry.to_string()], ..Default::default() };
        assert!(matches!(args.parse_balance(), Err(CliError::InvalidInput(_))));
    }

    #[test]
    fn test_balance_then_faucet() {
        let args = PreStateArgs {
            balance: vec![format!("{ALICE}=1ether")],
            faucet: vec![format!("{ALICE}+=1ether"), format!("{ALICE}+=5wei")],
            ..Default::default()
        };
        let prestate = args.load_prestate().unwrap();
        assert_eq!(prestate[&ALICE].info.balance, U256::from(2 * 10u64.pow(18) + 5));
    }

    #[test]
    fn test_faucet_overflow_is_rejected() {
        let args = PreStateArgs {
            balance: vec![format!("{ALICE}={}", U256::MAX)],
            faucet: vec![format!("{ALICE}+=1")],
            ..Default::default()
        };
        assert!(matches!(args.load_prestate(), Err(CliError::InvalidInput(_))));
    }

    #[test]
    fn test_prestate_file_seeds_database() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"{ALICE}": {{"balance": "0x10", "nonce": "0x2", "code": "0x00", "storage": {{"0x1": "0x2"}}}}}}"#
        )
        .unwrap();

        let args = PreStateArgs { prestate: Some(file.path().to_path_buf()), ..Default::default() };
        let mut db = args.create_initial_state().unwrap();
        let info = db.basic(ALICE).unwrap().unwrap();
        assert_eq!(info.balance, U256::from(0x10));
        assert_eq!(info.nonce, 2);
        assert_eq!(db.storage(ALICE, U256::from(1)).unwrap(), U256::from(2));
    }

    #[test]
    fn test_code_hash_mismatch() {
        let state = AccountState {
            code: Some(Bytes::from_static(&[0x00])),
            code_hash: Some(B256::ZERO),
            ..Default::default()
        };
        assert!(matches!(state.into_account(), Err(CliError::CodeHashMismatch { .. })));
    }
}
