use alloy_primitives::{Address, B256};
use clap::Parser;
use create2_deployer::{compute_address, constants::DEFAULT_FACTORY_ADDRESS, init_code_hash};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::common::{CliError, InitCodeArgs, Result, SaltArgs};

/// Compute the address of a salted deployment
#[derive(Parser, Debug)]
pub struct Cmd {
    /// Salt configuration
    #[command(flatten)]
    pub salt_args: SaltArgs,

    /// Init code configuration
    #[command(flatten)]
    pub init_code_args: InitCodeArgs,

    /// Hash of the init code, used instead of the init code itself
    #[arg(
        long = "init-code-hash",
        visible_aliases = ["code-hash"],
        conflicts_with_all = ["init_code", "init_code_file", "constructor_args"]
    )]
    pub init_code_hash: Option<B256>,

    /// Address of the deploying account
    #[arg(
        long = "deployer",
        visible_aliases = ["factory"],
        env = "CREATE2_FACTORY",
        default_value_t = DEFAULT_FACTORY_ADDRESS
    )]
    pub deployer: Address,

    /// Print the full computation as JSON instead of the bare address
    #[arg(long = "json")]
    pub json: bool,
}

/// Inputs and result of an address computation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComputeOutcome {
    /// The predicted address
    pub address: Address,
    /// The deploying account
    pub deployer: Address,
    /// The salt
    pub salt: B256,
    /// keccak256 of the init code
    pub init_code_hash: B256,
}

impl Cmd {
    /// Execute the compute command
    pub fn run(&self) -> Result<()> {
        let outcome = self.execute()?;
        if self.json {
            println!("{}", serde_json::to_string_pretty(&outcome)?);
        } else {
            println!("{}", outcome.address);
        }
        Ok(())
    }

    /// Computes the address without printing it.
    pub fn execute(&self) -> Result<ComputeOutcome> {
        let salt = self.salt_args.salt();
        let init_code_hash = match self.init_code_hash {
            Some(hash) => hash,
            None => {
                let init_code = self.init_code_args.load_required()?;
                if init_code.is_empty() {
                    return Err(CliError::InvalidInput("init code is empty".into()));
                }
                init_code_hash(init_code)
            }
        };

        let address = compute_address(salt, init_code_hash, self.deployer);
        debug!(deployer = %self.deployer, %salt, %init_code_hash, %address, "Computed address");
        Ok(ComputeOutcome { address, deployer: self.deployer, salt, init_code_hash })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Command, MainCmd};
    use alloy_primitives::address;
    use rstest::rstest;

    fn compute(args: &[&str]) -> Result<ComputeOutcome> {
        let argv = ["create2", "compute"].into_iter().chain(args.iter().copied());
        let cmd = MainCmd::try_parse_from(argv).unwrap();
        let Command::Compute(cmd) = cmd.command else { panic!("expected compute command") };
        cmd.execute()
    }

    #[rstest]
    #[case::from_code(&["--init-code", "0x00"])]
    #[case::from_hash(&[
        "--init-code-hash",
        "0xbc36789e7a1e281436464229828f817d6612f7b477d66591ff96a9e064bcc98a",
    ])]
    fn test_eip1014_vector(#[case] code_args: &[&str]) {
        let mut args = vec![
            "--deployer",
            "0xdeadbeef00000000000000000000000000000000",
            "--salt",
            "0x000000000000000000000000feed000000000000000000000000000000000000",
        ];
        args.extend_from_slice(code_args);
        let outcome = compute(&args).unwrap();
        assert_eq!(outcome.address, address!("d04116cdd17bebe565eb2422f2497e06cc1c9833"));
    }

    #[test]
    fn test_default_deployer() {
        let outcome = compute(&["--salt-message", "hello", "--init-code", "0x00"]).unwrap();
        assert_eq!(outcome.deployer, DEFAULT_FACTORY_ADDRESS);
        assert_eq!(
            outcome.address,
            DEFAULT_FACTORY_ADDRESS.create2(outcome.salt, outcome.init_code_hash)
        );
    }

    #[test]
    fn test_salt_is_required() {
        let result = MainCmd::try_parse_from(["create2", "compute", "--init-code", "0x00"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_salt_flags_conflict() {
        let result = MainCmd::try_parse_from([
            "create2",
            "compute",
            "--salt",
            "0x0000000000000000000000000000000000000000000000000000000000000000",
            "--salt-message",
            "hello",
            "--init-code",
            "0x00",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_empty_init_code_rejected() {
        let result = compute(&["--salt-message", "hello", "--init-code", "0x"]);
        assert!(matches!(result, Err(CliError::InvalidInput(_))));
    }
}
