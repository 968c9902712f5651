use clap::Parser;
use create2_deployer::{init_code_hash, Create2Deployer, Create2Error};
use tracing::{info, warn};

use super::DeployOutcome;
use crate::common::{
    parse_ether_value, CliError, DeployerArgs, InitCodeArgs, MemoryDb, PreStateArgs, Result,
    SaltArgs, StateDumpArgs,
};

/// Deploy init code through a salted deployer on an in-memory state
#[derive(Parser, Debug)]
pub struct Cmd {
    /// Value sent to the new contract from the deployer's balance. Plain number (wei) or number
    /// with suffix (ether, gwei, wei).
    #[arg(long = "value", default_value = "0")]
    pub value: String,

    /// Salt configuration
    #[command(flatten)]
    pub salt_args: SaltArgs,

    /// Init code configuration
    #[command(flatten)]
    pub init_code_args: InitCodeArgs,

    /// Deployer configuration
    #[command(flatten)]
    pub deployer_args: DeployerArgs,

    /// Pre-deployment state configuration
    #[command(flatten)]
    pub prestate_args: PreStateArgs,

    /// State dump configuration
    #[command(flatten)]
    pub dump_args: StateDumpArgs,
}

/// A finished deployment run: the printable outcome, the deployment result and the final state.
#[derive(Debug)]
pub struct DeployRun {
    /// The outcome to print
    pub outcome: DeployOutcome,
    /// The deployment error, if the deployment did not happen
    pub error: Option<Create2Error>,
    /// The state after the run
    pub db: MemoryDb,
}

impl Cmd {
    /// Execute the deploy command
    pub fn run(&self) -> Result<()> {
        let DeployRun { outcome, error, db } = self.execute()?;

        println!("{}", serde_json::to_string_pretty(&outcome)?);
        self.dump_args.dump_state(&db)?;

        match error {
            Some(error) => Err(error.into()),
            None => Ok(()),
        }
    }

    /// Runs the deployment without printing anything.
    pub fn execute(&self) -> Result<DeployRun> {
        // Step 1: Load inputs
        let value = parse_ether_value(&self.value)?;
        let salt = self.salt_args.salt();
        let init_code = self.init_code_args.load_required()?;
        let config = self.deployer_args.config()?;

        // Step 2: Set up the state and the deployer
        let db = self.prestate_args.create_initial_state()?;
        let mut deployer = Create2Deployer::new(db, config)?;

        // Step 3: Deploy
        let init_code_hash = init_code_hash(&init_code);
        let predicted = deployer.compute_address(salt, init_code_hash, None);
        let outcome =
            DeployOutcome::new(deployer.factory(), predicted, value, salt, init_code_hash);
        info!(factory = %deployer.factory(), %predicted, %value, "Deploying");

        let (outcome, error) = match deployer.deploy(value, salt, init_code) {
            Ok(_) => {
                let record = *deployer.records().last().ok_or_else(|| {
                    CliError::InvalidInput("deployment succeeded without a record".into())
                })?;
                (outcome.succeeded(record), None)
            }
            Err(error) => {
                warn!(%error, "Deployment failed");
                (outcome.failed(&error), Some(error))
            }
        };

        Ok(DeployRun { outcome, error, db: deployer.into_db() })
    }
}
