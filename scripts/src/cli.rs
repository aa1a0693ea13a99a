//! Definitions of CLI arguments for the deploy scripts

use clap::Parser;

use crate::constants::{
    DEFAULT_ARTIFACTS_DIR, DEFAULT_DEPLOYMENTS_PATH, DEFAULT_DEPLOY_CONFIRMATIONS,
    DEFAULT_DEPLOY_TIMEOUT_SECS,
};

/// Deploy the subscription payment contracts and record their addresses
/// in the deployments file, namespaced by network.
#[derive(Parser)]
pub struct Cli {
    /// Private key of the deployer
    // TODO: Better key management
    #[arg(short, long, env = "DEPLOYER_PRIV_KEY")]
    pub priv_key: String,

    /// Network RPC URL
    #[arg(short, long, env = "RPC_URL")]
    pub rpc_url: String,

    /// Name of the network being deployed to, used to namespace the recorded
    /// contract addresses. Defaults to the development network.
    #[arg(short, long)]
    pub network: Option<String>,

    /// Path to the deployments file the contract addresses are recorded in
    #[arg(short, long, default_value = DEFAULT_DEPLOYMENTS_PATH)]
    pub deployments_path: String,

    /// Directory containing the compiled contract artifacts
    #[arg(short, long, default_value = DEFAULT_ARTIFACTS_DIR)]
    pub artifacts_dir: String,

    /// Number of confirmations to wait for before treating a deployment as
    /// final
    #[arg(short, long, default_value_t = DEFAULT_DEPLOY_CONFIRMATIONS)]
    pub confirmations: usize,

    /// Seconds to wait for a deployment to be confirmed before giving up
    #[arg(short, long, default_value_t = DEFAULT_DEPLOY_TIMEOUT_SECS)]
    pub timeout_secs: u64,
}
