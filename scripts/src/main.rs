use std::time::Duration;

use clap::Parser;
use scripts::{
    chain::{setup_client, EvmClient},
    cli::Cli,
    commands::deploy_subscription_contracts,
    errors::ScriptError,
};

#[tokio::main]
async fn main() -> Result<(), ScriptError> {
    let Cli {
        priv_key,
        rpc_url,
        network,
        deployments_path,
        artifacts_dir,
        confirmations,
        timeout_secs,
    } = Cli::parse();

    tracing_subscriber::fmt().pretty().init();

    let client = setup_client(priv_key, rpc_url).await?;
    let chain = EvmClient::new(
        client,
        artifacts_dir.into(),
        confirmations,
        Duration::from_secs(timeout_secs),
    );

    deploy_subscription_contracts(&chain, network.as_deref(), &deployments_path).await?;

    Ok(())
}
