//! Implementation of the deploy workflow

use ethers::{abi::Token, types::Address};
use tracing::info;

use crate::{
    chain::{ChainClient, SubscriptionContract},
    constants::{
        DEFAULT_NETWORK, PAYMENT_IMPL_INIT_DATA, SUBSCRIPTION_PAYMENT_IMPL_KEY,
        SUBSCRIPTION_PAYMENT_KEY,
    },
    deployments::{network_key, DeploymentsFile},
    errors::ScriptError,
};

/// The addresses resulting from a completed deployment run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeploymentReport {
    /// The account the contracts were deployed from
    pub deployer: Address,
    /// The address of the payment entry point contract
    pub subscription_payment: Address,
    /// The address of the payment implementation contract
    pub subscription_payment_impl: Address,
}

impl DeploymentReport {
    /// The progress lines reported to the operator once both contracts have
    /// been deployed
    pub fn report_lines(&self) -> Vec<String> {
        vec![
            format!("SubscriptionPayment address: {:#x}", self.subscription_payment),
            format!("SubscriptionPaymentImpl address: {:#x}", self.subscription_payment_impl),
        ]
    }
}

/// Deploy the subscription payment contracts and record their addresses in
/// the deployments file under the given network's namespace.
///
/// The deployments file is only persisted once both contracts have been
/// deployed and both addresses recorded; a run that fails partway leaves the
/// file on disk as it was.
pub async fn deploy_subscription_contracts(
    chain: &impl ChainClient,
    network: Option<&str>,
    deployments_path: &str,
) -> Result<DeploymentReport, ScriptError> {
    let mut deployments = DeploymentsFile::load(deployments_path)?;
    let network = network.unwrap_or(DEFAULT_NETWORK);

    let deployer = chain.deployer_address().await?;
    info!("Deploying contracts with the account: {deployer:#x}");

    let subscription_payment =
        chain.deploy_contract(SubscriptionContract::Payment, vec![]).await?;
    deployments.set(
        &network_key(network, SUBSCRIPTION_PAYMENT_KEY),
        &format!("{subscription_payment:#x}"),
    );

    let subscription_payment_impl = chain
        .deploy_contract(
            SubscriptionContract::PaymentImpl,
            vec![Token::Bytes(PAYMENT_IMPL_INIT_DATA.to_vec())],
        )
        .await?;
    deployments.set(
        &network_key(network, SUBSCRIPTION_PAYMENT_IMPL_KEY),
        &format!("{subscription_payment_impl:#x}"),
    );

    let report =
        DeploymentReport { deployer, subscription_payment, subscription_payment_impl };
    for line in report.report_lines() {
        info!("{line}");
    }

    deployments.save()?;

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_lines() {
        let report = DeploymentReport {
            deployer: Address::repeat_byte(0xab),
            subscription_payment: Address::repeat_byte(0x11),
            subscription_payment_impl: Address::repeat_byte(0x22),
        };

        let lines = report.report_lines();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("SubscriptionPayment address:"));
        assert!(lines[0].ends_with(&format!("{:#x}", report.subscription_payment)));
        assert!(lines[1].starts_with("SubscriptionPaymentImpl address:"));
        assert!(lines[1].ends_with(&format!("{:#x}", report.subscription_payment_impl)));
    }
}
