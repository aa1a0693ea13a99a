//! Constants used in the deploy scripts

/// The network name assumed when the invocation context does not supply one
pub const DEFAULT_NETWORK: &str = "dev";

/// The default path of the deployments file the contract addresses are
/// recorded in
pub const DEFAULT_DEPLOYMENTS_PATH: &str = "deployments.json";

/// The default directory containing the compiled contract artifacts
pub const DEFAULT_ARTIFACTS_DIR: &str = "artifacts";

/// The default number of confirmations to wait for a contract deployment
/// transaction
pub const DEFAULT_DEPLOY_CONFIRMATIONS: usize = 1;

/// The default number of seconds to wait for a contract deployment to be
/// confirmed before giving up
pub const DEFAULT_DEPLOY_TIMEOUT_SECS: u64 = 300;

/// The subscription payment contract key in the deployments file
pub const SUBSCRIPTION_PAYMENT_KEY: &str = "subscriptionPayment";

/// The subscription payment implementation contract key in the deployments
/// file
pub const SUBSCRIPTION_PAYMENT_IMPL_KEY: &str = "subscriptionPaymentImpl";

/// The initialization data passed to the implementation contract's
/// constructor, i.e. the empty byte string `0x`
pub const PAYMENT_IMPL_INIT_DATA: &[u8] = &[];

/// The file extension of a compiled contract artifact
pub const ARTIFACT_EXTENSION: &str = "json";
