//! Client setup and contract deployment against a JSON-RPC node

use std::{
    fmt::{self, Display},
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
    str::FromStr,
    sync::Arc,
    time::Duration,
};

use async_trait::async_trait;
use ethers::{
    abi::{Abi, Token},
    contract::ContractFactory,
    middleware::SignerMiddleware,
    providers::{Http, Middleware, Provider},
    signers::{LocalWallet, Signer},
    types::{Address, Bytes},
};
use serde::Deserialize;
use tokio::time::timeout;

use crate::{constants::ARTIFACT_EXTENSION, errors::ScriptError};

/// The contracts deployed by this script
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubscriptionContract {
    /// The payment entry point contract, the stable address clients
    /// interact with
    Payment,
    /// The implementation contract holding the payment logic
    PaymentImpl,
}

impl SubscriptionContract {
    /// The contract's name, as used for its compiled artifact
    pub fn name(&self) -> &'static str {
        match self {
            SubscriptionContract::Payment => "SubscriptionPayment",
            SubscriptionContract::PaymentImpl => "SubscriptionPaymentImpl",
        }
    }
}

impl Display for SubscriptionContract {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A compiled contract artifact, as emitted by the contract build pipeline
#[derive(Deserialize)]
pub struct ContractArtifact {
    /// The contract's ABI
    pub abi: Abi,
    /// The contract's creation bytecode, hex-encoded
    pub bytecode: Bytes,
}

impl ContractArtifact {
    /// Read the artifact at the given path
    pub fn read(path: &Path) -> Result<Self, ScriptError> {
        let file = File::open(path)
            .map_err(|e| ScriptError::ArtifactParsing(format!("{}: {}", path.display(), e)))?;
        serde_json::from_reader(BufReader::new(file))
            .map_err(|e| ScriptError::ArtifactParsing(format!("{}: {}", path.display(), e)))
    }
}

/// The interface to the chain used by the deploy workflow.
///
/// Implementations are responsible for waiting until a deployment has been
/// confirmed before returning its address.
#[async_trait]
pub trait ChainClient {
    /// The address of the account that submits and pays for the deployment
    /// transactions
    async fn deployer_address(&self) -> Result<Address, ScriptError>;

    /// Deploy the given contract with the given constructor arguments,
    /// returning the address it was deployed at
    async fn deploy_contract(
        &self,
        contract: SubscriptionContract,
        constructor_args: Vec<Token>,
    ) -> Result<Address, ScriptError>;
}

/// Sets up the client with which to submit deployment transactions, from the
/// deployer's private key and the network RPC URL
pub async fn setup_client(
    priv_key: String,
    rpc_url: String,
) -> Result<Arc<impl Middleware>, ScriptError> {
    let provider = Provider::<Http>::try_from(rpc_url)
        .map_err(|e| ScriptError::SignerUnavailable(e.to_string()))?;

    let wallet = LocalWallet::from_str(&priv_key)
        .map_err(|e| ScriptError::SignerUnavailable(e.to_string()))?;
    let chain_id = provider
        .get_chainid()
        .await
        .map_err(|e| ScriptError::SignerUnavailable(e.to_string()))?
        .as_u64();
    let client = Arc::new(SignerMiddleware::new(provider, wallet.with_chain_id(chain_id)));

    Ok(client)
}

/// A [`ChainClient`] deploying through a JSON-RPC node, with contract ABIs
/// and bytecode read from compiled artifact files
pub struct EvmClient<M> {
    /// The underlying RPC client, with the deployer's signer attached
    client: Arc<M>,
    /// The directory the compiled contract artifacts live in
    artifacts_dir: PathBuf,
    /// The number of confirmations to wait for on each deployment
    confirmations: usize,
    /// The maximum time to wait for a deployment to be confirmed
    deploy_timeout: Duration,
}

impl<M: Middleware> EvmClient<M> {
    /// Construct a new client
    pub fn new(
        client: Arc<M>,
        artifacts_dir: PathBuf,
        confirmations: usize,
        deploy_timeout: Duration,
    ) -> Self {
        Self { client, artifacts_dir, confirmations, deploy_timeout }
    }

    /// The path of the given contract's compiled artifact
    fn artifact_path(&self, contract: SubscriptionContract) -> PathBuf {
        self.artifacts_dir.join(format!("{}.{}", contract.name(), ARTIFACT_EXTENSION))
    }
}

#[async_trait]
impl<M: Middleware + 'static> ChainClient for EvmClient<M> {
    async fn deployer_address(&self) -> Result<Address, ScriptError> {
        self.client.default_sender().ok_or_else(|| {
            ScriptError::SignerUnavailable("client does not have a sender attached".to_string())
        })
    }

    async fn deploy_contract(
        &self,
        contract: SubscriptionContract,
        constructor_args: Vec<Token>,
    ) -> Result<Address, ScriptError> {
        let artifact = ContractArtifact::read(&self.artifact_path(contract))?;
        let factory = ContractFactory::new(artifact.abi, artifact.bytecode, self.client.clone());

        let deployer = factory
            .deploy_tokens(constructor_args)
            .map_err(|e| ScriptError::DeploymentSubmission(e.to_string()))?
            .confirmations(self.confirmations);

        let deployed = timeout(self.deploy_timeout, deployer.send())
            .await
            .map_err(|_| {
                ScriptError::DeploymentTimeout(format!(
                    "{} not confirmed within {}s",
                    contract,
                    self.deploy_timeout.as_secs()
                ))
            })?
            .map_err(|e| ScriptError::DeploymentSubmission(e.to_string()))?;

        Ok(deployed.address())
    }
}
