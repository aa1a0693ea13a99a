//! Definitions of errors that can occur during the execution of the deploy scripts

use std::{
    error::Error,
    fmt::{self, Display, Formatter},
};

/// Errors that can occur during the execution of the deploy scripts.
///
/// Each variant identifies the stage of the workflow that failed; the payload
/// carries the underlying cause. All variants abort the run, and a run that
/// aborts never persists the deployments file.
#[derive(Debug)]
pub enum ScriptError {
    /// Error loading the deployments file into memory
    ConfigInit(String),
    /// No signer is configured / attached to the client
    SignerUnavailable(String),
    /// Error parsing a compiled contract artifact
    ArtifactParsing(String),
    /// Error submitting a contract deployment transaction
    DeploymentSubmission(String),
    /// A contract deployment was not confirmed in time
    DeploymentTimeout(String),
    /// Error persisting the deployments file
    ConfigPersist(String),
}

impl Display for ScriptError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ScriptError::ConfigInit(s) => write!(f, "error loading deployments file: {}", s),
            ScriptError::SignerUnavailable(s) => write!(f, "no signer available: {}", s),
            ScriptError::ArtifactParsing(s) => write!(f, "error parsing artifact: {}", s),
            ScriptError::DeploymentSubmission(s) => write!(f, "error deploying contract: {}", s),
            ScriptError::DeploymentTimeout(s) => {
                write!(f, "contract deployment not confirmed: {}", s)
            }
            ScriptError::ConfigPersist(s) => write!(f, "error writing deployments file: {}", s),
        }
    }
}

impl Error for ScriptError {}
