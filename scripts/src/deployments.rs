//! The deployments file in which deployed contract addresses are recorded,
//! keyed by network

use std::{
    fs,
    path::{Path, PathBuf},
};

use json::JsonValue;

use crate::errors::ScriptError;

/// Builds the deployments-file key under which a contract's address is
/// recorded for the given network
pub fn network_key(network: &str, contract_key: &str) -> String {
    format!("{network}.{contract_key}")
}

/// An in-memory view of the deployments file.
///
/// Loaded once at the start of a run, mutated in memory as contracts are
/// deployed, and flushed back to disk at most once via [`save`](Self::save).
/// Entries already present in the file (other networks, other contracts) are
/// preserved across a load/save cycle.
pub struct DeploymentsFile {
    /// The path the deployments are persisted at
    path: PathBuf,
    /// The parsed deployments object
    root: JsonValue,
}

impl DeploymentsFile {
    /// Load the deployments file at `path`, or start an empty one if no file
    /// exists there yet.
    ///
    /// The file is only created on [`save`](Self::save).
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ScriptError> {
        let path = path.as_ref().to_path_buf();
        if !path.exists() {
            return Ok(Self { path, root: JsonValue::new_object() });
        }

        let contents =
            fs::read_to_string(&path).map_err(|e| ScriptError::ConfigInit(e.to_string()))?;
        let root = json::parse(&contents).map_err(|e| ScriptError::ConfigInit(e.to_string()))?;
        if !root.is_object() {
            return Err(ScriptError::ConfigInit(format!(
                "expected a JSON object at {}",
                path.display()
            )));
        }

        Ok(Self { path, root })
    }

    /// Set the entry at `key` to `value`, overwriting any previous entry.
    ///
    /// Keys are dotted paths (e.g. `dev.subscriptionPayment`); intermediate
    /// objects are created as needed.
    pub fn set(&mut self, key: &str, value: &str) {
        let mut node = &mut self.root;
        for part in key.split('.') {
            node = &mut node[part];
        }
        *node = JsonValue::String(value.to_owned());
    }

    /// Look up the entry at the dotted path `key`
    pub fn get(&self, key: &str) -> Option<&str> {
        let mut node = &self.root;
        for part in key.split('.') {
            node = &node[part];
        }
        node.as_str()
    }

    /// Persist the in-memory deployments back to the file
    pub fn save(&self) -> Result<(), ScriptError> {
        fs::write(&self.path, json::stringify_pretty(self.root.clone(), 4))
            .map_err(|e| ScriptError::ConfigPersist(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_network_key() {
        assert_eq!(network_key("dev", "subscriptionPayment"), "dev.subscriptionPayment");
        assert_eq!(
            network_key("staging", "subscriptionPaymentImpl"),
            "staging.subscriptionPaymentImpl"
        );
    }

    #[test]
    fn test_load_missing_file_starts_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("deployments.json");

        let deployments = DeploymentsFile::load(&path).unwrap();
        assert_eq!(deployments.get("dev.subscriptionPayment"), None);
        // No file is created until `save`
        assert!(!path.exists());
    }

    #[test]
    fn test_load_rejects_corrupt_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("deployments.json");
        fs::write(&path, "not json at all").unwrap();

        let res = DeploymentsFile::load(&path);
        assert!(matches!(res, Err(ScriptError::ConfigInit(_))));
    }

    #[test]
    fn test_load_rejects_non_object_root() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("deployments.json");
        fs::write(&path, "[1, 2, 3]").unwrap();

        let res = DeploymentsFile::load(&path);
        assert!(matches!(res, Err(ScriptError::ConfigInit(_))));
    }

    #[test]
    fn test_set_creates_nested_objects() {
        let dir = tempfile::tempdir().unwrap();
        let mut deployments =
            DeploymentsFile::load(dir.path().join("deployments.json")).unwrap();

        deployments.set("staging.subscriptionPayment", "0xabcd");
        assert_eq!(deployments.get("staging.subscriptionPayment"), Some("0xabcd"));
        assert_eq!(deployments.get("staging.subscriptionPaymentImpl"), None);
    }

    #[test]
    fn test_set_overwrites_existing_value() {
        let dir = tempfile::tempdir().unwrap();
        let mut deployments =
            DeploymentsFile::load(dir.path().join("deployments.json")).unwrap();

        deployments.set("dev.subscriptionPayment", "0x1111");
        deployments.set("dev.subscriptionPayment", "0x2222");
        assert_eq!(deployments.get("dev.subscriptionPayment"), Some("0x2222"));
    }

    #[test]
    fn test_save_round_trips_and_preserves_existing_entries() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("deployments.json");
        fs::write(&path, r#"{ "mainnet": { "subscriptionPayment": "0xffff" } }"#).unwrap();

        let mut deployments = DeploymentsFile::load(&path).unwrap();
        deployments.set("dev.subscriptionPayment", "0x1111");
        deployments.save().unwrap();

        let reloaded = DeploymentsFile::load(&path).unwrap();
        assert_eq!(reloaded.get("dev.subscriptionPayment"), Some("0x1111"));
        assert_eq!(reloaded.get("mainnet.subscriptionPayment"), Some("0xffff"));
    }
}
