//! Server configuration.
//!
//! Read from environment variables at startup:
//!
//! - `FARE_LISTEN_ADDR` - bind address (default `127.0.0.1:3000`)
//! - `FARE_NETWORK_FILE` - network snapshot JSON (default `network.json`)
//! - `FARE_POLICY_FILE` - optional fare policy JSON; defaults apply when unset
//! - `RUST_LOG` - log filter (default `info`)

use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::fare::{DiscountTable, FareError, FareTable};

/// Default bind address.
pub const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:3000";

/// Default network snapshot path.
pub const DEFAULT_NETWORK_FILE: &str = "network.json";

/// Errors while loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Listen address is not a socket address
    #[error("invalid FARE_LISTEN_ADDR {value:?}: {source}")]
    ListenAddr {
        value: String,
        source: std::net::AddrParseError,
    },

    /// Policy file could not be read
    #[error("failed to read fare policy {path:?}: {source}")]
    PolicyIo {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Policy file is not valid JSON for the expected shape
    #[error("failed to parse fare policy {path:?}: {source}")]
    PolicyJson {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// Policy values are unusable
    #[error("invalid fare policy: {0}")]
    Policy(#[from] FareError),
}

/// Process-level settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Address the HTTP server binds to.
    pub listen_addr: SocketAddr,

    /// Network snapshot to serve.
    pub network_file: PathBuf,

    /// Optional fare policy file.
    pub policy_file: Option<PathBuf>,
}

impl ServerConfig {
    /// Load configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through `lookup`, which maps a variable name to its value.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let listen = lookup("FARE_LISTEN_ADDR").unwrap_or_else(|| DEFAULT_LISTEN_ADDR.to_string());
        let listen_addr = listen
            .parse::<SocketAddr>()
            .map_err(|source| ConfigError::ListenAddr {
                value: listen.clone(),
                source,
            })?;

        let network_file = lookup("FARE_NETWORK_FILE")
            .unwrap_or_else(|| DEFAULT_NETWORK_FILE.to_string())
            .into();

        let policy_file = lookup("FARE_POLICY_FILE")
            .filter(|p| !p.is_empty())
            .map(PathBuf::from);

        Ok(Self {
            listen_addr,
            network_file,
            policy_file,
        })
    }

    /// Load the fare policy, or the defaults when no file is configured.
    pub fn load_policy(&self) -> Result<FarePolicy, ConfigError> {
        match &self.policy_file {
            Some(path) => FarePolicy::load(path),
            None => Ok(FarePolicy::default()),
        }
    }
}

/// Pricing configuration: the distance table and any rider discounts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FarePolicy {
    pub fares: FareTable,
    pub discounts: DiscountTable,
}

impl FarePolicy {
    /// Load and validate a policy file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::PolicyIo {
            path: path.to_path_buf(),
            source,
        })?;
        let policy: FarePolicy =
            serde_json::from_str(&json).map_err(|source| ConfigError::PolicyJson {
                path: path.to_path_buf(),
                source,
            })?;

        policy.validate()?;
        Ok(policy)
    }

    /// Check both tables.
    pub fn validate(&self) -> Result<(), FareError> {
        self.fares.validate()?;
        self.discounts.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fare::{DiscountRule, RiderCategory};
    use std::collections::HashMap;
    use std::io::Write;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults() {
        let config = ServerConfig::from_lookup(lookup(&[])).unwrap();

        assert_eq!(config.listen_addr, "127.0.0.1:3000".parse().unwrap());
        assert_eq!(config.network_file, PathBuf::from("network.json"));
        assert_eq!(config.policy_file, None);
        assert_eq!(config.load_policy().unwrap(), FarePolicy::default());
    }

    #[test]
    fn custom_values() {
        let config = ServerConfig::from_lookup(lookup(&[
            ("FARE_LISTEN_ADDR", "0.0.0.0:8080"),
            ("FARE_NETWORK_FILE", "/data/net.json"),
            ("FARE_POLICY_FILE", "/data/policy.json"),
        ]))
        .unwrap();

        assert_eq!(config.listen_addr, "0.0.0.0:8080".parse().unwrap());
        assert_eq!(config.network_file, PathBuf::from("/data/net.json"));
        assert_eq!(config.policy_file, Some(PathBuf::from("/data/policy.json")));
    }

    #[test]
    fn empty_policy_path_ignored() {
        let config = ServerConfig::from_lookup(lookup(&[("FARE_POLICY_FILE", "")])).unwrap();
        assert_eq!(config.policy_file, None);
    }

    #[test]
    fn bad_listen_addr() {
        let result = ServerConfig::from_lookup(lookup(&[("FARE_LISTEN_ADDR", "nowhere")]));
        assert!(matches!(result, Err(ConfigError::ListenAddr { .. })));
    }

    #[test]
    fn policy_file_loads() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"fares": {{"base_fare": 1350}}, "discounts": {{"youth": {{"deduction": 350, "percent_off": 20}}}}}}"#
        )
        .unwrap();

        let policy = FarePolicy::load(file.path()).unwrap();
        assert_eq!(policy.fares.base_fare, 1350);
        assert_eq!(policy.fares.free_distance, 10);
        assert_eq!(
            policy.discounts.youth,
            Some(DiscountRule {
                deduction: 350,
                percent_off: 20,
            })
        );
        assert_eq!(policy.discounts.apply(1250, RiderCategory::Child), 1250);
    }

    #[test]
    fn invalid_policy_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"fares": {{"long_tier_step": 0}}}}"#).unwrap();

        let result = FarePolicy::load(file.path());
        assert!(matches!(result, Err(ConfigError::Policy(_))));
    }

    #[test]
    fn bundled_policy_matches_defaults() {
        let path = concat!(env!("CARGO_MANIFEST_DIR"), "/data/policy.json");
        let policy = FarePolicy::load(path).unwrap();

        assert_eq!(policy.fares, FareTable::default());
        assert_eq!(policy.discounts, DiscountTable::default());
    }

    #[test]
    fn missing_policy_file() {
        let result = FarePolicy::load("/nonexistent/policy.json");
        assert!(matches!(result, Err(ConfigError::PolicyIo { .. })));
    }
}
