//! Server configuration from environment variables.
//!
//! | Variable | Meaning | Default |
//! |---|---|---|
//! | `TRIP_BIND_ADDR` | listen address | `127.0.0.1:3000` |
//! | `TRIP_CATALOG_PATH` | JSON catalog file | |
//! | `TRIP_CATALOG_URL` | remote catalog base URL | |
//! | `TRIP_CATALOG_API_KEY` | API key for the remote catalog | |
//! | `TRIP_CATALOG_TTL_SECS` | remote snapshot cache TTL | `300` |
//! | `TRIP_COST_ESTIMATOR` | `random` or `category` | `random` |
//!
//! Exactly one of `TRIP_CATALOG_PATH` and `TRIP_CATALOG_URL` must be set.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use crate::catalog::{CacheConfig, CatalogClientConfig};
use crate::planner::CostModel;

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";

/// Errors in the server configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// A variable is set but cannot be parsed
    #[error("invalid {var}: {message}")]
    Invalid { var: &'static str, message: String },

    /// No catalog source configured
    #[error("no catalog configured: set TRIP_CATALOG_PATH or TRIP_CATALOG_URL")]
    MissingCatalog,

    /// Both catalog sources configured
    #[error("TRIP_CATALOG_PATH and TRIP_CATALOG_URL are mutually exclusive")]
    ConflictingCatalog,
}

/// Where the catalog comes from.
#[derive(Debug, Clone)]
pub enum CatalogLocation {
    File(PathBuf),
    Remote(CatalogClientConfig),
}

/// Everything needed to start the server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    pub catalog: CatalogLocation,
    pub cache: CacheConfig,
    pub cost_model: CostModel,
}

impl ServerConfig {
    /// Read the configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Read the configuration through `lookup`, which returns a variable's
    /// value if it is set.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        // Blank values count as unset
        let get = |var: &str| lookup(var).filter(|v| !v.trim().is_empty());

        let bind = get("TRIP_BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind.parse().map_err(|e| ConfigError::Invalid {
            var: "TRIP_BIND_ADDR",
            message: format!("{bind:?}: {e}"),
        })?;

        let catalog = match (get("TRIP_CATALOG_PATH"), get("TRIP_CATALOG_URL")) {
            (Some(_), Some(_)) => return Err(ConfigError::ConflictingCatalog),
            (None, None) => return Err(ConfigError::MissingCatalog),
            (Some(path), None) => CatalogLocation::File(PathBuf::from(path)),
            (None, Some(url)) => {
                let mut client = CatalogClientConfig::new(url);
                if let Some(key) = get("TRIP_CATALOG_API_KEY") {
                    client = client.with_api_key(key);
                }
                CatalogLocation::Remote(client)
            }
        };

        let mut cache = CacheConfig::default();
        if let Some(ttl) = get("TRIP_CATALOG_TTL_SECS") {
            let secs: u64 = ttl.trim().parse().map_err(|e| ConfigError::Invalid {
                var: "TRIP_CATALOG_TTL_SECS",
                message: format!("{ttl:?}: {e}"),
            })?;
            cache.ttl = Duration::from_secs(secs);
        }

        let cost_model = match get("TRIP_COST_ESTIMATOR") {
            Some(name) => name.parse().map_err(|e: crate::planner::UnknownCostModel| {
                ConfigError::Invalid {
                    var: "TRIP_COST_ESTIMATOR",
                    message: e.to_string(),
                }
            })?,
            None => CostModel::default(),
        };

        Ok(Self {
            bind_addr,
            catalog,
            cache,
            cost_model,
        })
    }
}
