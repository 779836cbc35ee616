use std::env;
use std::str::FromStr;

use crate::core::error::Error;
use crate::core::error::Error::ConfigError;

pub const SHARDS_VAR: &str = "ESMAP_SHARDS";
pub const REPLICAS_VAR: &str = "ESMAP_REPLICAS";

/// Shard and replica counts written into generated index settings.
///
/// A count of zero is not written out, it means "use the engine default".
/// Elasticsearch then keeps one replica, so `ESMAP_REPLICAS=0` does not give
/// a replica-free index.
#[derive(Clone, Debug, PartialEq)]
pub struct IndexConfig {
    pub shards: i32,
    pub replicas: i32,
}

impl Default for IndexConfig {
    fn default() -> Self {
        IndexConfig {
            shards: 1,
            replicas: 1,
        }
    }
}

impl IndexConfig {
    /// Reads counts from the environment, loading `.env` first if there is one.
    /// Unset variables keep their defaults.
    pub fn from_env() -> Result<Self, Error> {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = IndexConfig::default();
        Ok(IndexConfig {
            shards: parse_var(&lookup, SHARDS_VAR)?.unwrap_or(defaults.shards),
            replicas: parse_var(&lookup, REPLICAS_VAR)?.unwrap_or(defaults.replicas),
        })
    }
}

fn parse_var<F, T>(lookup: &F, key: &str) -> Result<Option<T>, Error>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(key) {
        None => Ok(None),
        Some(raw) => raw.trim().parse().map(Some).map_err(|e: T::Err| ConfigError {
            key: key.to_string(),
            reason: format!("{:?}: {}", raw, e),
        }),
    }
}
