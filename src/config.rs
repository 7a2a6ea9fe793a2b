use crate::Result;
use lib_config::{Config as LibConfig, Environment};
use serde::{Deserialize, Serialize};

/// Public mirror of the per-generation set dumps the viewer bundles.
const DEFAULT_DATA_URL: &str = "https://pkmn.github.io/smogon/data/sets";

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    /// Base url the `gen{N}.json` documents live under.
    pub data_url: String,
}

impl Config {
    /// Defaults overridable from the environment (`DATA_URL=...`).
    pub fn from_env() -> Result<Self> {
        let mut config = LibConfig::new();

        config.set_default("data_url", DEFAULT_DATA_URL)?;
        config.merge(Environment::new())?;

        let res = config.try_into()?;
        Ok(res)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_url: DEFAULT_DATA_URL.to_owned(),
        }
    }
}
