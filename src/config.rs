use serde::Deserialize;

use crate::constants::API_BASE_URL;

fn default_base_url() -> String {
    API_BASE_URL.to_string()
}

/// Settings read from `WANIKANI_*` environment variables.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Config {
    pub api_key: String,
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default)]
    pub max_results: Option<usize>,
}

impl Config {
    #[allow(clippy::wrong_self_convention)]
    pub fn from_env() -> Result<Self, envy::Error> {
        envy::prefixed("WANIKANI_").from_env()
    }

    pub fn from_vars<I>(vars: I) -> Result<Self, envy::Error>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        envy::prefixed("WANIKANI_").from_iter(vars)
    }
}
