// Configuration type definitions

use std::path::PathBuf;

use serde::Deserialize;

/// Default dictionary endpoint; the word is appended as the last path segment
pub const DEFAULT_API_URL: &str = "https://api.dictionaryapi.dev/api/v2/entries/en/";

/// Dictionary API configuration section
#[derive(Debug, Clone, Deserialize)]
pub struct DictionaryConfig {
    #[serde(default = "default_api_url")]
    pub api_url: String,
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

impl Default for DictionaryConfig {
    fn default() -> Self {
        DictionaryConfig {
            api_url: default_api_url(),
        }
    }
}

/// Lookup cache configuration section
#[derive(Debug, Clone, Deserialize)]
pub struct CacheConfig {
    /// Keep lookups in a file between sessions
    #[serde(default = "default_persist")]
    pub persist: bool,
    /// Override for the cache file location
    #[serde(default)]
    pub path: Option<PathBuf>,
}

fn default_persist() -> bool {
    true
}

impl Default for CacheConfig {
    fn default() -> Self {
        CacheConfig {
            persist: true,
            path: None,
        }
    }
}

/// Hover configuration section
#[derive(Debug, Clone, Deserialize)]
pub struct HoverConfig {
    #[serde(default = "default_auto_show")]
    pub auto_show: bool,
}

fn default_auto_show() -> bool {
    true
}

impl Default for HoverConfig {
    fn default() -> Self {
        HoverConfig { auto_show: true }
    }
}

/// Root configuration structure
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub dictionary: DictionaryConfig,
    #[serde(default)]
    pub cache: CacheConfig,
    #[serde(default)]
    pub hover: HoverConfig,
}
