use anyhow::{Context, Result};
use serde_json::Value;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Configuration keys enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConfigKey {
    Accounts,
    ApiUrl,
}

impl ConfigKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConfigKey::Accounts => "accounts",
            ConfigKey::ApiUrl => "api_url",
        }
    }

    /// Get all config keys
    pub fn all() -> &'static [ConfigKey] {
        &[ConfigKey::Accounts, ConfigKey::ApiUrl]
    }
}

/// Filename for the project-specific configuration within the .mstone directory.
pub const PROJECT_CONFIG_FILENAME: &str = "config.json";
/// Directory name for project-specific configuration.
pub const PROJECT_CONFIG_DIR: &str = ".mstone";

/// Parses a JSON configuration file content into a map of configuration values.
///
/// Expects `content` to be a JSON object with configuration keys
/// (e.g., {"accounts": [...], "api_url": "..."}).
///
/// - Returns `Ok(HashMap<ConfigKey, Value>)` containing the known keys; unknown keys are skipped.
/// - Returns an empty HashMap if the input `content` is empty or contains only whitespace.
/// - Returns an `Err` if the JSON parsing fails or the top-level value is not an object.
pub fn parse_config(content: &[u8]) -> Result<HashMap<ConfigKey, Value>> {
    if content.iter().all(|b| b.is_ascii_whitespace()) {
        return Ok(HashMap::new());
    }

    let value: Value = serde_json::from_slice(content).context("Failed to parse config JSON")?;

    if let Value::Object(map) = &value {
        let config_map = ConfigKey::all()
            .iter()
            .filter_map(|key| map.get(key.as_str()).map(|val| (*key, val.clone())))
            .collect();
        return Ok(config_map);
    }

    Err(anyhow::anyhow!("Config must be a JSON object"))
}

/// Typed view of the configuration handed to the script service.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GithubConfiguration {
    /// GitHub account names offered to the host.
    pub accounts: Vec<String>,
    /// Override for the REST API root. `None` means public GitHub.
    pub api_url: Option<String>,
}

impl GithubConfiguration {
    pub fn from_config_map(config: &HashMap<ConfigKey, Value>) -> Result<Self> {
        let accounts = match config.get(&ConfigKey::Accounts) {
            None => Vec::new(),
            Some(Value::Array(items)) => items
                .iter()
                .map(|item| {
                    item.as_str()
                        .map(str::to_string)
                        .ok_or_else(|| anyhow::anyhow!("`accounts` must only contain strings"))
                })
                .collect::<Result<Vec<_>>>()?,
            Some(_) => return Err(anyhow::anyhow!("`accounts` must be an array of strings")),
        };

        let api_url = match config.get(&ConfigKey::ApiUrl) {
            None | Some(Value::Null) => None,
            Some(Value::String(url)) => Some(url.clone()),
            Some(_) => return Err(anyhow::anyhow!("`api_url` must be a string")),
        };

        Ok(GithubConfiguration { accounts, api_url })
    }

    pub fn github_accounts(&self) -> &[String] {
        &self.accounts
    }
}

/// Path of the project configuration below `dir`.
pub fn project_config_path(dir: &Path) -> PathBuf {
    dir.join(PROJECT_CONFIG_DIR).join(PROJECT_CONFIG_FILENAME)
}

/// Loads the configuration at `path`. A missing file yields the defaults.
pub fn load_config(path: &Path) -> Result<GithubConfiguration> {
    let content = match std::fs::read(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            log::debug!("No config file at {}, using defaults", path.display());
            return Ok(GithubConfiguration::default());
        }
        Err(e) => {
            return Err(e)
                .with_context(|| format!("Failed to read config file {}", path.display()));
        }
    };
    let config_map = parse_config(&content)?;
    GithubConfiguration::from_config_map(&config_map)
        .with_context(|| format!("Invalid config file {}", path.display()))
}
