//! Process-wide API configuration.
//!
//! Built once at startup from the environment and an optional TOML file,
//! then passed by reference to every component that needs it. Nothing in
//! this crate mutates configuration after construction.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default API base URL.
pub const DEFAULT_API_URL: &str = "https://api.cumulo.io";

/// Errors raised while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file could not be read or parsed.
    #[error("config file {path}: {reason}")]
    File {
        /// Path of the offending file.
        path: String,
        /// Read or parse failure description.
        reason: String,
    },

    /// No API token is configured.
    #[error("no api token configured; set CUMULO_TOKEN or add `token` to the config file")]
    MissingToken,
}

/// Connection settings and account defaults for the Cumulo API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the API, without a trailing path.
    pub api_url: String,
    /// Bearer token sent with every request.
    pub token: String,
    /// Region used when a command does not name one.
    pub default_region: String,
    /// Account used when a command does not name one.
    pub default_account: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            token: String::new(),
            default_region: String::new(),
            default_account: String::new(),
        }
    }
}

/// On-disk shape of the config file. All keys optional.
#[derive(Debug, Default, Deserialize)]
struct FileConfig {
    api_url: Option<String>,
    token: Option<String>,
    default_region: Option<String>,
    default_account: Option<String>,
}

impl ApiConfig {
    /// Load configuration from the config file and the environment.
    ///
    /// Precedence, lowest to highest: built-in defaults, the TOML file
    /// (`explicit_path`, or `$HOME/.cumulo.toml` when present), then the
    /// `CUMULO_URL` / `CUMULO_TOKEN` / `CUMULO_REGION` / `CUMULO_ACCOUNT`
    /// environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if an explicitly named file is missing or not
    /// valid TOML. A missing default file is not an error.
    pub fn load(explicit_path: Option<&Path>) -> Result<Self, ConfigError> {
        Self::load_with(explicit_path, |name| std::env::var(name).ok())
    }

    /// Fail unless a token is configured.
    ///
    /// Called once before the first request is built, so a missing token
    /// surfaces as a configuration error rather than a 401 from the API.
    pub fn require_token(&self) -> Result<(), ConfigError> {
        if self.token.is_empty() {
            return Err(ConfigError::MissingToken);
        }
        Ok(())
    }

    fn load_with(
        explicit_path: Option<&Path>,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(file) = read_file_config(explicit_path)? {
            if let Some(url) = file.api_url {
                config.api_url = url;
            }
            if let Some(token) = file.token {
                config.token = token;
            }
            if let Some(region) = file.default_region {
                config.default_region = region;
            }
            if let Some(account) = file.default_account {
                config.default_account = account;
            }
        }

        if let Some(url) = env("CUMULO_URL") {
            config.api_url = url;
        }
        if let Some(token) = env("CUMULO_TOKEN") {
            config.token = token;
        }
        if let Some(region) = env("CUMULO_REGION") {
            config.default_region = region;
        }
        if let Some(account) = env("CUMULO_ACCOUNT") {
            config.default_account = account;
        }

        Ok(config)
    }
}

fn read_file_config(explicit_path: Option<&Path>) -> Result<Option<FileConfig>, ConfigError> {
    let path = match explicit_path {
        Some(path) => path.to_path_buf(),
        None => match default_path() {
            Some(path) if path.exists() => path,
            _ => return Ok(None),
        },
    };

    let raw = std::fs::read_to_string(&path).map_err(|e| ConfigError::File {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;
    let parsed = toml::from_str(&raw).map_err(|e| ConfigError::File {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;
    Ok(Some(parsed))
}

fn default_path() -> Option<PathBuf> {
    std::env::var_os("HOME").map(|home| Path::new(&home).join(".cumulo.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn no_env(_name: &str) -> Option<String> {
        None
    }

    #[test]
    fn default_config_points_at_public_api() {
        let config = ApiConfig::default();
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert!(config.token.is_empty());
        assert!(config.default_region.is_empty());
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().expect("tempfile");
        writeln!(
            file,
            "api_url = \"https://api.example.com\"\ntoken = \"secret\"\ndefault_region = \"lon1\""
        )
        .expect("write config");

        let config = ApiConfig::load_with(Some(file.path()), no_env).expect("load");
        assert_eq!(config.api_url, "https://api.example.com");
        assert_eq!(config.token, "secret");
        assert_eq!(config.default_region, "lon1");
        assert!(config.default_account.is_empty());
    }

    #[test]
    fn env_overrides_file() {
        let mut file = tempfile::NamedTempFile::new().expect("tempfile");
        writeln!(file, "token = \"from-file\"").expect("write config");

        let config = ApiConfig::load_with(Some(file.path()), |name| match name {
            "CUMULO_TOKEN" => Some("from-env".to_string()),
            _ => None,
        })
        .expect("load");
        assert_eq!(config.token, "from-env");
    }

    #[test]
    fn env_alone_is_enough() {
        let config = ApiConfig::load_with(None, |name| match name {
            "CUMULO_URL" => Some("http://localhost:9000".to_string()),
            "CUMULO_TOKEN" => Some("t".to_string()),
            "CUMULO_ACCOUNT" => Some("acme".to_string()),
            _ => None,
        })
        .expect("load");
        assert_eq!(config.api_url, "http://localhost:9000");
        assert_eq!(config.default_account, "acme");
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let result = ApiConfig::load_with(Some(Path::new("/nonexistent/cumulo.toml")), no_env);
        assert!(matches!(result, Err(ConfigError::File { .. })));
    }

    #[test]
    fn invalid_toml_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().expect("tempfile");
        writeln!(file, "api_url = [not toml").expect("write config");

        let result = ApiConfig::load_with(Some(file.path()), no_env);
        assert!(matches!(result, Err(ConfigError::File { .. })));
    }

    #[test]
    fn require_token_rejects_empty() {
        let config = ApiConfig::default();
        assert!(matches!(
            config.require_token(),
            Err(ConfigError::MissingToken)
        ));

        let config = ApiConfig {
            token: "t".to_string(),
            ..ApiConfig::default()
        };
        assert!(config.require_token().is_ok());
    }
}
