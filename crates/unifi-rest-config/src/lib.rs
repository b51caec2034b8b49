//! Configuration file support for `unifi-rest`.
//!
//! One TOML file describes one controller. Values layer as built-in
//! defaults, then the file, then `UNIFI_`-prefixed environment variables.
//! [`FileConfig::to_client_config`] turns the result into the library's
//! runtime [`unifi_rest::Config`].

use std::path::{Path, PathBuf};
use std::time::Duration;

use directories::ProjectDirs;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Environment variable consulted first for the controller password.
pub const PASS_ENV: &str = "UNIFI_PASS";

/// Site selector meaning "every site the user can see".
pub const ALL_SITES: &str = "all";

// ── Error ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {field}: {reason}")]
    Validation { field: String, reason: String },

    #[error("no password configured for user '{user}'")]
    NoCredentials { user: String },

    #[error("failed to serialize config: {0}")]
    Serialization(#[from] toml::ser::Error),

    #[error("config loading failed: {0}")]
    Figment(Box<figment::Error>),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Figment(Box::new(err))
    }
}

// ── TOML config struct ──────────────────────────────────────────────

/// On-disk controller configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct FileConfig {
    /// Controller base URL (e.g., "https://192.168.1.1").
    #[serde(default = "default_url")]
    pub url: String,

    #[serde(default = "default_user")]
    pub user: String,

    /// Password (plaintext; prefer `UNIFI_PASS`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pass: Option<String>,

    #[serde(default)]
    pub verify_ssl: bool,

    /// New-style firmware. Absent means probe the controller.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub new: Option<bool>,

    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout: u64,

    /// Site names to poll; `all` selects every site.
    #[serde(default = "default_sites")]
    pub sites: Vec<String>,
}

impl Default for FileConfig {
    fn default() -> Self {
        Self {
            url: default_url(),
            user: default_user(),
            pass: None,
            verify_ssl: false,
            new: None,
            timeout: default_timeout(),
            sites: default_sites(),
        }
    }
}

fn default_url() -> String {
    "https://127.0.0.1:8443".into()
}
fn default_user() -> String {
    "unifi".into()
}
fn default_timeout() -> u64 {
    60
}
fn default_sites() -> Vec<String> {
    vec![ALL_SITES.into()]
}

impl FileConfig {
    /// Controller URL, parsed.
    pub fn parsed_url(&self) -> Result<url::Url, ConfigError> {
        self.url.parse().map_err(|e| ConfigError::Validation {
            field: "url".into(),
            reason: format!("{e}: {}", self.url),
        })
    }

    /// Password from `UNIFI_PASS`, then from the file.
    pub fn resolve_password(&self) -> Result<SecretString, ConfigError> {
        if let Ok(pw) = std::env::var(PASS_ENV) {
            return Ok(SecretString::from(pw));
        }

        if let Some(ref pw) = self.pass {
            return Ok(SecretString::from(pw.clone()));
        }

        Err(ConfigError::NoCredentials {
            user: self.user.clone(),
        })
    }

    /// True when the site list selects every site.
    pub fn all_sites(&self) -> bool {
        self.sites.is_empty() || self.sites.iter().any(|s| s.eq_ignore_ascii_case(ALL_SITES))
    }

    /// Build the library's runtime config. `new` is the firmware style to
    /// use; callers decide it from [`FileConfig::new`] or by probing.
    pub fn to_client_config(&self, new: bool) -> Result<unifi_rest::Config, ConfigError> {
        let url = self.parsed_url()?;
        let pass = self.resolve_password()?;

        Ok(unifi_rest::Config::new(url, self.user.clone(), pass)
            .with_verify_ssl(self.verify_ssl)
            .with_new_firmware(new)
            .with_timeout(Duration::from_secs(self.timeout)))
    }
}

// ── Config file path ────────────────────────────────────────────────

/// Resolve the config file path via XDG / platform conventions.
pub fn config_path() -> PathBuf {
    ProjectDirs::from("com", "unifi-rest", "unifi-rest").map_or_else(
        || {
            let mut p = dirs_fallback();
            p.push("config.toml");
            p
        },
        |dirs| dirs.config_dir().join("config.toml"),
    )
}

fn dirs_fallback() -> PathBuf {
    let mut p = PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".into()));
    p.push(".config");
    p.push("unifi-rest");
    p
}

// ── Config loading ──────────────────────────────────────────────────

/// Load from the canonical config path + environment.
pub fn load_config() -> Result<FileConfig, ConfigError> {
    load_config_from(&config_path())
}

/// Load from `path` + environment. A missing file leaves the defaults.
pub fn load_config_from(path: &Path) -> Result<FileConfig, ConfigError> {
    let figment = Figment::new()
        .merge(Serialized::defaults(FileConfig::default()))
        .merge(Toml::file(path))
        .merge(Env::prefixed("UNIFI_"));

    let config: FileConfig = figment.extract()?;
    Ok(config)
}

// ── Config saving ───────────────────────────────────────────────────

/// Write to the canonical config path.
pub fn save_config(cfg: &FileConfig) -> Result<(), ConfigError> {
    save_config_to(cfg, &config_path())
}

/// Serialize config to TOML and write it to `path`, creating parent dirs.
pub fn save_config_to(cfg: &FileConfig, path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let toml_str = toml::to_string_pretty(cfg)?;
    std::fs::write(path, toml_str)?;
    Ok(())
}
