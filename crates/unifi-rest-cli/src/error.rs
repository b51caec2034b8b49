//! CLI error types with miette diagnostics.
//!
//! Maps library and config errors into user-facing errors with help text.

use miette::Diagnostic;
use thiserror::Error;

use unifi_rest_config::ConfigError;

/// Process exit codes.
pub mod exit_code {
    pub const GENERAL: i32 = 1;
    pub const USAGE: i32 = 2;
    pub const AUTH: i32 = 3;
    pub const CONNECTION: i32 = 7;
    pub const TIMEOUT: i32 = 8;
}

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    // ── Connection ───────────────────────────────────────────────────
    #[error("Could not connect to controller at {url}")]
    #[diagnostic(
        code(unifi_rest::connection_failed),
        help(
            "Check that the controller is running and reachable.\n\
             Self-signed certificates need --insecure (-k)."
        )
    )]
    ConnectionFailed {
        url: String,
        #[source]
        source: unifi_rest::Error,
    },

    #[error("Request to {url} timed out")]
    #[diagnostic(
        code(unifi_rest::timeout),
        help("Raise `timeout` in the config file.")
    )]
    Timeout { url: String },

    // ── Authentication ───────────────────────────────────────────────
    #[error("{message}")]
    #[diagnostic(
        code(unifi_rest::auth_failed),
        help("Verify the username and password (--user / --pass or UNIFI_PASS).")
    )]
    AuthFailed { message: String },

    #[error("No password configured for user '{user}'")]
    #[diagnostic(
        code(unifi_rest::no_credentials),
        help("Set `pass` in the config file, pass --pass, or export UNIFI_PASS.")
    )]
    NoCredentials { user: String },

    // ── Configuration ────────────────────────────────────────────────
    #[error("invalid {field}: {reason}")]
    #[diagnostic(code(unifi_rest::validation))]
    Validation { field: String, reason: String },

    #[error("Failed to load configuration")]
    #[diagnostic(code(unifi_rest::config))]
    Config(#[source] ConfigError),

    // ── API ──────────────────────────────────────────────────────────
    #[error("Controller returned HTTP {status} for {url}")]
    #[diagnostic(code(unifi_rest::http_status))]
    HttpStatus { status: u16, url: String },

    #[error("API error: {message}")]
    #[diagnostic(code(unifi_rest::api_error))]
    Api { message: String },

    #[error("Unexpected response from controller: {message}")]
    #[diagnostic(
        code(unifi_rest::bad_response),
        help("Run with -vvv to see the request log.")
    )]
    BadResponse { message: String },

    // ── Output ───────────────────────────────────────────────────────
    #[error("Failed to render output")]
    #[diagnostic(code(unifi_rest::output))]
    Output(#[from] serde_json::Error),
}

impl CliError {
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::ConnectionFailed { .. } => exit_code::CONNECTION,
            Self::Timeout { .. } => exit_code::TIMEOUT,
            Self::AuthFailed { .. } | Self::NoCredentials { .. } => exit_code::AUTH,
            Self::Validation { .. } => exit_code::USAGE,
            _ => exit_code::GENERAL,
        }
    }
}

// ── Library error mapping ────────────────────────────────────────────

impl From<unifi_rest::Error> for CliError {
    fn from(err: unifi_rest::Error) -> Self {
        use unifi_rest::Error;

        match err {
            Error::Authentication { message } => Self::AuthFailed { message },

            Error::Transport(ref e) if e.is_timeout() => Self::Timeout {
                url: e.url().map(ToString::to_string).unwrap_or_default(),
            },

            Error::Transport(ref e) => {
                let url = e.url().map(ToString::to_string).unwrap_or_default();
                Self::ConnectionFailed { url, source: err }
            }

            Error::Tls(_) => Self::ConnectionFailed {
                url: String::new(),
                source: err,
            },

            Error::InvalidUrl(e) => Self::Validation {
                field: "url".into(),
                reason: e.to_string(),
            },

            Error::InvalidStatus { status: 401, url } => Self::AuthFailed {
                message: format!("Session rejected by {url} (HTTP 401)"),
            },

            Error::InvalidStatus { status, url } => Self::HttpStatus { status, url },

            Error::Api { message } => Self::Api { message },

            Error::Deserialization { message, .. } => Self::BadResponse { message },
        }
    }
}

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::NoCredentials { user } => Self::NoCredentials { user },
            ConfigError::Validation { field, reason } => Self::Validation { field, reason },
            other => Self::Config(other),
        }
    }
}
