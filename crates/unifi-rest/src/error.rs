use thiserror::Error;

/// Top-level error type for the `unifi-rest` crate.
///
/// Field-level oddities (numbers sent as strings, strange boolean spellings)
/// never show up here; they are absorbed by [`FlexInt`](crate::FlexInt) and
/// [`FlexBool`](crate::FlexBool). What remains is transport, auth, and
/// responses that cannot be decoded at all.
#[derive(Debug, Error)]
pub enum Error {
    // ── Authentication ──────────────────────────────────────────────
    /// Login failed (wrong credentials, account locked, etc.)
    #[error("Authentication failed: {message}")]
    Authentication { message: String },

    // ── Transport ───────────────────────────────────────────────────
    /// HTTP transport error (connection refused, DNS failure, etc.)
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// TLS or HTTP client construction error.
    #[error("TLS error: {0}")]
    Tls(String),

    /// The controller answered with a non-success status code.
    #[error("Invalid status code from server {url}: HTTP {status}")]
    InvalidStatus { status: u16, url: String },

    // ── API ─────────────────────────────────────────────────────────
    /// Error reported inside the `{meta: {rc, msg}}` envelope.
    #[error("Controller API error: {message}")]
    Api { message: String },

    // ── Data ────────────────────────────────────────────────────────
    /// JSON deserialization failed, with the raw body for debugging.
    #[error("Deserialization error: {message}")]
    Deserialization { message: String, body: String },
}

impl Error {
    /// Returns `true` if this error indicates auth has expired
    /// and re-authentication might resolve it.
    pub fn is_auth_expired(&self) -> bool {
        matches!(
            self,
            Self::Authentication { .. } | Self::InvalidStatus { status: 401, .. }
        )
    }

    /// Returns `true` if this is a transient error worth retrying.
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Transport(e) => e.is_timeout() || e.is_connect(),
            Self::InvalidStatus { status, .. } => *status >= 500,
            _ => false,
        }
    }
}
