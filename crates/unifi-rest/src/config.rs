// ── Runtime connection configuration ──
//
// Describes *how* to reach one controller: where it lives, who to log in
// as, and where log messages go. Never touches disk; `unifi-rest-config`
// builds one of these from a file.

use std::time::Duration;

use secrecy::SecretString;
use url::Url;

use crate::logger::Logger;

/// Connection settings for a single controller.
#[derive(Debug, Clone)]
pub struct Config {
    /// Login username.
    pub user: String,
    /// Login password.
    pub pass: SecretString,
    /// Controller root (e.g. `https://192.168.1.1` or `https://controller:8443`).
    pub url: Url,
    /// Verify the controller's TLS certificate. Most controllers are self-signed.
    pub verify_ssl: bool,
    /// Controller runs new-style firmware (UniFi OS): `/proxy/network` prefix
    /// and the `/api/auth/login` endpoint.
    pub new: bool,
    /// Per-request timeout.
    pub timeout: Duration,
    /// Sink for errors the client recovers from.
    pub error_log: Logger,
    /// Sink for progress chatter.
    pub debug_log: Logger,
}

impl Config {
    /// Settings for `url` with both log sinks discarding and TLS
    /// verification off.
    pub fn new(url: Url, user: impl Into<String>, pass: SecretString) -> Self {
        Self {
            user: user.into(),
            pass,
            url,
            verify_ssl: false,
            new: false,
            timeout: Duration::from_secs(60),
            error_log: Logger::discard(),
            debug_log: Logger::discard(),
        }
    }

    pub fn with_verify_ssl(mut self, verify: bool) -> Self {
        self.verify_ssl = verify;
        self
    }

    pub fn with_new_firmware(mut self, new: bool) -> Self {
        self.new = new;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_error_log(mut self, logger: Logger) -> Self {
        self.error_log = logger;
        self
    }

    pub fn with_debug_log(mut self, logger: Logger) -> Self {
        self.debug_log = logger;
        self
    }

    /// The controller URL as a string without a trailing slash. Used to tag
    /// records with the controller they came from.
    pub fn source_name(&self) -> &str {
        self.url.as_str().trim_end_matches('/')
    }
}
