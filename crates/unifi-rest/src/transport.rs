// Transport configuration for building reqwest::Client instances.
//
// The session client and the firmware probe share TLS and timeout settings
// through this module; only the cookie jar and redirect policy differ.

use std::sync::Arc;
use std::time::Duration;

use reqwest::cookie::Jar;
use reqwest::redirect;

use crate::config::Config;
use crate::error::Error;

const USER_AGENT: &str = concat!("unifi-rest/", env!("CARGO_PKG_VERSION"));

/// Settings used to build an HTTP client for one controller.
#[derive(Debug, Clone)]
pub struct TransportConfig {
    /// Verify the controller certificate against the system store.
    pub verify_ssl: bool,
    pub timeout: Duration,
    pub cookie_jar: Option<Arc<Jar>>,
    /// Follow HTTP redirects. Disabled for firmware detection.
    pub follow_redirects: bool,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            verify_ssl: false,
            timeout: Duration::from_secs(60),
            cookie_jar: None,
            follow_redirects: true,
        }
    }
}

impl From<&Config> for TransportConfig {
    fn from(config: &Config) -> Self {
        Self {
            verify_ssl: config.verify_ssl,
            timeout: config.timeout,
            ..Self::default()
        }
    }
}

impl TransportConfig {
    /// Build a `reqwest::Client` from this config.
    pub fn build_client(&self) -> Result<reqwest::Client, Error> {
        let mut builder = reqwest::Client::builder()
            .timeout(self.timeout)
            .user_agent(USER_AGENT);

        if !self.verify_ssl {
            builder = builder.danger_accept_invalid_certs(true);
        }

        if !self.follow_redirects {
            builder = builder.redirect(redirect::Policy::none());
        }

        if let Some(ref jar) = self.cookie_jar {
            builder = builder.cookie_provider(Arc::clone(jar));
        }

        builder
            .build()
            .map_err(|e| Error::Tls(format!("failed to build HTTP client: {e}")))
    }

    /// Create a config with a fresh cookie jar (for session auth).
    pub fn with_cookie_jar(mut self) -> Self {
        self.cookie_jar = Some(Arc::new(Jar::default()));
        self
    }

    /// Stop following redirects.
    pub fn without_redirects(mut self) -> Self {
        self.follow_redirects = false;
        self
    }
}
