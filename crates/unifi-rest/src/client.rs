// Controller session handle
//
// `Unifi` composes the HTTP transport, the connection settings, the cached
// `/status` record and the CSRF token. Request mechanics (path resolution,
// CSRF handling, envelope unwrapping) live here; endpoint fetchers are
// inherent methods in `crate::endpoints`, one file per area.

use std::borrow::Cow;
use std::sync::{PoisonError, RwLock};
use std::time::Duration;

use reqwest::header::{ACCEPT, HeaderMap};
use secrecy::ExposeSecret;
use serde::de::DeserializeOwned;
use serde_json::json;
use tracing::{debug, trace};
use url::Url;

use crate::config::Config;
use crate::error::Error;
use crate::models::LegacyResponse;
use crate::models::server::{ServerStatus, StatusResponse};
use crate::paths;
use crate::transport::TransportConfig;

const CSRF_HEADER: &str = "X-CSRF-Token";
const UPDATED_CSRF_HEADER: &str = "X-Updated-CSRF-Token";

/// UniFi OS wraps some errors as `{"error":{"code":N,"message":"..."}}` with HTTP 200.
#[derive(serde::Deserialize)]
struct UnifiOsError {
    error: Option<UnifiOsErrorInner>,
}

#[derive(serde::Deserialize)]
struct UnifiOsErrorInner {
    code: u16,
    message: Option<String>,
}

/// An authenticated session with one controller.
///
/// Create one with [`Unifi::new`], which logs in and reads `/status`. Use
/// it to fetch sites, then pass those sites to the per-site fetchers.
pub struct Unifi {
    http: reqwest::Client,
    config: Config,
    server: ServerStatus,
    /// Anti-forgery token. Captured at login and rotated by the controller
    /// through response headers; sent on every request once known.
    csrf: RwLock<Option<String>>,
}

impl Unifi {
    /// Connect to a controller: build the transport, log in, and cache the
    /// server status.
    pub async fn new(config: Config) -> Result<Self, Error> {
        let http = TransportConfig::from(&config)
            .with_cookie_jar()
            .build_client()?;

        let mut unifi = Self::with_client(http, config);
        unifi.login().await?;
        unifi.get_server_data().await?;

        Ok(unifi)
    }

    /// Wrap a pre-built `reqwest::Client` without performing any I/O.
    ///
    /// The client should carry a cookie store if the session is going to
    /// log in through it.
    pub fn with_client(http: reqwest::Client, config: Config) -> Self {
        Self {
            http,
            config,
            server: ServerStatus::default(),
            csrf: RwLock::new(None),
        }
    }

    /// Probe the controller root with redirects disabled. New-style firmware
    /// serves its web UI there (HTTP 200); legacy controllers redirect.
    pub async fn detect_new_firmware(
        url: &Url,
        verify_ssl: bool,
        timeout: Duration,
    ) -> Result<bool, Error> {
        let http = TransportConfig {
            verify_ssl,
            timeout,
            ..TransportConfig::default()
        }
        .without_redirects()
        .build_client()?;

        debug!("probing controller firmware at {}", url);

        let resp = http.get(url.clone()).send().await?;
        let new = resp.status() == reqwest::StatusCode::OK;

        debug!(new, status = %resp.status(), "firmware probe complete");
        Ok(new)
    }

    // ── Accessors ────────────────────────────────────────────────────

    /// The underlying HTTP client.
    pub fn http(&self) -> &reqwest::Client {
        &self.http
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The `/status` record from the last [`get_server_data`](Self::get_server_data).
    pub fn server(&self) -> &ServerStatus {
        &self.server
    }

    pub fn url(&self) -> &Url {
        &self.config.url
    }

    pub fn is_new_firmware(&self) -> bool {
        self.config.new
    }

    pub fn server_version(&self) -> &str {
        &self.server.server_version
    }

    pub fn uuid(&self) -> &str {
        &self.server.uuid
    }

    pub fn is_up(&self) -> bool {
        self.server.up.val
    }

    /// The current CSRF token, if the controller has issued one.
    pub fn csrf_token(&self) -> Option<String> {
        self.csrf
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Resolve a logical API path for this controller's firmware.
    pub fn path<'a>(&self, path: &'a str) -> Cow<'a, str> {
        paths::resolve(path, self.config.new)
    }

    // ── Session ──────────────────────────────────────────────────────

    /// Authenticate with the controller using the configured credentials.
    ///
    /// The session cookie lands in the client's jar. A CSRF token in the
    /// response headers is stored and sent on subsequent requests.
    pub async fn login(&self) -> Result<(), Error> {
        let url = self.url_for(paths::API_LOGIN_PATH)?;
        debug!("logging in at {}", url);

        let body = json!({
            "username": self.config.user,
            "password": self.config.pass.expose_secret(),
        });

        let resp = self
            .http
            .post(url.clone())
            .header(ACCEPT, "application/json")
            .json(&body)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(Error::Authentication {
                message: format!(
                    "authentication failed (user: {}): {url} (status: {status})",
                    self.config.user
                ),
            });
        }

        if let Some(token) = header_str(resp.headers(), CSRF_HEADER) {
            self.set_csrf_token(token.to_owned());
        }

        debug!("login successful");
        Ok(())
    }

    /// Fetch `/status` and replace the cached server record.
    pub async fn get_server_data(&mut self) -> Result<&ServerStatus, Error> {
        let body = self.get_json(paths::API_STATUS_PATH, None).await?;

        let status: StatusResponse =
            serde_json::from_str(&body).map_err(|e| deserialization_error(&e, &body))?;

        self.server = status.meta;
        debug!(
            version = %self.server.server_version,
            up = self.server.up.val,
            "controller status refreshed"
        );

        Ok(&self.server)
    }

    // ── Request helpers ──────────────────────────────────────────────

    /// Request a logical API path and unwrap the `{meta, data}` envelope.
    ///
    /// Sends a GET, or a POST carrying `params` as the JSON body when given.
    pub async fn get_data<T: DeserializeOwned>(
        &self,
        api_path: &str,
        params: Option<&serde_json::Value>,
    ) -> Result<Vec<T>, Error> {
        let body = self.get_json(api_path, params).await?;
        parse_envelope(&body)
    }

    /// Request a logical API path and return the raw response body.
    pub async fn get_json(
        &self,
        api_path: &str,
        params: Option<&serde_json::Value>,
    ) -> Result<String, Error> {
        let url = self.url_for(api_path)?;

        let builder = match params {
            Some(body) => {
                debug!("POST {}", url);
                self.http.post(url.clone()).json(body)
            }
            None => {
                debug!("GET {}", url);
                self.http.get(url.clone())
            }
        };

        let builder = self.apply_csrf(builder.header(ACCEPT, "application/json"));
        let resp = builder.send().await?;

        self.update_csrf_from_response(resp.headers());

        let status = resp.status();
        if !status.is_success() {
            return Err(Error::InvalidStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        Ok(resp.text().await?)
    }

    /// Full URL for a logical path: controller root + resolved path.
    fn url_for(&self, api_path: &str) -> Result<Url, Error> {
        let base = self.config.url.as_str().trim_end_matches('/');
        let path = self.path(api_path);
        Ok(Url::parse(&format!("{base}{path}"))?)
    }

    // ── CSRF token management ────────────────────────────────────────

    fn set_csrf_token(&self, token: String) {
        debug!("storing CSRF token");
        *self.csrf.write().unwrap_or_else(PoisonError::into_inner) = Some(token);
    }

    /// Replace the stored token if the controller rotated it.
    fn update_csrf_from_response(&self, headers: &HeaderMap) {
        let rotated =
            header_str(headers, UPDATED_CSRF_HEADER).or_else(|| header_str(headers, CSRF_HEADER));

        if let Some(token) = rotated {
            trace!("CSRF token rotated");
            *self.csrf.write().unwrap_or_else(PoisonError::into_inner) = Some(token.to_owned());
        }
    }

    fn apply_csrf(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        let guard = self.csrf.read().unwrap_or_else(PoisonError::into_inner);
        match guard.as_deref() {
            Some(token) => builder.header(CSRF_HEADER, token),
            None => builder,
        }
    }
}

impl std::fmt::Debug for Unifi {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Unifi")
            .field("url", &self.config.url.as_str())
            .field("user", &self.config.user)
            .field("new", &self.config.new)
            .field("server", &self.server)
            .finish_non_exhaustive()
    }
}

fn header_str<'h>(headers: &'h HeaderMap, name: &str) -> Option<&'h str> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .filter(|v| !v.is_empty())
}

fn deserialization_error(err: &serde_json::Error, body: &str) -> Error {
    let preview: String = body.chars().take(200).collect();
    Error::Deserialization {
        message: format!("{err} (body preview: {preview:?})"),
        body: body.to_owned(),
    }
}

/// Parse the `{ meta, data }` envelope, returning `data` on success or
/// `Error::Api` if `meta.rc != "ok"`.
///
/// Also handles UniFi OS error responses that use a different shape:
/// `{"error": {"code": 403, "message": "..."}}` (returned with HTTP 200).
fn parse_envelope<T: DeserializeOwned>(body: &str) -> Result<Vec<T>, Error> {
    if let Ok(UnifiOsError { error: Some(err) }) = serde_json::from_str::<UnifiOsError>(body) {
        let msg = err.message.unwrap_or_default();
        return Err(if err.code == 401 {
            Error::Authentication { message: msg }
        } else {
            Error::Api {
                message: format!("UniFi OS error {}: {msg}", err.code),
            }
        });
    }

    let envelope: LegacyResponse<T> =
        serde_json::from_str(body).map_err(|e| deserialization_error(&e, body))?;

    match envelope.meta.rc.as_str() {
        "ok" => Ok(envelope.data),
        _ => Err(Error::Api {
            message: envelope
                .meta
                .msg
                .unwrap_or_else(|| format!("rc={}", envelope.meta.rc)),
        }),
    }
}
