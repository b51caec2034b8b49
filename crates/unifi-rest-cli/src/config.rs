//! CLI-aware config resolution: file + env, then command-line overrides.

use unifi_rest::{Logger, Unifi};
use unifi_rest_config::FileConfig;

use crate::cli::GlobalOpts;
use crate::error::CliError;

/// Load the config file and apply command-line overrides.
pub fn resolve(global: &GlobalOpts) -> Result<FileConfig, CliError> {
    let mut cfg = match global.config {
        Some(ref path) => unifi_rest_config::load_config_from(path)?,
        None => unifi_rest_config::load_config()?,
    };
    apply_overrides(&mut cfg, global);
    Ok(cfg)
}

fn apply_overrides(cfg: &mut FileConfig, global: &GlobalOpts) {
    if let Some(ref url) = global.url {
        cfg.url.clone_from(url);
    }
    if let Some(ref user) = global.user {
        cfg.user.clone_from(user);
    }
    if let Some(ref pass) = global.pass {
        cfg.pass = Some(pass.clone());
    }
    if global.insecure {
        cfg.verify_ssl = false;
    }
    if global.new {
        cfg.new = Some(true);
    } else if global.legacy {
        cfg.new = Some(false);
    }
    if !global.site.is_empty() {
        cfg.sites.clone_from(&global.site);
    }
}

/// Log in to the configured controller, probing the firmware style when
/// the config leaves it open.
pub async fn connect(cfg: &FileConfig) -> Result<Unifi, CliError> {
    let new = match cfg.new {
        Some(new) => new,
        None => {
            let url = cfg.parsed_url()?;
            let timeout = std::time::Duration::from_secs(cfg.timeout);
            Unifi::detect_new_firmware(&url, cfg.verify_ssl, timeout).await?
        }
    };

    let config = cfg
        .to_client_config(new)?
        .with_error_log(Logger::tracing_error())
        .with_debug_log(Logger::tracing_debug());

    tracing::debug!(url = %config.url, new, "connecting");
    Ok(Unifi::new(config).await?)
}
