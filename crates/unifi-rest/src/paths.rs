// Controller API paths
//
// One canonical table of endpoint templates. Templates containing `%s` are
// site-scoped; substitute the site name with [`site`]. New-style firmware
// (UniFi OS) serves the same endpoints behind a reverse-proxy prefix and
// moves login to a dedicated path -- [`resolve`] is the only place that
// difference is handled.

use std::borrow::Cow;

/// Controller version probe.
pub const API_STATUS_PATH: &str = "/status";
/// Site events.
pub const API_EVENT_PATH: &str = "/api/s/%s/stat/event";
/// Controller-level site list.
pub const API_SITE_LIST: &str = "/api/stat/sites";
/// Site-wide DPI statistics.
pub const API_SITE_DPI: &str = "/api/s/%s/stat/sitedpi";
/// Per-client DPI statistics.
pub const API_CLIENT_DPI: &str = "/api/s/%s/stat/stadpi";
/// Connected clients (stations).
pub const API_CLIENT_PATH: &str = "/api/s/%s/stat/sta";
/// Network configuration.
pub const API_NETWORK_PATH: &str = "/api/s/%s/rest/networkconf";
/// Adopted devices.
pub const API_DEVICE_PATH: &str = "/api/s/%s/stat/device";
/// Login on legacy firmware.
pub const API_LOGIN_PATH: &str = "/api/login";
/// Login on new-style firmware (UniFi OS).
pub const API_LOGIN_PATH_NEW: &str = "/api/auth/login";
/// Intrusion detection / prevention events.
pub const API_EVENT_PATH_IDS: &str = "/api/s/%s/stat/ips/event";
/// Site alarms.
pub const API_EVENT_PATH_ALARMS: &str = "/api/s/%s/list/alarm";
/// Prefix added to every path except login on new-style firmware.
pub const API_PREFIX_NEW: &str = "/proxy/network";
/// Site anomalies.
pub const API_ANOMALIES_PATH: &str = "/api/s/%s/stat/anomalies";

/// Map a logical API path to the concrete path the controller serves.
///
/// Legacy firmware gets the path back untouched. New-style firmware swaps
/// the login path for [`API_LOGIN_PATH_NEW`] and prefixes everything else
/// with [`API_PREFIX_NEW`] unless it already carries it. Applying this twice
/// yields the same result as applying it once.
pub fn resolve(path: &str, new_firmware: bool) -> Cow<'_, str> {
    if !new_firmware {
        return Cow::Borrowed(path);
    }

    if path == API_LOGIN_PATH {
        return Cow::Borrowed(API_LOGIN_PATH_NEW);
    }

    if !path.starts_with(API_PREFIX_NEW) && path != API_LOGIN_PATH_NEW {
        return Cow::Owned(format!("{API_PREFIX_NEW}{path}"));
    }

    Cow::Borrowed(path)
}

/// Substitute a site name into a site-scoped path template.
pub fn site(template: &str, site_name: &str) -> String {
    template.replacen("%s", site_name, 1)
}
