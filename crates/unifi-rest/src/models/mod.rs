// Controller response types
//
// Every endpoint wraps its payload in the `LegacyResponse<T>` envelope.
// Record fields default liberally and numeric/boolean leaves use the flex
// scalars, because the API changes field types between firmware versions.
// Unknown fields land in each record's `extra` map, and `null` reads the
// same as a missing key.

pub mod client;
pub mod device;
pub mod dpi;
pub mod event;
pub mod network;
pub mod server;
pub mod site;

use serde::{Deserialize, Deserializer};

pub use client::Client;
pub use device::{Devices, Port, SysStats, SystemStats, Udm, Uap, Usg, Usw};
pub use dpi::{DpiClient, DpiData, DpiTable};
pub use event::{Alarm, Anomaly, Event, Ids};
pub use network::Network;
pub use server::ServerStatus;
pub use site::{Site, SiteHealth};

/// Field decoder for values the controller sometimes sends as `null`. A
/// `null` reads as the type's default, the same as a missing key.
fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

// ── Response Envelope ────────────────────────────────────────────────

/// Standard controller response envelope.
///
/// ```json
/// { "meta": { "rc": "ok", "msg": "optional" }, "data": [...] }
/// ```
#[derive(Debug, Deserialize)]
pub struct LegacyResponse<T> {
    pub meta: Meta,
    #[serde(default = "Vec::new")]
    pub data: Vec<T>,
}

/// Metadata from the envelope. `rc` == `"ok"` means success.
#[derive(Debug, Deserialize)]
pub struct Meta {
    #[serde(default, deserialize_with = "nullable")]
    pub rc: String,
    #[serde(default)]
    pub msg: Option<String>,
}
