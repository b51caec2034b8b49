use serde::{Deserialize, Serialize};

use crate::flex::{FlexBool, FlexInt};

/// Site object from `/api/stat/sites`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Site {
    #[serde(default, rename = "_id", deserialize_with = "super::nullable")]
    pub id: String,
    /// Short site key used in site-scoped paths (e.g. `default`).
    #[serde(default, deserialize_with = "super::nullable")]
    pub name: String,
    /// Human-readable description.
    #[serde(default, deserialize_with = "super::nullable")]
    pub desc: String,
    #[serde(default, deserialize_with = "super::nullable")]
    pub role: String,
    #[serde(default, deserialize_with = "super::nullable")]
    pub attr_hidden_id: String,
    #[serde(default)]
    pub attr_no_delete: FlexBool,
    #[serde(default)]
    pub role_hotspot: FlexBool,
    #[serde(default)]
    pub num_new_alarms: FlexInt,
    #[serde(default, deserialize_with = "super::nullable")]
    pub health: Vec<SiteHealth>,
    /// `"{desc} ({name})"`, filled in after decoding.
    #[serde(default, skip_deserializing)]
    pub site_name: String,
    /// Controller URL this site was read from.
    #[serde(default, skip_deserializing)]
    pub source_name: String,
    /// Catch-all for undocumented fields.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Site {
    /// Display label combining description and key.
    pub fn label(&self) -> String {
        format!("{} ({})", self.desc, self.name)
    }
}

/// One subsystem entry (`wan`, `lan`, `wlan`, `vpn`, `www`) of a site's health.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SiteHealth {
    #[serde(default, deserialize_with = "super::nullable")]
    pub subsystem: String,
    #[serde(default, deserialize_with = "super::nullable")]
    pub status: String,
    #[serde(default)]
    pub num_user: FlexInt,
    #[serde(default)]
    pub num_guest: FlexInt,
    #[serde(default)]
    pub num_iot: FlexInt,
    #[serde(default)]
    pub num_ap: FlexInt,
    #[serde(default)]
    pub num_sw: FlexInt,
    #[serde(default)]
    pub num_gw: FlexInt,
    #[serde(default)]
    pub num_adopted: FlexInt,
    #[serde(default)]
    pub num_disabled: FlexInt,
    #[serde(default)]
    pub num_disconnected: FlexInt,
    #[serde(default)]
    pub num_pending: FlexInt,
    #[serde(default, rename = "rx_bytes-r")]
    pub rx_bytes_r: FlexInt,
    #[serde(default, rename = "tx_bytes-r")]
    pub tx_bytes_r: FlexInt,
    #[serde(default)]
    pub latency: FlexInt,
    #[serde(default)]
    pub uptime: FlexInt,
    #[serde(default)]
    pub wan_ip: Option<String>,
    /// Catch-all for undocumented fields.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}
