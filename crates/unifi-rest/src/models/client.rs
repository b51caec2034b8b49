use serde::{Deserialize, Serialize};

use crate::flex::{FlexBool, FlexInt};

/// Connected client (station) from `stat/sta`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Client {
    #[serde(default, rename = "_id", deserialize_with = "super::nullable")]
    pub id: String,
    #[serde(default, deserialize_with = "super::nullable")]
    pub mac: String,
    #[serde(default, deserialize_with = "super::nullable")]
    pub name: String,
    #[serde(default, deserialize_with = "super::nullable")]
    pub hostname: String,
    #[serde(default, deserialize_with = "super::nullable")]
    pub ip: String,
    #[serde(default, deserialize_with = "super::nullable")]
    pub oui: String,
    #[serde(default, deserialize_with = "super::nullable")]
    pub site_id: String,
    #[serde(default)]
    pub is_guest: FlexBool,
    #[serde(default)]
    pub is_wired: FlexBool,
    #[serde(default)]
    pub authorized: FlexBool,
    #[serde(default)]
    pub blocked: FlexBool,
    #[serde(default)]
    pub use_fixedip: FlexBool,
    #[serde(default, deserialize_with = "super::nullable")]
    pub network: String,
    #[serde(default, deserialize_with = "super::nullable")]
    pub network_id: String,
    #[serde(default)]
    pub vlan: FlexInt,
    // ── Wireless ──
    #[serde(default, deserialize_with = "super::nullable")]
    pub essid: String,
    #[serde(default, deserialize_with = "super::nullable")]
    pub bssid: String,
    #[serde(default, deserialize_with = "super::nullable")]
    pub ap_mac: String,
    #[serde(default)]
    pub channel: FlexInt,
    #[serde(default, deserialize_with = "super::nullable")]
    pub radio: String,
    #[serde(default, deserialize_with = "super::nullable")]
    pub radio_proto: String,
    #[serde(default)]
    pub signal: FlexInt,
    #[serde(default)]
    pub rssi: FlexInt,
    #[serde(default)]
    pub noise: FlexInt,
    #[serde(default)]
    pub satisfaction: FlexInt,
    #[serde(default)]
    pub ccq: FlexInt,
    // ── Wired ──
    #[serde(default, deserialize_with = "super::nullable")]
    pub sw_mac: String,
    #[serde(default)]
    pub sw_port: FlexInt,
    #[serde(default)]
    pub sw_depth: FlexInt,
    // ── Traffic ──
    #[serde(default)]
    pub tx_bytes: FlexInt,
    #[serde(default)]
    pub rx_bytes: FlexInt,
    #[serde(default)]
    pub tx_packets: FlexInt,
    #[serde(default)]
    pub rx_packets: FlexInt,
    #[serde(default, rename = "tx_bytes-r")]
    pub tx_bytes_r: FlexInt,
    #[serde(default, rename = "rx_bytes-r")]
    pub rx_bytes_r: FlexInt,
    #[serde(default)]
    pub tx_rate: FlexInt,
    #[serde(default)]
    pub rx_rate: FlexInt,
    #[serde(default, rename = "wired-tx_bytes")]
    pub wired_tx_bytes: FlexInt,
    #[serde(default, rename = "wired-rx_bytes")]
    pub wired_rx_bytes: FlexInt,
    // ── Timing ──
    #[serde(default)]
    pub uptime: FlexInt,
    #[serde(default)]
    pub first_seen: FlexInt,
    #[serde(default)]
    pub last_seen: FlexInt,
    #[serde(default)]
    pub assoc_time: FlexInt,
    /// Site label, filled in after decoding.
    #[serde(default, skip_deserializing)]
    pub site_name: String,
    /// Controller URL this client was read from.
    #[serde(default, skip_deserializing)]
    pub source_name: String,
    /// Catch-all for undocumented fields.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}
