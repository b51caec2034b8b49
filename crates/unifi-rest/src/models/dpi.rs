use serde::{Deserialize, Serialize};

use crate::flex::FlexInt;

/// DPI statistics for a site (`stat/sitedpi`) or one client (`stat/stadpi`).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DpiTable {
    #[serde(default, deserialize_with = "super::nullable")]
    pub by_app: Vec<DpiData>,
    #[serde(default, deserialize_with = "super::nullable")]
    pub by_cat: Vec<DpiData>,
    /// Client MAC, present on per-client tables.
    #[serde(default, deserialize_with = "super::nullable")]
    pub mac: String,
    #[serde(default, deserialize_with = "super::nullable")]
    pub name: String,
    #[serde(default, skip_deserializing)]
    pub site_name: String,
    #[serde(default, skip_deserializing)]
    pub source_name: String,
}

/// Traffic counters for one application or category.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DpiData {
    #[serde(default)]
    pub app: FlexInt,
    #[serde(default)]
    pub cat: FlexInt,
    #[serde(default)]
    pub rx_bytes: FlexInt,
    #[serde(default)]
    pub rx_packets: FlexInt,
    #[serde(default)]
    pub tx_bytes: FlexInt,
    #[serde(default)]
    pub tx_packets: FlexInt,
    #[serde(default)]
    pub known_clients: FlexInt,
    #[serde(default, deserialize_with = "super::nullable")]
    pub clients: Vec<DpiClient>,
}

/// Per-client counters nested in site-level DPI data.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DpiClient {
    #[serde(default, deserialize_with = "super::nullable")]
    pub mac: String,
    #[serde(default)]
    pub rx_bytes: FlexInt,
    #[serde(default)]
    pub rx_packets: FlexInt,
    #[serde(default)]
    pub tx_bytes: FlexInt,
    #[serde(default)]
    pub tx_packets: FlexInt,
}
