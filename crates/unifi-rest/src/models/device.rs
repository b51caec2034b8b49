// Device records from `stat/device`
//
// The endpoint returns every adopted device in one list; the `type` field
// says which shape each entry has. The controller sends 100+ fields per
// device. The ones needed for monitoring are modelled explicitly; the rest
// land in `extra`.

use serde::{Deserialize, Serialize};

use crate::flex::{FlexBool, FlexInt};

/// Devices for one or more sites, grouped by kind.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Devices {
    pub uaps: Vec<Uap>,
    pub usgs: Vec<Usg>,
    pub usws: Vec<Usw>,
    pub udms: Vec<Udm>,
}

impl Devices {
    /// Total number of devices across all kinds.
    pub fn len(&self) -> usize {
        self.uaps.len() + self.usgs.len() + self.usws.len() + self.udms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Move every device from `other` into `self`.
    pub fn extend(&mut self, other: Self) {
        self.uaps.extend(other.uaps);
        self.usgs.extend(other.usgs);
        self.usws.extend(other.usws);
        self.udms.extend(other.udms);
    }
}

/// `system-stats` block: percentages and uptime as the controller reports them.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SystemStats {
    #[serde(default)]
    pub cpu: FlexInt,
    #[serde(default)]
    pub mem: FlexInt,
    #[serde(default)]
    pub uptime: FlexInt,
}

/// `sys_stats` block: load averages and memory in bytes.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SysStats {
    #[serde(default)]
    pub loadavg_1: FlexInt,
    #[serde(default)]
    pub loadavg_5: FlexInt,
    #[serde(default)]
    pub loadavg_15: FlexInt,
    #[serde(default)]
    pub mem_buffer: FlexInt,
    #[serde(default)]
    pub mem_total: FlexInt,
    #[serde(default)]
    pub mem_used: FlexInt,
}

/// Switch port from a device's `port_table`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Port {
    #[serde(default)]
    pub port_idx: FlexInt,
    #[serde(default, deserialize_with = "super::nullable")]
    pub name: String,
    #[serde(default, deserialize_with = "super::nullable")]
    pub media: String,
    #[serde(default)]
    pub up: FlexBool,
    #[serde(default)]
    pub enable: FlexBool,
    #[serde(default)]
    pub is_uplink: FlexBool,
    #[serde(default)]
    pub speed: FlexInt,
    #[serde(default)]
    pub full_duplex: FlexBool,
    #[serde(default)]
    pub port_poe: FlexBool,
    #[serde(default)]
    pub poe_enable: FlexBool,
    #[serde(default)]
    pub poe_power: FlexInt,
    #[serde(default)]
    pub poe_voltage: FlexInt,
    #[serde(default)]
    pub rx_bytes: FlexInt,
    #[serde(default)]
    pub tx_bytes: FlexInt,
    #[serde(default)]
    pub rx_errors: FlexInt,
    #[serde(default)]
    pub tx_errors: FlexInt,
    #[serde(default, rename = "rx_bytes-r")]
    pub rx_bytes_r: FlexInt,
    #[serde(default, rename = "tx_bytes-r")]
    pub tx_bytes_r: FlexInt,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

// ── Access point ─────────────────────────────────────────────────────

/// Access point (`type: "uap"`).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Uap {
    #[serde(default, rename = "_id", deserialize_with = "super::nullable")]
    pub id: String,
    #[serde(default, deserialize_with = "super::nullable")]
    pub mac: String,
    #[serde(default, rename = "type", deserialize_with = "super::nullable")]
    pub device_type: String,
    #[serde(default, deserialize_with = "super::nullable")]
    pub name: String,
    #[serde(default, deserialize_with = "super::nullable")]
    pub model: String,
    #[serde(default, deserialize_with = "super::nullable")]
    pub serial: String,
    #[serde(default, deserialize_with = "super::nullable")]
    pub version: String,
    #[serde(default, deserialize_with = "super::nullable")]
    pub ip: String,
    #[serde(default, deserialize_with = "super::nullable")]
    pub site_id: String,
    #[serde(default)]
    pub adopted: FlexBool,
    /// 0=offline, 1=online, 2=pending, 4=upgrading, 5=provisioning
    #[serde(default)]
    pub state: FlexInt,
    #[serde(default)]
    pub uptime: FlexInt,
    #[serde(default)]
    pub last_seen: FlexInt,
    #[serde(default)]
    pub upgradable: FlexBool,
    #[serde(default)]
    pub locating: FlexBool,
    #[serde(default)]
    pub isolated: FlexBool,
    #[serde(default)]
    pub num_sta: FlexInt,
    #[serde(default, rename = "user-num_sta")]
    pub user_num_sta: FlexInt,
    #[serde(default, rename = "guest-num_sta")]
    pub guest_num_sta: FlexInt,
    #[serde(default)]
    pub bytes: FlexInt,
    #[serde(default)]
    pub rx_bytes: FlexInt,
    #[serde(default)]
    pub tx_bytes: FlexInt,
    #[serde(default, rename = "system-stats", deserialize_with = "super::nullable")]
    pub system_stats: SystemStats,
    #[serde(default, deserialize_with = "super::nullable")]
    pub sys_stats: SysStats,
    #[serde(default, deserialize_with = "super::nullable")]
    pub radio_table: Vec<serde_json::Value>,
    #[serde(default, deserialize_with = "super::nullable")]
    pub vap_table: Vec<serde_json::Value>,
    #[serde(default, skip_deserializing)]
    pub site_name: String,
    #[serde(default, skip_deserializing)]
    pub source_name: String,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

// ── Security gateway ─────────────────────────────────────────────────

/// Security gateway (`type: "ugw"` or `"usg"`).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Usg {
    #[serde(default, rename = "_id", deserialize_with = "super::nullable")]
    pub id: String,
    #[serde(default, deserialize_with = "super::nullable")]
    pub mac: String,
    #[serde(default, rename = "type", deserialize_with = "super::nullable")]
    pub device_type: String,
    #[serde(default, deserialize_with = "super::nullable")]
    pub name: String,
    #[serde(default, deserialize_with = "super::nullable")]
    pub model: String,
    #[serde(default, deserialize_with = "super::nullable")]
    pub serial: String,
    #[serde(default, deserialize_with = "super::nullable")]
    pub version: String,
    #[serde(default, deserialize_with = "super::nullable")]
    pub ip: String,
    #[serde(default, deserialize_with = "super::nullable")]
    pub site_id: String,
    #[serde(default)]
    pub adopted: FlexBool,
    #[serde(default)]
    pub state: FlexInt,
    #[serde(default)]
    pub uptime: FlexInt,
    #[serde(default)]
    pub last_seen: FlexInt,
    #[serde(default)]
    pub upgradable: FlexBool,
    #[serde(default)]
    pub num_sta: FlexInt,
    #[serde(default, rename = "user-num_sta")]
    pub user_num_sta: FlexInt,
    #[serde(default, rename = "guest-num_sta")]
    pub guest_num_sta: FlexInt,
    #[serde(default)]
    pub num_desktop: FlexInt,
    #[serde(default)]
    pub num_mobile: FlexInt,
    #[serde(default)]
    pub num_handheld: FlexInt,
    #[serde(default, deserialize_with = "super::nullable")]
    pub connect_request_ip: String,
    #[serde(default)]
    pub rx_bytes: FlexInt,
    #[serde(default)]
    pub tx_bytes: FlexInt,
    #[serde(default)]
    pub speedtest_status_saved: FlexBool,
    #[serde(default, rename = "system-stats", deserialize_with = "super::nullable")]
    pub system_stats: SystemStats,
    #[serde(default, deserialize_with = "super::nullable")]
    pub sys_stats: SysStats,
    #[serde(default)]
    pub wan1: Option<serde_json::Value>,
    #[serde(default)]
    pub wan2: Option<serde_json::Value>,
    #[serde(default, deserialize_with = "super::nullable")]
    pub network_table: Vec<serde_json::Value>,
    #[serde(default, skip_deserializing)]
    pub site_name: String,
    #[serde(default, skip_deserializing)]
    pub source_name: String,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

// ── Switch ───────────────────────────────────────────────────────────

/// Switch (`type: "usw"`).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Usw {
    #[serde(default, rename = "_id", deserialize_with = "super::nullable")]
    pub id: String,
    #[serde(default, deserialize_with = "super::nullable")]
    pub mac: String,
    #[serde(default, rename = "type", deserialize_with = "super::nullable")]
    pub device_type: String,
    #[serde(default, deserialize_with = "super::nullable")]
    pub name: String,
    #[serde(default, deserialize_with = "super::nullable")]
    pub model: String,
    #[serde(default, deserialize_with = "super::nullable")]
    pub serial: String,
    #[serde(default, deserialize_with = "super::nullable")]
    pub version: String,
    #[serde(default, deserialize_with = "super::nullable")]
    pub ip: String,
    #[serde(default, deserialize_with = "super::nullable")]
    pub site_id: String,
    #[serde(default)]
    pub adopted: FlexBool,
    #[serde(default)]
    pub state: FlexInt,
    #[serde(default)]
    pub uptime: FlexInt,
    #[serde(default)]
    pub last_seen: FlexInt,
    #[serde(default)]
    pub upgradable: FlexBool,
    #[serde(default)]
    pub num_sta: FlexInt,
    #[serde(default, rename = "user-num_sta")]
    pub user_num_sta: FlexInt,
    #[serde(default, rename = "guest-num_sta")]
    pub guest_num_sta: FlexInt,
    #[serde(default)]
    pub general_temperature: FlexInt,
    #[serde(default)]
    pub has_temperature: FlexBool,
    #[serde(default)]
    pub has_fan: FlexBool,
    #[serde(default)]
    pub fan_level: FlexInt,
    #[serde(default)]
    pub overheating: FlexBool,
    #[serde(default)]
    pub total_max_power: FlexInt,
    #[serde(default)]
    pub rx_bytes: FlexInt,
    #[serde(default)]
    pub tx_bytes: FlexInt,
    #[serde(default, rename = "system-stats", deserialize_with = "super::nullable")]
    pub system_stats: SystemStats,
    #[serde(default, deserialize_with = "super::nullable")]
    pub sys_stats: SysStats,
    #[serde(default, deserialize_with = "super::nullable")]
    pub port_table: Vec<Port>,
    #[serde(default, skip_deserializing)]
    pub site_name: String,
    #[serde(default, skip_deserializing)]
    pub source_name: String,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

// ── Dream machine ────────────────────────────────────────────────────

/// Dream machine (`type: "udm"`): gateway, switch and controller in one box.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Udm {
    #[serde(default, rename = "_id", deserialize_with = "super::nullable")]
    pub id: String,
    #[serde(default, deserialize_with = "super::nullable")]
    pub mac: String,
    #[serde(default, rename = "type", deserialize_with = "super::nullable")]
    pub device_type: String,
    #[serde(default, deserialize_with = "super::nullable")]
    pub name: String,
    #[serde(default, deserialize_with = "super::nullable")]
    pub model: String,
    #[serde(default, deserialize_with = "super::nullable")]
    pub serial: String,
    #[serde(default, deserialize_with = "super::nullable")]
    pub version: String,
    #[serde(default, deserialize_with = "super::nullable")]
    pub ip: String,
    #[serde(default, deserialize_with = "super::nullable")]
    pub site_id: String,
    #[serde(default)]
    pub adopted: FlexBool,
    #[serde(default)]
    pub state: FlexInt,
    #[serde(default)]
    pub uptime: FlexInt,
    #[serde(default)]
    pub last_seen: FlexInt,
    #[serde(default)]
    pub upgradable: FlexBool,
    #[serde(default)]
    pub num_sta: FlexInt,
    #[serde(default, rename = "user-num_sta")]
    pub user_num_sta: FlexInt,
    #[serde(default, rename = "guest-num_sta")]
    pub guest_num_sta: FlexInt,
    #[serde(default)]
    pub num_desktop: FlexInt,
    #[serde(default)]
    pub num_mobile: FlexInt,
    #[serde(default)]
    pub num_handheld: FlexInt,
    #[serde(default)]
    pub general_temperature: FlexInt,
    #[serde(default)]
    pub overheating: FlexBool,
    #[serde(default)]
    pub rx_bytes: FlexInt,
    #[serde(default)]
    pub tx_bytes: FlexInt,
    #[serde(default, rename = "system-stats", deserialize_with = "super::nullable")]
    pub system_stats: SystemStats,
    #[serde(default, deserialize_with = "super::nullable")]
    pub sys_stats: SysStats,
    #[serde(default)]
    pub wan1: Option<serde_json::Value>,
    #[serde(default)]
    pub wan2: Option<serde_json::Value>,
    #[serde(default, deserialize_with = "super::nullable")]
    pub network_table: Vec<serde_json::Value>,
    #[serde(default, deserialize_with = "super::nullable")]
    pub port_table: Vec<Port>,
    #[serde(default, deserialize_with = "super::nullable")]
    pub radio_table: Vec<serde_json::Value>,
    #[serde(default, skip_deserializing)]
    pub site_name: String,
    #[serde(default, skip_deserializing)]
    pub source_name: String,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}
