use serde::{Deserialize, Serialize};

use crate::flex::{FlexBool, FlexInt};

/// Network configuration from `rest/networkconf`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Network {
    #[serde(default, rename = "_id", deserialize_with = "super::nullable")]
    pub id: String,
    #[serde(default, deserialize_with = "super::nullable")]
    pub name: String,
    /// `corporate`, `guest`, `wan`, `vlan-only`, `remote-user-vpn`...
    #[serde(default, deserialize_with = "super::nullable")]
    pub purpose: String,
    #[serde(default, deserialize_with = "super::nullable")]
    pub site_id: String,
    #[serde(default)]
    pub enabled: FlexBool,
    #[serde(default)]
    pub vlan: FlexInt,
    #[serde(default)]
    pub vlan_enabled: FlexBool,
    #[serde(default, deserialize_with = "super::nullable")]
    pub ip_subnet: String,
    #[serde(default, deserialize_with = "super::nullable")]
    pub networkgroup: String,
    #[serde(default, deserialize_with = "super::nullable")]
    pub domain_name: String,
    #[serde(default)]
    pub is_nat: FlexBool,
    #[serde(default)]
    pub dhcpd_enabled: FlexBool,
    #[serde(default, deserialize_with = "super::nullable")]
    pub dhcpd_start: String,
    #[serde(default, deserialize_with = "super::nullable")]
    pub dhcpd_stop: String,
    #[serde(default)]
    pub dhcpd_leasetime: FlexInt,
    #[serde(default)]
    pub igmp_snooping: FlexBool,
    #[serde(default, deserialize_with = "super::nullable")]
    pub wan_type: String,
    #[serde(default, deserialize_with = "super::nullable")]
    pub wan_networkgroup: String,
    #[serde(default, skip_deserializing)]
    pub site_name: String,
    #[serde(default, skip_deserializing)]
    pub source_name: String,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}
