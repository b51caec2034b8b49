// Event-like records: site events, IDS/IPS hits, alarms, anomalies.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::flex::{FlexBool, FlexInt};

/// Event object from `stat/event`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Event {
    #[serde(default, rename = "_id", deserialize_with = "super::nullable")]
    pub id: String,
    #[serde(default, deserialize_with = "super::nullable")]
    pub key: String,
    #[serde(default, deserialize_with = "super::nullable")]
    pub msg: String,
    #[serde(default, deserialize_with = "super::nullable")]
    pub subsystem: String,
    #[serde(default, deserialize_with = "super::nullable")]
    pub site_id: String,
    #[serde(default, deserialize_with = "super::nullable")]
    pub datetime: String,
    /// Milliseconds since the epoch.
    #[serde(default)]
    pub time: FlexInt,
    #[serde(default, deserialize_with = "super::nullable")]
    pub user: String,
    #[serde(default, deserialize_with = "super::nullable")]
    pub guest: String,
    #[serde(default, deserialize_with = "super::nullable")]
    pub hostname: String,
    #[serde(default, deserialize_with = "super::nullable")]
    pub admin: String,
    #[serde(default, deserialize_with = "super::nullable")]
    pub ap: String,
    #[serde(default, deserialize_with = "super::nullable")]
    pub ap_name: String,
    #[serde(default, deserialize_with = "super::nullable")]
    pub ap_from: String,
    #[serde(default, deserialize_with = "super::nullable")]
    pub ap_to: String,
    #[serde(default, deserialize_with = "super::nullable")]
    pub sw: String,
    #[serde(default, deserialize_with = "super::nullable")]
    pub sw_name: String,
    #[serde(default, deserialize_with = "super::nullable")]
    pub gw: String,
    #[serde(default, deserialize_with = "super::nullable")]
    pub gw_name: String,
    #[serde(default, deserialize_with = "super::nullable")]
    pub ssid: String,
    #[serde(default, deserialize_with = "super::nullable")]
    pub network: String,
    #[serde(default)]
    pub channel: FlexInt,
    #[serde(default)]
    pub channel_from: FlexInt,
    #[serde(default)]
    pub channel_to: FlexInt,
    #[serde(default, deserialize_with = "super::nullable")]
    pub radio: String,
    #[serde(default)]
    pub duration: FlexInt,
    #[serde(default)]
    pub bytes: FlexInt,
    #[serde(default)]
    pub port: FlexInt,
    #[serde(default, skip_deserializing)]
    pub site_name: String,
    #[serde(default, skip_deserializing)]
    pub source_name: String,
    /// Catch-all for undocumented fields.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Intrusion detection / prevention event from `stat/ips/event`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Ids {
    #[serde(default, rename = "_id", deserialize_with = "super::nullable")]
    pub id: String,
    #[serde(default, deserialize_with = "super::nullable")]
    pub key: String,
    #[serde(default, deserialize_with = "super::nullable")]
    pub msg: String,
    #[serde(default, deserialize_with = "super::nullable")]
    pub subsystem: String,
    #[serde(default, deserialize_with = "super::nullable")]
    pub site_id: String,
    #[serde(default, deserialize_with = "super::nullable")]
    pub datetime: String,
    #[serde(default)]
    pub time: FlexInt,
    #[serde(default)]
    pub timestamp: FlexInt,
    #[serde(default)]
    pub archived: FlexBool,
    #[serde(default, deserialize_with = "super::nullable")]
    pub event_type: String,
    #[serde(default, deserialize_with = "super::nullable")]
    pub app_proto: String,
    #[serde(default, deserialize_with = "super::nullable")]
    pub catname: String,
    #[serde(default, deserialize_with = "super::nullable")]
    pub proto: String,
    #[serde(default, deserialize_with = "super::nullable")]
    pub src_ip: String,
    #[serde(default, deserialize_with = "super::nullable")]
    pub src_mac: String,
    #[serde(default)]
    pub src_port: FlexInt,
    #[serde(default, deserialize_with = "super::nullable")]
    pub dest_ip: String,
    #[serde(default, deserialize_with = "super::nullable")]
    pub dst_mac: String,
    #[serde(default)]
    pub dest_port: FlexInt,
    #[serde(default)]
    pub flow_id: FlexInt,
    #[serde(default, deserialize_with = "super::nullable")]
    pub in_iface: String,
    #[serde(default, deserialize_with = "super::nullable")]
    pub inner_alert_action: String,
    #[serde(default, deserialize_with = "super::nullable")]
    pub inner_alert_category: String,
    #[serde(default, deserialize_with = "super::nullable")]
    pub inner_alert_signature: String,
    #[serde(default)]
    pub inner_alert_gid: FlexInt,
    #[serde(default)]
    pub inner_alert_rev: FlexInt,
    #[serde(default)]
    pub inner_alert_severity: FlexInt,
    #[serde(default)]
    pub inner_alert_signature_id: FlexInt,
    #[serde(default, deserialize_with = "super::nullable")]
    pub usgip: String,
    #[serde(default, deserialize_with = "super::nullable")]
    pub usgipcountry: String,
    #[serde(default, deserialize_with = "super::nullable")]
    pub srcipcountry: String,
    #[serde(default, deserialize_with = "super::nullable")]
    pub dstipcountry: String,
    #[serde(default, deserialize_with = "super::nullable")]
    pub host: String,
    #[serde(default, skip_deserializing)]
    pub site_name: String,
    #[serde(default, skip_deserializing)]
    pub source_name: String,
    /// Catch-all for undocumented fields.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Alarm object from `list/alarm`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Alarm {
    #[serde(default, rename = "_id", deserialize_with = "super::nullable")]
    pub id: String,
    #[serde(default, deserialize_with = "super::nullable")]
    pub key: String,
    #[serde(default, deserialize_with = "super::nullable")]
    pub msg: String,
    #[serde(default, deserialize_with = "super::nullable")]
    pub subsystem: String,
    #[serde(default, deserialize_with = "super::nullable")]
    pub site_id: String,
    #[serde(default, deserialize_with = "super::nullable")]
    pub datetime: String,
    #[serde(default)]
    pub time: FlexInt,
    #[serde(default)]
    pub archived: FlexBool,
    #[serde(default, deserialize_with = "super::nullable")]
    pub handled_admin_id: String,
    #[serde(default, deserialize_with = "super::nullable")]
    pub handled_time: String,
    #[serde(default, deserialize_with = "super::nullable")]
    pub catname: String,
    #[serde(default, deserialize_with = "super::nullable")]
    pub inner_alert_action: String,
    #[serde(default, deserialize_with = "super::nullable")]
    pub inner_alert_signature: String,
    #[serde(default)]
    pub inner_alert_severity: FlexInt,
    #[serde(default, deserialize_with = "super::nullable")]
    pub src_ip: String,
    #[serde(default, deserialize_with = "super::nullable")]
    pub dest_ip: String,
    #[serde(default, skip_deserializing)]
    pub site_name: String,
    #[serde(default, skip_deserializing)]
    pub source_name: String,
    /// Catch-all for undocumented fields.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// One anomaly occurrence. The controller groups anomalies per device with
/// a list of timestamps; each timestamp becomes one of these.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Anomaly {
    pub datetime: DateTime<Utc>,
    pub source_name: String,
    pub site_name: String,
    pub anomaly: String,
    pub device_mac: String,
}

/// Raw `stat/anomalies` entry: one device, many anomaly kinds.
#[derive(Debug, Deserialize)]
pub(crate) struct AnomalyGroup {
    #[serde(default, deserialize_with = "super::nullable")]
    pub mac: String,
    #[serde(default, deserialize_with = "super::nullable")]
    pub anomalies: Vec<AnomalyTimes>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct AnomalyTimes {
    #[serde(default, deserialize_with = "super::nullable")]
    pub anomaly: String,
    /// Milliseconds since the epoch.
    #[serde(default, deserialize_with = "super::nullable")]
    pub timestamps: Vec<FlexInt>,
}

impl AnomalyGroup {
    /// Expand into one [`Anomaly`] per timestamp. Timestamps outside the
    /// representable range are dropped.
    #[allow(clippy::cast_possible_truncation, clippy::as_conversions)]
    pub(crate) fn into_anomalies(self, site_name: &str, source_name: &str) -> Vec<Anomaly> {
        let mut out = Vec::new();
        for entry in self.anomalies {
            for ts in entry.timestamps {
                if !ts.val.is_finite() {
                    continue;
                }
                let millis = ts.val.round() as i64;
                if let Some(datetime) = DateTime::from_timestamp_millis(millis) {
                    out.push(Anomaly {
                        datetime,
                        source_name: source_name.to_owned(),
                        site_name: site_name.to_owned(),
                        anomaly: entry.anomaly.clone(),
                        device_mac: self.mac.clone(),
                    });
                }
            }
        }
        out
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn ids_event_decodes() {
        let ids: Ids = serde_json::from_value(json!({
            "_id": "ips1",
            "key": "EVT_IPS_IpsAlert",
            "archived": false,
            "timestamp": 1_718_000_000,
            "src_ip": "10.0.0.8",
            "src_port": "51515",
            "dest_port": 443,
            "inner_alert_severity": "2",
            "inner_alert_signature": "ET POLICY Observed DNS Query",
            "usgipASN": "AS1234"
        }))
        .unwrap();

        assert_eq!(ids.key, "EVT_IPS_IpsAlert");
        assert!(!ids.archived.val);
        assert_eq!(ids.src_port.val, 51515.0);
        assert_eq!(ids.dest_port.txt, "443");
        assert_eq!(ids.inner_alert_severity.val, 2.0);
        assert_eq!(ids.extra["usgipASN"], "AS1234");
    }

    #[test]
    fn anomaly_group_expands_per_timestamp() {
        let group: AnomalyGroup = serde_json::from_value(json!({
            "mac": "aa:bb:cc:dd:ee:ff",
            "anomalies": [
                {"anomaly": "USER_DNS_TIMEOUT", "timestamps": [1_700_000_000_000_i64, 1_700_003_600_000_i64]},
                {"anomaly": "USER_HIGH_TCP_LATENCY", "timestamps": [1_700_007_200_000_i64]}
            ]
        }))
        .unwrap();

        let anomalies = group.into_anomalies("Home (default)", "https://controller");
        assert_eq!(anomalies.len(), 3);
        assert_eq!(anomalies[0].anomaly, "USER_DNS_TIMEOUT");
        assert_eq!(anomalies[0].datetime.timestamp(), 1_700_000_000);
        assert_eq!(anomalies[1].datetime.timestamp(), 1_700_003_600);
        assert_eq!(anomalies[2].anomaly, "USER_HIGH_TCP_LATENCY");
        assert_eq!(anomalies[2].device_mac, "aa:bb:cc:dd:ee:ff");
        assert_eq!(anomalies[2].site_name, "Home (default)");
        assert_eq!(anomalies[2].source_name, "https://controller");
    }

    #[test]
    fn anomaly_timestamps_tolerate_strings_and_floats() {
        let group: AnomalyGroup = serde_json::from_value(json!({
            "mac": null,
            "anomalies": [
                {"anomaly": "USER_DNS_TIMEOUT", "timestamps": ["1700000000000", 1_700_003_600_000.0, "garbage"]},
                {"anomaly": null, "timestamps": null}
            ]
        }))
        .unwrap();

        let anomalies = group.into_anomalies("Home (default)", "https://controller");
        assert_eq!(anomalies.len(), 3);
        assert_eq!(anomalies[0].datetime.timestamp(), 1_700_000_000);
        assert_eq!(anomalies[1].datetime.timestamp(), 1_700_003_600);
        assert_eq!(anomalies[2].datetime.timestamp(), 0);
        assert_eq!(anomalies[0].device_mac, "");
    }

    #[test]
    fn null_strings_read_as_empty() {
        let alarm: Alarm = serde_json::from_str(
            r#"{"_id": "a1", "key": null, "msg": null, "archived": null, "time": null}"#,
        )
        .unwrap();

        assert_eq!(alarm.id, "a1");
        assert_eq!(alarm.key, "");
        assert_eq!(alarm.msg, "");
        assert!(!alarm.archived.val);
        assert_eq!(alarm.time.txt, "0");
    }
}
