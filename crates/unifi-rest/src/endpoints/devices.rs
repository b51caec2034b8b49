// Device listing
//
// `stat/device` mixes every device kind in one list. Each entry is decoded
// according to its `type`; entries of unknown type, or that fail to decode,
// are reported on the error sink and skipped so one odd device cannot hide
// the rest.

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, warn};

use crate::client::Unifi;
use crate::error::Error;
use crate::models::{Devices, Site, Udm, Uap, Usg, Usw};
use crate::paths;

impl Unifi {
    /// List adopted devices for each site, grouped by kind.
    ///
    /// `GET /api/s/{site}/stat/device`
    pub async fn get_devices(&self, sites: &[Site]) -> Result<Devices, Error> {
        let mut devices = Devices::default();

        for site in sites {
            self.config().debug_log.log(format_args!(
                "Polling Controller, retrieving UniFi Devices, site {} ({})",
                site.name, site.desc
            ));
            debug!(site = %site.name, "listing devices");

            let path = paths::site(paths::API_DEVICE_PATH, &site.name);
            let raw: Vec<Value> = self.get_data(&path, None).await?;

            devices.extend(self.parse_devices(raw, &site.site_name));
        }

        Ok(devices)
    }

    /// Split raw device entries by their `type` field.
    pub fn parse_devices(&self, data: Vec<Value>, site_name: &str) -> Devices {
        let source = self.config().source_name();
        let mut devices = Devices::default();

        for entry in data {
            let kind = entry
                .get("type")
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_owned();

            match kind.as_str() {
                "uap" => {
                    if let Some(mut dev) = self.decode_device::<Uap>(&kind, entry) {
                        dev.site_name = site_name.to_owned();
                        dev.source_name = source.to_owned();
                        devices.uaps.push(dev);
                    }
                }
                "ugw" | "usg" => {
                    if let Some(mut dev) = self.decode_device::<Usg>(&kind, entry) {
                        dev.site_name = site_name.to_owned();
                        dev.source_name = source.to_owned();
                        devices.usgs.push(dev);
                    }
                }
                "usw" => {
                    if let Some(mut dev) = self.decode_device::<Usw>(&kind, entry) {
                        dev.site_name = site_name.to_owned();
                        dev.source_name = source.to_owned();
                        devices.usws.push(dev);
                    }
                }
                "udm" => {
                    if let Some(mut dev) = self.decode_device::<Udm>(&kind, entry) {
                        dev.site_name = site_name.to_owned();
                        dev.source_name = source.to_owned();
                        devices.udms.push(dev);
                    }
                }
                other => {
                    warn!(kind = other, "skipping device of unknown type");
                    self.config()
                        .error_log
                        .log(format_args!("unknown asset type - {other} - skipping"));
                }
            }
        }

        devices
    }

    /// Decode one device entry, reporting the payload on failure.
    fn decode_device<T: DeserializeOwned>(&self, kind: &str, entry: Value) -> Option<T> {
        let payload = entry.to_string();

        match serde_json::from_value(entry) {
            Ok(dev) => Some(dev),
            Err(e) => {
                warn!(kind, error = %e, "skipping undecodable device");
                let config = self.config();
                config
                    .error_log
                    .log(format_args!("json decode ({kind}): {e}"));
                config
                    .error_log
                    .log(format_args!("Enable debug logging to output the failed payload."));
                config
                    .debug_log
                    .log(format_args!("Failed payload: {payload}"));
                None
            }
        }
    }
}
