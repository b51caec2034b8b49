// Event-style endpoints: site events, IDS/IPS events, alarms, anomalies.

use chrono::{DateTime, Utc};
use serde_json::json;
use tracing::debug;

use super::EVENT_LIMIT;
use crate::client::Unifi;
use crate::error::Error;
use crate::models::event::AnomalyGroup;
use crate::models::{Alarm, Anomaly, Event, Ids, Site};
use crate::paths;

impl Unifi {
    /// Events from the last `hours` hours for each site, newest first.
    ///
    /// `POST /api/s/{site}/stat/event` with `{"_limit", "within", "_sort"}`
    pub async fn get_events(&self, sites: &[Site], hours: u32) -> Result<Vec<Event>, Error> {
        let params = json!({
            "_limit": EVENT_LIMIT,
            "within": hours,
            "_sort": "-time",
        });
        let mut all = Vec::new();

        for site in sites {
            self.config().debug_log.log(format_args!(
                "Polling Controller, retrieving UniFi Events, site {} ({})",
                site.name, site.desc
            ));
            debug!(site = %site.name, hours, "listing events");

            let path = paths::site(paths::API_EVENT_PATH, &site.name);
            let mut events: Vec<Event> = self.get_data(&path, Some(&params)).await?;

            for event in &mut events {
                event.site_name.clone_from(&site.site_name);
                event.source_name = self.config().source_name().to_owned();
            }

            all.extend(events);
        }

        Ok(all)
    }

    /// IDS/IPS events between `from` and `to` for each site.
    ///
    /// `POST /api/s/{site}/stat/ips/event` with `{"start", "end", "_limit"}`
    /// (bounds in epoch milliseconds)
    pub async fn get_ids(
        &self,
        sites: &[Site],
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<Vec<Ids>, Error> {
        let params = json!({
            "start": from.timestamp_millis(),
            "end": to.timestamp_millis(),
            "_limit": EVENT_LIMIT,
        });
        let mut all = Vec::new();

        for site in sites {
            self.config().debug_log.log(format_args!(
                "Polling Controller, retrieving UniFi IDS/IPS Data, site {} ({})",
                site.name, site.desc
            ));
            debug!(site = %site.name, %from, %to, "listing IDS events");

            let path = paths::site(paths::API_EVENT_PATH_IDS, &site.name);
            let mut events: Vec<Ids> = self.get_data(&path, Some(&params)).await?;

            for event in &mut events {
                event.site_name.clone_from(&site.site_name);
                event.source_name = self.config().source_name().to_owned();
            }

            all.extend(events);
        }

        Ok(all)
    }

    /// Alarms for each site.
    ///
    /// `GET /api/s/{site}/list/alarm`
    pub async fn get_alarms(&self, sites: &[Site]) -> Result<Vec<Alarm>, Error> {
        let mut all = Vec::new();

        for site in sites {
            self.config().debug_log.log(format_args!(
                "Polling Controller, retrieving UniFi Alarms, site {} ({})",
                site.name, site.desc
            ));
            debug!(site = %site.name, "listing alarms");

            let path = paths::site(paths::API_EVENT_PATH_ALARMS, &site.name);
            let mut alarms: Vec<Alarm> = self.get_data(&path, None).await?;

            for alarm in &mut alarms {
                alarm.site_name.clone_from(&site.site_name);
                alarm.source_name = self.config().source_name().to_owned();
            }

            all.extend(alarms);
        }

        Ok(all)
    }

    /// Anomalies between `from` and `to` for each site, one record per
    /// occurrence.
    ///
    /// `GET /api/s/{site}/stat/anomalies?scale=hourly&start={ms}&end={ms}`
    pub async fn get_anomalies(
        &self,
        sites: &[Site],
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<Vec<Anomaly>, Error> {
        let query = format!(
            "?scale=hourly&start={}&end={}",
            from.timestamp_millis(),
            to.timestamp_millis()
        );
        let mut all = Vec::new();

        for site in sites {
            self.config().debug_log.log(format_args!(
                "Polling Controller, retrieving UniFi Anomalies, site {} ({})",
                site.name, site.desc
            ));
            debug!(site = %site.name, %from, %to, "listing anomalies");

            let path = paths::site(paths::API_ANOMALIES_PATH, &site.name) + &query;
            let groups: Vec<AnomalyGroup> = self.get_data(&path, None).await?;

            let source = self.config().source_name();
            for group in groups {
                all.extend(group.into_anomalies(&site.site_name, source));
            }
        }

        Ok(all)
    }
}
