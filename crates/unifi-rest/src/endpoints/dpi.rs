// Deep packet inspection statistics, site-wide and per client. Both
// endpoints want a POST naming the grouping; `by_app` tables also carry
// the `by_cat` breakdown.

use serde_json::json;
use tracing::debug;

use crate::client::Unifi;
use crate::error::Error;
use crate::models::{DpiTable, Site};
use crate::paths;

impl Unifi {
    /// Site-wide DPI statistics for each site.
    ///
    /// `POST /api/s/{site}/stat/sitedpi` with `{"type": "by_app"}`
    pub async fn get_site_dpi(&self, sites: &[Site]) -> Result<Vec<DpiTable>, Error> {
        self.get_dpi(sites, paths::API_SITE_DPI, "Site DPI").await
    }

    /// Per-client DPI statistics for each site.
    ///
    /// `POST /api/s/{site}/stat/stadpi` with `{"type": "by_app"}`
    pub async fn get_client_dpi(&self, sites: &[Site]) -> Result<Vec<DpiTable>, Error> {
        self.get_dpi(sites, paths::API_CLIENT_DPI, "Client DPI").await
    }

    async fn get_dpi(
        &self,
        sites: &[Site],
        template: &str,
        what: &str,
    ) -> Result<Vec<DpiTable>, Error> {
        let params = json!({ "type": "by_app" });
        let mut all = Vec::new();

        for site in sites {
            self.config().debug_log.log(format_args!(
                "Polling Controller, retrieving {what} data, site {} ({})",
                site.name, site.desc
            ));
            debug!(site = %site.name, what, "fetching DPI tables");

            let path = paths::site(template, &site.name);
            let mut tables: Vec<DpiTable> = self.get_data(&path, Some(&params)).await?;

            for table in &mut tables {
                table.site_name.clone_from(&site.site_name);
                table.source_name = self.config().source_name().to_owned();
            }

            all.extend(tables);
        }

        Ok(all)
    }
}
