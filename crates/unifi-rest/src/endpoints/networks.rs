use tracing::debug;

use crate::client::Unifi;
use crate::error::Error;
use crate::models::{Network, Site};
use crate::paths;

impl Unifi {
    /// List network configuration for each site.
    ///
    /// `GET /api/s/{site}/rest/networkconf`
    pub async fn get_networks(&self, sites: &[Site]) -> Result<Vec<Network>, Error> {
        let mut all = Vec::new();

        for site in sites {
            self.config().debug_log.log(format_args!(
                "Polling Controller, retrieving UniFi Networks, site {} ({})",
                site.name, site.desc
            ));
            debug!(site = %site.name, "listing networks");

            let path = paths::site(paths::API_NETWORK_PATH, &site.name);
            let mut networks: Vec<Network> = self.get_data(&path, None).await?;

            for network in &mut networks {
                network.site_name.clone_from(&site.site_name);
                network.source_name = self.config().source_name().to_owned();
            }

            all.extend(networks);
        }

        Ok(all)
    }
}
