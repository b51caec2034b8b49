use tracing::debug;

use crate::client::Unifi;
use crate::error::Error;
use crate::models::{Client, Site};
use crate::paths;

impl Unifi {
    /// List connected clients (stations) for each site.
    ///
    /// `GET /api/s/{site}/stat/sta`
    pub async fn get_clients(&self, sites: &[Site]) -> Result<Vec<Client>, Error> {
        let mut all = Vec::new();

        for site in sites {
            self.config().debug_log.log(format_args!(
                "Polling Controller, retrieving UniFi Clients, site {} ({})",
                site.name, site.desc
            ));
            debug!(site = %site.name, "listing clients");

            let path = paths::site(paths::API_CLIENT_PATH, &site.name);
            let mut clients: Vec<Client> = self.get_data(&path, None).await?;

            for client in &mut clients {
                client.site_name.clone_from(&site.site_name);
                client.source_name = self.config().source_name().to_owned();
            }

            all.extend(clients);
        }

        Ok(all)
    }
}
