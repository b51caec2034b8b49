// Site listing is controller-scoped (not site-scoped), using
// `/api/stat/sites` rather than the usual `/api/s/{site}/...` pattern.

use tracing::debug;

use crate::client::Unifi;
use crate::error::Error;
use crate::models::Site;
use crate::paths;

impl Unifi {
    /// List all sites visible to the authenticated user.
    ///
    /// `GET /api/stat/sites` (controller-level, not site-scoped)
    pub async fn get_sites(&self) -> Result<Vec<Site>, Error> {
        debug!("listing sites");
        let mut sites: Vec<Site> = self.get_data(paths::API_SITE_LIST, None).await?;

        let source = self.config().source_name();
        for site in &mut sites {
            site.site_name = site.label();
            site.source_name = source.to_owned();
        }

        self.config()
            .debug_log
            .log(format_args!("Found {} site(s): {}", sites.len(), site_names(&sites)));

        Ok(sites)
    }
}

fn site_names(sites: &[Site]) -> String {
    sites
        .iter()
        .map(|s| s.name.as_str())
        .collect::<Vec<_>>()
        .join(",")
}
