//! Subcommand handlers. Every command prints pretty JSON on stdout.

use chrono::{Duration, Utc};
use serde::Serialize;

use unifi_rest::{Site, Unifi};
use unifi_rest_config::ALL_SITES;

use crate::cli::{Command, DpiArgs, WindowArgs};
use crate::error::CliError;

/// Run a controller command against a logged-in session.
pub async fn dispatch(cmd: Command, unifi: &Unifi, wanted: &[String]) -> Result<(), CliError> {
    match cmd {
        Command::Status => print_json(unifi.server()),
        Command::Sites => print_json(&unifi.get_sites().await?),
        Command::Clients => {
            let sites = selected_sites(unifi, wanted).await?;
            print_json(&unifi.get_clients(&sites).await?)
        }
        Command::Devices => {
            let sites = selected_sites(unifi, wanted).await?;
            print_json(&unifi.get_devices(&sites).await?)
        }
        Command::Events(WindowArgs { hours }) => {
            let sites = selected_sites(unifi, wanted).await?;
            print_json(&unifi.get_events(&sites, hours).await?)
        }
        Command::Ids(WindowArgs { hours }) => {
            let sites = selected_sites(unifi, wanted).await?;
            let to = Utc::now();
            let from = to - Duration::hours(i64::from(hours));
            print_json(&unifi.get_ids(&sites, from, to).await?)
        }
        Command::Alarms => {
            let sites = selected_sites(unifi, wanted).await?;
            print_json(&unifi.get_alarms(&sites).await?)
        }
        Command::Anomalies(WindowArgs { hours }) => {
            let sites = selected_sites(unifi, wanted).await?;
            let to = Utc::now();
            let from = to - Duration::hours(i64::from(hours));
            print_json(&unifi.get_anomalies(&sites, from, to).await?)
        }
        Command::Dpi(DpiArgs { clients }) => {
            let sites = selected_sites(unifi, wanted).await?;
            let tables = if clients {
                unifi.get_client_dpi(&sites).await?
            } else {
                unifi.get_site_dpi(&sites).await?
            };
            print_json(&tables)
        }
        Command::Networks => {
            let sites = selected_sites(unifi, wanted).await?;
            print_json(&unifi.get_networks(&sites).await?)
        }
        Command::Completions(_) => Ok(()),
    }
}

async fn selected_sites(unifi: &Unifi, wanted: &[String]) -> Result<Vec<Site>, CliError> {
    let sites = unifi.get_sites().await?;
    let sites = filter_sites(sites, wanted);
    tracing::debug!(count = sites.len(), "sites selected");
    Ok(sites)
}

/// Keep the sites named in `wanted`. Empty or containing `all` keeps every site.
fn filter_sites(sites: Vec<Site>, wanted: &[String]) -> Vec<Site> {
    if wanted.is_empty() || wanted.iter().any(|w| w.eq_ignore_ascii_case(ALL_SITES)) {
        return sites;
    }

    sites
        .into_iter()
        .filter(|s| wanted.iter().any(|w| *w == s.name))
        .collect()
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<(), CliError> {
    let out = serde_json::to_string_pretty(value)?;
    println!("{out}");
    Ok(())
}
