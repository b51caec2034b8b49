//! Clap derive structures for the `unifi-rest` CLI.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

// ── Top-Level CLI ────────────────────────────────────────────────────

/// unifi-rest -- read-only queries against a UniFi network controller
#[derive(Debug, Parser)]
#[command(
    name = "unifi-rest",
    version,
    about = "Query UniFi network controllers over their REST API",
    long_about = "Reads sites, clients, devices, events and statistics from a UniFi\n\
        controller and prints them as JSON. Works with legacy controllers and\n\
        UniFi OS consoles; the firmware style is detected unless configured.",
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Command,
}

// ── Global Options ───────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// Config file (defaults to the platform config dir)
    #[arg(long, env = "UNIFI_REST_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Controller URL (overrides config)
    #[arg(long, global = true)]
    pub url: Option<String>,

    /// Login username (overrides config)
    #[arg(long, global = true)]
    pub user: Option<String>,

    /// Login password
    #[arg(long, env = "UNIFI_PASS", global = true, hide_env_values = true)]
    pub pass: Option<String>,

    /// Accept self-signed TLS certificates
    #[arg(long, short = 'k', global = true)]
    pub insecure: bool,

    /// Treat the controller as UniFi OS firmware instead of probing
    #[arg(long, global = true, conflicts_with = "legacy")]
    pub new: bool,

    /// Treat the controller as legacy firmware instead of probing
    #[arg(long, global = true)]
    pub legacy: bool,

    /// Site to poll; repeat for several, `all` for every site
    #[arg(long, short = 's', global = true)]
    pub site: Vec<String>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

// ── Commands ─────────────────────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Controller version and status
    Status,

    /// List sites
    Sites,

    /// List connected clients
    #[command(alias = "cl")]
    Clients,

    /// List adopted devices, grouped by kind
    #[command(alias = "dev")]
    Devices,

    /// Recent site events
    Events(WindowArgs),

    /// Recent IDS/IPS events
    Ids(WindowArgs),

    /// List alarms
    Alarms,

    /// Recent anomalies
    Anomalies(WindowArgs),

    /// Deep packet inspection statistics
    Dpi(DpiArgs),

    /// Network configuration
    #[command(alias = "net")]
    Networks,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(Debug, Args)]
pub struct WindowArgs {
    /// How many hours back to look
    #[arg(long, default_value = "1")]
    pub hours: u32,
}

#[derive(Debug, Args)]
pub struct DpiArgs {
    /// Per-client tables instead of site-wide
    #[arg(long)]
    pub clients: bool,
}

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: clap_complete::Shell,
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn command_tree_is_consistent() {
        Cli::command().debug_assert();
    }
}
