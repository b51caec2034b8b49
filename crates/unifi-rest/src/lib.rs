// unifi-rest: Async Rust client for the UniFi controller REST API (legacy + UniFi OS)

pub mod client;
pub mod config;
pub mod error;
pub mod flex;
pub mod logger;
pub mod models;
pub mod paths;
pub mod transport;

mod endpoints;

pub use client::Unifi;
pub use config::Config;
pub use error::Error;
pub use flex::{FlexBool, FlexInt};
pub use logger::Logger;
pub use models::{
    Alarm, Anomaly, Client, Devices, DpiClient, DpiData, DpiTable, Event, Ids, Network, Port,
    ServerStatus, Site, SiteHealth, SysStats, SystemStats, Uap, Udm, Usg, Usw,
};
pub use transport::TransportConfig;
