// Endpoint fetchers
//
// Inherent methods on `Unifi`, one file per area. Site-scoped fetchers take
// the sites returned by `get_sites`, poll them in order, and tag every
// record with the site label and controller URL it came from.

mod clients;
mod devices;
mod dpi;
mod events;
mod networks;
mod sites;

/// Cap on records requested from event-style endpoints.
pub(crate) const EVENT_LIMIT: u32 = 50_000;
