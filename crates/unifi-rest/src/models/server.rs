use serde::{Deserialize, Serialize};

use crate::flex::FlexBool;

/// Controller identity from `/status`.
///
/// The controller returns this inside the envelope's `meta` object rather
/// than in `data`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ServerStatus {
    #[serde(default)]
    pub up: FlexBool,
    #[serde(default, deserialize_with = "super::nullable")]
    pub server_version: String,
    #[serde(default, deserialize_with = "super::nullable")]
    pub uuid: String,
}

/// `/status` response: the record lives in `meta`.
#[derive(Debug, Deserialize)]
pub(crate) struct StatusResponse {
    pub meta: ServerStatus,
}
