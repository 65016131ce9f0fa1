// Wire types for the configuration API
//
// `/ifnames` is a bare JSON array of strings and needs no model. `/config`
// comes in two shapes depending on the server build, so it gets an
// untagged enum that accepts both.

use serde::Deserialize;
use serde_json::{Map, Value};

/// Body of `GET /config`.
///
/// The dashboard server wraps the per-interface mapping:
/// ```json
/// { "nics": { "eth0": { "dhcp": true } } }
/// ```
/// Older builds return the mapping directly. Extra top-level keys next to
/// `nics` are ignored.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ConfigPayload {
    Wrapped { nics: Map<String, Value> },
    Bare(Map<String, Value>),
}

impl ConfigPayload {
    /// The `ifname -> config` mapping, whichever shape it arrived in.
    pub fn into_nics(self) -> Map<String, Value> {
        match self {
            Self::Wrapped { nics } | Self::Bare(nics) => nics,
        }
    }
}
