// ── Aggregate configuration document ──
//
// Values are held behind `Arc` so a new document shares every untouched
// interface configuration with the one it was derived from.

use std::collections::BTreeMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::ifname::Ifname;
use super::nic::NicConfig;

/// Mapping from interface name to its configuration.
///
/// Immutable once built: [`with_nic`](Self::with_nic) returns a new
/// document and leaves `self` untouched. Interfaces that were never
/// configured are simply absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConfigDocument {
    nics: BTreeMap<Ifname, Arc<NicConfig>>,
}

impl ConfigDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, ifname: &str) -> Option<&Arc<NicConfig>> {
        self.nics.get(ifname)
    }

    pub fn contains(&self, ifname: &str) -> bool {
        self.nics.contains_key(ifname)
    }

    pub fn len(&self) -> usize {
        self.nics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nics.is_empty()
    }

    pub fn ifnames(&self) -> impl Iterator<Item = &Ifname> {
        self.nics.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Ifname, &Arc<NicConfig>)> {
        self.nics.iter()
    }

    /// A copy of this document with `ifname` set to `config`.
    ///
    /// Every other entry is shared with `self` by reference count.
    #[must_use]
    pub fn with_nic(&self, ifname: Ifname, config: NicConfig) -> Self {
        let mut nics = self.nics.clone();
        nics.insert(ifname, Arc::new(config));
        Self { nics }
    }
}

impl FromIterator<(Ifname, NicConfig)> for ConfigDocument {
    fn from_iter<I: IntoIterator<Item = (Ifname, NicConfig)>>(iter: I) -> Self {
        Self {
            nics: iter
                .into_iter()
                .map(|(name, config)| (name, Arc::new(config)))
                .collect(),
        }
    }
}
