// ── Published store state ──

use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::error::CoreError;
use crate::model::{ConfigDocument, Ifname};

/// Why the last load attempt failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadFailure {
    /// Endpoint that failed (`"ifnames"` / `"config"`), when known.
    pub resource: Option<String>,
    pub message: String,
    pub status: Option<u16>,
}

impl LoadFailure {
    pub(crate) fn from_error(err: &CoreError) -> Self {
        let resource = match err {
            CoreError::LoadFailed { resource, .. } => Some(resource.clone()),
            _ => None,
        };
        Self {
            resource,
            message: err.root().to_string(),
            status: err.status(),
        }
    }
}

/// Load lifecycle.
///
/// `Ready` is terminal. `Failed` can be left only by starting another
/// load attempt.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LoadState {
    #[default]
    Uninitialized,
    Loading,
    Ready,
    Failed(LoadFailure),
}

impl LoadState {
    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Ready)
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed(_))
    }
}

/// One consistent view of the store.
///
/// Never mutated after publication: every command builds a new snapshot,
/// so anyone holding an `Arc<StoreSnapshot>` keeps a stable view.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StoreSnapshot {
    pub(crate) load_state: LoadState,
    pub(crate) ifnames: Arc<[Ifname]>,
    pub(crate) document: Arc<ConfigDocument>,
    pub(crate) current: Option<Ifname>,
    pub(crate) loaded_at: Option<DateTime<Utc>>,
}

impl StoreSnapshot {
    pub fn load_state(&self) -> &LoadState {
        &self.load_state
    }

    pub fn is_ready(&self) -> bool {
        self.load_state.is_ready()
    }

    /// Interface names in the order the host reported them.
    pub fn ifnames(&self) -> &Arc<[Ifname]> {
        &self.ifnames
    }

    pub fn document(&self) -> &Arc<ConfigDocument> {
        &self.document
    }

    /// The selected interface, `None` before anything was selected.
    pub fn current_ifname(&self) -> Option<&Ifname> {
        self.current.as_ref()
    }

    /// Whether `ifname` is one of the interfaces reported by the host.
    pub fn is_known(&self, ifname: &str) -> bool {
        self.ifnames.iter().any(|name| name == ifname)
    }

    /// When the configuration was loaded, `None` until ready.
    pub fn loaded_at(&self) -> Option<DateTime<Utc>> {
        self.loaded_at
    }

    /// A copy with a different load state; everything else shared.
    pub(crate) fn with_load_state(&self, load_state: LoadState) -> Self {
        Self {
            load_state,
            ..self.clone()
        }
    }
}
