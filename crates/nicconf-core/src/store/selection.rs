// ── Current-interface selection ──
//
// Selection is unconditional: any name can be selected, known or not,
// loaded or not. Resolution never yields a missing value.

use tracing::trace;

use super::ConfigStore;
use crate::model::{Ifname, NicConfig};

impl ConfigStore {
    /// Make `ifname` the current interface.
    pub fn select(&self, ifname: impl Into<Ifname>) {
        let ifname = ifname.into();
        trace!(%ifname, "select");
        self.modify(|snap| {
            if snap.current.as_ref() == Some(&ifname) {
                return (None, ());
            }
            let mut next = snap.clone();
            next.current = Some(ifname);
            (Some(next), ())
        });
    }

    /// Go back to "nothing selected".
    pub fn clear_selection(&self) {
        self.modify(|snap| {
            if snap.current.is_none() {
                return (None, ());
            }
            let mut next = snap.clone();
            next.current = None;
            (Some(next), ())
        });
    }

    pub fn current_ifname(&self) -> Option<Ifname> {
        self.state.borrow().current.clone()
    }

    /// Whether `ifname` was reported by the host. `false` before loading.
    pub fn is_known(&self, ifname: &str) -> bool {
        self.state.borrow().is_known(ifname)
    }

    /// Configuration of the current interface for display or editing.
    ///
    /// Default-resolution rule: when nothing is selected, or the selected
    /// interface has no stored configuration (unknown, never configured,
    /// or not loaded yet), the result is a fresh [`NicConfig::empty`].
    pub fn resolve_current_config(&self) -> NicConfig {
        let snap = self.state.borrow();
        snap.current
            .as_ref()
            .and_then(|name| snap.document.get(name.as_str()))
            .map_or_else(NicConfig::empty, |config| (**config).clone())
    }
}
