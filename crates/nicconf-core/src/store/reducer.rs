// ── Edit folding ──
//
// An edit is a complete replacement `NicConfig` for one interface. It is
// filed under whatever interface is current when it arrives, and only
// that key changes: other interfaces and the name sequence are shared
// with the previous snapshot.

use std::sync::Arc;

use tracing::{debug, warn};

use super::ConfigStore;
use crate::error::CoreError;
use crate::model::{ConfigDocument, NicConfig};

impl ConfigStore {
    /// Store `edited` as the configuration of the current interface.
    ///
    /// Returns the resulting document. Fails with [`CoreError::NotReady`]
    /// before the configuration is loaded and [`CoreError::NoSelection`]
    /// when nothing is selected. If the user switched interfaces after
    /// opening the editor, the edit lands on the newly selected one; use
    /// [`apply_for`](Self::apply_for) to guard against that.
    pub fn apply(&self, edited: NicConfig) -> Result<Arc<ConfigDocument>, CoreError> {
        self.fold_edit(None, edited)
    }

    /// Like [`apply`](Self::apply), but only if `expected` is still the
    /// current interface; otherwise fails with [`CoreError::StaleTarget`].
    pub fn apply_for(
        &self,
        expected: &str,
        edited: NicConfig,
    ) -> Result<Arc<ConfigDocument>, CoreError> {
        self.fold_edit(Some(expected), edited)
    }

    fn fold_edit(
        &self,
        expected: Option<&str>,
        edited: NicConfig,
    ) -> Result<Arc<ConfigDocument>, CoreError> {
        self.modify(|snap| {
            if !snap.load_state.is_ready() {
                return (None, Err(CoreError::NotReady));
            }
            let Some(current) = snap.current.clone() else {
                return (None, Err(CoreError::NoSelection));
            };
            if let Some(expected) = expected {
                if current != *expected {
                    return (
                        None,
                        Err(CoreError::StaleTarget {
                            expected: expected.to_owned(),
                            current: current.into_string(),
                        }),
                    );
                }
            }

            let unchanged = snap
                .document
                .get(current.as_str())
                .is_some_and(|stored| **stored == edited);
            if unchanged {
                debug!(ifname = %current, "edit matches stored configuration");
                return (None, Ok(Arc::clone(&snap.document)));
            }

            if !snap.is_known(current.as_str()) {
                warn!(ifname = %current, "storing configuration for an interface the host did not report");
            }

            debug!(ifname = %current, "applying edit");
            let document = Arc::new(snap.document.with_nic(current, edited));
            let mut next = snap.clone();
            next.document = Arc::clone(&document);
            (Some(next), Ok(document))
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;
    use crate::loader::LoadedConfig;
    use crate::model::Ifname;

    fn ready_store() -> ConfigStore {
        let store = ConfigStore::new();
        store.begin_load().unwrap();
        store.publish_loaded(LoadedConfig {
            ifnames: vec!["eth0".into(), "eth1".into()],
            document: [(Ifname::from("eth0"), NicConfig::from(json!({ "dhcp": true })))]
                .into_iter()
                .collect(),
        });
        store
    }

    #[test]
    fn apply_before_ready_is_rejected() {
        let store = ConfigStore::new();
        store.select("eth0");
        let err = store.apply(NicConfig::from(json!({ "dhcp": false }))).unwrap_err();
        assert!(matches!(err, CoreError::NotReady));
        assert!(store.snapshot().document().is_empty());
    }

    #[test]
    fn apply_while_loading_is_rejected() {
        let store = ConfigStore::new();
        store.select("eth0");
        store.begin_load().unwrap();
        assert!(matches!(
            store.apply(NicConfig::empty()),
            Err(CoreError::NotReady)
        ));
    }

    #[test]
    fn apply_without_selection_is_rejected() {
        let store = ready_store();
        assert!(matches!(
            store.apply(NicConfig::empty()),
            Err(CoreError::NoSelection)
        ));
    }

    #[test]
    fn apply_adds_config_for_unconfigured_interface() {
        let store = ready_store();
        store.select("eth1");
        let doc = store.apply(NicConfig::from(json!({ "dhcp": false }))).unwrap();

        assert_eq!(
            serde_json::to_value(&*doc).unwrap(),
            json!({ "eth0": { "dhcp": true }, "eth1": { "dhcp": false } })
        );
        assert_eq!(store.snapshot().document(), &doc);
    }

    #[test]
    fn apply_leaves_other_interfaces_and_names_alone() {
        let store = ready_store();
        let before = store.snapshot();

        store.select("eth1");
        store.apply(NicConfig::from(json!({ "mtu": 1500 }))).unwrap();
        let after = store.snapshot();

        assert!(Arc::ptr_eq(
            before.document().get("eth0").unwrap(),
            after.document().get("eth0").unwrap()
        ));
        assert!(Arc::ptr_eq(before.ifnames(), after.ifnames()));
        // The previous snapshot is untouched.
        assert!(!before.document().contains("eth1"));
    }

    #[test]
    fn reapplying_same_value_is_idempotent() {
        let store = ready_store();
        store.select("eth1");
        let edited = NicConfig::from(json!({ "dhcp": false }));

        let first = store.apply(edited.clone()).unwrap();
        let rx = store.state.subscribe();
        let second = store.apply(edited).unwrap();

        assert_eq!(first, second);
        assert!(Arc::ptr_eq(&first, &second));
        assert!(!rx.has_changed().unwrap());
    }

    #[test]
    fn edit_follows_current_selection() {
        let store = ready_store();
        store.select("eth0");
        // Editor opened for eth0, user switches before submitting.
        store.select("eth1");
        store.apply(NicConfig::from(json!({ "dhcp": false }))).unwrap();

        let snap = store.snapshot();
        assert_eq!(
            snap.document().get("eth0").unwrap().get("dhcp"),
            Some(&json!(true))
        );
        assert_eq!(
            snap.document().get("eth1").unwrap().get("dhcp"),
            Some(&json!(false))
        );
    }

    #[test]
    fn apply_for_rejects_stale_target() {
        let store = ready_store();
        store.select("eth1");

        let err = store
            .apply_for("eth0", NicConfig::from(json!({ "dhcp": false })))
            .unwrap_err();
        match err {
            CoreError::StaleTarget { expected, current } => {
                assert_eq!(expected, "eth0");
                assert_eq!(current, "eth1");
            }
            other => panic!("expected StaleTarget, got {other:?}"),
        }
        assert!(!store.snapshot().document().contains("eth1"));
    }

    #[test]
    fn apply_for_matching_target_applies() {
        let store = ready_store();
        store.select("eth0");
        let doc = store
            .apply_for("eth0", NicConfig::from(json!({ "dhcp": false })))
            .unwrap();
        assert_eq!(doc.get("eth0").unwrap().get("dhcp"), Some(&json!(false)));
    }

    #[test]
    fn unknown_interface_edit_is_stored() {
        let store = ready_store();
        store.select("wlan9");
        let doc = store.apply(NicConfig::from(json!({ "ssid": "lab" }))).unwrap();
        assert!(doc.contains("wlan9"));
        assert_eq!(store.snapshot().ifnames().len(), 2);
    }
}
