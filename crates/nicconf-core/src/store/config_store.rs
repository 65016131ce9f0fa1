// ── Configuration store ──
//
// Holds the single published `StoreSnapshot` in a `watch` channel. Every
// command computes a replacement snapshot from the current one and swaps
// it in as one unit, so observers never see a half-applied change.

use std::sync::Arc;

use chrono::Utc;
use tokio::sync::watch;
use tracing::{debug, info, warn};

use super::snapshot::{LoadFailure, LoadState, StoreSnapshot};
use crate::error::CoreError;
use crate::loader::LoadedConfig;
use crate::stream::SnapshotStream;

/// Reactive store for interface names, the configuration document, and
/// the current selection.
///
/// Queries read the latest snapshot; commands publish a new one. Selection
/// and edit commands live in `selection.rs` and `reducer.rs`.
pub struct ConfigStore {
    pub(crate) state: watch::Sender<Arc<StoreSnapshot>>,
}

impl ConfigStore {
    pub fn new() -> Self {
        let (state, _) = watch::channel(Arc::new(StoreSnapshot::default()));
        Self { state }
    }

    // ── Queries ──────────────────────────────────────────────────────

    /// The current snapshot (cheap `Arc` clone).
    pub fn snapshot(&self) -> Arc<StoreSnapshot> {
        self.state.borrow().clone()
    }

    pub fn load_state(&self) -> LoadState {
        self.state.borrow().load_state.clone()
    }

    /// Subscribe to snapshot changes.
    pub fn subscribe(&self) -> SnapshotStream {
        SnapshotStream::new(self.state.subscribe())
    }

    // ── Load lifecycle ───────────────────────────────────────────────

    /// Move to `Loading` ahead of a fetch.
    ///
    /// Returns `Ok(false)` when the store is already ready, in which case
    /// nothing should be fetched. Fails if another load is in flight.
    pub fn begin_load(&self) -> Result<bool, CoreError> {
        self.modify(|snap| match snap.load_state {
            LoadState::Ready => (None, Ok(false)),
            LoadState::Loading => (None, Err(CoreError::LoadInProgress)),
            LoadState::Uninitialized | LoadState::Failed(_) => {
                (Some(snap.with_load_state(LoadState::Loading)), Ok(true))
            }
        })
    }

    /// Publish a completed load: names, document and `Ready` in one swap.
    ///
    /// A store that is already ready keeps its data; the result is ignored.
    pub fn publish_loaded(&self, loaded: LoadedConfig) -> Arc<StoreSnapshot> {
        let published = self.modify(|snap| {
            if snap.load_state.is_ready() {
                return (None, false);
            }
            let next = StoreSnapshot {
                load_state: LoadState::Ready,
                ifnames: loaded.ifnames.into(),
                document: Arc::new(loaded.document),
                current: snap.current.clone(),
                loaded_at: Some(Utc::now()),
            };
            (Some(next), true)
        });

        let snap = self.snapshot();
        if published {
            info!(
                ifnames = snap.ifnames.len(),
                configured = snap.document.len(),
                "configuration loaded"
            );
        } else {
            debug!("store already ready, discarding late load result");
        }
        snap
    }

    /// Arm a guard for the load started by [`begin_load`](Self::begin_load).
    ///
    /// If the guard is dropped before [`LoadGuard::disarm`], the load was
    /// abandoned mid-flight and the store moves to `Failed`, so a later
    /// `begin_load` can retry.
    pub(crate) fn guard_load(&self) -> LoadGuard<'_> {
        LoadGuard {
            store: self,
            armed: true,
        }
    }

    /// Record a failed load. Names and document stay at their defaults.
    pub fn mark_failed(&self, err: &CoreError) {
        let failure = LoadFailure::from_error(err);
        let changed = self.modify(|snap| match snap.load_state {
            LoadState::Ready => (None, false),
            _ => (
                Some(snap.with_load_state(LoadState::Failed(failure))),
                true,
            ),
        });

        if changed {
            warn!(error = %err, "configuration load failed");
        }
    }

    // ── Private helpers ──────────────────────────────────────────────

    /// Compute a replacement for the current snapshot and publish it.
    ///
    /// `f` returns `(None, _)` to leave the store unchanged (no wake-up
    /// for subscribers). The check and the swap happen under the channel's
    /// write lock, so concurrent commands serialize.
    #[allow(clippy::expect_used)]
    pub(crate) fn modify<R>(
        &self,
        f: impl FnOnce(&StoreSnapshot) -> (Option<StoreSnapshot>, R),
    ) -> R {
        let mut out = None;
        self.state.send_if_modified(|current| {
            let (next, result) = f(current);
            out = Some(result);
            match next {
                Some(next) => {
                    *current = Arc::new(next);
                    true
                }
                None => false,
            }
        });
        // `send_if_modified` runs its closure exactly once before returning.
        out.expect("send_if_modified always runs its closure")
    }
}

// ── Load guard ───────────────────────────────────────────────────────

/// Keeps a cancelled load from leaving the store in `Loading`.
pub(crate) struct LoadGuard<'a> {
    store: &'a ConfigStore,
    armed: bool,
}

impl LoadGuard<'_> {
    /// The load finished and its outcome is being recorded by the caller.
    pub(crate) fn disarm(mut self) {
        self.armed = false;
    }
}

impl Drop for LoadGuard<'_> {
    fn drop(&mut self) {
        if self.armed {
            self.store.mark_failed(&CoreError::LoadCancelled);
        }
    }
}

impl Default for ConfigStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::model::{ConfigDocument, Ifname, NicConfig};

    fn loaded() -> LoadedConfig {
        LoadedConfig {
            ifnames: vec![Ifname::from("eth0"), Ifname::from("eth1")],
            document: [(Ifname::from("eth0"), NicConfig::from(json!({ "dhcp": true })))]
                .into_iter()
                .collect::<ConfigDocument>(),
        }
    }

    fn failure() -> CoreError {
        CoreError::load_failed(
            "config",
            nicconf_api::Error::Status {
                status: 500,
                url: "http://localhost:8000/api/config".into(),
            },
        )
    }

    #[test]
    fn starts_uninitialized_and_empty() {
        let store = ConfigStore::new();
        let snap = store.snapshot();
        assert_eq!(*snap.load_state(), LoadState::Uninitialized);
        assert!(snap.ifnames().is_empty());
        assert!(snap.document().is_empty());
        assert!(snap.current_ifname().is_none());
        assert!(snap.loaded_at().is_none());
    }

    #[test]
    fn begin_load_moves_to_loading() {
        let store = ConfigStore::new();
        assert!(store.begin_load().unwrap());
        assert_eq!(store.load_state(), LoadState::Loading);
    }

    #[test]
    fn begin_load_twice_is_rejected() {
        let store = ConfigStore::new();
        store.begin_load().unwrap();
        assert!(matches!(store.begin_load(), Err(CoreError::LoadInProgress)));
    }

    #[test]
    fn publish_sets_everything_at_once() {
        let store = ConfigStore::new();
        store.begin_load().unwrap();
        let snap = store.publish_loaded(loaded());

        assert!(snap.is_ready());
        assert_eq!(snap.ifnames().len(), 2);
        assert_eq!(snap.document().len(), 1);
        assert!(snap.loaded_at().is_some());
    }

    #[test]
    fn ready_never_reverts() {
        let store = ConfigStore::new();
        store.begin_load().unwrap();
        store.publish_loaded(loaded());

        assert!(!store.begin_load().unwrap());
        store.mark_failed(&failure());
        store.publish_loaded(LoadedConfig::default());

        let snap = store.snapshot();
        assert!(snap.is_ready());
        assert_eq!(snap.ifnames().len(), 2);
    }

    #[test]
    fn failure_is_explicit_and_keeps_defaults() {
        let store = ConfigStore::new();
        store.begin_load().unwrap();
        store.mark_failed(&failure());

        let snap = store.snapshot();
        match snap.load_state() {
            LoadState::Failed(failure) => {
                assert_eq!(failure.resource.as_deref(), Some("config"));
                assert_eq!(failure.status, Some(500));
            }
            other => panic!("expected Failed, got {other:?}"),
        }
        assert!(snap.ifnames().is_empty());
        assert!(snap.document().is_empty());
    }

    #[test]
    fn failed_store_can_reload() {
        let store = ConfigStore::new();
        store.begin_load().unwrap();
        store.mark_failed(&failure());

        assert!(store.begin_load().unwrap());
        let snap = store.publish_loaded(loaded());
        assert!(snap.is_ready());
    }

    #[test]
    fn dropped_guard_fails_the_load() {
        let store = ConfigStore::new();
        store.begin_load().unwrap();
        drop(store.guard_load());

        match store.load_state() {
            LoadState::Failed(failure) => {
                assert!(failure.resource.is_none());
                assert!(failure.message.contains("cancelled"));
            }
            other => panic!("expected Failed, got {other:?}"),
        }
        assert!(store.begin_load().unwrap());
    }

    #[test]
    fn disarmed_guard_leaves_state_alone() {
        let store = ConfigStore::new();
        store.begin_load().unwrap();
        store.guard_load().disarm();
        assert_eq!(store.load_state(), LoadState::Loading);
    }

    #[test]
    fn old_snapshot_survives_publish() {
        let store = ConfigStore::new();
        let before = store.snapshot();
        store.begin_load().unwrap();
        store.publish_loaded(loaded());

        assert_eq!(*before.load_state(), LoadState::Uninitialized);
        assert!(before.ifnames().is_empty());
    }
}
