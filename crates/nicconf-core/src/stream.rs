// ── Reactive snapshot streams ──
//
// Subscription type for consuming store changes.

use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};

use futures_core::Stream;
use tokio::sync::watch;
use tokio_stream::wrappers::WatchStream;

use crate::store::StoreSnapshot;

/// A subscription to the store.
///
/// Provides both point-in-time snapshot access and change notification
/// via [`changed()`](Self::changed) or by converting to a `Stream`. Every
/// value observed is a complete snapshot.
pub struct SnapshotStream {
    current: Arc<StoreSnapshot>,
    receiver: watch::Receiver<Arc<StoreSnapshot>>,
}

impl SnapshotStream {
    pub(crate) fn new(receiver: watch::Receiver<Arc<StoreSnapshot>>) -> Self {
        let current = receiver.borrow().clone();
        Self { current, receiver }
    }

    /// The snapshot captured at creation time or by the last `changed()`.
    pub fn current(&self) -> &Arc<StoreSnapshot> {
        &self.current
    }

    /// The latest snapshot (may have changed since creation).
    pub fn latest(&self) -> Arc<StoreSnapshot> {
        self.receiver.borrow().clone()
    }

    /// Wait for the next change, returning the new snapshot.
    /// Returns `None` if the store has been dropped.
    pub async fn changed(&mut self) -> Option<Arc<StoreSnapshot>> {
        self.receiver.changed().await.ok()?;
        let snap = self.receiver.borrow_and_update().clone();
        self.current = Arc::clone(&snap);
        Some(snap)
    }

    /// Wait until the store is ready or failed, returning that snapshot.
    /// Returns `None` if the store is dropped first.
    pub async fn settled(&mut self) -> Option<Arc<StoreSnapshot>> {
        loop {
            let snap = self.receiver.borrow_and_update().clone();
            if snap.is_ready() || snap.load_state().is_failed() {
                self.current = Arc::clone(&snap);
                return Some(snap);
            }
            self.receiver.changed().await.ok()?;
        }
    }

    /// Convert into a `Stream` for use with `StreamExt` combinators.
    pub fn into_stream(self) -> SnapshotWatchStream {
        SnapshotWatchStream {
            inner: WatchStream::new(self.receiver),
        }
    }
}

/// `Stream` adapter backed by a `watch::Receiver`.
///
/// Yields the current snapshot first, then one per change.
pub struct SnapshotWatchStream {
    inner: WatchStream<Arc<StoreSnapshot>>,
}

impl Stream for SnapshotWatchStream {
    type Item = Arc<StoreSnapshot>;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        Pin::new(&mut self.inner).poll_next(cx)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use tokio_stream::StreamExt;

    use crate::loader::LoadedConfig;
    use crate::store::{ConfigStore, LoadState};

    fn loaded() -> LoadedConfig {
        LoadedConfig {
            ifnames: vec!["eth0".into()],
            ..LoadedConfig::default()
        }
    }

    #[tokio::test]
    async fn changed_yields_new_snapshot() {
        let store = ConfigStore::new();
        let mut stream = store.subscribe();
        assert_eq!(*stream.current().load_state(), LoadState::Uninitialized);

        store.begin_load().unwrap();
        let snap = stream.changed().await.unwrap();
        assert_eq!(*snap.load_state(), LoadState::Loading);
        assert_eq!(*stream.current().load_state(), LoadState::Loading);
    }

    #[tokio::test]
    async fn settled_returns_once_ready() {
        let store = ConfigStore::new();
        let mut stream = store.subscribe();
        store.begin_load().unwrap();
        store.publish_loaded(loaded());

        let snap = stream.settled().await.unwrap();
        assert!(snap.is_ready());
        assert_eq!(snap.ifnames().len(), 1);
    }

    #[tokio::test]
    async fn latest_tracks_store_while_current_holds() {
        let store = ConfigStore::new();
        let stream = store.subscribe();
        store.begin_load().unwrap();
        store.publish_loaded(loaded());

        assert_eq!(*stream.current().load_state(), LoadState::Uninitialized);
        assert!(stream.latest().is_ready());
    }

    #[tokio::test]
    async fn stream_yields_current_then_latest() {
        let store = ConfigStore::new();
        let mut snapshots = store.subscribe().into_stream();

        let first = snapshots.next().await.unwrap();
        assert_eq!(*first.load_state(), LoadState::Uninitialized);

        store.begin_load().unwrap();
        store.publish_loaded(loaded());
        let next = snapshots.next().await.unwrap();
        assert!(next.is_ready());
        assert_eq!(next.ifnames().len(), 1);

        drop(store);
        assert!(snapshots.next().await.is_none());
    }

    #[tokio::test]
    async fn changed_returns_none_after_drop() {
        let store = ConfigStore::new();
        let mut stream = store.subscribe();
        drop(store);
        assert!(stream.changed().await.is_none());
    }
}
