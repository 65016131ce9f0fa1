// ── Session facade ──
//
// Ties a `Loader` to a `ConfigStore`: `load()` drives the store through
// its lifecycle, and selection/edit commands delegate to the store.

use std::sync::Arc;

use tracing::info;

use nicconf_api::ApiClient;
use nicconf_api::transport::{TlsMode, TransportConfig};

use crate::config::{ClientConfig, TlsVerification};
use crate::error::CoreError;
use crate::loader::Loader;
use crate::model::{ConfigDocument, Ifname, NicConfig};
use crate::source::ConfigSource;
use crate::store::{ConfigStore, LoadState, StoreSnapshot};
use crate::stream::SnapshotStream;

/// The main entry point for consumers.
///
/// Cheaply cloneable via `Arc`; clones share one store. Create with
/// [`Session::connect`] for the HTTP API or [`Session::with_source`] for
/// any other [`ConfigSource`].
pub struct Session<S = ApiClient> {
    inner: Arc<SessionInner<S>>,
}

struct SessionInner<S> {
    loader: Loader<S>,
    store: Arc<ConfigStore>,
}

impl<S> Clone for Session<S> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl Session<ApiClient> {
    /// Build a session against the configuration API. Does NOT fetch --
    /// call [`load()`](Self::load).
    pub fn connect(config: &ClientConfig) -> Result<Self, CoreError> {
        let transport = build_transport(config);
        let client = ApiClient::new(config.api_base.clone(), &transport)?;
        info!(api_base = %config.api_base, "using configuration API");
        Ok(Self::with_source(client))
    }
}

impl<S: ConfigSource> Session<S> {
    pub fn with_source(source: S) -> Self {
        Self {
            inner: Arc::new(SessionInner {
                loader: Loader::new(source),
                store: Arc::new(ConfigStore::new()),
            }),
        }
    }

    /// Access the underlying store.
    pub fn store(&self) -> &Arc<ConfigStore> {
        &self.inner.store
    }

    pub fn source(&self) -> &S {
        self.inner.loader.source()
    }

    // ── Load lifecycle ───────────────────────────────────────────

    /// Fetch interface names and configuration and publish them together.
    ///
    /// On failure the store moves to [`LoadState::Failed`] and the error
    /// is returned; calling `load()` again retries. A load whose future is
    /// dropped before it completes also leaves the store `Failed`. Once
    /// ready, further calls return the current snapshot without fetching.
    pub async fn load(&self) -> Result<Arc<StoreSnapshot>, CoreError> {
        let store = &self.inner.store;
        if !store.begin_load()? {
            return Ok(store.snapshot());
        }

        // Dropping this future mid-fetch must not strand the store in `Loading`.
        let guard = store.guard_load();
        let result = self.inner.loader.load().await;
        guard.disarm();

        match result {
            Ok(loaded) => Ok(store.publish_loaded(loaded)),
            Err(err) => {
                store.mark_failed(&err);
                Err(err)
            }
        }
    }

    // ── Commands (delegate to the store) ─────────────────────────

    pub fn select(&self, ifname: impl Into<Ifname>) {
        self.inner.store.select(ifname);
    }

    pub fn clear_selection(&self) {
        self.inner.store.clear_selection();
    }

    pub fn apply(&self, edited: NicConfig) -> Result<Arc<ConfigDocument>, CoreError> {
        self.inner.store.apply(edited)
    }

    pub fn apply_for(
        &self,
        expected: &str,
        edited: NicConfig,
    ) -> Result<Arc<ConfigDocument>, CoreError> {
        self.inner.store.apply_for(expected, edited)
    }

    // ── Queries ──────────────────────────────────────────────────

    pub fn resolve_current_config(&self) -> NicConfig {
        self.inner.store.resolve_current_config()
    }

    pub fn current_ifname(&self) -> Option<Ifname> {
        self.inner.store.current_ifname()
    }

    pub fn is_known(&self, ifname: &str) -> bool {
        self.inner.store.is_known(ifname)
    }

    pub fn load_state(&self) -> LoadState {
        self.inner.store.load_state()
    }

    pub fn snapshot(&self) -> Arc<StoreSnapshot> {
        self.inner.store.snapshot()
    }

    pub fn subscribe(&self) -> SnapshotStream {
        self.inner.store.subscribe()
    }
}

fn build_transport(config: &ClientConfig) -> TransportConfig {
    TransportConfig {
        tls: match &config.tls {
            TlsVerification::SystemDefaults => TlsMode::System,
            TlsVerification::CustomCa(path) => TlsMode::CustomCa(path.clone()),
            TlsVerification::DangerAcceptInvalid => TlsMode::DangerAcceptInvalid,
        },
        timeout: config.timeout,
    }
}
