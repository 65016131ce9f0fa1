//! Client-side configuration state for host network interfaces.
//!
//! - **[`Session`]** -- facade: [`load()`](Session::load) fetches the
//!   interface list and configuration document concurrently and publishes
//!   them together; selection and edit commands delegate to the store.
//!
//! - **[`ConfigStore`]** -- copy-on-write state (load state, interface
//!   names, [`ConfigDocument`], current selection) published through a
//!   `tokio::sync::watch` channel as whole [`StoreSnapshot`]s.
//!
//! - **[`Loader`]** / **[`ConfigSource`]** -- the concurrent initial fetch,
//!   generic over where the data comes from.

pub mod config;
mod convert;
pub mod error;
pub mod loader;
pub mod model;
pub mod session;
pub mod source;
pub mod store;
pub mod stream;

// ── Primary re-exports ──────────────────────────────────────────────
pub use config::{ClientConfig, DEVELOPMENT_API_BASE, TlsVerification};
pub use error::CoreError;
pub use loader::{LoadedConfig, Loader};
pub use model::{ConfigDocument, Ifname, NicConfig};
pub use session::Session;
pub use source::ConfigSource;
pub use store::{ConfigStore, LoadFailure, LoadState, StoreSnapshot};
pub use stream::{SnapshotStream, SnapshotWatchStream};
