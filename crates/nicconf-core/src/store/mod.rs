// ── Reactive configuration store ──
//
// Copy-on-write state with push-based change notification.

mod config_store;
mod reducer;
mod selection;
mod snapshot;

pub use config_store::ConfigStore;
pub use snapshot::{LoadFailure, LoadState, StoreSnapshot};
