// ── Domain model ──
//
// Interface names, per-interface configuration, and the aggregate
// document the store publishes.

pub mod document;
pub mod ifname;
pub mod nic;

pub use document::ConfigDocument;
pub use ifname::Ifname;
pub use nic::NicConfig;
