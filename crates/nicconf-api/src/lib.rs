// nicconf-api: Async Rust client for the interface configuration API

pub mod client;
pub mod error;
pub mod transport;
pub mod types;

pub use client::ApiClient;
pub use error::Error;
pub use types::ConfigPayload;
