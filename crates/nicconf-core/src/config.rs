// ── Runtime client configuration ──
//
// Describes *where* the configuration API lives and how to talk to it.
// Never touches disk: the CLI builds a `ClientConfig` from its profile
// and hands it in.

use std::path::PathBuf;
use std::time::Duration;

use url::Url;

/// Default API base for a local development server.
pub const DEVELOPMENT_API_BASE: &str = "http://localhost:8000/api";

/// TLS verification strategy.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TlsVerification {
    /// System CA store (strict).
    #[default]
    SystemDefaults,
    /// Custom CA certificate file.
    CustomCa(PathBuf),
    /// Skip verification (self-signed certs).
    DangerAcceptInvalid,
}

/// Configuration for one configuration API endpoint.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API root; `/ifnames` and `/config` are resolved beneath it.
    pub api_base: Url,
    /// TLS verification strategy.
    pub tls: TlsVerification,
    /// Per-request timeout.
    pub timeout: Duration,
}

impl ClientConfig {
    pub fn new(api_base: Url) -> Self {
        Self {
            api_base,
            tls: TlsVerification::default(),
            timeout: Duration::from_secs(30),
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(
            DEVELOPMENT_API_BASE
                .parse()
                .expect("development API base is a valid URL"),
        )
    }
}
