// ── Configuration source seam ──
//
// The loader only needs the two reads. Keeping them behind a trait lets
// the store be driven by in-memory doubles as well as the HTTP client.

use std::future::Future;
use std::sync::Arc;

use nicconf_api::{ApiClient, ConfigPayload};

/// Something that can produce the interface list and the config document.
pub trait ConfigSource: Send + Sync {
    /// The ordered interface names on the host.
    fn fetch_ifnames(&self)
    -> impl Future<Output = Result<Vec<String>, nicconf_api::Error>> + Send;

    /// The full configuration document.
    fn fetch_config(&self)
    -> impl Future<Output = Result<ConfigPayload, nicconf_api::Error>> + Send;
}

impl ConfigSource for ApiClient {
    fn fetch_ifnames(
        &self,
    ) -> impl Future<Output = Result<Vec<String>, nicconf_api::Error>> + Send {
        self.get_ifnames()
    }

    fn fetch_config(&self) -> impl Future<Output = Result<ConfigPayload, nicconf_api::Error>> + Send {
        self.get_config()
    }
}

impl<S: ConfigSource> ConfigSource for Arc<S> {
    fn fetch_ifnames(
        &self,
    ) -> impl Future<Output = Result<Vec<String>, nicconf_api::Error>> + Send {
        (**self).fetch_ifnames()
    }

    fn fetch_config(&self) -> impl Future<Output = Result<ConfigPayload, nicconf_api::Error>> + Send {
        (**self).fetch_config()
    }
}
