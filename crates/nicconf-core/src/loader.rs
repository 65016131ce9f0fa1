// ── Initial load ──
//
// Issues both reads concurrently and only yields once both have
// succeeded. A failure on either side fails the whole load; nothing
// partial ever leaves this module.

use tracing::debug;

use crate::convert::{document_from_payload, ifnames_from_raw};
use crate::error::CoreError;
use crate::model::{ConfigDocument, Ifname};
use crate::source::ConfigSource;

/// The joined result of a successful load.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoadedConfig {
    pub ifnames: Vec<Ifname>,
    pub document: ConfigDocument,
}

/// Fetches interface names and configuration from a [`ConfigSource`].
#[derive(Debug)]
pub struct Loader<S> {
    source: S,
}

impl<S: ConfigSource> Loader<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Fetch `/ifnames` and `/config` in parallel and join them.
    ///
    /// Short-circuits on the first failure; the other request is dropped.
    /// There is no retry.
    pub async fn load(&self) -> Result<LoadedConfig, CoreError> {
        let (raw_ifnames, payload) = tokio::try_join!(
            async {
                self.source
                    .fetch_ifnames()
                    .await
                    .map_err(|e| CoreError::load_failed("ifnames", e))
            },
            async {
                self.source
                    .fetch_config()
                    .await
                    .map_err(|e| CoreError::load_failed("config", e))
            },
        )?;

        let loaded = LoadedConfig {
            ifnames: ifnames_from_raw(raw_ifnames),
            document: document_from_payload(payload),
        };

        debug!(
            ifnames = loaded.ifnames.len(),
            configured = loaded.document.len(),
            "configuration fetched"
        );

        Ok(loaded)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::future::Future;

    use serde_json::json;

    use super::*;
    use nicconf_api::ConfigPayload;

    struct StaticSource {
        ifnames: Result<Vec<String>, u16>,
        config: Result<serde_json::Value, u16>,
    }

    fn status(code: u16, path: &str) -> nicconf_api::Error {
        nicconf_api::Error::Status {
            status: code,
            url: format!("http://localhost:8000/api/{path}"),
        }
    }

    impl ConfigSource for StaticSource {
        fn fetch_ifnames(
            &self,
        ) -> impl Future<Output = Result<Vec<String>, nicconf_api::Error>> + Send {
            let result = self.ifnames.clone().map_err(|code| status(code, "ifnames"));
            async move { result }
        }

        fn fetch_config(
            &self,
        ) -> impl Future<Output = Result<ConfigPayload, nicconf_api::Error>> + Send {
            let result = self
                .config
                .clone()
                .map_err(|code| status(code, "config"))
                .map(|v| serde_json::from_value(v).unwrap());
            async move { result }
        }
    }

    #[tokio::test]
    async fn joins_both_results() {
        let loader = Loader::new(StaticSource {
            ifnames: Ok(vec!["eth0".into(), "eth1".into()]),
            config: Ok(json!({ "nics": { "eth0": { "dhcp": true } } })),
        });

        let loaded = loader.load().await.unwrap();
        assert_eq!(loaded.ifnames, vec!["eth0", "eth1"]);
        assert_eq!(loaded.document.len(), 1);
    }

    #[tokio::test]
    async fn config_failure_names_the_resource() {
        let loader = Loader::new(StaticSource {
            ifnames: Ok(vec!["eth0".into()]),
            config: Err(500),
        });

        let err = loader.load().await.unwrap_err();
        match err {
            CoreError::LoadFailed { ref resource, .. } => assert_eq!(resource, "config"),
            other => panic!("expected LoadFailed, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn ifnames_failure_names_the_resource() {
        let loader = Loader::new(StaticSource {
            ifnames: Err(404),
            config: Ok(json!({})),
        });

        let err = loader.load().await.unwrap_err();
        assert!(matches!(err, CoreError::LoadFailed { ref resource, .. } if resource == "ifnames"));
        assert_eq!(err.status(), Some(404));
    }
}
