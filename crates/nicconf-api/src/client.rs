// Configuration API HTTP client
//
// Wraps `reqwest::Client` with base-URL joining, status checking, and
// JSON decoding for the two read endpoints the dashboard serves.

use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use crate::error::Error;
use crate::transport::TransportConfig;
use crate::types::ConfigPayload;

/// Raw HTTP client for the interface configuration API.
///
/// `base_url` is the API root, e.g. `http://localhost:8000/api`; endpoint
/// paths are appended to it, so a path prefix on the base is preserved.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: Url,
}

impl ApiClient {
    /// Create a new client from a `TransportConfig`.
    pub fn new(base_url: Url, transport: &TransportConfig) -> Result<Self, Error> {
        let http = transport.build_client()?;
        Ok(Self { http, base_url })
    }

    /// Parse `base_url` and wrap an existing `reqwest::Client`.
    pub fn from_reqwest(base_url: &str, http: reqwest::Client) -> Result<Self, Error> {
        Ok(Self {
            http,
            base_url: Url::parse(base_url)?,
        })
    }

    // ── Endpoints ────────────────────────────────────────────────────

    /// `GET {base}/ifnames` -- the ordered interface names on the host.
    pub async fn get_ifnames(&self) -> Result<Vec<String>, Error> {
        let url = self.endpoint_url("ifnames")?;
        self.get_json(url).await
    }

    /// `GET {base}/config` -- the full configuration document.
    pub async fn get_config(&self) -> Result<ConfigPayload, Error> {
        let url = self.endpoint_url("config")?;
        self.get_json(url).await
    }

    // ── Request helpers ──────────────────────────────────────────────

    /// Build `{base}/{path}`, tolerating a trailing slash on the base.
    pub(crate) fn endpoint_url(&self, path: &str) -> Result<Url, Error> {
        let full = format!("{}/{}", self.base_url.as_str().trim_end_matches('/'), path);
        Ok(Url::parse(&full)?)
    }

    /// Send a GET request and decode the JSON body.
    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, Error> {
        debug!("GET {}", url);

        let resp = self
            .http
            .get(url.clone())
            .send()
            .await
            .map_err(Error::Transport)?;

        let status = resp.status();
        if !status.is_success() {
            return Err(Error::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = resp.text().await.map_err(Error::Transport)?;

        serde_json::from_str(&body).map_err(|e| Error::Deserialization {
            message: e.to_string(),
            body,
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn client(base: &str) -> ApiClient {
        ApiClient::from_reqwest(base, reqwest::Client::new()).unwrap()
    }

    #[test]
    fn endpoint_keeps_base_path_prefix() {
        let url = client("http://localhost:8000/api").endpoint_url("ifnames").unwrap();
        assert_eq!(url.as_str(), "http://localhost:8000/api/ifnames");
    }

    #[test]
    fn endpoint_tolerates_trailing_slash() {
        let url = client("http://localhost:8000/api/").endpoint_url("config").unwrap();
        assert_eq!(url.as_str(), "http://localhost:8000/api/config");
    }

    #[test]
    fn endpoint_on_bare_host() {
        let url = client("http://127.0.0.1:9000").endpoint_url("config").unwrap();
        assert_eq!(url.as_str(), "http://127.0.0.1:9000/config");
    }

    #[test]
    fn invalid_base_is_rejected() {
        let err = ApiClient::from_reqwest("not a url", reqwest::Client::new()).unwrap_err();
        assert!(matches!(err, Error::InvalidUrl(_)));
    }
}
