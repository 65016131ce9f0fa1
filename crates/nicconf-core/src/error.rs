// ── Core error types ──
//
// User-facing errors from nicconf-core. Consumers never see HTTP status
// codes or JSON parse failures directly: the `From<nicconf_api::Error>`
// impl translates transport-layer errors into domain variants, and the
// loader wraps them with the resource that failed.

use thiserror::Error;

/// Unified error type for the core crate.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Connection errors ────────────────────────────────────────────
    #[error("Cannot reach configuration API at {url}: {reason}")]
    ConnectionFailed { url: String, reason: String },

    #[error("Configuration API request timed out")]
    Timeout,

    // ── Load errors ──────────────────────────────────────────────────
    #[error("Failed to load {resource}: {source}")]
    LoadFailed {
        /// Which endpoint failed (`"ifnames"` or `"config"`).
        resource: String,
        #[source]
        source: Box<CoreError>,
    },

    #[error("A configuration load is already in progress")]
    LoadInProgress,

    #[error("Configuration load was cancelled before it finished")]
    LoadCancelled,

    // ── State errors ─────────────────────────────────────────────────
    #[error("Configuration has not been loaded yet")]
    NotReady,

    #[error("No interface is selected")]
    NoSelection,

    #[error("Edit was made for '{expected}' but '{current}' is now selected")]
    StaleTarget { expected: String, current: String },

    // ── API errors (wrapped, not exposed raw) ────────────────────────
    #[error("API error: {message}")]
    Api {
        message: String,
        /// HTTP status code (if applicable).
        status: Option<u16>,
    },

    // ── Configuration errors ─────────────────────────────────────────
    #[error("Configuration error: {message}")]
    Config { message: String },

    // ── Internal errors ──────────────────────────────────────────────
    #[error("Internal error: {0}")]
    Internal(String),
}

impl CoreError {
    /// Wrap a per-endpoint failure as a load failure.
    pub(crate) fn load_failed(resource: &str, err: impl Into<CoreError>) -> Self {
        Self::LoadFailed {
            resource: resource.to_owned(),
            source: Box::new(err.into()),
        }
    }

    /// The innermost error, looking through `LoadFailed` wrappers.
    pub fn root(&self) -> &CoreError {
        match self {
            Self::LoadFailed { source, .. } => source.root(),
            other => other,
        }
    }

    /// HTTP status carried by the underlying API failure, if any.
    pub fn status(&self) -> Option<u16> {
        match self.root() {
            Self::Api { status, .. } => *status,
            _ => None,
        }
    }
}

// ── Conversion from transport-layer errors ───────────────────────────

impl From<nicconf_api::Error> for CoreError {
    fn from(err: nicconf_api::Error) -> Self {
        match err {
            nicconf_api::Error::Transport(ref e) => {
                if e.is_timeout() {
                    CoreError::Timeout
                } else if e.is_connect() {
                    CoreError::ConnectionFailed {
                        url: e
                            .url()
                            .map_or_else(|| "<unknown>".into(), ToString::to_string),
                        reason: e.to_string(),
                    }
                } else {
                    CoreError::Api {
                        message: e.to_string(),
                        status: e.status().map(|s| s.as_u16()),
                    }
                }
            }
            nicconf_api::Error::InvalidUrl(e) => CoreError::Config {
                message: format!("Invalid URL: {e}"),
            },
            nicconf_api::Error::Tls(msg) => CoreError::ConnectionFailed {
                url: String::new(),
                reason: format!("TLS error: {msg}"),
            },
            nicconf_api::Error::Status { status, url } => CoreError::Api {
                message: format!("HTTP {status} from {url}"),
                status: Some(status),
            },
            nicconf_api::Error::Deserialization { message, body: _ } => {
                CoreError::Internal(format!("Deserialization error: {message}"))
            }
        }
    }
}
