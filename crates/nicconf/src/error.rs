//! CLI error types with miette diagnostics.
//!
//! Maps `CoreError` and `ConfigError` variants into user-facing errors with
//! actionable help text.

use miette::Diagnostic;
use thiserror::Error;

use nicconf_config::ConfigError;
use nicconf_core::CoreError;

/// Process exit codes.
pub mod exit_code {
    pub const GENERAL: i32 = 1;
    pub const USAGE: i32 = 2;
    pub const NOT_FOUND: i32 = 4;
    pub const CONNECTION: i32 = 7;
    pub const TIMEOUT: i32 = 8;
}

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    // ── Connection ───────────────────────────────────────────────────

    #[error("Could not reach the configuration API at {url}")]
    #[diagnostic(
        code(nicconf::connection_failed),
        help(
            "Check that the API server is running and reachable.\n\
             {reason}\n\
             Try: nicconf --api-base http://localhost:8000/api list"
        )
    )]
    ConnectionFailed { url: String, reason: String },

    #[error("Request to the configuration API timed out")]
    #[diagnostic(
        code(nicconf::timeout),
        help("Increase timeout with --timeout or check server responsiveness.")
    )]
    Timeout,

    // ── Load ─────────────────────────────────────────────────────────

    #[error("Failed to load {resource}: {reason}")]
    #[diagnostic(
        code(nicconf::load_failed),
        help("Nothing was loaded. Check the API base of the active profile: nicconf config show")
    )]
    LoadFailed { resource: String, reason: String },

    // ── Interfaces ───────────────────────────────────────────────────

    #[error("Interface '{ifname}' not found")]
    #[diagnostic(
        code(nicconf::not_found),
        help("Run: nicconf list to see available interfaces")
    )]
    NotFound { ifname: String },

    #[error("{message}")]
    #[diagnostic(code(nicconf::state))]
    State { message: String },

    // ── Validation ───────────────────────────────────────────────────

    #[error("Invalid value for {field}: {reason}")]
    #[diagnostic(code(nicconf::validation))]
    Validation { field: String, reason: String },

    // ── Configuration ────────────────────────────────────────────────

    #[error("Profile '{name}' not found in configuration")]
    #[diagnostic(
        code(nicconf::profile_not_found),
        help(
            "Available profiles: {available}\n\
             Create one with: nicconf config init"
        )
    )]
    ProfileNotFound { name: String, available: String },

    #[error(transparent)]
    #[diagnostic(code(nicconf::config))]
    Config(Box<ConfigError>),

    // ── IO / Serialization ────────────────────────────────────────────

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Invalid JSON payload: {0}")]
    #[diagnostic(
        code(nicconf::json),
        help("Pass a complete JSON configuration, e.g. '{{\"dhcp\": true}}', or @file.json")
    )]
    Json(#[from] serde_json::Error),

    #[error("Failed to render YAML: {0}")]
    #[diagnostic(code(nicconf::yaml))]
    Yaml(#[from] serde_yaml::Error),
}

impl CliError {
    /// Map this error to an exit code for process termination.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::ConnectionFailed { .. } | Self::LoadFailed { .. } => exit_code::CONNECTION,
            Self::Timeout => exit_code::TIMEOUT,
            Self::NotFound { .. } => exit_code::NOT_FOUND,
            Self::Validation { .. } | Self::Json(_) | Self::ProfileNotFound { .. } => {
                exit_code::USAGE
            }
            _ => exit_code::GENERAL,
        }
    }
}

// ── ConfigError → CliError mapping ───────────────────────────────────

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::UnknownProfile { name, available } => {
                CliError::ProfileNotFound { name, available }
            }
            ConfigError::Validation { field, reason } => CliError::Validation { field, reason },
            ConfigError::Io(e) => CliError::Io(e),
            other => CliError::Config(Box::new(other)),
        }
    }
}

// ── CoreError → CliError mapping ─────────────────────────────────────

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::ConnectionFailed { url, reason } => {
                CliError::ConnectionFailed { url, reason }
            }

            CoreError::Timeout => CliError::Timeout,

            CoreError::LoadFailed { resource, source } => match *source {
                CoreError::ConnectionFailed { url, reason } => {
                    CliError::ConnectionFailed { url, reason }
                }
                CoreError::Timeout => CliError::Timeout,
                other => CliError::LoadFailed {
                    resource,
                    reason: other.to_string(),
                },
            },

            CoreError::Config { message } => CliError::Validation {
                field: "config".into(),
                reason: message,
            },

            other @ (CoreError::LoadInProgress
            | CoreError::LoadCancelled
            | CoreError::NotReady
            | CoreError::NoSelection
            | CoreError::StaleTarget { .. }
            | CoreError::Api { .. }
            | CoreError::Internal(_)) => CliError::State {
                message: other.to_string(),
            },
        }
    }
}
