//! Profile resolution: config file + CLI overrides -> `ClientConfig`.
//!
//! Core never sees profiles. It receives a pre-built `ClientConfig`.

pub use nicconf_config::{
    Config, Profile, config_path, load_config, load_config_file, save_config_to,
};

use nicconf_core::ClientConfig;

use crate::cli::GlobalOpts;
use crate::error::CliError;

/// Build a `ClientConfig` from the config file, active profile, and flags.
///
/// `--api-base` alone is enough: with it an unknown profile name falls back
/// to an ad-hoc profile instead of failing.
pub fn build_client_config(global: &GlobalOpts) -> Result<ClientConfig, CliError> {
    let cfg = load_config()?;
    let profile_name = cfg.active_profile_name(global.profile.as_deref());

    let mut profile = match (cfg.profile(&profile_name), global.api_base.as_deref()) {
        (Ok(profile), _) => profile.clone(),
        (Err(_), Some(api_base)) => Profile::new(api_base),
        (Err(err), None) => return Err(err.into()),
    };

    // Flags beat the profile.
    if let Some(ref api_base) = global.api_base {
        profile.api_base.clone_from(api_base);
    }
    if global.timeout.is_some() {
        profile.timeout = global.timeout;
    }
    if global.insecure {
        profile.insecure = Some(true);
    }

    tracing::debug!(profile = %profile_name, api_base = %profile.api_base, "resolved profile");
    Ok(nicconf_config::profile_to_client_config(&profile, &cfg.defaults)?)
}
