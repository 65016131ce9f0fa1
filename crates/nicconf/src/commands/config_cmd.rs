//! Config subcommand handlers.

use dialoguer::Input;

use crate::cli::{ConfigArgs, ConfigCommand, GlobalOpts, InitArgs};
use crate::config::{self, Config, Profile};
use crate::error::CliError;
use crate::output;

// ── Helpers ─────────────────────────────────────────────────────────

/// Format config for display as TOML-like text.
fn format_config(cfg: &Config) -> String {
    use std::fmt::Write;
    let mut out = String::new();

    if let Some(ref default) = cfg.default_profile {
        let _ = writeln!(out, "default_profile = \"{default}\"");
    }
    let _ = writeln!(out);
    let _ = writeln!(out, "[defaults]");
    let _ = writeln!(out, "timeout = {}", cfg.defaults.timeout);
    let _ = writeln!(out, "insecure = {}", cfg.defaults.insecure);

    for (name, p) in &cfg.profiles {
        let _ = writeln!(out);
        let _ = writeln!(out, "[profiles.{name}]");
        let _ = writeln!(out, "api_base = \"{}\"", p.api_base);
        if let Some(timeout) = p.timeout {
            let _ = writeln!(out, "timeout = {timeout}");
        }
        if let Some(ref ca) = p.ca_cert {
            let _ = writeln!(out, "ca_cert = \"{}\"", ca.display());
        }
        if let Some(insecure) = p.insecure {
            let _ = writeln!(out, "insecure = {insecure}");
        }
    }

    out.trim_end().to_owned()
}

/// Map a dialoguer / interactive I/O failure into CliError.
fn prompt_err(e: impl std::fmt::Display) -> CliError {
    CliError::Validation {
        field: "interactive".into(),
        reason: format!("prompt failed: {e}"),
    }
}

fn prompt_or(value: Option<String>, prompt: &str, default: &str) -> Result<String, CliError> {
    match value {
        Some(v) => Ok(v),
        None => Input::new()
            .with_prompt(prompt)
            .default(default.to_owned())
            .interact_text()
            .map_err(prompt_err),
    }
}

// ── Handlers ────────────────────────────────────────────────────────

pub fn handle(args: ConfigArgs, global: &GlobalOpts) -> Result<(), CliError> {
    match args.command {
        ConfigCommand::Path => {
            output::print_output(&config::config_path().display().to_string(), global.quiet);
            Ok(())
        }

        ConfigCommand::Show => {
            let cfg = config::load_config()?;
            let out = output::render_single(
                &global.output,
                &cfg,
                |c| Ok(format_config(c)),
                |c| Ok(c.profile_names().join("\n")),
            )?;
            output::print_output(&out, global.quiet);
            Ok(())
        }

        ConfigCommand::Init(init) => handle_init(init, global),
    }
}

fn handle_init(args: InitArgs, global: &GlobalOpts) -> Result<(), CliError> {
    let path = args.file.unwrap_or_else(config::config_path);
    if !global.quiet {
        eprintln!("Config path: {}", path.display());
    }

    let name = prompt_or(args.name, "Profile name", "development")?;
    let url = prompt_or(args.url, "API base URL", nicconf_core::DEVELOPMENT_API_BASE)?;
    nicconf_config::parse_api_base(&url)?;

    // Only the file's own contents go back to disk.
    let mut cfg = config::load_config_file(&path)?;
    let mut profile = Profile::new(url);
    profile.ca_cert = args.ca_cert;
    cfg.profiles.insert(name.clone(), profile);
    cfg.default_profile = Some(name.clone());

    config::save_config_to(&path, &cfg)?;

    if !global.quiet {
        eprintln!("✓ Configuration written to {}", path.display());
        eprintln!("  Active profile: {name}");
        eprintln!("\n  Test it: nicconf list");
    }
    Ok(())
}
