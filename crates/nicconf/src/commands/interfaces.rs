//! Interface command handlers: list, show, edit.

use serde::Serialize;
use tabled::Tabled;

use nicconf_core::{ConfigDocument, NicConfig, Session, StoreSnapshot};

use crate::cli::{EditArgs, GlobalOpts, ShowArgs};
use crate::error::CliError;
use crate::output;

// ── Table row ───────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
struct InterfaceSummary {
    ifname: String,
    configured: bool,
    keys: usize,
}

#[derive(Tabled)]
struct InterfaceRow {
    #[tabled(rename = "Interface")]
    ifname: String,
    #[tabled(rename = "Configured")]
    configured: &'static str,
    #[tabled(rename = "Keys")]
    keys: usize,
}

impl From<&InterfaceSummary> for InterfaceRow {
    fn from(s: &InterfaceSummary) -> Self {
        Self {
            ifname: s.ifname.clone(),
            configured: if s.configured { "yes" } else { "-" },
            keys: s.keys,
        }
    }
}

fn summarize(snap: &StoreSnapshot) -> Vec<InterfaceSummary> {
    let document = snap.document();
    snap.ifnames()
        .iter()
        .map(|ifname| {
            let stored = document.get(ifname.as_str());
            InterfaceSummary {
                ifname: ifname.to_string(),
                configured: stored.is_some(),
                keys: stored.map_or(0, |c| key_count(c)),
            }
        })
        .collect()
}

fn key_count(config: &NicConfig) -> usize {
    config
        .as_value()
        .as_object()
        .map_or(0, serde_json::Map::len)
}

// ── Helpers ─────────────────────────────────────────────────────────

/// Parse an inline JSON value, or read one from `@path`.
fn read_value(raw: &str) -> Result<serde_json::Value, CliError> {
    let text = match raw.strip_prefix('@') {
        Some(path) => std::fs::read_to_string(path)?,
        None => raw.to_owned(),
    };
    Ok(serde_json::from_str(&text)?)
}

fn require_known(session: &Session, ifname: &str) -> Result<(), CliError> {
    if session.is_known(ifname) {
        Ok(())
    } else {
        Err(CliError::NotFound {
            ifname: ifname.to_owned(),
        })
    }
}

fn render_document(document: &ConfigDocument, global: &GlobalOpts) -> Result<String, CliError> {
    output::render_single(&global.output, document, output::pretty_json, |doc| {
        Ok(doc
            .ifnames()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n"))
    })
}

// ── Handlers ────────────────────────────────────────────────────────

pub async fn list(session: &Session, global: &GlobalOpts) -> Result<(), CliError> {
    let snap = session.load().await?;
    let summaries = summarize(&snap);
    let out = output::render_list(
        &global.output,
        &summaries,
        InterfaceRow::from,
        |s| s.ifname.clone(),
    )?;
    output::print_output(&out, global.quiet);
    Ok(())
}

pub async fn show(session: &Session, args: ShowArgs, global: &GlobalOpts) -> Result<(), CliError> {
    let snap = session.load().await?;

    let Some(ifname) = args.ifname else {
        let out = render_document(snap.document(), global)?;
        output::print_output(&out, global.quiet);
        return Ok(());
    };

    require_known(session, &ifname)?;
    session.select(ifname);
    let config = session.resolve_current_config();
    let out = output::render_single(
        &global.output,
        &config,
        output::pretty_json,
        output::compact_json,
    )?;
    output::print_output(&out, global.quiet);
    Ok(())
}

pub async fn edit(session: &Session, args: EditArgs, global: &GlobalOpts) -> Result<(), CliError> {
    // Parse first so a bad payload never costs a round trip.
    let edited = NicConfig::new(read_value(&args.value)?);

    session.load().await?;
    require_known(session, &args.ifname)?;
    session.select(args.ifname.as_str());
    let document = session.apply_for(&args.ifname, edited)?;

    let out = render_document(&document, global)?;
    output::print_output(&out, global.quiet);
    output::print_warning(
        "edits are held in memory only and were not written back to the API",
        &global.color,
        global.quiet,
    );
    Ok(())
}
