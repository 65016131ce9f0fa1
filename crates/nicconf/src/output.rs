//! Rendering for `--output`, plus the stderr warning line.

use std::io::{self, IsTerminal, Write};

use owo_colors::OwoColorize;
use serde::Serialize;
use tabled::{Table, Tabled, settings::Style};

use crate::cli::{ColorMode, OutputFormat};
use crate::error::CliError;

/// Print a warning to stderr unless `quiet`. Colored only on a terminal
/// without `NO_COLOR`, or when forced with `--color always`.
pub fn print_warning(message: &str, color: &ColorMode, quiet: bool) {
    if quiet {
        return;
    }
    let colored = match color {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => io::stderr().is_terminal() && std::env::var_os("NO_COLOR").is_none(),
    };
    let mut stderr = io::stderr().lock();
    if colored {
        let _ = writeln!(stderr, "{} {message}", "warning:".yellow().bold());
    } else {
        let _ = writeln!(stderr, "warning: {message}");
    }
}

/// Write rendered output to stdout. Nothing is printed when `quiet` or empty.
pub fn print_output(output: &str, quiet: bool) {
    if quiet || output.is_empty() {
        return;
    }
    let _ = writeln!(io::stdout().lock(), "{output}");
}

/// Render rows. `table` goes through `to_row`, `plain` prints one `id_fn`
/// per line, structured formats serialize `data` itself.
pub fn render_list<'a, T, R>(
    format: &OutputFormat,
    data: &'a [T],
    to_row: impl Fn(&'a T) -> R,
    id_fn: impl Fn(&T) -> String,
) -> Result<String, CliError>
where
    T: Serialize,
    R: Tabled,
{
    match format {
        OutputFormat::Table => {
            let rows: Vec<R> = data.iter().map(to_row).collect();
            Ok(Table::new(rows).with(Style::rounded()).to_string())
        }
        OutputFormat::Plain => Ok(data.iter().map(id_fn).collect::<Vec<_>>().join("\n")),
        _ => serialize(format, data),
    }
}

/// Render one free-form value. There are no fixed columns, so `table`
/// falls back to `detail_fn`.
pub fn render_single<T>(
    format: &OutputFormat,
    data: &T,
    detail_fn: impl Fn(&T) -> Result<String, CliError>,
    id_fn: impl Fn(&T) -> Result<String, CliError>,
) -> Result<String, CliError>
where
    T: Serialize + ?Sized,
{
    match format {
        OutputFormat::Table => detail_fn(data),
        OutputFormat::Plain => id_fn(data),
        _ => serialize(format, data),
    }
}

fn serialize<T: Serialize + ?Sized>(format: &OutputFormat, data: &T) -> Result<String, CliError> {
    Ok(match format {
        OutputFormat::Yaml => serde_yaml::to_string(data)?,
        OutputFormat::JsonCompact => compact_json(data)?,
        _ => pretty_json(data)?,
    })
}

pub fn pretty_json<T: Serialize + ?Sized>(data: &T) -> Result<String, CliError> {
    Ok(serde_json::to_string_pretty(data)?)
}

pub fn compact_json<T: Serialize + ?Sized>(data: &T) -> Result<String, CliError> {
    Ok(serde_json::to_string(data)?)
}
