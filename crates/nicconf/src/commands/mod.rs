//! Command dispatch: bridges CLI args -> session operations -> output formatting.

pub mod config_cmd;
pub mod interfaces;

use nicconf_core::Session;

use crate::cli::{Command, GlobalOpts};
use crate::error::CliError;

/// Dispatch an API-bound command to the appropriate handler.
pub async fn dispatch(cmd: Command, session: &Session, global: &GlobalOpts) -> Result<(), CliError> {
    match cmd {
        Command::List => interfaces::list(session, global).await,
        Command::Show(args) => interfaces::show(session, args, global).await,
        Command::Edit(args) => interfaces::edit(session, args, global).await,
        // Config is handled before dispatch
        Command::Config(_) => unreachable!(),
    }
}
