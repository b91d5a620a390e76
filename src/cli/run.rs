//! Main entry point for the renloc CLI.
//!
//! Dispatches to the appropriate operation based on the parsed arguments.

use anyhow::Result;

use super::args::{Arguments, Command};
use crate::ops::{OpReport, extract::extract, import::import, protect::protect, restore::restore};

pub fn run(Arguments { command }: Arguments) -> Result<OpReport> {
    let report = match command {
        Some(Command::Extract(cmd)) => extract(&cmd.script, &cmd.output)?,
        Some(Command::Import(cmd)) => import(&cmd.script, &cmd.translated, &cmd.output)?,
        Some(Command::Protect(cmd)) => protect(&cmd.input, &cmd.output, &cmd.mapping)?,
        Some(Command::Restore(cmd)) => restore(&cmd.input, &cmd.output, &cmd.mapping)?,
        None => {
            anyhow::bail!("No command provided. Use --help to see available commands.")
        }
    };
    Ok(report)
}
