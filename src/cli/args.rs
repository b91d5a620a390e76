//! CLI argument definitions using clap.
//!
//! One subcommand per operation, each taking explicit input/output paths.
//! `protect` and `restore` share a `--mapping` option that defaults to the
//! conventional mapping file name in the working directory.

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

use crate::mapping::DEFAULT_MAPPING_FILE;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Extract(cmd)) => cmd.common.verbose,
            Some(Command::Import(cmd)) => cmd.common.verbose,
            Some(Command::Protect(cmd)) => cmd.common.verbose,
            Some(Command::Restore(cmd)) => cmd.common.verbose,
            None => false,
        }
    }
}

/// Common arguments shared by all subcommands.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct ExtractCommand {
    /// Script file to extract quoted strings from
    pub script: PathBuf,

    /// Destination for the line-tagged records
    pub output: PathBuf,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct ImportCommand {
    /// Original script file the records were extracted from
    pub script: PathBuf,

    /// Translated line-tagged file
    pub translated: PathBuf,

    /// Destination for the rewritten script (the original is never touched)
    pub output: PathBuf,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct ProtectCommand {
    /// Line-tagged file to shield before translation
    pub input: PathBuf,

    /// Destination for the protected records
    pub output: PathBuf,

    /// Where to write the placeholder mapping
    #[arg(long, env = "RENLOC_MAPPING", default_value = DEFAULT_MAPPING_FILE)]
    pub mapping: PathBuf,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct RestoreCommand {
    /// Translated file containing `@@n@@` markers
    pub input: PathBuf,

    /// Destination for the fully restored text
    pub output: PathBuf,

    /// Placeholder mapping produced by `protect`
    #[arg(long, env = "RENLOC_MAPPING", default_value = DEFAULT_MAPPING_FILE)]
    pub mapping: PathBuf,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Extract quoted strings from a Ren'Py script into a line-tagged file
    Extract(ExtractCommand),
    /// Re-insert translated strings into the original script by line number
    Import(ImportCommand),
    /// Replace placeholders with numeric markers before machine translation
    Protect(ProtectCommand),
    /// Substitute original placeholders back for their numeric markers
    Restore(RestoreCommand),
}
