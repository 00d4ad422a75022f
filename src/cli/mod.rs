//! Command-line interface definitions for the `ec2-model` binary.
//!
//! This module centralises the clap parser structures so both the main binary
//! and the build script can reuse them when generating the manual page.

use camino::Utf8PathBuf;
use clap::{Args, Parser};

/// Top-level CLI for the `ec2-model` binary.
#[derive(Debug, Parser)]
#[command(
    name = "ec2-model",
    about = "List EC2 volume attachments and reservations from decoded API responses",
    arg_required_else_help = true
)]
pub(crate) enum Cli {
    /// List attachments ordered by attach time.
    #[command(name = "attachments", about = "List attachments ordered by attach time")]
    Attachments(ListCommand),
    /// List reservations ordered by reservation id.
    #[command(name = "reservations", about = "List reservations ordered by reservation id")]
    Reservations(ListCommand),
}

/// Arguments shared by the listing subcommands.
#[derive(Debug, Args)]
pub(crate) struct ListCommand {
    /// Path to a JSON response document.
    #[arg(value_name = "PATH")]
    pub(crate) path: Utf8PathBuf,
    /// Region applied to items when neither item nor document names one.
    ///
    /// Overrides `default_region` from configuration.
    #[arg(long, value_name = "REGION")]
    pub(crate) region: Option<String>,
    /// Drop entities without a natural key instead of failing the sort.
    #[arg(long)]
    pub(crate) skip_incomplete: bool,
    /// Output format: `text` or `json`.
    #[arg(long, value_name = "FORMAT")]
    pub(crate) format: Option<String>,
}
