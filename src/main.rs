//! Binary entry point for the `ec2-model` CLI.

use std::io::{self, Write};
use std::process;

use clap::Parser;
use thiserror::Error;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use ec2_model::{
    ConfigError, DecodeError, DocumentError, IncompletePolicy, Listing, ModelConfig,
    OutputFormat, Region, ReportError, ResponseDecoder, read_document,
};

mod cli;

use cli::{Cli, ListCommand};

#[derive(Debug, Error)]
enum CliError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("invalid --region: {0}")]
    Region(String),
    #[error("invalid --format: {0}")]
    Format(String),
    #[error(transparent)]
    Document(#[from] DocumentError),
    #[error(transparent)]
    Decode(#[from] DecodeError),
    #[error(transparent)]
    Report(#[from] ReportError),
    #[error("failed to write output: {0}")]
    Output(#[from] io::Error),
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Resource {
    Attachments,
    Reservations,
}

fn main() {
    init_tracing();
    let cli = Cli::parse();
    let exit_code = match dispatch(cli) {
        Ok(()) => 0,
        Err(err) => {
            report_error(&err);
            1
        }
    };

    process::exit(exit_code);
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn dispatch(cli: Cli) -> Result<(), CliError> {
    let config = ModelConfig::load_without_cli_args()?;
    let (resource, args) = match cli {
        Cli::Attachments(args) => (Resource::Attachments, args),
        Cli::Reservations(args) => (Resource::Reservations, args),
    };
    let rendered = list(resource, &args, &config)?;
    io::stdout().write_all(rendered.as_bytes())?;
    Ok(())
}

fn list(resource: Resource, args: &ListCommand, config: &ModelConfig) -> Result<String, CliError> {
    let region = match args.region.as_deref() {
        Some(token) => Some(Region::new(token).map_err(|err| CliError::Region(err.to_string()))?),
        None => config.default_region()?,
    };
    let format = match args.format.as_deref() {
        Some(value) => value
            .parse::<OutputFormat>()
            .map_err(|err| CliError::Format(err.to_string()))?,
        None => config.output_format()?,
    };
    let policy = if args.skip_incomplete {
        IncompletePolicy::Skip
    } else {
        config.incomplete_policy()
    };
    let listing = Listing::new(policy, format);
    let decoder = ResponseDecoder::new().with_default_region(region);

    debug!(path = %args.path, ?resource, "reading response document");
    let document = read_document(&args.path)?;
    let rendered = match resource {
        Resource::Attachments => listing.render_attachments(decoder.decode_attachments(&document)?)?,
        Resource::Reservations => {
            listing.render_reservations(decoder.decode_reservations(&document)?)?
        }
    };
    Ok(rendered)
}

fn report_error(err: &CliError) {
    write_error(io::stderr(), err);
}

fn write_error(mut target: impl Write, err: &CliError) {
    writeln!(target, "{err}").ok();
}
