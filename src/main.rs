use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;

use clap::{Parser, ValueEnum};
use lsp_types::{ClientCapabilities, MarkupContent, MarkupKind};
use taghelper_docs::logging::{LogConfig, init_logging};
use taghelper_docs::{
    CapabilityProvider, ClientFormatCapability, DescriptionError, DescriptionFactory,
    DescriptionRequest, LazyCapabilities, log_timing,
};
use thiserror::Error;
use tracing::{Level, debug, info, warn};

/// Environment variable listing documentation formats, e.g. "markdown,plaintext"
const DOC_FORMATS_ENV: &str = "TAGHELPER_DOC_FORMATS";

/// CLI arguments for rendering tag helper descriptions
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// JSON description request to render (defaults to stdin)
    #[arg(long, value_name = "FILE")]
    input: Option<PathBuf>,

    /// Documentation format accepted by the client, in preference order
    #[arg(long = "format", value_enum, value_name = "FORMAT")]
    formats: Vec<FormatArg>,

    /// LSP client capabilities JSON to negotiate the format from
    #[arg(long, value_name = "FILE", conflicts_with = "formats")]
    capabilities: Option<PathBuf>,

    /// Print an LSP MarkupContent object instead of raw text
    #[arg(long)]
    json: bool,

    /// Log level (overrides RUST_LOG env var)
    #[arg(long, value_name = "LEVEL")]
    log_level: Option<String>,

    /// Log file path (overrides TAGHELPER_LOG_FILE env var)
    #[arg(long, value_name = "FILE")]
    log_file: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum FormatArg {
    Markdown,
    Plaintext,
}

impl From<FormatArg> for MarkupKind {
    fn from(format: FormatArg) -> Self {
        match format {
            FormatArg::Markdown => MarkupKind::Markdown,
            FormatArg::Plaintext => MarkupKind::PlainText,
        }
    }
}

#[derive(Error, Debug)]
enum CliError {
    #[error("Failed to read {source_name}: {error}")]
    Read { source_name: String, error: io::Error },

    #[error("Invalid JSON in {source_name}: {error}")]
    Json {
        source_name: String,
        error: serde_json::Error,
    },

    #[error("Failed to serialize output: {0}")]
    Output(#[from] serde_json::Error),

    #[error(transparent)]
    Description(#[from] DescriptionError),
}

/// Parse a comma separated format list, skipping unknown entries
fn parse_formats(value: &str) -> Vec<MarkupKind> {
    value
        .split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .filter_map(|name| match name.to_ascii_lowercase().as_str() {
            "markdown" => Some(MarkupKind::Markdown),
            "plaintext" => Some(MarkupKind::PlainText),
            _ => {
                warn!("Ignoring unknown documentation format: {}", name);
                None
            }
        })
        .collect()
}

fn read_source(path: Option<&Path>) -> Result<(String, String), CliError> {
    match path {
        Some(path) => {
            let source_name = path.display().to_string();
            let content = fs::read_to_string(path).map_err(|error| CliError::Read {
                source_name: source_name.clone(),
                error,
            })?;
            Ok((source_name, content))
        }
        None => {
            let mut content = String::new();
            io::stdin()
                .read_to_string(&mut content)
                .map_err(|error| CliError::Read {
                    source_name: "stdin".to_string(),
                    error,
                })?;
            Ok(("stdin".to_string(), content))
        }
    }
}

/// Resolve the capability provider: CLI formats > capabilities file > env var
fn resolve_capabilities(args: &Args) -> Result<Arc<dyn CapabilityProvider>, CliError> {
    if !args.formats.is_empty() {
        let formats = args.formats.iter().copied().map(MarkupKind::from).collect();
        return Ok(Arc::new(ClientFormatCapability::new(formats)));
    }

    if let Some(path) = &args.capabilities {
        let (source_name, content) = read_source(Some(path))?;
        let capabilities: ClientCapabilities =
            serde_json::from_str(&content).map_err(|error| CliError::Json { source_name, error })?;
        return Ok(Arc::new(LazyCapabilities::new(move || {
            ClientFormatCapability::from_client_capabilities(&capabilities)
        })));
    }

    let formats = std::env::var(DOC_FORMATS_ENV)
        .map(|value| parse_formats(&value))
        .unwrap_or_default();
    debug!("Using documentation formats from environment: {:?}", formats);

    Ok(Arc::new(ClientFormatCapability::new(formats)))
}

fn run(args: Args) -> Result<(), CliError> {
    let capabilities = resolve_capabilities(&args)?;
    let factory = DescriptionFactory::new(capabilities);

    let (source_name, content) = read_source(args.input.as_deref())?;
    let request: DescriptionRequest =
        serde_json::from_str(&content).map_err(|error| CliError::Json { source_name, error })?;

    info!("Rendering description for {} entries", request.len());

    let start = Instant::now();
    let description = factory.try_create_description(&request)?;
    log_timing!(Level::DEBUG, "create_description", start.elapsed());

    if args.json {
        let content = MarkupContent::from(description);
        println!("{}", serde_json::to_string_pretty(&content)?);
    } else {
        println!("{}", description.text);
    }

    Ok(())
}

fn main() {
    let args = Args::parse();

    let log_config = LogConfig::from_env().with_overrides(args.log_level.clone(), args.log_file.clone());

    if let Err(e) = init_logging(log_config) {
        eprintln!("Failed to initialize logging: {e}");
        std::process::exit(1);
    }

    if let Err(e) = run(args) {
        eprintln!("{e}");
        std::process::exit(1);
    }
}
