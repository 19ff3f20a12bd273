//! S7 address tool entry point.
//!
//! Decodes symbolic S7 addresses, checks them, lists the data type and
//! region catalogs, and plans the access request a transport would issue.

mod output;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use s7_address::config::ToolConfig;
use s7_address::{
    decode, decode_with_dialect, is_valid, AccessRequest, DataType, OutputFormat,
};
use std::io::Write;
use std::path::PathBuf;
use tracing::{debug, info, warn};

use crate::output::Renderer;

/// S7 address tool command-line arguments.
#[derive(Parser, Debug)]
#[command(
    name = "s7-tool",
    about = "S7 address tool - decode and inspect symbolic PLC addresses",
    version,
    long_about = None
)]
struct Args {
    /// Path to a tool configuration file (TOML).
    #[arg(long, short = 'c', value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    /// Output format (text, json); overrides the config file.
    #[arg(long, short = 'f', global = true)]
    format: Option<OutputFormat>,

    /// Log level (trace, debug, info, warn, error).
    #[arg(long, short = 'l', default_value = "warn", global = true)]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
enum Command {
    /// Decode addresses into their structured form.
    Decode {
        /// Address tokens, e.g. DB100.DBW8 MW180 A9.1.
        #[arg(required = true)]
        addresses: Vec<String>,
    },
    /// Report whether addresses are valid.
    Check {
        /// Address tokens.
        #[arg(required = true)]
        addresses: Vec<String>,
    },
    /// List the data type catalog.
    Types,
    /// List the memory regions and which ones decode.
    Modes,
    /// Show the transport request for an address.
    Request {
        /// Address token.
        address: String,

        /// Access type overriding the decoded one, e.g. ByteArray.
        #[arg(long = "type", short = 't', value_name = "TYPE")]
        data_type: Option<DataType>,

        /// Byte length for String/ByteArray accesses.
        #[arg(long)]
        length: Option<usize>,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();

    init_logging(&args.log_level);

    let mut config = load_config(&args)?;
    if let Some(format) = args.format {
        config.output.format = format;
    }
    debug!(format = %config.output.format, "Configuration loaded");

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run(&args.command, &config, &mut out)
}

/// Initialize logging with the specified log level.
fn init_logging(level: &str) {
    let filter = format!("s7_tool={level},s7_address={level}");

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&filter)),
        )
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}

/// Load configuration from file or use defaults.
///
/// Resolution priority (first existing file wins):
/// 1. Command-line `--config` argument
/// 2. `S7_TOOL_CONFIG` environment variable
/// 3. `/etc/s7-tool/config.toml` (system path)
/// 4. `config/s7-tool.toml` (local development)
/// 5. Built-in defaults
fn load_config(args: &Args) -> Result<ToolConfig> {
    if let Some(config_path) = &args.config {
        info!(?config_path, "Loading config from command-line argument");
        return ToolConfig::from_file(config_path)
            .with_context(|| format!("Failed to load config from {}", config_path.display()));
    }

    if let Ok(env_path) = std::env::var("S7_TOOL_CONFIG") {
        let config_path = PathBuf::from(&env_path);
        if config_path.exists() {
            info!(?config_path, "Loading config from S7_TOOL_CONFIG");
            return ToolConfig::from_file(&config_path).with_context(|| {
                format!("Failed to load config from S7_TOOL_CONFIG={env_path}")
            });
        }
        warn!(
            path = %env_path,
            "S7_TOOL_CONFIG set but file does not exist, checking other locations"
        );
    }

    for candidate in ["/etc/s7-tool/config.toml", "config/s7-tool.toml"] {
        let config_path = PathBuf::from(candidate);
        if config_path.exists() {
            info!(?config_path, "Loading config file");
            return ToolConfig::from_file(&config_path)
                .with_context(|| format!("Failed to load config from {candidate}"));
        }
    }

    debug!("No config file found, using built-in defaults");
    Ok(ToolConfig::default())
}

/// Execute one command, writing results to `out`.
fn run(command: &Command, config: &ToolConfig, out: &mut impl Write) -> Result<()> {
    let renderer = Renderer::new(config.output.format);

    match command {
        Command::Decode { addresses } => {
            let mut failed = 0usize;
            for raw in addresses {
                let token = raw.trim();
                let result = decode_with_dialect(token);
                match &result {
                    Ok((dialect, _)) => debug!(token, %dialect, "Decoded address"),
                    Err(e) => {
                        warn!(token, error = %e, "Address rejected");
                        failed += 1;
                    }
                }
                renderer.decoded(out, token, &result)?;
            }
            if failed > 0 {
                bail!("{failed} of {} address(es) failed to decode", addresses.len());
            }
        }
        Command::Check { addresses } => {
            let invalid = addresses
                .iter()
                .map(|raw| {
                    let token = raw.trim();
                    let valid = is_valid(token);
                    renderer.checked(out, token, valid).map(|()| valid)
                })
                .collect::<std::io::Result<Vec<_>>>()?
                .into_iter()
                .filter(|valid| !valid)
                .count();
            if invalid > 0 {
                bail!("{invalid} of {} address(es) are invalid", addresses.len());
            }
        }
        Command::Types => renderer.types(out)?,
        Command::Modes => renderer.modes(out)?,
        Command::Request {
            address,
            data_type,
            length,
        } => {
            let token = address.trim();
            let mut decoded = decode(token)?;
            if let Some(data_type) = *data_type {
                decoded = decoded.with_data_type(data_type);
            }
            let length = length.or_else(|| {
                decoded
                    .data_type()
                    .width()
                    .is_variable()
                    .then_some(config.request.default_variable_length)
                    .flatten()
            });
            let request = AccessRequest::for_address(&decoded, length)
                .with_context(|| format!("Cannot build a request for {token}"))?;
            info!(token, %request, "Planned access request");
            renderer.request(out, token, &request)?;
        }
    }

    Ok(())
}
