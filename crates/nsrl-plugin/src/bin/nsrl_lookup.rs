//! `nsrl-lookup`: run one lookup job from the command line and print the
//! job result as JSON.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use nsrl_core::constants::{DEFAULT_LOG_FILTER, ENV_LOG};
use nsrl_core::errors::NsrlErrorCode;
use nsrl_core::models::{BinaryAction, Job};
use nsrl_core::{ConfigOverrides, NsrlConfig};
use nsrl_plugin::NsrlPlugin;

/// Exit status for configuration problems.
const EXIT_CONFIG: u8 = 2;

#[derive(Debug, Parser)]
#[command(
    name = "nsrl-lookup",
    version,
    about = "Query the NSRL database to determine if a file is publicly known"
)]
struct Cli {
    /// SHA-256 digest of the file to look up.
    digest: String,

    /// TOML config file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Lookup service base URI.
    #[arg(long)]
    uri: Option<String>,

    /// Request full match details.
    #[arg(long)]
    details: bool,

    /// Maximum applications to report.
    #[arg(long)]
    max_details: Option<String>,

    /// Field-size limit for rendered values.
    #[arg(long)]
    max_value_length: Option<String>,

    /// Upstream event type of the binary.
    #[arg(long, default_value = "sourced")]
    event_type: String,

    /// Pretty-print the job result.
    #[arg(long)]
    pretty: bool,

    /// Emit logs as JSON.
    #[arg(long)]
    log_json: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if cli.log_json {
        let filter = std::env::var(ENV_LOG).unwrap_or_else(|_| DEFAULT_LOG_FILTER.to_string());
        nsrl_core::tracing::init_tracing_with_filter(&filter, true);
    } else {
        nsrl_core::tracing::init_tracing();
    }

    let overrides = ConfigOverrides {
        uri: cli.uri,
        details: cli.details.then(|| "true".to_string()),
        max_details: cli.max_details,
        max_value_length: cli.max_value_length,
    };

    let config = match NsrlConfig::load(cli.config.as_deref(), &overrides) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e.coded_string());
            return ExitCode::from(EXIT_CONFIG);
        }
    };
    let action: BinaryAction = match cli.event_type.parse() {
        Ok(action) => action,
        Err(e) => {
            eprintln!("{}", NsrlErrorCode::coded_string(&e));
            return ExitCode::from(EXIT_CONFIG);
        }
    };
    let plugin = match NsrlPlugin::new(config) {
        Ok(plugin) => plugin,
        Err(e) => {
            eprintln!("{}", e.coded_string());
            return ExitCode::from(EXIT_CONFIG);
        }
    };

    let result = plugin.run(&Job::new(cli.digest, action));
    let rendered = if cli.pretty {
        serde_json::to_string_pretty(&result)
    } else {
        serde_json::to_string(&result)
    };
    match rendered {
        Ok(json) => println!("{json}"),
        Err(e) => {
            eprintln!("failed to render job result: {e}");
            return ExitCode::FAILURE;
        }
    }

    if result.state.is_error() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
