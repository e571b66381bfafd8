//! `uast-go`: serve Go parse requests over stdin/stdout.
//!
//! Each input line is a JSON request such as
//! `{"content": "package main", "encoding": "UTF8"}`; each output line is the
//! JSON response. Logs go to stderr.

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use uast_core::config::{CliOverrides, UastConfig};
use uast_core::errors::UastErrorCode;
use uast_core::tracing::init_tracing;
use uast_go::{serve, Driver};

/// Parse Go source into a universal AST, one JSON request per line.
#[derive(Parser)]
#[command(name = "uast-go", version, about, long_about = None)]
struct Cli {
    /// Config file to use instead of ./uast.toml
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Reject content larger than this many bytes
    #[arg(long, value_name = "BYTES")]
    max_content_size: Option<u64>,

    /// Log filter directives, e.g. "uast_go=debug"
    #[arg(long, value_name = "FILTER")]
    log_filter: Option<String>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let overrides = CliOverrides {
        config_path: cli.config,
        max_content_size: cli.max_content_size,
        log_filter: cli.log_filter,
    };

    let root = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let config = match UastConfig::load(&root, Some(&overrides)) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e.coded_string());
            return ExitCode::from(2);
        }
    };

    init_tracing(config.log.filter.as_deref());
    tracing::info!(
        version = uast_core::constants::VERSION,
        max_content_size = config.driver.effective_max_content_size(),
        "uast-go ready"
    );

    let driver = Driver::new(&config);
    let stdin = io::stdin();
    match serve(&driver, stdin.lock(), io::stdout().lock()) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "transport failed");
            ExitCode::FAILURE
        }
    }
}
