// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

use anyhow::{Context, Result};
use bind9gen::{
    cli::Args,
    constants::{DONE_MESSAGE, ENABLE_SERVICE_HINT, USAGE_EXAMPLE},
    layout::OutputLayout,
    writer::generate,
};
use tracing::{debug, info};

fn main() -> Result<()> {
    let args = match Args::try_parse_normalized(std::env::args_os()) {
        Ok(args) => args,
        Err(e) => e.exit(),
    };

    init_tracing();

    println!("{USAGE_EXAMPLE}");

    // anyhow reports the failure on stderr and exits with status 1
    run(args)?;

    println!("{DONE_MESSAGE}");
    println!("{ENABLE_SERVICE_HINT}");
    Ok(())
}

fn run(args: Args) -> Result<()> {
    let request = args.into_request()?;
    let layout = OutputLayout::default();
    debug!(?layout, "Using default BIND9 layout");

    let files = generate(&request, &layout).with_context(|| {
        format!("Failed to generate BIND9 zone for '{}'", request.domain())
    })?;

    info!(
        named_conf = %files.named_conf.display(),
        zone_file = %files.zone_file.display(),
        "Zone generated"
    );
    Ok(())
}

/// Initialize logging
///
/// Respects `RUST_LOG` (default `info`) and `RUST_LOG_FORMAT` (`json` or `text`).
/// Logs go to stderr; stdout is reserved for the messages the user reads.
fn init_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let log_format = std::env::var("RUST_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

    match log_format.to_lowercase().as_str() {
        "json" => {
            tracing_subscriber::fmt()
                .with_env_filter(env_filter)
                .with_file(true)
                .with_line_number(true)
                .with_target(false)
                .with_writer(std::io::stderr)
                .json()
                .init();
        }
        _ => {
            tracing_subscriber::fmt()
                .with_env_filter(env_filter)
                .with_file(true)
                .with_line_number(true)
                .with_target(false)
                .with_writer(std::io::stderr)
                .with_ansi(true)
                .compact()
                .init();
        }
    }
}
