//! Print the OpenAPI document as JSON.
#![cfg_attr(not(any(test, doctest)), deny(clippy::unwrap_used))]
#![cfg_attr(not(any(test, doctest)), deny(clippy::expect_used))]

use std::io::{self, Write};
use std::path::PathBuf;

use clap::Parser;
use pbx_backend::ApiDoc;
use utoipa::OpenApi;

/// `openapi-dump` command arguments.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "openapi-dump",
    about = "Write the extensions API OpenAPI document as JSON",
    version
)]
struct CliArgs {
    /// Write to this file instead of stdout.
    #[arg(long, value_name = "path")]
    output: Option<PathBuf>,
}

fn main() -> io::Result<()> {
    let args = CliArgs::parse();
    let json = ApiDoc::openapi()
        .to_pretty_json()
        .map_err(io::Error::other)?;

    match args.output {
        Some(path) => std::fs::write(&path, format!("{json}\n")).map_err(|error| {
            io::Error::new(
                error.kind(),
                format!("write {}: {error}", path.display()),
            )
        }),
        None => writeln!(io::stdout().lock(), "{json}"),
    }
}
