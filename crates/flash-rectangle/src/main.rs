//! flash-rectangle: answers every HTTP request with a JPEG filled with one
//! random color.

use std::process::ExitCode;

use clap::Parser;
use flash_server::{FlashKind, ServeArgs};

/// Serve a single-color canvas as JPEG on every request.
#[derive(Parser)]
#[command(name = "flash-rectangle", version)]
struct Cli {
    #[command(flatten)]
    serve: ServeArgs,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    flash_server::logging::init();

    if let Err(err) = flash_server::run(FlashKind::Rectangle, &cli.serve) {
        tracing::error!(error = %err, "rectangle server failed");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
