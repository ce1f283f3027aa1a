//! flash-triangle: answers every HTTP request with a PNG of a random
//! triangle on a black canvas.
//!
//! All three vertices are independent uniform points on the canvas, so
//! some responses are degenerate (collinear vertices) and come back as
//! plain black.

use std::process::ExitCode;

use clap::Parser;
use flash_server::{FlashKind, ServeArgs};

/// Serve a random triangle as PNG on every request.
#[derive(Parser)]
#[command(name = "flash-triangle", version)]
struct Cli {
    #[command(flatten)]
    serve: ServeArgs,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    flash_server::logging::init();

    match flash_server::run(FlashKind::Triangle, &cli.serve) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "triangle server failed");
            ExitCode::FAILURE
        }
    }
}
