//! flash-circle: answers every HTTP request with a PNG of a filled circle.
//!
//! The circle sits at the center of a 1920x937 black canvas, with a
//! radius drawn uniformly from `[50, 150)` and a random opaque color.
//!
//! # Usage
//!
//! ```text
//! cargo run --release --bin flash-circle -- [--port 8080] [--workers N] [--seed S]
//! ```

use std::process::ExitCode;

use clap::Parser;
use flash_server::{FlashKind, ServeArgs};

/// Serve a random-radius circle as PNG on every request.
#[derive(Parser)]
#[command(name = "flash-circle", version)]
struct Cli {
    #[command(flatten)]
    serve: ServeArgs,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    flash_server::logging::init();

    match flash_server::run(FlashKind::Circle, &cli.serve) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "circle server failed");
            ExitCode::FAILURE
        }
    }
}
