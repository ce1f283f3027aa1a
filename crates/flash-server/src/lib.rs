//! flash-server: HTTP hosting shared by the flash binaries.
//!
//! Binds a `tiny_http` listener, runs a pool of worker threads, and
//! answers every request with a fresh image from `flash-raster`. Also
//! owns the pieces each binary needs around that: command-line
//! arguments ([`ServeArgs`]) and log setup ([`logging::init`]).

pub mod cli;
pub mod logging;
pub mod server;

pub use cli::{DEFAULT_PORT, ServeArgs};
pub use flash_raster::FlashKind;
pub use server::{FlashServer, Reply, ServeOptions, ServerError, ShutdownHandle};

/// Bind `args.addr()` and serve `kind` images until the process exits.
///
/// # Errors
///
/// Returns [`ServerError::Bind`] if the listener cannot be bound, or any
/// error from [`FlashServer::serve`].
pub fn run(kind: FlashKind, args: &ServeArgs) -> Result<(), ServerError> {
    FlashServer::bind(args.addr())?.serve(kind, &args.options())
}
