//! Command-line arguments shared by every flash binary.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::num::NonZeroUsize;

use clap::Args;

use crate::server::ServeOptions;

/// Port every flash server listens on unless told otherwise.
pub const DEFAULT_PORT: u16 = 8080;

/// Listener and worker settings.
///
/// Flatten into a binary's parser with `#[command(flatten)]`.
#[derive(Debug, Clone, Args)]
pub struct ServeArgs {
    /// Address to listen on.
    #[arg(long, default_value_t = IpAddr::V4(Ipv4Addr::UNSPECIFIED))]
    pub host: IpAddr,

    /// Port to listen on.
    #[arg(short, long, default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Number of worker threads rendering images in parallel.
    ///
    /// Defaults to the available parallelism of the machine.
    #[arg(long, value_parser = clap::builder::RangedU64ValueParser::<usize>::new().range(1..))]
    pub workers: Option<usize>,

    /// Seed for reproducible output.
    ///
    /// Worker `i` seeds its generator with `seed + i`. Without a seed
    /// every worker seeds from OS entropy.
    #[arg(long)]
    pub seed: Option<u64>,
}

impl ServeArgs {
    /// Socket address to bind.
    #[must_use]
    pub const fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Worker settings for [`FlashServer::serve`](crate::FlashServer::serve).
    #[must_use]
    pub fn options(&self) -> ServeOptions {
        let defaults = ServeOptions::default();
        ServeOptions {
            workers: self
                .workers
                .and_then(NonZeroUsize::new)
                .unwrap_or(defaults.workers),
            seed: self.seed,
        }
    }
}
