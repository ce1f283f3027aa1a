//! HTTP listener and worker pool.
//!
//! One [`tiny_http::Server`] is shared by a fixed number of worker
//! threads. Each worker owns its random generator and renders the image
//! for every request it receives. Method, path, headers and body are
//! ignored: every request gets a fresh image.
//!
//! The image is encoded completely before anything is written, so an
//! encoding failure still turns into a clean `500` response.

use std::io::Cursor;
use std::net::{SocketAddr, ToSocketAddrs};
use std::num::NonZeroUsize;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::{Duration, Instant};

use flash_raster::{EncodedImage, FlashError, FlashKind};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tiny_http::{Header, Request, Response, Server};
use tracing::{debug, error, info, warn};

/// How long a worker waits for a request before re-checking for shutdown.
const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Errors that can occur while hosting a flash server.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// The listener could not be bound.
    #[error("failed to bind {addr}: {message}")]
    Bind { addr: String, message: String },

    /// A response header could not be built.
    #[error("invalid header value: {0}")]
    Header(String),

    /// A worker thread could not be started.
    #[error("failed to spawn worker thread: {0}")]
    WorkerSpawn(#[source] std::io::Error),

    /// A worker thread panicked.
    #[error("worker thread panicked")]
    WorkerPanicked,
}

/// Worker pool settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServeOptions {
    /// Number of worker threads.
    pub workers: NonZeroUsize,
    /// Base seed; `None` seeds every worker from OS entropy.
    pub seed: Option<u64>,
}

impl Default for ServeOptions {
    fn default() -> Self {
        Self {
            workers: thread::available_parallelism().unwrap_or(NonZeroUsize::MIN),
            seed: None,
        }
    }
}

impl ServeOptions {
    /// The generator owned by worker `index`.
    #[must_use]
    pub fn worker_rng(&self, index: usize) -> StdRng {
        self.seed.map_or_else(StdRng::from_entropy, |seed| {
            let offset = u64::try_from(index).unwrap_or(u64::MAX);
            StdRng::seed_from_u64(seed.wrapping_add(offset))
        })
    }
}

/// Asks a running [`FlashServer::serve`] to stop.
///
/// Workers finish the request in hand and exit within one poll interval.
#[derive(Debug, Clone)]
pub struct ShutdownHandle {
    stopping: Arc<AtomicBool>,
}

impl ShutdownHandle {
    /// Signal every worker to stop.
    pub fn shutdown(&self) {
        self.stopping.store(true, Ordering::Release);
    }
}

/// A bound listener, ready to serve one kind of flash.
pub struct FlashServer {
    server: Server,
    addr: SocketAddr,
    stopping: Arc<AtomicBool>,
}

impl FlashServer {
    /// Bind the listener.
    ///
    /// Port `0` picks a free port; see [`Self::local_addr`].
    ///
    /// # Errors
    ///
    /// Returns [`ServerError::Bind`] if the address cannot be bound or
    /// does not resolve to an IP socket.
    pub fn bind<A: ToSocketAddrs + std::fmt::Display>(addr: A) -> Result<Self, ServerError> {
        let bind_error = |message: String| ServerError::Bind {
            addr: addr.to_string(),
            message,
        };

        let server = Server::http(&addr).map_err(|e| bind_error(e.to_string()))?;
        let local = server
            .server_addr()
            .to_ip()
            .ok_or_else(|| bind_error("listener is not an IP socket".to_owned()))?;

        Ok(Self {
            server,
            addr: local,
            stopping: Arc::new(AtomicBool::new(false)),
        })
    }

    /// The address the listener is bound to.
    #[must_use]
    pub const fn local_addr(&self) -> SocketAddr {
        self.addr
    }

    /// A handle that stops [`Self::serve`] from another thread.
    #[must_use]
    pub fn shutdown_handle(&self) -> ShutdownHandle {
        ShutdownHandle {
            stopping: Arc::clone(&self.stopping),
        }
    }

    /// Answer requests with `kind` images until shut down.
    ///
    /// Blocks the calling thread while `options.workers` threads handle
    /// requests.
    ///
    /// # Errors
    ///
    /// Returns [`ServerError::WorkerSpawn`] if a worker cannot be started
    /// and [`ServerError::WorkerPanicked`] if one panics.
    pub fn serve(&self, kind: FlashKind, options: &ServeOptions) -> Result<(), ServerError> {
        info!(
            %kind,
            workers = options.workers.get(),
            seeded = options.seed.is_some(),
            "listening on http://{}",
            self.addr
        );

        thread::scope(|scope| {
            let mut workers = Vec::with_capacity(options.workers.get());
            for index in 0..options.workers.get() {
                let rng = options.worker_rng(index);
                let spawned = thread::Builder::new()
                    .name(format!("{kind}-worker-{index}"))
                    .spawn_scoped(scope, move || self.worker_loop(kind, rng));
                match spawned {
                    Ok(handle) => workers.push(handle),
                    Err(err) => {
                        // Let the already started workers wind down.
                        self.stopping.store(true, Ordering::Release);
                        return Err(ServerError::WorkerSpawn(err));
                    }
                }
            }

            let mut result = Ok(());
            for handle in workers {
                if handle.join().is_err() {
                    self.stopping.store(true, Ordering::Release);
                    result = Err(ServerError::WorkerPanicked);
                }
            }
            result
        })?;

        info!(%kind, "server stopped");
        Ok(())
    }

    fn worker_loop(&self, kind: FlashKind, mut rng: StdRng) {
        debug!("worker started");
        while !self.stopping.load(Ordering::Acquire) {
            match self.server.recv_timeout(POLL_INTERVAL) {
                Ok(Some(request)) => handle_request(request, kind, &mut rng),
                Ok(None) => {}
                Err(err) => warn!(error = %err, "failed to receive request"),
            }
        }
        debug!("worker stopped");
    }
}

/// A fully buffered response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub status: u16,
    pub content_type: &'static str,
    pub body: Vec<u8>,
}

impl Reply {
    /// `200` with the encoded image.
    #[must_use]
    pub fn image(image: EncodedImage) -> Self {
        Self {
            status: 200,
            content_type: image.mime_type(),
            body: image.bytes,
        }
    }

    /// `500` with the error text.
    #[must_use]
    pub fn error(err: &FlashError) -> Self {
        Self {
            status: 500,
            content_type: "text/plain; charset=utf-8",
            body: err.to_string().into_bytes(),
        }
    }

    /// Build the reply for one render attempt, logging failures.
    #[must_use]
    pub fn from_render(kind: FlashKind, result: Result<EncodedImage, FlashError>) -> Self {
        match result {
            Ok(image) => Self::image(image),
            Err(err) => {
                error!(%kind, error = %err, "failed to render image");
                Self::error(&err)
            }
        }
    }

    /// Convert into a `tiny_http` response with a known length.
    ///
    /// # Errors
    ///
    /// Returns [`ServerError::Header`] if the content type is not a
    /// valid header value.
    pub fn into_response(self) -> Result<Response<Cursor<Vec<u8>>>, ServerError> {
        let content_type = Header::from_bytes(&b"Content-Type"[..], self.content_type.as_bytes())
            .map_err(|()| ServerError::Header(self.content_type.to_owned()))?;

        // The body is already in memory, so send it with a Content-Length.
        Ok(Response::from_data(self.body)
            .with_status_code(self.status)
            .with_header(content_type)
            .with_chunked_threshold(usize::MAX))
    }
}

fn handle_request(request: Request, kind: FlashKind, rng: &mut StdRng) {
    let started = Instant::now();
    let method = request.method().clone();
    let url = request.url().to_owned();

    let reply = Reply::from_render(kind, flash_raster::render(kind, rng));
    let (status, bytes) = (reply.status, reply.body.len());

    let response = match reply.into_response() {
        Ok(response) => response,
        Err(err) => {
            error!(error = %err, "failed to build response");
            return;
        }
    };

    if let Err(err) = request.respond(response) {
        warn!(%method, url = %url, error = %err, "failed to write response");
        return;
    }

    debug!(
        %method,
        url = %url,
        %kind,
        status,
        bytes,
        elapsed_ms = started.elapsed().as_millis(),
        "served"
    );
}
