//! The per-connection request pipeline.
//!
//! Runs once per accepted connection: read the request in one shot, parse,
//! resolve, stream the response, close. A rejection anywhere along the way
//! writes the matching fixed error response and ends the pipeline; nothing
//! is retried and nothing propagates to the listener.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;
use tokio::time::timeout;
use tracing::{info, warn};

use crate::files::resolver;
use crate::http::parser;
use crate::http::rejection::Rejection;
use crate::http::response::Response;
use crate::http::writer::ResponseWriter;

/// Hard ceiling on the request size. The request is read once; whatever does
/// not arrive in a single read of this many bytes is not seen.
pub const MAX_REQUEST_SIZE: usize = 8096;

/// Deadline for the initial request read. A client that connects and never
/// sends a full request line cannot pin its task forever.
const READ_TIMEOUT: Duration = Duration::from_secs(10);

/// Deadline for writing the complete response.
const WRITE_TIMEOUT: Duration = Duration::from_secs(30);

pub struct Connection {
    stream: TcpStream,
    root: Arc<PathBuf>,
    hit: u64,
}

impl Connection {
    pub fn new(stream: TcpStream, root: Arc<PathBuf>, hit: u64) -> Self {
        Self { stream, root, hit }
    }

    /// Runs the pipeline: read, parse, resolve, respond, close.
    pub async fn run(&mut self) -> anyhow::Result<()> {
        let mut buf = [0u8; MAX_REQUEST_SIZE];
        let n = match timeout(READ_TIMEOUT, self.stream.read(&mut buf)).await {
            Ok(Ok(n)) if n > 0 => n,
            _ => {
                return self
                    .reject(Rejection::forbidden("failed to read request", ""))
                    .await;
            }
        };

        // A read that fills the whole buffer is over the ceiling and
        // degrades to an empty request, which fails method validation.
        let raw = if n < MAX_REQUEST_SIZE { &buf[..n] } else { &[][..] };

        let request = match parser::parse(raw) {
            Ok(request) => request,
            Err(rejection) => return self.reject(rejection).await,
        };
        info!(hit = self.hit, "request {}", request.raw_target);

        let response = match resolver::resolve(&self.root, &request.path).await {
            Ok(response) => response,
            Err(rejection) => return self.reject(rejection).await,
        };
        info!(hit = self.hit, "send {}", request.path);

        self.respond(response).await
    }

    async fn reject(&mut self, rejection: Rejection) -> anyhow::Result<()> {
        warn!(hit = self.hit, "{rejection}");
        self.respond(Response::from_rejection(&rejection)).await
    }

    async fn respond(&mut self, response: Response) -> anyhow::Result<()> {
        let writer = ResponseWriter::new(response);
        match timeout(WRITE_TIMEOUT, writer.write_to_stream(&mut self.stream)).await {
            Ok(result) => result?,
            Err(_) => anyhow::bail!("response write timed out"),
        }

        // Orderly shutdown lets the final chunk drain before the socket is
        // torn down.
        self.stream.shutdown().await?;
        Ok(())
    }
}
