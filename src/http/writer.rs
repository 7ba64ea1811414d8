//! Serializes and writes HTTP responses to the client.

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;

use crate::http::response::{Body, Response};

const HTTP_VERSION: &str = "HTTP/1.1";

/// File bodies are forwarded in chunks of this size; the last chunk may be
/// smaller. Same ceiling as the request buffer.
pub const CHUNK_SIZE: usize = 8096;

/// Serializes the status line and headers. Header order is part of the wire
/// contract: `Server`, `Content-Length`, `Connection`, `Content-Type`.
pub fn serialize_headers(response: &Response) -> Vec<u8> {
    let mut buf = Vec::new();

    let status_line = format!(
        "{} {} {}\r\n",
        HTTP_VERSION,
        response.status.as_u16(),
        response.status.reason_phrase()
    );
    buf.extend_from_slice(status_line.as_bytes());

    let server = format!(
        "Server: {}/{}\r\n",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION")
    );
    buf.extend_from_slice(server.as_bytes());

    buf.extend_from_slice(format!("Content-Length: {}\r\n", response.content_length()).as_bytes());
    buf.extend_from_slice(b"Connection: close\r\n");
    buf.extend_from_slice(format!("Content-Type: {}\r\n", response.content_type).as_bytes());
    buf.extend_from_slice(b"\r\n");

    buf
}

pub struct ResponseWriter {
    response: Response,
}

impl ResponseWriter {
    pub fn new(response: Response) -> Self {
        Self { response }
    }

    /// Writes the headers, then the body. File bodies are read and forwarded
    /// chunk by chunk; the file is never read twice.
    pub async fn write_to_stream(self, stream: &mut TcpStream) -> anyhow::Result<()> {
        let headers = serialize_headers(&self.response);
        stream.write_all(&headers).await?;

        match self.response.body {
            Body::Bytes(bytes) => {
                stream.write_all(&bytes).await?;
            }
            Body::File { mut file, .. } => {
                let mut chunk = [0u8; CHUNK_SIZE];
                loop {
                    let n = file.read(&mut chunk).await?;
                    if n == 0 {
                        break;
                    }
                    stream.write_all(&chunk[..n]).await?;
                }
            }
        }

        stream.flush().await?;
        Ok(())
    }
}
