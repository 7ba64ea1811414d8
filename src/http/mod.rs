//! HTTP protocol implementation.
//!
//! This module implements the GET-only request side of HTTP/1.1. There is no
//! keep-alive: each connection carries exactly one request and is closed once
//! the response has been written.
//!
//! # Pipeline
//!
//! Each accepted connection runs the same linear pipeline:
//!
//! ```text
//!   read (one shot, at most 8096 bytes)
//!        │
//!        ▼
//!   parser ──── reject ───► 403
//!        │
//!        ▼
//!   resolver ── reject ───► 403 / 404
//!        │
//!        ▼
//!   writer (status line, headers, body in 8096-byte chunks)
//!        │
//!        ▼
//!   close
//! ```
//!
//! The submodules:
//!
//! - **`connection`**: the per-connection pipeline driver
//! - **`parser`**: validates the request line and decodes the target
//! - **`request`**: parsed request representation
//! - **`rejection`**: the terminal Forbidden / NotFound result
//! - **`response`**: response representation with the fixed error bodies
//! - **`writer`**: serializes and streams responses to the client
//! - **`mime`**: the extension-to-MIME whitelist

pub mod connection;
pub mod mime;
pub mod parser;
pub mod rejection;
pub mod request;
pub mod response;
pub mod writer;
