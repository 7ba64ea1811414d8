//! HTTP response representation.

use bytes::Bytes;
use tokio::fs::File;

use crate::http::rejection::Rejection;

/// Fixed literal bodies for the two error responses.
pub const FORBIDDEN_BODY: &[u8] = b"<html><head>\n<title>403 Forbidden</title>\n</head><body>\n<h1>Forbidden</h1>\nThe requested URL, file type or operation is not allowed on this simple static file webserver.\n</body></html>\n";
pub const NOT_FOUND_BODY: &[u8] = b"<html><head>\n<title>404 Not Found</title>\n</head><body>\n<h1>Not Found</h1>\nThe requested URL was not found on this server.\n</body></html>\n";

/// HTTP status codes this server can emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    /// 200 OK
    Ok,
    /// 403 Forbidden
    Forbidden,
    /// 404 Not Found
    NotFound,
}

impl StatusCode {
    /// Returns the numeric HTTP status code.
    pub fn as_u16(&self) -> u16 {
        match self {
            StatusCode::Ok => 200,
            StatusCode::Forbidden => 403,
            StatusCode::NotFound => 404,
        }
    }

    /// Returns the standard HTTP reason phrase for this status code.
    pub fn reason_phrase(&self) -> &'static str {
        match self {
            StatusCode::Ok => "OK",
            StatusCode::Forbidden => "Forbidden",
            StatusCode::NotFound => "Not Found",
        }
    }
}

/// Response body: an in-memory document, or an open file streamed in
/// fixed-size chunks. The file's length is measured once, before streaming.
#[derive(Debug)]
pub enum Body {
    Bytes(Bytes),
    File { file: File, len: u64 },
}

/// A response ready to be written to the client.
#[derive(Debug)]
pub struct Response {
    pub status: StatusCode,
    pub content_type: &'static str,
    pub body: Body,
}

impl Response {
    /// A 200 response streaming an open file of known length.
    pub fn file(file: File, len: u64, content_type: &'static str) -> Self {
        Self {
            status: StatusCode::Ok,
            content_type,
            body: Body::File { file, len },
        }
    }

    /// A 200 response carrying a synthesized HTML document.
    pub fn html(document: Bytes) -> Self {
        Self {
            status: StatusCode::Ok,
            content_type: "text/html",
            body: Body::Bytes(document),
        }
    }

    /// The fixed 403 response.
    pub fn forbidden() -> Self {
        Self {
            status: StatusCode::Forbidden,
            content_type: "text/html",
            body: Body::Bytes(Bytes::from_static(FORBIDDEN_BODY)),
        }
    }

    /// The fixed 404 response.
    pub fn not_found() -> Self {
        Self {
            status: StatusCode::NotFound,
            content_type: "text/html",
            body: Body::Bytes(Bytes::from_static(NOT_FOUND_BODY)),
        }
    }

    /// Maps a pipeline rejection onto its fixed wire response.
    pub fn from_rejection(rejection: &Rejection) -> Self {
        match rejection {
            Rejection::Forbidden { .. } => Self::forbidden(),
            Rejection::NotFound { .. } => Self::not_found(),
        }
    }

    pub fn content_length(&self) -> u64 {
        match &self.body {
            Body::Bytes(bytes) => bytes.len() as u64,
            Body::File { len, .. } => *len,
        }
    }
}
