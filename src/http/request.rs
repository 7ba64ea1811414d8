//! Parsed HTTP request representation.

/// The one supported method. Anything else is rejected before path
/// resolution occurs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
}

/// A validated request line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub method: Method,
    /// The target exactly as received: still percent-encoded, CR/LF bytes
    /// neutralized. This is what log records carry.
    pub raw_target: String,
    /// The decoded target, always relative to the document root.
    pub path: String,
}
