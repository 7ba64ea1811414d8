//! Parses the raw request line into a validated, decoded target.
//!
//! The input is whatever a single read returned, at most the request buffer.
//! Only the first line's target matters; the protocol version and any header
//! bytes after the terminating space are discarded.

use crate::http::rejection::Rejection;
use crate::http::request::{Method, Request};

/// Parses up to one request buffer of raw bytes into a [`Request`].
///
/// Every `\r` and `\n` byte is neutralized to `*` before any inspection, so
/// injected line breaks cannot forge header-like content or corrupt the
/// single-line log records. The parent-directory check runs on the
/// still-encoded target; the decoded form is checked again afterwards so
/// encoded traversal sequences cannot slip through.
pub fn parse(raw: &[u8]) -> Result<Request, Rejection> {
    let mut buf = raw.to_vec();
    for b in buf.iter_mut() {
        if *b == b'\r' || *b == b'\n' {
            *b = b'*';
        }
    }

    if buf.len() < 4 || !buf[..4].eq_ignore_ascii_case(b"GET ") {
        return Err(Rejection::forbidden(
            "only simple GET operation supported",
            String::from_utf8_lossy(&buf).into_owned(),
        ));
    }

    // The line is "GET <target> <version>..."; truncate at the next space.
    // Without one, the target extends to the buffer's end.
    let rest = &buf[4..];
    let target_end = rest.iter().position(|&b| b == b' ').unwrap_or(rest.len());
    let raw_target = String::from_utf8_lossy(&rest[..target_end]).into_owned();

    if raw_target.contains("..") {
        return Err(Rejection::forbidden(
            "parent directory path names not supported",
            raw_target,
        ));
    }

    // A bare "/" means the root directory's index resolution. Everything
    // else is made relative to the document root.
    let relative = if raw_target == "/" {
        "./".to_string()
    } else {
        let stripped = raw_target.trim_start_matches('/');
        if stripped.is_empty() {
            "./".to_string()
        } else {
            stripped.to_string()
        }
    };

    let decoded = decode_target(&relative);

    if decoded.contains("..") {
        return Err(Rejection::forbidden(
            "parent directory path names not supported",
            raw_target,
        ));
    }

    // Decoding can reintroduce leading slashes (e.g. %2F); the path must
    // stay relative to the root.
    let path = match decoded.trim_start_matches('/') {
        "" => "./".to_string(),
        stripped => stripped.to_string(),
    };

    Ok(Request {
        method: Method::Get,
        raw_target,
        path,
    })
}

/// Percent- and `+`-decodes a target in a single left-to-right pass.
///
/// A `+` becomes a space; a `%` followed by two hex digits becomes that
/// byte; a `%` not followed by two hex digits (including a trailing `%`) is
/// kept verbatim. One pass, not iterated to a fixed point: decoding input
/// with no `%` or `+` returns it unchanged.
pub fn decode_target(encoded: &str) -> String {
    let bytes = encoded.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());

    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'+' => {
                out.push(b' ');
                i += 1;
            }
            b'%' if i + 2 < bytes.len()
                && bytes[i + 1].is_ascii_hexdigit()
                && bytes[i + 2].is_ascii_hexdigit() =>
            {
                let hi = (bytes[i + 1] as char).to_digit(16).unwrap() as u8;
                let lo = (bytes[i + 2] as char).to_digit(16).unwrap() as u8;
                out.push((hi << 4) | lo);
                i += 3;
            }
            b => {
                out.push(b);
                i += 1;
            }
        }
    }

    String::from_utf8_lossy(&out).into_owned()
}
