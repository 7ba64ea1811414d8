//! Terminal rejections of the request pipeline.

use std::fmt;

/// A terminal result: once produced, the pipeline writes the matching fixed
/// error response, logs one record, and the connection's task ends. Nothing
/// propagates to the listener.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    /// The request line, method, path or extension is not acceptable.
    Forbidden { reason: &'static str, context: String },
    /// The target passed extension whitelisting but cannot be opened.
    NotFound { context: String },
}

impl Rejection {
    pub fn forbidden(reason: &'static str, context: impl Into<String>) -> Self {
        Rejection::Forbidden {
            reason,
            context: context.into(),
        }
    }

    pub fn not_found(context: impl Into<String>) -> Self {
        Rejection::NotFound {
            context: context.into(),
        }
    }
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rejection::Forbidden { reason, context } => {
                write!(f, "forbidden ({reason}): {context}")
            }
            Rejection::NotFound { context } => {
                write!(f, "not found (failed to open file): {context}")
            }
        }
    }
}
