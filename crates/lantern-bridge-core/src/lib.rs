//! lantern-bridge — Lantern diagnostics for one-based hosts (core library)
//!
//! This crate rewrites error messages raised by the Lantern tensor library so that
//! dimension and index numbers follow the host's one-based convention, and relays
//! pending native errors to the host as [`BridgeError`] values.

mod relay;
mod translate;

pub use relay::{relay_error, Lantern, Session};
pub use translate::{translate, translate_dim_range, translate_dim_size, translate_max_index, Rule};

/// Where a [`BridgeError`] came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The native library failed to initialize. The message is passed through verbatim.
    Init,
    /// A pending native error, already translated.
    Native,
}

/// Library error type.
#[derive(Debug, Clone)]
pub struct BridgeError {
    kind: ErrorKind,
    msg: String,
}

impl BridgeError {
    pub(crate) fn init(msg: impl Into<String>) -> Self {
        Self { kind: ErrorKind::Init, msg: msg.into() }
    }

    pub(crate) fn native(msg: impl Into<String>) -> Self {
        Self { kind: ErrorKind::Native, msg: msg.into() }
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Human-friendly error message.
    pub fn message(&self) -> &str {
        &self.msg
    }
}

impl std::fmt::Display for BridgeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.msg)
    }
}

impl std::error::Error for BridgeError {}
