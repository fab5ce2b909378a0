//! lantern-bridge — Lantern diagnostics for one-based hosts
//!
//! This crate exposes the translator and error relay from `lantern-bridge-core`, the
//! Python bindings, and the `lantern-translate` CLI.

#[cfg(feature = "pyo3")]
mod python;

pub use lantern_bridge_core::{
    relay_error, translate, translate_dim_range, translate_dim_size, translate_max_index,
    BridgeError, ErrorKind, Lantern, Rule, Session,
};
