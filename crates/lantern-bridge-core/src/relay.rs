use std::path::Path;

use crate::translate::translate;
use crate::BridgeError;

/// The calls the bridge needs from the native Lantern library.
///
/// Lantern keeps a single "last error" slot. Any call may fill it; the host is
/// expected to check the slot after every call through [`relay_error`].
pub trait Lantern {
    fn configure(&self, level: i32);

    fn version(&self) -> String;

    /// Load the library from `path`. On failure, returns Lantern's own error text.
    fn init(&self, path: &Path) -> Result<(), String>;

    fn run_self_test(&self);

    /// Text of the pending error, if any. Does not clear it.
    fn last_error(&self) -> Option<String>;

    fn clear_last_error(&self);

    /// Fetch the pending error and clear the slot in one step.
    fn take_last_error(&self) -> Option<String> {
        let err = self.last_error()?;
        self.clear_last_error();
        Some(err)
    }
}

/// Turn a pending Lantern error into a [`BridgeError`].
///
/// Returns `Ok(())` when nothing is pending. Otherwise the slot is cleared before the
/// message is translated, so a later check never sees the same error twice.
pub fn relay_error<L: Lantern + ?Sized>(lantern: &L) -> Result<(), BridgeError> {
    let Some(raw) = lantern.take_last_error() else {
        return Ok(());
    };
    let msg = translate(&raw);
    log::debug!("relaying lantern error: {raw:?} -> {msg:?}");
    Err(BridgeError::native(msg))
}

/// Host-facing wrapper around a [`Lantern`] implementation.
///
/// Every call that can leave an error in Lantern's slot is followed by
/// [`relay_error`].
#[derive(Debug)]
pub struct Session<L> {
    lantern: L,
}

impl<L: Lantern> Session<L> {
    pub fn new(lantern: L) -> Self {
        Self { lantern }
    }

    pub fn lantern(&self) -> &L {
        &self.lantern
    }

    pub fn into_inner(self) -> L {
        self.lantern
    }

    pub fn configure(&self, level: i32) {
        log::info!("configuring lantern with log level {level}");
        self.lantern.configure(level);
    }

    pub fn version(&self) -> String {
        self.lantern.version()
    }

    /// Initialize Lantern. Failures are reported verbatim, without translation.
    pub fn init(&self, path: impl AsRef<Path>) -> Result<(), BridgeError> {
        let path = path.as_ref();
        log::info!("initializing lantern from {}", path.display());
        self.lantern.init(path).map_err(BridgeError::init)
    }

    pub fn self_test(&self) -> Result<(), BridgeError> {
        self.call(|l| l.run_self_test())
    }

    /// Run a native call, then relay whatever error it left behind.
    pub fn call<T>(&self, f: impl FnOnce(&L) -> T) -> Result<T, BridgeError> {
        let out = f(&self.lantern);
        relay_error(&self.lantern)?;
        Ok(out)
    }

    /// Relay a pending error without making a call first.
    pub fn check(&self) -> Result<(), BridgeError> {
        relay_error(&self.lantern)
    }

    pub fn has_error(&self) -> bool {
        self.lantern.last_error().is_some()
    }

    /// Raw text of the pending error, or an empty string. Leaves the slot untouched.
    pub fn last_error(&self) -> String {
        self.lantern.last_error().unwrap_or_default()
    }

    pub fn clear_error(&self) {
        self.lantern.clear_last_error();
    }
}
