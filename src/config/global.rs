//! Process-wide, write-once settings handle.

use once_cell::sync::OnceCell;

use super::Settings;
use crate::{Error, Result};

static GLOBAL: OnceCell<Settings> = OnceCell::new();

/// Install the process-wide settings.
///
/// # Errors
///
/// Returns a configuration error if settings were already installed. The
/// installed value is never replaced.
pub fn install(settings: Settings) -> Result<&'static Settings> {
    GLOBAL.try_insert(settings).map_err(|(_, _rejected)| {
        tracing::warn!("Settings already installed, keeping the first value");
        Error::config("settings already installed")
    })
}

/// The process-wide settings, if [`install`] has run.
#[must_use]
pub fn global() -> Option<&'static Settings> {
    GLOBAL.get()
}
