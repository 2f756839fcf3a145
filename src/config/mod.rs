//! Configuration management for the LFS server.
//!
//! Each setting resolves, in priority order, from:
//! - `$PORT` (only for `Listen`, applied last)
//! - its `LFS_<NAME>` environment variable, even when set to the empty string
//! - the default from the settings table

mod definitions;
mod global;
mod report;
mod resolver;
mod settings;

pub use definitions::{env_key, find_def, SettingDef, ENV_PREFIX, PORT_ENV, SETTINGS};
pub use global::{global, install};
pub use report::{Report, ReportEntry, REDACTED};
pub use resolver::resolve;
pub use settings::{Setting, Settings, Source};
