//! LFS Settings Library
//!
//! Resolves the settings of a Git LFS server from `LFS_*` environment
//! variables once at startup and exposes them as an immutable store.

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod error;
pub mod observability;

pub use config::{resolve, Report, Setting, SettingDef, Settings, Source, SETTINGS};
pub use error::{Error, Result};
