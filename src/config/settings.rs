//! The resolved settings store and its derived queries.

use serde::Serialize;
use std::fmt;

/// Values that count as boolean true. Matching is exact and case-sensitive.
const TRUTHY: [&str; 3] = ["1", "true", "TRUE"];

/// Where a resolved value came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Source {
    /// The `LFS_*` environment variable, possibly set to the empty string.
    Environment,
    /// The table default (the variable was unset).
    Default,
    /// `$PORT` replaced the resolved `Listen` value.
    PortOverride,
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Environment => write!(f, "environment"),
            Self::Default => write!(f, "default"),
            Self::PortOverride => write!(f, "port_override"),
        }
    }
}

/// A single resolved setting.
#[derive(Clone, PartialEq, Eq)]
pub struct Setting {
    pub(super) name: &'static str,
    pub(super) env_key: String,
    pub(super) value: String,
    pub(super) source: Source,
    pub(super) secret: bool,
}

impl Setting {
    /// Setting name, e.g. `ContentPath`.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Environment key the value was looked up under, e.g. `LFS_CONTENTPATH`.
    #[must_use]
    pub fn env_key(&self) -> &str {
        &self.env_key
    }

    /// Resolved value. Never unresolved, possibly empty.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    #[must_use]
    pub const fn source(&self) -> Source {
        self.source
    }

    /// Whether the value must be kept out of logs and reports.
    #[must_use]
    pub const fn is_secret(&self) -> bool {
        self.secret
    }
}

impl fmt::Debug for Setting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = if self.secret && !self.value.is_empty() {
            super::REDACTED
        } else {
            self.value.as_str()
        };
        f.debug_struct("Setting")
            .field("name", &self.name)
            .field("env_key", &self.env_key)
            .field("value", &value)
            .field("source", &self.source)
            .finish()
    }
}

/// Resolved settings for the LFS server.
///
/// Built once by [`super::resolve`] and read-only afterwards. Share it by
/// reference, or install it process-wide with [`super::install`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    entries: Vec<Setting>,
}

impl Settings {
    pub(super) const fn from_entries(entries: Vec<Setting>) -> Self {
        Self { entries }
    }

    /// Resolved value of the named setting, if the table defines it.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.setting(name).map(Setting::value)
    }

    /// The named setting with its metadata.
    #[must_use]
    pub fn setting(&self, name: &str) -> Option<&Setting> {
        self.entries.iter().find(|s| s.name == name)
    }

    /// Settings in resolution order.
    pub fn iter(&self) -> impl Iterator<Item = &Setting> {
        self.entries.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn value(&self, name: &str) -> &str {
        self.get(name).unwrap_or_default()
    }

    /// Listener address, e.g. `tcp://:8080`.
    #[must_use]
    pub fn listen(&self) -> &str {
        self.value("Listen")
    }

    /// Public host name used to build object URLs.
    #[must_use]
    pub fn host(&self) -> &str {
        self.value("Host")
    }

    /// Path of the metadata database.
    #[must_use]
    pub fn meta_db(&self) -> &str {
        self.value("MetaDB")
    }

    /// Directory holding object content.
    #[must_use]
    pub fn content_path(&self) -> &str {
        self.value("ContentPath")
    }

    #[must_use]
    pub fn admin_user(&self) -> &str {
        self.value("AdminUser")
    }

    #[must_use]
    pub fn admin_pass(&self) -> &str {
        self.value("AdminPass")
    }

    /// TLS certificate path.
    #[must_use]
    pub fn cert(&self) -> &str {
        self.value("Cert")
    }

    /// TLS private key path.
    #[must_use]
    pub fn key(&self) -> &str {
        self.value("Key")
    }

    #[must_use]
    pub fn scheme(&self) -> &str {
        self.value("Scheme")
    }

    /// Raw `Public` value. See [`Self::is_public`].
    #[must_use]
    pub fn public(&self) -> &str {
        self.value("Public")
    }

    /// Raw `UseTus` value. See [`Self::is_using_tus`].
    #[must_use]
    pub fn use_tus(&self) -> &str {
        self.value("UseTus")
    }

    #[must_use]
    pub fn tus_host(&self) -> &str {
        self.value("TusHost")
    }

    /// True if the scheme mentions `https` anywhere.
    #[must_use]
    pub fn is_https(&self) -> bool {
        self.scheme().contains("https")
    }

    /// True only for the literals `1`, `true` and `TRUE`.
    #[must_use]
    pub fn is_public(&self) -> bool {
        TRUTHY.contains(&self.public())
    }

    /// Same literal policy as [`Self::is_public`], applied to `UseTus`.
    #[must_use]
    pub fn is_using_tus(&self) -> bool {
        TRUTHY.contains(&self.use_tus())
    }

    /// Base URL of the server.
    ///
    /// A host that already starts with `http` is returned as is, so a
    /// reverse proxy terminating TLS can supply the full URL.
    #[must_use]
    pub fn base_url(&self) -> String {
        let host = self.host();
        if host.starts_with("http") {
            return host.to_string();
        }

        if self.is_https() {
            format!("https://{host}")
        } else {
            format!("http://{host}")
        }
    }

    /// Admin credentials, when both user and password are set.
    #[must_use]
    pub fn admin_credentials(&self) -> Option<(&str, &str)> {
        let (user, pass) = (self.admin_user(), self.admin_pass());
        (!user.is_empty() && !pass.is_empty()).then_some((user, pass))
    }

    /// Certificate and key paths, when both are set.
    #[must_use]
    pub fn tls_files(&self) -> Option<(&str, &str)> {
        let (cert, key) = (self.cert(), self.key());
        (!cert.is_empty() && !key.is_empty()).then_some((cert, key))
    }

    /// Split `Listen` into network and address, e.g. `("tcp", ":8080")`.
    ///
    /// The parts are not validated.
    #[must_use]
    pub fn listen_endpoint(&self) -> Option<(&str, &str)> {
        self.listen().split_once("://")
    }
}
