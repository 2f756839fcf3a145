//! The static settings table.

/// Namespace token prepended to every setting's environment key.
pub const ENV_PREFIX: &str = "LFS";

/// Un-namespaced variable that overrides `Listen` (set by Heroku-style hosts).
pub const PORT_ENV: &str = "PORT";

/// A named configuration slot with its default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SettingDef {
    /// Setting name, unique within a table.
    pub name: &'static str,
    /// Value used when the environment key is unset. May be empty.
    pub default: &'static str,
    /// Value must be kept out of logs and reports.
    pub secret: bool,
}

impl SettingDef {
    const fn plain(name: &'static str, default: &'static str) -> Self {
        Self {
            name,
            default,
            secret: false,
        }
    }

    const fn secret(name: &'static str, default: &'static str) -> Self {
        Self {
            name,
            default,
            secret: true,
        }
    }

    /// Environment key for this setting, e.g. `LFS_CONTENTPATH`.
    #[must_use]
    pub fn env_key(&self) -> String {
        env_key(self.name)
    }
}

/// Every setting the server reads, in resolution order.
pub const SETTINGS: &[SettingDef] = &[
    SettingDef::plain("Listen", "tcp://:8080"),
    SettingDef::plain("Host", "localhost:8080"),
    SettingDef::plain("MetaDB", "lfs.db"),
    SettingDef::plain("ContentPath", "lfs-content"),
    SettingDef::plain("AdminUser", ""),
    SettingDef::secret("AdminPass", ""),
    SettingDef::plain("Cert", ""),
    SettingDef::plain("Key", ""),
    SettingDef::plain("Scheme", "http"),
    SettingDef::plain("Public", "public"),
    SettingDef::plain("UseTus", "false"),
    SettingDef::plain("TusHost", "localhost:1080"),
];

/// Derive the environment key for a setting name.
#[must_use]
pub fn env_key(name: &str) -> String {
    format!("{ENV_PREFIX}_{name}").to_uppercase()
}

/// Look up a definition by setting name or environment key, in any case.
#[must_use]
pub fn find_def(query: &str) -> Option<&'static SettingDef> {
    SETTINGS.iter().find(|def| {
        def.name.eq_ignore_ascii_case(query) || def.env_key().eq_ignore_ascii_case(query)
    })
}
