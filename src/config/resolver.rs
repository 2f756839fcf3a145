//! One-shot resolution of the settings table against the environment.

use super::definitions::{SettingDef, PORT_ENV, SETTINGS};
use super::settings::{Setting, Settings, Source};

/// Resolve every definition, in order, into an immutable store.
///
/// For each definition the environment key is looked up with `env_lookup`.
/// A set variable wins, even when it is the empty string; an unset one
/// falls back to the default. Afterwards, a non-empty value from
/// `port_lookup` replaces `Listen` with `tcp://:<port>`. Names are unique
/// in the store: a repeated name keeps its first entry.
///
/// Resolution never fails. Nothing is validated here; a bad value surfaces
/// in whichever component consumes it.
pub fn resolve<E, P>(defs: &[SettingDef], env_lookup: E, port_lookup: P) -> Settings
where
    E: Fn(&str) -> Option<String>,
    P: FnOnce() -> Option<String>,
{
    let mut entries: Vec<Setting> = Vec::with_capacity(defs.len());
    for def in defs {
        if entries.iter().any(|s| s.name == def.name) {
            tracing::debug!(setting = def.name, "Duplicate setting skipped");
            continue;
        }

        let env_key = def.env_key();
        let (value, source) = match env_lookup(&env_key) {
            Some(value) => (value, Source::Environment),
            None => (def.default.to_string(), Source::Default),
        };

        tracing::debug!(
            setting = def.name,
            env_key = %env_key,
            source = %source,
            "Setting resolved"
        );

        entries.push(Setting {
            name: def.name,
            env_key,
            value,
            source,
            secret: def.secret,
        });
    }

    if let Some(port) = port_lookup().filter(|p| !p.is_empty()) {
        match entries.iter_mut().find(|s| s.name == "Listen") {
            Some(listen) => {
                listen.value = format!("tcp://:{port}");
                listen.source = Source::PortOverride;
                tracing::debug!(listen = %listen.value, "Listen overridden by ${}", PORT_ENV);
            }
            None => tracing::debug!("${} set but no Listen setting to override", PORT_ENV),
        }
    }

    Settings::from_entries(entries)
}

impl Settings {
    /// Resolve the server's settings table from the process environment.
    ///
    /// A set variable that is not valid Unicode still counts as set; invalid
    /// sequences are replaced with U+FFFD.
    #[must_use]
    pub fn from_env() -> Self {
        resolve(SETTINGS, lossy_var, || lossy_var(PORT_ENV))
    }
}

fn lossy_var(key: &str) -> Option<String> {
    std::env::var_os(key).map(|v| v.to_string_lossy().into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env_of(vars: &[(&str, &str)]) -> HashMap<String, String> {
        vars.iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn test_defaults_when_unset() {
        let settings = resolve(SETTINGS, |_| None, || None);
        for def in SETTINGS {
            let setting = settings.setting(def.name).unwrap();
            assert_eq!(setting.value(), def.default, "{}", def.name);
            assert_eq!(setting.source(), Source::Default);
        }
    }

    #[test]
    fn test_environment_overrides_default() {
        let env = env_of(&[("LFS_METADB", "/var/lib/lfs/meta.db"), ("LFS_CERT", "c.pem")]);
        let settings = resolve(SETTINGS, |k| env.get(k).cloned(), || None);
        assert_eq!(settings.meta_db(), "/var/lib/lfs/meta.db");
        assert_eq!(settings.cert(), "c.pem");
        assert_eq!(
            settings.setting("MetaDB").unwrap().source(),
            Source::Environment
        );
    }

    #[test]
    fn test_explicit_empty_beats_default() {
        let env = env_of(&[("LFS_HOST", "")]);
        let settings = resolve(SETTINGS, |k| env.get(k).cloned(), || None);
        assert_eq!(settings.host(), "");
        assert_eq!(
            settings.setting("Host").unwrap().source(),
            Source::Environment
        );
    }

    #[test]
    fn test_lookup_uses_derived_keys_in_order() {
        let seen = std::cell::RefCell::new(Vec::new());
        let _ = resolve(
            SETTINGS,
            |k| {
                seen.borrow_mut().push(k.to_string());
                None
            },
            || None,
        );
        let expected: Vec<String> = SETTINGS.iter().map(SettingDef::env_key).collect();
        assert_eq!(seen.into_inner(), expected);
    }

    #[test]
    fn test_port_overrides_listen() {
        let settings = resolve(SETTINGS, |_| None, || Some("9000".to_string()));
        assert_eq!(settings.listen(), "tcp://:9000");
        assert_eq!(
            settings.setting("Listen").unwrap().source(),
            Source::PortOverride
        );
    }

    #[test]
    fn test_port_beats_lfs_listen() {
        let env = env_of(&[("LFS_LISTEN", "tcp://:1234")]);
        let settings = resolve(SETTINGS, |k| env.get(k).cloned(), || Some("9000".to_string()));
        assert_eq!(settings.listen(), "tcp://:9000");
    }

    #[test]
    fn test_port_is_not_validated() {
        let settings = resolve(SETTINGS, |_| None, || Some("http".to_string()));
        assert_eq!(settings.listen(), "tcp://:http");
    }

    #[test]
    fn test_empty_port_is_ignored() {
        let settings = resolve(SETTINGS, |_| None, || Some(String::new()));
        assert_eq!(settings.listen(), "tcp://:8080");
    }

    #[test]
    fn test_port_without_listen_definition() {
        let defs = [SettingDef {
            name: "Host",
            default: "localhost:8080",
            secret: false,
        }];
        let settings = resolve(&defs, |_| None, || Some("9000".to_string()));
        assert_eq!(settings.len(), 1);
        assert_eq!(settings.listen(), "");
    }

    #[test]
    fn test_duplicate_name_keeps_first_entry() {
        let defs = [
            SettingDef {
                name: "Listen",
                default: "tcp://:8080",
                secret: false,
            },
            SettingDef {
                name: "Listen",
                default: "tcp://:1111",
                secret: false,
            },
        ];
        let settings = resolve(&defs, |_| None, || Some("9000".to_string()));
        assert_eq!(settings.len(), 1);
        assert_eq!(settings.listen(), "tcp://:9000");
        let values: Vec<_> = settings.iter().map(Setting::value).collect();
        assert_eq!(values, ["tcp://:9000"]);
    }

    #[test]
    fn test_resolution_is_idempotent() {
        let env = env_of(&[("LFS_SCHEME", "https"), ("LFS_PUBLIC", "")]);
        let first = resolve(SETTINGS, |k| env.get(k).cloned(), || Some("7000".to_string()));
        let second = resolve(SETTINGS, |k| env.get(k).cloned(), || Some("7000".to_string()));
        assert_eq!(first, second);
    }
}
