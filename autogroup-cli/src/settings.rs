//! User settings (`~/.config/autogroup/settings.toml`) and database path
//! resolution.

use std::ffi::OsString;
use std::path::PathBuf;

use autogroup_core::EntryType;
use serde::Deserialize;

/// Environment variable that overrides the database path from settings.
pub(crate) const DB_ENV_VAR: &str = "AUTOGROUP_DB";

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct Settings {
    pub database: DatabaseSettings,
    pub grouping: GroupingSettings,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct DatabaseSettings {
    pub path: Option<PathBuf>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct GroupingSettings {
    pub eager: bool,
    pub prefer_type: Option<String>,
}

impl Settings {
    /// Load the settings file, falling back to defaults if it is missing or invalid.
    pub(crate) fn load() -> Self {
        let Some(path) = settings_path() else {
            log::debug!("No config directory; using default settings");
            return Self::default();
        };
        match std::fs::read_to_string(&path) {
            Ok(contents) => Self::parse(&contents).unwrap_or_else(|e| {
                log::warn!("Ignoring invalid settings file {}: {}", path.display(), e);
                Self::default()
            }),
            Err(e) => {
                log::debug!("No settings loaded from {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    pub(crate) fn parse(contents: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }

    /// The configured representative type preference, if it names a known type.
    pub(crate) fn preferred_type(&self) -> Option<EntryType> {
        let name = self.grouping.prefer_type.as_deref()?;
        match name.parse() {
            Ok(entry_type) => Some(entry_type),
            Err(e) => {
                log::warn!("Ignoring grouping.prefer_type in settings: {}", e);
                None
            }
        }
    }
}

/// Canonical path to the settings file: `~/.config/autogroup/settings.toml`.
pub(crate) fn settings_path() -> Option<PathBuf> {
    dirs::config_dir().map(|config| config.join("autogroup").join("settings.toml"))
}

/// Default database location: `<data dir>/autogroup/autogroup.db`.
pub(crate) fn default_db_path() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("autogroup")
        .join("autogroup.db")
}

/// Resolve the database path using a priority chain:
///
/// 1. CLI override (if `Some`)
/// 2. `AUTOGROUP_DB` environment variable
/// 3. `database.path` in `settings.toml`
/// 4. The platform data directory
pub(crate) fn resolve_db_path(cli_override: Option<PathBuf>, settings: &Settings) -> PathBuf {
    resolve_db_path_from(cli_override, std::env::var_os(DB_ENV_VAR), settings)
}

fn resolve_db_path_from(
    cli_override: Option<PathBuf>,
    env_value: Option<OsString>,
    settings: &Settings,
) -> PathBuf {
    if let Some(p) = cli_override {
        return p;
    }
    if let Some(p) = env_value.filter(|v| !v.is_empty()) {
        return PathBuf::from(p);
    }
    if let Some(p) = &settings.database.path {
        return p.clone();
    }
    default_db_path()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_full_settings() {
        let settings = Settings::parse(
            r#"
[database]
path = "/tmp/catalog.db"

[grouping]
eager = true
prefer_type = "tv series"
"#,
        )
        .unwrap();
        assert_eq!(settings.database.path, Some(PathBuf::from("/tmp/catalog.db")));
        assert!(settings.grouping.eager);
        assert_eq!(settings.preferred_type(), Some(EntryType::TvSeries));
    }

    #[test]
    fn missing_sections_use_defaults() {
        let settings = Settings::parse("").unwrap();
        assert!(settings.database.path.is_none());
        assert!(!settings.grouping.eager);
        assert!(settings.preferred_type().is_none());
    }

    #[test]
    fn unknown_preferred_type_is_ignored() {
        let settings = Settings::parse("[grouping]\nprefer_type = \"music video\"\n").unwrap();
        assert!(settings.preferred_type().is_none());
    }

    #[test]
    fn cli_override_wins() {
        let settings = Settings::parse("[database]\npath = \"from-settings.db\"\n").unwrap();
        let path = resolve_db_path_from(
            Some(PathBuf::from("from-cli.db")),
            Some(OsString::from("from-env.db")),
            &settings,
        );
        assert_eq!(path, PathBuf::from("from-cli.db"));
    }

    #[test]
    fn env_beats_settings() {
        let settings = Settings::parse("[database]\npath = \"from-settings.db\"\n").unwrap();
        let path = resolve_db_path_from(None, Some(OsString::from("from-env.db")), &settings);
        assert_eq!(path, PathBuf::from("from-env.db"));

        let path = resolve_db_path_from(None, Some(OsString::new()), &settings);
        assert_eq!(path, PathBuf::from("from-settings.db"));
    }

    #[test]
    fn falls_back_to_data_dir() {
        let path = resolve_db_path_from(None, None, &Settings::default());
        assert_eq!(path, default_db_path());
        assert!(path.ends_with("autogroup/autogroup.db"));
    }
}
