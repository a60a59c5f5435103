//! Settings parser for .bizdash/config.toml

use super::types::Settings;
use bizdash_core::prelude::*;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.toml";
const BIZDASH_DIR: &str = ".bizdash";

const DEFAULT_CONFIG: &str = r#"# bizdash configuration

[behavior]
default_view = "dashboard"   # dashboard, crm, finance, projects, team, hr,
                             # operations, analytics, reports, messages, settings
seed_demo_data = true        # start with demo transactions, budgets and reports

[ui]
icons = "unicode"            # "unicode" or "nerd_fonts"
currency_symbol = "$"
show_key_hints = true
"#;

/// Load settings from `.bizdash/config.toml` under `workspace_path`.
///
/// A missing or unreadable file yields defaults; parse errors are logged.
pub fn load_settings(workspace_path: &Path) -> Settings {
    let config_path = workspace_path.join(BIZDASH_DIR).join(CONFIG_FILENAME);

    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    match std::fs::read_to_string(&config_path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", config_path);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", config_path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", config_path, e);
            Settings::default()
        }
    }
}

/// Create `.bizdash/config.toml` with commented defaults.
///
/// An existing config file is left untouched.
pub fn init_config_dir(workspace_path: &Path) -> Result<()> {
    let dir = workspace_path.join(BIZDASH_DIR);

    if !dir.exists() {
        std::fs::create_dir_all(&dir).context("Failed to create .bizdash dir")?;
    }

    let config_path = dir.join(CONFIG_FILENAME);
    if !config_path.exists() {
        std::fs::write(&config_path, DEFAULT_CONFIG)
            .with_context(|| format!("Failed to write {:?}", config_path))?;
        info!("Created default config at {:?}", config_path);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::IconMode;
    use bizdash_core::ViewId;
    use tempfile::tempdir;

    #[test]
    fn test_load_settings_defaults() {
        let temp = tempdir().unwrap();
        let settings = load_settings(temp.path());

        assert_eq!(settings.behavior.default_view, ViewId::Dashboard);
        assert!(settings.behavior.seed_demo_data);
        assert_eq!(settings.ui.icons, IconMode::Unicode);
    }

    #[test]
    fn test_load_settings_custom() {
        let temp = tempdir().unwrap();
        let dir = temp.path().join(".bizdash");
        std::fs::create_dir_all(&dir).unwrap();

        let config = r#"
[behavior]
default_view = "reports"
seed_demo_data = false

[ui]
currency_symbol = "€"
"#;
        std::fs::write(dir.join("config.toml"), config).unwrap();

        let settings = load_settings(temp.path());

        assert_eq!(settings.behavior.default_view, ViewId::Reports);
        assert!(!settings.behavior.seed_demo_data);
        assert_eq!(settings.ui.currency_symbol, "€");
    }

    #[test]
    fn test_load_settings_invalid_toml() {
        let temp = tempdir().unwrap();
        let dir = temp.path().join(".bizdash");
        std::fs::create_dir_all(&dir).unwrap();

        std::fs::write(dir.join("config.toml"), "not valid toml {{{{").unwrap();

        let settings = load_settings(temp.path());
        assert_eq!(settings.behavior.default_view, ViewId::Dashboard);
    }

    #[test]
    fn test_load_settings_unknown_view_falls_back() {
        let temp = tempdir().unwrap();
        let dir = temp.path().join(".bizdash");
        std::fs::create_dir_all(&dir).unwrap();

        std::fs::write(
            dir.join("config.toml"),
            "[behavior]\ndefault_view = \"payroll\"\n",
        )
        .unwrap();

        let settings = load_settings(temp.path());
        assert_eq!(settings.behavior.default_view, ViewId::Dashboard);
    }

    #[test]
    fn test_init_config_dir() {
        let temp = tempdir().unwrap();

        init_config_dir(temp.path()).unwrap();

        let path = temp.path().join(".bizdash/config.toml");
        assert!(path.exists());

        // The generated file must parse back into defaults
        let settings = load_settings(temp.path());
        assert_eq!(settings.behavior.default_view, ViewId::Dashboard);
        assert_eq!(settings.ui.currency_symbol, "$");
    }

    #[test]
    fn test_init_config_dir_keeps_existing_file() {
        let temp = tempdir().unwrap();
        let dir = temp.path().join(".bizdash");
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("config.toml"), "[ui]\nshow_key_hints = false\n").unwrap();

        init_config_dir(temp.path()).unwrap();

        let settings = load_settings(temp.path());
        assert!(!settings.ui.show_key_hints);
    }

    #[test]
    fn test_init_config_dir_reports_io_error() {
        let temp = tempdir().unwrap();
        let not_a_dir = temp.path().join("books.txt");
        std::fs::write(&not_a_dir, "").unwrap();

        let err = init_config_dir(&not_a_dir).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
