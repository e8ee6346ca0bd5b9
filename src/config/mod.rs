//! Configuration management

use anyhow::Result;
use serde::Deserialize;
use std::path::PathBuf;

use crate::session::{default_accounts, DemoAccount};
use crate::ui::RenderMode;

#[derive(Debug, Deserialize)]
pub struct Config {
    /// Output of the shell's `show` command
    #[serde(default)]
    pub render: RenderMode,

    /// Log screens rendered with incomplete selection at warn level
    #[serde(default)]
    pub strict_selection: bool,

    /// Accounts accepted by the demo login
    #[serde(default = "default_accounts")]
    pub accounts: Vec<DemoAccount>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            render: RenderMode::default(),
            strict_selection: false,
            accounts: default_accounts(),
        }
    }
}

const APP_DIR_NAME: &str = "dogclub-client";

/// Get config directory (DOGCLUB_CONFIG_DIR, XDG_CONFIG_HOME or platform default)
pub fn get_config_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("DOGCLUB_CONFIG_DIR") {
        return PathBuf::from(dir);
    }

    #[cfg(target_os = "macos")]
    {
        if let Ok(home) = std::env::var("HOME") {
            return PathBuf::from(home)
                .join("Library/Application Support")
                .join(APP_DIR_NAME);
        }
    }

    #[cfg(target_os = "linux")]
    {
        if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME") {
            return PathBuf::from(xdg).join(APP_DIR_NAME);
        }
        if let Ok(home) = std::env::var("HOME") {
            return PathBuf::from(home).join(".config").join(APP_DIR_NAME);
        }
    }

    #[cfg(target_os = "windows")]
    {
        if let Ok(appdata) = std::env::var("APPDATA") {
            return PathBuf::from(appdata).join(APP_DIR_NAME);
        }
    }

    // Fallback to current directory
    PathBuf::from(".")
}

/// Layer defaults, `config.{toml,json,yaml}` in the config dir and
/// `DOGCLUB_*` environment variables (later sources win).
pub fn load_config() -> Result<Config> {
    let config_dir = get_config_dir();

    let config = ::config::Config::builder()
        .set_default("render", RenderMode::default().as_str())?
        .set_default("strict_selection", false)?
        .add_source(
            ::config::File::with_name(&config_dir.join("config").to_string_lossy()).required(false),
        )
        // DOGCLUB_RENDER, DOGCLUB_STRICT_SELECTION
        .add_source(
            ::config::Environment::with_prefix("DOGCLUB")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    let config: Config = config.try_deserialize()?;
    tracing::debug!(
        "Loaded config from {:?}: render={}, strict_selection={}, {} account(s)",
        config_dir,
        config.render.as_str(),
        config.strict_selection,
        config.accounts.len()
    );
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::env;
    use std::fs;

    #[test]
    #[serial]
    fn test_defaults_without_file_or_env() {
        let dir = tempfile::tempdir().unwrap();
        env::set_var("DOGCLUB_CONFIG_DIR", dir.path());

        let config = load_config().expect("config should load");

        env::remove_var("DOGCLUB_CONFIG_DIR");

        assert_eq!(config.render, RenderMode::Summary);
        assert!(!config.strict_selection);
        assert_eq!(config.accounts, default_accounts());
    }

    #[test]
    #[serial]
    fn test_file_overrides_defaults() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("config.toml"),
            r#"
render = "html"
strict_selection = true

[[accounts]]
email = "rex@dogclub.test"
password = "goodboy"
role = "customer"
"#,
        )
        .unwrap();
        env::set_var("DOGCLUB_CONFIG_DIR", dir.path());

        let config = load_config().expect("config should load");

        env::remove_var("DOGCLUB_CONFIG_DIR");

        assert_eq!(config.render, RenderMode::Html);
        assert!(config.strict_selection);
        assert_eq!(config.accounts.len(), 1);
        assert_eq!(config.accounts[0].email, "rex@dogclub.test");
    }

    #[test]
    #[serial]
    fn test_env_overrides_file() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("config.toml"), "render = \"html\"\n").unwrap();
        env::set_var("DOGCLUB_CONFIG_DIR", dir.path());
        env::set_var("DOGCLUB_RENDER", "summary");
        env::set_var("DOGCLUB_STRICT_SELECTION", "true");

        let config = load_config().expect("config should load");

        env::remove_var("DOGCLUB_CONFIG_DIR");
        env::remove_var("DOGCLUB_RENDER");
        env::remove_var("DOGCLUB_STRICT_SELECTION");

        assert_eq!(config.render, RenderMode::Summary);
        assert!(config.strict_selection);
    }

    #[test]
    #[serial]
    fn test_single_underscore_env_keys_are_read() {
        let dir = tempfile::tempdir().unwrap();
        env::set_var("DOGCLUB_CONFIG_DIR", dir.path());
        env::set_var("DOGCLUB_RENDER", "html");
        env::set_var("DOGCLUB_STRICT_SELECTION", "true");

        let config = load_config().expect("config should load");

        env::remove_var("DOGCLUB_CONFIG_DIR");
        env::remove_var("DOGCLUB_RENDER");
        env::remove_var("DOGCLUB_STRICT_SELECTION");

        assert_eq!(config.render, RenderMode::Html);
        assert!(config.strict_selection);
    }

    #[test]
    #[serial]
    fn test_config_dir_env_override() {
        env::set_var("DOGCLUB_CONFIG_DIR", "/tmp/dogclub-test-config");
        assert_eq!(get_config_dir(), PathBuf::from("/tmp/dogclub-test-config"));
        env::remove_var("DOGCLUB_CONFIG_DIR");
    }

    #[test]
    #[serial]
    fn test_unknown_render_mode_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        env::set_var("DOGCLUB_CONFIG_DIR", dir.path());
        env::set_var("DOGCLUB_RENDER", "pdf");

        let result = load_config();

        env::remove_var("DOGCLUB_CONFIG_DIR");
        env::remove_var("DOGCLUB_RENDER");

        assert!(result.is_err());
    }
}
