use crate::constants;
use crate::error::Result;
use etcetera::{AppStrategy, AppStrategyArgs, choose_app_strategy};
use serde::Deserialize;
use std::env;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Config {
    pub app: AppConfig,
    pub ui: UiConfig,

    pub config_path: PathBuf,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case", default, deny_unknown_fields)]
pub struct AppConfig {
    pub width: f32,
    pub height: f32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            width: 1080.0,
            height: 720.0,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case", default, deny_unknown_fields)]
pub struct UiConfig {
    /// Scale the whole UI
    pub scale: Option<f32>,
    pub font_size: f32,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            scale: None,
            font_size: 15.0,
        }
    }
}

#[derive(Default, Deserialize)]
#[serde(rename_all = "kebab-case", default, deny_unknown_fields)]
struct RawConfig {
    app: AppConfig,
    ui: UiConfig,
}

fn create_strategy() -> std::result::Result<impl AppStrategy, etcetera::HomeDirError> {
    choose_app_strategy(AppStrategyArgs {
        top_level_domain: constants::TOP_LEVEL_DOMAIN.to_string(),
        author: constants::AUTHOR.to_string(),
        app_name: constants::APP_NAME.to_string(),
    })
}

fn resolve_config_path(strategy: &impl AppStrategy) -> PathBuf {
    env::var_os("CONFIG_DIRECTORY")
        .map(PathBuf::from)
        .unwrap_or_else(|| strategy.config_dir())
        .join(constants::CONFIG_FILE_NAME)
}

impl Config {
    fn from_raw(raw: RawConfig, config_path: PathBuf) -> Self {
        Self {
            app: raw.app,
            ui: raw.ui,
            config_path,
        }
    }

    pub fn load() -> Result<Config> {
        let strategy = create_strategy()?;
        let config_path = resolve_config_path(&strategy);

        let raw: RawConfig = match std::fs::read_to_string(&config_path) {
            Ok(content) => toml::from_str(&content)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => RawConfig::default(),
            Err(e) => return Err(e.into()),
        };

        Ok(Self::from_raw(raw, config_path))
    }

    /// Defaults, used when the on-disk configuration cannot be loaded.
    pub fn fallback() -> Config {
        let config_path = env::temp_dir().join(constants::CONFIG_FILE_NAME);
        Self::from_raw(RawConfig::default(), config_path)
    }

    #[cfg(test)]
    pub fn load_str(config_str: &str) -> Result<Self> {
        let raw: RawConfig = toml::from_str(config_str)?;
        let config_path = env::temp_dir().join(constants::CONFIG_FILE_NAME);
        Ok(Self::from_raw(raw, config_path))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_app_config_defaults() {
        let default_app = AppConfig::default();
        assert_eq!(default_app.width, 1080.0);
        assert_eq!(default_app.height, 720.0);
    }

    #[test]
    fn test_load_config_values() {
        const USER_CONFIG: &str = r#"
        [app]
        width = 200.0

        [ui]
        font-size = 18.0
        "#;

        let cfg = Config::load_str(USER_CONFIG).expect("Failed to load config");

        assert_eq!(cfg.app.width, 200.0);
        assert_eq!(cfg.app.height, 720.0);
        assert_eq!(cfg.ui.font_size, 18.0);
        assert_eq!(cfg.ui.scale, None);
    }

    #[test]
    fn test_load_config_unknown_field() {
        const USER_CONFIG: &str = r#"
        [app]
        wdith = 200.0
        "#;

        let err = Config::load_str(USER_CONFIG).unwrap_err();
        assert!(err.to_string().contains("unknown field `wdith`"));
    }
}
