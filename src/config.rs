use crate::gui::animation::SpringPreset;
use crate::gui::icon::{DEFAULT_ICON_SIZE, IconStyle, IconType};
use crate::gui::theme::{
    ColorOverrides, ControlTheme, DEFAULT_ACTIVE_TEXT_WEIGHT, DEFAULT_HOST_WIDTH,
    DEFAULT_PADDING_VERTICAL,
};
use iced::Color;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const DEFAULT_WINDOW_WIDTH: f32 = DEFAULT_HOST_WIDTH;
pub const DEFAULT_WINDOW_HEIGHT: f32 = 220.0;
const DEFAULT_TABS: [&str; 3] = ["Day", "Week", "Month"];
const DEFAULT_CONFIG_TOML: &str = r#"[ui]
window_width = 420
window_height = 220

[control]
tabs = ["Day", "Week", "Month"]
theme = "LIGHT"
is_rtl = false
disable_flag = false
active_text_weight = "600"
padding_vertical = 12
# width = 388
# is_icon = false
# icon_type = "material"
# icon_size = 22

# [control.colors]
# segmented_control_background = [229, 229, 234]
# active_segment_background = [255, 255, 255]
# text = [0, 0, 0]
# active_text = [0, 0, 0]
"#;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub ui: UiConfig,
    pub control: ControlConfig,
}

#[derive(Debug, Clone)]
pub struct UiConfig {
    pub window_width: f32,
    pub window_height: f32,
}

#[derive(Debug, Clone)]
pub struct ControlConfig {
    pub tabs: Vec<String>,
    pub theme: ControlTheme,
    pub is_rtl: bool,
    pub disable_flag: bool,
    pub active_text_weight: String,
    pub padding_vertical: f32,
    /// `None` follows the window width.
    pub width: Option<f32>,
    pub is_icon: bool,
    pub icon_type: IconType,
    pub icon_size: f32,
    pub colors: ColorOverrides,
}

impl ControlConfig {
    pub fn preset(&self) -> SpringPreset {
        SpringPreset::for_flag(self.disable_flag)
    }

    pub fn icon_style(&self) -> Option<IconStyle> {
        self.is_icon.then(|| IconStyle {
            icon_type: self.icon_type,
            size: self.icon_size,
            ..IconStyle::default()
        })
    }
}

#[derive(Debug, Deserialize)]
struct FileConfig {
    ui: Option<UiFileConfig>,
    control: Option<ControlFileConfig>,
}

#[derive(Debug, Deserialize)]
struct UiFileConfig {
    window_width: Option<f32>,
    window_height: Option<f32>,
}

#[derive(Debug, Deserialize)]
struct ControlFileConfig {
    tabs: Option<Vec<String>>,
    theme: Option<ControlTheme>,
    is_rtl: Option<bool>,
    disable_flag: Option<bool>,
    active_text_weight: Option<String>,
    padding_vertical: Option<f32>,
    width: Option<f32>,
    is_icon: Option<bool>,
    icon_type: Option<IconType>,
    icon_size: Option<f32>,
    colors: Option<ColorFileConfig>,
}

#[derive(Debug, Deserialize)]
struct ColorFileConfig {
    segmented_control_background: Option<[u8; 3]>,
    active_segment_background: Option<[u8; 3]>,
    text: Option<[u8; 3]>,
    active_text: Option<[u8; 3]>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            ui: UiConfig {
                window_width: DEFAULT_WINDOW_WIDTH,
                window_height: DEFAULT_WINDOW_HEIGHT,
            },
            control: ControlConfig {
                tabs: DEFAULT_TABS.iter().map(|tab| tab.to_string()).collect(),
                theme: ControlTheme::default(),
                is_rtl: false,
                disable_flag: false,
                active_text_weight: DEFAULT_ACTIVE_TEXT_WEIGHT.to_string(),
                padding_vertical: DEFAULT_PADDING_VERTICAL,
                width: None,
                is_icon: false,
                icon_type: IconType::default(),
                icon_size: DEFAULT_ICON_SIZE,
                colors: ColorOverrides::default(),
            },
        }
    }
}

impl AppConfig {
    pub fn load() -> Self {
        let mut config = Self::default();
        let Some(path) = config_path() else {
            tracing::warn!("no home directory, using default config");
            return config;
        };

        if let Err(err) = ensure_config_file(&path) {
            tracing::warn!(%err, "could not write default config");
        }

        match read_file(&path) {
            Ok(file) => {
                config.apply_file(file);
                tracing::info!(path = %path.display(), "loaded config");
            }
            Err(err) => tracing::warn!(%err, "using default config"),
        }
        config
    }

    fn apply_file(&mut self, file: FileConfig) {
        if let Some(ui) = file.ui {
            if let Some(width) = ui.window_width {
                self.ui.window_width = sanitize_positive(width, self.ui.window_width);
            }
            if let Some(height) = ui.window_height {
                self.ui.window_height = sanitize_positive(height, self.ui.window_height);
            }
        }

        if let Some(control) = file.control {
            let current = &mut self.control;

            if let Some(tabs) = control.tabs {
                current.tabs = tabs;
            }
            if let Some(theme) = control.theme {
                current.theme = theme;
            }
            if let Some(is_rtl) = control.is_rtl {
                current.is_rtl = is_rtl;
            }
            if let Some(disable_flag) = control.disable_flag {
                current.disable_flag = disable_flag;
            }
            if let Some(weight) = control.active_text_weight {
                current.active_text_weight = weight;
            }
            if let Some(padding) = control.padding_vertical {
                current.padding_vertical = sanitize_non_negative(padding, current.padding_vertical);
            }
            if let Some(width) = control.width
                && width.is_finite()
                && width > 0.0
            {
                current.width = Some(width);
            }
            if let Some(is_icon) = control.is_icon {
                current.is_icon = is_icon;
            }
            if let Some(icon_type) = control.icon_type {
                current.icon_type = icon_type;
            }
            if let Some(size) = control.icon_size {
                current.icon_size = sanitize_positive(size, current.icon_size);
            }
            if let Some(colors) = control.colors {
                current.colors = ColorOverrides {
                    segmented_control_background: colors
                        .segmented_control_background
                        .map(rgb),
                    active_segment_background: colors.active_segment_background.map(rgb),
                    text: colors.text.map(rgb),
                    active_text: colors.active_text.map(rgb),
                };
            }
        }
    }
}

fn rgb(value: [u8; 3]) -> Color {
    Color::from_rgb8(value[0], value[1], value[2])
}

fn sanitize_positive(value: f32, fallback: f32) -> f32 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        fallback
    }
}

fn sanitize_non_negative(value: f32, fallback: f32) -> f32 {
    if value.is_finite() && value >= 0.0 {
        value
    } else {
        fallback
    }
}

fn config_path() -> Option<PathBuf> {
    let home = dirs::home_dir()?;
    Some(home.join(".config").join("segmenty").join("config.toml"))
}

fn read_file(path: &Path) -> Result<FileConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(toml::from_str(&contents)?)
}

fn ensure_config_file(path: &Path) -> Result<(), ConfigError> {
    if path.exists() {
        return Ok(());
    }
    let io_err = |source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(io_err)?;
    }
    fs::write(path, DEFAULT_CONFIG_TOML.as_bytes()).map_err(io_err)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(contents: &str) -> FileConfig {
        toml::from_str(contents).expect("parse config")
    }

    #[test]
    fn default_file_matches_defaults() {
        let mut config = AppConfig::default();
        config.apply_file(parse(DEFAULT_CONFIG_TOML));

        let defaults = AppConfig::default();
        assert_eq!(config.control.tabs, defaults.control.tabs);
        assert_eq!(config.control.theme, ControlTheme::Light);
        assert_eq!(config.control.padding_vertical, DEFAULT_PADDING_VERTICAL);
        assert_eq!(config.ui.window_width, DEFAULT_WINDOW_WIDTH);
        assert_eq!(config.control.preset(), SpringPreset::NORMAL);
        assert!(config.control.icon_style().is_none());
    }

    #[test]
    fn control_section_overrides() {
        let contents = r#"
[control]
tabs = ["home", "search"]
theme = "DARK"
is_rtl = true
disable_flag = true
is_icon = true
icon_type = "font-awesome"

[control.colors]
active_segment_background = [255, 0, 0]
"#;

        let mut config = AppConfig::default();
        config.apply_file(parse(contents));

        let control = &config.control;
        assert_eq!(control.tabs, vec!["home".to_string(), "search".to_string()]);
        assert_eq!(control.theme, ControlTheme::Dark);
        assert!(control.is_rtl);
        assert_eq!(control.preset(), SpringPreset::INSTANT);
        assert_eq!(
            control.colors.active_segment_background,
            Some(Color::from_rgb8(255, 0, 0))
        );
        assert_eq!(control.colors.text, None);

        let icons = control.icon_style().expect("icon mode");
        assert_eq!(icons.icon_type, IconType::FontAwesome);
        assert_eq!(icons.size, DEFAULT_ICON_SIZE);
    }

    #[test]
    fn invalid_numbers_fall_back() {
        let contents = r#"
[ui]
window_width = -5

[control]
padding_vertical = -1
width = 0
icon_size = 0
"#;

        let mut config = AppConfig::default();
        config.apply_file(parse(contents));

        assert_eq!(config.ui.window_width, DEFAULT_WINDOW_WIDTH);
        assert_eq!(config.control.padding_vertical, DEFAULT_PADDING_VERTICAL);
        assert_eq!(config.control.width, None);
        assert_eq!(config.control.icon_size, DEFAULT_ICON_SIZE);
    }

    #[test]
    fn unknown_theme_is_a_parse_error() {
        let result = toml::from_str::<FileConfig>("[control]\ntheme = \"SEPIA\"");
        let err = ConfigError::from(result.expect_err("bad theme"));
        assert!(err.to_string().starts_with("failed to parse config"));
    }
}
