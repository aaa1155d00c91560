use iced::font::Weight;
use iced::{Color, Shadow, Vector, color};
use serde::Deserialize;

/// Built-in color source for the segmented control.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ControlTheme {
    #[default]
    Light,
    Dark,
}

impl ControlTheme {
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn palette(self) -> Palette {
        match self {
            Self::Light => Palette::LIGHT,
            Self::Dark => Palette::DARK,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub container_background: Color,
    pub indicator_background: Color,
    pub text: Color,
    pub active_text: Color,
}

impl Palette {
    pub const LIGHT: Self = Self {
        container_background: color!(0xe5, 0xe5, 0xea), // iOS systemGray5
        indicator_background: Color::WHITE,
        text: Color::BLACK,
        active_text: Color::BLACK,
    };

    pub const DARK: Self = Self {
        container_background: color!(0x4a, 0x55, 0x68),
        indicator_background: Color::BLACK,
        text: Color::WHITE,
        active_text: Color::BLACK,
    };
}

/// Explicit colors that take precedence over the theme palette.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ColorOverrides {
    pub segmented_control_background: Option<Color>,
    pub active_segment_background: Option<Color>,
    pub text: Option<Color>,
    pub active_text: Option<Color>,
}

pub fn container_background(theme: ControlTheme, explicit: Option<Color>) -> Color {
    explicit.unwrap_or(theme.palette().container_background)
}

pub fn indicator_background(theme: ControlTheme, explicit: Option<Color>) -> Color {
    explicit.unwrap_or(theme.palette().indicator_background)
}

pub fn text_color(theme: ControlTheme, explicit: Option<Color>) -> Color {
    explicit.unwrap_or(theme.palette().text)
}

pub fn active_text_color(theme: ControlTheme, explicit: Option<Color>) -> Color {
    explicit.unwrap_or(theme.palette().active_text)
}

/// Colors after applying overrides on top of a theme.
pub fn resolve(theme: ControlTheme, overrides: &ColorOverrides) -> Palette {
    Palette {
        container_background: container_background(
            theme,
            overrides.segmented_control_background,
        ),
        indicator_background: indicator_background(theme, overrides.active_segment_background),
        text: text_color(theme, overrides.text),
        active_text: active_text_color(theme, overrides.active_text),
    }
}

pub const DEFAULT_ACTIVE_TEXT_WEIGHT: &str = "600";

/// Parses a CSS style font weight ("normal", "bold", "100".."900").
pub fn parse_weight(value: &str) -> Option<Weight> {
    let weight = match value.trim() {
        "100" => Weight::Thin,
        "200" => Weight::ExtraLight,
        "300" => Weight::Light,
        "normal" | "400" => Weight::Normal,
        "500" => Weight::Medium,
        "600" => Weight::Semibold,
        "bold" | "700" => Weight::Bold,
        "800" => Weight::ExtraBold,
        "900" => Weight::Black,
        _ => return None,
    };
    Some(weight)
}

pub fn default_shadow() -> Shadow {
    Shadow {
        color: Color {
            a: 0.23,
            ..Color::BLACK
        },
        offset: Vector::new(0.0, 2.0),
        blur_radius: 2.62,
    }
}

pub const SPACING_SMALL: u16 = 4;
pub const SPACING_NORMAL: u16 = 8;
pub const SPACING_LARGE: u16 = 16;

pub const RADIUS_NORMAL: f32 = 8.0;
pub const RADIUS_PILL: f32 = 25.0;

/// Host width assumed when the control is given none.
pub const DEFAULT_HOST_WIDTH: f32 = 420.0;

pub const TEXT_SIZE: f32 = 18.0;
pub const SEGMENT_PADDING_HORIZONTAL: f32 = 5.0;
pub const DEFAULT_PADDING_VERTICAL: f32 = 12.0;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dark_theme_defaults() {
        let palette = resolve(ControlTheme::Dark, &ColorOverrides::default());

        assert_eq!(palette.container_background, color!(0x4a, 0x55, 0x68));
        assert_eq!(palette.indicator_background, Color::BLACK);
        assert_eq!(palette.text, Color::WHITE);
        assert_eq!(palette.active_text, Color::BLACK);
    }

    #[test]
    fn light_theme_defaults() {
        let palette = resolve(ControlTheme::Light, &ColorOverrides::default());

        assert_eq!(palette.container_background, color!(0xe5, 0xe5, 0xea));
        assert_eq!(palette.indicator_background, Color::WHITE);
        assert_eq!(palette.text, Color::BLACK);
        assert_eq!(palette.active_text, Color::BLACK);
    }

    #[test]
    fn explicit_indicator_color_wins_for_both_themes() {
        let red = color!(0xff, 0x00, 0x00);
        let overrides = ColorOverrides {
            active_segment_background: Some(red),
            ..Default::default()
        };

        for theme in [ControlTheme::Light, ControlTheme::Dark] {
            let palette = resolve(theme, &overrides);
            assert_eq!(palette.indicator_background, red);
            assert_eq!(palette.text, theme.palette().text);
        }
    }

    #[test]
    fn parses_weights() {
        assert_eq!(parse_weight("600"), Some(Weight::Semibold));
        assert_eq!(parse_weight("bold"), Some(Weight::Bold));
        assert_eq!(parse_weight(" normal "), Some(Weight::Normal));
        assert_eq!(parse_weight("heavy"), None);
    }

    #[test]
    fn theme_names_deserialize_uppercase() {
        #[derive(Deserialize)]
        struct Wrapper {
            theme: ControlTheme,
        }

        let parsed: Wrapper = toml::from_str("theme = \"DARK\"").expect("parse theme");
        assert_eq!(parsed.theme, ControlTheme::Dark);
        assert_eq!(parsed.theme.toggled(), ControlTheme::Light);
    }
}
