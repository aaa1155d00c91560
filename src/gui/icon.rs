use iced::{Color, Font};
use serde::Deserialize;

pub const DEFAULT_ICON_SIZE: f32 = 22.0;

/// Icon set a segment glyph is looked up in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IconType {
    #[default]
    Material,
    FontAwesome,
}

impl IconType {
    pub fn family(self) -> &'static str {
        match self {
            Self::Material => "Material Icons",
            Self::FontAwesome => "Font Awesome 6 Free",
        }
    }

    pub fn font(self) -> Font {
        Font::with_name(self.family())
    }

    /// Reads an installed copy of the icon font so it can be registered
    /// with the application.
    pub fn load_system_font(self) -> Option<Vec<u8>> {
        let mut db = fontdb::Database::new();
        db.load_system_fonts();

        let families = [fontdb::Family::Name(self.family())];
        let id = db.query(&fontdb::Query {
            families: &families,
            ..fontdb::Query::default()
        })?;
        db.with_face_data(id, |data, _index| data.to_vec())
    }

    /// Private-use codepoint for `name`, if the set has it.
    pub fn glyph(self, name: &str) -> Option<char> {
        let table: &[(&str, char)] = match self {
            Self::Material => MATERIAL,
            Self::FontAwesome => FONT_AWESOME,
        };

        table
            .iter()
            .find(|(known, _)| *known == name)
            .map(|(_, glyph)| *glyph)
    }
}

// Unknown names render as a question mark, like the web icon sets do.
pub const MISSING_GLYPH: char = '?';

const MATERIAL: &[(&str, char)] = &[
    ("home", '\u{e88a}'),
    ("search", '\u{e8b6}'),
    ("settings", '\u{e8b8}'),
    ("person", '\u{e7fd}'),
    ("star", '\u{e838}'),
    ("favorite", '\u{e87d}'),
    ("list", '\u{e896}'),
    ("menu", '\u{e5d2}'),
    ("close", '\u{e5cd}'),
    ("check", '\u{e5ca}'),
    ("info", '\u{e88e}'),
    ("notifications", '\u{e7f4}'),
    ("map", '\u{e55b}'),
    ("grid-view", '\u{e9b0}'),
    ("view-list", '\u{e8ef}'),
    ("calendar-today", '\u{e935}'),
];

const FONT_AWESOME: &[(&str, char)] = &[
    ("home", '\u{f015}'),
    ("search", '\u{f002}'),
    ("cog", '\u{f013}'),
    ("user", '\u{f007}'),
    ("star", '\u{f005}'),
    ("heart", '\u{f004}'),
    ("list", '\u{f03a}'),
    ("bars", '\u{f0c9}'),
    ("times", '\u{f00d}'),
    ("check", '\u{f00c}'),
    ("info", '\u{f129}'),
    ("bell", '\u{f0f3}'),
    ("map", '\u{f279}'),
    ("th", '\u{f00a}'),
    ("calendar", '\u{f133}'),
];

/// Rendering options for icon segments.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IconStyle {
    pub icon_type: IconType,
    pub size: f32,
    /// Defaults to the resolved active text color.
    pub selected_color: Option<Color>,
    /// Defaults to the resolved inactive text color.
    pub unselected_color: Option<Color>,
}

impl Default for IconStyle {
    fn default() -> Self {
        Self {
            icon_type: IconType::Material,
            size: DEFAULT_ICON_SIZE,
            selected_color: None,
            unselected_color: None,
        }
    }
}
