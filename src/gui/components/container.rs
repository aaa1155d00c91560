use crate::gui::theme::ControlTheme;
use iced::widget::container;
use iced::{Background, Color, Theme, color};

/// Full-window backdrop matching the control theme.
pub fn page<'a, Message: 'a>(
    content: impl Into<iced::Element<'a, Message>>,
    theme: ControlTheme,
) -> container::Container<'a, Message> {
    let (background, text_color) = match theme {
        ControlTheme::Light => (color!(0xf2, 0xf2, 0xf7), Color::BLACK),
        ControlTheme::Dark => (color!(0x1a, 0x20, 0x2c), Color::WHITE),
    };

    container(content).style(move |_theme: &Theme| container::Style {
        background: Some(Background::Color(background)),
        text_color: Some(text_color),
        ..Default::default()
    })
}
