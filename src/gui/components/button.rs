use crate::gui::theme::{ControlTheme, RADIUS_NORMAL};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Small on/off chip used by the demo to flip control options.
pub fn toggle<'a, Message: 'a>(
    label: &'a str,
    enabled: bool,
    theme: ControlTheme,
) -> button::Button<'a, Message> {
    let palette = theme.palette();
    let text_color = palette.text;
    let background = if enabled {
        palette.indicator_background
    } else {
        palette.container_background
    };

    button(label)
        .padding([4, 10])
        .style(move |_theme: &Theme, status: button::Status| {
            let base = button::Style {
                background: Some(Background::Color(background)),
                text_color,
                border: Border {
                    radius: RADIUS_NORMAL.into(),
                    width: 1.0,
                    color: Color {
                        a: 0.15,
                        ..palette.text
                    },
                },
                ..button::Style::default()
            };

            match status {
                button::Status::Hovered => button::Style {
                    border: Border {
                        color: Color {
                            a: 0.4,
                            ..palette.text
                        },
                        ..base.border
                    },
                    ..base
                },
                button::Status::Pressed => button::Style {
                    background: Some(Background::Color(Color {
                        a: 0.7,
                        ..background
                    })),
                    ..base
                },
                _ => base,
            }
        })
}
