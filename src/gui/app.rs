use crate::config::{AppConfig, ControlConfig};
use crate::gui::components::{
    Indicator, Placement, button_toggle, default_width, page, segmented_control,
};
use crate::gui::theme::{ControlTheme, SPACING_LARGE, SPACING_NORMAL, SPACING_SMALL};
use iced::keyboard::{self, Key, key::Named};
use iced::widget::{center, column, row, text};
use iced::{Alignment, Element, Event, Length, Size, Subscription, Task, event, time, window};
use std::time::{Duration, Instant};

const FRAME_INTERVAL: Duration = Duration::from_millis(16);

#[derive(Debug, Clone)]
pub enum Message {
    SegmentSelected(usize),
    Tick(Instant),
    ToggleTheme,
    ToggleRtl,
    ToggleInstant,
    KeyPressed(Key),
    WindowResized(Size),
}

/// Demo host. It owns the selection; the control only animates it.
pub struct App {
    control: ControlConfig,
    current_index: usize,
    indicator: Indicator,
    window_size: Size,
}

impl App {
    pub fn new(config: AppConfig) -> Self {
        let mut app = Self {
            control: config.control,
            current_index: 0,
            indicator: Indicator::new(),
            window_size: Size::new(config.ui.window_width, config.ui.window_height),
        };
        app.sync_indicator(Instant::now());
        app
    }

    fn control_width(&self) -> f32 {
        self.control
            .width
            .unwrap_or_else(|| default_width(self.window_size.width))
    }

    fn placement(&self) -> Placement {
        Placement {
            index: self.current_index,
            count: self.control.tabs.len(),
            width: self.control_width(),
            rtl: self.control.is_rtl,
        }
    }

    fn sync_indicator(&mut self, now: Instant) {
        let placement = self.placement();
        self.indicator.sync(placement, self.control.preset(), now);
    }

    fn select(&mut self, index: usize) {
        if index >= self.control.tabs.len() || index == self.current_index {
            return;
        }
        tracing::debug!(index, tab = %self.control.tabs[index], "segment selected");
        self.current_index = index;
        self.sync_indicator(Instant::now());
    }

    /// Moves the selection one segment in on-screen direction.
    fn step(&mut self, rightward: bool) {
        let forward = rightward != self.control.is_rtl;
        let index = if forward {
            self.current_index.saturating_add(1)
        } else {
            self.current_index.saturating_sub(1)
        };
        self.select(index);
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::SegmentSelected(index) => self.select(index),
            Message::Tick(now) => {
                self.indicator.tick(now);
            }
            Message::ToggleTheme => {
                self.control.theme = self.control.theme.toggled();
            }
            Message::ToggleRtl => {
                self.control.is_rtl = !self.control.is_rtl;
                self.sync_indicator(Instant::now());
            }
            Message::ToggleInstant => {
                self.control.disable_flag = !self.control.disable_flag;
            }
            Message::KeyPressed(key) => match key {
                Key::Named(Named::ArrowLeft) => self.step(false),
                Key::Named(Named::ArrowRight) => self.step(true),
                Key::Character(c) => match c.as_str() {
                    "t" => return self.update(Message::ToggleTheme),
                    "r" => return self.update(Message::ToggleRtl),
                    "i" => return self.update(Message::ToggleInstant),
                    _ => {}
                },
                _ => {}
            },
            Message::WindowResized(size) => {
                self.window_size = size;
                self.sync_indicator(Instant::now());
            }
        }

        Task::none()
    }

    pub fn view(&self) -> Element<'_, Message> {
        let control = &self.control;

        let mut segmented = segmented_control(&control.tabs, self.current_index, &self.indicator)
            .on_change(Message::SegmentSelected)
            .width(self.control_width())
            .theme(control.theme)
            .colors(control.colors)
            .active_text_weight(&control.active_text_weight)
            .padding_vertical(control.padding_vertical)
            .rtl(control.is_rtl);
        if let Some(icons) = control.icon_style() {
            segmented = segmented.icons(icons);
        }

        let selected = control
            .tabs
            .get(self.current_index)
            .map(|tab| format!("Selected: {tab}"))
            .unwrap_or_else(|| "No tabs configured".to_string());

        let toggles = row![
            button_toggle("Dark", control.theme == ControlTheme::Dark, control.theme)
                .on_press(Message::ToggleTheme),
            button_toggle("RTL", control.is_rtl, control.theme).on_press(Message::ToggleRtl),
            button_toggle("Instant", control.disable_flag, control.theme)
                .on_press(Message::ToggleInstant),
        ]
        .spacing(u32::from(SPACING_SMALL))
        .align_y(Alignment::Center);

        let content = column![segmented, text(selected).size(14), toggles]
            .spacing(u32::from(SPACING_NORMAL))
            .align_x(Alignment::Center);

        page(center(content).padding(SPACING_LARGE), control.theme)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    pub fn subscription(&self) -> Subscription<Message> {
        let frames = if self.indicator.is_animating() {
            time::every(FRAME_INTERVAL).map(Message::Tick)
        } else {
            Subscription::none()
        };

        Subscription::batch([
            frames,
            event::listen_with(|event, _status, _id| match event {
                Event::Window(window::Event::Resized(size)) => Some(Message::WindowResized(size)),
                Event::Keyboard(keyboard::Event::KeyPressed { key, .. }) => {
                    Some(Message::KeyPressed(key))
                }
                _ => None,
            }),
        ])
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(AppConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app_with_width(width: f32) -> App {
        let mut config = AppConfig::default();
        config.control.tabs = vec!["A".into(), "B".into(), "C".into()];
        config.control.width = Some(width);
        App::new(config)
    }

    fn settle(app: &mut App) {
        let _ = app.update(Message::Tick(Instant::now() + Duration::from_secs(10)));
        assert!(!app.indicator.is_animating());
    }

    #[test]
    fn selecting_a_segment_animates_to_it() {
        let mut app = app_with_width(300.0);
        assert_eq!(app.indicator.offset(), 0.0);

        let _ = app.update(Message::SegmentSelected(1));
        assert_eq!(app.current_index, 1);
        assert!(app.indicator.is_animating());

        settle(&mut app);
        assert_eq!(app.indicator.offset(), 100.0);
    }

    #[test]
    fn out_of_range_selection_is_ignored() {
        let mut app = app_with_width(300.0);
        let _ = app.update(Message::SegmentSelected(3));
        assert_eq!(app.current_index, 0);
        assert!(!app.indicator.is_animating());
    }

    #[test]
    fn arrow_keys_follow_direction() {
        let mut app = app_with_width(300.0);
        let _ = app.update(Message::KeyPressed(Key::Named(Named::ArrowRight)));
        assert_eq!(app.current_index, 1);

        let _ = app.update(Message::ToggleRtl);
        let _ = app.update(Message::KeyPressed(Key::Named(Named::ArrowRight)));
        assert_eq!(app.current_index, 0);

        settle(&mut app);
        assert_eq!(app.indicator.offset(), 0.0);
    }

    #[test]
    fn toggling_rtl_snaps_to_mirrored_offset() {
        let mut app = app_with_width(300.0);
        let _ = app.update(Message::SegmentSelected(2));
        settle(&mut app);

        let _ = app.update(Message::ToggleRtl);
        assert!(!app.indicator.is_animating());
        assert_eq!(app.indicator.offset(), -200.0);
    }

    #[test]
    fn resize_tracks_window_when_width_unset() {
        let mut config = AppConfig::default();
        config.control.tabs = vec!["A".into(), "B".into()];
        let mut app = App::new(config);
        let _ = app.update(Message::SegmentSelected(1));
        settle(&mut app);

        let _ = app.update(Message::WindowResized(Size::new(432.0, 300.0)));
        assert_eq!(app.indicator.offset(), 200.0);
    }

    #[test]
    fn character_keys_toggle_options() {
        let mut app = app_with_width(300.0);
        let _ = app.update(Message::KeyPressed(Key::Character("t".into())));
        assert_eq!(app.control.theme, ControlTheme::Dark);

        let _ = app.update(Message::KeyPressed(Key::Character("i".into())));
        assert!(app.control.disable_flag);
    }

    #[test]
    fn empty_tab_set_renders() {
        let mut config = AppConfig::default();
        config.control.tabs.clear();
        let mut app = App::new(config);

        let _ = app.update(Message::KeyPressed(Key::Named(Named::ArrowRight)));
        assert_eq!(app.current_index, 0);
        let _element = app.view();
    }
}
