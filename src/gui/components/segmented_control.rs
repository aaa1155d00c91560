use crate::gui::animation::{Spring, SpringPreset};
use crate::gui::icon::{IconStyle, MISSING_GLYPH};
use crate::gui::theme::{
    self, ColorOverrides, ControlTheme, DEFAULT_HOST_WIDTH, DEFAULT_PADDING_VERTICAL, Palette,
    RADIUS_PILL, SEGMENT_PADDING_HORIZONTAL, TEXT_SIZE,
};
use iced::font::Weight;
use iced::widget::text::Wrapping;
use iced::widget::{Stack, button, container, row, text};
use iced::{Alignment, Background, Border, Color, Element, Font, Length, Padding, Shadow, Theme};
use std::time::Instant;

// iced's default relative line height.
const LINE_HEIGHT: f32 = 1.3;
const PRESSED_OPACITY: f32 = 0.7;
const SCREEN_MARGIN: f32 = 32.0;

/// Control width when the host does not pick one: the window minus a margin.
pub fn default_width(window_width: f32) -> f32 {
    (window_width - SCREEN_MARGIN).max(0.0)
}

fn sanitize_width(width: f32) -> f32 {
    if width.is_finite() {
        width.max(0.0)
    } else {
        0.0
    }
}

/// Where the indicator should rest for a given selection and layout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub index: usize,
    pub count: usize,
    pub width: f32,
    pub rtl: bool,
}

impl Placement {
    /// `None` for an empty tab set. A non-finite width counts as zero.
    pub fn segment_width(&self) -> Option<f32> {
        if self.count == 0 {
            return None;
        }
        Some(sanitize_width(self.width) / self.count as f32)
    }

    /// Selected index clamped into the tab set.
    pub fn clamped_index(&self) -> Option<usize> {
        if self.count == 0 {
            None
        } else {
            Some(self.index.min(self.count - 1))
        }
    }

    pub fn resting_offset(&self) -> f32 {
        let (Some(segment), Some(index)) = (self.segment_width(), self.clamped_index()) else {
            return 0.0;
        };
        let direction = if self.rtl { -1.0 } else { 1.0 };
        index as f32 * segment * direction
    }

    fn same_layout(&self, other: &Self) -> bool {
        self.count == other.count && self.width == other.width && self.rtl == other.rtl
    }
}

/// Animated offset of the pill. This is the only state the control owns;
/// the selection itself belongs to the host.
#[derive(Debug, Clone, Default)]
pub struct Indicator {
    spring: Spring,
    last: Option<Placement>,
}

impl Indicator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reacts to the host's latest props. A changed index springs toward the
    /// new segment, a changed layout snaps. Returns true when a flight started.
    pub fn sync(&mut self, placement: Placement, preset: SpringPreset, now: Instant) -> bool {
        let target = placement.resting_offset();

        if placement.index >= placement.count && placement.count > 0 {
            tracing::debug!(
                index = placement.index,
                count = placement.count,
                "selected index out of range, clamping"
            );
        }

        match self.last {
            None => self.spring.snap_to(target),
            Some(last) if last.clamped_index() != placement.clamped_index() => {
                tracing::debug!(
                    from = ?last.clamped_index(),
                    to = ?placement.clamped_index(),
                    target,
                    "retargeting indicator"
                );
                self.spring.retarget(target, preset, now);
            }
            Some(last) if !last.same_layout(&placement) => self.spring.snap_to(target),
            Some(_) => {}
        }

        self.last = Some(placement);
        self.spring.is_animating()
    }

    pub fn tick(&mut self, now: Instant) -> f32 {
        self.spring.tick(now)
    }

    #[inline]
    pub fn is_animating(&self) -> bool {
        self.spring.is_animating()
    }

    pub fn offset(&self) -> f32 {
        self.spring.value()
    }

    pub fn target(&self) -> f32 {
        self.spring.target()
    }
}

/// Font settings for text segments.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    pub size: f32,
    pub font: Font,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            size: TEXT_SIZE,
            font: Font {
                weight: Weight::Semibold,
                ..Font::DEFAULT
            },
        }
    }
}

type StyleFn<'a> = Box<dyn Fn(container::Style) -> container::Style + 'a>;

/// A row of equally sized segments with a sliding pill behind the active one.
pub struct SegmentedControl<'a, Message> {
    tabs: &'a [String],
    current_index: usize,
    offset: f32,
    on_change: Option<Box<dyn Fn(usize) -> Message + 'a>>,
    width: f32,
    theme: ControlTheme,
    colors: ColorOverrides,
    active_text_weight: Weight,
    padding_vertical: f32,
    rtl: bool,
    icons: Option<IconStyle>,
    shadow: Shadow,
    container_style: Option<StyleFn<'a>>,
    tab_style: Option<StyleFn<'a>>,
    text_style: TextStyle,
}

pub fn segmented_control<'a, Message>(
    tabs: &'a [String],
    current_index: usize,
    indicator: &Indicator,
) -> SegmentedControl<'a, Message> {
    SegmentedControl::new(tabs, current_index, indicator)
}

impl<'a, Message> SegmentedControl<'a, Message> {
    pub fn new(tabs: &'a [String], current_index: usize, indicator: &Indicator) -> Self {
        Self {
            tabs,
            current_index,
            offset: indicator.offset(),
            on_change: None,
            width: default_width(DEFAULT_HOST_WIDTH),
            theme: ControlTheme::default(),
            colors: ColorOverrides::default(),
            active_text_weight: Weight::Semibold,
            padding_vertical: DEFAULT_PADDING_VERTICAL,
            rtl: false,
            icons: None,
            shadow: theme::default_shadow(),
            container_style: None,
            tab_style: None,
            text_style: TextStyle::default(),
        }
    }

    pub fn on_change(mut self, on_change: impl Fn(usize) -> Message + 'a) -> Self {
        self.on_change = Some(Box::new(on_change));
        self
    }

    pub fn width(mut self, width: f32) -> Self {
        self.width = sanitize_width(width);
        self
    }

    pub fn theme(mut self, theme: ControlTheme) -> Self {
        self.theme = theme;
        self
    }

    pub fn colors(mut self, colors: ColorOverrides) -> Self {
        self.colors = colors;
        self
    }

    pub fn active_text_weight(mut self, weight: &str) -> Self {
        match theme::parse_weight(weight) {
            Some(parsed) => self.active_text_weight = parsed,
            None => tracing::warn!(weight, "unknown font weight, keeping default"),
        }
        self
    }

    pub fn padding_vertical(mut self, padding: f32) -> Self {
        self.padding_vertical = padding.max(0.0);
        self
    }

    pub fn rtl(mut self, rtl: bool) -> Self {
        self.rtl = rtl;
        self
    }

    pub fn icons(mut self, icons: IconStyle) -> Self {
        self.icons = Some(icons);
        self
    }

    pub fn shadow(mut self, shadow: Shadow) -> Self {
        self.shadow = shadow;
        self
    }

    pub fn container_style(
        mut self,
        style: impl Fn(container::Style) -> container::Style + 'a,
    ) -> Self {
        self.container_style = Some(Box::new(style));
        self
    }

    /// Adjusts the pill behind the active segment.
    pub fn tab_style(mut self, style: impl Fn(container::Style) -> container::Style + 'a) -> Self {
        self.tab_style = Some(Box::new(style));
        self
    }

    pub fn text_style(mut self, style: TextStyle) -> Self {
        self.text_style = style;
        self
    }

    pub fn placement(&self) -> Placement {
        Placement {
            index: self.current_index,
            count: self.tabs.len(),
            width: self.width,
            rtl: self.rtl,
        }
    }

    /// Message a tap on segment `index` publishes; `None` leaves taps inert.
    pub fn message_for(&self, index: usize) -> Option<Message> {
        self.on_change.as_ref().map(|on_change| on_change(index))
    }

    fn height(&self) -> f32 {
        let content = match self.icons {
            Some(icons) => icons.size,
            None => self.text_style.size,
        };
        content * LINE_HEIGHT + 2.0 * self.padding_vertical
    }

    /// Left edge of the pill, mirrored for right-to-left rows.
    fn pill_left(&self, segment: f32) -> f32 {
        let travel = (self.width - segment).max(0.0);
        let origin = if self.rtl { travel } else { 0.0 };
        (origin + self.offset).clamp(0.0, travel)
    }
}

/// Resolved font, size and color of one segment's content.
#[derive(Debug, Clone, Copy, PartialEq)]
struct SegmentLook {
    font: Font,
    size: f32,
    color: Color,
}

fn pill_style(
    palette: Palette,
    shadow: Shadow,
    tab_style: Option<&StyleFn<'_>>,
) -> container::Style {
    let base = container::Style {
        background: Some(Background::Color(palette.indicator_background)),
        border: Border {
            radius: RADIUS_PILL.into(),
            width: 0.0,
            color: Color::TRANSPARENT,
        },
        shadow,
        ..Default::default()
    };
    match tab_style {
        Some(style) => style(base),
        None => base,
    }
}

fn frame_style(palette: Palette, container_style: Option<&StyleFn<'_>>) -> container::Style {
    let base = container::Style {
        background: Some(Background::Color(palette.container_background)),
        border: Border {
            radius: RADIUS_PILL.into(),
            width: 0.0,
            color: Color::TRANSPARENT,
        },
        ..Default::default()
    };
    match container_style {
        Some(style) => style(base),
        None => base,
    }
}

impl<'a, Message> SegmentedControl<'a, Message> {
    fn segment_look(&self, index: usize, palette: Palette) -> SegmentLook {
        let active = Some(index) == self.placement().clamped_index();

        match self.icons {
            Some(icons) => SegmentLook {
                font: icons.icon_type.font(),
                size: icons.size,
                color: if active {
                    icons.selected_color.unwrap_or(palette.active_text)
                } else {
                    icons.unselected_color.unwrap_or(palette.text)
                },
            },
            None if active => SegmentLook {
                font: Font {
                    weight: self.active_text_weight,
                    ..self.text_style.font
                },
                size: self.text_style.size,
                color: palette.active_text,
            },
            None => SegmentLook {
                font: self.text_style.font,
                size: self.text_style.size,
                color: palette.text,
            },
        }
    }
}

impl<'a, Message: Clone + 'a> SegmentedControl<'a, Message> {
    fn segment(&self, index: usize, tab: &'a str, palette: Palette) -> Element<'a, Message> {
        let look = self.segment_look(index, palette);

        let content: Element<'a, Message> = if self.icons.is_some() {
            let glyph = self
                .icons
                .and_then(|icons| icons.icon_type.glyph(tab))
                .unwrap_or(MISSING_GLYPH);
            text(glyph.to_string())
                .size(look.size)
                .font(look.font)
                .into()
        } else {
            text(tab)
                .size(look.size)
                .font(look.font)
                .wrapping(Wrapping::None)
                .into()
        };

        // Long labels are cut at the segment edge instead of spilling over.
        let cell = container(content)
            .center_x(Length::Fill)
            .center_y(Length::Fill)
            .clip(true);

        let color = look.color;
        button(cell)
            .on_press_maybe(self.message_for(index))
            .width(Length::Fill)
            .height(Length::Fill)
            .padding([0.0, SEGMENT_PADDING_HORIZONTAL])
            .style(move |_theme: &Theme, status: button::Status| {
                let text_color = match status {
                    button::Status::Pressed => Color {
                        a: color.a * PRESSED_OPACITY,
                        ..color
                    },
                    _ => color,
                };
                button::Style {
                    background: None,
                    text_color,
                    ..button::Style::default()
                }
            })
            .into()
    }

    fn build(mut self) -> Element<'a, Message> {
        let tab_style = self.tab_style.take();
        let container_style = self.container_style.take();
        let palette = theme::resolve(self.theme, &self.colors);
        let placement = self.placement();
        let width = self.width;
        let height = self.height();

        let mut layers: Vec<Element<'a, Message>> = Vec::with_capacity(2);

        if let Some(segment) = placement.segment_width() {
            let shadow = self.shadow;
            let pill = container(text(""))
                .width(Length::Fixed(segment))
                .height(Length::Fixed(height))
                .style(move |_theme: &Theme| pill_style(palette, shadow, tab_style.as_ref()));

            let track = container(pill)
                .padding(Padding::new(0.0).left(self.pill_left(segment)))
                .width(Length::Fixed(width))
                .height(Length::Fixed(height));
            layers.push(track.into());
        }

        let mut order: Vec<usize> = (0..self.tabs.len()).collect();
        if self.rtl {
            order.reverse();
        }
        let tabs = self.tabs;
        let segments: Vec<Element<'a, Message>> = order
            .into_iter()
            .map(|index| self.segment(index, tabs[index].as_str(), palette))
            .collect();

        layers.push(
            row(segments)
                .width(Length::Fixed(width))
                .height(Length::Fixed(height))
                .align_y(Alignment::Center)
                .into(),
        );

        container(
            Stack::with_children(layers)
                .width(Length::Fixed(width))
                .height(Length::Fixed(height)),
        )
        .width(Length::Fixed(width))
        .style(move |_theme: &Theme| frame_style(palette, container_style.as_ref()))
        .into()
    }
}

impl<'a, Message: Clone + 'a> From<SegmentedControl<'a, Message>> for Element<'a, Message> {
    fn from(control: SegmentedControl<'a, Message>) -> Self {
        control.build()
    }
}
