//! An iced segmented control: equally sized tabs with a spring-animated pill
//! sliding behind the selected one.
//!
//! The control is controlled by its host. The host owns the selected index,
//! keeps an [`Indicator`] next to it, calls [`Indicator::sync`] from `update`
//! whenever the index or layout may have changed, and forwards frame ticks
//! while [`Indicator::is_animating`] is true.

pub mod config;
pub mod gui;

pub use gui::animation::SpringPreset;
pub use gui::components::{Indicator, Placement, SegmentedControl, segmented_control};
pub use gui::icon::{IconStyle, IconType};
pub use gui::theme::{ColorOverrides, ControlTheme};
