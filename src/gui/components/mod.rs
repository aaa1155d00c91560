pub mod button;
pub mod container;
pub mod segmented_control;

// Re-export components for easier access
pub use button::toggle as button_toggle;
pub use container::page;
pub use segmented_control::{
    Indicator, Placement, SegmentedControl, TextStyle, default_width, segmented_control,
};
