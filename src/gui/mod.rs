pub mod animation;
pub mod app;
pub mod components;
pub mod icon;
pub mod theme;

pub use app::App;
