// ui/mod.rs - UI module definitions

pub mod renderer;
pub mod theme;
pub mod widgets;

pub use theme::Theme;
