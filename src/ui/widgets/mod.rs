// ui/widgets/mod.rs - UI widgets

pub mod editor_pane;
pub mod gutter;
pub mod help;
pub mod message_line;
pub mod status_bar;
