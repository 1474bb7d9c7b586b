// lib.rs - Library root for the iclass editor

pub mod buffer;
pub mod cli;
pub mod command;
pub mod config;
pub mod cursor;
pub mod editor;
pub mod indent;
pub mod key;
pub mod mode;
pub mod persistence;
pub mod syntax;
pub mod ui;
pub mod view;
pub mod viewport;
