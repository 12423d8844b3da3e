pub mod error;
pub mod color;
pub mod shape;
pub mod controls;
pub mod style;
pub mod css;
pub mod copy_feedback;
pub mod clipboard;
pub mod presentation;
pub mod studio;
pub mod config;
pub mod export;
pub mod cli;
mod app_state;
mod app_style;
pub mod app;
pub mod ui_theme;
pub mod ui_components;
pub mod ui_preview;
pub mod ui_panels;
