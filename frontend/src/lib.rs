//! Project tracking frontend library: app shell, screens, widgets, theme.

pub mod app;
pub mod screens;
pub mod theme;
pub mod widgets;
