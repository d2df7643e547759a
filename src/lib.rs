//! HKP Hub - a terminal student knowledge hub
//!
//! Short, simplified lessons on HTML, CSS, Python, C, C++, Java, operating
//! system installation and Linux commands, browsed from a static catalog.

pub mod app;
pub mod catalog;
pub mod clipboard;
pub mod config;
pub mod syntax;
pub mod theme;
pub mod ui;

pub use app::App;
pub use catalog::Catalog;
pub use config::Config;
pub use theme::Theme;
