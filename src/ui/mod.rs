//! TUI module for the flashcard viewer.

mod app;
pub mod theme;
mod widgets;

pub use app::App;
pub use theme::{Theme, ThemeName};
