//! Vocabulary flashcard viewer core: word list loading, session state and
//! the frame view model, plus the ratatui front end.

pub mod loader;
pub mod models;
pub mod session;
pub mod ui;
pub mod view;

pub use loader::{load_deck, parse_cards, LoadError};
pub use models::{Card, Deck};
pub use session::{Flow, Intent, Session};
pub use view::{render, CardView};
