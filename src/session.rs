//! Study session state: the deck, the cursor and meaning visibility.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use rand::rngs::StdRng;
use rand::Rng;

use crate::models::{Card, Deck};

/// A discrete user action delivered by the input driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Next,
    Previous,
    ToggleMeaning,
    RandomJump,
    Quit,
}

impl Intent {
    /// Map a key press to an intent. Releases and repeats map to nothing.
    pub fn from_key(key: KeyEvent) -> Option<Self> {
        if key.kind != KeyEventKind::Press {
            return None;
        }

        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Some(Self::Quit),
            KeyCode::Down | KeyCode::Char('j') => Some(Self::Next),
            KeyCode::Up | KeyCode::Char('k') => Some(Self::Previous),
            KeyCode::Char('s') => Some(Self::ToggleMeaning),
            KeyCode::Char('r') => Some(Self::RandomJump),
            KeyCode::Char('q') | KeyCode::Esc => Some(Self::Quit),
            _ => None,
        }
    }
}

/// What the driver should do after an intent has been applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// One pass through a deck.
///
/// `cursor` is always a valid index into the deck, or 0 when the deck is
/// empty. Navigation clamps at both ends instead of wrapping.
pub struct Session {
    deck: Deck,
    cursor: usize,
    meaning_visible: bool,
    rng: StdRng,
}

impl Session {
    pub fn new(deck: Deck, rng: StdRng) -> Self {
        Self {
            deck,
            cursor: 0,
            meaning_visible: false,
            rng,
        }
    }

    /// Apply one intent to completion.
    pub fn apply(&mut self, intent: Intent) -> Flow {
        match intent {
            Intent::Next => self.next(),
            Intent::Previous => self.previous(),
            Intent::ToggleMeaning => self.toggle_meaning(),
            Intent::RandomJump => self.random_jump(),
            Intent::Quit => return Flow::Quit,
        }
        Flow::Continue
    }

    pub fn next(&mut self) {
        if let Some(last) = self.deck.len().checked_sub(1) {
            self.cursor = (self.cursor + 1).min(last);
        }
    }

    pub fn previous(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn toggle_meaning(&mut self) {
        self.meaning_visible = !self.meaning_visible;
    }

    /// Jump to a uniformly chosen card. The current card may be chosen again.
    pub fn random_jump(&mut self) {
        if !self.deck.is_empty() {
            self.cursor = self.rng.gen_range(0..self.deck.len());
        }
    }

    pub fn current_card(&self) -> Option<&Card> {
        self.deck.get(self.cursor)
    }

    /// The current term, or `""` when the deck is empty.
    pub fn current_term(&self) -> &str {
        self.current_card().map_or("", |c| c.term.as_str())
    }

    /// The current meaning, or `""` when the deck is empty.
    pub fn current_meaning(&self) -> &str {
        self.current_card().map_or("", |c| c.meaning.as_str())
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn total_words(&self) -> usize {
        self.deck.len()
    }

    pub fn meaning_visible(&self) -> bool {
        self.meaning_visible
    }

    pub fn is_empty(&self) -> bool {
        self.deck.is_empty()
    }
}
