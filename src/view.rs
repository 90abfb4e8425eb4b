//! What a frame shows, independent of how it is styled.

use std::fmt;

use crate::session::Session;

/// Shown in place of a term when the deck has no cards.
pub const EMPTY_DECK_PLACEHOLDER: &str = "no cards loaded";

/// Key binding legend as `(keys, description)` pairs.
pub const LEGEND: [(&str, &str); 5] = [
    ("↑,k", "prev"),
    ("↓,j", "next"),
    ("s", "Toggle show/hide meaning"),
    ("r", "Random Word"),
    ("ctrl+c", "quit"),
];

/// Rendering-relevant snapshot of a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardView<'a> {
    pub term: &'a str,
    /// True when `term` is the empty-deck placeholder.
    pub is_placeholder: bool,
    /// Present only while the meaning is toggled visible.
    pub meaning: Option<&'a str>,
    pub legend: &'static [(&'static str, &'static str)],
    pub total_words: usize,
    pub cursor: usize,
}

impl<'a> CardView<'a> {
    pub fn of(session: &'a Session) -> Self {
        let card = session.current_card();

        Self {
            term: card.map_or(EMPTY_DECK_PLACEHOLDER, |c| c.term.as_str()),
            is_placeholder: card.is_none(),
            meaning: card
                .filter(|_| session.meaning_visible())
                .map(|c| c.meaning.as_str()),
            legend: &LEGEND,
            total_words: session.total_words(),
            cursor: session.cursor(),
        }
    }

    pub fn counters(&self) -> String {
        format!("Total Words: {}  index: {}", self.total_words, self.cursor)
    }
}

impl fmt::Display for CardView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Word: {}", self.term)?;
        match self.meaning {
            Some(meaning) => writeln!(f, "Meaning: {}", meaning)?,
            None => writeln!(f)?,
        }
        writeln!(f)?;

        let legend: Vec<String> = self
            .legend
            .iter()
            .map(|(key, desc)| format!("{}: {}", key, desc))
            .collect();
        writeln!(f, "{}", legend.join("  "))?;
        write!(f, "{}", self.counters())
    }
}

/// Render the session as a plain-text frame.
pub fn render(session: &Session) -> String {
    CardView::of(session).to_string()
}
