//! Loading word lists into decks.
//!
//! A word list is plain text with one `TERM-MEANING` entry per line. Lines
//! that do not split into exactly two non-empty fields are skipped without
//! error; there is no escaping, so a field containing the delimiter makes its
//! line malformed.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use rand::Rng;
use thiserror::Error;

use crate::models::{Card, Deck};

/// Separates the term from its meaning on each line.
pub const DELIMITER: char = '-';

/// Default word list location, relative to the working directory.
pub const DEFAULT_WORDS_PATH: &str = "data/vocab-list.txt";

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("failed to read word list {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Parse one line, returning `None` for anything that is not `TERM-MEANING`.
fn parse_line(line: &str) -> Option<Card> {
    let mut parts = line.split(DELIMITER);
    let term = parts.next()?.trim();
    let meaning = parts.next()?.trim();

    if parts.next().is_some() || term.is_empty() || meaning.is_empty() {
        return None;
    }

    Some(Card::new(term, meaning))
}

/// Parse every well-formed line of `content`, in file order.
pub fn parse_cards(content: &str) -> Vec<Card> {
    content.lines().filter_map(parse_line).collect()
}

impl Deck {
    /// Parse `content` and shuffle the accepted cards.
    pub fn from_content<R: Rng + ?Sized>(content: &str, rng: &mut R) -> Self {
        Deck::shuffled(parse_cards(content), rng)
    }
}

/// Read the word list at `path` into a shuffled deck.
pub fn load_deck<R: Rng + ?Sized>(path: &Path, rng: &mut R) -> Result<Deck, LoadError> {
    let content = fs::read_to_string(path).map_err(|source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let deck = Deck::from_content(&content, rng);
    log::info!("Loaded {} cards from {}", deck.len(), path.display());
    Ok(deck)
}
