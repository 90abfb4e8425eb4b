//! Data models for cards and decks.

use rand::seq::SliceRandom;
use rand::Rng;

/// A single term/meaning pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub term: String,
    pub meaning: String,
}

impl Card {
    pub fn new(term: impl Into<String>, meaning: impl Into<String>) -> Self {
        Self {
            term: term.into(),
            meaning: meaning.into(),
        }
    }
}

/// The ordered cards for one session. Fixed once built.
#[derive(Debug, Clone, Default)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Build a deck in the given order.
    pub fn new(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Build a deck from `cards` in a uniformly random order.
    pub fn shuffled<R: Rng + ?Sized>(mut cards: Vec<Card>, rng: &mut R) -> Self {
        cards.shuffle(rng);
        Self { cards }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Card> {
        self.cards.get(index)
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn letters(n: usize) -> Vec<Card> {
        (0..n)
            .map(|i| Card::new(format!("t{}", i), format!("m{}", i)))
            .collect()
    }

    #[test]
    fn test_shuffled_is_a_permutation() {
        let cards = letters(20);
        let mut rng = StdRng::seed_from_u64(42);
        let deck = Deck::shuffled(cards.clone(), &mut rng);

        assert_eq!(deck.len(), cards.len());
        let mut sorted: Vec<Card> = deck.cards().to_vec();
        sorted.sort_by(|a, b| a.term.cmp(&b.term));
        let mut expected = cards;
        expected.sort_by(|a, b| a.term.cmp(&b.term));
        assert_eq!(sorted, expected);
    }

    #[test]
    fn test_shuffled_order_depends_on_seed() {
        let a = Deck::shuffled(letters(20), &mut StdRng::seed_from_u64(1));
        let b = Deck::shuffled(letters(20), &mut StdRng::seed_from_u64(2));
        assert_ne!(a.cards(), b.cards());
    }

    #[test]
    fn test_empty_deck() {
        let deck = Deck::default();
        assert!(deck.is_empty());
        assert_eq!(deck.len(), 0);
        assert!(deck.get(0).is_none());
    }
}
