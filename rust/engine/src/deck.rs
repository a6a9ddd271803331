//! Seeded deck used to deal starting hands.

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use crate::cards::{full_deck, Card};

/// The 52 cards in a seed-determined order. Cards are drawn from the top.
#[derive(Debug, Clone)]
pub struct Deck {
    undealt: Vec<Card>,
    rng: ChaCha20Rng,
}

impl Deck {
    /// A full deck shuffled by a ChaCha20 stream seeded with `seed`.
    pub fn seeded(seed: u64) -> Self {
        let mut deck = Self {
            undealt: Vec::new(),
            rng: ChaCha20Rng::seed_from_u64(seed),
        };
        deck.reset();
        deck
    }

    /// Puts every card back and reshuffles, continuing the same random stream.
    pub fn reset(&mut self) {
        self.undealt = full_deck();
        self.undealt.shuffle(&mut self.rng);
    }

    pub fn draw(&mut self) -> Option<Card> {
        self.undealt.pop()
    }

    /// Draws up to `n` cards, fewer once the deck runs out.
    pub fn deal(&mut self, n: usize) -> Vec<Card> {
        let split = self.undealt.len().saturating_sub(n);
        let mut hand = self.undealt.split_off(split);
        hand.reverse();
        hand
    }

    pub fn remaining(&self) -> usize {
        self.undealt.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deal_matches_repeated_draws() {
        let mut a = Deck::seeded(3);
        let mut b = Deck::seeded(3);
        let dealt = a.deal(4);
        let drawn: Vec<Card> = std::iter::from_fn(|| b.draw()).take(4).collect();
        assert_eq!(dealt, drawn);
    }

    #[test]
    fn reset_continues_the_stream() {
        let mut deck = Deck::seeded(9);
        let first = deck.deal(52);
        deck.reset();
        assert_eq!(deck.remaining(), 52);
        assert_ne!(deck.deal(52), first);
    }
}
