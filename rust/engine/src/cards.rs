use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Represents one of the four suits in a standard 52-card deck.
/// Each suit carries a fixed offset that separates its cards in the tree key space.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Suit {
    /// Clubs suit (♣), offset 0
    Clubs,
    /// Diamonds suit (♦), offset 20
    Diamonds,
    /// Hearts suit (♥), offset 40
    Hearts,
    /// Spades suit (♠), offset 60
    Spades,
}

impl Suit {
    pub fn offset(self) -> u8 {
        match self {
            Suit::Clubs => 0,
            Suit::Diamonds => 20,
            Suit::Hearts => 40,
            Suit::Spades => 60,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Suit::Clubs => '♣',
            Suit::Diamonds => '♦',
            Suit::Hearts => '♥',
            Suit::Spades => '♠',
        }
    }

    pub fn from_symbol(c: char) -> Option<Suit> {
        match c {
            '♣' => Some(Suit::Clubs),
            '♦' => Some(Suit::Diamonds),
            '♥' => Some(Suit::Hearts),
            '♠' => Some(Suit::Spades),
            _ => None,
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Represents the rank (face value) of a playing card from Ace through King.
/// Ace counts as 1 so that pairs of cards can be matched against a sum of 13.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Rank {
    /// Ace (1)
    Ace = 1,
    /// Rank 2
    Two,
    /// Rank 3
    Three,
    /// Rank 4
    Four,
    /// Rank 5
    Five,
    /// Rank 6
    Six,
    /// Rank 7
    Seven,
    /// Rank 8
    Eight,
    /// Rank 9
    Nine,
    /// Rank 10
    Ten,
    /// Jack (11)
    Jack,
    /// Queen (12)
    Queen,
    /// King (13)
    King,
}

impl Rank {
    pub fn value(self) -> u8 {
        self as u8
    }

    /// Short token used in card text, e.g. `"A"`, `"10"`, `"K"`.
    pub fn name(self) -> &'static str {
        match self {
            Rank::Ace => "A",
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
        }
    }

    pub fn from_name(token: &str) -> Option<Rank> {
        all_ranks().into_iter().find(|r| r.name() == token)
    }
}

/// A playing card keyed for the AVL tree.
///
/// The `total` key is `rank value + suit offset`, so every card of the deck maps to a
/// distinct integer in `1..=73`. It is computed once in [`Card::new`] and never changes.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Card {
    rank: Rank,
    suit: Suit,
    total: u8,
}

impl Card {
    pub fn new(rank: Rank, suit: Suit) -> Self {
        Self {
            rank,
            suit,
            total: rank.value() + suit.offset(),
        }
    }

    pub fn rank_value(&self) -> u8 {
        self.rank.value()
    }

    pub fn suit(&self) -> Suit {
        self.suit
    }

    /// Ordering key used by the tree.
    pub fn total(&self) -> u8 {
        self.total
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank.name(), self.suit.symbol())
    }
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CardParseError {
    #[error("card text is empty")]
    Empty,
    #[error("unknown suit symbol in `{0}`")]
    UnknownSuit(String),
    #[error("unknown rank in `{0}`")]
    UnknownRank(String),
}

impl FromStr for Card {
    type Err = CardParseError;

    /// Parses `<rank><suit symbol>`, e.g. `"A♣"` or `"10♦"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim();
        let Some(last) = text.chars().last() else {
            return Err(CardParseError::Empty);
        };
        let suit =
            Suit::from_symbol(last).ok_or_else(|| CardParseError::UnknownSuit(text.to_string()))?;
        let token = &text[..text.len() - last.len_utf8()];
        let rank =
            Rank::from_name(token).ok_or_else(|| CardParseError::UnknownRank(text.to_string()))?;
        Ok(Card::new(rank, suit))
    }
}

pub fn all_suits() -> [Suit; 4] {
    [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades]
}

pub fn all_ranks() -> [Rank; 13] {
    [
        Rank::Ace,
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
    ]
}

pub fn full_deck() -> Vec<Card> {
    let mut v = Vec::with_capacity(52);
    for &s in &all_suits() {
        for &r in &all_ranks() {
            v.push(Card::new(r, s));
        }
    }
    v
}
