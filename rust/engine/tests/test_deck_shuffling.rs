use std::collections::HashSet;

use cardtree_engine::cards::Card;
use cardtree_engine::deck::Deck;

#[test]
fn seeded_deck_holds_each_card_once() {
    let mut deck = Deck::seeded(42);
    let cards: HashSet<Card> = std::iter::from_fn(|| deck.draw()).collect();
    assert_eq!(cards.len(), 52);
    assert_eq!(deck.remaining(), 0);
    assert!(deck.draw().is_none());
}

#[test]
fn same_seed_deals_same_hand() {
    let hands: Vec<Vec<Card>> = (0..2).map(|_| Deck::seeded(12345).deal(10)).collect();
    assert_eq!(hands[0], hands[1]);
}

#[test]
fn seeds_change_the_order() {
    let distinct: HashSet<Vec<Card>> = (0..8).map(|seed| Deck::seeded(seed).deal(10)).collect();
    assert!(distinct.len() > 1);
}

#[test]
fn dealing_past_the_bottom_returns_what_is_left() {
    let mut deck = Deck::seeded(7);
    assert_eq!(deck.deal(50).len(), 50);
    assert_eq!(deck.remaining(), 2);
    assert_eq!(deck.deal(5).len(), 2);
    assert!(deck.deal(1).is_empty());
}
