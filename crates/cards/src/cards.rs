// Copyright (C) 2025 Headsup Poker Contributors
// SPDX-License-Identifier: Apache-2.0

//! Poker cards definitions.
use rand::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Cards and deck errors.
///
/// All variants signal a caller contract violation, they are never retried.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum CardsError {
    /// A card id outside the `0..52` range.
    #[error("invalid card id {0}, must be in 0..52")]
    InvalidId(u8),
    /// A card that is not in the deck, a duplicate or an already dealt card.
    #[error("card {0} is not in the deck")]
    NotInDeck(Card),
    /// A draw that requests more cards than remain in the deck.
    #[error("cannot draw {requested} cards, {remaining} remaining")]
    Insufficient {
        /// Number of cards requested.
        requested: usize,
        /// Number of cards left in the deck.
        remaining: usize,
    },
}

/// A Poker card.
///
/// A card is represented by an integer id in `0..52` with the following
/// encoding shared with the game driver:
///
/// ```text
/// rank = id % 13    0 is deuce, ..., 12 is ace
/// suit = id / 13    0 clubs, 1 diamonds, 2 hearts, 3 spades
/// ```
#[derive(Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Card(u8);

impl Card {
    /// Creates a card given a rank and a suit.
    pub fn new(rank: Rank, suit: Suit) -> Card {
        Self(suit as u8 * Rank::COUNT + rank as u8)
    }

    /// Creates a card from its integer id.
    pub fn from_id(id: u8) -> Result<Card, CardsError> {
        if usize::from(id) < Deck::SIZE {
            Ok(Self(id))
        } else {
            Err(CardsError::InvalidId(id))
        }
    }

    /// This card unique id.
    pub fn id(&self) -> u8 {
        self.0
    }

    /// Returns the card rank.
    pub fn rank(&self) -> Rank {
        match self.0 % Rank::COUNT {
            0 => Rank::Deuce,
            1 => Rank::Trey,
            2 => Rank::Four,
            3 => Rank::Five,
            4 => Rank::Six,
            5 => Rank::Seven,
            6 => Rank::Eight,
            7 => Rank::Nine,
            8 => Rank::Ten,
            9 => Rank::Jack,
            10 => Rank::Queen,
            11 => Rank::King,
            12 => Rank::Ace,
            _ => unreachable!(),
        }
    }

    /// Returns the card suit.
    pub fn suit(&self) -> Suit {
        match self.0 / Rank::COUNT {
            0 => Suit::Clubs,
            1 => Suit::Diamonds,
            2 => Suit::Hearts,
            3 => Suit::Spades,
            _ => unreachable!(),
        }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank(), self.suit())
    }
}

impl fmt::Debug for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Card({}{})", self.rank(), self.suit())
    }
}

/// Card rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rank {
    /// Deuce
    Deuce = 0,
    /// Trey
    Trey,
    /// Four
    Four,
    /// Five
    Five,
    /// Six
    Six,
    /// Seven
    Seven,
    /// Eight
    Eight,
    /// Nine
    Nine,
    /// Ten
    Ten,
    /// Jack
    Jack,
    /// Queen
    Queen,
    /// King
    King,
    /// Ace
    Ace,
}

impl Rank {
    /// Number of ranks in a suit.
    pub const COUNT: u8 = 13;

    /// Returns all ranks.
    pub fn ranks() -> impl DoubleEndedIterator<Item = Rank> {
        use Rank::*;
        [
            Deuce, Trey, Four, Five, Six, Seven, Eight, Nine, Ten, Jack, Queen, King, Ace,
        ]
        .into_iter()
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rank = match self {
            Rank::Deuce => "2",
            Rank::Trey => "3",
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
            Rank::Ace => "A",
        };

        write!(f, "{rank}")
    }
}

/// Card suit.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Suit {
    /// Clubs suit.
    Clubs = 0,
    /// Diamonds suit.
    Diamonds,
    /// Hearts suit.
    Hearts,
    /// Spades suit.
    Spades,
}

impl Suit {
    /// Returns all suits.
    pub fn suits() -> impl DoubleEndedIterator<Item = Suit> {
        [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades].into_iter()
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let suit = match self {
            Suit::Clubs => '♣',
            Suit::Diamonds => '♦',
            Suit::Hearts => '♥',
            Suit::Spades => '♠',
        };

        write!(f, "{suit}")
    }
}

/// A cards deck.
#[derive(Debug)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// The number of cards in the deck.
    pub const SIZE: usize = 52;

    /// Creates a new uniformly shuffled deck.
    pub fn new_and_shuffled<R: Rng>(rng: &mut R) -> Self {
        let mut deck = Self::default();
        deck.cards.shuffle(rng);
        deck
    }

    /// Draws the first `n` cards from the deck.
    ///
    /// The relative order of the remaining cards is preserved.
    pub fn draw(&mut self, n: usize) -> Result<Vec<Card>, CardsError> {
        if n > self.cards.len() {
            return Err(CardsError::Insufficient {
                requested: n,
                remaining: self.cards.len(),
            });
        }

        Ok(self.cards.drain(..n).collect())
    }

    /// Removes a card from the deck, used to discard already dealt cards.
    pub fn remove(&mut self, card: Card) -> Result<(), CardsError> {
        let pos = self
            .cards
            .iter()
            .position(|c| c == &card)
            .ok_or(CardsError::NotInDeck(card))?;
        self.cards.remove(pos);
        Ok(())
    }

    /// Checks if the deck is empty.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Number of cards in the deck.
    pub fn count(&self) -> usize {
        self.cards.len()
    }
}

impl Default for Deck {
    fn default() -> Self {
        let cards = Suit::suits()
            .flat_map(|s| Rank::ranks().map(move |r| Card::new(r, s)))
            .collect::<Vec<_>>();
        Self { cards }
    }
}

impl IntoIterator for Deck {
    type Item = Card;
    type IntoIter = std::vec::IntoIter<Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ahash::HashSet;

    #[test]
    fn card_encoding() {
        let mut cards = HashSet::default();
        let mut deck = Deck::new_and_shuffled(&mut rand::rng());

        while !deck.is_empty() {
            let card = deck.draw(1).unwrap()[0];
            assert_eq!(card.id() % 13, card.rank() as u8);
            assert_eq!(card.id() / 13, card.suit() as u8);
            assert_eq!(Card::new(card.rank(), card.suit()), card);
            assert_eq!(Card::from_id(card.id()).unwrap(), card);
            cards.insert(card.id());
        }

        // Check uniqueness.
        assert_eq!(cards.len(), Deck::SIZE);

        // Driver encoding contract.
        assert_eq!(Card::new(Rank::Deuce, Suit::Clubs).id(), 0);
        assert_eq!(Card::new(Rank::Ace, Suit::Clubs).id(), 12);
        assert_eq!(Card::new(Rank::Deuce, Suit::Diamonds).id(), 13);
        assert_eq!(Card::new(Rank::Ace, Suit::Spades).id(), 51);
    }

    #[test]
    fn card_from_invalid_id() {
        assert_eq!(Card::from_id(52), Err(CardsError::InvalidId(52)));
        assert_eq!(Card::from_id(255), Err(CardsError::InvalidId(255)));
    }

    #[test]
    fn card_to_string() {
        let c = Card::new(Rank::King, Suit::Diamonds);
        assert_eq!(c.to_string(), "K♦");

        let c = Card::new(Rank::Five, Suit::Spades);
        assert_eq!(c.to_string(), "5♠");

        let c = Card::new(Rank::Ten, Suit::Hearts);
        assert_eq!(c.to_string(), "10♥");

        let c = Card::new(Rank::Ace, Suit::Clubs);
        assert_eq!(c.to_string(), "A♣");
    }

    #[test]
    fn deck_draw() {
        let mut deck = Deck::new_and_shuffled(&mut rand::rng());
        assert_eq!(deck.count(), Deck::SIZE);

        let hole = deck.draw(2).unwrap();
        assert_eq!(hole.len(), 2);
        assert_eq!(deck.count(), Deck::SIZE - 2);

        let board = deck.draw(5).unwrap();
        assert_eq!(board.len(), 5);
        assert_eq!(deck.count(), Deck::SIZE - 7);

        // No overlap between draws.
        assert!(hole.iter().all(|c| !board.contains(c)));
    }

    #[test]
    fn deck_draw_preserves_order() {
        let mut deck = Deck::default();
        let rest = Deck::default().into_iter().skip(3).collect::<Vec<_>>();

        deck.draw(3).unwrap();
        assert_eq!(deck.into_iter().collect::<Vec<_>>(), rest);
    }

    #[test]
    fn deck_draw_insufficient() {
        let mut deck = Deck::default();
        deck.draw(50).unwrap();

        assert_eq!(
            deck.draw(3),
            Err(CardsError::Insufficient {
                requested: 3,
                remaining: 2
            })
        );

        // A failed draw leaves the deck untouched.
        assert_eq!(deck.count(), 2);
    }

    #[test]
    fn deck_remove() {
        let mut deck = Deck::default();
        let card = Card::new(Rank::Ace, Suit::Hearts);

        deck.remove(card).unwrap();
        assert_eq!(deck.count(), Deck::SIZE - 1);

        // Removing the same card twice fails.
        assert_eq!(deck.remove(card), Err(CardsError::NotInDeck(card)));
        assert_eq!(deck.count(), Deck::SIZE - 1);

        let removed = deck.into_iter().all(|c| c != card);
        assert!(removed);
    }
}
