// Copyright (C) 2025 Headsup Poker Contributors
// SPDX-License-Identifier: Apache-2.0

//! Poker hand evaluator.
use std::fmt;
use thiserror::Error;

use headsup_cards::Card;

/// Hand evaluation errors.
///
/// Like [CardsError](headsup_cards::CardsError) these signal a caller
/// contract violation and are never retried.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum EvalError {
    /// A hand with the wrong number of cards.
    #[error("invalid hand size {actual}, expected {expected} cards")]
    InvalidHandSize {
        /// Number of cards the evaluator expects.
        expected: usize,
        /// Number of cards in the hand.
        actual: usize,
    },
    /// A card that appears more than once in the hand.
    #[error("duplicate card {0} in hand")]
    DuplicateCard(Card),
}

/// The rank of a Poker hand, ordered from weakest to strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum HandRank {
    /// High card.
    HighCard = 0,
    /// One pair.
    OnePair,
    /// Two pair.
    TwoPair,
    /// Three of a kind.
    ThreeOfAKind,
    /// Straight.
    Straight,
    /// Flush.
    Flush,
    /// Full house.
    FullHouse,
    /// Four of a kind.
    FourOfAKind,
    /// Straight flush, a royal flush is the top straight flush.
    StraightFlush,
}

impl fmt::Display for HandRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rank = match self {
            HandRank::HighCard => "High Card",
            HandRank::OnePair => "One Pair",
            HandRank::TwoPair => "Two Pair",
            HandRank::ThreeOfAKind => "Three of a Kind",
            HandRank::Straight => "Straight",
            HandRank::Flush => "Flush",
            HandRank::FullHouse => "Full House",
            HandRank::FourOfAKind => "Four of a Kind",
            HandRank::StraightFlush => "Straight Flush",
        };

        write!(f, "{rank}")
    }
}

/// A totally ordered Poker hand value.
///
/// Compares by hand rank first and then by the category tie-break ranks,
/// so comparing two values agrees with showdown rules:
///
/// ```
/// # use headsup_eval::*;
/// let pair_aces = HandValue::eval(&[
///     Card::new(Rank::Ace, Suit::Clubs),
///     Card::new(Rank::Ace, Suit::Spades),
///     Card::new(Rank::Nine, Suit::Hearts),
///     Card::new(Rank::Five, Suit::Diamonds),
///     Card::new(Rank::Trey, Suit::Clubs),
/// ]).unwrap();
/// let pair_kings = HandValue::eval(&[
///     Card::new(Rank::King, Suit::Clubs),
///     Card::new(Rank::King, Suit::Spades),
///     Card::new(Rank::Nine, Suit::Hearts),
///     Card::new(Rank::Five, Suit::Diamonds),
///     Card::new(Rank::Trey, Suit::Clubs),
/// ]).unwrap();
/// assert!(pair_aces > pair_kings);
/// ```
// Field order matters, the derived lexicographic ordering compares the
// hand rank before the tie-breaks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct HandValue {
    rank: HandRank,
    tiebreaks: [u8; 5],
}

impl HandValue {
    /// Evaluates a 5 cards hand.
    pub fn eval(cards: &[Card]) -> Result<HandValue, EvalError> {
        if cards.len() != 5 {
            return Err(EvalError::InvalidHandSize {
                expected: 5,
                actual: cards.len(),
            });
        }

        check_distinct(cards)?;
        Ok(Self::eval_five(cards))
    }

    /// Evaluates a 7 cards hand to the value of its best 5 cards hand.
    ///
    /// Enumerates all 21 five cards subsets and returns the maximum value.
    pub fn eval_seven(cards: &[Card]) -> Result<HandValue, EvalError> {
        if cards.len() != 7 {
            return Err(EvalError::InvalidHandSize {
                expected: 7,
                actual: cards.len(),
            });
        }

        check_distinct(cards)?;

        let mut hand = [cards[0]; 5];
        let mut best: Option<HandValue> = None;

        // A five cards subset for each excluded pair of cards.
        for skip1 in 0..cards.len() {
            for skip2 in (skip1 + 1)..cards.len() {
                let mut n = 0;
                for (pos, card) in cards.iter().enumerate() {
                    if pos != skip1 && pos != skip2 {
                        hand[n] = *card;
                        n += 1;
                    }
                }

                let value = Self::eval_five(&hand);
                if best.is_none_or(|b| value > b) {
                    best = Some(value);
                }
            }
        }

        Ok(best.expect("seven cards always contain a five cards hand"))
    }

    /// Returns the hand rank.
    pub fn rank(&self) -> HandRank {
        self.rank
    }

    /// Evaluates exactly 5 distinct cards.
    fn eval_five(cards: &[Card]) -> HandValue {
        let mut counts = [0u8; 13];
        for card in cards {
            counts[card.rank() as usize] += 1;
        }

        // Rank groups ordered by multiplicity first and rank second, both
        // descending, so the payload for paired categories lists the
        // higher count groups first and kickers in descending rank order.
        let mut groups = counts
            .iter()
            .enumerate()
            .filter(|&(_, &count)| count > 0)
            .map(|(rank, &count)| (count, rank as u8))
            .collect::<Vec<_>>();
        groups.sort_unstable_by(|a, b| b.cmp(a));

        let by_count = groups.iter().map(|&(_, rank)| rank).collect::<Vec<_>>();

        let is_flush = cards.iter().all(|c| c.suit() == cards[0].suit());

        let mut unique = cards.iter().map(|c| c.rank() as u8).collect::<Vec<_>>();
        unique.sort_unstable();
        unique.dedup();

        // The wheel A-2-3-4-5 is the lowest straight, its top card is the
        // five and not the ace.
        let is_wheel = unique == [0, 1, 2, 3, 12];
        let is_straight = unique.len() == 5 && (unique[4] - unique[0] == 4 || is_wheel);
        let top_of_straight = if is_wheel { 3 } else { *unique.last().unwrap() };

        if is_straight && is_flush {
            Self::new(HandRank::StraightFlush, &[top_of_straight])
        } else if groups[0].0 == 4 {
            Self::new(HandRank::FourOfAKind, &by_count)
        } else if groups[0].0 == 3 && groups[1].0 == 2 {
            Self::new(HandRank::FullHouse, &by_count)
        } else if is_flush {
            Self::new(HandRank::Flush, &by_count)
        } else if is_straight {
            Self::new(HandRank::Straight, &[top_of_straight])
        } else if groups[0].0 == 3 {
            Self::new(HandRank::ThreeOfAKind, &by_count)
        } else if groups[0].0 == 2 && groups[1].0 == 2 {
            Self::new(HandRank::TwoPair, &by_count)
        } else if groups[0].0 == 2 {
            Self::new(HandRank::OnePair, &by_count)
        } else {
            Self::new(HandRank::HighCard, &by_count)
        }
    }

    /// Creates a value from a rank and its tie-break payload.
    ///
    /// Values of equal rank always carry payloads of equal length so the
    /// zero padding never decides a comparison.
    fn new(rank: HandRank, payload: &[u8]) -> HandValue {
        let mut tiebreaks = [0u8; 5];
        tiebreaks[..payload.len()].copy_from_slice(payload);
        Self { rank, tiebreaks }
    }
}

fn check_distinct(cards: &[Card]) -> Result<(), EvalError> {
    for (pos, card) in cards.iter().enumerate() {
        if cards[..pos].contains(card) {
            return Err(EvalError::DuplicateCard(*card));
        }
    }

    Ok(())
}
