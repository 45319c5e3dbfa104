// Copyright (C) 2025 Headsup Poker Contributors
// SPDX-License-Identifier: Apache-2.0

//! Showdown rollout simulator.
use rand::Rng;
use std::cmp::Ordering;

use headsup_cards::{Card, Deck};
use headsup_eval::HandValue;

use crate::BotError;

/// Number of community cards on a complete board.
const BOARD_SIZE: usize = 5;

/// Simulates one showdown against a uniform random opponent.
///
/// Completes the deal from a fresh shuffled deck that excludes the known
/// cards: two hole cards for the unknown opponent and the missing board
/// cards. Both seven cards hands are scored with
/// [HandValue::eval_seven] and the outcome is 1.0 for a win, 0.5 for a
/// tie and 0.0 for a loss.
///
/// Each call is one independent uniform sample of the showdown outcome
/// conditioned on the known cards, no state survives across calls.
pub fn simulate_once<R: Rng>(
    rng: &mut R,
    hole: &[Card; 2],
    board: &[Card],
) -> Result<f64, BotError> {
    if board.len() > BOARD_SIZE {
        return Err(BotError::BoardTooLarge(board.len()));
    }

    let mut deck = Deck::new_and_shuffled(rng);

    // A duplicate anywhere in hole and board fails the second removal.
    for card in hole.iter().chain(board) {
        deck.remove(*card)?;
    }

    let opp_hole = deck.draw(2)?;
    let drawn = deck.draw(BOARD_SIZE - board.len())?;

    let mut mine = hole.to_vec();
    mine.extend_from_slice(board);
    mine.extend_from_slice(&drawn);

    let mut theirs = opp_hole;
    theirs.extend_from_slice(board);
    theirs.extend_from_slice(&drawn);

    let my_value = HandValue::eval_seven(&mine)?;
    let opp_value = HandValue::eval_seven(&theirs)?;

    Ok(match my_value.cmp(&opp_value) {
        Ordering::Greater => 1.0,
        Ordering::Less => 0.0,
        Ordering::Equal => 0.5,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use headsup_cards::{CardsError, Rank, Suit};

    #[test]
    fn outcome_domain() {
        let mut rng = rand::rng();

        for _ in 0..200 {
            let mut deck = Deck::new_and_shuffled(&mut rng);
            let hole = deck.draw(2).unwrap();
            let hole = [hole[0], hole[1]];
            let board = deck.draw(3).unwrap();

            let outcome = simulate_once(&mut rng, &hole, &board).unwrap();
            assert!([0.0, 0.5, 1.0].contains(&outcome), "outcome {outcome}");
        }
    }

    #[test]
    fn guaranteed_win() {
        // Quad kings on hole plus board, the opponent cannot hold a king
        // and no straight flush is possible.
        let hole = [
            Card::new(Rank::King, Suit::Spades),
            Card::new(Rank::Deuce, Suit::Clubs),
        ];
        let board = [
            Card::new(Rank::King, Suit::Clubs),
            Card::new(Rank::King, Suit::Diamonds),
            Card::new(Rank::King, Suit::Hearts),
            Card::new(Rank::Deuce, Suit::Spades),
            Card::new(Rank::Seven, Suit::Spades),
        ];

        let mut rng = rand::rng();
        for _ in 0..50 {
            assert_eq!(simulate_once(&mut rng, &hole, &board).unwrap(), 1.0);
        }
    }

    #[test]
    fn guaranteed_tie() {
        // Both players play the royal flush on the board.
        let hole = [
            Card::new(Rank::Deuce, Suit::Hearts),
            Card::new(Rank::Seven, Suit::Diamonds),
        ];
        let board = [
            Card::new(Rank::Ten, Suit::Clubs),
            Card::new(Rank::Jack, Suit::Clubs),
            Card::new(Rank::Queen, Suit::Clubs),
            Card::new(Rank::King, Suit::Clubs),
            Card::new(Rank::Ace, Suit::Clubs),
        ];

        let mut rng = rand::rng();
        for _ in 0..50 {
            assert_eq!(simulate_once(&mut rng, &hole, &board).unwrap(), 0.5);
        }
    }

    #[test]
    fn duplicate_known_card() {
        let dup = Card::new(Rank::Ace, Suit::Spades);
        let hole = [dup, Card::new(Rank::Deuce, Suit::Clubs)];
        let board = [dup];

        let mut rng = rand::rng();
        assert_eq!(
            simulate_once(&mut rng, &hole, &board),
            Err(BotError::Cards(CardsError::NotInDeck(dup)))
        );
    }

    #[test]
    fn board_too_large() {
        let mut rng = rand::rng();
        let mut deck = Deck::new_and_shuffled(&mut rng);
        let hole = deck.draw(2).unwrap();
        let hole = [hole[0], hole[1]];
        let board = deck.draw(6).unwrap();

        assert_eq!(
            simulate_once(&mut rng, &hole, &board),
            Err(BotError::BoardTooLarge(6))
        );
    }
}
