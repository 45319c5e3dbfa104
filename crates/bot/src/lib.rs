// Copyright (C) 2025 Headsup Poker Contributors
// SPDX-License-Identifier: Apache-2.0

//! Headsup Poker Monte Carlo bot.
//!
//! The bot decides between staying in a heads-up hand and folding with a
//! two armed UCB1 bandit fed by Monte Carlo rollouts: each rollout
//! completes the unknown opponent hole cards and board from a shuffled
//! deck and scores the showdown, and the bandit allocates rollouts
//! between the two actions until a wall clock deadline.
//!
//! ```no_run
//! # use headsup_bot::{BotConfig, PokerBot};
//! # use headsup_cards::Deck;
//! let mut deck = Deck::new_and_shuffled(&mut rand::rng());
//! let hole = deck.draw(2).unwrap();
//! let board = deck.draw(3).unwrap();
//!
//! let bot = PokerBot::default();
//! let action = bot.action(&[hole[0], hole[1]], &board).unwrap();
//! println!("{action}");
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use std::time::Duration;
use thiserror::Error;

use headsup_cards::{Card, CardsError};
use headsup_eval::EvalError;

mod bandit;
mod clock;
mod rollout;

pub use bandit::{Action, decide};
pub use clock::{Clock, SystemClock};
pub use rollout::simulate_once;

/// Bot errors.
///
/// Every variant is a caller contract violation, there are no
/// recoverable runtime failures in this crate.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum BotError {
    /// A cards or deck contract violation.
    #[error(transparent)]
    Cards(#[from] CardsError),
    /// A hand evaluation contract violation.
    #[error(transparent)]
    Eval(#[from] EvalError),
    /// A board with more than five cards.
    #[error("board has {0} cards, at most 5 allowed")]
    BoardTooLarge(usize),
}

/// Bot decision configuration.
#[derive(Debug, Clone, Copy)]
pub struct BotConfig {
    /// Wall clock budget for one decision.
    pub time_limit: Duration,
    /// Minimum win probability estimate to stay in the hand.
    pub threshold: f64,
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            time_limit: Duration::from_secs(10),
            threshold: 0.5,
        }
    }
}

/// A heads-up Poker bot deciding stay or fold within a time budget.
#[derive(Debug, Default)]
pub struct PokerBot {
    config: BotConfig,
}

impl PokerBot {
    /// Creates a bot with the given configuration.
    pub fn new(config: BotConfig) -> Self {
        Self { config }
    }

    /// Decides an action given the bot hole cards and the board revealed
    /// so far (0, 3 or 4 cards during play, 5 at the river).
    pub fn action(&self, hole: &[Card; 2], board: &[Card]) -> Result<Action, BotError> {
        let clock = SystemClock::default();
        decide(
            &mut rand::rng(),
            &clock,
            hole,
            board,
            self.config.time_limit,
            self.config.threshold,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use headsup_cards::{Deck, Rank, Suit};

    #[test]
    fn default_config() {
        let config = BotConfig::default();
        assert_eq!(config.time_limit, Duration::from_secs(10));
        assert_eq!(config.threshold, 0.5);
    }

    #[test]
    fn action_with_small_budget() {
        let bot = PokerBot::new(BotConfig {
            time_limit: Duration::from_millis(10),
            threshold: 0.5,
        });

        let mut deck = Deck::new_and_shuffled(&mut rand::rng());
        let hole = deck.draw(2).unwrap();
        let board = deck.draw(3).unwrap();

        let action = bot.action(&[hole[0], hole[1]], &board).unwrap();
        assert!(matches!(action, Action::Stay | Action::Fold));
    }

    #[test]
    fn action_propagates_errors() {
        let bot = PokerBot::new(BotConfig {
            time_limit: Duration::from_millis(1),
            threshold: 0.5,
        });

        let dup = Card::new(Rank::Ace, Suit::Spades);
        let res = bot.action(&[dup, dup], &[]);
        assert!(matches!(res, Err(BotError::Cards(_))));
    }
}
