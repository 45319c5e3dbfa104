// Copyright (C) 2025 Headsup Poker Contributors
// SPDX-License-Identifier: Apache-2.0

//! Headsup Poker hand evaluator.
//!
//! Poker hand evaluator for 5 cards hands with full tie-break semantics,
//! extended to 7 cards hands by exhaustive enumeration of the 21 five-card
//! subsets.
//!
//! To use the evaluator create a hand and use [HandValue] to evaluate the
//! hand and get its rank:
//!
//! ```
//! # use headsup_eval::*;
//! // 2♣, 3♣, .., J♣
//! let cards = (0..10u8).map(|id| Card::from_id(id).unwrap()).collect::<Vec<_>>();
//! let v1 = HandValue::eval(&cards[0..5]).unwrap();
//! let v2 = HandValue::eval(&cards[5..]).unwrap();
//! assert!(v2 > v1);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod eval;
pub use eval::{EvalError, HandRank, HandValue};

// Reexport cards types.
pub use headsup_cards::{Card, CardsError, Deck, Rank, Suit};
