// Copyright (C) 2025 Headsup Poker Contributors
// SPDX-License-Identifier: Apache-2.0

//! Headsup Poker cards types.
//!
//! This crate defines types to create cards:
//!
//! ```
//! # use headsup_cards::{Card, Rank, Suit};
//! let ah = Card::new(Rank::Ace, Suit::Hearts);
//! let kd = Card::new(Rank::King, Suit::Diamonds);
//! assert!(ah.rank() > kd.rank());
//! ```
//!
//! and a [Deck] type for shuffling, drawing, and removing already dealt
//! cards:
//!
//! ```
//! # use headsup_cards::{Card, Deck, Rank, Suit};
//! let mut deck = Deck::new_and_shuffled(&mut rand::rng());
//! deck.remove(Card::new(Rank::Ace, Suit::Hearts)).unwrap();
//! let hole = deck.draw(2).unwrap();
//! assert_eq!(hole.len(), 2);
//! assert_eq!(deck.count(), 49);
//! ```
//!
//! Cards use a compact integer encoding shared with the game driver: the
//! card id is in `0..52` with `rank = id % 13` (0 is deuce, 12 is ace) and
//! `suit = id / 13` (clubs, diamonds, hearts, spades).
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod cards;
pub use cards::{Card, CardsError, Deck, Rank, Suit};
