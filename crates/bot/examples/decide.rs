// Copyright (C) 2025 Headsup Poker Contributors
// SPDX-License-Identifier: Apache-2.0
//
// Deals a random hand and runs a single stay or fold decision:
//
// ```bash
// $ cargo r --release --example decide -- --time-limit 2.0
// ```
use anyhow::Result;
use clap::Parser;
use std::time::Duration;

use headsup_bot::{BotConfig, PokerBot};
use headsup_cards::{Card, Deck};

#[derive(Parser)]
#[command(about = "Deal a random hand and decide stay or fold")]
struct Args {
    /// Decision wall clock budget in seconds.
    #[arg(long, default_value_t = 10.0)]
    time_limit: f64,

    /// Minimum win probability estimate to stay in the hand.
    #[arg(long, default_value_t = 0.5)]
    threshold: f64,

    /// Number of board cards to reveal.
    #[arg(long, default_value_t = 3, value_parser = clap::value_parser!(u8).range(0..=5))]
    board: u8,
}

fn main() -> Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Debug)
        .format_target(false)
        .format_timestamp_millis()
        .init();

    let args = Args::parse();

    let mut deck = Deck::new_and_shuffled(&mut rand::rng());
    let hole = deck.draw(2)?;
    let hole = [hole[0], hole[1]];
    let board = deck.draw(args.board as usize)?;

    let show = |cards: &[Card]| {
        cards
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" ")
    };
    println!("Hole : {}", show(&hole));
    println!("Board: {}", show(&board));

    let bot = PokerBot::new(BotConfig {
        time_limit: Duration::from_secs_f64(args.time_limit),
        threshold: args.threshold,
    });

    let action = bot.action(&hole, &board)?;
    println!("-> {action}");

    Ok(())
}
