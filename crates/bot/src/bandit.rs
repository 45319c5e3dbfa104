// Copyright (C) 2025 Headsup Poker Contributors
// SPDX-License-Identifier: Apache-2.0

//! Two armed UCB1 bandit over stay and fold.
use log::debug;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::{fmt, time::Duration};

use headsup_cards::Card;

use crate::{BotError, clock::Clock, rollout};

/// UCB1 exploration constant.
const EXPLORATION: f64 = std::f64::consts::SQRT_2;

/// The two actions available to the bot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Continue the hand.
    Stay,
    /// Abandon the hand.
    Fold,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let action = match self {
            Action::Stay => "stay",
            Action::Fold => "fold",
        };

        write!(f, "{action}")
    }
}

/// Per action bandit statistics, owned by a single decision.
#[derive(Debug)]
struct Arm {
    action: Action,
    reward: f64,
    visits: u64,
}

impl Arm {
    fn new(action: Action, reward: f64) -> Self {
        Self {
            action,
            reward,
            visits: 1,
        }
    }

    /// UCB1 score, an unvisited arm scores infinity.
    fn ucb(&self, total_visits: u64) -> f64 {
        if self.visits == 0 {
            return f64::INFINITY;
        }

        let mean = self.reward / self.visits as f64;
        mean + EXPLORATION * ((total_visits as f64).ln() / self.visits as f64).sqrt()
    }
}

/// Decides between stay and fold within a wall clock budget.
///
/// The fold arm pays a fixed zero reward, the stay arm pays one fresh
/// rollout per visit. Both arms start with one visit, the stay arm
/// seeded with a real rollout, and the loop keeps selecting the arm
/// with the highest UCB1 score until the deadline passes. A zero
/// `time_limit` runs no iterations and decides on the seed alone.
///
/// After the deadline the stay arm mean reward estimates the win
/// probability, the decision is [Action::Stay] iff the estimate reaches
/// `threshold`.
///
/// Rollout errors are caller contract violations and propagate
/// unchanged, aborting the decision.
pub fn decide<R, C>(
    rng: &mut R,
    clock: &C,
    hole: &[Card; 2],
    board: &[Card],
    time_limit: Duration,
    threshold: f64,
) -> Result<Action, BotError>
where
    R: Rng,
    C: Clock,
{
    let mut stay = Arm::new(Action::Stay, rollout::simulate_once(rng, hole, board)?);
    let mut fold = Arm::new(Action::Fold, 0.0);
    let mut total_visits = 2u64;

    let deadline = clock.now() + time_limit;
    while clock.now() < deadline {
        // Ties go to the first arm checked, stay.
        let arm = if stay.ucb(total_visits) >= fold.ucb(total_visits) {
            &mut stay
        } else {
            &mut fold
        };

        let reward = match arm.action {
            Action::Stay => rollout::simulate_once(rng, hole, board)?,
            Action::Fold => 0.0,
        };

        arm.visits += 1;
        arm.reward += reward;
        total_visits += 1;
    }

    let equity = stay.reward / stay.visits as f64;
    debug!(
        "equity {equity:.3} after {} stay and {} fold visits, threshold {threshold}",
        stay.visits, fold.visits
    );

    Ok(if equity >= threshold {
        Action::Stay
    } else {
        Action::Fold
    })
}
