//! Per-agent statistics and the aggregation fold.
//!
//! [`accumulate_stats`] folds every game record into one [`AgentStats`] per
//! agent. Entries live in a [`StatsTable`], which iterates in first-seen
//! order: declared agents first, then any agent a game referenced without a
//! declaration. Downstream ranking relies on that order for tie-breaking.

use std::collections::HashMap;

use tracing::debug;

use crate::record::{Outcome, TournamentRecord};

/// Aggregated counters for one agent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AgentStats {
    /// Games played.
    pub games: u32,
    /// Games won.
    pub wins: u32,
    /// Games lost.
    pub losses: u32,
    /// Games drawn.
    pub draws: u32,
    /// Cumulative points scored by this agent.
    pub points_scored: u64,
    /// Cumulative points scored by this agent's opponents.
    pub points_allowed: u64,
    /// Games in which this agent exceeded its time budget.
    pub timeouts: u32,
    /// Games in which this agent's process crashed.
    pub crashes: u32,
}

impl AgentStats {
    /// Mean points scored per game (0 without games).
    pub fn average_score(&self) -> f64 {
        if self.games == 0 {
            0.0
        } else {
            self.points_scored as f64 / self.games as f64
        }
    }

    /// Mean points conceded per game (0 without games).
    pub fn average_allowed(&self) -> f64 {
        if self.games == 0 {
            0.0
        } else {
            self.points_allowed as f64 / self.games as f64
        }
    }

    /// Mean score difference per game (0 without games).
    pub fn average_margin(&self) -> f64 {
        if self.games == 0 {
            0.0
        } else {
            (self.points_scored as f64 - self.points_allowed as f64) / self.games as f64
        }
    }

    /// Fraction of games won, in `[0, 1]` (0 without games).
    pub fn win_rate(&self) -> f64 {
        if self.games == 0 {
            0.0
        } else {
            self.wins as f64 / self.games as f64
        }
    }
}

/// Agent-name → [`AgentStats`] mapping with first-seen iteration order.
///
/// A plain `HashMap` would lose the order in which agents entered the
/// tournament, so the table keeps an order `Vec` next to the map.
#[derive(Debug, Default)]
pub struct StatsTable {
    order: Vec<String>,
    stats: HashMap<String, AgentStats>,
}

impl StatsTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of agents in the table.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// True if no agent has been seen.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Stats for `agent`, if it was seen.
    pub fn get(&self, agent: &str) -> Option<&AgentStats> {
        self.stats.get(agent)
    }

    /// Mutable stats for `agent`, creating a zeroed entry the first time.
    pub fn entry(&mut self, agent: &str) -> &mut AgentStats {
        if !self.stats.contains_key(agent) {
            self.order.push(agent.to_owned());
            self.stats.insert(agent.to_owned(), AgentStats::default());
        }
        self.stats.get_mut(agent).unwrap()
    }

    /// Iterate entries in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &AgentStats)> {
        self.order
            .iter()
            .map(|name| (name.as_str(), &self.stats[name]))
    }
}

/// Fold every game of `record` into per-agent statistics.
///
/// Declared agents are seeded with zeroed entries first so they appear in
/// the output even without games. A game referencing an undeclared agent
/// creates its entry on the fly.
pub fn accumulate_stats(record: &TournamentRecord) -> StatsTable {
    let mut table = StatsTable::new();
    for agent in record.agents() {
        table.entry(agent);
    }

    for game in record.games() {
        let (b_score, w_score) = (game.black_score(), game.white_score());

        let black = table.entry(&game.black);
        black.games += 1;
        black.points_scored += b_score;
        black.points_allowed += w_score;
        if game.black_timed_out {
            black.timeouts += 1;
        }
        if game.black_crashed {
            black.crashes += 1;
        }

        let white = table.entry(&game.white);
        white.games += 1;
        white.points_scored += w_score;
        white.points_allowed += b_score;
        if game.white_timed_out {
            white.timeouts += 1;
        }
        if game.white_crashed {
            white.crashes += 1;
        }

        match game.outcome() {
            Outcome::BlackWin => {
                table.entry(&game.black).wins += 1;
                table.entry(&game.white).losses += 1;
            }
            Outcome::WhiteWin => {
                table.entry(&game.white).wins += 1;
                table.entry(&game.black).losses += 1;
            }
            Outcome::Draw => {
                table.entry(&game.black).draws += 1;
                table.entry(&game.white).draws += 1;
            }
        }
    }

    debug!(agents = table.len(), "aggregation done");
    table
}
