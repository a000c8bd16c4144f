//! Ranking of agents by composite score.

use std::collections::HashMap;

use crate::stats::{AgentStats, StatsTable};

/// One leaderboard line: an agent with its stats and composite score.
#[derive(Debug, Clone, Copy)]
pub struct RankedEntry<'a> {
    /// 1-based leaderboard position.
    pub rank: usize,
    /// Agent identifier.
    pub agent: &'a str,
    /// Aggregated statistics of the agent.
    pub stats: &'a AgentStats,
    /// Composite score used for ordering.
    pub score: f64,
}

/// Order agents by composite score, descending.
///
/// The sort is stable: agents with equal scores keep the first-seen order of
/// the stats table. Ranks are 1-based and assigned after sorting, so tied
/// agents still get distinct consecutive ranks.
pub fn rank<'a>(stats: &'a StatsTable, scores: &HashMap<String, f64>) -> Vec<RankedEntry<'a>> {
    let mut entries: Vec<RankedEntry<'a>> = stats
        .iter()
        .map(|(agent, s)| RankedEntry {
            rank: 0,
            agent,
            stats: s,
            score: scores.get(agent).copied().unwrap_or(0.0),
        })
        .collect();
    entries.sort_by(|a, b| b.score.total_cmp(&a.score));
    for (i, entry) in entries.iter_mut().enumerate() {
        entry.rank = i + 1;
    }
    entries
}
