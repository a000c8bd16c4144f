//! Composite score computation.

use std::collections::HashMap;

use crate::stats::StatsTable;
use crate::weights::Weights;

/// Compute the composite score of every agent in `stats`.
///
/// Per agent:
///
/// ```text
/// score = wins * W_win + draws * W_draw + losses * W_loss
///       + average_margin * W_margin
///       - (timeouts * W_timeout + crashes * W_crash)
/// ```
///
/// Scores are only comparable within one run using one `Weights` instance;
/// no normalization across agents happens here.
pub fn compute_scores(stats: &StatsTable, weights: &Weights) -> HashMap<String, f64> {
    let mut scores = HashMap::with_capacity(stats.len());
    for (agent, s) in stats.iter() {
        let base = s.wins as f64 * weights.win_points
            + s.draws as f64 * weights.draw_points
            + s.losses as f64 * weights.loss_points;
        let margin_bonus = s.average_margin() * weights.margin_weight;
        let penalties =
            s.timeouts as f64 * weights.timeout_penalty + s.crashes as f64 * weights.crash_penalty;
        scores.insert(agent.to_owned(), base + margin_bonus - penalties);
    }
    scores
}
