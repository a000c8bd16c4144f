//! # Tournament Analyzer
//!
//! Leaderboard and chart analysis for the result JSON produced by an AI
//! tournament runner.
//!
//! The whole crate is one linear pipeline:
//!
//! 1. [`loader::load_document`] — parse the tournament JSON
//! 2. [`stats::accumulate_stats`] — fold games into per-agent counters
//! 3. [`scorer::compute_scores`] — weighted composite score per agent
//! 4. [`ranker::rank`] — stable descending order, 1-based ranks
//! 5. [`report`] / [`charts`] — console table, `leaderboard.tsv`, three PNGs
//!
//! # Usage Example
//!
//! ```no_run
//! use tournament_analyzer::prelude::*;
//!
//! fn main() -> anyhow::Result<()> {
//!     let record = load_document("tournament_results.json")?;
//!     let stats = accumulate_stats(&record);
//!
//!     let weights = Weights::new().with_crash_penalty(3.0);
//!     let scores = compute_scores(&stats, &weights);
//!     let ranked = rank(&stats, &scores);
//!
//!     print_leaderboard(&ranked);
//!     save_leaderboard_tsv(&ranked, "analysis_out")?;
//!     render_score_bar(&ranked, "analysis_out")?;
//!     render_results_stacked(&stats, "analysis_out")?;
//!     render_winrate_vs_margin(&stats, &scores, "analysis_out")?;
//!     Ok(())
//! }
//! ```
//!
//! Scoring weights come from [`Weights`](crate::weights::Weights): built-in
//! defaults, optionally overridden by `ANALYZE_*` environment variables (see
//! the [`weights`] module docs) and then by CLI flags.
#![warn(missing_docs)]

pub use anyhow;
pub mod charts;
pub mod loader;
mod logger;
pub mod ranker;
pub mod record;
pub mod report;
pub mod scorer;
pub mod stats;
pub mod weights;

pub use logger::init_logger;

/// Commonly used types and functions for quick access.
///
/// Import this prelude to get started easily:
/// ```rust
/// use tournament_analyzer::prelude::*;
/// ```
pub mod prelude {
    pub use crate::charts::{render_results_stacked, render_score_bar, render_winrate_vs_margin};
    pub use crate::loader::load_document;
    pub use crate::ranker::{rank, RankedEntry};
    pub use crate::record::{GameRecord, Outcome, TournamentRecord};
    pub use crate::report::{print_leaderboard, save_leaderboard_tsv};
    pub use crate::scorer::compute_scores;
    pub use crate::stats::{accumulate_stats, AgentStats, StatsTable};
    pub use crate::weights::Weights;
}
