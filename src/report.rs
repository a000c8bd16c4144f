//! Console leaderboard and TSV export.

use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use tracing::info;

use crate::ranker::RankedEntry;

/// Print the leaderboard table to stdout, highest score first.
pub fn print_leaderboard(ranked: &[RankedEntry<'_>]) {
    println!("\nAdvanced Leaderboard (higher is better)");
    println!(
        "{:>4}  {:<20} {:>8}  {:>3} {:>3} {:>3}  {:>6}  {:>10}  {:>3} {:>3}",
        "Rank", "Agent", "Score", "W", "L", "D", "WR%", "AvgMargin", "TO", "CR"
    );
    for entry in ranked {
        let s = entry.stats;
        println!(
            "{:>4}  {:<20} {:>8.3}  {:>3} {:>3} {:>3}  {:>6.1}  {:>10.3}  {:>3} {:>3}",
            entry.rank,
            entry.agent,
            entry.score,
            s.wins,
            s.losses,
            s.draws,
            100.0 * s.win_rate(),
            s.average_margin(),
            s.timeouts,
            s.crashes
        );
    }
}

/// Render the leaderboard as TSV text, header line included.
///
/// Score and average margin carry 6 decimals, the win-rate percentage 3, so
/// identical input always produces byte-identical output.
pub fn leaderboard_tsv(ranked: &[RankedEntry<'_>]) -> String {
    let mut out = String::from(
        "rank\tagent\tscore\twins\tlosses\tdraws\twin_rate\tavg_margin\ttimeouts\tcrashes\n",
    );
    for entry in ranked {
        let s = entry.stats;
        // writing to a String cannot fail
        let _ = writeln!(
            out,
            "{}\t{}\t{:.6}\t{}\t{}\t{}\t{:.3}\t{:.6}\t{}\t{}",
            entry.rank,
            entry.agent,
            entry.score,
            s.wins,
            s.losses,
            s.draws,
            100.0 * s.win_rate(),
            s.average_margin(),
            s.timeouts,
            s.crashes
        );
    }
    out
}

/// Write `leaderboard.tsv` under `outdir` (created if absent).
///
/// # Errors
/// Fails if the output directory cannot be created or the file cannot be
/// written. Both abort the run.
pub fn save_leaderboard_tsv(
    ranked: &[RankedEntry<'_>],
    outdir: impl AsRef<Path>,
) -> anyhow::Result<PathBuf> {
    let outdir = outdir.as_ref();
    fs::create_dir_all(outdir)
        .with_context(|| format!("cannot create output directory '{}'", outdir.display()))?;
    let path = outdir.join("leaderboard.tsv");
    fs::write(&path, leaderboard_tsv(ranked))
        .with_context(|| format!("cannot write '{}'", path.display()))?;
    info!(path = %path.display(), "saved leaderboard");
    Ok(path)
}

#[cfg(test)]
mod report_tests {
    use super::*;
    use crate::ranker::rank;
    use crate::scorer::compute_scores;
    use crate::stats::{accumulate_stats, StatsTable};
    use crate::weights::Weights;

    fn fixture() -> StatsTable {
        let record = serde_json::from_value(serde_json::json!({
            "agents": ["alpha", "beta"],
            "games": [
                {"black": "alpha", "white": "beta", "blackScore": 40, "whiteScore": 24, "winner": "BLACK"},
                {"black": "beta", "white": "alpha", "blackScore": 30, "whiteScore": 34}
            ]
        }))
        .unwrap();
        accumulate_stats(&record)
    }

    #[test]
    fn tsv_has_header_and_one_line_per_agent() {
        let stats = fixture();
        let scores = compute_scores(&stats, &Weights::new());
        let ranked = rank(&stats, &scores);
        let tsv = leaderboard_tsv(&ranked);
        let lines: Vec<&str> = tsv.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(
            lines[0],
            "rank\tagent\tscore\twins\tlosses\tdraws\twin_rate\tavg_margin\ttimeouts\tcrashes"
        );
        assert!(lines[1].starts_with("1\talpha\t"));
        // win_rate at 3 decimals, score/margin at 6
        assert!(lines[1].contains("\t100.000\t"));
        assert!(lines[1].contains("\t10.000000\t"));
    }

    #[test]
    fn tsv_is_deterministic() {
        let stats = fixture();
        let scores = compute_scores(&stats, &Weights::new());
        let ranked = rank(&stats, &scores);
        assert_eq!(leaderboard_tsv(&ranked), leaderboard_tsv(&ranked));
    }

    #[test]
    fn saves_under_a_fresh_directory() {
        let stats = fixture();
        let scores = compute_scores(&stats, &Weights::new());
        let ranked = rank(&stats, &scores);
        let dir = tempfile::tempdir().unwrap();
        let outdir = dir.path().join("nested/out");
        let path = save_leaderboard_tsv(&ranked, &outdir).unwrap();
        assert_eq!(path, outdir.join("leaderboard.tsv"));
        assert!(path.is_file());
    }
}
