//! Tournament Analyzer CLI
//!
//! Reads one tournament result JSON document, prints the advanced
//! leaderboard, and saves the TSV + chart artifacts.

use std::path::PathBuf;
use std::process::Command;

use anyhow::Result;
use clap::Parser;
use tracing::debug;

use tournament_analyzer::prelude::*;

#[derive(Parser)]
#[command(name = "tournament-analyzer")]
#[command(about = "Analyze tournament JSON and produce advanced leaderboard and plots", long_about = None)]
struct Cli {
    /// Path to tournament results JSON (as produced by the tournament runner)
    input: PathBuf,

    /// Directory to save plots and leaderboard TSV
    #[arg(long, default_value = "analysis_out")]
    output_dir: PathBuf,

    /// Open the saved plots with the platform viewer after rendering
    #[arg(long)]
    show: bool,

    /// Write pipeline diagnostics to a timestamped log file in the output
    /// directory
    #[arg(long)]
    log: bool,

    /// Points per win
    #[arg(long)]
    win_points: Option<f64>,

    /// Points per draw
    #[arg(long)]
    draw_points: Option<f64>,

    /// Points per loss
    #[arg(long)]
    loss_points: Option<f64>,

    /// Bonus per point of average margin
    #[arg(long)]
    margin_weight: Option<f64>,

    /// Penalty per timeout
    #[arg(long)]
    timeout_penalty: Option<f64>,

    /// Penalty per crash
    #[arg(long)]
    crash_penalty: Option<f64>,
}

impl Cli {
    /// Resolve weights: defaults < `ANALYZE_*` environment < CLI flags.
    fn weights(&self) -> Weights {
        let mut weights = Weights::from_env();
        if let Some(v) = self.win_points {
            weights = weights.with_win_points(v);
        }
        if let Some(v) = self.draw_points {
            weights = weights.with_draw_points(v);
        }
        if let Some(v) = self.loss_points {
            weights = weights.with_loss_points(v);
        }
        if let Some(v) = self.margin_weight {
            weights = weights.with_margin_weight(v);
        }
        if let Some(v) = self.timeout_penalty {
            weights = weights.with_timeout_penalty(v);
        }
        if let Some(v) = self.crash_penalty {
            weights = weights.with_crash_penalty(v);
        }
        weights
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    if cli.log {
        tournament_analyzer::init_logger(&cli.output_dir);
    }

    let weights = cli.weights();
    debug!(?weights);

    let record = load_document(&cli.input)?;
    let stats = accumulate_stats(&record);
    let scores = compute_scores(&stats, &weights);
    let ranked = rank(&stats, &scores);

    print_leaderboard(&ranked);

    let tsv_path = save_leaderboard_tsv(&ranked, &cli.output_dir)?;
    let plot_paths = vec![
        render_score_bar(&ranked, &cli.output_dir)?,
        render_results_stacked(&stats, &cli.output_dir)?,
        render_winrate_vs_margin(&stats, &scores, &cli.output_dir)?,
    ];

    println!("\nSaved:");
    println!("- Leaderboard TSV: {}", tsv_path.display());
    for path in &plot_paths {
        println!("- Plot: {}", path.display());
    }

    if cli.show {
        for path in &plot_paths {
            open_with_viewer(path);
        }
    }

    Ok(())
}

/// Best-effort launch of the platform image viewer. Failures are ignored;
/// the artifacts are already on disk.
fn open_with_viewer(path: &std::path::Path) {
    let opener = if cfg!(target_os = "macos") {
        "open"
    } else {
        "xdg-open"
    };
    let _ = Command::new(opener).arg(path).spawn();
}
