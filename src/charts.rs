//! Chart renderers for the analysis artifacts.
//!
//! Three PNG charts are produced per run:
//! - `advanced_score_bar.png` — composite score per agent, ranked order
//! - `results_stacked_bar.png` — win/draw/loss composition per agent
//! - `winrate_vs_margin.png` — win rate vs. average margin scatter, point
//!   size growing with failures, point color mapped to composite score
//!
//! Renderers only consume the ranked entries / stats table; they never feed
//! anything back into the pipeline.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use tracing::info;

use crate::ranker::RankedEntry;
use crate::stats::StatsTable;

const WIN_COLOR: RGBColor = RGBColor(0x4c, 0x78, 0xa8);
const DRAW_COLOR: RGBColor = RGBColor(0x72, 0xb7, 0xb2);
const LOSS_COLOR: RGBColor = RGBColor(0xf5, 0x85, 0x18);

fn ensure_outdir(outdir: &Path) -> anyhow::Result<()> {
    fs::create_dir_all(outdir)
        .with_context(|| format!("cannot create output directory '{}'", outdir.display()))
}

/// Map `value` within `[lo, hi]` onto a continuous blue → red scale.
fn score_color(value: f64, lo: f64, hi: f64) -> HSLColor {
    let t = if hi - lo <= f64::EPSILON {
        0.5
    } else {
        ((value - lo) / (hi - lo)).clamp(0.0, 1.0)
    };
    HSLColor((240.0 - 240.0 * t) / 360.0, 0.90, 0.45)
}

/// Anchor a bar's value label at the bar end: above for zero or positive
/// bars, below for negative ones (which grow downward from the zero line).
fn score_label_vpos(score: f64) -> VPos {
    if score < 0.0 {
        VPos::Top
    } else {
        VPos::Bottom
    }
}

/// Pad a value range so flat data still spans a drawable interval.
fn padded(lo: f64, hi: f64) -> (f64, f64) {
    if hi - lo <= f64::EPSILON {
        (lo - 1.0, hi + 1.0)
    } else {
        let pad = (hi - lo) * 0.08;
        (lo - pad, hi + pad)
    }
}

/// Render the composite-score bar chart, one bar per agent in ranked order.
pub fn render_score_bar(
    ranked: &[RankedEntry<'_>],
    outdir: impl AsRef<Path>,
) -> anyhow::Result<PathBuf> {
    let outdir = outdir.as_ref();
    ensure_outdir(outdir)?;
    let path = outdir.join("advanced_score_bar.png");

    let names: Vec<&str> = ranked.iter().map(|e| e.agent).collect();
    let lo = ranked.iter().map(|e| e.score).fold(0.0, f64::min);
    let hi = ranked.iter().map(|e| e.score).fold(0.0, f64::max);
    let (y_lo, y_hi) = padded(lo, hi);

    let root = BitMapBackend::new(&path, (1000, 500)).into_drawing_area();
    root.fill(&WHITE)?;
    let mut chart = ChartBuilder::on(&root)
        .caption("Advanced Score by Agent", ("sans-serif", 24))
        .margin(20)
        .x_label_area_size(42)
        .y_label_area_size(56)
        .build_cartesian_2d(0f64..names.len().max(1) as f64, y_lo..y_hi)?;
    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(names.len().max(1))
        .x_label_formatter(&|x| {
            let idx = x.floor() as usize;
            names.get(idx).copied().unwrap_or("").to_string()
        })
        .y_desc("Advanced Score")
        .draw()?;

    chart.draw_series(ranked.iter().enumerate().map(|(i, entry)| {
        Rectangle::new(
            [(i as f64 + 0.15, 0.0), (i as f64 + 0.85, entry.score)],
            WIN_COLOR.filled(),
        )
    }))?;

    chart.draw_series(ranked.iter().enumerate().map(|(i, entry)| {
        let style = TextStyle::from(("sans-serif", 14).into_font())
            .pos(Pos::new(HPos::Center, score_label_vpos(entry.score)));
        Text::new(
            format!("{:.2}", entry.score),
            (i as f64 + 0.5, entry.score),
            style,
        )
    }))?;

    root.present()?;
    drop(chart);
    drop(root);
    info!(path = %path.display(), "saved score bar chart");
    Ok(path)
}

/// Render the win/draw/loss stacked bar chart, one stacked bar per agent in
/// first-seen (table) order.
pub fn render_results_stacked(
    stats: &StatsTable,
    outdir: impl AsRef<Path>,
) -> anyhow::Result<PathBuf> {
    let outdir = outdir.as_ref();
    ensure_outdir(outdir)?;
    let path = outdir.join("results_stacked_bar.png");

    let names: Vec<&str> = stats.iter().map(|(name, _)| name).collect();
    let max_games = stats.iter().map(|(_, s)| s.games).max().unwrap_or(0);

    let root = BitMapBackend::new(&path, (1000, 600)).into_drawing_area();
    root.fill(&WHITE)?;
    let mut chart = ChartBuilder::on(&root)
        .caption("Results Composition per Agent", ("sans-serif", 24))
        .margin(20)
        .x_label_area_size(42)
        .y_label_area_size(52)
        .build_cartesian_2d(0f64..names.len().max(1) as f64, 0u32..max_games.max(1) + 1)?;
    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(names.len().max(1))
        .x_label_formatter(&|x| {
            let idx = x.floor() as usize;
            names.get(idx).copied().unwrap_or("").to_string()
        })
        .y_desc("Games")
        .draw()?;

    // One series per segment so the legend gets exactly three entries.
    let segments: [(&str, RGBColor, fn(&crate::stats::AgentStats) -> (u32, u32)); 3] = [
        ("Wins", WIN_COLOR, |s| (0, s.wins)),
        ("Draws", DRAW_COLOR, |s| (s.wins, s.wins + s.draws)),
        ("Losses", LOSS_COLOR, |s| {
            (s.wins + s.draws, s.wins + s.draws + s.losses)
        }),
    ];
    for (label, color, bounds) in segments {
        chart
            .draw_series(stats.iter().enumerate().map(|(i, (_, s))| {
                let (from, to) = bounds(s);
                Rectangle::new(
                    [(i as f64 + 0.15, from), (i as f64 + 0.85, to)],
                    color.filled(),
                )
            }))?
            .label(label)
            .legend(move |(x, y)| Rectangle::new([(x, y - 6), (x + 12, y + 6)], color.filled()));
    }
    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.85))
        .border_style(BLACK.mix(0.4))
        .draw()?;

    root.present()?;
    drop(chart);
    drop(root);
    info!(path = %path.display(), "saved results stacked chart");
    Ok(path)
}

/// Render the win-rate vs. average-margin scatter.
///
/// Point radius grows with `timeouts + crashes`; point color maps the
/// composite score onto a continuous scale, with a gradient colorbar on the
/// right edge. Each point is labeled with its agent name.
pub fn render_winrate_vs_margin(
    stats: &StatsTable,
    scores: &HashMap<String, f64>,
    outdir: impl AsRef<Path>,
) -> anyhow::Result<PathBuf> {
    let outdir = outdir.as_ref();
    ensure_outdir(outdir)?;
    let path = outdir.join("winrate_vs_margin.png");

    let score_of = |agent: &str| scores.get(agent).copied().unwrap_or(0.0);
    let score_lo = stats
        .iter()
        .map(|(name, _)| score_of(name))
        .fold(f64::INFINITY, f64::min);
    let score_hi = stats
        .iter()
        .map(|(name, _)| score_of(name))
        .fold(f64::NEG_INFINITY, f64::max);
    let (score_lo, score_hi) = if stats.is_empty() {
        (0.0, 1.0)
    } else {
        (score_lo, score_hi)
    };

    let (x_lo, x_hi) = padded(
        stats
            .iter()
            .map(|(_, s)| 100.0 * s.win_rate())
            .fold(f64::INFINITY, f64::min)
            .min(0.0),
        stats
            .iter()
            .map(|(_, s)| 100.0 * s.win_rate())
            .fold(f64::NEG_INFINITY, f64::max)
            .max(0.0),
    );
    let (y_lo, y_hi) = padded(
        stats
            .iter()
            .map(|(_, s)| s.average_margin())
            .fold(f64::INFINITY, f64::min)
            .min(0.0),
        stats
            .iter()
            .map(|(_, s)| s.average_margin())
            .fold(f64::NEG_INFINITY, f64::max)
            .max(0.0),
    );

    let root = BitMapBackend::new(&path, (900, 600)).into_drawing_area();
    root.fill(&WHITE)?;
    let (main, bar) = root.split_horizontally(770);

    let mut chart = ChartBuilder::on(&main)
        .caption("Win Rate vs Avg Margin (size ~ failures)", ("sans-serif", 24))
        .margin(20)
        .x_label_area_size(42)
        .y_label_area_size(56)
        .build_cartesian_2d(x_lo..x_hi, y_lo..y_hi)?;
    chart
        .configure_mesh()
        .x_desc("Win Rate (%)")
        .y_desc("Average Margin (points)")
        .draw()?;

    let name_style = TextStyle::from(("sans-serif", 14).into_font())
        .pos(Pos::new(HPos::Left, VPos::Center));
    chart.draw_series(stats.iter().map(|(name, s)| {
        let failures = s.timeouts + s.crashes;
        let radius = 5 + 2 * failures.min(12) as i32;
        let color = score_color(score_of(name), score_lo, score_hi);
        EmptyElement::at((100.0 * s.win_rate(), s.average_margin()))
            + Circle::new((0, 0), radius, color.filled())
            + Text::new(name.to_string(), (radius + 4, 0), name_style.clone())
    }))?;

    // Gradient colorbar for the score scale.
    let mut colorbar = ChartBuilder::on(&bar)
        .margin(20)
        .y_label_area_size(48)
        .build_cartesian_2d(0f64..1f64, score_lo..score_hi.max(score_lo + f64::EPSILON))?;
    colorbar
        .configure_mesh()
        .disable_x_mesh()
        .disable_y_mesh()
        .x_labels(0)
        .y_desc("Advanced Score")
        .draw()?;
    let steps = 64;
    colorbar.draw_series((0..steps).map(|i| {
        let t0 = score_lo + (score_hi - score_lo) * i as f64 / steps as f64;
        let t1 = score_lo + (score_hi - score_lo) * (i + 1) as f64 / steps as f64;
        Rectangle::new(
            [(0.0, t0), (1.0, t1)],
            score_color((t0 + t1) / 2.0, score_lo, score_hi).filled(),
        )
    }))?;

    root.present()?;
    drop(chart);
    drop(colorbar);
    drop(main);
    drop(bar);
    drop(root);
    info!(path = %path.display(), "saved win-rate scatter");
    Ok(path)
}

#[cfg(test)]
mod charts_tests {
    use super::*;

    #[test]
    fn score_color_spans_blue_to_red() {
        let cold = score_color(0.0, 0.0, 1.0);
        let hot = score_color(1.0, 0.0, 1.0);
        assert!((cold.0 - 240.0 / 360.0).abs() < 1e-9);
        assert!(hot.0.abs() < 1e-9);
        // degenerate range maps to the midpoint
        let mid = score_color(3.0, 3.0, 3.0);
        assert!((mid.0 - 120.0 / 360.0).abs() < 1e-9);
    }

    #[test]
    fn bar_labels_sit_at_the_bar_end() {
        assert!(matches!(score_label_vpos(2.83), VPos::Bottom));
        assert!(matches!(score_label_vpos(0.0), VPos::Bottom));
        assert!(matches!(score_label_vpos(-1.5), VPos::Top));
    }

    #[test]
    fn padded_widens_flat_ranges() {
        let (lo, hi) = padded(2.0, 2.0);
        assert!(lo < 2.0 && hi > 2.0);
        let (lo, hi) = padded(0.0, 10.0);
        assert!(lo < 0.0 && hi > 10.0);
    }
}
