use std::fs;

use tournament_analyzer::prelude::*;

fn write_results_json(dir: &std::path::Path) -> std::path::PathBuf {
    let path = dir.join("tournament_results.json");
    fs::write(
        &path,
        serde_json::to_string_pretty(&serde_json::json!({
            "agents": ["alpha", "beta", "gamma"],
            "games": [
                {"black": "alpha", "white": "beta",
                 "blackScore": 40, "whiteScore": 24, "winner": "BLACK"},
                {"black": "beta", "white": "gamma",
                 "blackScore": 30, "whiteScore": 34, "winner": "WHITE",
                 "blackTimedOut": true},
                {"black": "gamma", "white": "alpha",
                 "blackScore": 32, "whiteScore": 32},
                // "DRAW" tag contradicted by the scores: alpha wins
                {"black": "alpha", "white": "intruder",
                 "blackScore": 44, "whiteScore": 20, "winner": "DRAW",
                 "whiteCrashed": true}
            ]
        }))
        .unwrap(),
    )
    .unwrap();
    path
}

#[test]
fn full_pipeline_produces_all_artifacts() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_results_json(dir.path());
    let outdir = dir.path().join("analysis_out");

    let record = load_document(&input).unwrap();
    let stats = accumulate_stats(&record);
    let scores = compute_scores(&stats, &Weights::new());
    let ranked = rank(&stats, &scores);

    let tsv = save_leaderboard_tsv(&ranked, &outdir).unwrap();
    let bar = render_score_bar(&ranked, &outdir).unwrap();
    let stacked = render_results_stacked(&stats, &outdir).unwrap();
    let scatter = render_winrate_vs_margin(&stats, &scores, &outdir).unwrap();

    assert_eq!(tsv.file_name().unwrap(), "leaderboard.tsv");
    assert_eq!(bar.file_name().unwrap(), "advanced_score_bar.png");
    assert_eq!(stacked.file_name().unwrap(), "results_stacked_bar.png");
    assert_eq!(scatter.file_name().unwrap(), "winrate_vs_margin.png");
    for path in [&tsv, &bar, &stacked, &scatter] {
        assert!(path.is_file(), "missing artifact {}", path.display());
        assert!(fs::metadata(path).unwrap().len() > 0);
    }
}

#[test]
fn pipeline_semantics_survive_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_results_json(dir.path());

    let record = load_document(&input).unwrap();
    let stats = accumulate_stats(&record);

    // Declared agents first, then the undeclared one from the last game.
    let order: Vec<&str> = stats.iter().map(|(name, _)| name).collect();
    assert_eq!(order, ["alpha", "beta", "gamma", "intruder"]);

    // The contradicted "DRAW" goes to the higher score.
    let alpha = stats.get("alpha").unwrap();
    assert_eq!((alpha.games, alpha.wins, alpha.draws, alpha.losses), (3, 2, 1, 0));
    let intruder = stats.get("intruder").unwrap();
    assert_eq!((intruder.games, intruder.losses, intruder.crashes), (1, 1, 1));

    for (_, s) in stats.iter() {
        assert_eq!(s.wins + s.losses + s.draws, s.games);
    }

    let scores = compute_scores(&stats, &Weights::new());
    let ranked = rank(&stats, &scores);
    assert_eq!(ranked[0].agent, "alpha");
    assert_eq!(ranked[0].rank, 1);
    assert!(ranked.windows(2).all(|w| w[0].score >= w[1].score));
}

#[test]
fn leaderboard_file_is_byte_identical_across_runs() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_results_json(dir.path());

    let mut contents = Vec::new();
    for run in 0..2 {
        let outdir = dir.path().join(format!("out_{run}"));
        let record = load_document(&input).unwrap();
        let stats = accumulate_stats(&record);
        let scores = compute_scores(&stats, &Weights::new());
        let ranked = rank(&stats, &scores);
        let path = save_leaderboard_tsv(&ranked, &outdir).unwrap();
        contents.push(fs::read(path).unwrap());
    }
    assert_eq!(contents[0], contents[1]);
}

#[test]
fn custom_weights_reorder_the_leaderboard() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_results_json(dir.path());

    let record = load_document(&input).unwrap();
    let stats = accumulate_stats(&record);

    // With defaults beta sits above intruder; a crushing timeout penalty
    // flips the two.
    let defaults = compute_scores(&stats, &Weights::new());
    assert!(defaults["beta"] > defaults["intruder"]);

    let harsh = Weights::new().with_timeout_penalty(10.0);
    let scores = compute_scores(&stats, &harsh);
    let ranked = rank(&stats, &scores);
    let beta_pos = ranked.iter().position(|e| e.agent == "beta").unwrap();
    let intruder_pos = ranked.iter().position(|e| e.agent == "intruder").unwrap();
    assert!(intruder_pos < beta_pos);
}
