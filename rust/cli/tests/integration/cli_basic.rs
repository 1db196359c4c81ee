use crate::helpers::cli_runner::CliRunner;
use serial_test::serial;

#[test]
#[serial]
fn c1_help_lists_every_command() {
    let res = CliRunner::new().run(&["--help"]);
    assert_eq!(res.exit_code, 0);
    for cmd in ["calc", "series", "presets", "starters", "cfg"] {
        assert!(res.stdout.contains(cmd), "help should list `{}`", cmd);
    }
}

#[test]
#[serial]
fn c2_calc_fifteen_starters() {
    let res = CliRunner::new().run(&[
        "calc", "--deck", "40", "--hand", "5", "-g", "Starters=15:1:15",
    ]);
    assert_eq!(res.exit_code, 0, "stderr={}", res.stderr);
    assert!(res.stdout.contains("Deck: 40 cards, hand: 5"));
    assert!(res.stdout.contains("  Starters: 15 copies, at least 1"));
    assert!(res.stdout.contains("Probability: 91.93% [##################--]"));
    assert!(
        res.stdout
            .contains("Rating: ⭐ Excellent probability (badge: success, bar: success)")
    );
    assert!(res.stderr.is_empty());
}

#[test]
#[serial]
fn c3_calc_json_reports_rating_and_tones() {
    let res = CliRunner::new().run(&[
        "calc", "--json", "-g", "Allure=3:1:3", "-g", "Dark=16:1:16",
    ]);
    assert_eq!(res.exit_code, 0, "stderr={}", res.stderr);
    let json = res.json();
    assert_eq!(json["totalCards"], 40);
    assert_eq!(json["groups"].as_array().map(Vec::len), Some(2));
    let p = json["probability"].as_f64().unwrap();
    assert!(p > 0.0 && p < 0.4);
    assert_eq!(json["rating"], "Low");
    assert_eq!(json["badge"], "danger");
}

#[test]
#[serial]
fn c4_calc_over_assigned_is_not_an_error() {
    let res = CliRunner::new().run(&["calc", "--deck", "40", "-g", "30", "-g", "15"]);
    assert_eq!(res.exit_code, 0);
    assert!(res.stdout.contains("Probability: n/a"));
    assert!(res.stderr.contains("WARNING: Nothing to calculate"));
    assert!(res.stderr.contains("45"));
}

#[test]
#[serial]
fn c5_calc_without_groups_fails() {
    let res = CliRunner::new().run(&["calc"]);
    assert_eq!(res.exit_code, 2);
    assert!(res.stderr.contains("Invalid input"));
}

#[test]
#[serial]
fn c6_calc_rejects_malformed_group() {
    let res = CliRunner::new().run(&["calc", "-g", "Ash=3:2:1"]);
    assert_eq!(res.exit_code, 2);
    assert!(res.stderr.contains("below minimum"));
}

#[test]
#[serial]
fn c7_preset_with_group_warns() {
    let res = CliRunner::new().run(&["calc", "--preset", "minimum-desired", "-g", "3"]);
    assert_eq!(res.exit_code, 0);
    assert!(res.stdout.contains("Hand Traps: 18 copies, 1 to 3"));
    assert!(res.stderr.contains("--group is ignored"));
}

#[test]
#[serial]
fn c8_series_finds_optimal_point() {
    let res = CliRunner::new().run(&["series", "-g", "Starters=12:1:20", "--max", "20"]);
    assert_eq!(res.exit_code, 0, "stderr={}", res.stderr);
    assert!(res.stdout.contains("(focused sweep)"));
    assert!(res.stdout.contains("  1   12.50%  1 card: 12.5%"));
    assert!(res.stdout.contains("Optimal point: 10 cards: 78.3%"));
}

#[test]
#[serial]
fn c9_series_json_scaled() {
    let res = CliRunner::new().run(&[
        "series", "--json", "--mode", "scaled", "--max", "2", "-g", "a=1", "-g", "b=1",
    ]);
    assert_eq!(res.exit_code, 0, "stderr={}", res.stderr);
    let json = res.json();
    assert_eq!(json["mode"], "scaled");
    let points = json["points"].as_array().unwrap();
    assert_eq!(points.len(), 2);
    assert!((points[0]["y"].as_f64().unwrap() - 1.5625).abs() < 1e-9);
}

#[test]
#[serial]
fn c10_presets_and_starters() {
    let cli = CliRunner::new();
    let presets = cli.run(&["presets"]);
    assert_eq!(presets.exit_code, 0);
    assert!(presets.stdout.contains("grass-in-60"));
    assert!(presets.stdout.contains("8.33%"));

    let starters = cli.run(&["starters", "--max", "6"]);
    assert_eq!(starters.exit_code, 0);
    assert!(starters.stdout.contains("57.71%"));
    assert_eq!(starters.stdout.lines().count(), 8);
}
