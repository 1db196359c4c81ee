use crate::helpers::cli_runner::CliRunner;
use crate::helpers::temp_files::TempFileManager;
use serial_test::serial;

#[test]
#[serial]
fn i1_cfg_shows_defaults() {
    let res = CliRunner::new().run(&["cfg"]);
    assert_eq!(res.exit_code, 0, "stderr={}", res.stderr);
    let json = res.json();
    assert_eq!(json["deck_size"]["value"].as_u64(), Some(40));
    assert_eq!(json["deck_size"]["source"].as_str(), Some("default"));
    assert_eq!(json["hand_size"]["value"].as_u64(), Some(5));
    assert_eq!(json["series_max"]["value"].as_u64(), Some(20));
}

#[test]
#[serial]
fn i2_env_overrides_file() {
    let tfm = TempFileManager::new().unwrap();
    let cfg_path = tfm
        .create_file("drawodds.toml", "deck_size = 60\nhand_size = 7\n")
        .unwrap();

    let cli = CliRunner::new().with_env("DRAWODDS_CONFIG", cfg_path.to_string_lossy());
    let json = cli.run(&["cfg"]).json();
    assert_eq!(json["deck_size"]["value"].as_u64(), Some(60));
    assert_eq!(json["deck_size"]["source"].as_str(), Some("file"));
    assert_eq!(json["hand_size"]["value"].as_u64(), Some(7));
    assert_eq!(json["hand_size"]["source"].as_str(), Some("file"));
    assert_eq!(json["series_max"]["source"].as_str(), Some("default"));

    let cli = cli.with_env("DRAWODDS_HAND_SIZE", "6");
    let json = cli.run(&["cfg"]).json();
    assert_eq!(json["hand_size"]["value"].as_u64(), Some(6));
    assert_eq!(json["hand_size"]["source"].as_str(), Some("env"));
}

#[test]
#[serial]
fn i3_flags_override_configured_deck() {
    let cli = CliRunner::new()
        .with_env("DRAWODDS_DECK_SIZE", "60")
        .with_env("DRAWODDS_HAND_SIZE", "7");

    let res = cli.run(&["calc", "-g", "1"]);
    assert_eq!(res.exit_code, 0, "stderr={}", res.stderr);
    assert!(res.stdout.contains("Deck: 60 cards, hand: 7"));
    assert!(res.stdout.contains("Probability: 11.67%"));

    let res = cli.run(&["calc", "-g", "1", "--hand", "5"]);
    assert!(res.stdout.contains("Probability: 8.33%"));
}

#[test]
#[serial]
fn i4_series_max_from_env() {
    let cli = CliRunner::new().with_env("DRAWODDS_SERIES_MAX", "4");
    let json = cli.run(&["series", "--json", "-g", "3"]).json();
    assert_eq!(json["points"].as_array().map(Vec::len), Some(4));

    let json = cli.run(&["series", "--json", "-g", "3", "--max", "2"]).json();
    assert_eq!(json["points"].as_array().map(Vec::len), Some(2));
}

#[test]
#[serial]
fn i5_invalid_values_are_rejected() {
    let res = CliRunner::new()
        .with_env("DRAWODDS_HAND_SIZE", "abc")
        .run(&["cfg"]);
    assert_eq!(res.exit_code, 2);
    assert!(res.stderr.contains("Invalid hand size: abc"));

    let tfm = TempFileManager::new().unwrap();
    let zero = tfm.create_file("zero.toml", "deck_size = 0\n").unwrap();
    let res = CliRunner::new()
        .with_env("DRAWODDS_CONFIG", zero.to_string_lossy())
        .run(&["calc", "-g", "3"]);
    assert_eq!(res.exit_code, 2);
    assert!(res.stderr.contains("deck_size must be >0"));
    assert!(res.stdout.is_empty());
}

#[test]
#[serial]
fn i6_unknown_config_keys_fail() {
    let tfm = TempFileManager::new().unwrap();
    let path = tfm.create_file("typo.toml", "deck = 40\n").unwrap();
    let res = CliRunner::new()
        .with_env("DRAWODDS_CONFIG", path.to_string_lossy())
        .run(&["cfg"]);
    assert_eq!(res.exit_code, 2);
    assert!(res.stderr.contains("cannot parse config file"));
}
