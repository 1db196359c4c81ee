use crate::helpers::cli_runner::CliRunner;
use crate::helpers::temp_files::TempFileManager;
use serial_test::serial;

const HAND_TRAPS: &str = r#"{
  "totalCards": 40,
  "handSize": 5,
  "groups": [
    { "name": "Hand Traps", "copies": 18, "minNeeded": 3, "maxNeeded": 3 }
  ]
}"#;

#[test]
#[serial]
fn f1_calc_reads_scenario_file() {
    let tfm = TempFileManager::new().unwrap();
    let path = tfm.create_file("traps.json", HAND_TRAPS).unwrap();
    let res = CliRunner::new().run(&["calc", "--scenario", path.to_str().unwrap()]);
    assert_eq!(res.exit_code, 0, "stderr={}", res.stderr);
    assert!(res.stdout.contains("Hand Traps: 18 copies, exactly 3"));
    assert!(res.stdout.contains("Probability: 28.65%"));
}

#[test]
#[serial]
fn f2_scenario_with_bom_and_deck_override() {
    let tfm = TempFileManager::new().unwrap();
    let mut bytes = vec![0xEF, 0xBB, 0xBF];
    bytes.extend_from_slice(HAND_TRAPS.as_bytes());
    let path = tfm.create_bytes("bom.json", &bytes).unwrap();
    let res = CliRunner::new().run(&[
        "calc",
        "--scenario",
        path.to_str().unwrap(),
        "--deck",
        "41",
        "--json",
    ]);
    assert_eq!(res.exit_code, 0, "stderr={}", res.stderr);
    assert_eq!(res.json()["totalCards"], 41);
}

#[test]
#[serial]
fn f3_missing_scenario_file() {
    let tfm = TempFileManager::new().unwrap();
    let path = tfm.path("absent.json");
    let res = CliRunner::new().run(&["calc", "--scenario", path.to_str().unwrap()]);
    assert_eq!(res.exit_code, 2);
    assert!(res.stderr.contains("Cannot read"));
}

#[test]
#[serial]
fn f4_malformed_scenario_is_rejected() {
    let tfm = TempFileManager::new().unwrap();
    let path = tfm
        .create_file(
            "bad.json",
            r#"{"totalCards":40,"handSize":5,"groups":[{"copies":-2}]}"#,
        )
        .unwrap();
    let res = CliRunner::new().run(&["series", "--scenario", path.to_str().unwrap()]);
    assert_eq!(res.exit_code, 2);
    assert!(res.stderr.contains("Invalid scenario"));
}
