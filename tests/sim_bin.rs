use std::process::Command;

#[test]
fn sim_reports_json_summary() {
    let output = Command::new(env!("CARGO_BIN_EXE_sim"))
        .args(["7", "3"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let summary: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(summary["seed"], 7);
    assert_eq!(summary["games"], 3);
    assert_eq!(summary["won"], 3);
    assert_eq!(summary["not_won"], 0);
    assert!(summary["shots"]["min"].as_u64().unwrap() >= 17);
    assert!(summary["shots"]["max"].as_u64().unwrap() <= 100);
}

#[test]
fn sim_rejects_missing_arguments() {
    let output = Command::new(env!("CARGO_BIN_EXE_sim")).output().unwrap();
    assert!(!output.status.success());
}
