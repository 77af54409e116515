use std::process::Command;

#[test]
fn sim_binary_smoke() {
    let output = Command::new("cargo")
        .args(["run", "--quiet", "--bin", "sim", "--", "1", "2", "3"])
        .current_dir(env!("CARGO_MANIFEST_DIR"))
        .output()
        .expect("failed to run sim binary");
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("non utf8 output");
    let v: serde_json::Value = serde_json::from_str(stdout.trim()).expect("invalid json");
    let matches = v["matches"].as_array().expect("matches array");
    assert!(matches.len() <= 3);
    let wins = v["black_wins"].as_u64().unwrap() + v["white_wins"].as_u64().unwrap();
    assert_eq!(wins as usize, matches.len());
}
