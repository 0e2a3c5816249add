use assert_cmd::Command;
use mindbridge_testing::{TestWorld, assertions, fixtures};
use predicates::prelude::*;

const CONFIG: &str = r##"
[table]
items_per_page = 2
hidden_columns = ["Email"]

[[table.row_styles]]
field = "client_first_name"
equals = "Jane"
style = { color = "#d32f2f" }
"##;

#[test]
fn test_config_hides_columns_and_styles_rows() {
    let world = TestWorld::new()
        .with_table("clients.json", &fixtures::client_details())
        .with_config(CONFIG);

    let result = world.run_json(&["view", "clients.json"]).unwrap();
    assert!(result.success(), "stderr: {}", result.stderr());

    let frame = result.json().unwrap();
    assertions::assert_headers(&frame, &["Client", "Phone", "Joined", ""]).unwrap();
    assertions::assert_row_count(&frame, 2).unwrap();
    assert_eq!(frame["page"]["total_pages"], 3);
    assert_eq!(frame["rows"][0]["style"]["color"], "#d32f2f");
    assert!(frame["rows"][1].get("style").is_none());
}

#[test]
fn test_flags_override_config() {
    let world = TestWorld::new()
        .with_table("clients.json", &fixtures::client_details())
        .with_config(CONFIG);

    let result = world
        .run_json(&["view", "clients.json", "--items-per-page", "10", "--show-all"])
        .unwrap();

    let frame = result.json().unwrap();
    assertions::assert_headers(&frame, &["Client", "Email", "Phone", "Joined", ""]).unwrap();
    assertions::assert_row_count(&frame, 5).unwrap();
}

#[test]
fn test_config_caption_used_when_table_has_none() {
    let mut table = fixtures::client_details();
    table.caption = None;
    let world = TestWorld::new()
        .with_table("clients.json", &table)
        .with_config("[table]\ncaption = \"Active Clients\"\n");

    let result = world.run_json(&["view", "clients.json"]).unwrap();
    let frame = result.json().unwrap();
    assert_eq!(frame["caption"], "Active Clients");
}

#[test]
#[allow(deprecated)]
fn test_config_from_environment() {
    let world = TestWorld::new().with_table("clients.json", &fixtures::client_details());
    let config_path = world.path("env-config.toml");
    std::fs::write(&config_path, "[table]\nhidden_columns = [\"Phone\"]\n").unwrap();

    let output = Command::cargo_bin("mindbridge")
        .unwrap()
        .current_dir(world.cwd())
        .env("MINDBRIDGE_CONFIG", &config_path)
        .args(["--format", "json", "columns", "clients.json"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let entries: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assertions::assert_column_hidden(&entries, "Phone", true).unwrap();
}

#[test]
#[allow(deprecated)]
fn test_bad_row_style_rule_fails() {
    let world = TestWorld::new()
        .with_table("clients.json", &fixtures::client_details())
        .with_config("[[table.row_styles]]\nfield = \"status\"\nstyle = { color = \"red\" }\n");

    let mut cmd = Command::cargo_bin("mindbridge").unwrap();
    world
        .configure_command(&mut cmd)
        .args(["view", "clients.json"]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("needs exactly one of"));
}
