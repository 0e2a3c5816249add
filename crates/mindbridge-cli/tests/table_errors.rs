use mindbridge_testing::TestWorld;

#[test]
fn test_malformed_table_document() {
    let world = TestWorld::new().with_file("broken.json", "{ \"columns\": [");
    let result = world.run(&["view", "broken.json"]).unwrap();

    assert!(!result.success());
    assert!(result.stderr().starts_with("Error: Failed to load table"));
}

#[test]
fn test_duplicate_column_names() {
    let world = TestWorld::new().with_file(
        "dupes.json",
        r#"{"columns": [{"name": "Email", "selectorId": "email"}, {"name": "Email", "selectorId": "alt_email"}], "data": []}"#,
    );
    let result = world.run(&["columns", "dupes.json"]).unwrap();

    assert!(!result.success());
    assert!(result.stderr().contains("duplicate column name 'Email'"));
}

#[test]
fn test_missing_table_file() {
    let world = TestWorld::new();
    let result = world.run(&["view", "nowhere.json"]).unwrap();

    assert!(!result.success());
    assert!(result.stderr().contains("nowhere.json"));
}
