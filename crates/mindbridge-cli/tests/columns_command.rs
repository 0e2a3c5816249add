use mindbridge_testing::{TestWorld, assertions, fixtures};

fn world() -> TestWorld {
    TestWorld::new().with_table("clients.json", &fixtures::client_details())
}

#[test]
fn test_columns_plain() {
    let world = world();
    let result = world.run(&["columns", "clients.json"]).unwrap();

    assert!(result.success(), "stderr: {}", result.stderr());
    assert_eq!(
        result.stdout(),
        "[x] Client\n[x] Email\n[x] Phone\n[x] Joined\n\n4 shown, 0 hidden\n"
    );
}

#[test]
fn test_hide_column() {
    let world = world();
    let result = world
        .run_json(&["columns", "clients.json", "--hide", "Phone"])
        .unwrap();

    let entries = result.json().unwrap();
    assertions::assert_column_hidden(&entries, "Phone", true).unwrap();
    assertions::assert_column_hidden(&entries, "Email", false).unwrap();

    insta::assert_json_snapshot!(entries, @r#"
    [
      {
        "name": "Client",
        "omit": false
      },
      {
        "name": "Email",
        "omit": false
      },
      {
        "name": "Phone",
        "omit": true
      },
      {
        "name": "Joined",
        "omit": false
      }
    ]
    "#);
}

#[test]
fn test_hidden_column_left_out_of_view() {
    let world = world();
    let result = world
        .run_json(&["view", "clients.json", "--hide", "Phone", "--hide", "Email"])
        .unwrap();

    let frame = result.json().unwrap();
    assertions::assert_headers(&frame, &["Client", "Joined", ""]).unwrap();
}

#[test]
fn test_hidden_column_still_searched() {
    let world = world();
    let result = world
        .run_json(&["view", "clients.json", "--hide", "Email", "--filter", "example.org"])
        .unwrap();

    let frame = result.json().unwrap();
    assertions::assert_row_count(&frame, 1).unwrap();
    assertions::assert_headers(&frame, &["Client", "Phone", "Joined", ""]).unwrap();
    assert_eq!(frame["rows"][0]["cells"][0], "John Smith");
}

#[test]
fn test_show_all_overrides_hide() {
    let world = world();
    let result = world
        .run_json(&["columns", "clients.json", "--hide", "Phone", "--show-all"])
        .unwrap();

    let entries = result.json().unwrap();
    assertions::assert_column_hidden(&entries, "Phone", false).unwrap();
}

#[test]
fn test_unknown_column_is_an_error() {
    let world = world();
    let result = world
        .run(&["columns", "clients.json", "--hide", "Nope"])
        .unwrap();

    assert!(!result.success());
    assert!(result.stderr().contains("Unknown column: Nope"));
}
