use predicates::prelude::*;

#[test]
fn page_prints_padded_record() {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("snippetbook");
    cmd.args(["page", "--number", "7"])
        .assert()
        .success()
        .stdout("{\n  \"type\": \"page\",\n  \"value\": \"Page 007\",\n  \"id\": \"page-007\"\n}\n");
}

#[test]
fn page_out_of_range_fails() {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("snippetbook");
    cmd.args(["page", "--number", "1001"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("page number must be between 1-1000"));
}

#[test]
fn heading_with_number_prefix() {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("snippetbook");
    cmd.args(["heading", "--text", " Intro ", "--kind", "sub", "--number", "4"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"value\": \"4. Intro\""))
        .stdout(predicate::str::contains("\"id\": \"sub-heading-1\""))
        .stdout(predicate::str::contains("\"headingType\": \"sub\""));
}

#[test]
fn paragraph_collects_snippets_in_order() {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("snippetbook");
    cmd.args([
        "paragraph",
        "--volume",
        "v2",
        "--chapter",
        "c10",
        "--custom-id",
        "5",
        "--snippet",
        "text=Blessed",
        "--snippet",
        "verse=Mt 5:3",
        "--verse-link",
        "https://example.com/mt5",
    ])
    .assert()
    .success()
    .stdout(predicate::str::contains("\"id\": \"v2-c10-005\""))
    .stdout(predicate::str::contains("\"link\": \"https://example.com/mt5\""));
}

#[test]
fn paragraph_without_snippets_fails() {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("snippetbook");
    cmd.args([
        "paragraph",
        "--volume",
        "v1",
        "--chapter",
        "c01",
        "--custom-id",
        "1",
    ])
    .assert()
    .failure()
    .stderr(predicate::str::contains("add at least one snippet"));
}

#[test]
fn image_has_no_id_field() {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("snippetbook");
    cmd.args(["image", "--src", "https://example.com/a.png"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"id\"").not());
}

#[test]
fn rust_log_debug_emits_debug_line_to_stderr() {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("snippetbook");
    cmd.env("RUST_LOG", "debug")
        .args(["chapter", "--select", "chapter-01"])
        .assert()
        .success()
        .stderr(predicate::str::contains("parsed cli"));
}

#[test]
fn page_preview_ignores_non_digits() {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("snippetbook");
    cmd.args(["page", "--number", "1a2", "--preview"])
        .assert()
        .success()
        .stdout("Formatted: Page 012\n");
}

#[test]
fn page_preview_reports_out_of_range_without_failing() {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("snippetbook");
    cmd.args(["page", "--number", "0", "--preview"])
        .assert()
        .success()
        .stdout("Invalid: Must be a number between 1-1000.\n");
}

#[test]
fn options_lists_every_catalog() {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("snippetbook");
    cmd.arg("options")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("volumes:\n- id: v1\n  label: Volume 01\n"))
        .stdout(predicate::str::contains("- id: v7\n  label: Volume 07\n"))
        .stdout(predicate::str::contains("chapters:\n- id: c01\n  label: Chapter 01\n"))
        .stdout(predicate::str::contains("heading_numbers:\n- no-prefix\n- '1'\n"));
}
