use assert_cmd::Command;
use predicates::prelude::*;

use crate::common::TestSite;

#[test]
fn test_check_all_content_present() {
    let site = TestSite::with_fixtures().unwrap();

    let output = site.run_folio(&["check"]).unwrap();
    output
        .assert_success()
        .assert_stdout_contains("✓ articles.json (2 items)")
        .assert_stdout_contains("All required content is available");
}

/// The woodworking collection is optional
#[test]
fn test_check_missing_optional_resource() {
    let site = TestSite::with_fixtures().unwrap();
    site.remove_content("woodworking.json").unwrap();

    let output = site.run_folio(&["check"]).unwrap();
    output.assert_success().assert_stdout_contains("woodworking.json (optional)");
}

#[test]
fn test_check_missing_required_resource_fails() {
    let site = TestSite::with_fixtures().unwrap();
    site.remove_content("experience.json").unwrap();

    let output = site.run_folio(&["check"]).unwrap();
    assert!(!output.success);
    assert_eq!(output.code, Some(1));
    assert!(output.stdout.contains("✗ experience.json"));
    assert!(output.stderr.contains("Content check failed"));
}

#[test]
fn test_check_json_output() {
    let site = TestSite::with_fixtures().unwrap();
    site.write_content("profile.json", "{ \"bio\": [").unwrap();

    let output = site.run_folio(&["check", "--format", "json"]).unwrap();
    assert!(!output.success);

    let report: serde_json::Value = serde_json::from_str(&output.stdout).unwrap();
    assert_eq!(report["valid"], false);
    let resources = report["resources"].as_array().unwrap();
    assert_eq!(resources.len(), 5);
    assert_eq!(resources[0]["name"], "profile.json");
    assert_eq!(resources[0]["available"], false);
    assert!(resources[0]["error"].as_str().unwrap().contains("malformed"));
    assert_eq!(resources[3]["items"], 2);
}

#[test]
fn test_check_content_flag() {
    let site = TestSite::new().unwrap();
    let elsewhere = site.project_path().join("elsewhere");
    folio_cli::test_utils::fixtures::write_content_dir(&elsewhere).unwrap();

    Command::cargo_bin("folio")
        .unwrap()
        .current_dir(site.project_path())
        .env_remove("FOLIO_CONFIG")
        .env("NO_COLOR", "1")
        .args(["check", "--content", "elsewhere"])
        .assert()
        .success()
        .stdout(predicate::str::contains("elsewhere"));
}

/// Content that parses but does not fit its records fails the check
#[test]
fn test_check_rejects_wrong_record_shape() {
    let site = TestSite::with_fixtures().unwrap();
    site.write_content("articles.json", r#"[{"title": "A"}]"#).unwrap();

    let output = site.run_folio(&["check"]).unwrap();
    assert!(!output.success);
    assert!(output.stdout.contains("✗ articles.json"));
    assert!(output.stdout.contains("missing field"));
}
