use assert_cmd::Command;
use predicates::prelude::*;

use crate::common::TestSite;

/// A full build writes every page and copies the content files
#[test]
fn test_build_writes_all_pages() {
    let site = TestSite::with_fixtures().unwrap();

    let output = site.run_folio(&["build"]).unwrap();
    output.assert_success().assert_stdout_contains("Built 4 pages");

    for page in ["index.html", "articles.html", "experience.html", "projects.html"] {
        assert!(site.output_path().join(page).is_file(), "missing {page}");
    }
    for name in ["profile.json", "articles.json", "woodworking.json"] {
        assert!(site.output_path().join("content").join(name).is_file(), "missing {name}");
    }
}

#[test]
fn test_build_renders_content() {
    let site = TestSite::with_fixtures().unwrap();
    site.run_folio(&["build"]).unwrap().assert_success();

    let index = site.read_output("index.html").unwrap();
    assert!(index.contains("<title>About | Portfolio</title>"));
    assert!(index.contains("class=\"description\""));
    assert!(index.contains("<a href=\"https://example.com/blog\">systems programming</a>"));
    assert!(index.contains("id=\"ref-1\""));
    assert!(index.contains("href=\"mailto:jane@example.com\""));

    let articles = site.read_output("articles.html").unwrap();
    let first = articles.find("Designing a Content Loader").unwrap();
    let second = articles.find("Notes on Async Rendering").unwrap();
    assert!(first < second);

    let experience = site.read_output("experience.html").unwrap();
    assert!(experience.contains("Senior Engineer"));
    assert!(experience.contains("Initech"));

    let projects = site.read_output("projects.html").unwrap();
    assert!(projects.contains("class=\"project-card\""));
    assert!(projects.contains("Tokio"));
}

/// Missing content still produces pages, showing the empty state
#[test]
fn test_build_with_missing_articles() {
    let site = TestSite::with_fixtures().unwrap();
    site.remove_content("articles.json").unwrap();

    let output = site.run_folio(&["build"]).unwrap();
    output.assert_success().assert_stdout_contains("no content");

    let articles = site.read_output("articles.html").unwrap();
    assert!(articles.contains("No articles found."));
    assert!(!articles.contains("Loading articles..."));
    assert!(!site.output_path().join("content/articles.json").exists());
}

/// A collection that is not a list shows the error message
#[test]
fn test_build_with_malformed_projects() {
    let site = TestSite::with_fixtures().unwrap();
    site.write_content("projects.json", r#"{ "title": "not a list" }"#).unwrap();

    let output = site.run_folio(&["build"]).unwrap();
    output.assert_success().assert_stdout_contains("content failed to render");

    let projects = site.read_output("projects.html").unwrap();
    assert!(projects.contains("Error loading projects. Please try again."));
}

#[test]
fn test_build_flags_override_config() {
    let site = TestSite::with_fixtures().unwrap();
    site.write_config("[build]\noutput = \"public\"\ntitle = \"Jane Doe\"\n").unwrap();

    Command::cargo_bin("folio")
        .unwrap()
        .current_dir(site.project_path())
        .env_remove("FOLIO_CONFIG")
        .env("NO_COLOR", "1")
        .args(["build", "--output", "out", "--title", "Jane's Site"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Built 4 pages"));

    let index = std::fs::read_to_string(site.project_path().join("out/index.html")).unwrap();
    assert!(index.contains("<title>About | Jane&#x27;s Site</title>"));
    assert!(!site.project_path().join("public").exists());
}

#[test]
fn test_build_uses_configured_output_and_title() {
    let site = TestSite::with_fixtures().unwrap();
    site.write_config("[build]\noutput = \"public\"\ntitle = \"Jane Doe\"\n").unwrap();

    site.run_folio(&["build"]).unwrap().assert_success();

    let index = std::fs::read_to_string(site.project_path().join("public/index.html")).unwrap();
    assert!(index.contains("<title>About | Jane Doe</title>"));
}

#[test]
fn test_build_with_custom_layout() {
    let site = TestSite::with_fixtures().unwrap();
    std::fs::write(
        site.project_path().join("layout.html"),
        "<html><body data-page=\"{{ page }}\">{{ body | safe }}</body></html>",
    )
    .unwrap();
    site.write_config("[build]\nlayout = \"layout.html\"\n").unwrap();

    site.run_folio(&["build"]).unwrap().assert_success();

    let experience = site.read_output("experience.html").unwrap();
    assert!(experience.starts_with("<html><body data-page=\"Experience\">"));
    assert!(experience.contains("Senior Engineer"));
}

#[test]
fn test_build_with_broken_layout_fails() {
    let site = TestSite::with_fixtures().unwrap();
    std::fs::write(site.project_path().join("layout.html"), "{% if %}").unwrap();
    site.write_config("[build]\nlayout = \"layout.html\"\n").unwrap();

    let output = site.run_folio(&["build"]).unwrap();
    assert!(!output.success);
    assert!(output.stderr.contains("error"));
    assert!(!site.output_path().exists());
}
