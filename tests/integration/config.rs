use crate::common::TestSite;

#[test]
fn test_config_content_base_is_used() {
    let site = TestSite::new().unwrap();
    folio_cli::test_utils::fixtures::write_content_dir(&site.project_path().join("data")).unwrap();
    site.write_config("[content]\nbase = \"data/\"\n").unwrap();

    site.run_folio(&["check"]).unwrap().assert_success();
}

#[test]
fn test_explicit_config_must_exist() {
    let site = TestSite::with_fixtures().unwrap();

    let output = site.run_folio(&["--config", "missing.toml", "check"]).unwrap();
    assert!(!output.success);
    assert!(output.stderr.contains("Configuration file not found"));
}

#[test]
fn test_unknown_config_field_is_rejected() {
    let site = TestSite::with_fixtures().unwrap();
    site.write_config("[build]\noutptu = \"dist\"\n").unwrap();

    let output = site.run_folio(&["build"]).unwrap();
    assert!(!output.success);
    assert!(output.stderr.contains("outptu"));
}

#[test]
fn test_empty_output_is_rejected() {
    let site = TestSite::with_fixtures().unwrap();
    site.write_config("[build]\noutput = \"\"\n").unwrap();

    let output = site.run_folio(&["build"]).unwrap();
    assert!(!output.success);
    assert!(output.stderr.contains("[build].output must not be empty"));
}
