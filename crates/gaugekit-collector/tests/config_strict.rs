#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use gaugekit_collector::config::{self, OutputFormat};

#[test]
fn deny_unknown_fields_nested() {
    let bad = r#"
version: 1
collect:
  interval_ms: 5000
  prefx: "/app" # typo should fail
"#;

    let err = config::load_from_str(bad).expect_err("must fail");
    assert_eq!(err.code(), "CONFIG");
}

#[test]
fn ok_minimal_config() {
    let ok = r#"
version: 1
"#;
    let cfg = config::load_from_str(ok).expect("must parse");
    assert_eq!(cfg.version, 1);
    assert_eq!(cfg.collect.interval_ms, 10_000);
    assert_eq!(cfg.collect.prefix, "/");
    assert_eq!(cfg.collect.format, OutputFormat::Text);
}

#[test]
fn full_config() {
    let ok = r#"
version: 1
collect:
  interval_ms: 2500
  prefix: "/app/"
  format: json
"#;
    let cfg = config::load_from_str(ok).expect("must parse");
    assert_eq!(cfg.collect.interval_ms, 2500);
    assert_eq!(cfg.collect.prefix, "/app/");
    assert_eq!(cfg.collect.format, OutputFormat::Json);
}

#[test]
fn rejects_wrong_version() {
    let err = config::load_from_str("version: 2\n").expect_err("must fail");
    assert!(err.to_string().contains("version"));
}

#[test]
fn rejects_out_of_range_interval() {
    let bad = r#"
version: 1
collect:
  interval_ms: 10
"#;
    let err = config::load_from_str(bad).expect_err("must fail");
    assert!(err.to_string().contains("interval_ms"));
}

#[test]
fn rejects_relative_prefix() {
    let bad = r#"
version: 1
collect:
  prefix: "app"
"#;
    let err = config::load_from_str(bad).expect_err("must fail");
    assert!(err.to_string().contains("prefix"));
}

#[test]
fn rejects_unknown_format() {
    let bad = r#"
version: 1
collect:
  format: prometheus
"#;
    assert!(config::load_from_str(bad).is_err());
}

#[test]
fn missing_file_is_config_error() {
    let err = config::load_from_file("does/not/exist.yaml").expect_err("must fail");
    assert_eq!(err.code(), "CONFIG");
}
