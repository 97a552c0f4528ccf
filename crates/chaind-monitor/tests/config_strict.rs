#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use chaind_core::ChaindError;
use chaind_monitor::config;
use chaind_monitor::Presenter;

#[test]
fn deny_unknown_fields_nested() {
    let bad = r#"
version: 1
metrics:
  presenter: prometheus
  presentr: null # typo should fail
"#;

    let err = config::load_from_str(bad).expect_err("must fail");
    assert!(matches!(err, ChaindError::BadConfig(_)), "{err}");
}

#[test]
fn ok_minimal_config() {
    let ok = r#"
version: 1
"#;
    let cfg = config::load_from_str(ok).expect("must parse");
    assert_eq!(cfg.version, 1);
    assert_eq!(cfg.listen, "0.0.0.0:8080");
    assert!(cfg.metrics.is_none());
    assert!(cfg.release.is_none());
}

#[test]
fn full_config() {
    let ok = r#"
version: 1
listen: "127.0.0.1:9100"
metrics:
  presenter: "null"
release: "2.0.0"
"#;
    let cfg = config::load_from_str(ok).expect("must parse");
    assert_eq!(cfg.listen_addr().unwrap().port(), 9100);
    assert_eq!(cfg.metrics.as_ref().unwrap().presenter(), Presenter::Null);
    assert_eq!(cfg.release.as_deref(), Some("2.0.0"));
}

#[test]
fn unsupported_version() {
    let err = config::load_from_str("version: 2\n").expect_err("must fail");
    assert!(matches!(err, ChaindError::UnsupportedVersion));
}

#[test]
fn unknown_presenter_rejected() {
    let bad = r#"
version: 1
metrics:
  presenter: statsd
"#;
    let err = config::load_from_str(bad).expect_err("must fail");
    assert!(err.to_string().contains("statsd"), "{err}");
}

#[test]
fn bad_listen_rejected() {
    let err = config::load_from_str("version: 1\nlisten: \"localhost\"\n").expect_err("must fail");
    assert!(matches!(err, ChaindError::BadConfig(_)));
}

#[test]
fn empty_release_rejected() {
    let err = config::load_from_str("version: 1\nrelease: \" \"\n").expect_err("must fail");
    assert!(matches!(err, ChaindError::BadConfig(_)));
}

#[test]
fn missing_file_is_internal_error() {
    let err = config::load_from_file("/nonexistent/chaind.yaml").expect_err("must fail");
    assert!(matches!(err, ChaindError::Internal(_)));
}

#[test]
fn config_path_precedence() {
    assert_eq!(
        config::resolve_path(Some("a.yaml".into()), Some("b.yaml".into())),
        "a.yaml"
    );
    assert_eq!(config::resolve_path(None, Some("b.yaml".into())), "b.yaml");
    assert_eq!(config::resolve_path(None, None), config::DEFAULT_CONFIG_PATH);
}
