#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::sync::Arc;

use chaind_core::error::{ChaindError, RegistryError};
use chaind_core::metrics::{Desc, Gauge, GaugeVec, Opts, Registry};

#[test]
fn duplicate_name_is_rejected_and_first_collector_kept() {
    let reg = Registry::new();
    let a = Gauge::new(Opts::new("ready", "first").namespace("chaind")).unwrap();
    let b = Gauge::new(Opts::new("ready", "second").namespace("chaind")).unwrap();
    a.set(1.0);

    reg.register(Arc::new(a)).unwrap();
    let err = reg.register(Arc::new(b)).expect_err("must collide");
    assert_eq!(err, RegistryError::AlreadyRegistered("chaind_ready".into()));

    assert_eq!(reg.len(), 1);
    assert_eq!(reg.value("chaind_ready", &[]), Some(1.0));
}

#[test]
fn vec_and_plain_gauge_cannot_share_a_name() {
    let reg = Registry::new();
    reg.register(Arc::new(Gauge::new(Opts::new("release", "h")).unwrap()))
        .unwrap();
    let vec = GaugeVec::new(Opts::new("release", "h"), &["version"]).unwrap();
    assert!(reg.register(Arc::new(vec)).is_err());
}

#[test]
fn gauge_vec_tracks_series_independently() {
    let vec = GaugeVec::new(Opts::new("release", "h"), &["version"]).unwrap();
    vec.set(&["1.0.0"], 1.0);
    vec.set(&["2.0.0"], 1.0);
    vec.set(&["1.0.0"], 0.0);

    assert_eq!(vec.get(&["1.0.0"]), Some(0.0));
    assert_eq!(vec.get(&["2.0.0"]), Some(1.0));
    assert_eq!(vec.get(&["3.0.0"]), None);

    assert!(vec.remove(&["1.0.0"]));
    assert_eq!(vec.get(&["1.0.0"]), None);
}

#[test]
fn gauge_vec_wrong_arity_is_reported_or_dropped() {
    let vec = GaugeVec::new(Opts::new("release", "h"), &["version"]).unwrap();
    let err = vec.try_with_label_values(&["a", "b"]).expect_err("arity");
    assert_eq!(
        err,
        RegistryError::InconsistentCardinality { expected: 1, got: 2 }
    );

    // infallible path
    vec.set(&[], 1.0);
    assert_eq!(vec.get(&[]), None);
}

#[test]
fn gauge_clones_share_value() {
    let g = Gauge::new(Opts::new("ready", "h")).unwrap();
    let h = g.clone();
    h.set(1.0);
    assert_eq!(g.get(), 1.0);
}

#[test]
fn set_to_current_time_reads_wall_clock() {
    let before = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_secs_f64();
    let g = Gauge::new(Opts::new("start_time_secs", "h")).unwrap();
    g.set_to_current_time();
    let after = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_secs_f64();
    assert!(g.get() >= before && g.get() <= after);
}

#[test]
fn render_text_exposition() {
    let reg = Registry::new();
    let ready = Gauge::new(Opts::new("ready", "1 if ready, otherwise 0.").namespace("chaind")).unwrap();
    let release = GaugeVec::new(
        Opts::new("release", "The release of this instance.").namespace("chaind"),
        &["version"],
    )
    .unwrap();
    reg.register(Arc::new(ready.clone())).unwrap();
    reg.register(Arc::new(release.clone())).unwrap();

    ready.set(1.0);
    release.set(&["1.0.0\"x"], 1.0);

    let expected = "\
# HELP chaind_ready 1 if ready, otherwise 0.
# TYPE chaind_ready gauge
chaind_ready 1
# HELP chaind_release The release of this instance.
# TYPE chaind_release gauge
chaind_release{version=\"1.0.0\\\"x\"} 1
";
    assert_eq!(reg.render(), expected);
}

#[test]
fn empty_gauge_vec_renders_header_only() {
    let reg = Registry::new();
    let release = GaugeVec::new(Opts::new("release", "h"), &["version"]).unwrap();
    reg.register(Arc::new(release)).unwrap();
    assert_eq!(reg.render(), "# HELP release h\n# TYPE release gauge\n");
}

#[test]
fn value_lookup_ignores_label_order() {
    let reg = Registry::new();
    let v = GaugeVec::new(Opts::new("build", "h"), &["version", "commit"]).unwrap();
    reg.register(Arc::new(v.clone())).unwrap();
    v.set(&["1.0.0", "abc"], 3.0);
    assert_eq!(
        reg.value("build", &[("commit", "abc"), ("version", "1.0.0")]),
        Some(3.0)
    );
    assert_eq!(reg.value("build", &[("version", "1.0.0")]), None);
}

#[test]
fn unregister_frees_the_name() {
    let reg = Registry::new();
    reg.register(Arc::new(Gauge::new(Opts::new("ready", "h")).unwrap()))
        .unwrap();
    assert!(reg.unregister("ready"));
    assert!(!reg.contains("ready"));
    assert!(reg.is_empty());
    reg.register(Arc::new(Gauge::new(Opts::new("ready", "h")).unwrap()))
        .unwrap();
}

#[test]
fn descriptor_validation() {
    let opts = Opts::new("ready", "help").namespace("chaind");
    assert_eq!(opts.fq_name(), "chaind_ready");
    assert_eq!(Opts::new("ready", "help").fq_name(), "ready");

    assert!(Desc::new(&Opts::new("1abc", "h"), &[]).is_err());
    assert!(Desc::new(&Opts::new("a-b", "h"), &[]).is_err());
    assert!(Desc::new(&Opts::new("ok", ""), &[]).is_err());
    assert!(Desc::new(&Opts::new("ok", "h"), &["__reserved"]).is_err());
    assert!(Desc::new(&Opts::new("ok", "h"), &["a:b"]).is_err());
    assert!(Desc::new(&Opts::new("ok", "h"), &["v", "v"]).is_err());

    let d = Desc::new(&Opts::new("job:up", "h"), &["version"]).unwrap();
    assert_eq!(d.fq_name(), "job:up");
    assert_eq!(d.label_names(), ["version".to_string()]);
}

#[test]
fn registration_error_names_metric_and_cause() {
    let err = ChaindError::Registration {
        metric: "ready",
        source: RegistryError::AlreadyRegistered("chaind_ready".into()),
    };
    assert_eq!(err.metric(), Some("ready"));
    assert_eq!(
        err.to_string(),
        "failed to register ready: duplicate metrics collector registration attempted: chaind_ready"
    );
    assert!(std::error::Error::source(&err).is_some());
}
