mod common;

use std::io::Write;

use common::{init_logging, words};
use wordscope_resolve::{
    ConfigError, MatchStrategy, NameResolver, RecordingSink, ResolveError, ResolverConfig,
};

#[test]
fn test_load_config_file() {
    init_logging();
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
builtins = ["grand total"]
global_label = "model"
strategy = "checkpoint"
"#
    )
    .unwrap();

    let config = ResolverConfig::load(file.path()).unwrap();
    assert_eq!(config.strategy, MatchStrategy::Checkpoint);

    let mut resolver = NameResolver::with_config(config);
    assert_eq!(resolver.current_scope().label(), "model");
    assert!(resolver.lookup("date").is_none());
    let found = resolver.recognize(&words("grand total * 2")).unwrap();
    assert_eq!(found.len, 2);
    assert!(found.is_declared());
}

#[test]
fn test_missing_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.toml");
    let err = ResolverConfig::load(&path).unwrap_err();
    match &err {
        ConfigError::Read { path: reported, .. } => assert_eq!(reported, &path),
        other => panic!("expected read error, got {other:?}"),
    }
    assert!(err.to_string().contains("absent.toml"));

    let err: ResolveError = err.into();
    assert!(matches!(err, ResolveError::Config(ConfigError::Read { .. })));
}

#[test]
fn test_malformed_config_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "builtins = 3").unwrap();
    let err = ResolverConfig::load(file.path()).unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn test_trace_flag_installs_log_sink() {
    init_logging();
    let config = ResolverConfig::from_toml_str("trace = true").unwrap();
    assert!(config.trace);

    let mut resolver = NameResolver::with_config(config);
    assert!(resolver.is_tracing());
    assert!(format!("{resolver:?}").contains("tracing: true"));
    resolver.define_name("net pay");
    assert_eq!(resolver.recognize(&words("net pay")).map(|m| m.len), Some(2));

    assert!(!NameResolver::new().is_tracing());
}

#[test]
fn test_injected_sink_replaces_configured_one() {
    let sink = RecordingSink::new();
    let config = ResolverConfig::from_toml_str("trace = true").unwrap();
    let mut resolver = NameResolver::with_config(config).with_trace_sink(sink.clone());
    assert!(resolver.is_tracing());

    resolver.recognize(&words("date and time"));
    assert_eq!(sink.render(), "match \"date and time\" (3 tokens, declared)\n");

    resolver.set_trace_sink(None);
    assert!(!resolver.is_tracing());
    resolver.recognize(&words("date"));
    assert_eq!(sink.events().len(), 1);
}
