//! Integration tests for newsdesk-config crate.

use newsdesk_config::{Config, ConfigLoader};
use std::collections::HashMap;
use std::io::Write;

#[test]
fn test_default_config_validation() {
    let mut config = Config::default();
    assert!(config.validate_all().is_ok());

    config.report.default_sort_order = "random".to_string();
    assert!(config.validate_all().is_err());
}

#[test]
fn test_file_and_env_layers() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        "report:\n  series_label: Stories\nlabels:\n  vocabulary_file: vocabularies.yaml\nlogging:\n  format: json\n"
    )
    .unwrap();

    let mut config = ConfigLoader::parse(&std::fs::read_to_string(file.path()).unwrap()).unwrap();
    assert_eq!(config.report.series_label, "Stories");
    assert_eq!(config.labels.vocabulary_file.as_deref(), Some("vocabularies.yaml"));

    let env: HashMap<&str, &str> = HashMap::from([
        ("NEWSDESK_CHART_TYPE", "table"),
        ("NEWSDESK_CACHE_TTL", "120"),
    ]);
    ConfigLoader::apply_env_overrides(&mut config, |var| env.get(var).map(|v| v.to_string()))
        .unwrap();

    assert_eq!(config.report.default_chart_type, "table");
    assert_eq!(config.labels.cache_ttl_seconds, 120);
    assert!(config.validate_all().is_ok());

    let logging = config.logging.to_logging_config();
    assert_eq!(logging.level, "info");
}
