//! Building a Service from `search.toml`.

use tempfile::TempDir;
use vufind_search::{ReexecutionPolicy, Service, ServiceConfig, CONFIG_FILE_NAME};

use crate::common::registry;

#[test]
fn service_uses_configured_page_size() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(CONFIG_FILE_NAME);
    std::fs::write(&path, "default_limit = 7\n").unwrap();

    let config = ServiceConfig::from_file(&path).unwrap();
    assert_eq!(config.reexecution, ReexecutionPolicy::Reject);
    let service = Service::with_config(registry(), config).unwrap();

    let page = service.search("Solr", "x", None).unwrap();
    assert_eq!(page.len(), 7);
    assert_eq!(page.total, 45);
    assert_eq!(service.config().default_limit, 7);
}

#[test]
fn default_file_round_trip() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(CONFIG_FILE_NAME);
    ServiceConfig::write_default_if_missing(&path).unwrap();

    let config = ServiceConfig::from_file(&path).unwrap();
    assert_eq!(config, ServiceConfig::default());
}

#[test]
fn broken_file_is_invalid_config() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(CONFIG_FILE_NAME);
    std::fs::write(&path, "default_limit = \"lots\"\n").unwrap();

    let err = ServiceConfig::from_file(&path).unwrap_err();
    assert!(matches!(err, vufind_search::Error::InvalidConfig { .. }));
}
