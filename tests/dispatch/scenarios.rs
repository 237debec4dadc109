//! Lookup scenarios and command lifecycle through the facade.

use std::sync::Arc;

use serde_json::json;
use vufind_search::{
    BackendRegistry, Command, Error, ErrorKind, LookupCommand, SearchCommand, Service,
};

use crate::common::{registry, LinkResolver, NumberedIndex};

#[test]
fn lookup_on_matching_backend_returns_backend_value() {
    let backend = LinkResolver::new("BrowZine").with("doi-value", "foo");
    let mut cmd = LookupCommand::new("BrowZine", "doi-value", None);

    assert!(!cmd.is_executed());
    cmd.execute(&backend).unwrap();

    assert!(cmd.is_executed());
    assert_eq!(cmd.result().unwrap(), &json!("foo"));
}

#[test]
fn lookup_on_mismatched_backend_fails() {
    let backend = LinkResolver::new("WorldCat").with("doi-value", "foo");
    let mut cmd = LookupCommand::new("BrowZine", "doi-value", None);

    let err = cmd.execute(&backend).err().unwrap();

    assert_eq!(err.kind(), ErrorKind::Runtime);
    let msg = err.to_string();
    assert!(msg.contains("BrowZine"), "message was: {}", msg);
    assert!(msg.contains("WorldCat"), "message was: {}", msg);
    assert!(!cmd.is_executed());
    assert_eq!(cmd.target_identifier(), "BrowZine");
}

#[test]
fn backend_errors_pass_through_the_service() {
    let service = Service::new(registry());
    let mut cmd = LookupCommand::new("BrowZine", "10.1/missing", None);

    let err = service.invoke(&mut cmd).err().unwrap();

    assert_eq!(err, Error::backend("BrowZine", "unknown DOI 10.1/missing"));
    assert!(matches!(cmd.result(), Err(Error::NotYetExecuted { .. })));
}

#[test]
fn paging_through_a_result_set() {
    let service = Service::new(registry());
    let mut seen = Vec::new();
    let mut offset = 0;
    loop {
        let mut cmd = SearchCommand::new("Solr", "anything", None)
            .with_offset(offset)
            .with_limit(20);
        service.invoke(&mut cmd).unwrap();
        let page = cmd.into_result().unwrap();
        if page.is_empty() {
            break;
        }
        offset += page.len() as u64;
        seen.extend(page.records.into_iter().map(|r| r.unique_id));
    }
    assert_eq!(seen.len(), 45);
    assert_eq!(seen.first().map(String::as_str), Some("0"));
    assert_eq!(seen.last().map(String::as_str), Some("44"));
}

#[test]
fn search_on_lookup_only_backend_is_unsupported() {
    let service = Service::new(registry());
    let err = service.search("BrowZine", "x", None).err().unwrap();
    assert_eq!(
        err,
        Error::UnsupportedOperation {
            backend: "BrowZine".into(),
            operation: "search".into(),
        }
    );
}

#[test]
fn target_identifier_is_stable_across_states() {
    let registry = BackendRegistry::new().with(Arc::new(NumberedIndex { id: "Solr", count: 3 }));
    let service = Service::new(registry);
    let mut cmd = SearchCommand::new("Solr", "x", None);
    assert_eq!(cmd.target_identifier(), "Solr");
    service.invoke(&mut cmd).unwrap();
    assert_eq!(cmd.target_identifier(), "Solr");
    let _ = service.invoke(&mut cmd);
    assert_eq!(cmd.target_identifier(), "Solr");
}
