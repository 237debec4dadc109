//! One Service shared by several threads, each running its own commands.

use std::sync::Arc;
use std::thread;

use serde_json::json;
use vufind_search::{Command, LookupCommand, SearchCommand, Service};

use crate::common::registry;

#[test]
fn shared_service_across_threads() {
    let service = Arc::new(Service::new(registry()));

    let handles: Vec<_> = (0..8u64)
        .map(|i| {
            let service = Arc::clone(&service);
            thread::spawn(move || {
                let mut search = SearchCommand::new("Solr", "x", None)
                    .with_offset(i * 5)
                    .with_limit(5);
                service.invoke(&mut search).unwrap();

                let mut lookup = LookupCommand::new("BrowZine", "doi-value", None);
                service.invoke(&mut lookup).unwrap();

                (search.into_result().unwrap(), lookup.into_result().unwrap())
            })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        let (page, value) = handle.join().unwrap();
        assert_eq!(page.offset, i as u64 * 5);
        assert_eq!(page.ids().first().copied(), Some((i * 5).to_string().as_str()));
        assert_eq!(value, json!("foo"));
    }
}
