//! Backends shared by the dispatch tests.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Arc;

use serde_json::Value;
use vufind_search::{
    Backend, BackendRegistry, Error, LookupBackend, ParamBag, Query, Record, RecordCollection,
    Result, SearchBackend,
};

/// Link resolver keyed by DOI.
pub struct LinkResolver {
    pub id: &'static str,
    pub dois: HashMap<String, Value>,
}

impl LinkResolver {
    pub fn new(id: &'static str) -> Self {
        Self {
            id,
            dois: HashMap::new(),
        }
    }

    pub fn with(mut self, doi: &str, value: impl Into<Value>) -> Self {
        self.dois.insert(doi.to_string(), value.into());
        self
    }
}

impl Backend for LinkResolver {
    fn identifier(&self) -> &str {
        self.id
    }

    fn as_lookup(&self) -> Option<&dyn LookupBackend> {
        Some(self)
    }
}

impl LookupBackend for LinkResolver {
    fn lookup(&self, key: &str, _params: &ParamBag) -> Result<Value> {
        self.dois
            .get(key)
            .cloned()
            .ok_or_else(|| Error::backend(self.id, format!("unknown DOI {}", key)))
    }
}

/// Index whose search returns `count` numbered records for any non-empty query.
pub struct NumberedIndex {
    pub id: &'static str,
    pub count: u64,
}

impl Backend for NumberedIndex {
    fn identifier(&self) -> &str {
        self.id
    }

    fn as_search(&self) -> Option<&dyn SearchBackend> {
        Some(self)
    }
}

impl SearchBackend for NumberedIndex {
    fn search(
        &self,
        query: &Query,
        offset: u64,
        limit: u64,
        _params: &ParamBag,
    ) -> Result<RecordCollection> {
        if query.is_empty() {
            return Ok(RecordCollection::default());
        }
        let end = (offset + limit).min(self.count);
        Ok(RecordCollection {
            total: self.count,
            offset,
            records: (offset..end)
                .map(|n| Record::new(self.id, n.to_string()))
                .collect(),
            facets: Default::default(),
        })
    }
}

pub fn registry() -> BackendRegistry {
    BackendRegistry::new()
        .with(Arc::new(LinkResolver::new("BrowZine").with("doi-value", "foo")))
        .with(Arc::new(NumberedIndex {
            id: "Solr",
            count: 45,
        }))
}
