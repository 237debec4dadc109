//! Backend abstraction
//!
//! A backend is a pluggable search or data source identified by a string key
//! ("Solr", "Summon", "BrowZine", ...). The base [`Backend`] trait only knows
//! the identifier. Each operation a backend may support is its own capability
//! trait, and a backend advertises the ones it implements through the `as_*`
//! accessors. Commands depend on the single capability they need.
//!
//! # Example
//!
//! ```
//! use vufind_search_core::{Backend, LookupBackend, ParamBag, Result};
//! use serde_json::Value;
//!
//! struct BrowZine;
//!
//! impl Backend for BrowZine {
//!     fn identifier(&self) -> &str {
//!         "BrowZine"
//!     }
//!
//!     fn as_lookup(&self) -> Option<&dyn LookupBackend> {
//!         Some(self)
//!     }
//! }
//!
//! impl LookupBackend for BrowZine {
//!     fn lookup(&self, key: &str, _params: &ParamBag) -> Result<Value> {
//!         Ok(Value::from(format!("issn:{key}")))
//!     }
//! }
//! ```

use serde_json::Value;

use crate::error::Result;
use crate::param_bag::ParamBag;
use crate::query::Query;
use crate::record::RecordCollection;

/// Base backend trait.
///
/// Thread safety: backends are shared between the dispatcher and its callers,
/// so implementations must be `Send + Sync`.
pub trait Backend: Send + Sync {
    /// Identifier commands are matched against
    fn identifier(&self) -> &str;

    /// Keyword/structured search capability
    fn as_search(&self) -> Option<&dyn SearchBackend> {
        None
    }

    /// Single-record retrieval capability
    fn as_retrieve(&self) -> Option<&dyn RetrieveBackend> {
        None
    }

    /// Native multi-record retrieval capability
    fn as_retrieve_batch(&self) -> Option<&dyn RetrieveBatchBackend> {
        None
    }

    /// "More like this" capability
    fn as_similar(&self) -> Option<&dyn SimilarBackend> {
        None
    }

    /// Random sampling capability
    fn as_random(&self) -> Option<&dyn RandomBackend> {
        None
    }

    /// Identifier-only search capability
    fn as_get_ids(&self) -> Option<&dyn GetIdsBackend> {
        None
    }

    /// Identifier lookup capability
    fn as_lookup(&self) -> Option<&dyn LookupBackend> {
        None
    }
}

/// Backends that can run a search
pub trait SearchBackend {
    /// Run `query`, returning at most `limit` records starting at `offset`
    fn search(
        &self,
        query: &Query,
        offset: u64,
        limit: u64,
        params: &ParamBag,
    ) -> Result<RecordCollection>;
}

/// Backends that can fetch a record by identifier
pub trait RetrieveBackend {
    /// Fetch one record. An unknown id yields an empty collection.
    fn retrieve(&self, id: &str, params: &ParamBag) -> Result<RecordCollection>;
}

/// Backends that can fetch many records in one call
pub trait RetrieveBatchBackend {
    /// Fetch the records for `ids`, in the order given
    fn retrieve_batch(&self, ids: &[String], params: &ParamBag) -> Result<RecordCollection>;
}

/// Backends that can find records similar to a given one
pub trait SimilarBackend {
    /// Records similar to `id`
    fn similar(&self, id: &str, params: &ParamBag) -> Result<RecordCollection>;
}

/// Backends that can return a random sample of matching records
pub trait RandomBackend {
    /// Up to `limit` random records matching `query`
    fn random(&self, query: &Query, limit: u64, params: &ParamBag) -> Result<RecordCollection>;
}

/// Backends with a cheap identifier-only search
pub trait GetIdsBackend {
    /// Like [`SearchBackend::search`], but records may carry only identifiers
    fn get_ids(
        &self,
        query: &Query,
        offset: u64,
        limit: u64,
        params: &ParamBag,
    ) -> Result<RecordCollection>;
}

/// Backends that resolve an external identifier (DOI, ISSN) to data
pub trait LookupBackend {
    /// Resolve `key`
    fn lookup(&self, key: &str, params: &ParamBag) -> Result<Value>;
}
