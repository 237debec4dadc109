//! VuFind Search - typed search commands dispatched to pluggable backends
//!
//! Callers build a command bound to one backend identifier, hand it to the
//! [`Service`], and read the memoized result afterwards.
//!
//! # Quick Start
//!
//! ```ignore
//! use vufind_search::{BackendRegistry, Command, SearchCommand, Service};
//!
//! let service = Service::new(BackendRegistry::new().with(solr));
//!
//! let mut cmd = SearchCommand::new("Solr", "middlemarch", None).with_limit(10);
//! service.invoke(&mut cmd)?;
//! for record in &cmd.result()?.records {
//!     println!("{}", record.unique_id);
//! }
//! ```
//!
//! # Architecture
//!
//! All dispatch goes through the [`Service`], which resolves backends by
//! identifier. Backends implement [`Backend`] plus one trait per capability
//! they support.

// Re-export the public API from vufind-search-executor
pub use vufind_search_executor::*;
