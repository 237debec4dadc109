//! Core types and traits for VuFind search commands
//!
//! This crate defines the foundational types used throughout the system:
//! - ParamBag: Ordered multi-value parameter container
//! - Context: Tag describing why a command was issued
//! - Query: Backend-neutral query model
//! - Record/RecordCollection: What backends return
//! - Error: Error type hierarchy
//! - Backend: Backend trait plus one trait per capability

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod backend;
pub mod context;
pub mod error;
pub mod param_bag;
pub mod query;
pub mod record;

pub use backend::{
    Backend, GetIdsBackend, LookupBackend, RandomBackend, RetrieveBackend, RetrieveBatchBackend,
    SearchBackend, SimilarBackend,
};
pub use context::Context;
pub use error::{Error, ErrorKind, Result};
pub use param_bag::ParamBag;
pub use query::{Operator, Query};
pub use record::{Facets, Record, RecordCollection};
