//! # VuFind Search Executor
//!
//! Typed search commands and the dispatcher that runs them.
//!
//! It provides:
//! - [`Command`] / [`CommandState`] - execution bookkeeping shared by all commands
//! - Concrete commands, one per backend operation ([`SearchCommand`], [`LookupCommand`], ...)
//! - [`Service`] - resolves a command's backend by identifier and executes it
//! - [`BackendRegistry`] - map-backed backend resolver
//! - [`ServiceConfig`] - `search.toml` configuration
//!
//! ## Quick Start
//!
//! ```text
//! use vufind_search_executor::{BackendRegistry, Command, LookupCommand, Service};
//!
//! let service = Service::new(BackendRegistry::new().with(browzine));
//!
//! let mut cmd = LookupCommand::new("BrowZine", "10.1000/xyz", None);
//! service.invoke(&mut cmd)?;
//! let data = cmd.result()?;
//! ```
//!
//! ## Commands
//!
//! | Command | Backend capability |
//! |---------|--------------------|
//! | **SearchCommand** | `SearchBackend` |
//! | **RetrieveCommand** | `RetrieveBackend` |
//! | **RetrieveBatchCommand** | `RetrieveBatchBackend` (or `RetrieveBackend` per id) |
//! | **SimilarCommand** | `SimilarBackend` |
//! | **RandomCommand** | `RandomBackend` |
//! | **GetIdsCommand** | `GetIdsBackend` (or `SearchBackend`) |
//! | **LookupCommand** | `LookupBackend` |

#![warn(missing_docs)]

mod command;
pub mod commands;
mod config;
mod listener;
mod registry;
mod service;

// Test modules
#[cfg(test)]
mod tests;

// =============================================================================
// Public API
// =============================================================================

pub use command::{Command, CommandState, ReexecutionPolicy};
pub use commands::get_ids::GetIdsCommand;
pub use commands::lookup::LookupCommand;
pub use commands::random::RandomCommand;
pub use commands::retrieve::RetrieveCommand;
pub use commands::retrieve_batch::RetrieveBatchCommand;
pub use commands::search::SearchCommand;
pub use commands::similar::SimilarCommand;
pub use commands::DEFAULT_LIMIT;
pub use config::{ServiceConfig, CONFIG_FILE_NAME};
pub use listener::{CommandEvent, CommandListener};
pub use registry::{BackendRegistry, BackendResolver};
pub use service::Service;

// Re-export core types so users don't need vufind-search-core directly
pub use vufind_search_core::{
    Backend, Context, Error, ErrorKind, GetIdsBackend, LookupBackend, Operator, ParamBag, Query,
    RandomBackend, Record, RecordCollection, Result, RetrieveBackend, RetrieveBatchBackend,
    SearchBackend, SimilarBackend,
};
