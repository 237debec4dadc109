//! Command lifecycle listeners.
//!
//! The [`Service`](crate::Service) notifies every registered listener before
//! a command runs, after it succeeds, and when it fails. Listeners observe;
//! they cannot change the outcome.

use vufind_search_core::{Context, Error, ParamBag};

/// Snapshot of a command handed to listeners.
#[derive(Debug, Clone, Copy)]
pub struct CommandEvent<'a> {
    /// Command name (e.g. "SearchCommand")
    pub command: &'static str,
    /// Target backend identifier
    pub backend: &'a str,
    /// Context tag
    pub context: &'a Context,
    /// Backend parameters
    pub params: &'a ParamBag,
}

/// Observer of command dispatch. All hooks default to no-ops.
pub trait CommandListener: Send + Sync {
    /// Backend resolved, command about to run
    fn on_pre(&self, _event: &CommandEvent<'_>) {}

    /// Command executed and its result stored
    fn on_post(&self, _event: &CommandEvent<'_>) {}

    /// Command failed; `error` is returned to the caller unchanged afterwards
    fn on_error(&self, _event: &CommandEvent<'_>, _error: &Error) {}
}
