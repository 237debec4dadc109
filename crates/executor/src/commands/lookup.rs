//! External identifier lookup (DOI, ISSN) against link-resolver style
//! backends such as BrowZine.

use serde_json::Value;
use vufind_search_core::{Backend, Context, ParamBag, Result};

use super::unsupported;
use crate::command::{Command, CommandState};

/// Resolve one external identifier.
#[derive(Debug, Clone)]
pub struct LookupCommand {
    state: CommandState<Value>,
    key: String,
}

impl LookupCommand {
    /// Look up `key` in `backend_id`
    pub fn new(
        backend_id: impl Into<String>,
        key: impl Into<String>,
        params: impl Into<Option<ParamBag>>,
    ) -> Self {
        Self {
            state: CommandState::new(backend_id, Context::Lookup, params),
            key: key.into(),
        }
    }

    /// The identifier being resolved
    pub fn key(&self) -> &str {
        &self.key
    }
}

impl Command for LookupCommand {
    type Output = Value;

    fn name(&self) -> &'static str {
        "LookupCommand"
    }

    fn state(&self) -> &CommandState<Value> {
        &self.state
    }

    fn state_mut(&mut self) -> &mut CommandState<Value> {
        &mut self.state
    }

    fn into_state(self) -> CommandState<Value> {
        self.state
    }

    fn run(&self, backend: &dyn Backend) -> Result<Value> {
        backend
            .as_lookup()
            .ok_or_else(|| unsupported(backend, "lookup"))?
            .lookup(&self.key, self.search_parameters())
    }
}
