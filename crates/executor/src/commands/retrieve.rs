//! Single record retrieval.

use vufind_search_core::{Backend, Context, ParamBag, RecordCollection, Result};

use super::unsupported;
use crate::command::{Command, CommandState};

/// Fetch one record by identifier.
#[derive(Debug, Clone)]
pub struct RetrieveCommand {
    state: CommandState<RecordCollection>,
    id: String,
}

impl RetrieveCommand {
    /// Fetch record `id` from `backend_id`
    pub fn new(
        backend_id: impl Into<String>,
        id: impl Into<String>,
        params: impl Into<Option<ParamBag>>,
    ) -> Self {
        Self {
            state: CommandState::new(backend_id, Context::Retrieve, params),
            id: id.into(),
        }
    }

    /// Record identifier
    pub fn id(&self) -> &str {
        &self.id
    }
}

impl Command for RetrieveCommand {
    type Output = RecordCollection;

    fn name(&self) -> &'static str {
        "RetrieveCommand"
    }

    fn state(&self) -> &CommandState<RecordCollection> {
        &self.state
    }

    fn state_mut(&mut self) -> &mut CommandState<RecordCollection> {
        &mut self.state
    }

    fn into_state(self) -> CommandState<RecordCollection> {
        self.state
    }

    fn run(&self, backend: &dyn Backend) -> Result<RecordCollection> {
        backend
            .as_retrieve()
            .ok_or_else(|| unsupported(backend, "retrieve"))?
            .retrieve(&self.id, self.search_parameters())
    }
}
