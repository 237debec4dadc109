//! Similar-records lookup.

use vufind_search_core::{Backend, Context, ParamBag, RecordCollection, Result};

use super::unsupported;
use crate::command::{Command, CommandState};

/// Find records similar to a given record.
#[derive(Debug, Clone)]
pub struct SimilarCommand {
    state: CommandState<RecordCollection>,
    id: String,
}

impl SimilarCommand {
    /// Records similar to `id` in `backend_id`
    pub fn new(
        backend_id: impl Into<String>,
        id: impl Into<String>,
        params: impl Into<Option<ParamBag>>,
    ) -> Self {
        Self {
            state: CommandState::new(backend_id, Context::Similar, params),
            id: id.into(),
        }
    }

    /// Identifier of the reference record
    pub fn id(&self) -> &str {
        &self.id
    }
}

impl Command for SimilarCommand {
    type Output = RecordCollection;

    fn name(&self) -> &'static str {
        "SimilarCommand"
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
            .as_similar()
            .ok_or_else(|| unsupported(backend, "similar"))?
            .similar(&self.id, self.search_parameters())
    }
}
