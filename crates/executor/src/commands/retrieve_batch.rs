//! Multi-record retrieval.
//!
//! Backends with a native batch call get one request. Others receive one
//! `retrieve` per identifier and the pages are stitched together in the
//! requested order.

use tracing::trace;
use vufind_search_core::{Backend, Context, ParamBag, RecordCollection, Result};

use super::unsupported;
use crate::command::{Command, CommandState};

/// Fetch several records by identifier.
#[derive(Debug, Clone)]
pub struct RetrieveBatchCommand {
    state: CommandState<RecordCollection>,
    ids: Vec<String>,
}

impl RetrieveBatchCommand {
    /// Fetch `ids` from `backend_id`
    pub fn new<I, S>(
        backend_id: impl Into<String>,
        ids: I,
        params: impl Into<Option<ParamBag>>,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            state: CommandState::new(backend_id, Context::RetrieveBatch, params),
            ids: ids.into_iter().map(Into::into).collect(),
        }
    }

    /// Requested identifiers, in order
    pub fn ids(&self) -> &[String] {
        &self.ids
    }
}

impl Command for RetrieveBatchCommand {
    type Output = RecordCollection;

    fn name(&self) -> &'static str {
        "RetrieveBatchCommand"
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
        let params = self.search_parameters();
        if let Some(batch) = backend.as_retrieve_batch() {
            return batch.retrieve_batch(&self.ids, params);
        }

        let single = backend
            .as_retrieve()
            .ok_or_else(|| unsupported(backend, "retrieveBatch"))?;
        trace!(
            target: "vufind::search",
            backend = backend.identifier(),
            count = self.ids.len(),
            "Falling back to per-record retrieval"
        );
        let mut merged = RecordCollection::default();
        for id in &self.ids {
            merged.extend(single.retrieve(id, params)?);
        }
        Ok(merged)
    }
}
