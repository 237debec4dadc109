//! Random sample of matching records.

use vufind_search_core::{Backend, Context, ParamBag, Query, RecordCollection, Result};

use super::{unsupported, DEFAULT_LIMIT};
use crate::command::{Command, CommandState};

/// Draw a random sample of records matching a query.
#[derive(Debug, Clone)]
pub struct RandomCommand {
    state: CommandState<RecordCollection>,
    query: Query,
    limit: u64,
}

impl RandomCommand {
    /// Sample up to `limit` records matching `query`
    pub fn new(
        backend_id: impl Into<String>,
        query: impl Into<Query>,
        limit: u64,
        params: impl Into<Option<ParamBag>>,
    ) -> Self {
        Self {
            state: CommandState::new(backend_id, Context::Random, params),
            query: query.into(),
            limit,
        }
    }

    /// Sample of [`DEFAULT_LIMIT`] records
    pub fn with_default_limit(
        backend_id: impl Into<String>,
        query: impl Into<Query>,
        params: impl Into<Option<ParamBag>>,
    ) -> Self {
        Self::new(backend_id, query, DEFAULT_LIMIT, params)
    }

    /// The query
    pub fn query(&self) -> &Query {
        &self.query
    }

    /// Requested sample size
    pub fn limit(&self) -> u64 {
        self.limit
    }
}

impl Command for RandomCommand {
    type Output = RecordCollection;

    fn name(&self) -> &'static str {
        "RandomCommand"
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
            .as_random()
            .ok_or_else(|| unsupported(backend, "random"))?
            .random(&self.query, self.limit, self.search_parameters())
    }
}
