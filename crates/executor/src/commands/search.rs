//! Search command.

use vufind_search_core::{Backend, Context, ParamBag, Query, RecordCollection, Result};

use super::{unsupported, DEFAULT_LIMIT};
use crate::command::{Command, CommandState};

/// Run a query against a backend, one page at a time.
#[derive(Debug, Clone)]
pub struct SearchCommand {
    state: CommandState<RecordCollection>,
    query: Query,
    offset: u64,
    limit: u64,
}

impl SearchCommand {
    /// Search `backend_id` for `query`, first page of [`DEFAULT_LIMIT`] records.
    pub fn new(
        backend_id: impl Into<String>,
        query: impl Into<Query>,
        params: impl Into<Option<ParamBag>>,
    ) -> Self {
        Self {
            state: CommandState::new(backend_id, Context::Search, params),
            query: query.into(),
            offset: 0,
            limit: DEFAULT_LIMIT,
        }
    }

    /// Builder: start at `offset`
    pub fn with_offset(mut self, offset: u64) -> Self {
        self.offset = offset;
        self
    }

    /// Builder: return at most `limit` records
    pub fn with_limit(mut self, limit: u64) -> Self {
        self.limit = limit;
        self
    }

    /// The query
    pub fn query(&self) -> &Query {
        &self.query
    }

    /// Offset of the first requested record
    pub fn offset(&self) -> u64 {
        self.offset
    }

    /// Requested page size
    pub fn limit(&self) -> u64 {
        self.limit
    }
}

impl Command for SearchCommand {
    type Output = RecordCollection;

    fn name(&self) -> &'static str {
        "SearchCommand"
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
        let searcher = backend
            .as_search()
            .ok_or_else(|| unsupported(backend, "search"))?;
        searcher.search(&self.query, self.offset, self.limit, self.search_parameters())
    }
}
