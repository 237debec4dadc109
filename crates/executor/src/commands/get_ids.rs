//! Identifier-only search.
//!
//! Uses the backend's dedicated identifier search when it has one and falls
//! back to a regular search otherwise.

use vufind_search_core::{Backend, Context, ParamBag, Query, RecordCollection, Result};

use super::{unsupported, DEFAULT_LIMIT};
use crate::command::{Command, CommandState};

/// Search for matching record identifiers.
#[derive(Debug, Clone)]
pub struct GetIdsCommand {
    state: CommandState<RecordCollection>,
    query: Query,
    offset: u64,
    limit: u64,
}

impl GetIdsCommand {
    /// Identifiers of records in `backend_id` matching `query`
    pub fn new(
        backend_id: impl Into<String>,
        query: impl Into<Query>,
        params: impl Into<Option<ParamBag>>,
    ) -> Self {
        Self {
            state: CommandState::new(backend_id, Context::GetIds, params),
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

    /// Builder: return at most `limit` identifiers
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

impl Command for GetIdsCommand {
    type Output = RecordCollection;

    fn name(&self) -> &'static str {
        "GetIdsCommand"
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
        if let Some(ids) = backend.as_get_ids() {
            return ids.get_ids(&self.query, self.offset, self.limit, params);
        }
        backend
            .as_search()
            .ok_or_else(|| unsupported(backend, "getIds"))?
            .search(&self.query, self.offset, self.limit, params)
    }
}
