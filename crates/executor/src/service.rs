//! The Service - single entry point for dispatching search commands.
//!
//! The Service resolves a command's target backend by identifier, runs the
//! command against it, and notifies listeners around the call. Resolved
//! backends are memoized per identifier.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;
use serde_json::Value;
use tracing::{debug, trace, warn};
use vufind_search_core::{Backend, Error, ParamBag, Query, RecordCollection, Result};

use crate::command::Command;
use crate::commands::get_ids::GetIdsCommand;
use crate::commands::lookup::LookupCommand;
use crate::commands::random::RandomCommand;
use crate::commands::retrieve::RetrieveCommand;
use crate::commands::retrieve_batch::RetrieveBatchCommand;
use crate::commands::search::SearchCommand;
use crate::commands::similar::SimilarCommand;
use crate::config::ServiceConfig;
use crate::listener::{CommandEvent, CommandListener};
use crate::registry::BackendResolver;

#[derive(Clone, Copy)]
enum Phase {
    Pre,
    Post,
}

/// Command dispatcher.
///
/// # Thread Safety
///
/// Service is `Send + Sync` and can be shared across threads. Commands
/// themselves are executed through `&mut`, so one command instance is never
/// run concurrently.
///
/// # Example
///
/// ```ignore
/// use std::sync::Arc;
/// use vufind_search_executor::{BackendRegistry, Command, SearchCommand, Service};
///
/// let registry = BackendRegistry::new().with(Arc::new(solr));
/// let service = Service::new(registry);
///
/// let mut cmd = SearchCommand::new("Solr", "middlemarch", None).with_limit(10);
/// service.invoke(&mut cmd)?;
/// let records = cmd.result()?;
/// ```
pub struct Service {
    resolver: Box<dyn BackendResolver>,
    backends: RwLock<HashMap<String, Arc<dyn Backend>>>,
    listeners: Vec<Arc<dyn CommandListener>>,
    config: ServiceConfig,
}

impl Service {
    /// Create a service with the default configuration
    pub fn new(resolver: impl BackendResolver + 'static) -> Self {
        Self {
            resolver: Box::new(resolver),
            backends: RwLock::new(HashMap::new()),
            listeners: Vec::new(),
            config: ServiceConfig::default(),
        }
    }

    /// Create a service with an explicit configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`] if the configuration is out of range.
    pub fn with_config(
        resolver: impl BackendResolver + 'static,
        config: ServiceConfig,
    ) -> Result<Self> {
        config.validate()?;
        let mut service = Self::new(resolver);
        service.config = config;
        Ok(service)
    }

    /// Register a lifecycle listener
    pub fn add_listener(&mut self, listener: Arc<dyn CommandListener>) {
        self.listeners.push(listener);
    }

    /// Active configuration
    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    /// Resolve the backend registered for `identifier`.
    ///
    /// The first successful resolution is memoized.
    pub fn backend(&self, identifier: &str) -> Result<Arc<dyn Backend>> {
        if let Some(backend) = self.backends.read().get(identifier) {
            trace!(target: "vufind::search", backend = identifier, "Backend cache hit");
            return Ok(Arc::clone(backend));
        }

        let backend = self
            .resolver
            .resolve(identifier)
            .ok_or_else(|| Error::BackendNotFound {
                backend: identifier.to_string(),
            })?;
        let mut cache = self.backends.write();
        Ok(Arc::clone(cache.entry(identifier.to_string()).or_insert(backend)))
    }

    /// Forget all memoized backends
    pub fn clear_backends(&self) {
        self.backends.write().clear();
    }

    /// Execute a command against its target backend.
    ///
    /// Fails with [`Error::BackendNotFound`] if the target cannot be
    /// resolved. The configured re-execution policy applies only to commands
    /// that have not pinned their own. Errors from execution are reported to
    /// listeners and then returned unchanged.
    pub fn invoke<'c, C: Command>(&self, cmd: &'c mut C) -> Result<&'c mut C> {
        let backend = self.backend(cmd.target_identifier())?;

        debug!(
            target: "vufind::search",
            command = cmd.name(),
            backend = cmd.target_identifier(),
            context = %cmd.context(),
            "Dispatching command"
        );
        self.notify(Phase::Pre, &*cmd);

        let outcome = cmd
            .execute_with_default(&*backend, self.config.reexecution)
            .map(|_| ());
        match outcome {
            Ok(()) => {
                self.notify(Phase::Post, &*cmd);
                debug!(
                    target: "vufind::search",
                    command = cmd.name(),
                    backend = cmd.target_identifier(),
                    "Command executed"
                );
                Ok(cmd)
            }
            Err(e) => {
                warn!(
                    target: "vufind::search",
                    command = cmd.name(),
                    backend = cmd.target_identifier(),
                    error = %e,
                    "Command failed"
                );
                let event = Self::event(&*cmd);
                for listener in &self.listeners {
                    listener.on_error(&event, &e);
                }
                Err(e)
            }
        }
    }

    /// Execute a batch of commands of one type.
    ///
    /// Commands run in order; a failure does not stop the rest. Returns one
    /// outcome per command, in the same order.
    pub fn invoke_many<C: Command>(&self, cmds: &mut [C]) -> Vec<Result<()>> {
        cmds.iter_mut()
            .map(|cmd| self.invoke(cmd).map(|_| ()))
            .collect()
    }

    fn event<C: Command>(cmd: &C) -> CommandEvent<'_> {
        CommandEvent {
            command: cmd.name(),
            backend: cmd.target_identifier(),
            context: cmd.context(),
            params: cmd.search_parameters(),
        }
    }

    fn notify<C: Command>(&self, phase: Phase, cmd: &C) {
        if self.listeners.is_empty() {
            return;
        }
        let event = Self::event(cmd);
        for listener in &self.listeners {
            match phase {
                Phase::Pre => listener.on_pre(&event),
                Phase::Post => listener.on_post(&event),
            }
        }
    }

    // =========================================================================
    // Convenience wrappers
    // =========================================================================

    /// Search `backend` for `query`, returning the first page of
    /// `default_limit` records
    pub fn search(
        &self,
        backend: &str,
        query: impl Into<Query>,
        params: impl Into<Option<ParamBag>>,
    ) -> Result<RecordCollection> {
        let mut cmd =
            SearchCommand::new(backend, query, params).with_limit(self.config.default_limit);
        self.invoke(&mut cmd)?;
        cmd.into_result()
    }

    /// Fetch one record
    pub fn retrieve(
        &self,
        backend: &str,
        id: &str,
        params: impl Into<Option<ParamBag>>,
    ) -> Result<RecordCollection> {
        let mut cmd = RetrieveCommand::new(backend, id, params);
        self.invoke(&mut cmd)?;
        cmd.into_result()
    }

    /// Fetch several records
    pub fn retrieve_batch(
        &self,
        backend: &str,
        ids: &[&str],
        params: impl Into<Option<ParamBag>>,
    ) -> Result<RecordCollection> {
        let mut cmd = RetrieveBatchCommand::new(backend, ids.iter().copied(), params);
        self.invoke(&mut cmd)?;
        cmd.into_result()
    }

    /// Records similar to `id`
    pub fn similar(
        &self,
        backend: &str,
        id: &str,
        params: impl Into<Option<ParamBag>>,
    ) -> Result<RecordCollection> {
        let mut cmd = SimilarCommand::new(backend, id, params);
        self.invoke(&mut cmd)?;
        cmd.into_result()
    }

    /// Random sample of `default_limit` records matching `query`
    pub fn random(
        &self,
        backend: &str,
        query: impl Into<Query>,
        params: impl Into<Option<ParamBag>>,
    ) -> Result<RecordCollection> {
        let mut cmd = RandomCommand::new(backend, query, self.config.default_limit, params);
        self.invoke(&mut cmd)?;
        cmd.into_result()
    }

    /// First `default_limit` identifiers matching `query`
    pub fn get_ids(
        &self,
        backend: &str,
        query: impl Into<Query>,
        params: impl Into<Option<ParamBag>>,
    ) -> Result<RecordCollection> {
        let mut cmd =
            GetIdsCommand::new(backend, query, params).with_limit(self.config.default_limit);
        self.invoke(&mut cmd)?;
        cmd.into_result()
    }

    /// Resolve an external identifier
    pub fn lookup(
        &self,
        backend: &str,
        key: &str,
        params: impl Into<Option<ParamBag>>,
    ) -> Result<Value> {
        let mut cmd = LookupCommand::new(backend, key, params);
        self.invoke(&mut cmd)?;
        cmd.into_result()
    }
}

impl std::fmt::Debug for Service {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let cached: Vec<String> = self.backends.read().keys().cloned().collect();
        f.debug_struct("Service")
            .field("cached_backends", &cached)
            .field("listeners", &self.listeners.len())
            .field("config", &self.config)
            .finish()
    }
}
