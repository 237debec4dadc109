//! Command trait and shared execution state.
//!
//! A command is a typed request bound to one backend identifier. It is built
//! once, executed against a backend, and then read:
//!
//! ```text
//! Created ──execute(backend)──► Executed
//!    ▲            │
//!    └── error ───┘   (backend errors leave the command unexecuted)
//! ```
//!
//! Every concrete command embeds a [`CommandState`] holding the target
//! backend id, the context, the parameters and (after execution) the result.
//! The [`Command`] trait supplies the bookkeeping as default methods, so a
//! concrete command only describes its backend call in [`Command::run`].

use serde::{Deserialize, Serialize};
use vufind_search_core::{Backend, Context, Error, ParamBag, Result};

/// What happens when an already executed command is executed again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReexecutionPolicy {
    /// Fail with [`Error::AlreadyExecuted`] and keep the first result
    #[default]
    Reject,
    /// Run again and replace the stored result
    Overwrite,
}

/// Execution bookkeeping shared by all commands.
///
/// `result` is `Some` exactly when the command has executed. The stored
/// output may itself represent "nothing" (e.g. a JSON null) if that is what
/// the backend returned.
#[derive(Debug, Clone, PartialEq)]
pub struct CommandState<T> {
    backend_id: String,
    context: Context,
    params: ParamBag,
    result: Option<T>,
    reexecution: Option<ReexecutionPolicy>,
}

impl<T> CommandState<T> {
    /// Create state for a command targeting `backend_id`.
    ///
    /// `params` defaults to an empty bag.
    pub fn new(
        backend_id: impl Into<String>,
        context: Context,
        params: impl Into<Option<ParamBag>>,
    ) -> Self {
        Self {
            backend_id: backend_id.into(),
            context,
            params: params.into().unwrap_or_default(),
            result: None,
            reexecution: None,
        }
    }

    /// Backend identifier this command was built for
    pub fn target_identifier(&self) -> &str {
        &self.backend_id
    }

    /// Context tag
    pub fn context(&self) -> &Context {
        &self.context
    }

    /// Replace the context tag
    pub fn set_context(&mut self, context: Context) {
        self.context = context;
    }

    /// Parameters passed to the backend
    pub fn params(&self) -> &ParamBag {
        &self.params
    }

    /// Mutable parameters, for callers adjusting a command before dispatch
    pub fn params_mut(&mut self) -> &mut ParamBag {
        &mut self.params
    }

    /// Re-execution policy set on this command, if any
    pub fn reexecution(&self) -> Option<ReexecutionPolicy> {
        self.reexecution
    }

    /// Pin the re-execution policy for this command
    pub fn set_reexecution(&mut self, policy: ReexecutionPolicy) {
        self.reexecution = Some(policy);
    }

    /// Drop the pinned policy, falling back to the caller's default
    pub fn clear_reexecution(&mut self) {
        self.reexecution = None;
    }

    /// Policy in effect: the pinned one, else `fallback`
    pub fn effective_reexecution(&self, fallback: ReexecutionPolicy) -> ReexecutionPolicy {
        self.reexecution.unwrap_or(fallback)
    }

    /// Whether a result has been stored
    pub fn is_executed(&self) -> bool {
        self.result.is_some()
    }

    /// Stored result, or [`Error::NotYetExecuted`] naming `command`
    pub fn result(&self, command: &str) -> Result<&T> {
        self.result.as_ref().ok_or_else(|| Error::NotYetExecuted {
            command: command.to_string(),
        })
    }

    /// Consume the state, returning the stored result
    pub fn into_result(self, command: &str) -> Result<T> {
        self.result.ok_or_else(|| Error::NotYetExecuted {
            command: command.to_string(),
        })
    }

    /// Fail with [`Error::BackendMismatch`] unless `backend` is the target
    pub fn validate_backend(&self, backend: &dyn Backend) -> Result<()> {
        let actual = backend.identifier();
        if actual != self.backend_id {
            return Err(Error::BackendMismatch {
                expected: self.backend_id.clone(),
                actual: actual.to_string(),
            });
        }
        Ok(())
    }

    /// Store the result and mark the command executed
    pub fn finalize(&mut self, result: T) {
        self.result = Some(result);
    }
}

/// A typed request against one named backend.
///
/// Implementors provide access to their [`CommandState`] and the backend
/// call itself; everything else has a default.
///
/// # Example
///
/// ```ignore
/// use vufind_search_executor::{Command, LookupCommand};
///
/// let mut cmd = LookupCommand::new("BrowZine", "10.1000/xyz", None);
/// cmd.execute(&browzine)?;
/// let data = cmd.result()?;
/// ```
pub trait Command {
    /// What the backend call produces
    type Output;

    /// Short name used in errors and logs (e.g. "SearchCommand")
    fn name(&self) -> &'static str;

    /// Shared execution state
    fn state(&self) -> &CommandState<Self::Output>;

    /// Shared execution state, mutably
    fn state_mut(&mut self) -> &mut CommandState<Self::Output>;

    /// Consume the command, keeping only its state
    fn into_state(self) -> CommandState<Self::Output>
    where
        Self: Sized;

    /// Perform the backend call. The backend has already been validated.
    fn run(&self, backend: &dyn Backend) -> Result<Self::Output>;

    /// Backend identifier this command expects
    fn target_identifier(&self) -> &str {
        self.state().target_identifier()
    }

    /// Context tag supplied at construction
    fn context(&self) -> &Context {
        self.state().context()
    }

    /// Parameters destined for the backend
    fn search_parameters(&self) -> &ParamBag {
        self.state().params()
    }

    /// Whether the command has completed
    fn is_executed(&self) -> bool {
        self.state().is_executed()
    }

    /// Result of execution, or [`Error::NotYetExecuted`]
    fn result(&self) -> Result<&Self::Output> {
        self.state().result(self.name())
    }

    /// Consume the command and return its result
    fn into_result(self) -> Result<Self::Output>
    where
        Self: Sized,
    {
        let name = self.name();
        self.into_state().into_result(name)
    }

    /// Check that `backend` is the one this command was built for
    fn validate_backend(&self, backend: &dyn Backend) -> Result<()> {
        self.state().validate_backend(backend)
    }

    /// Builder: override the context tag
    fn with_context(mut self, context: Context) -> Self
    where
        Self: Sized,
    {
        self.state_mut().set_context(context);
        self
    }

    /// Builder: pin the re-execution policy for this command
    fn with_reexecution(mut self, policy: ReexecutionPolicy) -> Self
    where
        Self: Sized,
    {
        self.state_mut().set_reexecution(policy);
        self
    }

    /// Store `result` and mark the command executed
    fn finalize_execution(&mut self, result: Self::Output) -> &mut Self
    where
        Self: Sized,
    {
        self.state_mut().finalize(result);
        self
    }

    /// Run the command against `backend`.
    ///
    /// Fails with [`Error::BackendMismatch`] for the wrong backend and with
    /// [`Error::AlreadyExecuted`] on a second run under
    /// [`ReexecutionPolicy::Reject`]. Backend errors pass through unchanged
    /// and leave the command state untouched.
    fn execute(&mut self, backend: &dyn Backend) -> Result<&mut Self>
    where
        Self: Sized,
    {
        self.execute_with_default(backend, ReexecutionPolicy::default())
    }

    /// Like [`execute`](Self::execute), using `fallback` when the command
    /// has no pinned re-execution policy
    fn execute_with_default(
        &mut self,
        backend: &dyn Backend,
        fallback: ReexecutionPolicy,
    ) -> Result<&mut Self>
    where
        Self: Sized,
    {
        self.validate_backend(backend)?;
        let policy = self.state().effective_reexecution(fallback);
        if self.is_executed() && policy == ReexecutionPolicy::Reject {
            return Err(Error::AlreadyExecuted {
                command: self.name().to_string(),
            });
        }
        let output = self.run(backend)?;
        Ok(self.finalize_execution(output))
    }
}
