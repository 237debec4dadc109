//! Command context tags
//!
//! A [`Context`] describes why a command was issued. The command never looks
//! at it; backends and listeners may.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

/// Caller-supplied tag describing the purpose of a command invocation.
///
/// Known contexts have dedicated variants. Anything else is carried verbatim
/// in [`Context::Other`]. Equality and hashing go by the string form, so
/// `Other("search")` equals `Search`; use [`Context::other`] to get the
/// dedicated variant directly.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub enum Context {
    /// Keyword or structured search
    Search,
    /// Single record fetch
    Retrieve,
    /// Multi-record fetch
    RetrieveBatch,
    /// "More like this" lookup
    Similar,
    /// Random record sample
    Random,
    /// Identifier-only search
    GetIds,
    /// Identifier lookup (DOI, ISSN, ...) against a link resolver
    Lookup,
    /// Caller-defined context
    Other(String),
}

impl Context {
    /// Context for `name`, mapping known names to their variants
    pub fn other(name: impl Into<String>) -> Self {
        Context::from(name.into())
    }

    /// Canonical string form
    pub fn as_str(&self) -> &str {
        match self {
            Context::Search => "search",
            Context::Retrieve => "retrieve",
            Context::RetrieveBatch => "retrieveBatch",
            Context::Similar => "similar",
            Context::Random => "random",
            Context::GetIds => "getIds",
            Context::Lookup => "lookup",
            Context::Other(s) => s,
        }
    }
}

impl PartialEq for Context {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

impl Eq for Context {}

impl Hash for Context {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_str().hash(state);
    }
}

impl fmt::Display for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for Context {
    fn from(s: &str) -> Self {
        match s {
            "search" => Context::Search,
            "retrieve" => Context::Retrieve,
            "retrieveBatch" => Context::RetrieveBatch,
            "similar" => Context::Similar,
            "random" => Context::Random,
            "getIds" => Context::GetIds,
            "lookup" => Context::Lookup,
            other => Context::Other(other.to_string()),
        }
    }
}

impl From<String> for Context {
    fn from(s: String) -> Self {
        match Context::from(s.as_str()) {
            Context::Other(_) => Context::Other(s),
            known => known,
        }
    }
}

impl From<Context> for String {
    fn from(ctx: Context) -> Self {
        ctx.as_str().to_string()
    }
}

impl FromStr for Context {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Context::from(s))
    }
}
