//! Backend-neutral query model
//!
//! A [`Query`] is either a single search string bound to an optional handler
//! (field or search type) or a boolean group of nested queries.

use serde::{Deserialize, Serialize};

/// Boolean operator joining the members of a [`Query::Group`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Operator {
    /// All members must match
    #[default]
    And,
    /// Any member may match
    Or,
}

/// A search query
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Query {
    /// A single search string
    Simple {
        /// Raw query text
        text: String,
        /// Search handler (e.g. "AllFields", "Title"); `None` uses the backend default
        #[serde(default, skip_serializing_if = "Option::is_none")]
        handler: Option<String>,
    },
    /// A boolean combination of queries
    Group {
        /// How the members combine
        #[serde(default)]
        operator: Operator,
        /// Member queries, in order
        queries: Vec<Query>,
        /// Whether the whole group is negated
        #[serde(default)]
        negated: bool,
    },
}

impl Query {
    /// Build a simple query using the backend's default handler
    pub fn new(text: impl Into<String>) -> Self {
        Query::Simple {
            text: text.into(),
            handler: None,
        }
    }

    /// Build a simple query against a named handler
    pub fn with_handler(text: impl Into<String>, handler: impl Into<String>) -> Self {
        Query::Simple {
            text: text.into(),
            handler: Some(handler.into()),
        }
    }

    /// Build a group of queries
    pub fn group(operator: Operator, queries: Vec<Query>) -> Self {
        Query::Group {
            operator,
            queries,
            negated: false,
        }
    }

    /// Every simple query text, depth-first in order
    pub fn all_terms(&self) -> Vec<&str> {
        let mut out = Vec::new();
        self.collect_terms(&mut out);
        out
    }

    fn collect_terms<'a>(&'a self, out: &mut Vec<&'a str>) {
        match self {
            Query::Simple { text, .. } => out.push(text),
            Query::Group { queries, .. } => {
                for q in queries {
                    q.collect_terms(out);
                }
            }
        }
    }

    /// Whether the query has no search text at all
    pub fn is_empty(&self) -> bool {
        self.all_terms().iter().all(|t| t.trim().is_empty())
    }
}

impl Default for Query {
    fn default() -> Self {
        Query::new("")
    }
}

impl From<&str> for Query {
    fn from(s: &str) -> Self {
        Query::new(s)
    }
}

impl From<String> for Query {
    fn from(s: String) -> Self {
        Query::new(s)
    }
}
