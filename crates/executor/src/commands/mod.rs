//! Concrete commands, one per backend operation.
//!
//! | Module | Command | Capability | Output |
//! |--------|---------|------------|--------|
//! | `search` | `SearchCommand` | `SearchBackend` | `RecordCollection` |
//! | `retrieve` | `RetrieveCommand` | `RetrieveBackend` | `RecordCollection` |
//! | `retrieve_batch` | `RetrieveBatchCommand` | `RetrieveBatchBackend`, else `RetrieveBackend` per id | `RecordCollection` |
//! | `similar` | `SimilarCommand` | `SimilarBackend` | `RecordCollection` |
//! | `random` | `RandomCommand` | `RandomBackend` | `RecordCollection` |
//! | `get_ids` | `GetIdsCommand` | `GetIdsBackend`, else `SearchBackend` | `RecordCollection` |
//! | `lookup` | `LookupCommand` | `LookupBackend` | JSON value |

pub mod get_ids;
pub mod lookup;
pub mod random;
pub mod retrieve;
pub mod retrieve_batch;
pub mod search;
pub mod similar;

use vufind_search_core::{Backend, Error};

/// Default page size for search-like commands
pub const DEFAULT_LIMIT: u64 = 20;

/// Error for a backend lacking the capability `operation` needs
pub(crate) fn unsupported(backend: &dyn Backend, operation: &str) -> Error {
    Error::UnsupportedOperation {
        backend: backend.identifier().to_string(),
        operation: operation.to_string(),
    }
}
