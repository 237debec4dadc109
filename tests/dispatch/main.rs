//! Dispatch Layer Tests
//!
//! End-to-end tests through the `vufind-search` facade:
//! - Backends implemented outside the crate, one capability at a time
//! - The lookup scenarios against matching and mismatched backends
//! - Service configuration loaded from `search.toml`
//! - One Service shared across threads

mod common;

mod concurrency;
mod config_file;
mod scenarios;
