//! jobdeck library
//!
//! Exposes the cache store, CLI parsing, data models, and the job feed
//! cache manager for use in integration tests.

pub mod cache;
pub mod cli;
pub mod data;
pub mod feed;
