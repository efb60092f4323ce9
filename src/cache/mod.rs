//! Persisted key-value store backing the job feed cache
//!
//! This module provides a small key-value abstraction over the filesystem so
//! the feed manager can be constructed against an injected store rather than
//! a global. `FileStore` keeps one JSON file per key in an XDG-compliant
//! cache directory; `MemoryStore` is an in-memory substitute for tests.

mod store;

pub use store::{FileStore, KvStore, MemoryStore};
