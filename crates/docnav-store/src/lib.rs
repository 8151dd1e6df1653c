//! Document store abstraction for docnav.
//!
//! Provides a [`DocStore`] trait for listing and reading the flat directory
//! of document files the orphan detector analyzes. Keeping the traversal
//! behind a trait means:
//!
//! - **Unit testing** without touching the real filesystem
//! - **Clean separation** between the graph algorithm and I/O
//!
//! The crate provides:
//! - [`DocStore`] trait with `list()`, `read()`, and `exists()` methods
//! - [`FsDocStore`] for real directories
//! - [`MockDocStore`] for testing (behind the `mock` feature flag)

mod fs;
#[cfg(feature = "mock")]
mod mock;
mod store;

pub use fs::FsDocStore;
#[cfg(feature = "mock")]
pub use mock::MockDocStore;
pub use store::{DocStore, StoreError};
