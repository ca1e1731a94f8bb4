//! Shared test utilities for the property-manager workspace.
//!
//! This crate provides standardised test fixtures to eliminate
//! duplication across crate test suites. It is a dev-dependency only —
//! never published.
//!
//! # Modules
//!
//! - [`tree`] — [`PropertyTree`] temp-dir fixture for project trees
//! - [`state`] — [`FakeProcessState`] in-memory process state

pub mod state;
pub mod tree;

pub use state::FakeProcessState;
pub use tree::PropertyTree;
