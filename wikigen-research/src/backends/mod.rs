//! Search backend implementations.
//!
//! Each module provides a struct implementing [`crate::backend::SearchBackend`]
//! against a specific search service.

pub mod exa;

pub use exa::ExaBackend;
