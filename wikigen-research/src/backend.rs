//! Trait definition for pluggable search backends.
//!
//! The orchestrator only needs "given a query string, return zero or more
//! raw result records". Every backend (the HTTP search API, the caching
//! wrapper, test doubles) implements [`SearchBackend`] to provide that.

use std::future::Future;

use crate::error::ResearchError;
use crate::types::RawResult;

/// A pluggable search backend.
///
/// Implementations handle their own request construction, authentication and
/// response decoding. All implementations must be `Send + Sync` so one
/// backend can serve every concurrently running query.
pub trait SearchBackend: Send + Sync {
    /// Execute one search query and return the raw records in backend order.
    ///
    /// # Errors
    ///
    /// Returns [`ResearchError`] if the request fails or the response cannot
    /// be decoded. The orchestrator treats any error as "no results".
    fn search(
        &self,
        query: &str,
    ) -> impl Future<Output = Result<Vec<RawResult>, ResearchError>> + Send;

    /// Short backend name used in log fields.
    fn name(&self) -> &str;
}
