//! Repository trait definition for data access abstraction.
//!
//! All repository operations are async. Two interchangeable backends
//! implement this trait — a durable local store and a remote HTTP store —
//! and callers never branch on which one is active; the backend is chosen
//! once at composition time.
//!
//! Callers are responsible for sequencing: operations are not pipelined
//! against each other, and a caller that goes away before a load resolves
//! must discard the result rather than apply stale state.

use crate::error::UnidexResult;
use crate::filter::UniversityFilter;
use crate::models::university::{University, UniversityPatch};

pub trait UniversityRepository: Send + Sync {
    /// Returns all records satisfying the filter, normalized. An empty
    /// result is valid; filter-only misuse never fails.
    fn list(
        &self,
        filter: UniversityFilter,
    ) -> impl Future<Output = UnidexResult<Vec<University>>> + Send;

    /// Fails with `NotFound` when no record has that id.
    fn get(&self, id: &str) -> impl Future<Output = UnidexResult<University>> + Send;

    /// Fails with `Validation` when `name`, `portalUrl` or `location` is
    /// missing or blank. On success assigns a fresh unique id, normalizes,
    /// persists and returns the stored record.
    fn create(
        &self,
        input: UniversityPatch,
    ) -> impl Future<Output = UnidexResult<University>> + Send;

    /// Shallow-merges the patch onto the existing record, re-normalizes,
    /// persists and returns the result. The patch's own `id` field is
    /// ignored in favor of the given id. Fails with `NotFound` when the id
    /// is absent.
    fn update(
        &self,
        id: &str,
        input: UniversityPatch,
    ) -> impl Future<Output = UnidexResult<University>> + Send;

    /// Removes the record. Fails with `NotFound` when the id is absent.
    fn delete(&self, id: &str) -> impl Future<Output = UnidexResult<()>> + Send;
}
