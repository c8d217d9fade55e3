//! File-backed implementation of [`UniversityRepository`].
//!
//! The whole collection lives in one JSON slot. On first access the slot
//! is seeded from the bundled dataset and persisted immediately; content
//! that fails to parse is silently reset to the seed (self-healing,
//! logged but never surfaced to the caller). Every mutation reads the
//! full collection, modifies it in memory, and writes it back in full.
//!
//! Operations are async for interface symmetry with the remote store even
//! though file access could be synchronous; an optional artificial latency
//! exists for UI-testing realism only.

use std::io::ErrorKind;
use std::path::PathBuf;
use std::time::Duration;

use tracing::{info, warn};
use unidex_core::error::{UnidexError, UnidexResult};
use unidex_core::filter::UniversityFilter;
use unidex_core::models::university::{University, UniversityPatch};
use unidex_core::normalize::normalize;
use unidex_core::repository::UniversityRepository;
use uuid::Uuid;

use crate::error::StoreError;
use crate::seed;

pub struct LocalUniversityStore {
    path: PathBuf,
    latency: Option<Duration>,
}

impl LocalUniversityStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            latency: None,
        }
    }

    /// Adds an artificial delay before every operation. No correctness
    /// meaning; useful for exercising loading states in a UI.
    pub fn with_latency(path: impl Into<PathBuf>, latency: Duration) -> Self {
        Self {
            path: path.into(),
            latency: Some(latency),
        }
    }

    async fn simulate_latency(&self) {
        if let Some(latency) = self.latency {
            tokio::time::sleep(latency).await;
        }
    }

    /// Reads and normalizes the full collection, seeding or self-healing
    /// the slot as needed.
    async fn load(&self) -> Result<Vec<University>, StoreError> {
        let raw = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                info!(path = %self.path.display(), "no persisted collection, seeding");
                return self.reset_to_seed().await;
            }
            Err(err) => return Err(err.into()),
        };

        match serde_json::from_slice::<Vec<University>>(&raw) {
            Ok(universities) => Ok(universities.into_iter().map(normalize).collect()),
            Err(err) => {
                warn!(
                    path = %self.path.display(),
                    error = %err,
                    "persisted collection is corrupt, resetting to seed"
                );
                self.reset_to_seed().await
            }
        }
    }

    async fn reset_to_seed(&self) -> Result<Vec<University>, StoreError> {
        let universities: Vec<University> =
            seed::universities().into_iter().map(normalize).collect();
        self.persist(&universities).await?;
        Ok(universities)
    }

    async fn persist(&self, universities: &[University]) -> Result<(), StoreError> {
        let json = serde_json::to_vec_pretty(universities)?;
        tokio::fs::write(&self.path, json).await?;
        Ok(())
    }
}

impl UniversityRepository for LocalUniversityStore {
    async fn list(&self, filter: UniversityFilter) -> UnidexResult<Vec<University>> {
        self.simulate_latency().await;
        let universities = self.load().await?;
        Ok(universities
            .into_iter()
            .filter(|u| filter.matches(u))
            .collect())
    }

    async fn get(&self, id: &str) -> UnidexResult<University> {
        self.simulate_latency().await;
        let universities = self.load().await?;
        universities
            .into_iter()
            .find(|u| u.id == id)
            .ok_or_else(|| UnidexError::NotFound { id: id.to_owned() })
    }

    async fn create(&self, input: UniversityPatch) -> UnidexResult<University> {
        self.simulate_latency().await;
        input.validate_for_create()?;

        let mut universities = self.load().await?;
        let university = normalize(input.into_university(Uuid::new_v4().to_string()));
        universities.push(university.clone());
        self.persist(&universities).await?;
        Ok(university)
    }

    async fn update(&self, id: &str, input: UniversityPatch) -> UnidexResult<University> {
        self.simulate_latency().await;
        let mut universities = self.load().await?;
        let index = universities
            .iter()
            .position(|u| u.id == id)
            .ok_or_else(|| UnidexError::NotFound { id: id.to_owned() })?;

        let mut updated = universities[index].clone();
        input.apply_to(&mut updated);
        let updated = normalize(updated);

        universities[index] = updated.clone();
        self.persist(&universities).await?;
        Ok(updated)
    }

    async fn delete(&self, id: &str) -> UnidexResult<()> {
        self.simulate_latency().await;
        let mut universities = self.load().await?;
        let before = universities.len();
        universities.retain(|u| u.id != id);
        if universities.len() == before {
            return Err(UnidexError::NotFound { id: id.to_owned() });
        }
        self.persist(&universities).await?;
        Ok(())
    }
}
