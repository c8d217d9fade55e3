//! unidex-store — persistence backends for the university directory.
//!
//! This crate provides:
//! - A durable local store backed by one JSON slot ([`LocalUniversityStore`])
//! - A remote HTTP store ([`RemoteUniversityStore`])
//! - Backend selection and configuration ([`StoreConfig`], [`StoreBackend`])
//! - The bundled seed dataset ([`seed`])
//!
//! Both stores implement `unidex_core::repository::UniversityRepository`
//! and are selected once at composition time; callers never branch on the
//! active backend.

mod config;
mod error;
mod local;
mod remote;
pub mod seed;

pub use config::{ConfigError, DEFAULT_STORAGE_FILE, StoreBackend, StoreConfig};
pub use error::StoreError;
pub use local::LocalUniversityStore;
pub use remote::RemoteUniversityStore;
