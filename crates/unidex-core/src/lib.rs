//! unidex-core — domain models and data-access contracts for the
//! university directory.
//!
//! This crate provides:
//! - The university record schema ([`models`])
//! - The repository abstraction implemented by each backend ([`repository`])
//! - Filter predicate evaluation for list views ([`filter`])
//! - Read/write-time record repair ([`normalize`])
//! - Pre-submission cleanup of edited form state ([`sanitize`])
//! - Error types ([`error`])
//!
//! Storage backends live in `unidex-store`; this crate has no I/O.

pub mod error;
pub mod filter;
pub mod models;
pub mod normalize;
pub mod repository;
pub mod sanitize;
