//! Domain models for the university directory.
//!
//! These are the core types shared across all crates.

pub mod degree;
pub mod university;
