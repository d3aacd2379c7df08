//! # API Shared
//!
//! Shared utilities and definitions for MedAssist APIs.
//!
//! Contains:
//! - Response bodies that are not part of the assistant pipeline (`HealthRes`, `MessageRes`)
//! - Shared services like `HealthService`
//!
//! Used by `api-rest`; pipeline types live in `medassist-core`.

pub mod health;

pub use health::{HealthRes, HealthService, MessageRes};
