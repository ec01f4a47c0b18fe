//! Canonical data model for the London crime extract pipeline.
//!
//! The mapping tables in [`schema`] and [`geo`] are configuration data,
//! not logic: every known raw spelling of a column and every known
//! inconsistent geographic name lives in a static table so the policy is
//! visible and testable in one place.

pub mod config;
pub mod geo;
pub mod record;
pub mod schema;

pub use config::PipelineConfig;
pub use geo::geo_synonym;
pub use record::CrimeRecord;
pub use schema::{CanonicalField, resolve_column};
