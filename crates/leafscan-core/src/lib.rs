//! # leafscan-core - Core Domain Types
//!
//! Foundation crate for Leafscan. Provides the diagnostic result model, the
//! disease catalog, error handling, and logging setup.
//!
//! This crate has **zero internal dependencies** -- it only depends on
//! external crates (serde, thiserror, tracing).
//!
//! ## Public API
//!
//! ### Domain Types (`diagnosis`)
//! - [`DiagnosticResult`] - Structured output of one analysis call
//! - [`ThermalAnalysis`] - Infrared-only findings
//! - [`Modality`], [`Confidence`], [`Severity`], [`DiseaseCategory`]
//! - [`ModelMetadata`] - Display-only model information
//!
//! ### Disease Catalog (`catalog`)
//! - [`DiseaseInfo`], [`DISEASE_CATALOG`], [`lookup()`]
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with `fatal` vs `recoverable` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use leafscan_core::prelude::*;
//! ```

pub mod catalog;
pub mod diagnosis;
pub mod error;
pub mod logging;

/// Prelude for common imports used throughout all Leafscan crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, instrument, trace, warn};
}

// Re-export commonly used types at crate root for convenience
pub use catalog::{lookup, DiseaseInfo, DISEASE_CATALOG};
pub use diagnosis::{
    Confidence, ConfidenceLevel, DiagnosticResult, DiseaseCategory, Modality, ModelMetadata,
    Severity, ThermalAnalysis, WaterContent,
};
pub use error::{Error, Result, ResultExt};
