//! Error types for the sizing engine
//!
//! Only two things can fail, and both are input-validation failures:
//! an instance-type key missing from the catalog, or a workload-kind
//! tag the engine does not recognize. Malformed numeric parameters are
//! never errors; they are clamped or defaulted before the arithmetic.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SizingError {
    /// Instance-type key not present in the catalog
    #[error("unknown instance type: {0}")]
    UnknownInstanceType(String),

    /// Workload-kind tag not one of the recognized kinds
    #[error("unknown workload kind: {0}")]
    UnknownWorkloadKind(String),
}
