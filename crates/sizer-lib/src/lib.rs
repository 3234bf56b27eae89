//! Sizing engine for Kubernetes workloads
//!
//! This crate provides the core functionality for:
//! - Per-workload-kind pod/memory/CPU aggregation
//! - Cloud instance count estimation
//! - The static instance-type catalog
//! - Per-kind input field schemas with visibility rules
//!
//! Everything here is synchronous, stateless and side-effect free: the
//! same inputs always produce the same `SizingResult`.

pub mod catalog;
pub mod error;
pub mod fields;
pub mod models;
pub mod params;
pub mod sizing;

pub use error::SizingError;
pub use models::{InstanceSpec, ResourceAggregate, SizingResult, WorkloadKind};
pub use params::ParamBag;
pub use sizing::{estimate, estimate_for_tag};
