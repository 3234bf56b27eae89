//! Core data models for the sizing engine

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SizingError;

/// Workload kinds the engine knows how to size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WorkloadKind {
    /// KEDA ScaledJob: replica range scaled by a parallelism factor
    JobAutoscaler,
    /// KEDA ScaledObject: plain replica range
    ObjectAutoscaler,
    /// Deployment, optionally behind an HPA
    Deployment,
    /// StatefulSet: fixed replica count
    Statefulset,
}

impl WorkloadKind {
    /// All recognized kinds, in form-selector order
    pub const ALL: [WorkloadKind; 4] = [
        WorkloadKind::JobAutoscaler,
        WorkloadKind::ObjectAutoscaler,
        WorkloadKind::Deployment,
        WorkloadKind::Statefulset,
    ];

    /// Stable string tag, matching the serialized form
    pub fn as_str(&self) -> &'static str {
        match self {
            WorkloadKind::JobAutoscaler => "job-autoscaler",
            WorkloadKind::ObjectAutoscaler => "object-autoscaler",
            WorkloadKind::Deployment => "deployment",
            WorkloadKind::Statefulset => "statefulset",
        }
    }

    /// Human-readable display name
    pub fn display_name(&self) -> &'static str {
        match self {
            WorkloadKind::JobAutoscaler => "KEDA ScaledJob",
            WorkloadKind::ObjectAutoscaler => "KEDA ScaledObject",
            WorkloadKind::Deployment => "Deployment",
            WorkloadKind::Statefulset => "StatefulSet",
        }
    }
}

impl fmt::Display for WorkloadKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WorkloadKind {
    type Err = SizingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        WorkloadKind::ALL
            .into_iter()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| SizingError::UnknownWorkloadKind(s.to_string()))
    }
}

/// Capacity of one cloud instance
///
/// Catalog entries always carry positive capacities; the sizing math
/// divides by both fields.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InstanceSpec {
    /// CPU cores per instance
    pub cpu_cores: f64,
    /// Memory per instance in GiB
    pub memory_gib: f64,
}

/// Aggregate pod and resource bounds for one workload
///
/// Derived on every call, never stored. `min_* <= max_*` holds whenever
/// the supplied replica range is ordered.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ResourceAggregate {
    pub min_pods: u32,
    pub max_pods: u32,
    pub min_memory_mi: f64,
    pub max_memory_mi: f64,
    pub min_cpu_milli: f64,
    pub max_cpu_milli: f64,
}

/// Final output of the engine: the aggregate plus the instance count
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SizingResult {
    #[serde(flatten)]
    pub aggregate: ResourceAggregate,
    /// Minimum number of instances of the chosen type
    pub required_instances: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_tag_round_trip() {
        for kind in WorkloadKind::ALL {
            assert_eq!(kind.as_str().parse::<WorkloadKind>().unwrap(), kind);
        }
    }

    #[test]
    fn unknown_kind_tag_is_an_error() {
        let err = "daemonset".parse::<WorkloadKind>().unwrap_err();
        assert!(matches!(err, SizingError::UnknownWorkloadKind(ref tag) if tag == "daemonset"));
    }

    #[test]
    fn kind_serializes_as_kebab_case() {
        let json = serde_json::to_string(&WorkloadKind::JobAutoscaler).unwrap();
        assert_eq!(json, "\"job-autoscaler\"");
    }
}
