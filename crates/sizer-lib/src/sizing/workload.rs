//! Per-workload-kind resource calculators
//!
//! Each kind derives a pair of pod bounds from its parameters; the
//! memory/CPU aggregation on top of those bounds is shared. All
//! defaulting and clamping happens in one normalization step per kind,
//! before any arithmetic.

use crate::models::{ResourceAggregate, WorkloadKind};
use crate::params::{keys, ParamBag};

/// Min/max pod counts for one workload
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PodBounds {
    min: u32,
    max: u32,
}

impl PodBounds {
    fn new(min: f64, max: f64) -> Self {
        Self { min: to_pods(min), max: to_pods(max) }
    }

    fn fixed(replicas: f64) -> Self {
        let pods = to_pods(replicas);
        Self { min: pods, max: pods }
    }
}

/// Normalized per-pod resource figures, shared by all kinds
#[derive(Debug, Clone, Copy, PartialEq)]
struct PerPodResources {
    requested_memory_mi: f64,
    max_memory_mi: f64,
    requested_cpu_milli: f64,
}

impl PerPodResources {
    fn from_params(params: &ParamBag) -> Self {
        let requested_memory_mi = params.number_or_zero(keys::REQUESTED_MEMORY);
        // A missing or non-positive limit falls back to the request, so
        // the limit never ends up below the request.
        let max_memory_mi = match params.number(keys::MAX_MEMORY) {
            Some(v) if v > 0.0 => v,
            _ => requested_memory_mi,
        };
        Self {
            requested_memory_mi,
            max_memory_mi,
            requested_cpu_milli: params.number_or_zero(keys::REQUESTED_CPU),
        }
    }
}

/// Clamp a raw pod figure into a whole pod count
fn to_pods(value: f64) -> u32 {
    value.max(0.0) as u32
}

/// Pod bounds for a workload kind
fn pod_bounds(kind: WorkloadKind, params: &ParamBag) -> PodBounds {
    match kind {
        WorkloadKind::JobAutoscaler => {
            // Each scaled job runs `parallelism` pods, so the replica
            // range multiplies by it. Unset or non-positive means 1.
            let parallelism = params
                .number(keys::PARALLELISM)
                .filter(|p| *p > 0.0)
                .unwrap_or(1.0);
            PodBounds::new(
                params.number_or_zero(keys::MIN_REPLICA_COUNT) * parallelism,
                params.number_or_zero(keys::MAX_REPLICA_COUNT) * parallelism,
            )
        }
        WorkloadKind::ObjectAutoscaler => PodBounds::new(
            params.number_or_zero(keys::MIN_REPLICA_COUNT),
            params.number_or_zero(keys::MAX_REPLICA_COUNT),
        ),
        WorkloadKind::Deployment => {
            if params.flag(keys::HAS_HPA) {
                PodBounds::new(
                    params.number_or_zero(keys::MIN_REPLICA_COUNT),
                    params.number_or_zero(keys::MAX_REPLICA_COUNT),
                )
            } else {
                PodBounds::fixed(params.number_or_zero(keys::REPLICAS))
            }
        }
        WorkloadKind::Statefulset => PodBounds::fixed(params.number_or_zero(keys::REPLICAS)),
    }
}

/// Compute the resource aggregate for one workload kind
///
/// Lower bounds scale the requested figures by `min_pods`; upper bounds
/// scale by `max_pods`, with memory using the per-pod limit. CPU has no
/// separate limit, so both CPU bounds use the requested value.
pub fn aggregate(kind: WorkloadKind, params: &ParamBag) -> ResourceAggregate {
    let bounds = pod_bounds(kind, params);
    let per_pod = PerPodResources::from_params(params);

    ResourceAggregate {
        min_pods: bounds.min,
        max_pods: bounds.max,
        min_memory_mi: f64::from(bounds.min) * per_pod.requested_memory_mi,
        max_memory_mi: f64::from(bounds.max) * per_pod.max_memory_mi,
        min_cpu_milli: f64::from(bounds.min) * per_pod.requested_cpu_milli,
        max_cpu_milli: f64::from(bounds.max) * per_pod.requested_cpu_milli,
    }
}
