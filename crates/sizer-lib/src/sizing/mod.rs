//! Sizing orchestration
//!
//! Dispatches a parameter bag to the calculator for its workload kind,
//! then feeds the aggregate's upper bounds into the instance-count
//! estimate for the chosen instance type.

pub mod instances;
pub mod workload;

use tracing::debug;

use crate::catalog;
use crate::error::SizingError;
use crate::models::{SizingResult, WorkloadKind};
use crate::params::ParamBag;

pub use instances::{required_instances, MAX_PODS_PER_INSTANCE};
pub use workload::aggregate;

/// Compute the full sizing result for one workload
///
/// Fails only when `instance_type` is not in the catalog; every other
/// input problem is recovered by the calculators' defaulting rules.
pub fn estimate(
    kind: WorkloadKind,
    params: &ParamBag,
    instance_type: &str,
) -> Result<SizingResult, SizingError> {
    let spec = catalog::lookup(instance_type)
        .ok_or_else(|| SizingError::UnknownInstanceType(instance_type.to_string()))?;

    let aggregate = workload::aggregate(kind, params);
    debug!(
        kind = %kind,
        min_pods = aggregate.min_pods,
        max_pods = aggregate.max_pods,
        "computed workload aggregate"
    );

    // Instances are provisioned for the scaled-out ceiling.
    let required_instances = instances::required_instances(
        aggregate.max_pods,
        aggregate.max_memory_mi,
        aggregate.max_cpu_milli,
        spec,
    );

    Ok(SizingResult { aggregate, required_instances })
}

/// Like [`estimate`], but accepts the raw workload-kind tag
///
/// An unrecognized tag fails with [`SizingError::UnknownWorkloadKind`].
pub fn estimate_for_tag(
    kind_tag: &str,
    params: &ParamBag,
    instance_type: &str,
) -> Result<SizingResult, SizingError> {
    let kind: WorkloadKind = kind_tag.parse()?;
    estimate(kind, params, instance_type)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::keys;

    fn object_params() -> ParamBag {
        ParamBag::new()
            .with(keys::MIN_REPLICA_COUNT, 2.0)
            .with(keys::MAX_REPLICA_COUNT, 20.0)
            .with(keys::REQUESTED_MEMORY, 512.0)
            .with(keys::REQUESTED_CPU, 200.0)
            .with(keys::MAX_MEMORY, 1024.0)
    }

    #[test]
    fn object_autoscaler_end_to_end() {
        let result = estimate(WorkloadKind::ObjectAutoscaler, &object_params(), "m5.xlarge").unwrap();

        assert_eq!(result.aggregate.min_pods, 2);
        assert_eq!(result.aggregate.max_pods, 20);
        assert_eq!(result.aggregate.min_memory_mi, 1024.0);
        assert_eq!(result.aggregate.max_memory_mi, 20480.0);
        assert_eq!(result.aggregate.min_cpu_milli, 400.0);
        assert_eq!(result.aggregate.max_cpu_milli, 4000.0);
        // memory bound: 20 GiB / 16 GiB = 2; cpu: 4 / 4 = 1; pods: 20 / 110 = 1
        assert_eq!(result.required_instances, 2);
    }

    #[test]
    fn unknown_instance_type_is_fatal() {
        let err = estimate(WorkloadKind::Deployment, &ParamBag::new(), "m7g.mythical").unwrap_err();
        assert_eq!(err, SizingError::UnknownInstanceType("m7g.mythical".to_string()));
    }

    #[test]
    fn tag_dispatch_matches_typed_dispatch() {
        let params = object_params();
        let typed = estimate(WorkloadKind::ObjectAutoscaler, &params, "m5.xlarge").unwrap();
        let tagged = estimate_for_tag("object-autoscaler", &params, "m5.xlarge").unwrap();
        assert_eq!(typed, tagged);
    }

    #[test]
    fn unknown_tag_is_fatal() {
        let err = estimate_for_tag("cronjob", &ParamBag::new(), "m5.xlarge").unwrap_err();
        assert_eq!(err, SizingError::UnknownWorkloadKind("cronjob".to_string()));
    }

    #[test]
    fn estimate_is_idempotent() {
        let params = object_params();
        let first = estimate(WorkloadKind::ObjectAutoscaler, &params, "t3.small").unwrap();
        let second = estimate(WorkloadKind::ObjectAutoscaler, &params, "t3.small").unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn idle_workload_needs_no_instances() {
        let params = ParamBag::new()
            .with(keys::REPLICAS, 0.0)
            .with(keys::REQUESTED_MEMORY, 256.0)
            .with(keys::REQUESTED_CPU, 100.0);
        let result = estimate(WorkloadKind::Statefulset, &params, "t3.micro").unwrap();
        assert_eq!(result.required_instances, 0);
    }
}
