//! Instance count estimation
//!
//! Given a pod count and aggregate memory/CPU demand, computes the
//! minimum number of instances of one type that satisfies all three
//! constraints: memory capacity, CPU capacity, and pod density.

use crate::models::InstanceSpec;

/// Operational ceiling on pods scheduled per instance
pub const MAX_PODS_PER_INSTANCE: u32 = 110;

/// Minimum instances of `spec` needed for the given demand
///
/// Memory arrives in Mi and CPU in milli-cores; both are converted to
/// the catalog's units (GiB, cores) before dividing. A zero pod count
/// short-circuits to zero: an idle workload reserves no capacity.
pub fn required_instances(pods: u32, memory_mi: f64, cpu_milli: f64, spec: &InstanceSpec) -> u32 {
    if pods == 0 {
        return 0;
    }

    let memory_gib = memory_mi / 1024.0;
    let cpu_cores = cpu_milli / 1000.0;

    let for_memory = (memory_gib / spec.memory_gib).ceil() as u32;
    let for_cpu = (cpu_cores / spec.cpu_cores).ceil() as u32;
    let for_pods = (f64::from(pods) / f64::from(MAX_PODS_PER_INSTANCE)).ceil() as u32;

    for_memory.max(for_cpu).max(for_pods)
}
