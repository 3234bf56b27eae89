//! Static instance-type catalog
//!
//! Fixed table of cloud instance types and their capacities, built once
//! and never mutated. Lookups return an explicit `Option` so the caller
//! can surface an unknown key as a user-visible error.

use crate::models::InstanceSpec;

/// The full catalog: (key, cpu cores, memory GiB)
const INSTANCE_TYPES: &[(&str, InstanceSpec)] = &[
    ("t3.micro", InstanceSpec { cpu_cores: 1.0, memory_gib: 1.0 }),
    ("t3.small", InstanceSpec { cpu_cores: 2.0, memory_gib: 2.0 }),
    ("t3.medium", InstanceSpec { cpu_cores: 2.0, memory_gib: 4.0 }),
    ("t3.large", InstanceSpec { cpu_cores: 2.0, memory_gib: 8.0 }),
    ("t3.xlarge", InstanceSpec { cpu_cores: 4.0, memory_gib: 16.0 }),
    ("m5.large", InstanceSpec { cpu_cores: 2.0, memory_gib: 8.0 }),
    ("m5.xlarge", InstanceSpec { cpu_cores: 4.0, memory_gib: 16.0 }),
    ("m5.2xlarge", InstanceSpec { cpu_cores: 8.0, memory_gib: 32.0 }),
    ("m5.4xlarge", InstanceSpec { cpu_cores: 16.0, memory_gib: 64.0 }),
    ("c5.large", InstanceSpec { cpu_cores: 2.0, memory_gib: 4.0 }),
    ("c5.xlarge", InstanceSpec { cpu_cores: 4.0, memory_gib: 8.0 }),
    ("c5.2xlarge", InstanceSpec { cpu_cores: 8.0, memory_gib: 16.0 }),
];

/// Look up an instance type by key
pub fn lookup(key: &str) -> Option<&'static InstanceSpec> {
    INSTANCE_TYPES
        .iter()
        .find(|(name, _)| *name == key)
        .map(|(_, spec)| spec)
}

/// All catalog entries, in display order
pub fn entries() -> impl Iterator<Item = (&'static str, &'static InstanceSpec)> {
    INSTANCE_TYPES.iter().map(|(name, spec)| (*name, spec))
}

/// All instance-type keys, in display order
pub fn names() -> impl Iterator<Item = &'static str> {
    INSTANCE_TYPES.iter().map(|(name, _)| *name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_types_resolve() {
        let micro = lookup("t3.micro").unwrap();
        assert_eq!(micro.cpu_cores, 1.0);
        assert_eq!(micro.memory_gib, 1.0);

        let xlarge = lookup("m5.xlarge").unwrap();
        assert_eq!(xlarge.cpu_cores, 4.0);
        assert_eq!(xlarge.memory_gib, 16.0);

        let c5 = lookup("c5.2xlarge").unwrap();
        assert_eq!(c5.cpu_cores, 8.0);
        assert_eq!(c5.memory_gib, 16.0);
    }

    #[test]
    fn unknown_type_is_none() {
        assert!(lookup("m6i.giant").is_none());
        assert!(lookup("").is_none());
    }

    #[test]
    fn catalog_capacities_are_positive() {
        // The sizing math divides by both capacities.
        for (name, spec) in entries() {
            assert!(spec.cpu_cores > 0.0, "{name} has non-positive cpu");
            assert!(spec.memory_gib > 0.0, "{name} has non-positive memory");
        }
    }

    #[test]
    fn expected_families_present() {
        let names: Vec<_> = names().collect();
        assert_eq!(names.len(), 12);
        for expected in [
            "t3.micro", "t3.small", "t3.medium", "t3.large", "t3.xlarge",
            "m5.large", "m5.xlarge", "m5.2xlarge", "m5.4xlarge",
            "c5.large", "c5.xlarge", "c5.2xlarge",
        ] {
            assert!(names.contains(&expected), "missing {expected}");
        }
    }
}
