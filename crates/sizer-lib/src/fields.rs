//! Per-kind input field schemas
//!
//! Declarative description of the inputs each workload kind accepts:
//! label, input type, and an optional visibility predicate evaluated
//! against the current parameter bag. The form layer renders from
//! these tables; the engine itself only reads the resulting bag.

use serde::Serialize;

use crate::models::WorkloadKind;
use crate::params::{keys, ParamBag};

/// Input widget for a field
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "snake_case", tag = "type")]
pub enum FieldType {
    /// Numeric input with a lower bound and a placeholder example
    Number { min: f64, placeholder: &'static str },
    /// On/off toggle
    Toggle,
}

/// Visibility predicate: shown only when `field` equals `equals`
///
/// An absent flag evaluates as false, so a field gated on
/// `hasHPA == false` is visible before the toggle is ever touched.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ShowWhen {
    pub field: &'static str,
    pub equals: bool,
}

/// One input field in a workload kind's form
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FieldSpec {
    pub id: &'static str,
    pub label: &'static str,
    #[serde(flatten)]
    pub field_type: FieldType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_when: Option<ShowWhen>,
}

impl FieldSpec {
    const fn number(id: &'static str, label: &'static str, min: f64, placeholder: &'static str) -> Self {
        Self { id, label, field_type: FieldType::Number { min, placeholder }, show_when: None }
    }

    const fn toggle(id: &'static str, label: &'static str) -> Self {
        Self { id, label, field_type: FieldType::Toggle, show_when: None }
    }

    const fn when(mut self, field: &'static str, equals: bool) -> Self {
        self.show_when = Some(ShowWhen { field, equals });
        self
    }

    /// Whether this field should currently be shown
    pub fn is_visible(&self, values: &ParamBag) -> bool {
        match self.show_when {
            Some(cond) => values.flag(cond.field) == cond.equals,
            None => true,
        }
    }
}

const SCALED_JOB_FIELDS: &[FieldSpec] = &[
    FieldSpec::number(keys::MIN_REPLICA_COUNT, "Min Replica Count", 0.0, "1"),
    FieldSpec::number(keys::MAX_REPLICA_COUNT, "Max Replica Count", 1.0, "10"),
    FieldSpec::number(keys::PARALLELISM, "Parallelism", 1.0, "1"),
    FieldSpec::number(keys::REQUESTED_MEMORY, "Requested Memory (Mi)", 1.0, "256"),
    FieldSpec::number(keys::REQUESTED_CPU, "Requested CPU (m)", 1.0, "100"),
    FieldSpec::number(keys::MAX_MEMORY, "Max Memory (Mi)", 1.0, "512"),
];

const SCALED_OBJECT_FIELDS: &[FieldSpec] = &[
    FieldSpec::number(keys::MIN_REPLICA_COUNT, "Min Replica Count", 0.0, "1"),
    FieldSpec::number(keys::MAX_REPLICA_COUNT, "Max Replica Count", 1.0, "10"),
    FieldSpec::number(keys::REQUESTED_MEMORY, "Requested Memory (Mi)", 1.0, "256"),
    FieldSpec::number(keys::REQUESTED_CPU, "Requested CPU (m)", 1.0, "100"),
    FieldSpec::number(keys::MAX_MEMORY, "Max Memory (Mi)", 1.0, "512"),
];

const DEPLOYMENT_FIELDS: &[FieldSpec] = &[
    FieldSpec::toggle(keys::HAS_HPA, "Has HPA"),
    FieldSpec::number(keys::REPLICAS, "Replicas", 1.0, "3").when(keys::HAS_HPA, false),
    FieldSpec::number(keys::MIN_REPLICA_COUNT, "Min Replica Count", 0.0, "1").when(keys::HAS_HPA, true),
    FieldSpec::number(keys::MAX_REPLICA_COUNT, "Max Replica Count", 1.0, "10").when(keys::HAS_HPA, true),
    FieldSpec::number(keys::REQUESTED_MEMORY, "Requested Memory (Mi)", 1.0, "256"),
    FieldSpec::number(keys::REQUESTED_CPU, "Requested CPU (m)", 1.0, "100"),
    FieldSpec::number(keys::MAX_MEMORY, "Max Memory (Mi)", 1.0, "512"),
];

const STATEFUL_SET_FIELDS: &[FieldSpec] = &[
    FieldSpec::number(keys::REPLICAS, "Replicas", 1.0, "3"),
    FieldSpec::number(keys::REQUESTED_MEMORY, "Requested Memory (Mi)", 1.0, "256"),
    FieldSpec::number(keys::REQUESTED_CPU, "Requested CPU (m)", 1.0, "100"),
    FieldSpec::number(keys::MAX_MEMORY, "Max Memory (Mi)", 1.0, "512"),
];

/// Full field list for a workload kind, in form order
pub fn fields_for(kind: WorkloadKind) -> &'static [FieldSpec] {
    match kind {
        WorkloadKind::JobAutoscaler => SCALED_JOB_FIELDS,
        WorkloadKind::ObjectAutoscaler => SCALED_OBJECT_FIELDS,
        WorkloadKind::Deployment => DEPLOYMENT_FIELDS,
        WorkloadKind::Statefulset => STATEFUL_SET_FIELDS,
    }
}

/// Fields currently visible given the bag's values
pub fn visible_fields(kind: WorkloadKind, values: &ParamBag) -> Vec<&'static FieldSpec> {
    fields_for(kind).iter().filter(|f| f.is_visible(values)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_kind_has_a_schema() {
        for kind in WorkloadKind::ALL {
            assert!(!fields_for(kind).is_empty());
        }
    }

    #[test]
    fn deployment_defaults_to_fixed_replica_fields() {
        // hasHPA unset reads as false, so the replica range stays hidden
        let visible = visible_fields(WorkloadKind::Deployment, &ParamBag::new());
        let ids: Vec<_> = visible.iter().map(|f| f.id).collect();

        assert!(ids.contains(&keys::REPLICAS));
        assert!(!ids.contains(&keys::MIN_REPLICA_COUNT));
        assert!(!ids.contains(&keys::MAX_REPLICA_COUNT));
    }

    #[test]
    fn deployment_hpa_toggle_swaps_replica_fields() {
        let values = ParamBag::new().with(keys::HAS_HPA, true);
        let visible = visible_fields(WorkloadKind::Deployment, &values);
        let ids: Vec<_> = visible.iter().map(|f| f.id).collect();

        assert!(!ids.contains(&keys::REPLICAS));
        assert!(ids.contains(&keys::MIN_REPLICA_COUNT));
        assert!(ids.contains(&keys::MAX_REPLICA_COUNT));
        // the toggle itself and the resource fields stay visible
        assert!(ids.contains(&keys::HAS_HPA));
        assert!(ids.contains(&keys::REQUESTED_MEMORY));
    }

    #[test]
    fn unconditional_fields_are_always_visible() {
        for kind in [WorkloadKind::JobAutoscaler, WorkloadKind::ObjectAutoscaler, WorkloadKind::Statefulset] {
            let all = fields_for(kind).len();
            assert_eq!(visible_fields(kind, &ParamBag::new()).len(), all);
        }
    }

    #[test]
    fn scaled_job_exposes_parallelism() {
        let ids: Vec<_> = fields_for(WorkloadKind::JobAutoscaler).iter().map(|f| f.id).collect();
        assert!(ids.contains(&keys::PARALLELISM));

        let ids: Vec<_> = fields_for(WorkloadKind::ObjectAutoscaler).iter().map(|f| f.id).collect();
        assert!(!ids.contains(&keys::PARALLELISM));
    }
}
