use k8s_openapi::api::core::v1::Pod;
use tracing::debug;

use crate::types::{ConditionKind, PodPhase, PodSnapshot};

pub fn parse_pod_phase(phase: &str) -> Option<PodPhase> {
    match phase {
        "Pending" => Some(PodPhase::Pending),
        "Running" => Some(PodPhase::Running),
        "Succeeded" => Some(PodPhase::Succeeded),
        "Failed" => Some(PodPhase::Failed),
        "Unknown" => Some(PodPhase::Unknown),
        _ => None,
    }
}

/// Map a pod condition type to the kinds we track. Kubernetes calls them
/// `PodScheduled`, `Initialized`, `ContainersReady` and `Ready` on the wire.
pub fn parse_condition_kind(type_: &str) -> Option<ConditionKind> {
    match type_ {
        "PodScheduled" => Some(ConditionKind::PodScheduled),
        "Initialized" => Some(ConditionKind::PodInitialized),
        "ContainersReady" => Some(ConditionKind::ContainersReady),
        "Ready" => Some(ConditionKind::PodReady),
        _ => None,
    }
}

/// Only `"True"` counts; `"False"` and `"Unknown"` both read as false.
pub fn parse_condition_status(status: &str) -> bool {
    status == "True"
}

pub fn snapshot_from_pod(pod: &Pod) -> PodSnapshot {
    let status = pod.status.as_ref();

    let phase = status
        .and_then(|s| s.phase.as_deref())
        .map(|p| {
            parse_pod_phase(p).unwrap_or_else(|| {
                debug!("unrecognized phase {:?} on pod {:?}, treating as Unknown", p, pod.metadata.name);
                PodPhase::Unknown
            })
        })
        .unwrap_or(PodPhase::Unknown);

    let mut snapshot = PodSnapshot::new(phase);
    if let Some(conditions) = status.and_then(|s| s.conditions.as_ref()) {
        for c in conditions {
            if let Some(kind) = parse_condition_kind(&c.type_) {
                snapshot.set_condition(kind, parse_condition_status(&c.status));
            }
        }
    }
    snapshot
}

#[cfg(test)]
mod tests {
    use super::*;
    use k8s_openapi::api::core::v1::{PodCondition, PodStatus};
    use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;

    fn create_test_pod(name: &str, phase: Option<&str>, conditions: &[(&str, &str)]) -> Pod {
        Pod {
            metadata: ObjectMeta {
                name: Some(name.to_string()),
                namespace: Some("default".to_string()),
                ..Default::default()
            },
            status: Some(PodStatus {
                phase: phase.map(|p| p.to_string()),
                conditions: Some(
                    conditions
                        .iter()
                        .map(|(type_, status)| PodCondition {
                            type_: type_.to_string(),
                            status: status.to_string(),
                            ..Default::default()
                        })
                        .collect(),
                ),
                ..Default::default()
            }),
            ..Default::default()
        }
    }

    #[test]
    fn test_parse_pod_phase() {
        assert_eq!(parse_pod_phase("Pending"), Some(PodPhase::Pending));
        assert_eq!(parse_pod_phase("Running"), Some(PodPhase::Running));
        assert_eq!(parse_pod_phase("Succeeded"), Some(PodPhase::Succeeded));
        assert_eq!(parse_pod_phase("Failed"), Some(PodPhase::Failed));
        assert_eq!(parse_pod_phase("Unknown"), Some(PodPhase::Unknown));
        assert_eq!(parse_pod_phase("running"), None);
        assert_eq!(parse_pod_phase(""), None);
    }

    #[test]
    fn test_parse_condition_kind_uses_wire_names() {
        assert_eq!(parse_condition_kind("PodScheduled"), Some(ConditionKind::PodScheduled));
        assert_eq!(parse_condition_kind("Initialized"), Some(ConditionKind::PodInitialized));
        assert_eq!(parse_condition_kind("ContainersReady"), Some(ConditionKind::ContainersReady));
        assert_eq!(parse_condition_kind("Ready"), Some(ConditionKind::PodReady));
        assert_eq!(parse_condition_kind("DisruptionTarget"), None);
        assert_eq!(parse_condition_kind("PodReadyToStartContainers"), None);
    }

    #[test]
    fn test_parse_condition_status() {
        assert!(parse_condition_status("True"));
        assert!(!parse_condition_status("False"));
        assert!(!parse_condition_status("Unknown"));
        assert!(!parse_condition_status("true"));
    }

    #[test]
    fn test_snapshot_from_running_ready_pod() {
        let pod = create_test_pod(
            "web-1",
            Some("Running"),
            &[
                ("Initialized", "True"),
                ("Ready", "True"),
                ("ContainersReady", "True"),
                ("PodScheduled", "True"),
            ],
        );
        let snapshot = snapshot_from_pod(&pod);
        assert_eq!(snapshot.phase, PodPhase::Running);
        assert_eq!(snapshot.conditions.len(), 4);
        assert!(snapshot.condition(ConditionKind::PodReady));
        assert!(snapshot.condition(ConditionKind::PodInitialized));
    }

    #[test]
    fn test_snapshot_ignores_untracked_conditions() {
        let pod = create_test_pod(
            "evicted",
            Some("Failed"),
            &[("DisruptionTarget", "True"), ("PodScheduled", "True")],
        );
        let snapshot = snapshot_from_pod(&pod);
        assert_eq!(snapshot.phase, PodPhase::Failed);
        assert_eq!(snapshot.conditions.len(), 1);
        assert!(snapshot.condition(ConditionKind::PodScheduled));
    }

    #[test]
    fn test_snapshot_unknown_status_reads_false() {
        let pod = create_test_pod("flaky", Some("Running"), &[("Ready", "Unknown")]);
        let snapshot = snapshot_from_pod(&pod);
        assert_eq!(snapshot.conditions.get(&ConditionKind::PodReady), Some(&false));
    }

    #[test]
    fn test_snapshot_missing_or_unrecognized_phase() {
        let pod = create_test_pod("no-phase", None, &[]);
        assert_eq!(snapshot_from_pod(&pod).phase, PodPhase::Unknown);

        let pod = create_test_pod("odd-phase", Some("Terminating"), &[]);
        assert_eq!(snapshot_from_pod(&pod).phase, PodPhase::Unknown);

        let pod = Pod::default();
        let snapshot = snapshot_from_pod(&pod);
        assert_eq!(snapshot.phase, PodPhase::Unknown);
        assert!(snapshot.conditions.is_empty());
    }

    #[test]
    fn test_snapshot_duplicate_condition_last_wins() {
        let pod = create_test_pod(
            "dup",
            Some("Pending"),
            &[("PodScheduled", "True"), ("PodScheduled", "False")],
        );
        assert!(!snapshot_from_pod(&pod).condition(ConditionKind::PodScheduled));
    }
}
