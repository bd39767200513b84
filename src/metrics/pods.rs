use crate::types::{Category, ConditionKind, PodPhase, PodSnapshot};

/// Classify a pod into the categories it should be counted under.
///
/// Categories overlap: a ready pod is counted as both `ready` and `running`
/// and nothing else. A pod that is not ready gets at most one category from
/// its phase branch plus at most one blocking condition, reported in
/// scheduling, initialization, container readiness order.
///
/// `Category::Total` is never returned; the aggregator counts pods itself.
pub fn classify(pod: &PodSnapshot) -> Vec<Category> {
    let ready = pod.condition(ConditionKind::PodReady);
    let containers_ready = pod.condition(ConditionKind::ContainersReady);
    let initialized = pod.condition(ConditionKind::PodInitialized);
    let scheduled = pod.condition(ConditionKind::PodScheduled);

    if ready {
        return vec![Category::Ready, Category::Running];
    }

    let mut categories = Vec::with_capacity(3);

    match pod.phase {
        PodPhase::Running => {
            categories.push(Category::Running);
            categories.push(Category::RunningNotReady);
        }
        PodPhase::Pending => categories.push(Category::Pending),
        PodPhase::Succeeded | PodPhase::Failed | PodPhase::Unknown => {}
    }

    if let Some(blocking) = first_blocking_condition(scheduled, initialized, containers_ready) {
        categories.push(blocking);
    }

    categories
}

// Later conditions are consequences of earlier ones, so only the first is reported.
fn first_blocking_condition(
    scheduled: bool,
    initialized: bool,
    containers_ready: bool,
) -> Option<Category> {
    if !scheduled {
        Some(Category::Unscheduled)
    } else if !initialized {
        Some(Category::Uninitialized)
    } else if !containers_ready {
        Some(Category::ContainersNotReady)
    } else {
        None
    }
}
