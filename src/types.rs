use serde::Serialize;
use std::collections::HashMap;
use std::fmt;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Config {
    /// `None` means every namespace in the cluster.
    pub namespace: Option<String>,
    pub kubeconfig: Option<PathBuf>,
    pub output: OutputFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PodPhase {
    Pending,
    Running,
    Succeeded,
    Failed,
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConditionKind {
    PodScheduled,
    PodInitialized,
    ContainersReady,
    PodReady,
}

/// Phase and condition set of a single pod at the time it was listed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PodSnapshot {
    pub phase: PodPhase,
    pub conditions: HashMap<ConditionKind, bool>,
}

impl PodSnapshot {
    pub fn new(phase: PodPhase) -> Self {
        Self {
            phase,
            conditions: HashMap::new(),
        }
    }

    pub fn with_condition(mut self, kind: ConditionKind, status: bool) -> Self {
        self.set_condition(kind, status);
        self
    }

    /// Later calls for the same kind overwrite earlier ones.
    pub fn set_condition(&mut self, kind: ConditionKind, status: bool) -> &mut Self {
        self.conditions.insert(kind, status);
        self
    }

    /// Absent conditions read as `false`.
    pub fn condition(&self, kind: ConditionKind) -> bool {
        self.conditions.get(&kind).copied().unwrap_or(false)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Total,
    Pending,
    Running,
    Ready,
    RunningNotReady,
    Unscheduled,
    Uninitialized,
    ContainersNotReady,
}

impl Category {
    /// Report order.
    pub const ALL: [Category; 8] = [
        Category::Total,
        Category::Pending,
        Category::Running,
        Category::Ready,
        Category::RunningNotReady,
        Category::Unscheduled,
        Category::Uninitialized,
        Category::ContainersNotReady,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Total => "total",
            Category::Pending => "pending",
            Category::Running => "running",
            Category::Ready => "ready",
            Category::RunningNotReady => "running_not_ready",
            Category::Unscheduled => "unscheduled",
            Category::Uninitialized => "uninitialized",
            Category::ContainersNotReady => "containers_not_ready",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-category pod counters for one run.
///
/// `total` is the raw number of pods seen; the other counters overlap and do
/// not add up to it.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Totals {
    pub total: u64,
    pub pending: u64,
    pub running: u64,
    pub ready: u64,
    pub running_not_ready: u64,
    pub unscheduled: u64,
    pub uninitialized: u64,
    pub containers_not_ready: u64,
}

impl Totals {
    pub fn get(&self, category: Category) -> u64 {
        match category {
            Category::Total => self.total,
            Category::Pending => self.pending,
            Category::Running => self.running,
            Category::Ready => self.ready,
            Category::RunningNotReady => self.running_not_ready,
            Category::Unscheduled => self.unscheduled,
            Category::Uninitialized => self.uninitialized,
            Category::ContainersNotReady => self.containers_not_ready,
        }
    }

    pub fn increment(&mut self, category: Category) {
        self.add(category, 1);
    }

    pub fn add(&mut self, category: Category, n: u64) {
        let counter = match category {
            Category::Total => &mut self.total,
            Category::Pending => &mut self.pending,
            Category::Running => &mut self.running,
            Category::Ready => &mut self.ready,
            Category::RunningNotReady => &mut self.running_not_ready,
            Category::Unscheduled => &mut self.unscheduled,
            Category::Uninitialized => &mut self.uninitialized,
            Category::ContainersNotReady => &mut self.containers_not_ready,
        };
        *counter += n;
    }
}
