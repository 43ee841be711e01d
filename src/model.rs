use std::collections::HashMap;
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, Eq, PartialEq)]
pub enum NamespaceScope {
    All,
    Named(String),
}

impl Display for NamespaceScope {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::All => write!(f, "all"),
            Self::Named(namespace) => write!(f, "{namespace}"),
        }
    }
}

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum RenderMode {
    NodeSummary,
    ContainerListing,
}

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum ColorClass {
    Success,
    Warning,
    Failure,
    Neutral,
}

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum PodPhase {
    Running,
    Succeeded,
    Pending,
    Failed,
    Unknown,
}

impl PodPhase {
    pub fn from_phase(phase: Option<&str>) -> Self {
        match phase {
            Some("Running") => Self::Running,
            Some("Succeeded") => Self::Succeeded,
            Some("Pending") => Self::Pending,
            Some("Failed") => Self::Failed,
            _ => Self::Unknown,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Running => "Running",
            Self::Succeeded => "Succeeded",
            Self::Pending => "Pending",
            Self::Failed => "Failed",
            Self::Unknown => "Unknown",
        }
    }
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, Default)]
pub struct ResourceUsage {
    pub cpu_millicores: i64,
    pub memory_bytes: i64,
}

/// Per-container usage keyed by namespace, pod and container name.
///
/// An empty snapshot stands in for an unavailable metrics API: every lookup
/// yields zero usage.
#[derive(Debug, Clone, Default)]
pub struct UsageSnapshot {
    containers: HashMap<(String, String, String), ResourceUsage>,
}

impl UsageSnapshot {
    pub fn insert(
        &mut self,
        namespace: impl Into<String>,
        pod: impl Into<String>,
        container: impl Into<String>,
        usage: ResourceUsage,
    ) {
        self.containers
            .insert((namespace.into(), pod.into(), container.into()), usage);
    }

    pub fn container(&self, namespace: &str, pod: &str, container: &str) -> ResourceUsage {
        self.containers
            .get(&(namespace.to_string(), pod.to_string(), container.to_string()))
            .copied()
            .unwrap_or_default()
    }
}
