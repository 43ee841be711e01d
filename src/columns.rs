use crate::model::RenderMode;

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum Column {
    Name,
    Status,
    CpuUsed,
    CpuRequested,
    CpuLimited,
    CpuAllocatable,
    CpuUsedPercent,
    CpuRequestedPercent,
    CpuLimitedPercent,
    MemoryUsed,
    MemoryRequested,
    MemoryLimited,
    MemoryAllocatable,
    MemoryUsedPercent,
    MemoryRequestedPercent,
    MemoryLimitedPercent,
    Pods,
    PodsAllocatable,
    Containers,
    NodeName,
    Namespace,
    PodName,
    PodAge,
    PodIp,
    PodStatus,
    Container,
    Image,
}

impl Column {
    pub fn title(self) -> &'static str {
        match self {
            Self::Name => "NAME",
            Self::Status => "STATUS",
            Self::CpuUsed => "CPU/use",
            Self::CpuRequested => "CPU/req",
            Self::CpuLimited => "CPU/lim",
            Self::CpuAllocatable => "CPU/alloc",
            Self::CpuUsedPercent => "CPU/use%",
            Self::CpuRequestedPercent => "CPU/req%",
            Self::CpuLimitedPercent => "CPU/lim%",
            Self::MemoryUsed => "MEM/use",
            Self::MemoryRequested => "MEM/req",
            Self::MemoryLimited => "MEM/lim",
            Self::MemoryAllocatable => "MEM/alloc",
            Self::MemoryUsedPercent => "MEM/use%",
            Self::MemoryRequestedPercent => "MEM/req%",
            Self::MemoryLimitedPercent => "MEM/lim%",
            Self::Pods => "PODS",
            Self::PodsAllocatable => "PODS/alloc",
            Self::Containers => "CONTAINERS",
            Self::NodeName => "NODE NAME",
            Self::Namespace => "NAMESPACE",
            Self::PodName => "POD NAME",
            Self::PodAge => "POD AGE",
            Self::PodIp => "POD IP",
            Self::PodStatus => "POD STATUS",
            Self::Container => "CONTAINER",
            Self::Image => "IMAGE",
        }
    }
}

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Include {
    Always,
    WithMetrics,
    WithPodDetail,
    WithImage,
}

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct ColumnSpec {
    pub column: Column,
    pub include: Include,
}

const fn spec(column: Column, include: Include) -> ColumnSpec {
    ColumnSpec { column, include }
}

pub const NODE_SUMMARY_COLUMNS: [ColumnSpec; 19] = [
    spec(Column::Name, Include::Always),
    spec(Column::Status, Include::Always),
    spec(Column::CpuUsed, Include::WithMetrics),
    spec(Column::CpuRequested, Include::Always),
    spec(Column::CpuLimited, Include::Always),
    spec(Column::CpuAllocatable, Include::Always),
    spec(Column::CpuUsedPercent, Include::WithMetrics),
    spec(Column::CpuRequestedPercent, Include::Always),
    spec(Column::CpuLimitedPercent, Include::Always),
    spec(Column::MemoryUsed, Include::WithMetrics),
    spec(Column::MemoryRequested, Include::Always),
    spec(Column::MemoryLimited, Include::Always),
    spec(Column::MemoryAllocatable, Include::Always),
    spec(Column::MemoryUsedPercent, Include::WithMetrics),
    spec(Column::MemoryRequestedPercent, Include::Always),
    spec(Column::MemoryLimitedPercent, Include::Always),
    spec(Column::Pods, Include::WithPodDetail),
    spec(Column::PodsAllocatable, Include::WithPodDetail),
    spec(Column::Containers, Include::WithPodDetail),
];

pub const CONTAINER_LISTING_COLUMNS: [ColumnSpec; 14] = [
    spec(Column::NodeName, Include::Always),
    spec(Column::Namespace, Include::Always),
    spec(Column::PodName, Include::Always),
    spec(Column::PodAge, Include::Always),
    spec(Column::PodIp, Include::Always),
    spec(Column::PodStatus, Include::Always),
    spec(Column::Container, Include::Always),
    spec(Column::CpuUsed, Include::WithMetrics),
    spec(Column::CpuRequested, Include::Always),
    spec(Column::CpuLimited, Include::Always),
    spec(Column::MemoryUsed, Include::WithMetrics),
    spec(Column::MemoryRequested, Include::Always),
    spec(Column::MemoryLimited, Include::Always),
    spec(Column::Image, Include::WithImage),
];

#[derive(Debug, Clone, Copy, Eq, PartialEq, Default)]
pub struct ColumnToggles {
    pub metrics: bool,
    pub pod_detail: bool,
    pub image: bool,
}

impl ColumnToggles {
    fn includes(self, include: Include) -> bool {
        match include {
            Include::Always => true,
            Include::WithMetrics => self.metrics,
            Include::WithPodDetail => self.pod_detail,
            Include::WithImage => self.image,
        }
    }
}

pub fn select_columns(mode: RenderMode, toggles: ColumnToggles) -> Vec<Column> {
    let specs: &[ColumnSpec] = match mode {
        RenderMode::NodeSummary => &NODE_SUMMARY_COLUMNS,
        RenderMode::ContainerListing => &CONTAINER_LISTING_COLUMNS,
    };

    specs
        .iter()
        .filter(|spec| toggles.includes(spec.include))
        .map(|spec| spec.column)
        .collect()
}

pub fn header(columns: &[Column]) -> Vec<String> {
    columns
        .iter()
        .map(|column| column.title().to_string())
        .collect()
}
