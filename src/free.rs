use anyhow::Result;
use k8s_openapi::api::core::v1::{Container, Node, Pod};
use kube::ResourceExt;
use tracing::debug;

use crate::columns::{Column, header};
use crate::config::{FreeOptions, NodeQuery};
use crate::model::{PodPhase, RenderMode, ResourceUsage, UsageSnapshot};
use crate::quantity::{ContainerResources, NodeAllocatable};
use crate::status::{colorize, node_ready, node_status, pod_status, threshold_class};
use crate::table::OutputTable;
use crate::units::{format_percent, percentage, pod_age};

#[allow(async_fn_in_trait)]
pub trait ClusterSource {
    async fn list_nodes(&self, query: &NodeQuery) -> Result<Vec<Node>>;

    async fn list_pods(&self, node_name: &str) -> Result<Vec<Pod>>;

    async fn node_usage(&self, node_name: &str) -> Result<ResourceUsage>;

    async fn pod_usage(&self) -> Result<UsageSnapshot>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeSummary {
    pub name: String,
    pub ready: bool,
    pub requested: ContainerResources,
    pub allocatable: NodeAllocatable,
    pub usage: ResourceUsage,
    pub pods: usize,
    pub containers: usize,
}

impl NodeSummary {
    pub fn aggregate(node: &Node, pods: &[Pod], usage: ResourceUsage) -> Self {
        let mut requested = ContainerResources::default();
        for pod in pods.iter().filter(|pod| pod_phase(pod) == PodPhase::Running) {
            for container in pod_containers(pod) {
                requested.add(&ContainerResources::from_container(container));
            }
        }

        Self {
            name: node.name_any(),
            ready: node_ready(node),
            requested,
            allocatable: NodeAllocatable::from_node(node),
            usage,
            pods: pods.len(),
            containers: pods.iter().map(|pod| pod_containers(pod).len()).sum(),
        }
    }

    pub fn cell(&self, column: Column, options: &FreeOptions) -> String {
        let units = &options.units;
        let cpu_alloc = self.allocatable.cpu_millicores;
        let memory_alloc = self.allocatable.memory_bytes;

        match column {
            Column::Name => self.name.clone(),
            Column::Status => node_status(self.ready, options.style),
            Column::CpuUsed => units.to_milli_unit_or_dash(self.usage.cpu_millicores),
            Column::CpuRequested => units.to_milli_unit_or_dash(self.requested.cpu_requested),
            Column::CpuLimited => units.to_milli_unit_or_dash(self.requested.cpu_limit),
            Column::CpuAllocatable => units.to_milli_unit_or_dash(cpu_alloc),
            Column::CpuUsedPercent => {
                percent_cell(percentage(self.usage.cpu_millicores, cpu_alloc), options)
            }
            Column::CpuRequestedPercent => {
                percent_cell(percentage(self.requested.cpu_requested, cpu_alloc), options)
            }
            Column::CpuLimitedPercent => {
                percent_cell(percentage(self.requested.cpu_limit, cpu_alloc), options)
            }
            Column::MemoryUsed => units.to_unit_or_dash(self.usage.memory_bytes),
            Column::MemoryRequested => units.to_unit_or_dash(self.requested.memory_requested),
            Column::MemoryLimited => units.to_unit_or_dash(self.requested.memory_limit),
            Column::MemoryAllocatable => units.to_unit_or_dash(memory_alloc),
            Column::MemoryUsedPercent => {
                percent_cell(percentage(self.usage.memory_bytes, memory_alloc), options)
            }
            Column::MemoryRequestedPercent => percent_cell(
                percentage(self.requested.memory_requested, memory_alloc),
                options,
            ),
            Column::MemoryLimitedPercent => {
                percent_cell(percentage(self.requested.memory_limit, memory_alloc), options)
            }
            Column::Pods => self.pods.to_string(),
            Column::PodsAllocatable => self.allocatable.pods.to_string(),
            Column::Containers => self.containers.to_string(),
            // listing only
            Column::NodeName
            | Column::Namespace
            | Column::PodName
            | Column::PodAge
            | Column::PodIp
            | Column::PodStatus
            | Column::Container
            | Column::Image => String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContainerRow {
    pub node_name: String,
    pub namespace: String,
    pub pod_name: String,
    pub pod_age: String,
    pub pod_ip: String,
    pub phase: PodPhase,
    pub container: String,
    pub image: String,
    pub resources: ContainerResources,
    pub usage: ResourceUsage,
}

impl ContainerRow {
    pub fn cell(&self, column: Column, options: &FreeOptions) -> String {
        let units = &options.units;
        match column {
            Column::NodeName => self.node_name.clone(),
            Column::Namespace => self.namespace.clone(),
            Column::PodName => self.pod_name.clone(),
            Column::PodAge => self.pod_age.clone(),
            Column::PodIp => self.pod_ip.clone(),
            Column::PodStatus => pod_status(self.phase, options.style),
            Column::Container => self.container.clone(),
            Column::CpuUsed => units.to_milli_unit_or_dash(self.usage.cpu_millicores),
            Column::CpuRequested => units.to_milli_unit_or_dash(self.resources.cpu_requested),
            Column::CpuLimited => units.to_milli_unit_or_dash(self.resources.cpu_limit),
            Column::MemoryUsed => units.to_unit_or_dash(self.usage.memory_bytes),
            Column::MemoryRequested => units.to_unit_or_dash(self.resources.memory_requested),
            Column::MemoryLimited => units.to_unit_or_dash(self.resources.memory_limit),
            Column::Image => self.image.clone(),
            // node summary only
            _ => String::new(),
        }
    }
}

pub async fn run<S: ClusterSource>(
    source: &S,
    options: &FreeOptions,
    now_seconds: i64,
) -> Result<OutputTable> {
    let columns = options.columns();
    let mut table = OutputTable::new(if options.headers {
        header(&columns)
    } else {
        Vec::new()
    });

    let nodes = source.list_nodes(&options.nodes).await?;
    debug!(nodes = nodes.len(), mode = ?options.mode, "starting pass");

    match options.mode {
        RenderMode::NodeSummary => {
            for node in &nodes {
                let summary = summarize_node(source, node, options).await?;
                table.add_row(
                    columns
                        .iter()
                        .map(|column| summary.cell(*column, options))
                        .collect(),
                );
            }
        }
        RenderMode::ContainerListing => {
            let usage = if options.metrics {
                source.pod_usage().await.unwrap_or_else(|error| {
                    debug!(error = %format!("{error:#}"), "pod metrics unavailable");
                    UsageSnapshot::default()
                })
            } else {
                UsageSnapshot::default()
            };

            for node in &nodes {
                for row in list_containers(source, node, &usage, options, now_seconds).await? {
                    table.add_row(
                        columns
                            .iter()
                            .map(|column| row.cell(*column, options))
                            .collect(),
                    );
                }
            }
        }
    }

    Ok(table)
}

pub async fn summarize_node<S: ClusterSource>(
    source: &S,
    node: &Node,
    options: &FreeOptions,
) -> Result<NodeSummary> {
    let name = node.name_any();
    let pods = source.list_pods(&name).await?;

    let usage = if options.metrics {
        source.node_usage(&name).await.unwrap_or_else(|error| {
            debug!(node = %name, error = %format!("{error:#}"), "node metrics unavailable");
            ResourceUsage::default()
        })
    } else {
        ResourceUsage::default()
    };

    let summary = NodeSummary::aggregate(node, &pods, usage);
    debug!(node = %name, pods = summary.pods, "aggregated node");
    Ok(summary)
}

pub async fn list_containers<S: ClusterSource>(
    source: &S,
    node: &Node,
    usage: &UsageSnapshot,
    options: &FreeOptions,
    now_seconds: i64,
) -> Result<Vec<ContainerRow>> {
    let node_name = node.name_any();
    let pods = source.list_pods(&node_name).await?;

    let mut rows = Vec::new();
    for pod in &pods {
        let pod_name = pod.name_any();
        let namespace = pod.namespace().unwrap_or_default();
        let age = pod_age(pod.metadata.creation_timestamp.as_ref(), now_seconds);
        let pod_ip = pod
            .status
            .as_ref()
            .and_then(|status| status.pod_ip.clone())
            .unwrap_or_default();
        let phase = pod_phase(pod);

        for container in pod_containers(pod) {
            let resources = ContainerResources::from_container(container);
            if resources.is_empty() && !options.list_all {
                continue;
            }

            rows.push(ContainerRow {
                node_name: node_name.clone(),
                namespace: namespace.clone(),
                pod_name: pod_name.clone(),
                pod_age: age.clone(),
                pod_ip: pod_ip.clone(),
                phase,
                container: container.name.clone(),
                image: container.image.clone().unwrap_or_default(),
                resources,
                usage: usage.container(&namespace, &pod_name, &container.name),
            });
        }
    }

    Ok(rows)
}

fn percent_cell(value: i64, options: &FreeOptions) -> String {
    let text = format_percent(value);
    if !options.style.color {
        return text;
    }

    colorize(&text, threshold_class(value, options.thresholds))
}

fn pod_phase(pod: &Pod) -> PodPhase {
    PodPhase::from_phase(
        pod.status
            .as_ref()
            .and_then(|status| status.phase.as_deref()),
    )
}

fn pod_containers(pod: &Pod) -> &[Container] {
    pod.spec
        .as_ref()
        .map(|spec| spec.containers.as_slice())
        .unwrap_or(&[])
}

#[cfg(test)]
mod tests {
    use super::{ClusterSource, NodeSummary, run};
    use crate::columns::Column;
    use crate::config::{FreeOptions, NodeQuery};
    use crate::model::{RenderMode, ResourceUsage, UsageSnapshot};
    use crate::status::LabelStyle;
    use crate::units::{UnitFormatter, UnitPrefix, UnitSelection};
    use anyhow::{Result, anyhow};
    use k8s_openapi::api::core::v1::{
        Container, Node, NodeCondition, NodeStatus, Pod, PodSpec, PodStatus,
        ResourceRequirements,
    };
    use k8s_openapi::apimachinery::pkg::api::resource::Quantity;
    use k8s_openapi::apimachinery::pkg::apis::meta::v1::{ObjectMeta, Time};
    use k8s_openapi::jiff::Timestamp;
    use std::cell::Cell;
    use std::collections::{BTreeMap, HashMap};

    #[derive(Default)]
    struct FakeCluster {
        nodes: Vec<Node>,
        pods: HashMap<String, Vec<Pod>>,
        node_usage: HashMap<String, ResourceUsage>,
        pod_usage: Option<UsageSnapshot>,
        fail_nodes: bool,
        fail_pods_on: Option<String>,
        usage_calls: Cell<usize>,
    }

    impl ClusterSource for FakeCluster {
        async fn list_nodes(&self, query: &NodeQuery) -> Result<Vec<Node>> {
            if self.fail_nodes {
                return Err(anyhow!("failed to list nodes: connection refused"));
            }
            if query.names.is_empty() {
                return Ok(self.nodes.clone());
            }

            query
                .names
                .iter()
                .map(|name| {
                    self.nodes
                        .iter()
                        .find(|node| node.metadata.name.as_deref() == Some(name.as_str()))
                        .cloned()
                        .ok_or_else(|| anyhow!("failed to get node {name}: not found"))
                })
                .collect()
        }

        async fn list_pods(&self, node_name: &str) -> Result<Vec<Pod>> {
            if self.fail_pods_on.as_deref() == Some(node_name) {
                return Err(anyhow!("failed to list pods on node {node_name}"));
            }
            Ok(self.pods.get(node_name).cloned().unwrap_or_default())
        }

        async fn node_usage(&self, node_name: &str) -> Result<ResourceUsage> {
            self.usage_calls.set(self.usage_calls.get() + 1);
            self.node_usage
                .get(node_name)
                .copied()
                .ok_or_else(|| anyhow!("nodemetrics {node_name} not found"))
        }

        async fn pod_usage(&self) -> Result<UsageSnapshot> {
            self.usage_calls.set(self.usage_calls.get() + 1);
            self.pod_usage
                .clone()
                .ok_or_else(|| anyhow!("the server could not find the requested resource"))
        }
    }

    fn resource_list(cpu: &str, memory: &str) -> BTreeMap<String, Quantity> {
        BTreeMap::from([
            ("cpu".to_string(), Quantity(cpu.to_string())),
            ("memory".to_string(), Quantity(memory.to_string())),
        ])
    }

    fn node(name: &str, cpu: &str, memory: &str, ready: bool) -> Node {
        let mut allocatable = resource_list(cpu, memory);
        allocatable.insert("pods".to_string(), Quantity("110".to_string()));
        Node {
            metadata: ObjectMeta {
                name: Some(name.to_string()),
                ..ObjectMeta::default()
            },
            status: Some(NodeStatus {
                allocatable: Some(allocatable),
                conditions: Some(vec![NodeCondition {
                    type_: "Ready".to_string(),
                    status: if ready { "True" } else { "False" }.to_string(),
                    ..NodeCondition::default()
                }]),
                ..NodeStatus::default()
            }),
            ..Node::default()
        }
    }

    fn container(
        name: &str,
        requests: Option<(&str, &str)>,
        limits: Option<(&str, &str)>,
    ) -> Container {
        Container {
            name: name.to_string(),
            image: Some(format!("{name}:latest")),
            resources: Some(ResourceRequirements {
                requests: requests.map(|(cpu, memory)| resource_list(cpu, memory)),
                limits: limits.map(|(cpu, memory)| resource_list(cpu, memory)),
                ..ResourceRequirements::default()
            }),
            ..Container::default()
        }
    }

    fn pod(name: &str, namespace: &str, phase: &str, containers: Vec<Container>) -> Pod {
        Pod {
            metadata: ObjectMeta {
                name: Some(name.to_string()),
                namespace: Some(namespace.to_string()),
                ..ObjectMeta::default()
            },
            spec: Some(PodSpec {
                node_name: Some("node1".to_string()),
                containers,
                ..PodSpec::default()
            }),
            status: Some(PodStatus {
                phase: Some(phase.to_string()),
                pod_ip: Some("1.2.3.4".to_string()),
                ..PodStatus::default()
            }),
        }
    }

    fn single_node_cluster(pods: Vec<Pod>) -> FakeCluster {
        FakeCluster {
            nodes: vec![node("node1", "4", "4000", true)],
            pods: HashMap::from([("node1".to_string(), pods)]),
            ..FakeCluster::default()
        }
    }

    fn pod1() -> Pod {
        pod(
            "pod1",
            "default",
            "Running",
            vec![container(
                "container1",
                Some(("1000m", "1000")),
                Some(("2000m", "2000")),
            )],
        )
    }

    fn plain_options() -> FreeOptions {
        FreeOptions {
            style: LabelStyle {
                color: false,
                emoji: false,
            },
            ..FreeOptions::default()
        }
    }

    fn cell(options: &FreeOptions, row: &[String], column: Column) -> String {
        let index = options
            .columns()
            .iter()
            .position(|candidate| *candidate == column)
            .unwrap();
        row[index].clone()
    }

    #[tokio::test]
    async fn node_summary_matches_allocatable() {
        let cluster = single_node_cluster(vec![pod1()]);
        let table = run(&cluster, &plain_options(), 0).await.unwrap();

        assert_eq!(
            table.render(),
            [
                "NAME    STATUS   CPU/use   CPU/req   CPU/lim   CPU/alloc   CPU/use%   CPU/req%   CPU/lim%   MEM/use   MEM/req   MEM/lim   MEM/alloc   MEM/use%   MEM/req%   MEM/lim%",
                "node1   Ready    -         1         2         4           0%         25%        50%        -         1K        2K        4K          0%         25%        50%",
                "",
            ]
            .join("\n")
        );
    }

    #[tokio::test]
    async fn only_running_pods_are_summed() {
        let cpu_request = |name: &str, phase: &str, cpu: &str| {
            pod(name, "default", phase, vec![container(name, Some((cpu, "0")), None)])
        };
        let cluster = single_node_cluster(vec![
            cpu_request("a", "Running", "1000m"),
            cpu_request("b", "Running", "500m"),
            cpu_request("c", "Failed", "300m"),
        ]);
        let options = FreeOptions {
            metrics: false,
            pod_detail: true,
            ..plain_options()
        };

        let table = run(&cluster, &options, 0).await.unwrap();
        let row = &table.rows()[0];
        assert_eq!(cell(&options, row, Column::CpuRequested), "1500m");
        assert_eq!(cell(&options, row, Column::CpuRequestedPercent), "37%");
        assert_eq!(cell(&options, row, Column::CpuLimited), "-");
        assert_eq!(cell(&options, row, Column::Pods), "3");
        assert_eq!(cell(&options, row, Column::PodsAllocatable), "110");
        assert_eq!(cell(&options, row, Column::Containers), "3");
    }

    #[tokio::test]
    async fn usage_is_not_fetched_without_metrics() {
        for mode in [RenderMode::NodeSummary, RenderMode::ContainerListing] {
            let cluster = single_node_cluster(vec![pod1()]);
            let options = FreeOptions {
                mode,
                metrics: false,
                ..plain_options()
            };

            let table = run(&cluster, &options, 0).await.unwrap();
            assert_eq!(cluster.usage_calls.get(), 0);
            assert!(!table.render().contains("/use"));

            let with_metrics = FreeOptions {
                metrics: true,
                ..options
            };
            run(&cluster, &with_metrics, 0).await.unwrap();
            assert_eq!(cluster.usage_calls.get(), 1);
        }
    }

    #[tokio::test]
    async fn node_usage_fills_usage_columns() {
        let mut cluster = single_node_cluster(vec![pod1()]);
        cluster.node_usage.insert(
            "node1".to_string(),
            ResourceUsage {
                cpu_millicores: 100,
                memory_bytes: 1_024,
            },
        );
        let options = plain_options();

        let table = run(&cluster, &options, 0).await.unwrap();
        let row = &table.rows()[0];
        assert_eq!(cell(&options, row, Column::CpuUsed), "100m");
        assert_eq!(cell(&options, row, Column::CpuUsedPercent), "2%");
        assert_eq!(cell(&options, row, Column::MemoryUsed), "1K");
        assert_eq!(cell(&options, row, Column::MemoryUsedPercent), "25%");
    }

    #[tokio::test]
    async fn nodes_without_allocatable_report_zero_percent() {
        let mut bare = node("bare", "0", "0", false);
        bare.status.as_mut().unwrap().allocatable = None;
        let cluster = FakeCluster {
            nodes: vec![bare],
            pods: HashMap::from([("bare".to_string(), vec![pod1()])]),
            ..FakeCluster::default()
        };
        let options = plain_options();

        let table = run(&cluster, &options, 0).await.unwrap();
        let row = &table.rows()[0];
        assert_eq!(cell(&options, row, Column::Status), "NotReady");
        assert_eq!(cell(&options, row, Column::CpuAllocatable), "-");
        assert_eq!(cell(&options, row, Column::CpuRequestedPercent), "0%");
        assert_eq!(cell(&options, row, Column::MemoryLimitedPercent), "0%");
    }

    #[tokio::test]
    async fn container_listing() {
        let cluster = single_node_cluster(vec![pod1()]);
        let options = FreeOptions {
            mode: RenderMode::ContainerListing,
            ..plain_options()
        };

        let table = run(&cluster, &options, 0).await.unwrap();
        assert_eq!(
            table.render(),
            [
                "NODE NAME   NAMESPACE   POD NAME   POD AGE     POD IP    POD STATUS   CONTAINER    CPU/use   CPU/req   CPU/lim   MEM/use   MEM/req   MEM/lim",
                "node1       default     pod1       <unknown>   1.2.3.4   Running      container1   -         1         2         -         1K        2K",
                "",
            ]
            .join("\n")
        );
    }

    #[tokio::test]
    async fn empty_containers_only_listed_with_list_all() {
        let cluster = single_node_cluster(vec![
            pod1(),
            pod(
                "pod2",
                "default",
                "Pending",
                vec![
                    container("container2a", Some(("500m", "1000")), Some(("500m", "1000"))),
                    container("container2b", None, None),
                ],
            ),
        ]);
        let options = FreeOptions {
            mode: RenderMode::ContainerListing,
            metrics: false,
            list_image: true,
            ..plain_options()
        };

        let table = run(&cluster, &options, 0).await.unwrap();
        let containers = table
            .rows()
            .iter()
            .map(|row| cell(&options, row, Column::Container))
            .collect::<Vec<_>>();
        assert_eq!(containers, vec!["container1", "container2a"]);

        let all = FreeOptions {
            list_all: true,
            ..options.clone()
        };
        let table = run(&cluster, &all, 0).await.unwrap();
        assert_eq!(table.rows().len(), 3);
        let empty = &table.rows()[2];
        assert_eq!(cell(&all, empty, Column::Container), "container2b");
        assert_eq!(cell(&all, empty, Column::PodStatus), "Pending");
        assert_eq!(cell(&all, empty, Column::CpuRequested), "-");
        assert_eq!(cell(&all, empty, Column::MemoryLimited), "-");
        assert_eq!(cell(&all, empty, Column::Image), "container2b:latest");
    }

    #[tokio::test]
    async fn container_usage_is_looked_up_by_pod_and_container() {
        let mut sidecar_pod = pod1();
        sidecar_pod
            .spec
            .as_mut()
            .unwrap()
            .containers
            .push(container("sidecar", Some(("10m", "0")), None));
        sidecar_pod.metadata.creation_timestamp =
            Some(Time(Timestamp::from_second(1_000).unwrap()));

        let mut usage = UsageSnapshot::default();
        usage.insert(
            "default",
            "pod1",
            "container1",
            ResourceUsage {
                cpu_millicores: 10,
                memory_bytes: 5_000,
            },
        );
        let cluster = FakeCluster {
            pod_usage: Some(usage),
            ..single_node_cluster(vec![sidecar_pod])
        };
        let options = FreeOptions {
            mode: RenderMode::ContainerListing,
            ..plain_options()
        };

        let table = run(&cluster, &options, 1_000 + 3 * 3_600).await.unwrap();
        let rows = table.rows();
        assert_eq!(cell(&options, &rows[0], Column::CpuUsed), "10m");
        assert_eq!(cell(&options, &rows[0], Column::MemoryUsed), "5K");
        assert_eq!(cell(&options, &rows[0], Column::PodAge), "3h");
        assert_eq!(cell(&options, &rows[1], Column::CpuUsed), "-");
        assert_eq!(cell(&options, &rows[1], Column::MemoryUsed), "-");
    }

    #[tokio::test]
    async fn explicit_nodes_keep_argument_order() {
        let cluster = FakeCluster {
            nodes: vec![node("node1", "4", "4000", true), node("node2", "8", "8000", false)],
            ..FakeCluster::default()
        };
        let options = FreeOptions {
            headers: false,
            nodes: NodeQuery {
                names: vec!["node2".to_string(), "node1".to_string()],
                label_selector: None,
            },
            ..plain_options()
        };

        let table = run(&cluster, &options, 0).await.unwrap();
        let names = table
            .rows()
            .iter()
            .map(|row| row[0].clone())
            .collect::<Vec<_>>();
        assert_eq!(names, vec!["node2", "node1"]);
        assert!(table.render().starts_with("node2"));
    }

    #[tokio::test]
    async fn fetch_failures_abort_the_pass() {
        let cluster = FakeCluster {
            fail_nodes: true,
            ..single_node_cluster(vec![pod1()])
        };
        let error = run(&cluster, &plain_options(), 0).await.unwrap_err();
        assert!(error.to_string().contains("failed to list nodes"));

        let cluster = FakeCluster {
            nodes: vec![node("node1", "4", "4000", true), node("node2", "8", "8000", true)],
            fail_pods_on: Some("node2".to_string()),
            ..FakeCluster::default()
        };
        for mode in [RenderMode::NodeSummary, RenderMode::ContainerListing] {
            let options = FreeOptions {
                mode,
                ..plain_options()
            };
            let error = run(&cluster, &options, 0).await.unwrap_err();
            assert_eq!(error.to_string(), "failed to list pods on node node2");
        }

        let options = FreeOptions {
            nodes: NodeQuery {
                names: vec!["missing".to_string()],
                label_selector: None,
            },
            ..plain_options()
        };
        assert!(run(&cluster, &options, 0).await.is_err());
    }

    #[tokio::test]
    async fn emoji_and_color_labels() {
        let cluster = single_node_cluster(vec![pod1()]);
        let options = FreeOptions {
            style: LabelStyle {
                color: true,
                emoji: true,
            },
            ..FreeOptions::default()
        };

        let table = run(&cluster, &options, 0).await.unwrap();
        let row = &table.rows()[0];
        assert!(cell(&options, row, Column::Status).contains("😃"));
        assert!(cell(&options, row, Column::CpuRequestedPercent).contains("25%"));
    }

    #[test]
    fn raw_numbers_without_unit() {
        let summary = NodeSummary::aggregate(
            &node("node1", "4", "4000", true),
            &[pod1()],
            ResourceUsage::default(),
        );
        let options = FreeOptions {
            units: UnitFormatter::new(
                UnitSelection {
                    bytes: true,
                    ..UnitSelection::default()
                },
                UnitPrefix::Decimal,
                true,
            ),
            ..plain_options()
        };

        assert_eq!(summary.cell(Column::CpuRequested, &options), "1000");
        assert_eq!(summary.cell(Column::MemoryLimited, &options), "2000");
        assert_eq!(summary.cell(Column::MemoryAllocatable, &options), "4000");
        assert_eq!(summary.cell(Column::CpuUsed, &options), "-");
    }
}
