use anyhow::{Context, Result};
use k8s_openapi::api::core::v1::{Node, Pod};
use kube::api::ListParams;
use kube::config::{KubeConfigOptions, Kubeconfig};
use kube::core::{ApiResource, DynamicObject, GroupVersionKind};
use kube::{Api, Client, Config, ResourceExt};
use serde_json::Value;
use tracing::debug;

use crate::config::NodeQuery;
use crate::free::ClusterSource;
use crate::model::{NamespaceScope, ResourceUsage, UsageSnapshot};
use crate::quantity::{parse_cpu_millicores, parse_memory_bytes};

const METRICS_GROUP: &str = "metrics.k8s.io";
const METRICS_VERSION: &str = "v1beta1";

#[derive(Clone)]
pub struct KubeGateway {
    client: Client,
    default_namespace: String,
    scope: NamespaceScope,
}

impl KubeGateway {
    pub async fn connect(context: Option<String>) -> Result<Self> {
        let config = match Kubeconfig::read() {
            Ok(kubeconfig) => {
                let options = KubeConfigOptions {
                    context,
                    cluster: None,
                    user: None,
                };
                Config::from_custom_kubeconfig(kubeconfig, &options)
                    .await
                    .context("failed to infer Kubernetes configuration")?
            }
            Err(error) => {
                if let Some(context) = context {
                    anyhow::bail!("kubeconfig not found; can not select context '{context}'");
                }
                debug!(error = %error, "kubeconfig unavailable, inferring configuration");
                Config::infer()
                    .await
                    .context("failed to infer Kubernetes configuration")?
            }
        };

        let default_namespace = config.default_namespace.clone();
        debug!(cluster = %config.cluster_url, namespace = %default_namespace, "connecting");
        let client = Client::try_from(config).context("failed to initialize Kubernetes client")?;

        Ok(Self {
            client,
            scope: NamespaceScope::Named(default_namespace.clone()),
            default_namespace,
        })
    }

    pub fn default_namespace(&self) -> &str {
        &self.default_namespace
    }

    pub fn with_scope(mut self, scope: NamespaceScope) -> Self {
        self.scope = scope;
        self
    }

    fn pods_api(&self) -> Api<Pod> {
        match &self.scope {
            NamespaceScope::All => Api::all(self.client.clone()),
            NamespaceScope::Named(namespace) => Api::namespaced(self.client.clone(), namespace),
        }
    }

    fn metrics_api(&self, kind: &str, plural: &str, namespaced: bool) -> Api<DynamicObject> {
        let gvk = GroupVersionKind::gvk(METRICS_GROUP, METRICS_VERSION, kind);
        let resource = ApiResource::from_gvk_with_plural(&gvk, plural);
        match (&self.scope, namespaced) {
            (NamespaceScope::Named(namespace), true) => {
                Api::namespaced_with(self.client.clone(), namespace, &resource)
            }
            _ => Api::all_with(self.client.clone(), &resource),
        }
    }
}

impl ClusterSource for KubeGateway {
    async fn list_nodes(&self, query: &NodeQuery) -> Result<Vec<Node>> {
        let nodes: Api<Node> = Api::all(self.client.clone());

        if !query.names.is_empty() {
            let mut found = Vec::with_capacity(query.names.len());
            for name in &query.names {
                let node = nodes
                    .get(name)
                    .await
                    .with_context(|| format!("failed to get node {name}"))?;
                found.push(node);
            }
            return Ok(found);
        }

        let mut params = ListParams::default();
        if let Some(selector) = &query.label_selector {
            params = params.labels(selector);
        }
        let list = nodes
            .list(&params)
            .await
            .context("failed to list nodes")?;
        Ok(list.items)
    }

    async fn list_pods(&self, node_name: &str) -> Result<Vec<Pod>> {
        let params = ListParams::default().fields(&format!("spec.nodeName={node_name}"));
        let list = self
            .pods_api()
            .list(&params)
            .await
            .with_context(|| format!("failed to list pods on node {node_name}"))?;
        debug!(node = node_name, scope = %self.scope, pods = list.items.len(), "listed pods");
        Ok(list.items)
    }

    async fn node_usage(&self, node_name: &str) -> Result<ResourceUsage> {
        let metric = self
            .metrics_api("NodeMetrics", "nodes", false)
            .get(node_name)
            .await
            .with_context(|| format!("failed to get node metrics for {node_name}"))?;
        Ok(usage_from_value(&metric.data["usage"]))
    }

    async fn pod_usage(&self) -> Result<UsageSnapshot> {
        let metrics = self
            .metrics_api("PodMetrics", "pods", true)
            .list(&ListParams::default())
            .await
            .context("failed to list pod metrics")?;

        let mut snapshot = UsageSnapshot::default();
        for metric in metrics {
            let namespace = metric.namespace().unwrap_or_default();
            let pod = metric.name_any();
            for (container, usage) in container_usages(&metric.data) {
                snapshot.insert(namespace.clone(), pod.clone(), container, usage);
            }
        }
        Ok(snapshot)
    }
}

fn container_usages(data: &Value) -> Vec<(String, ResourceUsage)> {
    let Some(containers) = data.get("containers").and_then(Value::as_array) else {
        return Vec::new();
    };

    containers
        .iter()
        .filter_map(|container| {
            let name = container.get("name").and_then(Value::as_str)?;
            let usage = container
                .get("usage")
                .map(usage_from_value)
                .unwrap_or_default();
            Some((name.to_string(), usage))
        })
        .collect()
}

fn usage_from_value(value: &Value) -> ResourceUsage {
    let cpu_millicores = value
        .get("cpu")
        .and_then(Value::as_str)
        .and_then(parse_cpu_millicores)
        .unwrap_or(0);
    let memory_bytes = value
        .get("memory")
        .and_then(Value::as_str)
        .and_then(parse_memory_bytes)
        .unwrap_or(0);
    ResourceUsage {
        cpu_millicores,
        memory_bytes,
    }
}
