use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(
    name = "kubectl-free",
    bin_name = "kubectl free",
    version,
    about = "Show various requested resources on Kubernetes nodes."
)]
pub struct CliArgs {
    /// Only show these nodes instead of every node in the cluster
    #[arg(value_name = "NODE")]
    pub nodes: Vec<String>,

    /// Use 1-byte (1-Byte) blocks rather than the default
    #[arg(short = 'b', long)]
    pub bytes: bool,

    /// Use 1000-byte (1-Kbyte) blocks, 1024 with --binary-prefix
    #[arg(short = 'k', long)]
    pub kilobytes: bool,

    /// Use 1000000-byte (1-Mbyte) blocks, 1048576 with --binary-prefix
    #[arg(short = 'm', long)]
    pub megabytes: bool,

    /// Use 1000000000-byte (1-Gbyte) blocks, 1073741824 with --binary-prefix
    #[arg(short = 'g', long)]
    pub gigabytes: bool,

    /// Use 1024 for basic unit calculation instead of 1000 (print like "Ki")
    #[arg(short = 'B', long)]
    pub binary_prefix: bool,

    /// Do not print size with unit string
    #[arg(long)]
    pub without_unit: bool,

    /// Print without ansi color
    #[arg(long)]
    pub no_color: bool,

    /// Show pod count and limit
    #[arg(short = 'p', long)]
    pub pod: bool,

    /// Show container list on node
    #[arg(long)]
    pub list: bool,

    /// Show pod list on node with container image
    #[arg(long)]
    pub list_image: bool,

    /// Show containers even if they have no requests/limits
    #[arg(long)]
    pub list_all: bool,

    /// Let's smile!! 😃 😭
    #[arg(long)]
    pub emoji: bool,

    /// List pod resources across all namespaces
    #[arg(short = 'A', long)]
    pub all_namespaces: bool,

    /// Namespace of the pods to account for (defaults to the context namespace)
    #[arg(short, long)]
    pub namespace: Option<String>,

    /// Do not print table headers
    #[arg(long)]
    pub no_headers: bool,

    /// Do not print node/pod/container usage from metrics-server
    #[arg(long)]
    pub no_metrics: bool,

    /// Threshold of warn (yellow) color for percentage columns [default: 25]
    #[arg(long, allow_negative_numbers = true)]
    pub warn_threshold: Option<i64>,

    /// Threshold of critical (red) color for percentage columns [default: 50]
    #[arg(long, allow_negative_numbers = true)]
    pub crit_threshold: Option<i64>,

    /// Selector (label query) to filter nodes on
    #[arg(short = 'l', long = "selector", value_name = "SELECTOR")]
    pub label_selector: Option<String>,

    /// Kubeconfig context to use instead of the current one
    #[arg(long)]
    pub context: Option<String>,

    /// YAML file with default options
    #[arg(long, env = "KUBECTL_FREE_CONFIG")]
    pub config: Option<PathBuf>,

    /// tracing filter (for example: info,debug,trace)
    #[arg(long, default_value = "warn")]
    pub log_filter: String,
}
