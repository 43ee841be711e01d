mod cli;
mod columns;
mod config;
mod free;
mod k8s;
mod model;
mod quantity;
mod status;
mod table;
mod units;

use anyhow::{Context, Result};
use clap::Parser;
use cli::CliArgs;
use config::{ConfigFile, FreeOptions};
use k8s::KubeGateway;
use k8s_openapi::jiff::Timestamp;
use model::NamespaceScope;
use std::io;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let args = CliArgs::parse();
    init_tracing(&args.log_filter)?;

    let (file, path) = ConfigFile::load(args.config.as_deref())?;
    if let Some(path) = &path {
        debug!(path = %path.display(), "loaded config file");
    }
    let options = FreeOptions::resolve(&args, &file)?;

    if args.all_namespaces && args.namespace.is_some() {
        warn!("both --all-namespaces and --namespace were provided, using all namespaces");
    }

    let gateway = KubeGateway::connect(args.context.clone()).await?;
    let scope = resolve_namespace_scope(&args, &gateway);
    let gateway = gateway.with_scope(scope);

    let table = free::run(&gateway, &options, Timestamp::now().as_second()).await?;
    debug!(rows = table.rows().len(), "rendering table");
    table
        .print(&mut io::stdout().lock())
        .context("failed to write table")?;

    Ok(())
}

fn init_tracing(level_filter: &str) -> Result<()> {
    let filter = EnvFilter::try_new(level_filter)
        .or_else(|_| EnvFilter::try_new("warn"))
        .context("failed to initialize tracing filter")?;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .with_writer(io::stderr)
        .try_init();

    Ok(())
}

fn resolve_namespace_scope(args: &CliArgs, gateway: &KubeGateway) -> NamespaceScope {
    if args.all_namespaces {
        NamespaceScope::All
    } else if let Some(namespace) = &args.namespace {
        NamespaceScope::Named(namespace.clone())
    } else {
        NamespaceScope::Named(gateway.default_namespace().to_string())
    }
}
