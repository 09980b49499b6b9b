use crate::opts::CliArgs;
use clap::Parser;
use helm_inventory::{
    error::Result,
    inventory::InventoryBuilder,
    kube_client::{server_version, KubeClientBuilder},
    report::{OutputFormat, Report},
    resources::KubeResourceClient,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

mod opts;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let opts = CliArgs::parse();
    init_logging(&opts);

    if let Err(error) = run(opts).await {
        console_logger::error("Failed to list HelmReleases", &error.to_string());
        std::process::exit(1);
    }
}

/// Initialize logging components -- tracing.
fn init_logging(opts: &CliArgs) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(opts.ansi_colors())
        .with_writer(std::io::stderr)
        .init();
}

async fn run(opts: CliArgs) -> Result<()> {
    let client = KubeClientBuilder::default()
        .with_kubeconfig(opts.kubeconfig())
        .with_context(opts.context())
        .build()
        .await?;

    let version = server_version(&client).await?;
    if opts.output() == OutputFormat::Table {
        console_logger::info(&format!("Server Version {version}"));
    } else {
        info!(%version, "Connected to Kubernetes");
    }

    let resource_client = KubeResourceClient::new(client);
    let inventory = InventoryBuilder::new(&resource_client)
        .build(&opts.namespace_selector())
        .await?;
    if inventory.is_empty() && opts.output() == OutputFormat::Table {
        console_logger::notice("No namespaces found or passed as a flag");
        return Ok(());
    }
    info!(releases = inventory.release_count(), "Rendering report");

    Report::from(&inventory).write(opts.output(), &mut std::io::stdout().lock())
}
