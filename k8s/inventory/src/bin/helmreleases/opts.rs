use clap::Parser;
use helm_inventory::{inventory::NamespaceSelector, report::OutputFormat};
use std::path::PathBuf;

/// These are the supported cli configuration options for the HelmRelease inventory.
#[derive(Parser, Debug)]
#[command(name = "kubectl-helmreleases", version)]
#[command(
    about = "Lists GitOps managed HelmReleases, their charts and health across namespaces",
    long_about = None
)]
pub(crate) struct CliArgs {
    /// Path to the kubeconfig file. When not set the configuration is inferred from $KUBECONFIG,
    /// ~/.kube/config or the in-cluster service account.
    #[arg(long, value_name = "FILE_PATH")]
    kubeconfig: Option<PathBuf>,

    /// The kubeconfig context to use instead of the current one.
    #[arg(long)]
    context: Option<String>,

    /// Only list the HelmReleases of this namespace. All namespaces are scanned when not set.
    #[arg(short, long)]
    namespace: Option<String>,

    /// The output format of the report.
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
    output: OutputFormat,

    /// Use ANSI colors for the logs.
    #[arg(long, default_value_t = true, action = clap::ArgAction::Set)]
    ansi_colors: bool,
}

impl CliArgs {
    /// This returns the kubeconfig file path, if one was given.
    pub(crate) fn kubeconfig(&self) -> Option<PathBuf> {
        self.kubeconfig.clone()
    }

    /// This returns the kubeconfig context, if one was given.
    pub(crate) fn context(&self) -> Option<String> {
        self.context.clone()
    }

    /// This returns which namespaces should be scanned.
    pub(crate) fn namespace_selector(&self) -> NamespaceSelector {
        NamespaceSelector::from(self.namespace.clone())
    }

    /// This returns the report format.
    pub(crate) fn output(&self) -> OutputFormat {
        self.output
    }

    /// This returns ansi_colors arg.
    pub(crate) fn ansi_colors(&self) -> bool {
        self.ansi_colors
    }
}
