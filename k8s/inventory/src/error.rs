use snafu::Snafu;
use std::path::PathBuf;

/// Result type for fallible inventory operations.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Errors which stop the scan of a namespace or the whole run.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
#[snafu(context(suffix(false)))]
pub enum Error {
    /// Error for when the kubeconfig file cannot be read.
    #[snafu(display("Failed to read kubeconfig file {}: {}", path.display(), source))]
    ReadKubeconfig {
        source: kube::config::KubeconfigError,
        path: PathBuf,
    },

    /// Error for when a client configuration cannot be derived from a kubeconfig.
    #[snafu(display("Failed to load kubeconfig: {}", source))]
    LoadKubeconfig {
        source: kube::config::KubeconfigError,
    },

    /// Error for when neither in-cluster nor local configuration is available.
    #[snafu(display("Failed to infer kubernetes client configuration: {}", source))]
    InferConfig {
        source: kube::config::InferConfigError,
    },

    /// Error for when Kubernetes API client generation fails.
    #[snafu(display("Failed to generate kubernetes client: {}", source))]
    K8sClientGeneration { source: kube::Error },

    /// Error for when the API server does not answer a version request.
    #[snafu(display(
        "Couldn't reach Kubernetes, ensure `kubectl get nodes` works before retrying: {}",
        source
    ))]
    ServerVersion { source: kube::Error },

    /// Error for when the cluster's namespaces cannot be listed.
    #[snafu(display("Failed to list Kubernetes namespaces: {}", source))]
    ListNamespaces { source: kube::Error },

    /// Error for when the HelmReleases of a namespace cannot be listed.
    #[snafu(display("Failed to list HelmReleases in namespace {}: {}", namespace, source))]
    ListHelmReleases {
        source: kube::Error,
        namespace: String,
    },

    /// Error for when the report cannot be serialized to JSON.
    #[snafu(display("Failed to serialize report to JSON: {}", source))]
    SerializeJson { source: serde_json::Error },

    /// Error for when the report cannot be serialized to YAML.
    #[snafu(display("Failed to serialize report to YAML: {}", source))]
    SerializeYaml { source: serde_yaml::Error },

    /// Error for when the report cannot be written out.
    #[snafu(display("Failed to write report: {}", source))]
    WriteReport { source: std::io::Error },
}
