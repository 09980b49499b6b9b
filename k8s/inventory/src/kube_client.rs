use crate::error::{
    InferConfig, K8sClientGeneration, LoadKubeconfig, ReadKubeconfig, Result, ServerVersion,
};
use kube::{
    config::{KubeConfigOptions, Kubeconfig},
    Client, Config,
};
use snafu::ResultExt;
use std::path::PathBuf;
use tracing::debug;

/// Builder for the kube::Client the inventory reads through.
#[derive(Default)]
pub struct KubeClientBuilder {
    kubeconfig: Option<PathBuf>,
    context: Option<String>,
}

impl KubeClientBuilder {
    /// Read the configuration from this kubeconfig file instead of inferring it.
    #[must_use]
    pub fn with_kubeconfig(mut self, kubeconfig: Option<PathBuf>) -> Self {
        self.kubeconfig = kubeconfig;
        self
    }

    /// Use this kubeconfig context instead of the current one.
    #[must_use]
    pub fn with_context(mut self, context: Option<String>) -> Self {
        self.context = context;
        self
    }

    /// Build the kube::Client.
    pub async fn build(self) -> Result<Client> {
        let options = KubeConfigOptions {
            context: self.context,
            ..Default::default()
        };
        let config = match self.kubeconfig {
            Some(path) => {
                debug!(kubeconfig = %path.display(), "Reading kubeconfig");
                let kubeconfig = Kubeconfig::read_from(&path).context(ReadKubeconfig { path })?;
                Config::from_custom_kubeconfig(kubeconfig, &options)
                    .await
                    .context(LoadKubeconfig)?
            }
            None if options.context.is_some() => Config::from_kubeconfig(&options)
                .await
                .context(LoadKubeconfig)?,
            None => Config::infer().await.context(InferConfig)?,
        };
        Client::try_from(config).context(K8sClientGeneration)
    }
}

/// Ask the API server for its version, which doubles as a reachability check.
pub async fn server_version(client: &Client) -> Result<String> {
    let info = client.apiserver_version().await.context(ServerVersion)?;
    Ok(info.git_version)
}
