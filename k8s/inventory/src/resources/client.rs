use crate::{
    constants::{
        HELM_RELEASE_GROUP, HELM_RELEASE_KIND, HELM_RELEASE_PLURAL, HELM_RELEASE_VERSION,
        KUBE_API_PAGE_SIZE,
    },
    error::{ListHelmReleases, ListNamespaces, Result},
    resources::document::ReleaseDocument,
};
use async_trait::async_trait;
use k8s_openapi::api::core::v1::Namespace;
use kube::{
    api::{Api, ApiResource, DynamicObject, ListParams},
    Client,
};
use snafu::ResultExt;

/// Read-only view of the cluster, as much as the inventory needs of it.
#[async_trait]
pub trait ResourceClient {
    /// Names of all namespaces in the cluster, in the order the API server returns them.
    async fn list_namespaces(&self) -> Result<Vec<String>>;

    /// HelmRelease documents of a namespace, in the order the API server returns them.
    async fn list_releases(&self, namespace: &str) -> Result<Vec<ReleaseDocument>>;
}

/// ResourceClient backed by a kube::Client.
#[derive(Clone)]
pub struct KubeResourceClient {
    client: Client,
    helm_release: ApiResource,
}

impl KubeResourceClient {
    /// Create a new KubeResourceClient from an existing kube::Client.
    pub fn new(client: Client) -> Self {
        Self {
            client,
            helm_release: helm_release_api_resource(),
        }
    }

    fn namespaces_api(&self) -> Api<Namespace> {
        Api::all(self.client.clone())
    }

    fn helm_releases_api(&self, namespace: &str) -> Api<DynamicObject> {
        Api::namespaced_with(self.client.clone(), namespace, &self.helm_release)
    }
}

/// ApiResource definition for the HelmRelease custom resource.
pub(crate) fn helm_release_api_resource() -> ApiResource {
    ApiResource {
        group: HELM_RELEASE_GROUP.to_string(),
        version: HELM_RELEASE_VERSION.to_string(),
        api_version: format!("{HELM_RELEASE_GROUP}/{HELM_RELEASE_VERSION}"),
        kind: HELM_RELEASE_KIND.to_string(),
        plural: HELM_RELEASE_PLURAL.to_string(),
    }
}

#[async_trait]
impl ResourceClient for KubeResourceClient {
    async fn list_namespaces(&self) -> Result<Vec<String>> {
        let mut namespaces: Vec<String> = Vec::new();
        let mut list_params = ListParams::default().limit(KUBE_API_PAGE_SIZE);

        loop {
            let namespace_list = self
                .namespaces_api()
                .list_metadata(&list_params)
                .await
                .context(ListNamespaces)?;

            let continue_ = namespace_list.metadata.continue_.clone();

            namespaces.extend(
                namespace_list
                    .items
                    .into_iter()
                    .filter_map(|namespace| namespace.metadata.name),
            );

            match continue_ {
                Some(token) if !token.is_empty() => {
                    list_params = list_params.continue_token(token.as_str());
                }
                _ => break,
            }
        }

        Ok(namespaces)
    }

    async fn list_releases(&self, namespace: &str) -> Result<Vec<ReleaseDocument>> {
        let mut releases: Vec<ReleaseDocument> = Vec::new();
        let mut list_params = ListParams::default().limit(KUBE_API_PAGE_SIZE);
        let api = self.helm_releases_api(namespace);

        loop {
            let release_list = api.list(&list_params).await.context(ListHelmReleases {
                namespace: namespace.to_string(),
            })?;

            let continue_ = release_list.metadata.continue_.clone();

            releases.extend(release_list.items.into_iter().map(ReleaseDocument::from));

            match continue_ {
                Some(token) if !token.is_empty() => {
                    list_params = list_params.continue_token(token.as_str());
                }
                _ => break,
            }
        }

        Ok(releases)
    }
}

#[cfg(test)]
mod tests {
    use super::helm_release_api_resource;

    #[test]
    fn helm_release_resource_coordinates() {
        let resource = helm_release_api_resource();
        assert_eq!(resource.api_version, "helm.fluxcd.io/v1");
        assert_eq!(resource.kind, "HelmRelease");
        assert_eq!(resource.plural, "helmreleases");
    }
}
