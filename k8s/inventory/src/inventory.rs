use crate::{
    chart::{extract_chart, ChartRecord},
    error::Result,
    health::Health,
    resources::ResourceClient,
};
use tracing::{debug, error, info, warn};

/// Which namespaces an inventory covers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NamespaceSelector {
    /// Every namespace in the cluster.
    All,
    /// Exactly one namespace, whether it exists or not.
    Single(String),
}

impl From<Option<String>> for NamespaceSelector {
    /// An absent or empty namespace selects all namespaces.
    fn from(namespace: Option<String>) -> Self {
        match namespace {
            Some(namespace) if !namespace.is_empty() => Self::Single(namespace),
            _ => Self::All,
        }
    }
}

/// A HelmRelease and, if it could be read, its chart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseEntry {
    name: String,
    chart: Option<ChartRecord>,
}

impl ReleaseEntry {
    /// Name of the HelmRelease resource.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Chart metadata, None when the chart version could not be read.
    pub fn chart(&self) -> Option<&ChartRecord> {
        self.chart.as_ref()
    }

    /// Releases without a usable chart are unhealthy.
    pub fn health(&self) -> Health {
        self.chart
            .as_ref()
            .map_or(Health::Unhealthy, ChartRecord::health)
    }
}

/// A namespace and the HelmReleases found in it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamespaceEntry {
    name: String,
    releases: Vec<ReleaseEntry>,
}

impl NamespaceEntry {
    fn empty(name: &str) -> Self {
        Self {
            name: name.to_string(),
            releases: Vec::new(),
        }
    }

    /// Name of the namespace.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Releases in the order the API server returned them.
    pub fn releases(&self) -> &[ReleaseEntry] {
        &self.releases
    }
}

/// Snapshot of the HelmReleases across the selected namespaces.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Inventory {
    namespaces: Vec<NamespaceEntry>,
}

impl Inventory {
    /// Namespaces in the order they were selected, including those without releases.
    pub fn namespaces(&self) -> &[NamespaceEntry] {
        &self.namespaces
    }

    /// Total number of releases across all namespaces.
    pub fn release_count(&self) -> usize {
        self.namespaces.iter().map(|ns| ns.releases.len()).sum()
    }

    /// Check if no namespace was selected at all.
    pub fn is_empty(&self) -> bool {
        self.namespaces.is_empty()
    }
}

/// List and read the HelmReleases of one namespace.
///
/// Failing to list the namespace yields an entry without releases. Every listed document
/// yields exactly one release entry, with or without a chart.
pub async fn aggregate_namespace<C>(client: &C, namespace: &str) -> NamespaceEntry
where
    C: ResourceClient + ?Sized,
{
    let documents = match client.list_releases(namespace).await {
        Ok(documents) => documents,
        Err(error) => {
            error!(%namespace, %error, "There was an error searching for HelmReleases");
            return NamespaceEntry::empty(namespace);
        }
    };
    if documents.is_empty() {
        debug!(%namespace, "No HelmReleases found");
        return NamespaceEntry::empty(namespace);
    }

    let releases = documents
        .iter()
        .map(|document| ReleaseEntry {
            name: document.name().to_string(),
            chart: extract_chart(document).ok(),
        })
        .collect();

    NamespaceEntry {
        name: namespace.to_string(),
        releases,
    }
}

/// Builds an Inventory with an injected resource client.
pub struct InventoryBuilder<'a, C: ?Sized> {
    client: &'a C,
}

impl<'a, C> InventoryBuilder<'a, C>
where
    C: ResourceClient + ?Sized,
{
    /// Create a new builder reading through the given client.
    pub fn new(client: &'a C) -> Self {
        Self { client }
    }

    /// Scan the selected namespaces one after another.
    /// Only failing to list the cluster's namespaces is an error.
    /// An empty single namespace name selects all namespaces.
    pub async fn build(&self, selector: &NamespaceSelector) -> Result<Inventory> {
        let names = match selector {
            NamespaceSelector::Single(namespace) if !namespace.is_empty() => {
                vec![namespace.clone()]
            }
            _ => self.client.list_namespaces().await?,
        };
        if names.is_empty() {
            warn!("No namespaces found");
            return Ok(Inventory::default());
        }

        let mut namespaces = Vec::with_capacity(names.len());
        for name in &names {
            namespaces.push(aggregate_namespace(self.client, name).await);
        }
        info!(namespaces = namespaces.len(), "Collected HelmReleases inventory");

        Ok(Inventory { namespaces })
    }
}
