/// API group of the HelmRelease custom resource.
pub const HELM_RELEASE_GROUP: &str = "helm.fluxcd.io";
/// API version of the HelmRelease custom resource.
pub const HELM_RELEASE_VERSION: &str = "v1";
/// Kind of the HelmRelease custom resource.
pub const HELM_RELEASE_KIND: &str = "HelmRelease";
/// Plural resource name of the HelmRelease custom resource.
pub const HELM_RELEASE_PLURAL: &str = "helmreleases";

/// The phase the controller reports once a release has been applied successfully.
pub const SUCCEEDED_PHASE: &str = "Succeeded";

/// Page size for Kubernetes list calls.
pub(crate) const KUBE_API_PAGE_SIZE: u32 = 500;

/// Shown in the status column of a healthy release.
pub const RESOURCE_HEALTHY: &str = "\u{2705}";
/// Shown in the status column of an unhealthy release.
pub const RESOURCE_UNHEALTHY: &str = "\u{274C}";

/// Placeholder for chart columns of a release whose chart could not be read.
pub(crate) const MISSING_CELL: &str = "-";

/// Path of the chart repository within a HelmRelease document.
pub(crate) const CHART_REPOSITORY_PATH: &[&str] = &["spec", "chart", "repository"];
/// Path of the chart name within a HelmRelease document.
pub(crate) const CHART_NAME_PATH: &[&str] = &["spec", "chart", "name"];
/// Path of the chart version within a HelmRelease document.
pub(crate) const CHART_VERSION_PATH: &[&str] = &["spec", "chart", "version"];
/// Path of the controller reported phase within a HelmRelease document.
pub(crate) const PHASE_PATH: &[&str] = &["status", "phase"];
