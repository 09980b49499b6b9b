/// Extraction of chart metadata from HelmRelease documents.
pub mod chart;
/// Module for inventory related constants.
pub mod constants;
/// Module for inventory errors.
pub mod error;
/// Classification of a release's deployment phase.
pub mod health;
/// Namespace aggregation and the inventory builder.
pub mod inventory;
/// Kubernetes client bootstrapping.
pub mod kube_client;
/// Rendering of a completed inventory.
pub mod report;
/// Read-only access to cluster resources.
pub mod resources;

#[cfg(test)]
mod test_utils;
