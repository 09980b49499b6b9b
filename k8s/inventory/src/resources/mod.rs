/// Resource client trait and its kube implementation.
pub mod client;
/// Loosely typed HelmRelease documents.
pub mod document;

pub use client::{KubeResourceClient, ResourceClient};
pub use document::{nested_str, FieldError, ReleaseDocument};
