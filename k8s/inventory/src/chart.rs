use crate::{
    constants::{CHART_NAME_PATH, CHART_REPOSITORY_PATH, CHART_VERSION_PATH, PHASE_PATH},
    health::Health,
    resources::{FieldError, ReleaseDocument},
};
use snafu::{ResultExt, Snafu};
use tracing::warn;

/// Chart metadata of a deployed HelmRelease.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartRecord {
    name: String,
    version: String,
    repository: String,
    phase: String,
}

impl ChartRecord {
    /// Name of the chart, empty if the release didn't carry one.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Version of the chart.
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Repository of the chart, empty if the release didn't carry one.
    pub fn repository(&self) -> &str {
        &self.repository
    }

    /// Phase reported by the controller, empty if not reported yet.
    pub fn phase(&self) -> &str {
        &self.phase
    }

    /// Health derived from the reported phase.
    pub fn health(&self) -> Health {
        Health::from_phase(&self.phase)
    }
}

/// A release whose chart metadata is unusable.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
#[snafu(context(suffix(false)))]
pub enum ExtractionError {
    /// Error for when the chart version of a release cannot be read.
    #[snafu(display(
        "Failed to get a chart version for HelmRelease {}, cannot continue: {}",
        release,
        source
    ))]
    MissingVersion { source: FieldError, release: String },
}

/// Project the chart metadata out of a HelmRelease document.
///
/// The chart name, repository and phase fall back to an empty string when they can't be read.
/// Without a version there is no usable record.
pub fn extract_chart(document: &ReleaseDocument) -> Result<ChartRecord, ExtractionError> {
    let release = document.name();

    let repository = optional_field(document, CHART_REPOSITORY_PATH, "chart repository");
    let name = optional_field(document, CHART_NAME_PATH, "chart name");
    let phase = optional_field(document, PHASE_PATH, "deployment phase");

    let version = document
        .string_at(CHART_VERSION_PATH)
        .map_err(|error| {
            warn!(%release, %error, "Failed to get a chart version, cannot continue");
            error
        })
        .context(MissingVersion { release })?
        .to_string();

    Ok(ChartRecord {
        name,
        version,
        repository,
        phase,
    })
}

fn optional_field(document: &ReleaseDocument, path: &[&str], field: &str) -> String {
    match document.string_at(path) {
        Ok(value) => value.to_string(),
        Err(error) => {
            warn!(release = %document.name(), %error, "Failed to get a {field}");
            String::new()
        }
    }
}
