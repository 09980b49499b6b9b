use crate::constants::{RESOURCE_HEALTHY, RESOURCE_UNHEALTHY, SUCCEEDED_PHASE};
use serde::Serialize;
use std::fmt::{Display, Formatter};

/// Whether a release was applied successfully by the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Health {
    /// The controller reported the success phase.
    Healthy,
    /// Any other phase, or no readable chart at all.
    Unhealthy,
}

impl Health {
    /// Only the exact success phase is healthy. Any other phase, including transient ones such
    /// as "Pending" and the empty string, is unhealthy.
    pub fn from_phase(phase: &str) -> Self {
        if phase == SUCCEEDED_PHASE {
            Self::Healthy
        } else {
            Self::Unhealthy
        }
    }
}

impl Display for Health {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Healthy => write!(f, "{RESOURCE_HEALTHY}"),
            Self::Unhealthy => write!(f, "{RESOURCE_UNHEALTHY}"),
        }
    }
}
