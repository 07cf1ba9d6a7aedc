use std::fmt;
use serde::{Deserialize, Serialize};
use crate::config::constants::{CVSS_CRITICAL_THRESHOLD, CVSS_HIGH_THRESHOLD, CVSS_MEDIUM_THRESHOLD};

/// Severity wording derived from a CVSS score. Independent of the badge severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CvssBucket {
    Critical,
    High,
    Medium,
    Low,
}

impl CvssBucket {
    /// Boundaries belong to the higher bucket. Anything that fails every
    /// threshold (including NaN) lands in `Low`.
    pub fn from_score(score: f64) -> Self {
        if score >= CVSS_CRITICAL_THRESHOLD {
            Self::Critical
        } else if score >= CVSS_HIGH_THRESHOLD {
            Self::High
        } else if score >= CVSS_MEDIUM_THRESHOLD {
            Self::Medium
        } else {
            Self::Low
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Critical => "Critical",
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
        }
    }
}

impl fmt::Display for CvssBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
