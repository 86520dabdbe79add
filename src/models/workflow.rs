use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// The four independent analysis flows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WorkflowKind {
    Comparison,
    SpeedCheck,
    Heatmap,
    Assessment,
}

impl WorkflowKind {
    pub const ALL: [WorkflowKind; 4] = [
        WorkflowKind::Comparison,
        WorkflowKind::SpeedCheck,
        WorkflowKind::Heatmap,
        WorkflowKind::Assessment,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            WorkflowKind::Comparison => "comparison",
            WorkflowKind::SpeedCheck => "speed-check",
            WorkflowKind::Heatmap => "heatmap",
            WorkflowKind::Assessment => "assessment",
        }
    }

    /// Path segment under the backend's `/api` root.
    pub fn endpoint(&self) -> &'static str {
        match self {
            WorkflowKind::Comparison => "analyze-and-compare",
            WorkflowKind::SpeedCheck => "check-speed",
            WorkflowKind::Heatmap => "analyze-heatmap",
            WorkflowKind::Assessment => "page-assessment",
        }
    }

    /// Shown when the backend gives no `detail` of its own.
    pub fn generic_error(&self) -> &'static str {
        match self {
            WorkflowKind::Comparison => {
                "Failed to analyze websites. Please check the URLs and try again."
            }
            WorkflowKind::SpeedCheck => {
                "Failed to check website speed. Please check the URL and try again."
            }
            WorkflowKind::Heatmap => "Failed to analyze website. Please check the URL and try again.",
            WorkflowKind::Assessment => "Failed to assess page. Please check the URL and try again.",
        }
    }

    pub fn validation_error(&self) -> &'static str {
        match self {
            WorkflowKind::Comparison => "Please enter both website URLs",
            _ => "Please enter a website URL",
        }
    }
}

impl fmt::Display for WorkflowKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for WorkflowKind {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        WorkflowKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == value)
            .ok_or_else(|| format!("Unknown workflow: {}", value))
    }
}
