// src/services/analysis_service/view/mod.rs
//
// Immutable view-models handed to the presentation layer, one per workflow.

pub mod assessment;
pub mod comparison;
pub mod heatmap;
pub mod speed;

pub use assessment::{assessment_view, AssessmentView};
pub use comparison::{comparison_view, ComparisonView};
pub use heatmap::{heatmap_view, HeatmapView};
pub use speed::{speed_view, SpeedView};

use crate::models::{
    AssessmentPayload, ColorBucket, ComparisonPayload, HeatmapPayload, SpeedCheckPayload,
    TierFilter, WorkflowKind,
};
use serde::Serialize;
use serde_json::Value;

/// Pass/fail chip used by several panels.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Badge {
    pub label: String,
    pub value: Option<String>,
    pub count: Option<u64>,
    pub good: bool,
    pub color: ColorBucket,
}

impl Badge {
    pub fn new(label: impl Into<String>, good: bool) -> Self {
        Self {
            label: label.into(),
            value: None,
            count: None,
            good,
            color: if good {
                ColorBucket::Success
            } else {
                ColorBucket::Danger
            },
        }
    }

    /// Badge for a value that is merely "not good yet" rather than failing.
    pub fn status(label: impl Into<String>, value: impl Into<String>, good: bool) -> Self {
        Self {
            value: Some(value.into()),
            color: if good {
                ColorBucket::Success
            } else {
                ColorBucket::Warning
            },
            ..Self::new(label, good)
        }
    }

    pub fn with_count(mut self, count: Option<u64>) -> Self {
        self.count = count;
        self
    }
}

/// Any of the four view-models, tagged by workflow.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "workflow", rename_all = "kebab-case")]
pub enum WorkflowView {
    Comparison(Box<ComparisonView>),
    SpeedCheck(Box<SpeedView>),
    Heatmap(Box<HeatmapView>),
    Assessment(Box<AssessmentView>),
}

/// Decodes a raw backend payload for `kind` and renders its view-model.
pub fn render_view(
    kind: WorkflowKind,
    payload: Value,
    filter: TierFilter,
) -> Result<WorkflowView, serde_json::Error> {
    Ok(match kind {
        WorkflowKind::Comparison => {
            let payload: ComparisonPayload = serde_json::from_value(payload)?;
            WorkflowView::Comparison(Box::new(comparison_view(&payload)))
        }
        WorkflowKind::SpeedCheck => {
            let payload: SpeedCheckPayload = serde_json::from_value(payload)?;
            WorkflowView::SpeedCheck(Box::new(speed_view(&payload)))
        }
        WorkflowKind::Heatmap => {
            let payload: HeatmapPayload = serde_json::from_value(payload)?;
            WorkflowView::Heatmap(Box::new(heatmap_view(&payload, filter)))
        }
        WorkflowKind::Assessment => {
            let payload: AssessmentPayload = serde_json::from_value(payload)?;
            WorkflowView::Assessment(Box::new(assessment_view(&payload)))
        }
    })
}

pub(crate) fn list(items: &Option<Vec<String>>) -> Vec<String> {
    items
        .as_deref()
        .unwrap_or_default()
        .iter()
        .map(|item| item.trim())
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

pub(crate) fn non_empty(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

pub(crate) fn text_or(value: &Option<String>, default: &str) -> String {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .unwrap_or(default)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_drops_blank_items() {
        let items = Some(vec!["  a ".to_string(), "".to_string(), "b".to_string()]);
        assert_eq!(list(&items), vec!["a", "b"]);
        assert!(list(&None).is_empty());
    }

    #[test]
    fn text_defaults() {
        assert_eq!(text_or(&None, "Not found"), "Not found");
        assert_eq!(text_or(&Some(" ".into()), "Not found"), "Not found");
        assert_eq!(text_or(&Some("Title".into()), "Not found"), "Title");
    }

    #[test]
    fn render_view_tags_workflow() {
        let view = render_view(
            WorkflowKind::SpeedCheck,
            serde_json::json!({"url": "https://example.com"}),
            TierFilter::All,
        )
        .unwrap();
        let value = serde_json::to_value(&view).unwrap();
        assert_eq!(value["workflow"], "speed-check");
        assert_eq!(value["url"], "https://example.com");
    }

    #[test]
    fn render_view_rejects_wrong_shape() {
        assert!(render_view(
            WorkflowKind::Heatmap,
            serde_json::json!(["not", "an", "object"]),
            TierFilter::All
        )
        .is_err());
    }

    #[test]
    fn status_badge_warns_instead_of_failing() {
        let badge = Badge::status("Pricing Visibility", "missing", false);
        assert_eq!(badge.color, ColorBucket::Warning);
        assert_eq!(Badge::new("CDN", true).color, ColorBucket::Success);
    }
}
