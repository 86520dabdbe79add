use crate::models::grade::ColorBucket;
use crate::models::lenient;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BusinessType {
    #[default]
    Saas,
    Ecommerce,
    Agency,
    Portfolio,
    Blog,
    LocalBusiness,
    Nonprofit,
}

impl BusinessType {
    pub fn label(&self) -> &'static str {
        match self {
            BusinessType::Saas => "SaaS",
            BusinessType::Ecommerce => "E-commerce",
            BusinessType::Agency => "Agency",
            BusinessType::Portfolio => "Portfolio",
            BusinessType::Blog => "Blog",
            BusinessType::LocalBusiness => "Local Business",
            BusinessType::Nonprofit => "Non-profit",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Goal {
    #[default]
    Leads,
    Sales,
    Branding,
}

impl Goal {
    pub fn label(&self) -> &'static str {
        match self {
            Goal::Leads => "Lead Generation",
            Goal::Sales => "Sales/Conversion",
            Goal::Branding => "Brand Building",
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AssessmentPayload {
    pub url: Option<String>,
    /// Echoed back by the backend; kept as text so an unknown value still shows.
    pub business_type: Option<String>,
    pub goal: Option<String>,
    #[serde(deserialize_with = "lenient::number")]
    pub overall_score: Option<f64>,
    pub grade: Option<String>,
    pub uiux_scores: Option<UiuxScores>,
    pub headline_analysis: Option<HeadlineAnalysis>,
    pub cta_analysis: Option<CtaAnalysis>,
    pub hero_analysis: Option<HeroAnalysis>,
    pub trust_analysis: Option<TrustAnalysis>,
    pub content_analysis: Option<ContentAnalysis>,
    pub checklists: Option<Checklists>,
    pub top_priorities: Option<Vec<String>>,
    pub quick_wins: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UiuxScores {
    #[serde(deserialize_with = "lenient::number")]
    pub headline_strength: Option<f64>,
    #[serde(deserialize_with = "lenient::number")]
    pub cta_effectiveness: Option<f64>,
    #[serde(deserialize_with = "lenient::number")]
    pub above_fold_content: Option<f64>,
    #[serde(deserialize_with = "lenient::number")]
    pub trust_signals: Option<f64>,
    #[serde(deserialize_with = "lenient::number")]
    pub visual_hierarchy: Option<f64>,
    #[serde(deserialize_with = "lenient::number")]
    pub overall_score: Option<f64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct HeadlineAnalysis {
    #[serde(deserialize_with = "lenient::number")]
    pub strength_score: Option<f64>,
    pub current_headline: Option<String>,
    pub issues: Option<Vec<String>>,
    pub rewrite_suggestions: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CtaAnalysis {
    #[serde(deserialize_with = "lenient::number")]
    pub placement_score: Option<f64>,
    #[serde(deserialize_with = "lenient::flag")]
    pub cta_found: bool,
    pub cta_text: Option<String>,
    pub issues: Option<Vec<String>>,
    pub suggested_placements: Option<Vec<String>>,
    pub copy_improvements: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct HeroAnalysis {
    #[serde(deserialize_with = "lenient::number")]
    pub effectiveness_score: Option<f64>,
    pub current_summary: Option<String>,
    pub issues: Option<Vec<String>>,
    pub rewrite_suggestions: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TrustAnalysis {
    #[serde(deserialize_with = "lenient::number")]
    pub score: Option<f64>,
    pub detected_signals: Option<Vec<String>>,
    pub missing_signals: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentAnalysis {
    pub scores: Option<ContentScores>,
    pub bullet_point_summary: Option<Vec<String>>,
    pub tone_analysis: Option<String>,
    pub readability_issues: Option<Vec<String>>,
    pub jargon_detected: Option<Vec<String>>,
    pub suggested_meta_description: Option<String>,
    pub rewrite_suggestions: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentScores {
    #[serde(deserialize_with = "lenient::number")]
    pub readability_score: Option<f64>,
    #[serde(deserialize_with = "lenient::number")]
    pub keyword_density_score: Option<f64>,
    #[serde(deserialize_with = "lenient::number")]
    pub paragraph_structure_score: Option<f64>,
    #[serde(deserialize_with = "lenient::number")]
    pub tone_clarity_score: Option<f64>,
    #[serde(deserialize_with = "lenient::number")]
    pub skimmability_score: Option<f64>,
    #[serde(deserialize_with = "lenient::number")]
    pub jargon_score: Option<f64>,
    #[serde(deserialize_with = "lenient::number")]
    pub overall_score: Option<f64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Checklists {
    pub ux_checklist: Option<Vec<ChecklistItem>>,
    pub conversion_checklist: Option<Vec<ChecklistItem>>,
    pub seo_checklist: Option<Vec<ChecklistItem>>,
    pub content_improvement_plan: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ChecklistItem {
    pub item: Option<String>,
    pub status: Option<ChecklistStatus>,
    pub recommendation: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChecklistStatus {
    Passed,
    Warning,
    #[default]
    #[serde(other)]
    Missing,
}

impl ChecklistStatus {
    pub fn color(&self) -> ColorBucket {
        match self {
            ChecklistStatus::Passed => ColorBucket::Success,
            ChecklistStatus::Warning => ColorBucket::Warning,
            ChecklistStatus::Missing => ColorBucket::Danger,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn checklist_status_defaults_to_missing() {
        let items: Vec<ChecklistItem> = serde_json::from_value(json!([
            {"item": "Has H1", "status": "passed"},
            {"item": "Alt text", "status": "unknown"},
            {"item": "Meta description"}
        ]))
        .unwrap();
        assert_eq!(items[0].status, Some(ChecklistStatus::Passed));
        assert_eq!(items[1].status, Some(ChecklistStatus::Missing));
        assert_eq!(items[2].status.unwrap_or_default(), ChecklistStatus::Missing);
    }

    #[test]
    fn business_type_and_goal_labels() {
        let business: BusinessType = serde_json::from_value(json!("local_business")).unwrap();
        assert_eq!(business.label(), "Local Business");
        let goal: Goal = serde_json::from_value(json!("sales")).unwrap();
        assert_eq!(goal.label(), "Sales/Conversion");
    }
}
