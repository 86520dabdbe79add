use super::{list, non_empty, text_or};
use crate::models::{
    AssessmentPayload, BusinessType, ChecklistItem, ChecklistStatus, ColorBucket, GradeBand,
    Goal, Rating, ScoreScale,
};
use crate::services::analysis_service::compute::{grade_score, rate};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Degrees of sweep per point on the 0-100 gauge.
const DEGREES_PER_POINT: f64 = 3.6;

#[derive(Debug, Clone, Serialize)]
pub struct AssessmentView {
    pub url: String,
    pub overall: GradeBand,
    pub business_type: String,
    pub goal: String,
    pub uiux_gauges: Vec<Gauge>,
    pub content_gauges: Vec<Gauge>,
    pub headline: SectionCard,
    pub cta: SectionCard,
    pub hero: SectionCard,
    pub trust: TrustCard,
    pub tone: Option<String>,
    pub meta_description: Option<String>,
    pub checklists: Vec<ChecklistGroup>,
    pub content_plan: Vec<String>,
    pub top_priorities: Vec<String>,
    pub quick_wins: Vec<String>,
    pub rewrites: Vec<RewriteGroup>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Gauge {
    pub label: &'static str,
    pub score: f64,
    pub rating: Rating,
    pub color: ColorBucket,
    pub sweep_degrees: f64,
}

impl Gauge {
    pub fn new(label: &'static str, score: Option<f64>) -> Self {
        let score = score.filter(|s| s.is_finite()).unwrap_or(0.0);
        let rating = rate(Some(score), ScoreScale::OutOfHundred);
        Self {
            label,
            score,
            rating,
            color: rating.color(),
            sweep_degrees: score.clamp(0.0, 100.0) * DEGREES_PER_POINT,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SectionCard {
    pub gauge: Gauge,
    pub current: Option<String>,
    pub issues: Vec<String>,
    pub suggestions: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TrustCard {
    pub gauge: Gauge,
    pub detected: Vec<String>,
    pub missing: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChecklistRow {
    pub item: String,
    pub status: ChecklistStatus,
    pub color: ColorBucket,
    pub recommendation: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChecklistGroup {
    pub title: &'static str,
    pub items: Vec<ChecklistRow>,
    pub passed: usize,
    pub warning: usize,
    pub missing: usize,
}

impl ChecklistGroup {
    fn new(title: &'static str, items: &Option<Vec<ChecklistItem>>) -> Self {
        let items: Vec<ChecklistRow> = items
            .as_deref()
            .unwrap_or_default()
            .iter()
            .map(|item| {
                let status = item.status.unwrap_or_default();
                ChecklistRow {
                    item: item.item.clone().unwrap_or_default(),
                    status,
                    color: status.color(),
                    recommendation: item.recommendation.clone(),
                }
            })
            .collect();
        let count = |status: ChecklistStatus| items.iter().filter(|i| i.status == status).count();

        Self {
            title,
            passed: count(ChecklistStatus::Passed),
            warning: count(ChecklistStatus::Warning),
            missing: count(ChecklistStatus::Missing),
            items,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RewriteKind {
    Headline,
    Hero,
    Cta,
    Content,
}

#[derive(Debug, Clone, Serialize)]
pub struct RewriteGroup {
    pub kind: RewriteKind,
    pub suggestions: Vec<String>,
}

/// Display label for an enumerated value, or the raw text when it is unknown.
fn enum_label<T: DeserializeOwned>(
    value: &Option<String>,
    default: T,
    label: impl Fn(&T) -> &'static str,
) -> String {
    match value.as_deref().map(str::trim).filter(|v| !v.is_empty()) {
        None => label(&default).to_string(),
        Some(raw) => serde_json::from_value::<T>(serde_json::Value::String(raw.to_string()))
            .map(|parsed| label(&parsed).to_string())
            .unwrap_or_else(|_| raw.to_string()),
    }
}

pub fn assessment_view(payload: &AssessmentPayload) -> AssessmentView {
    let uiux = payload.uiux_scores.clone().unwrap_or_default();
    let headline = payload.headline_analysis.clone().unwrap_or_default();
    let cta = payload.cta_analysis.clone().unwrap_or_default();
    let hero = payload.hero_analysis.clone().unwrap_or_default();
    let trust = payload.trust_analysis.clone().unwrap_or_default();
    let content = payload.content_analysis.clone().unwrap_or_default();
    let content_scores = content.scores.clone().unwrap_or_default();
    let checklists = payload.checklists.clone().unwrap_or_default();

    let uiux_gauges = vec![
        Gauge::new("Headline", uiux.headline_strength),
        Gauge::new("CTA", uiux.cta_effectiveness),
        Gauge::new("Above Fold", uiux.above_fold_content),
        Gauge::new("Trust", uiux.trust_signals),
        Gauge::new("Hierarchy", uiux.visual_hierarchy),
        Gauge::new("Overall", uiux.overall_score),
    ];
    let content_gauges = vec![
        Gauge::new("Readability", content_scores.readability_score),
        Gauge::new("Keywords", content_scores.keyword_density_score),
        Gauge::new("Structure", content_scores.paragraph_structure_score),
        Gauge::new("Tone", content_scores.tone_clarity_score),
        Gauge::new("Skimmability", content_scores.skimmability_score),
        Gauge::new("Jargon-Free", content_scores.jargon_score),
        Gauge::new("Overall", content_scores.overall_score),
    ];

    let cta_current = if cta.cta_found {
        non_empty(&cta.cta_text)
    } else {
        None
    };

    let rewrites = [
        (RewriteKind::Headline, list(&headline.rewrite_suggestions)),
        (RewriteKind::Hero, list(&hero.rewrite_suggestions)),
        (RewriteKind::Cta, list(&cta.copy_improvements)),
        (RewriteKind::Content, list(&content.rewrite_suggestions)),
    ]
    .into_iter()
    .filter(|(_, suggestions)| !suggestions.is_empty())
    .map(|(kind, suggestions)| RewriteGroup { kind, suggestions })
    .collect();

    AssessmentView {
        url: payload.url.clone().unwrap_or_default(),
        overall: grade_score(
            payload.overall_score,
            ScoreScale::OutOfHundred,
            payload.grade.as_deref(),
        ),
        business_type: enum_label(
            &payload.business_type,
            BusinessType::default(),
            BusinessType::label,
        ),
        goal: enum_label(&payload.goal, Goal::default(), Goal::label),
        uiux_gauges,
        content_gauges,
        headline: SectionCard {
            gauge: Gauge::new("Score", headline.strength_score),
            current: Some(text_or(&headline.current_headline, "Not found")),
            issues: list(&headline.issues),
            suggestions: Vec::new(),
        },
        cta: SectionCard {
            gauge: Gauge::new("Placement", cta.placement_score),
            current: cta_current,
            issues: list(&cta.issues),
            suggestions: list(&cta.suggested_placements),
        },
        hero: SectionCard {
            gauge: Gauge::new("Effectiveness", hero.effectiveness_score),
            current: non_empty(&hero.current_summary),
            issues: list(&hero.issues),
            suggestions: Vec::new(),
        },
        trust: TrustCard {
            gauge: Gauge::new("Trust Score", trust.score),
            detected: list(&trust.detected_signals),
            missing: list(&trust.missing_signals),
        },
        tone: non_empty(&content.tone_analysis),
        meta_description: non_empty(&content.suggested_meta_description),
        checklists: vec![
            ChecklistGroup::new("UX Checklist", &checklists.ux_checklist),
            ChecklistGroup::new("Conversion Checklist", &checklists.conversion_checklist),
            ChecklistGroup::new("SEO Checklist", &checklists.seo_checklist),
        ],
        content_plan: list(&checklists.content_improvement_plan),
        top_priorities: list(&payload.top_priorities),
        quick_wins: list(&payload.quick_wins),
        rewrites,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn gauge_sweep_and_band() {
        let gauge = Gauge::new("Headline", Some(75.0));
        assert_eq!(gauge.sweep_degrees, 270.0);
        assert_eq!(gauge.rating, Rating::Good);
        assert_eq!(gauge.color, ColorBucket::Info);

        let missing = Gauge::new("CTA", None);
        assert_eq!(missing.score, 0.0);
        assert_eq!(missing.sweep_degrees, 0.0);
        assert_eq!(missing.rating, Rating::Poor);

        assert_eq!(Gauge::new("Over", Some(140.0)).sweep_degrees, 360.0);
    }

    #[test]
    fn checklist_counts_by_status() {
        let payload: AssessmentPayload = serde_json::from_value(json!({
            "checklists": {
                "ux_checklist": [
                    {"item": "Clear H1", "status": "passed"},
                    {"item": "Contrast", "status": "warning"},
                    {"item": "Favicon"},
                    {"item": "Breadcrumbs", "status": "bogus"}
                ]
            }
        }))
        .unwrap();
        let view = assessment_view(&payload);
        let ux = &view.checklists[0];
        assert_eq!((ux.passed, ux.warning, ux.missing), (1, 1, 2));
        assert_eq!(ux.items[2].color, ColorBucket::Danger);
        assert!(view.checklists[1].items.is_empty());
    }

    #[test]
    fn labels_fall_back_to_raw_text() {
        let payload: AssessmentPayload = serde_json::from_value(json!({
            "business_type": "local_business",
            "goal": "world_domination"
        }))
        .unwrap();
        let view = assessment_view(&payload);
        assert_eq!(view.business_type, "Local Business");
        assert_eq!(view.goal, "world_domination");

        let defaults = assessment_view(&AssessmentPayload::default());
        assert_eq!(defaults.business_type, "SaaS");
        assert_eq!(defaults.goal, "Lead Generation");
    }

    #[test]
    fn overall_band_keeps_backend_letter() {
        let payload: AssessmentPayload =
            serde_json::from_value(json!({"overall_score": 84, "grade": "A-"})).unwrap();
        let view = assessment_view(&payload);
        assert_eq!(view.overall.rating, Rating::Excellent);
        assert_eq!(view.overall.letter_grade, "A-");
    }

    #[test]
    fn rewrites_grouped_by_kind() {
        let payload: AssessmentPayload = serde_json::from_value(json!({
            "headline_analysis": {"rewrite_suggestions": ["Ship faster"]},
            "cta_analysis": {"cta_found": true, "cta_text": "Go", "copy_improvements": ["Start now"]},
            "content_analysis": {"rewrite_suggestions": []}
        }))
        .unwrap();
        let view = assessment_view(&payload);
        let kinds: Vec<RewriteKind> = view.rewrites.iter().map(|g| g.kind).collect();
        assert_eq!(kinds, vec![RewriteKind::Headline, RewriteKind::Cta]);
        assert_eq!(view.cta.current.as_deref(), Some("Go"));
        assert_eq!(view.headline.current.as_deref(), Some("Not found"));
    }
}
