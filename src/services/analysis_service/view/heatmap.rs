use super::{list, text_or};
use crate::models::{
    AttentionImpact, ColorBucket, ElementType, GradeBand, HeatmapPayload, PatternType, Rating,
    ScoreScale, Tier, TierFilter,
};
use crate::services::analysis_service::compute::{
    grade_score, AttentionLayout, TierZones, ZoneOverlay,
};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct HeatmapView {
    pub url: String,
    pub screenshot_uri: Option<String>,
    pub attention: GradeBand,
    pub layout_effectiveness: Option<Rating>,
    pub filter: TierFilter,
    pub layout: AttentionLayout,
    /// Overlays drawn for the active filter.
    pub overlays: Vec<ZoneOverlay>,
    pub tiers: Vec<TierCard>,
    pub elements: Vec<ElementBadge>,
    pub pattern: Option<PatternCard>,
    pub key_findings: Vec<String>,
    pub improvement_suggestions: Vec<String>,
    pub conversion_tips: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TierCard {
    pub tier: Tier,
    pub count: usize,
    pub empty: bool,
    pub empty_message: &'static str,
    pub color: ColorBucket,
}

#[derive(Debug, Clone, Serialize)]
pub struct ElementBadge {
    pub element_type: ElementType,
    pub label: &'static str,
    pub accent: &'static str,
    pub content_preview: String,
    pub position: String,
    pub impact: AttentionImpact,
    pub marker: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct PatternCard {
    pub pattern_type: PatternType,
    pub label: &'static str,
    pub accent: (&'static str, &'static str),
    pub effectiveness: GradeBand,
    pub recommendation: String,
}

fn screenshot_uri(encoded: &Option<String>) -> Option<String> {
    encoded
        .as_deref()
        .map(str::trim)
        .filter(|data| !data.is_empty())
        .map(|data| format!("data:image/jpeg;base64,{}", data))
}

pub fn heatmap_view(payload: &HeatmapPayload, filter: TierFilter) -> HeatmapView {
    let analysis = payload.analysis.clone().unwrap_or_default();
    let zones = TierZones::from_analysis(payload.analysis.as_ref());
    let layout = AttentionLayout::build(&zones);
    let overlays = layout.select(filter).into_iter().cloned().collect();

    let tiers = Tier::ALL
        .iter()
        .map(|tier| {
            let count = layout.tier(*tier).len();
            TierCard {
                tier: *tier,
                count,
                empty: count == 0,
                empty_message: tier.empty_message(),
                color: tier.style().color,
            }
        })
        .collect();

    let elements = analysis
        .layout_elements
        .as_deref()
        .unwrap_or_default()
        .iter()
        .map(|element| {
            let element_type = element.element_type.unwrap_or(ElementType::Other);
            let impact = element.attention_impact.unwrap_or_default();
            ElementBadge {
                element_type,
                label: element_type.label(),
                accent: element_type.accent(),
                content_preview: element.content_preview.clone().unwrap_or_default(),
                position: element.position.clone().unwrap_or_default(),
                impact,
                marker: impact.marker(),
            }
        })
        .collect();

    let pattern = analysis.visual_pattern.as_ref().map(|pattern| {
        let pattern_type = pattern.pattern_type.unwrap_or(PatternType::Custom);
        PatternCard {
            pattern_type,
            label: pattern_type.label(),
            accent: pattern_type.accent(),
            effectiveness: grade_score(pattern.effectiveness_score, ScoreScale::OutOfTen, None),
            recommendation: text_or(&pattern.recommendation, "No specific recommendation"),
        }
    });

    HeatmapView {
        url: payload.url.clone().unwrap_or_default(),
        screenshot_uri: screenshot_uri(&payload.screenshot_base64),
        attention: grade_score(analysis.overall_attention_score, ScoreScale::OutOfTen, None),
        layout_effectiveness: analysis.layout_effectiveness.as_deref().and_then(Rating::parse),
        filter,
        overlays,
        layout,
        tiers,
        elements,
        pattern,
        key_findings: list(&analysis.key_findings),
        improvement_suggestions: list(&analysis.improvement_suggestions),
        conversion_tips: list(&analysis.conversion_optimization_tips),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn payload() -> HeatmapPayload {
        serde_json::from_value(json!({
            "url": "https://example.com",
            "screenshot_base64": "AAAA",
            "analysis": {
                "high_attention_zones": [
                    {"x_percent": 10, "y_percent": 5, "width_percent": 40, "height_percent": 10,
                     "attention_score": 9, "zone_name": "Headline"}
                ],
                "medium_attention_zones": [
                    {"x_percent": 60, "y_percent": 30, "width_percent": 5, "height_percent": 2,
                     "attention_score": 6}
                ],
                "low_attention_zones": null,
                "layout_elements": [
                    {"element_type": "cta", "content_preview": "Buy now", "attention_impact": "high"},
                    {"element_type": "sidebar"}
                ],
                "visual_pattern": {"pattern_type": "Z-pattern", "effectiveness_score": 6.5},
                "overall_attention_score": 8,
                "layout_effectiveness": "Needs Improvement",
                "key_findings": ["Headline draws the eye"]
            }
        }))
        .unwrap()
    }

    #[test]
    fn overlays_follow_filter() {
        let all = heatmap_view(&payload(), TierFilter::All);
        assert_eq!(all.overlays.len(), 2);
        assert_eq!(all.layout.select(TierFilter::All).len(), 2);

        let high = heatmap_view(&payload(), TierFilter::High);
        assert_eq!(high.overlays.len(), 1);
        assert_eq!(high.overlays[0].zone_name, "Headline");
        assert!(high.overlays[0].persistent_badge_visible);

        let low = heatmap_view(&payload(), TierFilter::Low);
        assert!(low.overlays.is_empty());
    }

    #[test]
    fn tier_cards_flag_empty_tiers() {
        let view = heatmap_view(&payload(), TierFilter::All);
        assert!(!view.tiers[0].empty);
        assert_eq!(view.tiers[1].count, 1);
        assert!(view.tiers[2].empty);
        assert_eq!(view.tiers[2].empty_message, "No low attention zones detected");
    }

    #[test]
    fn bands_and_metadata() {
        let view = heatmap_view(&payload(), TierFilter::All);
        assert_eq!(view.attention.rating, Rating::Excellent);
        assert_eq!(view.layout_effectiveness, Some(Rating::NeedsImprovement));
        assert_eq!(view.screenshot_uri.as_deref(), Some("data:image/jpeg;base64,AAAA"));

        let pattern = view.pattern.unwrap();
        assert_eq!(pattern.label, "Z-pattern");
        assert_eq!(pattern.effectiveness.rating, Rating::Good);
        assert_eq!(pattern.recommendation, "No specific recommendation");

        assert_eq!(view.elements[0].label, "CTA");
        assert_eq!(view.elements[0].marker, "🔥");
        assert_eq!(view.elements[1].element_type, ElementType::Other);
        assert_eq!(view.elements[1].impact, AttentionImpact::Low);
    }

    #[test]
    fn empty_payload() {
        let view = heatmap_view(&HeatmapPayload::default(), TierFilter::All);
        assert!(view.overlays.is_empty());
        assert!(view.screenshot_uri.is_none());
        assert!(view.pattern.is_none());
        assert!(view.tiers.iter().all(|t| t.empty));
        assert_eq!(view.attention.rating, Rating::Poor);
    }
}
