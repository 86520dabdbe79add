use crate::models::grade::ColorBucket;
use crate::models::lenient;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct HeatmapPayload {
    pub url: Option<String>,
    pub screenshot_base64: Option<String>,
    pub analysis: Option<HeatmapAnalysis>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct HeatmapAnalysis {
    pub high_attention_zones: Option<Vec<Zone>>,
    pub medium_attention_zones: Option<Vec<Zone>>,
    pub low_attention_zones: Option<Vec<Zone>>,
    pub layout_elements: Option<Vec<LayoutElement>>,
    pub visual_pattern: Option<VisualPattern>,
    #[serde(deserialize_with = "lenient::number")]
    pub overall_attention_score: Option<f64>,
    pub layout_effectiveness: Option<String>,
    pub key_findings: Option<Vec<String>>,
    pub improvement_suggestions: Option<Vec<String>>,
    pub conversion_optimization_tips: Option<Vec<String>>,
}

/// A predicted attention region, in percent of the screenshot canvas.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Zone {
    #[serde(deserialize_with = "lenient::number")]
    pub x_percent: Option<f64>,
    #[serde(deserialize_with = "lenient::number")]
    pub y_percent: Option<f64>,
    #[serde(deserialize_with = "lenient::number")]
    pub width_percent: Option<f64>,
    #[serde(deserialize_with = "lenient::number")]
    pub height_percent: Option<f64>,
    #[serde(deserialize_with = "lenient::number")]
    pub attention_score: Option<f64>,
    pub zone_name: Option<String>,
    pub description: Option<String>,
    pub reasoning: Option<String>,
}

impl Zone {
    pub fn new(x: f64, y: f64, width: f64, height: f64, attention_score: f64) -> Self {
        Self {
            x_percent: Some(x),
            y_percent: Some(y),
            width_percent: Some(width),
            height_percent: Some(height),
            attention_score: Some(attention_score),
            ..Self::default()
        }
    }

    pub fn named(mut self, name: &str) -> Self {
        self.zone_name = Some(name.to_string());
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    High,
    Medium,
    Low,
}

impl Tier {
    pub const ALL: [Tier; 3] = [Tier::High, Tier::Medium, Tier::Low];

    pub fn as_str(&self) -> &'static str {
        match self {
            Tier::High => "high",
            Tier::Medium => "medium",
            Tier::Low => "low",
        }
    }

    pub fn style(&self) -> TierStyle {
        match self {
            Tier::High => TierStyle {
                fill: "rgba(239, 68, 68, 0.35)",
                border: "rgba(220, 38, 38, 0.9)",
                label_background: "rgb(220, 38, 38)",
                shadow: "0 0 8px rgba(220, 38, 38, 0.5)",
                opacity: 0.6,
                color: ColorBucket::Danger,
            },
            Tier::Medium => TierStyle {
                fill: "rgba(245, 158, 11, 0.3)",
                border: "rgba(217, 119, 6, 0.9)",
                label_background: "rgb(217, 119, 6)",
                shadow: "0 0 8px rgba(217, 119, 6, 0.4)",
                opacity: 0.5,
                color: ColorBucket::Warning,
            },
            Tier::Low => TierStyle {
                fill: "rgba(59, 130, 246, 0.25)",
                border: "rgba(37, 99, 235, 0.8)",
                label_background: "rgb(37, 99, 235)",
                shadow: "0 0 6px rgba(37, 99, 235, 0.3)",
                opacity: 0.4,
                color: ColorBucket::Info,
            },
        }
    }

    pub fn empty_message(&self) -> &'static str {
        match self {
            Tier::High => "No high attention zones detected",
            Tier::Medium => "No medium attention zones detected",
            Tier::Low => "No low attention zones detected",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TierStyle {
    pub fill: &'static str,
    pub border: &'static str,
    pub label_background: &'static str,
    pub shadow: &'static str,
    pub opacity: f64,
    pub color: ColorBucket,
}

/// Which tiers are shown on the overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TierFilter {
    #[default]
    All,
    High,
    Medium,
    Low,
}

impl TierFilter {
    pub fn includes(&self, tier: Tier) -> bool {
        match self {
            TierFilter::All => true,
            TierFilter::High => tier == Tier::High,
            TierFilter::Medium => tier == Tier::Medium,
            TierFilter::Low => tier == Tier::Low,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutElement {
    pub element_type: Option<ElementType>,
    pub content_preview: Option<String>,
    pub position: Option<String>,
    pub attention_impact: Option<AttentionImpact>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementType {
    Headline,
    Cta,
    Image,
    Navigation,
    Form,
    Footer,
    Hero,
    Testimonial,
    #[serde(other)]
    Other,
}

impl ElementType {
    pub fn label(&self) -> &'static str {
        match self {
            ElementType::Headline => "Headline",
            ElementType::Cta => "CTA",
            ElementType::Image => "Image",
            ElementType::Navigation => "Navigation",
            ElementType::Form => "Form",
            ElementType::Footer => "Footer",
            ElementType::Hero => "Hero",
            ElementType::Testimonial => "Testimonial",
            ElementType::Other => "Other",
        }
    }

    pub fn accent(&self) -> &'static str {
        match self {
            ElementType::Headline => "purple",
            ElementType::Cta => "green",
            ElementType::Image => "pink",
            ElementType::Navigation => "blue",
            ElementType::Form => "amber",
            ElementType::Footer | ElementType::Other => "gray",
            ElementType::Hero => "indigo",
            ElementType::Testimonial => "cyan",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttentionImpact {
    High,
    Medium,
    #[default]
    #[serde(other)]
    Low,
}

impl AttentionImpact {
    pub fn marker(&self) -> &'static str {
        match self {
            AttentionImpact::High => "🔥",
            AttentionImpact::Medium => "👀",
            AttentionImpact::Low => "👁",
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct VisualPattern {
    pub pattern_type: Option<PatternType>,
    #[serde(deserialize_with = "lenient::number")]
    pub effectiveness_score: Option<f64>,
    pub recommendation: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PatternType {
    #[serde(rename = "F-pattern")]
    FPattern,
    #[serde(rename = "Z-pattern")]
    ZPattern,
    Gutenberg,
    Spotted,
    #[serde(other)]
    Custom,
}

impl PatternType {
    pub fn label(&self) -> &'static str {
        match self {
            PatternType::FPattern => "F-pattern",
            PatternType::ZPattern => "Z-pattern",
            PatternType::Gutenberg => "Gutenberg",
            PatternType::Spotted => "Spotted",
            PatternType::Custom => "Custom",
        }
    }

    /// Gradient stops for the header band.
    pub fn accent(&self) -> (&'static str, &'static str) {
        match self {
            PatternType::FPattern => ("blue", "cyan"),
            PatternType::ZPattern => ("purple", "pink"),
            PatternType::Gutenberg => ("amber", "orange"),
            PatternType::Spotted => ("green", "emerald"),
            PatternType::Custom => ("gray", "slate"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn unknown_enumerations_fall_back() {
        let element: LayoutElement = serde_json::from_value(json!({
            "element_type": "carousel",
            "attention_impact": "extreme"
        }))
        .unwrap();
        assert_eq!(element.element_type, Some(ElementType::Other));
        assert_eq!(element.attention_impact, Some(AttentionImpact::Low));

        let pattern: VisualPattern =
            serde_json::from_value(json!({"pattern_type": "L-pattern"})).unwrap();
        assert_eq!(pattern.pattern_type, Some(PatternType::Custom));
    }

    #[test]
    fn pattern_names_match_backend() {
        let pattern: VisualPattern =
            serde_json::from_value(json!({"pattern_type": "F-pattern"})).unwrap();
        assert_eq!(pattern.pattern_type, Some(PatternType::FPattern));
    }

    #[test]
    fn filter_includes() {
        assert!(TierFilter::All.includes(Tier::Low));
        assert!(TierFilter::High.includes(Tier::High));
        assert!(!TierFilter::High.includes(Tier::Medium));
    }

    #[test]
    fn missing_tier_lists_decode_as_none() {
        let analysis: HeatmapAnalysis =
            serde_json::from_value(json!({"high_attention_zones": null})).unwrap();
        assert!(analysis.high_attention_zones.is_none());
        assert!(analysis.low_attention_zones.is_none());
    }
}
