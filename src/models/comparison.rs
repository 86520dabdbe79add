use crate::models::lenient;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Category name to numeric score. Non-numeric entries are dropped on
/// decode, so a lookup of any absent or malformed category yields 0.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ScoreMap(BTreeMap<String, f64>);

impl ScoreMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, category: &str, score: f64) -> Self {
        self.insert(category, score);
        self
    }

    pub fn insert(&mut self, category: &str, score: f64) {
        if score.is_finite() {
            self.0.insert(category.to_string(), score);
        }
    }

    pub fn get(&self, category: &str) -> f64 {
        self.0.get(category).copied().unwrap_or(0.0)
    }
}

impl<'de> Deserialize<'de> for ScoreMap {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Option::<BTreeMap<String, Value>>::deserialize(deserializer)?.unwrap_or_default();
        Ok(ScoreMap(
            raw.into_iter()
                .filter_map(|(key, value)| lenient::as_finite(&value).map(|score| (key, score)))
                .collect(),
        ))
    }
}

// Fixed category set scored for two-site comparisons (0-10 each)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComparisonCategory {
    ValueProposition,
    CtaStrength,
    TrustSignals,
    ContentDepth,
    MessagingFocus,
}

impl ComparisonCategory {
    pub const ALL: [ComparisonCategory; 5] = [
        ComparisonCategory::ValueProposition,
        ComparisonCategory::CtaStrength,
        ComparisonCategory::TrustSignals,
        ComparisonCategory::ContentDepth,
        ComparisonCategory::MessagingFocus,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            ComparisonCategory::ValueProposition => "value_proposition",
            ComparisonCategory::CtaStrength => "cta_strength",
            ComparisonCategory::TrustSignals => "trust_signals",
            ComparisonCategory::ContentDepth => "content_depth",
            ComparisonCategory::MessagingFocus => "messaging_focus",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ComparisonCategory::ValueProposition => "Value Proposition",
            ComparisonCategory::CtaStrength => "CTA Strength",
            ComparisonCategory::TrustSignals => "Trust Signals",
            ComparisonCategory::ContentDepth => "Content Depth",
            ComparisonCategory::MessagingFocus => "Messaging Focus",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Winner {
    EntityA,
    EntityB,
    Tie,
}

impl Winner {
    /// Parses the labels the backend uses ("Site A", "Site B", "Tie").
    pub fn from_label(label: &str) -> Option<Winner> {
        match label.trim().to_ascii_lowercase().as_str() {
            "site a" | "site_a" | "a" => Some(Winner::EntityA),
            "site b" | "site_b" | "b" => Some(Winner::EntityB),
            "tie" => Some(Winner::Tie),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Winner::EntityA => "Site A",
            Winner::EntityB => "Site B",
            Winner::Tie => "Tie",
        }
    }

    /// Badge text next to a category bar.
    pub fn badge(&self) -> String {
        match self {
            Winner::Tie => "Tie".to_string(),
            other => format!("{} wins", other.label()),
        }
    }

    pub fn headline(&self) -> String {
        match self {
            Winner::Tie => "It's a Tie!".to_string(),
            other => format!("{} Wins!", other.label()),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ComparisonPayload {
    pub site_a: Option<SiteDescriptor>,
    pub site_b: Option<SiteDescriptor>,
    pub comparison: Option<ComparisonAnalysis>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ComparisonAnalysis {
    pub scores: Option<ComparisonScores>,
    pub summary: Option<ComparisonSummary>,
    pub category_winners: Option<BTreeMap<String, Option<String>>>,
    pub improvement_suggestions: Option<ImprovementSuggestions>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ComparisonScores {
    pub site_a: ScoreMap,
    pub site_b: ScoreMap,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ComparisonSummary {
    pub overall_winner: Option<String>,
    pub reason_summary: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ImprovementSuggestions {
    pub site_a: Option<Vec<String>>,
    pub site_b: Option<Vec<String>>,
}

// Content extracted from one of the compared pages
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteDescriptor {
    pub url: Option<String>,
    pub page_title: Option<String>,
    pub main_heading_h1: Option<String>,
    #[serde(deserialize_with = "lenient::count")]
    pub approx_word_count: Option<u64>,
    pub hero_section_summary: Option<String>,
    pub primary_cta_text: Option<String>,
    pub secondary_cta_text: Option<String>,
    pub subheadings: Option<Vec<String>>,
    pub trust_signals_detected: Option<TrustSignalsDetected>,
    pub offer_clarity: Option<OfferClarity>,
    pub conversion_elements: Option<ConversionElements>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TrustSignalsDetected {
    #[serde(deserialize_with = "lenient::flag")]
    pub testimonials: bool,
    #[serde(deserialize_with = "lenient::flag")]
    pub reviews_or_ratings: bool,
    #[serde(deserialize_with = "lenient::flag")]
    pub client_logos: bool,
    #[serde(deserialize_with = "lenient::flag")]
    pub certifications_or_badges: bool,
    #[serde(deserialize_with = "lenient::flag")]
    pub social_proof_statements: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OfferClarity {
    pub what_the_business_offers: Option<String>,
    pub target_audience_detected: Option<String>,
    pub pricing_or_plan_visibility: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ConversionElements {
    pub cta_presence: Option<String>,
    #[serde(deserialize_with = "lenient::flag")]
    pub lead_capture_or_form: bool,
    pub contact_or_enquiry_path: Option<String>,
}
