use crate::models::grade::ColorBucket;
use crate::models::lenient;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SpeedCheckPayload {
    pub url: Option<String>,
    pub scan_data: Option<ScanData>,
    pub analysis: Option<SpeedAnalysis>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanData {
    pub basic_metrics: Option<BasicMetrics>,
    pub performance_indicators: Option<PerformanceIndicators>,
    pub potential_bottlenecks: Option<PotentialBottlenecks>,
    pub resource_breakdown: Option<ResourceBreakdown>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BasicMetrics {
    #[serde(deserialize_with = "lenient::number")]
    pub time_to_first_byte_ms: Option<f64>,
    #[serde(deserialize_with = "lenient::number")]
    pub dom_content_loaded_ms: Option<f64>,
    #[serde(deserialize_with = "lenient::number")]
    pub fully_loaded_ms: Option<f64>,
    #[serde(deserialize_with = "lenient::count")]
    pub total_requests: Option<u64>,
    #[serde(deserialize_with = "lenient::number")]
    pub total_page_size_kb: Option<f64>,
    #[serde(deserialize_with = "lenient::count")]
    pub script_count: Option<u64>,
    #[serde(deserialize_with = "lenient::count")]
    pub image_count: Option<u64>,
    #[serde(deserialize_with = "lenient::count")]
    pub css_file_count: Option<u64>,
    #[serde(deserialize_with = "lenient::count")]
    pub font_count: Option<u64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PerformanceIndicators {
    #[serde(deserialize_with = "lenient::flag")]
    pub compression_enabled: bool,
    #[serde(deserialize_with = "lenient::flag")]
    pub cache_headers_present: bool,
    #[serde(deserialize_with = "lenient::flag")]
    pub cdn_usage_detected: bool,
    #[serde(deserialize_with = "lenient::flag")]
    pub http2_or_http3: bool,
    #[serde(deserialize_with = "lenient::flag")]
    pub mobile_viewport_tag_present: bool,
    #[serde(deserialize_with = "lenient::flag")]
    pub lazy_loading_present: bool,
    #[serde(deserialize_with = "lenient::count")]
    pub lazy_loading_count: Option<u64>,
    #[serde(deserialize_with = "lenient::flag")]
    pub async_scripts_used: bool,
    #[serde(deserialize_with = "lenient::flag")]
    pub defer_scripts_used: bool,
    #[serde(deserialize_with = "lenient::flag")]
    pub preload_hints_used: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PotentialBottlenecks {
    #[serde(deserialize_with = "lenient::flag")]
    pub large_images_detected: bool,
    #[serde(deserialize_with = "lenient::count")]
    pub large_image_count: Option<u64>,
    #[serde(deserialize_with = "lenient::count")]
    pub render_blocking_resources: Option<u64>,
    #[serde(deserialize_with = "lenient::flag")]
    pub excessive_dom_size: bool,
    #[serde(deserialize_with = "lenient::count")]
    pub dom_element_count: Option<u64>,
    #[serde(deserialize_with = "lenient::flag")]
    pub too_many_requests: bool,
    #[serde(deserialize_with = "lenient::flag")]
    pub large_javascript_bundles: bool,
    #[serde(deserialize_with = "lenient::flag")]
    pub inline_css_detected: bool,
    #[serde(deserialize_with = "lenient::number")]
    pub inline_css_size_kb: Option<f64>,
    pub third_party_domains: Option<Vec<String>>,
    #[serde(deserialize_with = "lenient::count")]
    pub third_party_scripts: Option<u64>,
    pub unoptimized_images: Option<Vec<String>>,
}

/// Page weight per resource kind, in kilobytes.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ResourceBreakdown {
    #[serde(deserialize_with = "lenient::number")]
    pub html_kb: Option<f64>,
    #[serde(deserialize_with = "lenient::number")]
    pub css_kb: Option<f64>,
    #[serde(deserialize_with = "lenient::number")]
    pub javascript_kb: Option<f64>,
    #[serde(deserialize_with = "lenient::number")]
    pub images_kb: Option<f64>,
    #[serde(deserialize_with = "lenient::number")]
    pub fonts_kb: Option<f64>,
    #[serde(deserialize_with = "lenient::number")]
    pub other_kb: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceKind {
    Html,
    Css,
    Javascript,
    Images,
    Fonts,
    Other,
}

impl ResourceKind {
    pub const ALL: [ResourceKind; 6] = [
        ResourceKind::Html,
        ResourceKind::Css,
        ResourceKind::Javascript,
        ResourceKind::Images,
        ResourceKind::Fonts,
        ResourceKind::Other,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ResourceKind::Html => "HTML",
            ResourceKind::Css => "CSS",
            ResourceKind::Javascript => "JS",
            ResourceKind::Images => "Images",
            ResourceKind::Fonts => "Fonts",
            ResourceKind::Other => "Other",
        }
    }
}

impl ResourceBreakdown {
    /// Size of one kind; missing, negative and non-numeric values read as 0.
    pub fn kb(&self, kind: ResourceKind) -> f64 {
        let value = match kind {
            ResourceKind::Html => self.html_kb,
            ResourceKind::Css => self.css_kb,
            ResourceKind::Javascript => self.javascript_kb,
            ResourceKind::Images => self.images_kb,
            ResourceKind::Fonts => self.fonts_kb,
            ResourceKind::Other => self.other_kb,
        };
        value.filter(|kb| *kb > 0.0).unwrap_or(0.0)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SpeedAnalysis {
    pub overview_score: Option<OverviewScore>,
    pub analysis_summary: Option<String>,
    pub estimated_savings: Option<String>,
    pub performance_highlights: Option<Vec<String>>,
    pub critical_issues: Option<Vec<String>>,
    pub improvement_recommendations: Option<ImprovementRecommendations>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OverviewScore {
    #[serde(deserialize_with = "lenient::number")]
    pub performance_score_out_of_10: Option<f64>,
    pub rating: Option<String>,
    pub grade: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ImprovementRecommendations {
    pub critical: Option<Vec<Fix>>,
    pub high_impact: Option<Vec<Fix>>,
    pub medium_impact: Option<Vec<Fix>>,
    pub quick_wins: Option<Vec<Fix>>,
}

impl ImprovementRecommendations {
    pub fn for_priority(&self, priority: FixPriority) -> &[Fix] {
        let fixes = match priority {
            FixPriority::Critical => &self.critical,
            FixPriority::HighImpact => &self.high_impact,
            FixPriority::MediumImpact => &self.medium_impact,
            FixPriority::QuickWin => &self.quick_wins,
        };
        fixes.as_deref().unwrap_or(&[])
    }
}

/// A recommendation is either a bare sentence or a developer guide entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Fix {
    Detailed(DetailedFix),
    Simple(String),
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DetailedFix {
    pub issue: String,
    pub why_it_matters: Option<String>,
    pub how_to_fix: Option<Vec<String>>,
    pub code_example: Option<String>,
    pub expected_impact: Option<String>,
    pub difficulty: Option<Difficulty>,
    pub time_estimate: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    Easy,
    Hard,
    // Catch-all for unknown strings; must stay last.
    #[default]
    #[serde(other)]
    Medium,
}

impl Difficulty {
    pub fn label(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }

    pub fn color(&self) -> ColorBucket {
        match self {
            Difficulty::Easy => ColorBucket::Success,
            Difficulty::Medium => ColorBucket::Warning,
            Difficulty::Hard => ColorBucket::Danger,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FixPriority {
    Critical,
    HighImpact,
    MediumImpact,
    QuickWin,
}

impl FixPriority {
    pub const ALL: [FixPriority; 4] = [
        FixPriority::Critical,
        FixPriority::HighImpact,
        FixPriority::MediumImpact,
        FixPriority::QuickWin,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            FixPriority::Critical => "Critical Fixes",
            FixPriority::HighImpact => "High Impact",
            FixPriority::MediumImpact => "Medium Impact",
            FixPriority::QuickWin => "Quick Wins",
        }
    }

    pub fn color(&self) -> ColorBucket {
        match self {
            FixPriority::Critical => ColorBucket::Danger,
            FixPriority::HighImpact => ColorBucket::Warning,
            FixPriority::MediumImpact => ColorBucket::Info,
            FixPriority::QuickWin => ColorBucket::Success,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn fixes_accept_both_shapes() {
        let recs: ImprovementRecommendations = serde_json::from_value(json!({
            "critical": [
                "Enable gzip",
                {"issue": "Render-blocking CSS", "difficulty": "hard", "how_to_fix": ["Inline critical CSS"]}
            ]
        }))
        .unwrap();

        let critical = recs.for_priority(FixPriority::Critical);
        assert_eq!(critical.len(), 2);
        assert!(matches!(&critical[0], Fix::Simple(s) if s == "Enable gzip"));
        match &critical[1] {
            Fix::Detailed(fix) => assert_eq!(fix.difficulty, Some(Difficulty::Hard)),
            other => panic!("expected detailed fix, got {:?}", other),
        }
        assert!(recs.for_priority(FixPriority::QuickWin).is_empty());
    }

    #[test]
    fn unknown_difficulty_falls_back_to_medium() {
        let fix: DetailedFix =
            serde_json::from_value(json!({"issue": "x", "difficulty": "trivial"})).unwrap();
        assert_eq!(fix.difficulty, Some(Difficulty::Medium));
    }

    #[test]
    fn difficulty_names_decode_and_encode() {
        for (name, difficulty) in [
            ("easy", Difficulty::Easy),
            ("medium", Difficulty::Medium),
            ("hard", Difficulty::Hard),
        ] {
            assert_eq!(serde_json::from_value::<Difficulty>(json!(name)).unwrap(), difficulty);
            assert_eq!(serde_json::to_value(difficulty).unwrap(), json!(name));
        }
        assert_eq!(Difficulty::default(), Difficulty::Medium);
        assert_eq!(Difficulty::Hard.color(), ColorBucket::Danger);
    }

    #[test]
    fn breakdown_reads_negative_as_zero() {
        let breakdown: ResourceBreakdown =
            serde_json::from_value(json!({"html_kb": -4.0, "css_kb": "big", "javascript_kb": 120.5}))
                .unwrap();
        assert_eq!(breakdown.kb(ResourceKind::Html), 0.0);
        assert_eq!(breakdown.kb(ResourceKind::Css), 0.0);
        assert_eq!(breakdown.kb(ResourceKind::Javascript), 120.5);
        assert_eq!(breakdown.kb(ResourceKind::Fonts), 0.0);
    }
}
