use super::{list, non_empty, Badge};
use crate::models::{
    ColorBucket, Difficulty, Fix, FixPriority, GradeBand, ScoreScale, SpeedCheckPayload,
};
use crate::services::analysis_service::compute::{compose, grade_score, Composition};
use crate::utils::round_to;
use serde::Serialize;

const INLINE_CSS_LIMIT_KB: f64 = 10.0;
const MAX_UNOPTIMIZED_IMAGES: usize = 3;

#[derive(Debug, Clone, Serialize)]
pub struct SpeedView {
    pub url: String,
    pub grade: GradeBand,
    pub summary: Option<String>,
    pub estimated_savings: Option<String>,
    pub metrics: Vec<Metric>,
    pub page_size_mb: f64,
    pub indicators: Vec<Badge>,
    pub bottlenecks: Vec<Badge>,
    pub third_party_domains: Vec<String>,
    pub third_party_requests: u64,
    pub unoptimized_images: Vec<String>,
    pub composition: Composition,
    pub highlights: Vec<String>,
    pub critical_issues: Vec<String>,
    pub recommendations: Vec<FixGroup>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Metric {
    pub label: &'static str,
    pub value: f64,
    pub unit: Option<&'static str>,
}

#[derive(Debug, Clone, Serialize)]
pub struct FixGroup {
    pub priority: FixPriority,
    pub label: &'static str,
    pub color: ColorBucket,
    pub fixes: Vec<FixCard>,
}

#[derive(Debug, Clone, Serialize)]
pub struct FixCard {
    /// 1-based position within its priority group.
    pub index: usize,
    pub issue: String,
    pub detailed: bool,
    pub why_it_matters: Option<String>,
    pub how_to_fix: Vec<String>,
    pub code_example: Option<String>,
    pub expected_impact: Option<String>,
    pub difficulty: Difficulty,
    pub difficulty_label: &'static str,
    pub difficulty_color: ColorBucket,
    pub time_estimate: Option<String>,
}

pub fn fix_card(index: usize, fix: &Fix) -> FixCard {
    match fix {
        Fix::Detailed(fix) if !fix.issue.trim().is_empty() => {
            let difficulty = fix.difficulty.unwrap_or_default();
            FixCard {
                index,
                issue: fix.issue.trim().to_string(),
                detailed: true,
                why_it_matters: non_empty(&fix.why_it_matters),
                how_to_fix: list(&fix.how_to_fix),
                code_example: non_empty(&fix.code_example),
                expected_impact: non_empty(&fix.expected_impact),
                difficulty,
                difficulty_label: difficulty.label(),
                difficulty_color: difficulty.color(),
                time_estimate: non_empty(&fix.time_estimate),
            }
        }
        other => {
            let issue = match other {
                Fix::Simple(text) => text.trim().to_string(),
                Fix::Detailed(_) => String::new(),
            };
            let difficulty = Difficulty::default();
            FixCard {
                index,
                issue,
                detailed: false,
                why_it_matters: None,
                how_to_fix: Vec::new(),
                code_example: None,
                expected_impact: None,
                difficulty,
                difficulty_label: difficulty.label(),
                difficulty_color: difficulty.color(),
                time_estimate: None,
            }
        }
    }
}

pub fn speed_view(payload: &SpeedCheckPayload) -> SpeedView {
    let scan = payload.scan_data.clone().unwrap_or_default();
    let analysis = payload.analysis.clone().unwrap_or_default();
    let overview = analysis.overview_score.clone().unwrap_or_default();
    let grade = grade_score(
        overview.performance_score_out_of_10,
        ScoreScale::OutOfTen,
        overview.grade.as_deref(),
    );

    let metrics = scan.basic_metrics.clone().unwrap_or_default();
    let count = |value: Option<u64>| value.unwrap_or(0) as f64;
    let metric_cards = vec![
        Metric {
            label: "Time to First Byte",
            value: metrics.time_to_first_byte_ms.unwrap_or(0.0),
            unit: Some("ms"),
        },
        Metric {
            label: "DOM Content Loaded",
            value: metrics.dom_content_loaded_ms.unwrap_or(0.0),
            unit: Some("ms"),
        },
        Metric {
            label: "Fully Loaded",
            value: metrics.fully_loaded_ms.unwrap_or(0.0),
            unit: Some("ms"),
        },
        Metric {
            label: "Total Requests",
            value: count(metrics.total_requests),
            unit: None,
        },
        Metric {
            label: "Scripts",
            value: count(metrics.script_count),
            unit: None,
        },
        Metric {
            label: "Images",
            value: count(metrics.image_count),
            unit: None,
        },
        Metric {
            label: "CSS Files",
            value: count(metrics.css_file_count),
            unit: None,
        },
        Metric {
            label: "Fonts",
            value: count(metrics.font_count),
            unit: None,
        },
    ];
    let page_size_mb = round_to(metrics.total_page_size_kb.unwrap_or(0.0) / 1024.0, 2);

    let ind = scan.performance_indicators.clone().unwrap_or_default();
    let indicators = vec![
        Badge::new("Compression", ind.compression_enabled),
        Badge::new("Cache Headers", ind.cache_headers_present),
        Badge::new("CDN", ind.cdn_usage_detected),
        Badge::new("HTTP/2 or HTTP/3", ind.http2_or_http3),
        Badge::new("Mobile Viewport", ind.mobile_viewport_tag_present),
        Badge::new("Lazy Loading", ind.lazy_loading_present).with_count(ind.lazy_loading_count),
        Badge::new("Async Scripts", ind.async_scripts_used),
        Badge::new("Defer Scripts", ind.defer_scripts_used),
        Badge::new("Preload Hints", ind.preload_hints_used),
    ];

    // A bottleneck badge is good when the problem is absent
    let bn = scan.potential_bottlenecks.clone().unwrap_or_default();
    let blocking = bn.render_blocking_resources.unwrap_or(0);
    let inline_css_kb = bn.inline_css_size_kb.unwrap_or(0.0);
    let bottlenecks = vec![
        Badge::new(
            format!("Large Images ({})", bn.large_image_count.unwrap_or(0)),
            !bn.large_images_detected,
        ),
        Badge::new(format!("Blocking Resources ({})", blocking), blocking == 0),
        Badge::new(
            format!("DOM Elements ({})", bn.dom_element_count.unwrap_or(0)),
            !bn.excessive_dom_size,
        ),
        Badge::new("Too Many Requests", !bn.too_many_requests),
        Badge::new("Large JS Bundles", !bn.large_javascript_bundles),
        Badge::new(
            format!("Inline CSS ({:.1} KB)", inline_css_kb),
            !(bn.inline_css_detected && inline_css_kb > INLINE_CSS_LIMIT_KB),
        ),
    ];

    let recommendations = analysis.improvement_recommendations.clone().unwrap_or_default();
    let groups = FixPriority::ALL
        .iter()
        .map(|priority| FixGroup {
            priority: *priority,
            label: priority.label(),
            color: priority.color(),
            fixes: recommendations
                .for_priority(*priority)
                .iter()
                .map(|fix| fix_card(0, fix))
                .filter(|card| !card.issue.is_empty())
                .enumerate()
                .map(|(i, card)| FixCard { index: i + 1, ..card })
                .collect(),
        })
        .filter(|group| !group.fixes.is_empty())
        .collect();

    SpeedView {
        url: payload.url.clone().unwrap_or_default(),
        grade,
        summary: non_empty(&analysis.analysis_summary),
        estimated_savings: non_empty(&analysis.estimated_savings),
        metrics: metric_cards,
        page_size_mb,
        indicators,
        bottlenecks,
        third_party_domains: list(&bn.third_party_domains),
        third_party_requests: bn.third_party_scripts.unwrap_or(0),
        unoptimized_images: list(&bn.unoptimized_images)
            .into_iter()
            .take(MAX_UNOPTIMIZED_IMAGES)
            .collect(),
        composition: compose(scan.resource_breakdown.as_ref()),
        highlights: list(&analysis.performance_highlights),
        critical_issues: list(&analysis.critical_issues),
        recommendations: groups,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Rating;
    use serde_json::json;

    #[test]
    fn grade_recomputed_from_score() {
        let payload: SpeedCheckPayload = serde_json::from_value(json!({
            "analysis": {"overview_score": {
                "performance_score_out_of_10": 7.99,
                "rating": "excellent",
                "grade": "A"
            }}
        }))
        .unwrap();
        let view = speed_view(&payload);
        assert_eq!(view.grade.rating, Rating::Good);
        assert_eq!(view.grade.letter_grade, "A");
    }

    #[test]
    fn missing_sections_render_defaults() {
        let view = speed_view(&SpeedCheckPayload::default());
        assert_eq!(view.grade.rating, Rating::Poor);
        assert!(view.composition.is_empty());
        assert!(view.metrics.iter().all(|m| m.value == 0.0));
        assert_eq!(view.page_size_mb, 0.0);
        assert!(view.recommendations.is_empty());
        assert!(view.bottlenecks.iter().all(|b| b.good));
        assert!(view.indicators.iter().all(|b| !b.good));
    }

    #[test]
    fn inline_css_needs_size_over_limit() {
        let small: SpeedCheckPayload = serde_json::from_value(json!({
            "scan_data": {"potential_bottlenecks": {"inline_css_detected": true, "inline_css_size_kb": 4.2}}
        }))
        .unwrap();
        assert!(speed_view(&small).bottlenecks[5].good);

        let large: SpeedCheckPayload = serde_json::from_value(json!({
            "scan_data": {"potential_bottlenecks": {"inline_css_detected": true, "inline_css_size_kb": 12.0}}
        }))
        .unwrap();
        let view = speed_view(&large);
        assert!(!view.bottlenecks[5].good);
        assert_eq!(view.bottlenecks[5].label, "Inline CSS (12.0 KB)");
    }

    #[test]
    fn fix_groups_are_numbered_per_priority() {
        let payload: SpeedCheckPayload = serde_json::from_value(json!({
            "analysis": {"improvement_recommendations": {
                "critical": ["Enable compression", {"issue": "Defer JS", "difficulty": "easy", "time_estimate": "10 min"}],
                "quick_wins": [{"why_it_matters": "no issue text"}, "Add preconnect"]
            }}
        }))
        .unwrap();
        let view = speed_view(&payload);

        assert_eq!(view.recommendations.len(), 2);
        let critical = &view.recommendations[0];
        assert_eq!(critical.priority, FixPriority::Critical);
        assert_eq!(critical.fixes[0].index, 1);
        assert!(!critical.fixes[0].detailed);
        assert_eq!(critical.fixes[1].index, 2);
        assert_eq!(critical.fixes[1].difficulty, Difficulty::Easy);
        assert_eq!(critical.fixes[1].time_estimate.as_deref(), Some("10 min"));

        let quick = &view.recommendations[1];
        assert_eq!(quick.fixes.len(), 1);
        assert_eq!(quick.fixes[0].issue, "Add preconnect");
        assert_eq!(quick.fixes[0].index, 1);
    }

    #[test]
    fn page_size_in_megabytes() {
        let payload: SpeedCheckPayload = serde_json::from_value(json!({
            "scan_data": {
                "basic_metrics": {"total_page_size_kb": 2048.0, "total_requests": 42},
                "potential_bottlenecks": {"unoptimized_images": ["a.png", "b.png", "c.png", "d.png"]}
            }
        }))
        .unwrap();
        let view = speed_view(&payload);
        assert_eq!(view.page_size_mb, 2.0);
        assert_eq!(view.metrics[3].value, 42.0);
        assert_eq!(view.unoptimized_images.len(), 3);
    }
}
