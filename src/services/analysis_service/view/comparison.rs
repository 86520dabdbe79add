use super::{list, text_or, Badge};
use crate::models::{ComparisonPayload, SiteDescriptor, Winner};
use crate::services::analysis_service::compute::{aggregate, ComparisonResult};
use crate::utils::{format_number, truncate_url};
use serde::Serialize;

const DISPLAY_URL_CHARS: usize = 50;
const MAX_SUBHEADINGS: usize = 6;

#[derive(Debug, Clone, Serialize)]
pub struct ComparisonView {
    pub result: ComparisonResult,
    pub headline: String,
    pub totals_caption: String,
    pub reason_summary: Option<String>,
    /// What the backend claimed, shown next to the computed result.
    pub declared_winner: Option<Winner>,
    pub declared_winner_agrees: Option<bool>,
    pub declared_category_winners: Vec<DeclaredCategoryWinner>,
    pub site_a: Option<SiteSummary>,
    pub site_b: Option<SiteSummary>,
    pub suggestions_a: Vec<String>,
    pub suggestions_b: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DeclaredCategoryWinner {
    pub category: &'static str,
    pub declared: Option<Winner>,
    pub computed: Winner,
    pub badge: String,
    pub agrees: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct CtaChip {
    pub kind: &'static str,
    pub text: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct SiteSummary {
    pub label: &'static str,
    pub url: String,
    pub display_url: String,
    pub is_winner: bool,
    pub page_title: String,
    pub main_heading: String,
    pub word_count: u64,
    pub hero_summary: String,
    pub ctas: Vec<CtaChip>,
    pub subheadings: Vec<String>,
    pub trust_badges: Vec<Badge>,
    pub offer_summary: String,
    pub target_audience: String,
    pub status_badges: Vec<Badge>,
}

fn summarize_site(site: &SiteDescriptor, label: &'static str, is_winner: bool) -> SiteSummary {
    let url = site.url.clone().unwrap_or_default();

    let mut ctas = Vec::new();
    for (kind, text) in [
        ("Primary", &site.primary_cta_text),
        ("Secondary", &site.secondary_cta_text),
    ] {
        if let Some(text) = text.as_deref().map(str::trim).filter(|t| !t.is_empty()) {
            ctas.push(CtaChip {
                kind,
                text: text.to_string(),
            });
        }
    }

    let trust = site.trust_signals_detected.clone().unwrap_or_default();
    let trust_badges = vec![
        Badge::new("Testimonials", trust.testimonials),
        Badge::new("Reviews/Ratings", trust.reviews_or_ratings),
        Badge::new("Client Logos", trust.client_logos),
        Badge::new("Certifications", trust.certifications_or_badges),
        Badge::new("Social Proof", trust.social_proof_statements),
    ];

    let offer = site.offer_clarity.clone().unwrap_or_default();
    let conversion = site.conversion_elements.clone().unwrap_or_default();
    let pricing = text_or(&offer.pricing_or_plan_visibility, "missing");
    let cta_presence = text_or(&conversion.cta_presence, "weak");
    let contact_path = text_or(&conversion.contact_or_enquiry_path, "missing");
    let lead_capture = conversion.lead_capture_or_form;

    let status_badges = vec![
        Badge::status("Pricing Visibility", pricing.clone(), pricing == "clear"),
        Badge::status("CTA Presence", cta_presence.clone(), cta_presence == "strong"),
        Badge::status(
            "Lead Capture Form",
            if lead_capture { "Yes" } else { "No" },
            lead_capture,
        ),
        Badge::status("Contact Path", contact_path.clone(), contact_path == "clear"),
    ];

    SiteSummary {
        label,
        display_url: truncate_url(&url, DISPLAY_URL_CHARS),
        url,
        is_winner,
        page_title: text_or(&site.page_title, "Not found"),
        main_heading: text_or(&site.main_heading_h1, "Not found"),
        word_count: site.approx_word_count.unwrap_or(0),
        hero_summary: text_or(&site.hero_section_summary, "No hero section detected"),
        ctas,
        subheadings: list(&site.subheadings)
            .into_iter()
            .take(MAX_SUBHEADINGS)
            .collect(),
        trust_badges,
        offer_summary: text_or(&offer.what_the_business_offers, "Not clear"),
        target_audience: text_or(&offer.target_audience_detected, "Not detected"),
        status_badges,
    }
}

pub fn comparison_view(payload: &ComparisonPayload) -> ComparisonView {
    let analysis = payload.comparison.clone().unwrap_or_default();
    let scores = analysis.scores.clone().unwrap_or_default();
    let result = aggregate(&scores.site_a, &scores.site_b);
    let overall = result.overall_winner;

    let summary = analysis.summary.clone().unwrap_or_default();
    let declared_winner = summary.overall_winner.as_deref().and_then(Winner::from_label);

    let declared_labels = analysis.category_winners.clone().unwrap_or_default();
    let declared_category_winners = result
        .categories
        .iter()
        .map(|outcome| {
            let declared = declared_labels
                .get(outcome.category.key())
                .and_then(|label| label.as_deref())
                .and_then(Winner::from_label);
            DeclaredCategoryWinner {
                category: outcome.category.key(),
                declared,
                computed: outcome.winner,
                badge: outcome.winner.badge(),
                agrees: declared.map_or(true, |d| d == outcome.winner),
            }
        })
        .collect();

    let suggestions = analysis.improvement_suggestions.clone().unwrap_or_default();

    ComparisonView {
        headline: overall.headline(),
        totals_caption: format!(
            "({} vs {} total points)",
            format_number(result.total_a),
            format_number(result.total_b)
        ),
        reason_summary: summary.reason_summary.clone(),
        declared_winner,
        declared_winner_agrees: declared_winner.map(|d| d == overall),
        declared_category_winners,
        site_a: payload
            .site_a
            .as_ref()
            .map(|site| summarize_site(site, "Website A", overall == Winner::EntityA)),
        site_b: payload
            .site_b
            .as_ref()
            .map(|site| summarize_site(site, "Website B", overall == Winner::EntityB)),
        suggestions_a: list(&suggestions.site_a),
        suggestions_b: list(&suggestions.site_b),
        result,
    }
}
