use crate::models::{HeatmapAnalysis, Tier, TierFilter, TierStyle, Zone};
use crate::utils::format_number;
use serde::Serialize;

/// The always-on score badge needs a zone wider than this...
pub const BADGE_MIN_WIDTH_PERCENT: f64 = 8.0;
/// ...and taller than this.
pub const BADGE_MIN_HEIGHT_PERCENT: f64 = 3.0;

/// Zones grouped by tier. A tier the backend left out is an empty list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TierZones {
    pub high: Vec<Zone>,
    pub medium: Vec<Zone>,
    pub low: Vec<Zone>,
}

impl TierZones {
    pub fn from_analysis(analysis: Option<&HeatmapAnalysis>) -> Self {
        let Some(analysis) = analysis else {
            return Self::default();
        };
        Self {
            high: analysis.high_attention_zones.clone().unwrap_or_default(),
            medium: analysis.medium_attention_zones.clone().unwrap_or_default(),
            low: analysis.low_attention_zones.clone().unwrap_or_default(),
        }
    }

    pub fn tier(&self, tier: Tier) -> &[Zone] {
        match tier {
            Tier::High => &self.high,
            Tier::Medium => &self.medium,
            Tier::Low => &self.low,
        }
    }
}

/// Overlay rectangle in percent of the screenshot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ZoneOverlay {
    /// Stable per-tier key, e.g. `high-0`.
    pub key: String,
    pub tier: Tier,
    pub rect: Rect,
    pub attention_score: f64,
    pub zone_name: String,
    pub reasoning: String,
    pub hover_label: String,
    pub tooltip: String,
    pub hover_label_available: bool,
    pub persistent_badge_visible: bool,
    pub badge_text: String,
    pub style: TierStyle,
}

fn clamp_percent(value: Option<f64>) -> f64 {
    value.unwrap_or(0.0).clamp(0.0, 100.0)
}

/// Position on the canvas with the extent clipped at the right and bottom edges.
fn place(zone: &Zone) -> Rect {
    let left = clamp_percent(zone.x_percent);
    let top = clamp_percent(zone.y_percent);
    Rect {
        left,
        top,
        width: clamp_percent(zone.width_percent).min(100.0 - left),
        height: clamp_percent(zone.height_percent).min(100.0 - top),
    }
}

/// Judged on the zone's own extent, before edge clipping.
pub fn badge_visible(zone: &Zone) -> bool {
    clamp_percent(zone.width_percent) > BADGE_MIN_WIDTH_PERCENT
        && clamp_percent(zone.height_percent) > BADGE_MIN_HEIGHT_PERCENT
}

pub fn overlay(tier: Tier, index: usize, zone: &Zone) -> ZoneOverlay {
    let rect = place(zone);
    let attention_score = zone.attention_score.unwrap_or(0.0).clamp(0.0, 10.0);
    let zone_name = zone
        .zone_name
        .clone()
        .filter(|name| !name.trim().is_empty())
        .unwrap_or_else(|| format!("Zone {}", index + 1));
    let reasoning = zone.reasoning.clone().unwrap_or_default();
    let score_text = format_number(attention_score);

    ZoneOverlay {
        key: format!("{}-{}", tier, index),
        tier,
        hover_label: format!("{} ({}/10)", zone_name, score_text),
        tooltip: if reasoning.is_empty() {
            zone_name.clone()
        } else {
            format!("{}: {}", zone_name, reasoning)
        },
        hover_label_available: true,
        persistent_badge_visible: badge_visible(zone),
        badge_text: score_text,
        style: tier.style(),
        rect,
        attention_score,
        zone_name,
        reasoning,
    }
}

/// Overlays for every tier, computed once; switching the filter only
/// selects among them.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AttentionLayout {
    pub high: Vec<ZoneOverlay>,
    pub medium: Vec<ZoneOverlay>,
    pub low: Vec<ZoneOverlay>,
}

impl AttentionLayout {
    pub fn build(zones: &TierZones) -> Self {
        let layout_tier = |tier: Tier| -> Vec<ZoneOverlay> {
            zones
                .tier(tier)
                .iter()
                .enumerate()
                .map(|(index, zone)| overlay(tier, index, zone))
                .collect()
        };

        Self {
            high: layout_tier(Tier::High),
            medium: layout_tier(Tier::Medium),
            low: layout_tier(Tier::Low),
        }
    }

    pub fn tier(&self, tier: Tier) -> &[ZoneOverlay] {
        match tier {
            Tier::High => &self.high,
            Tier::Medium => &self.medium,
            Tier::Low => &self.low,
        }
    }

    /// Zones to draw for a filter, in high, medium, low order.
    pub fn select(&self, filter: TierFilter) -> Vec<&ZoneOverlay> {
        Tier::ALL
            .iter()
            .filter(|tier| filter.includes(**tier))
            .flat_map(|tier| self.tier(*tier).iter())
            .collect()
    }
}
