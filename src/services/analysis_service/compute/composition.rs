use crate::models::{ResourceBreakdown, ResourceKind};
use crate::utils::round_to;
use serde::Serialize;

/// Segments below this share of the page are left off the bar.
pub const VISIBILITY_THRESHOLD_PERCENT: f64 = 0.5;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Segment {
    pub kind: ResourceKind,
    pub label: &'static str,
    pub kb: f64,
    /// Share of the whole page, full precision.
    pub percent: f64,
    /// Share rounded to one decimal for labels.
    pub display_percent: f64,
    /// Bar width; visible segments are rescaled to fill 100.
    pub width_percent: f64,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LegendEntry {
    pub kind: ResourceKind,
    pub label: &'static str,
    pub kb: f64,
    pub text: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Composition {
    pub total_kb: f64,
    pub segments: Vec<Segment>,
    pub legend: Vec<LegendEntry>,
}

impl Composition {
    /// Nothing to draw: empty page or no breakdown at all.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

pub fn compose(breakdown: Option<&ResourceBreakdown>) -> Composition {
    let Some(breakdown) = breakdown else {
        return Composition::default();
    };

    let sizes: Vec<(ResourceKind, f64)> = ResourceKind::ALL
        .iter()
        .map(|kind| (*kind, breakdown.kb(*kind)))
        .collect();
    let total_kb: f64 = sizes.iter().map(|(_, kb)| kb).sum();

    if total_kb <= 0.0 {
        return Composition::default();
    }

    let legend = sizes
        .iter()
        .map(|(kind, kb)| LegendEntry {
            kind: *kind,
            label: kind.label(),
            kb: *kb,
            text: format!("{}: {:.1} KB", kind.label(), kb),
        })
        .collect();

    let visible: Vec<(ResourceKind, f64, f64)> = sizes
        .iter()
        .map(|(kind, kb)| (*kind, *kb, kb / total_kb * 100.0))
        .filter(|(_, _, percent)| *percent >= VISIBILITY_THRESHOLD_PERCENT)
        .collect();
    let visible_percent: f64 = visible.iter().map(|(_, _, percent)| percent).sum();

    let segments = visible
        .into_iter()
        .map(|(kind, kb, percent)| Segment {
            kind,
            label: kind.label(),
            kb,
            percent,
            display_percent: round_to(percent, 1),
            width_percent: percent / visible_percent * 100.0,
            title: format!("{}: {:.1} KB ({:.1}%)", kind.label(), kb, percent),
        })
        .collect();

    Composition {
        total_kb,
        segments,
        legend,
    }
}
