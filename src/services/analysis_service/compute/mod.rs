// src/services/analysis_service/compute/mod.rs

pub mod aggregate;
pub mod composition;
pub mod grade;
pub mod zones;

pub use aggregate::{aggregate, decide, CategoryOutcome, ComparisonResult};
pub use composition::{compose, Composition, LegendEntry, Segment, VISIBILITY_THRESHOLD_PERCENT};
pub use grade::{assign_rating, grade_score, normalize_score, rate};
pub use zones::{
    badge_visible, AttentionLayout, Rect, TierZones, ZoneOverlay, BADGE_MIN_HEIGHT_PERCENT,
    BADGE_MIN_WIDTH_PERCENT,
};
