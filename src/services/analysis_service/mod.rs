// src/services/analysis_service/mod.rs

pub mod compute;
pub mod view;

pub use compute::{aggregate, compose, grade_score, rate, AttentionLayout, TierZones};
pub use view::{
    assessment_view, comparison_view, heatmap_view, render_view, speed_view, AssessmentView,
    ComparisonView, HeatmapView, SpeedView, WorkflowView,
};
