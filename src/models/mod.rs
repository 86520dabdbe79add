// src/models/mod.rs

pub mod api;
pub mod app;
pub mod assessment;
pub mod comparison;
pub mod grade;
pub mod heatmap;
pub mod lenient;
pub mod speed;
pub mod workflow;

pub use api::{AssessmentRequest, CompareRequest, UrlRequest, ViewParams};
pub use app::AppState;
pub use assessment::{
    AssessmentPayload, BusinessType, ChecklistItem, ChecklistStatus, Checklists, Goal,
};
pub use comparison::{
    ComparisonAnalysis, ComparisonCategory, ComparisonPayload, ScoreMap, SiteDescriptor, Winner,
};
pub use grade::{ColorBucket, GradeBand, Rating, ScoreScale};
pub use heatmap::{
    AttentionImpact, ElementType, HeatmapAnalysis, HeatmapPayload, PatternType, Tier, TierFilter,
    TierStyle, Zone,
};
pub use speed::{
    Difficulty, Fix, FixPriority, ResourceBreakdown, ResourceKind, SpeedCheckPayload,
};
pub use workflow::WorkflowKind;
