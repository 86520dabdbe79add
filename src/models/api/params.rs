use crate::models::assessment::{BusinessType, Goal};
use crate::models::heatmap::TierFilter;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CompareRequest {
    #[serde(default)]
    pub url_a: String,
    #[serde(default)]
    pub url_b: String,
}

/// Body shared by the speed-check and heatmap workflows.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UrlRequest {
    #[serde(default)]
    pub url: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AssessmentRequest {
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub business_type: BusinessType,
    #[serde(default)]
    pub goal: Goal,
}

#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct ViewParams {
    #[serde(default)]
    pub tier: TierFilter,
}
