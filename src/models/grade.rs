use serde::{Deserialize, Serialize};
use std::fmt;

// Scale a score is reported on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreScale {
    OutOfTen,
    OutOfHundred,
}

impl ScoreScale {
    pub fn max(&self) -> f64 {
        match self {
            ScoreScale::OutOfTen => 10.0,
            ScoreScale::OutOfHundred => 100.0,
        }
    }
}

// Qualitative rating band
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rating {
    Excellent,
    Good,
    NeedsImprovement,
    Poor,
}

impl Rating {
    pub fn as_str(&self) -> &'static str {
        match self {
            Rating::Excellent => "excellent",
            Rating::Good => "good",
            Rating::NeedsImprovement => "needs_improvement",
            Rating::Poor => "poor",
        }
    }

    /// Lenient parse of a backend-supplied band name.
    pub fn parse(value: &str) -> Option<Rating> {
        match value.trim().to_ascii_lowercase().replace([' ', '-'], "_").as_str() {
            "excellent" => Some(Rating::Excellent),
            "good" => Some(Rating::Good),
            "needs_improvement" => Some(Rating::NeedsImprovement),
            "poor" => Some(Rating::Poor),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Rating::Excellent => "EXCELLENT",
            Rating::Good => "GOOD",
            Rating::NeedsImprovement => "NEEDS IMPROVEMENT",
            Rating::Poor => "POOR",
        }
    }

    pub fn color(&self) -> ColorBucket {
        match self {
            Rating::Excellent => ColorBucket::Success,
            Rating::Good => ColorBucket::Info,
            Rating::NeedsImprovement => ColorBucket::Warning,
            Rating::Poor => ColorBucket::Danger,
        }
    }

    /// Letter used when the backend did not supply one.
    pub fn default_letter(&self) -> &'static str {
        match self {
            Rating::Excellent => "A",
            Rating::Good => "B",
            Rating::NeedsImprovement => "C",
            Rating::Poor => "D",
        }
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Semantic color buckets shared by every graded or flagged value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorBucket {
    Success,
    Info,
    Warning,
    Danger,
    Neutral,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GradeBand {
    pub score: f64,
    pub scale: ScoreScale,
    pub normalized: f64,
    pub rating: Rating,
    pub letter_grade: String,
    pub color: ColorBucket,
}
