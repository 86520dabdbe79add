use crate::models::{GradeBand, Rating, ScoreScale};

/// Score divided by the scale maximum. Missing or non-finite scores count as 0.
pub fn normalize_score(score: Option<f64>, scale: ScoreScale) -> f64 {
    score.filter(|s| s.is_finite()).unwrap_or(0.0) / scale.max()
}

/// Assign a rating band to a normalized score
pub fn assign_rating(normalized: f64) -> Rating {
    if normalized >= 0.8 {
        Rating::Excellent
    } else if normalized >= 0.6 {
        Rating::Good
    } else if normalized >= 0.4 {
        Rating::NeedsImprovement
    } else {
        Rating::Poor
    }
}

pub fn rate(score: Option<f64>, scale: ScoreScale) -> Rating {
    assign_rating(normalize_score(score, scale))
}

/// Builds the band for a score.
///
/// The rating always comes from the number; a backend-supplied letter is
/// kept for display only, and when it is absent the letter is derived from
/// the rating.
pub fn grade_score(score: Option<f64>, scale: ScoreScale, letter: Option<&str>) -> GradeBand {
    let value = score.filter(|s| s.is_finite()).unwrap_or(0.0);
    let normalized = normalize_score(Some(value), scale);
    let rating = assign_rating(normalized);
    let letter_grade = letter
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .unwrap_or_else(|| rating.default_letter())
        .to_string();

    GradeBand {
        score: value,
        scale,
        normalized,
        rating,
        letter_grade,
        color: rating.color(),
    }
}
