use crate::models::{ComparisonCategory, ScoreMap, Winner};
use serde::Serialize;

const CATEGORY_MAX: f64 = 10.0;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryOutcome {
    pub category: ComparisonCategory,
    pub label: &'static str,
    pub score_a: f64,
    pub score_b: f64,
    /// Bar fill, 0-100.
    pub bar_a_percent: f64,
    pub bar_b_percent: f64,
    pub winner: Winner,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonResult {
    pub entity_a: ScoreMap,
    pub entity_b: ScoreMap,
    pub categories: Vec<CategoryOutcome>,
    pub total_a: f64,
    pub total_b: f64,
    /// Derived from the totals, never taken from the backend.
    pub overall_winner: Winner,
}

impl ComparisonResult {
    pub fn winner_of(&self, category: ComparisonCategory) -> Option<Winner> {
        self.categories
            .iter()
            .find(|outcome| outcome.category == category)
            .map(|outcome| outcome.winner)
    }
}

/// Strictly higher score wins; equal scores tie.
pub fn decide(score_a: f64, score_b: f64) -> Winner {
    if score_a > score_b {
        Winner::EntityA
    } else if score_b > score_a {
        Winner::EntityB
    } else {
        Winner::Tie
    }
}

fn bar_percent(score: f64) -> f64 {
    (score / CATEGORY_MAX * 100.0).clamp(0.0, 100.0)
}

pub fn aggregate(entity_a: &ScoreMap, entity_b: &ScoreMap) -> ComparisonResult {
    let categories: Vec<CategoryOutcome> = ComparisonCategory::ALL
        .iter()
        .map(|category| {
            let score_a = entity_a.get(category.key());
            let score_b = entity_b.get(category.key());
            CategoryOutcome {
                category: *category,
                label: category.label(),
                score_a,
                score_b,
                bar_a_percent: bar_percent(score_a),
                bar_b_percent: bar_percent(score_b),
                winner: decide(score_a, score_b),
            }
        })
        .collect();

    let total_a: f64 = categories.iter().map(|c| c.score_a).sum();
    let total_b: f64 = categories.iter().map(|c| c.score_b).sum();

    ComparisonResult {
        entity_a: entity_a.clone(),
        entity_b: entity_b.clone(),
        categories,
        total_a,
        total_b,
        overall_winner: decide(total_a, total_b),
    }
}
