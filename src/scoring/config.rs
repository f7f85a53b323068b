use serde::{Deserialize, Serialize};

use super::types::{Grade, VoteStatus};

/// Main scoring configuration.
///
/// Every section is optional; a missing section falls back to its default,
/// and the defaults reproduce the standard community score.
///
/// Example YAML:
/// ```yaml
/// scoring:
///   points:
///     complete: 100
///     in_progress: 50
///     not_started: 25
///     broken: 0
///   weight_cap: 10
///   grades: { a: 90, b: 80, c: 70, d: 60 }
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ScoringConfig {
    /// Points a single vote of each status is worth (0-100)
    #[serde(default)]
    pub points: Option<PointValues>,

    /// Maximum weight one promise can carry in the overall average.
    /// A promise weighs as many votes as it has, up to this cap.
    #[serde(default)]
    pub weight_cap: Option<u64>,

    /// Minimum overall score for each letter grade
    #[serde(default)]
    pub grades: Option<GradeThresholds>,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            points: Some(PointValues::default()),
            weight_cap: Some(DEFAULT_WEIGHT_CAP),
            grades: Some(GradeThresholds::default()),
        }
    }
}

pub const DEFAULT_WEIGHT_CAP: u64 = 10;

impl ScoringConfig {
    pub fn effective_points(&self) -> PointValues {
        self.points.clone().unwrap_or_default()
    }

    pub fn effective_weight_cap(&self) -> u64 {
        self.weight_cap.unwrap_or(DEFAULT_WEIGHT_CAP)
    }

    pub fn effective_grades(&self) -> GradeThresholds {
        self.grades.clone().unwrap_or_default()
    }
}

/// Point value per vote status.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct PointValues {
    pub complete: f64,
    pub in_progress: f64,
    pub not_started: f64,
    pub broken: f64,
}

impl Default for PointValues {
    fn default() -> Self {
        Self {
            complete: 100.0,
            in_progress: 50.0,
            not_started: 25.0,
            broken: 0.0,
        }
    }
}

impl PointValues {
    pub fn value(&self, status: VoteStatus) -> f64 {
        match status {
            VoteStatus::Complete => self.complete,
            VoteStatus::InProgress => self.in_progress,
            VoteStatus::NotStarted => self.not_started,
            VoteStatus::Broken => self.broken,
        }
    }
}

/// Letter grade bands. A score at or above a threshold earns that grade;
/// anything below `d` is an F.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct GradeThresholds {
    pub a: u8,
    pub b: u8,
    pub c: u8,
    pub d: u8,
}

impl Default for GradeThresholds {
    fn default() -> Self {
        Self {
            a: 90,
            b: 80,
            c: 70,
            d: 60,
        }
    }
}

impl GradeThresholds {
    pub fn grade_for(&self, score: u8) -> Grade {
        if score >= self.a {
            Grade::A
        } else if score >= self.b {
            Grade::B
        } else if score >= self.c {
            Grade::C
        } else if score >= self.d {
            Grade::D
        } else {
            Grade::F
        }
    }
}
