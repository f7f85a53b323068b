use super::config::ScoringConfig;

/// Validate scoring configuration at startup.
/// Returns all validation errors at once (not just the first).
pub fn validate_scoring(config: &ScoringConfig) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    // Point values must keep per-promise scores within 0-100
    if let Some(ref points) = config.points {
        let fields = [
            ("complete", points.complete),
            ("in_progress", points.in_progress),
            ("not_started", points.not_started),
            ("broken", points.broken),
        ];
        for (name, value) in fields {
            if !(0.0..=100.0).contains(&value) {
                errors.push(format!(
                    "scoring.points.{}: must be between 0 and 100, got {}",
                    name, value
                ));
            }
        }
    }

    if let Some(cap) = config.weight_cap {
        if cap == 0 {
            errors.push("scoring.weight_cap: must be at least 1".to_string());
        }
    }

    if let Some(ref grades) = config.grades {
        let fields = [("a", grades.a), ("b", grades.b), ("c", grades.c), ("d", grades.d)];
        for (name, value) in fields {
            if value > 100 {
                errors.push(format!(
                    "scoring.grades.{}: must be at most 100, got {}",
                    name, value
                ));
            }
        }
        if !(grades.a > grades.b && grades.b > grades.c && grades.c > grades.d) {
            errors.push(format!(
                "scoring.grades: thresholds must be strictly descending (a > b > c > d), got {}/{}/{}/{}",
                grades.a, grades.b, grades.c, grades.d
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
