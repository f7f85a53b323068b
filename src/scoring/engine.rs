use super::config::{PointValues, ScoringConfig};
use super::types::{Breakdown, Promise, PromiseContribution, ScoreResult};

/// Entropy of an even split across the four vote statuses (log2 4).
const MAX_ENTROPY: f64 = 2.0;

/// Score promises with the default configuration.
pub fn calculate(promises: &[Promise]) -> ScoreResult {
    calculate_score(promises, &ScoringConfig::default())
}

/// Turn a politician's promises into a [`ScoreResult`].
///
/// Promises without votes count toward `total_promises` but carry no weight.
/// Each voted-on promise is scored by the average point value of its votes
/// and weighted by its vote count, capped at `weight_cap`.
pub fn calculate_score(promises: &[Promise], config: &ScoringConfig) -> ScoreResult {
    if promises.is_empty() {
        return ScoreResult::empty();
    }

    let points = config.effective_points();
    let weight_cap = config.effective_weight_cap();

    let mut breakdown = Breakdown::default();
    let mut weighted_sum = 0.0;
    let mut total_weight: u64 = 0;

    for promise in promises {
        let tally: Breakdown = promise.votes.iter().collect();
        if let Some(contribution) = contribute(promise, &tally, &points, weight_cap) {
            weighted_sum += contribution.score * contribution.weight as f64;
            total_weight += contribution.weight;
            breakdown.merge(&tally);
        }
    }

    let total_votes = breakdown.total();
    let overall_score = if total_weight > 0 {
        round_percent(weighted_sum / total_weight as f64)
    } else {
        0
    };

    ScoreResult {
        overall_score,
        total_promises: promises.len() as u64,
        completion_rate: percent_of(breakdown.complete, total_votes),
        consensus_strength: consensus_strength(&breakdown),
        total_votes,
        breakdown,
        grade: config.effective_grades().grade_for(overall_score),
    }
}

/// Per-promise scores and weights for every promise that has votes.
pub fn score_promises(promises: &[Promise], config: &ScoringConfig) -> Vec<PromiseContribution> {
    let points = config.effective_points();
    let weight_cap = config.effective_weight_cap();

    promises
        .iter()
        .filter_map(|promise| {
            let tally: Breakdown = promise.votes.iter().collect();
            contribute(promise, &tally, &points, weight_cap)
        })
        .collect()
}

fn contribute(
    promise: &Promise,
    tally: &Breakdown,
    points: &PointValues,
    weight_cap: u64,
) -> Option<PromiseContribution> {
    let votes = tally.total();
    if votes == 0 {
        return None;
    }

    let earned: f64 = tally
        .counts()
        .iter()
        .map(|(status, count)| points.value(*status) * *count as f64)
        .sum();

    Some(PromiseContribution {
        id: promise.id.clone(),
        votes,
        score: earned / votes as f64,
        weight: votes.min(weight_cap),
    })
}

/// Agreement among voters, 0-100.
///
/// Shannon entropy of the status distribution, normalized against the
/// four-way maximum and inverted: unanimous votes give 100, an even split
/// across all statuses gives 0. No votes gives 0.
pub fn consensus_strength(breakdown: &Breakdown) -> u8 {
    let total = breakdown.total();
    if total == 0 {
        return 0;
    }

    let entropy: f64 = breakdown
        .counts()
        .iter()
        .filter(|(_, count)| *count > 0)
        .map(|(_, count)| {
            let p = *count as f64 / total as f64;
            -p * p.log2()
        })
        .sum();

    round_percent((1.0 - entropy / MAX_ENTROPY) * 100.0)
}

/// `part / whole` as a whole percentage; 0 when `whole` is 0.
pub fn percent_of(part: u64, whole: u64) -> u8 {
    if whole == 0 {
        return 0;
    }
    round_percent(part as f64 / whole as f64 * 100.0)
}

// f64::round rounds half away from zero, which is half-up for the
// non-negative values fed in here.
fn round_percent(value: f64) -> u8 {
    value.round().clamp(0.0, 100.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::{Grade, GradeThresholds, PointValues, PromiseId, VoteStatus};
    use VoteStatus::{Broken, Complete, InProgress, NotStarted};

    fn promise(id: u64, statuses: &[VoteStatus]) -> Promise {
        Promise::new(id, statuses)
    }

    fn repeat(status: VoteStatus, n: usize) -> Vec<VoteStatus> {
        vec![status; n]
    }

    #[test]
    fn test_empty_input_is_not_applicable() {
        let result = calculate(&[]);
        assert_eq!(result, ScoreResult::empty());
        assert_eq!(result.grade, Grade::NotApplicable);
        assert_eq!(result.overall_score, 0);
        assert_eq!(result.total_promises, 0);
        assert_eq!(result.total_votes, 0);
    }

    #[test]
    fn test_promise_without_votes_grades_f() {
        let result = calculate(&[promise(1, &[])]);
        assert_eq!(result.total_promises, 1);
        assert_eq!(result.total_votes, 0);
        assert_eq!(result.overall_score, 0);
        assert_eq!(result.completion_rate, 0);
        assert_eq!(result.consensus_strength, 0);
        assert_eq!(result.grade, Grade::F);
    }

    #[test]
    fn test_unanimous_complete() {
        let result = calculate(&[promise(1, &repeat(Complete, 5))]);
        assert_eq!(result.overall_score, 100);
        assert_eq!(result.completion_rate, 100);
        assert_eq!(result.consensus_strength, 100);
        assert_eq!(result.total_votes, 5);
        assert_eq!(result.breakdown.complete, 5);
        assert_eq!(result.grade, Grade::A);
    }

    #[test]
    fn test_even_split_has_no_consensus() {
        let result = calculate(&[promise(1, &[Complete, InProgress, Broken, NotStarted])]);
        // (100 + 50 + 0 + 25) / 4 = 43.75
        assert_eq!(result.overall_score, 44);
        assert_eq!(result.consensus_strength, 0);
        assert_eq!(result.completion_rate, 25);
        assert_eq!(result.grade, Grade::F);
        for (_, count) in result.breakdown.counts() {
            assert_eq!(percent_of(count, result.total_votes), 25);
        }
    }

    #[test]
    fn test_weight_cap_limits_heavy_promise() {
        let result = calculate(&[
            promise(1, &repeat(Complete, 20)),
            promise(2, &[Broken]),
        ]);
        // (100 * 10 + 0 * 1) / 11 = 90.9
        assert_eq!(result.overall_score, 91);
        assert_eq!(result.total_votes, 21);
        assert_eq!(result.grade, Grade::A);
    }

    #[test]
    fn test_uncapped_weight_would_differ() {
        let promises = [promise(1, &repeat(Complete, 20)), promise(2, &repeat(Broken, 5))];
        // Capped: (100 * 10 + 0 * 5) / 15 = 66.7
        assert_eq!(calculate(&promises).overall_score, 67);

        // Cap of 100 lets raw counts through: (100 * 20) / 25 = 80
        let config = ScoringConfig {
            weight_cap: Some(100),
            ..ScoringConfig::default()
        };
        assert_eq!(calculate_score(&promises, &config).overall_score, 80);
    }

    #[test]
    fn test_deterministic() {
        let promises = [
            promise(1, &[Complete, Complete, InProgress]),
            promise(2, &[NotStarted, Broken]),
            promise(3, &[]),
        ];
        let first = calculate(&promises);
        let second = calculate(&promises);
        assert_eq!(first, second);
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }

    #[test]
    fn test_breakdown_sums_to_total_votes() {
        let scenarios: Vec<Vec<Promise>> = vec![
            vec![promise(1, &[Complete])],
            vec![promise(1, &[Complete, Broken]), promise(2, &[NotStarted; 7])],
            vec![
                promise(1, &repeat(InProgress, 13)),
                promise(2, &[]),
                promise(3, &[Broken, Broken, Complete, NotStarted]),
            ],
        ];
        for promises in scenarios {
            let result = calculate(&promises);
            let b = result.breakdown;
            assert_eq!(b.complete + b.in_progress + b.broken + b.not_started, result.total_votes);
        }
    }

    #[test]
    fn test_zero_vote_promises_do_not_dilute_score() {
        let with_empty = calculate(&[promise(1, &repeat(Complete, 3)), promise(2, &[])]);
        assert_eq!(with_empty.overall_score, 100);
        assert_eq!(with_empty.total_promises, 2);
        assert_eq!(with_empty.total_votes, 3);
    }

    #[test]
    fn test_grade_boundaries_via_scores() {
        // Single promise of 10 votes: each Complete worth 10 points, each
        // InProgress worth 5, so the score is easy to steer.
        let cases = [
            (9, 0, Grade::A),  // 90
            (8, 0, Grade::B),  // 80
            (7, 0, Grade::C),  // 70
            (6, 0, Grade::D),  // 60
            (5, 1, Grade::F),  // 55
        ];
        for (complete, in_progress, expected) in cases {
            let mut statuses = repeat(Complete, complete);
            statuses.extend(repeat(InProgress, in_progress));
            statuses.extend(repeat(Broken, 10 - complete - in_progress));
            let result = calculate(&[promise(1, &statuses)]);
            assert_eq!(result.grade, expected, "score {}", result.overall_score);
        }
    }

    #[test]
    fn test_consensus_partial_agreement() {
        // 3 Complete, 1 Broken: H = 0.811, consensus = (1 - 0.4056) * 100
        let breakdown = Breakdown { complete: 3, in_progress: 0, broken: 1, not_started: 0 };
        assert_eq!(consensus_strength(&breakdown), 59);

        // Two-way even split: H = 1
        let breakdown = Breakdown { complete: 2, in_progress: 0, broken: 2, not_started: 0 };
        assert_eq!(consensus_strength(&breakdown), 50);
    }

    #[test]
    fn test_consensus_no_votes() {
        assert_eq!(consensus_strength(&Breakdown::default()), 0);
    }

    #[test]
    fn test_percent_of_rounds_half_up() {
        assert_eq!(percent_of(1, 8), 13); // 12.5
        assert_eq!(percent_of(1, 3), 33);
        assert_eq!(percent_of(2, 3), 67);
        assert_eq!(percent_of(0, 0), 0);
        assert_eq!(percent_of(5, 5), 100);
    }

    #[test]
    fn test_custom_points_and_grades() {
        let config = ScoringConfig {
            points: Some(PointValues {
                complete: 100.0,
                in_progress: 80.0,
                not_started: 0.0,
                broken: 0.0,
            }),
            weight_cap: None,
            grades: Some(GradeThresholds { a: 95, b: 85, c: 75, d: 65 }),
        };
        let result = calculate_score(&[promise(1, &[Complete, InProgress])], &config);
        assert_eq!(result.overall_score, 90);
        assert_eq!(result.grade, Grade::B);
    }

    #[test]
    fn test_score_promises_skips_unvoted() {
        let promises = [
            promise(1, &repeat(Complete, 12)),
            promise(2, &[]),
            promise(3, &[InProgress, NotStarted]),
        ];
        let contributions = score_promises(&promises, &ScoringConfig::default());
        assert_eq!(contributions.len(), 2);

        assert_eq!(contributions[0].id, PromiseId::Number(1));
        assert_eq!(contributions[0].votes, 12);
        assert_eq!(contributions[0].weight, 10);
        assert_eq!(contributions[0].score, 100.0);

        assert_eq!(contributions[1].id, PromiseId::Number(3));
        assert_eq!(contributions[1].weight, 2);
        assert_eq!(contributions[1].score, 37.5);
    }
}
