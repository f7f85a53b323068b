use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use super::records::RawPromise;
use crate::scoring::{Promise, PromiseId, Vote, VoteStatus};

/// What to do with a vote whose status is not one of the four known ones.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnknownStatusPolicy {
    /// Fail the whole dataset
    #[default]
    Reject,
    /// Drop the vote entirely, as if it was never cast
    Skip,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IngestError {
    #[error("promise {promise}: vote #{position} has unknown status '{status}'")]
    UnknownStatus {
        promise: PromiseId,
        /// 1-based position of the vote within the promise
        position: usize,
        status: String,
    },
}

/// Convert raw rows into typed promises.
///
/// Input order is preserved. Promises keep their place even when all of
/// their votes are dropped.
pub fn normalize(
    raw: Vec<RawPromise>,
    policy: UnknownStatusPolicy,
) -> Result<Vec<Promise>, IngestError> {
    let mut skipped = 0usize;
    let mut promises = Vec::with_capacity(raw.len());

    for RawPromise { id, promise_votes } in raw {
        let raw_votes = promise_votes.unwrap_or_default();
        let mut votes = Vec::with_capacity(raw_votes.len());

        for (idx, raw_vote) in raw_votes.into_iter().enumerate() {
            match raw_vote.vote_status.parse::<VoteStatus>() {
                Ok(status) => votes.push(Vote { status }),
                Err(err) => match policy {
                    UnknownStatusPolicy::Reject => {
                        return Err(IngestError::UnknownStatus {
                            promise: id.clone(),
                            position: idx + 1,
                            status: err.0,
                        });
                    }
                    UnknownStatusPolicy::Skip => {
                        debug!(promise = %id, status = %err.0, "dropping vote");
                        skipped += 1;
                    }
                },
            }
        }

        promises.push(Promise { id, votes });
    }

    if skipped > 0 {
        warn!(skipped, "dropped votes with unknown status");
    }

    Ok(promises)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ingest::RawVote;

    fn raw(id: u64, statuses: &[&str]) -> RawPromise {
        RawPromise {
            id: PromiseId::Number(id),
            promise_votes: Some(
                statuses
                    .iter()
                    .map(|s| RawVote { vote_status: s.to_string() })
                    .collect(),
            ),
        }
    }

    #[test]
    fn test_normalize_known_statuses() {
        let promises = normalize(
            vec![raw(1, &["Complete", "In Progress"]), raw(2, &["Not Started", "Broken"])],
            UnknownStatusPolicy::Reject,
        )
        .unwrap();

        assert_eq!(promises.len(), 2);
        assert_eq!(
            promises[0],
            Promise::new(1, &[VoteStatus::Complete, VoteStatus::InProgress])
        );
        assert_eq!(
            promises[1],
            Promise::new(2, &[VoteStatus::NotStarted, VoteStatus::Broken])
        );
    }

    #[test]
    fn test_missing_votes_become_empty() {
        let record = RawPromise {
            id: PromiseId::Number(9),
            promise_votes: None,
        };
        let promises = normalize(vec![record], UnknownStatusPolicy::Reject).unwrap();
        assert_eq!(promises.len(), 1);
        assert!(promises[0].votes.is_empty());
    }

    #[test]
    fn test_reject_unknown_status() {
        let err = normalize(
            vec![raw(1, &["Complete"]), raw(2, &["Complete", "Stalled"])],
            UnknownStatusPolicy::Reject,
        )
        .unwrap_err();

        assert_eq!(
            err,
            IngestError::UnknownStatus {
                promise: PromiseId::Number(2),
                position: 2,
                status: "Stalled".to_string(),
            }
        );
        assert_eq!(err.to_string(), "promise 2: vote #2 has unknown status 'Stalled'");
    }

    #[test]
    fn test_skip_unknown_status() {
        let promises = normalize(
            vec![raw(1, &["Complete", "Stalled", "Broken"]), raw(2, &["???"])],
            UnknownStatusPolicy::Skip,
        )
        .unwrap();

        assert_eq!(promises[0].votes.len(), 2);
        // Promise stays even when every vote was dropped
        assert_eq!(promises[1].id, PromiseId::Number(2));
        assert!(promises[1].votes.is_empty());
    }

    #[test]
    fn test_policy_parses_from_yaml() {
        let policy: UnknownStatusPolicy = serde_saphyr::from_str("skip").unwrap();
        assert_eq!(policy, UnknownStatusPolicy::Skip);
        assert_eq!(UnknownStatusPolicy::default(), UnknownStatusPolicy::Reject);
    }
}
