use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Community assessment of where a promise stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VoteStatus {
    #[serde(rename = "Complete")]
    Complete,
    #[serde(rename = "In Progress")]
    InProgress,
    #[serde(rename = "Broken")]
    Broken,
    #[serde(rename = "Not Started")]
    NotStarted,
}

impl VoteStatus {
    /// All statuses in display order.
    pub const ALL: [VoteStatus; 4] = [
        VoteStatus::Complete,
        VoteStatus::InProgress,
        VoteStatus::Broken,
        VoteStatus::NotStarted,
    ];

    /// Label as exported by the data layer ("In Progress", "Not Started", ...)
    pub fn label(&self) -> &'static str {
        match self {
            VoteStatus::Complete => "Complete",
            VoteStatus::InProgress => "In Progress",
            VoteStatus::Broken => "Broken",
            VoteStatus::NotStarted => "Not Started",
        }
    }
}

impl fmt::Display for VoteStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown vote status '{0}'")]
pub struct ParseStatusError(pub String);

impl FromStr for VoteStatus {
    type Err = ParseStatusError;

    /// Accepts the exported labels case-insensitively, with `_` or `-`
    /// standing in for the space ("in_progress", "Not-Started").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .map(|c| match c {
                '_' | '-' => ' ',
                c => c.to_ascii_lowercase(),
            })
            .collect();

        match normalized.as_str() {
            "complete" => Ok(VoteStatus::Complete),
            "in progress" => Ok(VoteStatus::InProgress),
            "broken" => Ok(VoteStatus::Broken),
            "not started" => Ok(VoteStatus::NotStarted),
            _ => Err(ParseStatusError(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vote {
    pub status: VoteStatus,
}

impl From<VoteStatus> for Vote {
    fn from(status: VoteStatus) -> Self {
        Self { status }
    }
}

/// Promise identifier as handed over by the data layer: numeric or textual.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PromiseId {
    Number(u64),
    Text(String),
}

impl fmt::Display for PromiseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PromiseId::Number(n) => write!(f, "{}", n),
            PromiseId::Text(s) => f.write_str(s),
        }
    }
}

/// A single commitment reduced to what scoring needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Promise {
    pub id: PromiseId,
    #[serde(default)]
    pub votes: Vec<Vote>,
}

impl Promise {
    /// Numbered promise with one vote per status given
    pub fn new(id: u64, statuses: &[VoteStatus]) -> Self {
        Self {
            id: PromiseId::Number(id),
            votes: statuses.iter().copied().map(Vote::from).collect(),
        }
    }
}

/// Vote counts per status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Breakdown {
    pub complete: u64,
    pub in_progress: u64,
    pub broken: u64,
    pub not_started: u64,
}

impl Breakdown {
    pub fn record(&mut self, status: VoteStatus) {
        match status {
            VoteStatus::Complete => self.complete += 1,
            VoteStatus::InProgress => self.in_progress += 1,
            VoteStatus::Broken => self.broken += 1,
            VoteStatus::NotStarted => self.not_started += 1,
        }
    }

    pub fn count(&self, status: VoteStatus) -> u64 {
        match status {
            VoteStatus::Complete => self.complete,
            VoteStatus::InProgress => self.in_progress,
            VoteStatus::Broken => self.broken,
            VoteStatus::NotStarted => self.not_started,
        }
    }

    pub fn total(&self) -> u64 {
        self.complete + self.in_progress + self.broken + self.not_started
    }

    pub fn merge(&mut self, other: &Breakdown) {
        self.complete += other.complete;
        self.in_progress += other.in_progress;
        self.broken += other.broken;
        self.not_started += other.not_started;
    }

    /// Counts paired with their status, in display order.
    pub fn counts(&self) -> [(VoteStatus, u64); 4] {
        VoteStatus::ALL.map(|status| (status, self.count(status)))
    }
}

impl<'a> FromIterator<&'a Vote> for Breakdown {
    fn from_iter<I: IntoIterator<Item = &'a Vote>>(iter: I) -> Self {
        let mut breakdown = Breakdown::default();
        for vote in iter {
            breakdown.record(vote.status);
        }
        breakdown
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Grade {
    A,
    B,
    C,
    D,
    F,
    /// No promises to grade.
    #[serde(rename = "N/A")]
    NotApplicable,
}

impl Grade {
    pub fn as_str(&self) -> &'static str {
        match self {
            Grade::A => "A",
            Grade::B => "B",
            Grade::C => "C",
            Grade::D => "D",
            Grade::F => "F",
            Grade::NotApplicable => "N/A",
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Score for one politician at one point in time.
///
/// `breakdown` always sums to `total_votes`: the engine only ever sees typed
/// [`VoteStatus`] values, so every counted vote lands in exactly one bucket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreResult {
    pub overall_score: u8,
    pub total_promises: u64,
    pub completion_rate: u8,
    pub consensus_strength: u8,
    pub total_votes: u64,
    pub breakdown: Breakdown,
    pub grade: Grade,
}

impl ScoreResult {
    /// Result for a politician with no promises at all.
    pub fn empty() -> Self {
        Self {
            overall_score: 0,
            total_promises: 0,
            completion_rate: 0,
            consensus_strength: 0,
            total_votes: 0,
            breakdown: Breakdown::default(),
            grade: Grade::NotApplicable,
        }
    }
}

/// How a single voted-on promise fed into the overall score.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PromiseContribution {
    pub id: PromiseId,
    pub votes: u64,
    pub score: f64,
    pub weight: u64,
}
