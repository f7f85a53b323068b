use serde::Deserialize;

use crate::scoring::PromiseId;

/// A vote row as exported by the data layer.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct RawVote {
    #[serde(alias = "status")]
    pub vote_status: String,
}

/// A promise row with its embedded votes. Missing or `null` votes mean none.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct RawPromise {
    pub id: PromiseId,
    #[serde(default, alias = "votes")]
    pub promise_votes: Option<Vec<RawVote>>,
}

/// Politician export: profile fields plus promises.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct PoliticianRecord {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub position: Option<String>,
    #[serde(default)]
    pub party: Option<String>,
    #[serde(default)]
    pub promises: Vec<RawPromise>,
}

/// Contents of one data file: a bare list of promises, or a politician
/// record wrapping them.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum Dataset {
    Promises(Vec<RawPromise>),
    Politician(PoliticianRecord),
}

impl Dataset {
    pub fn name(&self) -> Option<&str> {
        match self {
            Dataset::Promises(_) => None,
            Dataset::Politician(record) => record.name.as_deref(),
        }
    }

    pub fn promises(&self) -> &[RawPromise] {
        match self {
            Dataset::Promises(promises) => promises,
            Dataset::Politician(record) => &record.promises,
        }
    }

    pub fn into_promises(self) -> Vec<RawPromise> {
        match self {
            Dataset::Promises(promises) => promises,
            Dataset::Politician(record) => record.promises,
        }
    }
}
