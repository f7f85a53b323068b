use anyhow::{Context, Result};
use serde::Serialize;
use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::config::Config;
use crate::ingest::{load_dataset, normalize};
use crate::scoring::{calculate_score, score_promises, PromiseContribution, ScoreResult};

/// A politician's score along with where the data came from.
#[derive(Debug, Clone, Serialize)]
pub struct ScoredPolitician {
    pub name: String,
    pub source: PathBuf,
    #[serde(flatten)]
    pub result: ScoreResult,
    #[serde(skip)]
    pub contributions: Vec<PromiseContribution>,
}

/// Outcome of scoring a batch of files. A bad file does not stop the batch.
#[derive(Debug, Default)]
pub struct RankOutcome {
    pub scored: Vec<ScoredPolitician>,
    pub failures: Vec<(PathBuf, anyhow::Error)>,
}

fn has_glob_meta(pattern: &str) -> bool {
    pattern.contains(['*', '?', '['])
}

/// Expand glob patterns into a sorted, de-duplicated list of files.
///
/// Patterns without glob metacharacters are taken as literal paths so that a
/// missing file surfaces as a scoring failure rather than silently vanishing.
pub fn expand_patterns(patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut paths = BTreeSet::new();

    for pattern in patterns {
        if !has_glob_meta(pattern) {
            paths.insert(PathBuf::from(pattern));
            continue;
        }

        let entries =
            glob::glob(pattern).with_context(|| format!("Invalid glob pattern '{}'", pattern))?;

        let mut matched = 0usize;
        for entry in entries {
            match entry {
                Ok(path) if path.is_file() => {
                    paths.insert(path);
                    matched += 1;
                }
                Ok(_) => {}
                Err(e) => warn!(error = %e, "skipping unreadable path"),
            }
        }

        if matched == 0 {
            warn!(pattern = %pattern, "pattern matched no files");
        }
    }

    Ok(paths.into_iter().collect())
}

fn display_name(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Load, validate and score a single politician data file
pub fn score_file(path: &Path, config: &Config) -> Result<ScoredPolitician> {
    let dataset = load_dataset(path)?;
    let name = dataset
        .name()
        .map(str::to_string)
        .unwrap_or_else(|| display_name(path));

    let promises = normalize(dataset.into_promises(), config.unknown_status)
        .with_context(|| format!("Invalid promise data in {}", path.display()))?;

    let scoring = config.effective_scoring();
    let result = calculate_score(&promises, &scoring);
    debug!(
        name = %name,
        score = result.overall_score,
        votes = result.total_votes,
        "scored"
    );

    Ok(ScoredPolitician {
        name,
        source: path.to_path_buf(),
        contributions: score_promises(&promises, &scoring),
        result,
    })
}

/// Score every file, collecting failures instead of stopping at the first
pub fn score_files(paths: &[PathBuf], config: &Config) -> RankOutcome {
    let mut outcome = RankOutcome::default();

    for path in paths {
        match score_file(path, config) {
            Ok(scored) => outcome.scored.push(scored),
            Err(e) => {
                warn!(path = %path.display(), error = %format!("{:#}", e), "failed to score");
                outcome.failures.push((path.clone(), e));
            }
        }
    }

    outcome
}

fn rank_order(a: &ScoredPolitician, b: &ScoredPolitician) -> Ordering {
    b.result
        .overall_score
        .cmp(&a.result.overall_score)
        .then_with(|| b.result.total_votes.cmp(&a.result.total_votes))
        .then_with(|| a.name.cmp(&b.name))
}

/// Sort best score first; ties go to the better-supported score, then by name
pub fn rank(scored: &mut [ScoredPolitician]) {
    scored.sort_by(rank_order);
}
