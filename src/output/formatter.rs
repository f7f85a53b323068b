use std::io::IsTerminal;
use owo_colors::OwoColorize;
use serde::Serialize;
use terminal_size::{Width, terminal_size};

use crate::ranking::ScoredPolitician;
use crate::scoring::{percent_of, Grade, PromiseContribution, ScoreResult};

/// Traffic-light band used to colour scores and grades.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Band {
    Good,
    Fair,
    Poor,
}

pub fn score_band(score: u8) -> Band {
    if score >= 80 {
        Band::Good
    } else if score >= 60 {
        Band::Fair
    } else {
        Band::Poor
    }
}

pub fn grade_band(grade: Grade) -> Band {
    match grade {
        Grade::A | Grade::B => Band::Good,
        Grade::C | Grade::D => Band::Fair,
        Grade::F | Grade::NotApplicable => Band::Poor,
    }
}

fn paint(text: &str, band: Band, use_colors: bool) -> String {
    if !use_colors {
        return text.to_string();
    }
    match band {
        Band::Good => text.green().bold().to_string(),
        Band::Fair => text.yellow().bold().to_string(),
        Band::Poor => text.red().bold().to_string(),
    }
}

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// Get terminal width, defaulting to None for pipes (unlimited)
fn get_terminal_width() -> Option<usize> {
    terminal_size().map(|(Width(w), _)| w as usize)
}

const DEFAULT_BAR_WIDTH: usize = 20;
const MAX_BAR_WIDTH: usize = 40;

/// Width of breakdown bars: whatever is left of the terminal after the
/// label and count columns, within sensible bounds.
fn bar_width() -> usize {
    match get_terminal_width() {
        Some(width) => width.saturating_sub(40).clamp(10, MAX_BAR_WIDTH),
        None => DEFAULT_BAR_WIDTH,
    }
}

/// Render `count / total` as a fixed-width bar of filled and empty cells
pub fn percentage_bar(count: u64, total: u64, width: usize) -> String {
    let filled = if total == 0 {
        0
    } else {
        ((count as f64 / total as f64) * width as f64).round() as usize
    };
    let filled = filled.min(width);
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

fn plural(count: u64, word: &str) -> String {
    if count == 1 {
        format!("{} {}", count, word)
    } else {
        format!("{} {}s", count, word)
    }
}

/// Format a politician's score as a multi-line card
///
/// Politicians without any votes get a placeholder card instead of zeros.
pub fn format_score_card(name: Option<&str>, result: &ScoreResult, use_colors: bool) -> String {
    let mut lines = Vec::new();

    if let Some(name) = name {
        if use_colors {
            lines.push(name.bold().to_string());
        } else {
            lines.push(name.to_string());
        }
    }

    if result.total_votes == 0 {
        lines.push("  No Votes Yet".to_string());
        lines.push("  This politician needs community votes to generate a score".to_string());
        return lines.join("\n");
    }

    let score = paint(
        &result.overall_score.to_string(),
        score_band(result.overall_score),
        use_colors,
    );
    let grade = paint(
        &format!("Grade {}", result.grade),
        grade_band(result.grade),
        use_colors,
    );
    lines.push(format!("  Score: {}  {}", score, grade));
    lines.push(format!(
        "  Completion Rate: {}%  Consensus: {}%",
        result.completion_rate, result.consensus_strength
    ));

    let width = bar_width();
    for (status, count) in result.breakdown.counts() {
        let label = format!("{}:", status.label());
        lines.push(format!(
            "  {:<13}{:>11} {:>4}%  {}",
            label,
            plural(count, "vote"),
            percent_of(count, result.total_votes),
            percentage_bar(count, result.total_votes, width)
        ));
    }

    lines.push(format!(
        "  Based on {} across {}",
        plural(result.total_votes, "vote"),
        plural(result.total_promises, "promise")
    ));

    lines.join("\n")
}

/// Format per-promise contributions (for verbose mode)
pub fn format_contributions(contributions: &[PromiseContribution]) -> String {
    contributions
        .iter()
        .map(|c| {
            format!(
                "  Promise {}: {:.1} pts, weight {} ({})",
                c.id,
                c.score,
                c.weight,
                plural(c.votes, "vote")
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Truncate name to fit available width, accounting for Unicode
fn truncate_name(name: &str, max_width: usize) -> String {
    let chars: Vec<char> = name.chars().collect();
    if chars.len() <= max_width {
        name.to_string()
    } else if max_width > 3 {
        format!("{}...", chars[..max_width - 3].iter().collect::<String>())
    } else {
        chars[..max_width].iter().collect()
    }
}

/// Format ranked politicians as a table: Index, Score, Grade, Name, Votes
/// No headers. Index column is 1-based and right-aligned.
pub fn format_ranked_table(rows: &[ScoredPolitician], use_colors: bool) -> String {
    if rows.is_empty() {
        return "No politicians scored.".to_string();
    }

    let term_width = get_terminal_width();
    // "99. " + "100" + "  " + "N/A" + "  "
    let fixed_width = 4 + 3 + 2 + 3 + 2;

    rows.iter()
        .enumerate()
        .map(|(idx, row)| {
            let index_str = format!("{:>2}.", idx + 1);
            let score_str = format!("{:>3}", row.result.overall_score);
            let grade_str = format!("{:<3}", row.result.grade.as_str());
            let votes_str = format!("({})", plural(row.result.total_votes, "vote"));

            let name = match term_width {
                Some(width) if width > fixed_width + votes_str.len() + 10 => {
                    truncate_name(&row.name, width - fixed_width - votes_str.len() - 1)
                }
                Some(_) => truncate_name(&row.name, 20),
                None => row.name.clone(),
            };

            if use_colors {
                format!(
                    "{} {}  {}  {} {}",
                    index_str.dimmed(),
                    paint(&score_str, score_band(row.result.overall_score), true),
                    paint(&grade_str, grade_band(row.result.grade), true),
                    name,
                    votes_str.dimmed()
                )
            } else {
                format!(
                    "{} {}  {}  {} {}",
                    index_str, score_str, grade_str, name, votes_str
                )
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format scored politicians as tab-separated values for scripting
/// Columns: score, grade, total_votes, total_promises, name (no headers, no colors)
pub fn format_tsv(rows: &[ScoredPolitician]) -> String {
    rows.iter()
        .map(|row| {
            format!(
                "{}\t{}\t{}\t{}\t{}",
                row.result.overall_score,
                row.result.grade,
                row.result.total_votes,
                row.result.total_promises,
                row.name
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Pretty-printed JSON
pub fn format_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}
