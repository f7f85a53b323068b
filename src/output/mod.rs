pub mod formatter;
pub mod report;

pub use formatter::{
    format_contributions, format_json, format_ranked_table, format_score_card, format_tsv,
    grade_band, percentage_bar, score_band, should_use_colors, Band,
};
pub use report::write_report;
