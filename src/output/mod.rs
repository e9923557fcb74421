pub mod formatter;

pub use formatter::{
    format_breakdown, format_json, format_ranked_table, format_score, should_use_colors,
};
