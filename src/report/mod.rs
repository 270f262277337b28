//! Result records, output writers and run comparison.
mod compare;
mod format;
mod record;
mod writers;


pub use compare::{
    Comparison, ComparisonRow, MarkdownOptions, ResultRow, ResultSet, Winner, compare,
    parse_results, render_markdown,
};
pub use record::BenchRecord;
pub use writers::{CSV_HEADER, ReportWriter};
