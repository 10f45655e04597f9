/// Formatter adapters for the run's output artifacts
mod graphviz_formatter;
mod notebook_formatter;
mod ordered_source_formatter;
mod summary_formatter;

pub use graphviz_formatter::{GraphvizFormatter, DEFAULT_LAYOUT};
pub use notebook_formatter::NotebookFormatter;
pub use ordered_source_formatter::OrderedSourceFormatter;
pub use summary_formatter::{SummaryJsonFormatter, SummaryTextFormatter};
