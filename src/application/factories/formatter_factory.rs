use crate::adapters::outbound::formatters::{
    GraphvizFormatter, NotebookFormatter, OrderedSourceFormatter, SummaryJsonFormatter,
    SummaryTextFormatter,
};
use crate::application::dto::{ArtifactKind, ReportFormat, WrittenArtifact};
use crate::ports::outbound::ArtifactFormatter;

/// Factory for creating artifact formatters
///
/// This factory encapsulates the creation logic for the formatter
/// implementations, following the Factory Pattern. It belongs in the
/// application layer as it selects infrastructure adapters based on
/// application needs.
pub struct FormatterFactory;

impl FormatterFactory {
    /// Creates the formatter for a file artifact
    ///
    /// `graph_layout` is only consulted for [`ArtifactKind::Graph`].
    pub fn create_artifact(kind: ArtifactKind, graph_layout: &str) -> Box<dyn ArtifactFormatter> {
        match kind {
            ArtifactKind::Sysml => Box::new(OrderedSourceFormatter::new()),
            ArtifactKind::Notebook => Box::new(NotebookFormatter::new()),
            ArtifactKind::Graph => Box::new(GraphvizFormatter::new(graph_layout)),
        }
    }

    /// Creates the run summary formatter for the requested format
    ///
    /// # Examples
    /// ```
    /// use sysml_deps::application::dto::ReportFormat;
    /// use sysml_deps::application::factories::FormatterFactory;
    ///
    /// let formatter = FormatterFactory::create_summary(ReportFormat::Json, Vec::new());
    /// ```
    pub fn create_summary(
        format: ReportFormat,
        artifacts: Vec<WrittenArtifact>,
    ) -> Box<dyn ArtifactFormatter> {
        match format {
            ReportFormat::Text => Box::new(SummaryTextFormatter::new(artifacts)),
            ReportFormat::Json => Box::new(SummaryJsonFormatter::new(artifacts)),
        }
    }

    /// Returns the progress message shown before an artifact is written
    ///
    /// # Examples
    /// ```
    /// use sysml_deps::application::dto::ArtifactKind;
    /// use sysml_deps::application::factories::FormatterFactory;
    ///
    /// let message = FormatterFactory::progress_message(ArtifactKind::Notebook);
    /// assert_eq!(message, "📝 Writing Jupyter notebook...");
    /// ```
    pub fn progress_message(kind: ArtifactKind) -> &'static str {
        match kind {
            ArtifactKind::Sysml => "📝 Writing packages in dependency order...",
            ArtifactKind::Notebook => "📝 Writing Jupyter notebook...",
            ArtifactKind::Graph => "📝 Writing import graph (Graphviz DOT)...",
        }
    }
}
