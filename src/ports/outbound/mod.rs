/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (file system, console, etc.).
pub mod artifact_formatter;
pub mod output_presenter;
pub mod progress_reporter;
pub mod source_reader;

pub use artifact_formatter::ArtifactFormatter;
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
pub use source_reader::SourceReader;
