/// Data Transfer Objects for application layer
///
/// DTOs are used to transfer data between the application layer
/// and adapters, keeping the domain layer isolated.
mod analysis_request;
mod analysis_response;
mod report_format;
mod written_artifact;

pub use analysis_request::{AnalysisRequest, DEFAULT_EXTENSION};
pub use analysis_response::AnalysisResponse;
pub use report_format::ReportFormat;
pub use written_artifact::{ArtifactKind, WrittenArtifact};
