//! sysml-deps - dependency ordering for SysML v2 package trees
//!
//! This library recovers top-level packages, their imports and their nested
//! views from SysML v2 textual sources without a full grammar, builds the
//! package import graph, rejects import cycles with a listing of every
//! elementary loop, and produces a reproducible topological order.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`model_scan`): Text scanning, graph and ordering logic
//! - **Application Layer** (`application`): Use cases, DTOs and read models
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use sysml_deps::prelude::*;
//! use std::path::PathBuf;
//!
//! # fn main() -> Result<()> {
//! // Create adapters
//! let source_reader = FileSystemReader::new();
//! let progress_reporter = StderrProgressReporter::new();
//!
//! // Create use case
//! let use_case = AnalyzeModelUseCase::new(source_reader, progress_reporter);
//!
//! // Execute
//! let request = AnalysisRequest::new(PathBuf::from("model"));
//! let response = use_case.execute(request)?;
//!
//! // Format output
//! let model = ModelReadModel::from_response(&response);
//! let output = OrderedSourceFormatter::new().format(&model)?;
//! println!("{}", output);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod model_scan;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        FileSystemReader, FileSystemWriter, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::{
        GraphvizFormatter, NotebookFormatter, OrderedSourceFormatter, SummaryJsonFormatter,
        SummaryTextFormatter,
    };
    pub use crate::application::dto::{
        AnalysisRequest, AnalysisResponse, ArtifactKind, ReportFormat, WrittenArtifact,
    };
    pub use crate::application::factories::FormatterFactory;
    pub use crate::application::read_models::ModelReadModel;
    pub use crate::application::use_cases::AnalyzeModelUseCase;
    pub use crate::model_scan::domain::{
        CycleReport, DependencyGraph, PackageRegistry, UnresolvedImports,
    };
    pub use crate::model_scan::policies::UnresolvedImportPolicy;
    pub use crate::model_scan::services::{
        BlockExtractor, CommentStripper, CycleDetector, GraphBuilder, ImportScanner,
        QualifiedName, RegistryAssembler, TopologicalOrderer, ViewCollector, ViewScanner,
    };
    pub use crate::ports::inbound::ModelAnalysisPort;
    pub use crate::ports::outbound::{
        ArtifactFormatter, OutputPresenter, ProgressReporter, SourceReader,
    };
    pub use crate::shared::error::{ExitCode, ModelError};
    pub use crate::shared::Result;
}
