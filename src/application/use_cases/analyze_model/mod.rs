use crate::application::dto::{AnalysisRequest, AnalysisResponse};
use crate::model_scan::domain::{DependencyGraph, PackageRegistry};
use crate::model_scan::policies::UnresolvedImportPolicy;
use crate::model_scan::services::{
    CycleDetector, GraphBuilder, RegistryAssembler, TopologicalOrderer, ViewCollector,
};
use crate::ports::inbound::ModelAnalysisPort;
use crate::ports::outbound::{ProgressReporter, SourceReader};
use crate::shared::error::ModelError;
use crate::shared::Result;
use rayon::prelude::*;
use std::path::{Path, PathBuf};

/// Registry plus file bookkeeping produced by one folder scan
struct ScanOutcome {
    registry: PackageRegistry,
    scanned_files: usize,
    skipped_files: usize,
}

/// AnalyzeModelUseCase - Core use case for model analysis
///
/// This use case orchestrates the scan workflow using generic dependency
/// injection for its infrastructure dependencies.
///
/// # Type Parameters
/// * `SR` - SourceReader implementation
/// * `PR` - ProgressReporter implementation
pub struct AnalyzeModelUseCase<SR, PR> {
    source_reader: SR,
    progress_reporter: PR,
}

impl<SR, PR> AnalyzeModelUseCase<SR, PR>
where
    SR: SourceReader,
    PR: ProgressReporter,
{
    /// Creates a new AnalyzeModelUseCase with injected dependencies
    pub fn new(source_reader: SR, progress_reporter: PR) -> Self {
        Self {
            source_reader,
            progress_reporter,
        }
    }

    /// Executes the full analysis
    ///
    /// Validation happens before any ordering: a cyclic graph fails with
    /// `ImportCycle` even when strict missing-package checks would also
    /// fail.
    pub fn execute(&self, request: AnalysisRequest) -> Result<AnalysisResponse> {
        // Step 1: Scan sources into a registry
        let scan = self.scan(&request.root, &request.extension)?;

        // Step 2: Build the import graph
        let graph = self.build_graph(&scan.registry);

        // Step 3: Validate
        CycleDetector::assert_acyclic(&graph)?;
        UnresolvedImportPolicy::enforce(&graph, &request.ignore_missing, request.strict_missing)?;

        // Step 4: Derive views and order
        let unresolved_imports = UnresolvedImportPolicy::unresolved(&graph, &request.ignore_missing);
        if !unresolved_imports.is_empty() {
            self.progress_reporter.report_warning(&format!(
                "⚠️  {} imported package(s) not found in the scanned tree",
                unresolved_imports.len()
            ));
        }
        let views = ViewCollector::collect_all(&scan.registry);
        let order = TopologicalOrderer::order(&graph, request.dependencies_first)?;

        self.progress_reporter.report_completion(&format!(
            "✅ Ordered {} package(s), found {} view(s)",
            order.len(),
            views.len()
        ));

        Ok(AnalysisResponse {
            registry: scan.registry,
            graph,
            order,
            views,
            unresolved_imports,
            scanned_files: scan.scanned_files,
            skipped_files: scan.skipped_files,
        })
    }

    /// Scans `root` and returns only the topological order
    ///
    /// Unresolved imports are never an error here; they still take part in
    /// the order as import-only nodes.
    pub fn order_only(
        &self,
        root: &Path,
        extension: &str,
        dependencies_first: bool,
    ) -> Result<Vec<String>> {
        let scan = self.scan(root, extension)?;
        let graph = self.build_graph(&scan.registry);
        CycleDetector::assert_acyclic(&graph)?;
        Ok(TopologicalOrderer::order(&graph, dependencies_first)?)
    }

    /// Discovers and reads every source file, then merges them in sorted
    /// path order
    fn scan(&self, root: &Path, extension: &str) -> Result<ScanOutcome> {
        self.progress_reporter.report(&format!(
            "🔍 Scanning *.{} files under: {}",
            extension,
            root.display()
        ));

        let paths = self.source_reader.discover_sources(root, extension)?;
        tracing::debug!(files = paths.len(), root = %root.display(), "source files discovered");

        // Reads fan out; the merge below stays sequential so first-wins is
        // decided by path order alone.
        let reader = &self.source_reader;
        let reads: Vec<(PathBuf, Result<String>)> = paths
            .par_iter()
            .map(|path| (path.clone(), reader.read_source(path)))
            .collect();

        let total = reads.len();
        let mut skipped_files = 0;
        let mut file_blocks = Vec::with_capacity(total);

        for (index, (path, read)) in reads.into_iter().enumerate() {
            let file_name = path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned());
            self.progress_reporter
                .report_progress(index + 1, total, file_name.as_deref());

            match read {
                Ok(text) => {
                    let blocks = RegistryAssembler::blocks_from_source(&text);
                    tracing::debug!(file = %path.display(), packages = blocks.len(), "top-level packages extracted");
                    file_blocks.push(blocks);
                }
                Err(e) => {
                    skipped_files += 1;
                    tracing::warn!(file = %path.display(), error = %e, "skipping unreadable source file");
                    self.progress_reporter.report_warning(&format!(
                        "⚠️  Skipping {}: {}",
                        path.display(),
                        skip_reason(&e)
                    ));
                }
            }
        }

        let registry = RegistryAssembler::assemble(file_blocks);
        self.progress_reporter.report(&format!(
            "✅ Detected {} top-level package(s) in {} file(s)",
            registry.len(),
            total - skipped_files
        ));

        Ok(ScanOutcome {
            registry,
            scanned_files: total,
            skipped_files,
        })
    }

    fn build_graph(&self, registry: &PackageRegistry) -> DependencyGraph {
        let graph = GraphBuilder::build(registry);
        self.progress_reporter.report(&format!(
            "🔗 Import graph: {} node(s), {} edge(s)",
            graph.node_count(),
            graph.edge_count()
        ));
        graph
    }
}

impl<SR, PR> ModelAnalysisPort for AnalyzeModelUseCase<SR, PR>
where
    SR: SourceReader,
    PR: ProgressReporter,
{
    fn analyze(&self, request: AnalysisRequest) -> Result<AnalysisResponse> {
        self.execute(request)
    }

    fn order(&self, root: &Path, extension: &str, dependencies_first: bool) -> Result<Vec<String>> {
        self.order_only(root, extension, dependencies_first)
    }
}

/// Short reason for a skipped file; the full error carries a hint
/// paragraph that would drown the warning line.
fn skip_reason(error: &anyhow::Error) -> String {
    match error.downcast_ref::<ModelError>() {
        Some(ModelError::FileReadError { details, .. }) => details.clone(),
        _ => error.to_string().lines().next().unwrap_or_default().to_string(),
    }
}
