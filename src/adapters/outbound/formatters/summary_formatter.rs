use crate::application::dto::WrittenArtifact;
use crate::application::read_models::{ModelReadModel, UnresolvedImportView};
use crate::ports::outbound::ArtifactFormatter;
use crate::shared::Result;
use serde::Serialize;

/// SummaryTextFormatter adapter for the human-readable run summary
pub struct SummaryTextFormatter {
    artifacts: Vec<WrittenArtifact>,
}

impl SummaryTextFormatter {
    pub fn new(artifacts: Vec<WrittenArtifact>) -> Self {
        Self { artifacts }
    }
}

impl ArtifactFormatter for SummaryTextFormatter {
    fn format(&self, model: &ModelReadModel) -> Result<String> {
        let mut lines = vec![
            format!("Packages (nodes): {}", model.node_count),
            format!("Imports (edges): {}", model.edge_count),
            format!("Views found: {}", model.views.len()),
        ];

        if model.skipped_files > 0 {
            lines.push(format!(
                "Skipped files: {} of {}",
                model.skipped_files, model.scanned_files
            ));
        }

        if !model.unresolved_imports.is_empty() {
            lines.push(format!(
                "Unresolved imports (ignored/allowed missing): {}",
                model.unresolved_imports.len()
            ));
            for unresolved in &model.unresolved_imports {
                lines.push(format!(
                    "  - {} (imported by: {})",
                    unresolved.name,
                    unresolved.importers.join(", ")
                ));
            }
        }

        for artifact in &self.artifacts {
            lines.push(format!("Wrote {}: {}", artifact.kind, artifact.path.display()));
        }

        Ok(lines.join("\n") + "\n")
    }
}

#[derive(Debug, Serialize)]
struct Summary<'a> {
    packages: usize,
    imports: usize,
    order: Vec<&'a str>,
    views: &'a [String],
    unresolved_imports: &'a [UnresolvedImportView],
    scanned_files: usize,
    skipped_files: usize,
    artifacts: &'a [WrittenArtifact],
}

/// SummaryJsonFormatter adapter for the machine-readable run summary
pub struct SummaryJsonFormatter {
    artifacts: Vec<WrittenArtifact>,
}

impl SummaryJsonFormatter {
    pub fn new(artifacts: Vec<WrittenArtifact>) -> Self {
        Self { artifacts }
    }
}

impl ArtifactFormatter for SummaryJsonFormatter {
    fn format(&self, model: &ModelReadModel) -> Result<String> {
        let summary = Summary {
            packages: model.node_count,
            imports: model.edge_count,
            order: model.package_names().collect(),
            views: &model.views,
            unresolved_imports: &model.unresolved_imports,
            scanned_files: model.scanned_files,
            skipped_files: model.skipped_files,
            artifacts: &self.artifacts,
        };
        Ok(serde_json::to_string_pretty(&summary)?)
    }
}
