use crate::application::read_models::ModelReadModel;
use crate::ports::outbound::ArtifactFormatter;
use crate::shared::Result;

/// OrderedSourceFormatter adapter for the concatenated model file
///
/// Every package is preceded by a `// ===== PACKAGE: <name> =====` banner
/// and followed by a blank line, so the output is itself valid source.
pub struct OrderedSourceFormatter;

impl OrderedSourceFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for OrderedSourceFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ArtifactFormatter for OrderedSourceFormatter {
    fn format(&self, model: &ModelReadModel) -> Result<String> {
        let mut chunks: Vec<String> = Vec::with_capacity(model.packages.len() * 3);
        for package in &model.packages {
            chunks.push(format!("// ===== PACKAGE: {} =====", package.name));
            chunks.push(package.text.trim_end().to_string());
            chunks.push(String::new());
        }
        Ok(chunks.join("\n"))
    }
}
