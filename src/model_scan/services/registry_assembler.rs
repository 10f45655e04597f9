use super::block_extractor::BlockExtractor;
use super::comment_stripper::CommentStripper;
use crate::model_scan::domain::PackageRegistry;

/// RegistryAssembler merges per-file package blocks into one registry.
///
/// Callers must hand files over in a fixed order (sorted path order in the
/// scanning use case) so first-wins resolves the same way on every run.
pub struct RegistryAssembler;

impl RegistryAssembler {
    /// Inserts blocks in order; on a name collision the first text is kept.
    pub fn assemble<I>(file_results: I) -> PackageRegistry
    where
        I: IntoIterator<Item = Vec<(String, String)>>,
    {
        let mut registry = PackageRegistry::new();
        for blocks in file_results {
            for (name, text) in blocks {
                if !registry.insert_first(name.clone(), text) {
                    tracing::debug!(package = %name, "duplicate top-level package ignored (first occurrence wins)");
                }
            }
        }
        registry
    }

    /// Comment-strips one file's raw text and extracts its top-level blocks.
    pub fn blocks_from_source(raw_text: &str) -> Vec<(String, String)> {
        let clean = CommentStripper::strip(raw_text);
        BlockExtractor::extract_top_level_blocks(&clean)
    }
}
