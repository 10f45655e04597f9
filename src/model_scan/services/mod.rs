mod block_extractor;
mod comment_stripper;
mod cycle_detector;
mod graph_builder;
mod import_scanner;
mod qualified_name;
mod registry_assembler;
mod topological_orderer;
mod view_collector;
mod view_scanner;

pub use block_extractor::BlockExtractor;
pub use comment_stripper::{CommentStripper, COMMENT_MARKER};
pub use cycle_detector::CycleDetector;
pub use graph_builder::GraphBuilder;
pub use import_scanner::ImportScanner;
pub use qualified_name::{QualifiedName, SCOPE_SEPARATOR};
pub use registry_assembler::RegistryAssembler;
pub use topological_orderer::TopologicalOrderer;
pub use view_collector::ViewCollector;
pub use view_scanner::ViewScanner;
