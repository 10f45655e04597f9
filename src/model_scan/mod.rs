/// Model scanning domain - pure text-to-model recovery and import graph logic
///
/// Nothing in this layer performs I/O: every function consumes immutable
/// inputs and returns freshly built outputs.
pub mod domain;
pub mod policies;
pub mod services;
