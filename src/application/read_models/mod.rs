//! Read models for CQRS-lite pattern
//!
//! This module contains view-optimized structs that provide
//! a denormalized representation of analysis results for the formatters.

mod model_read_model;

pub use model_read_model::{ModelReadModel, PackageView, UnresolvedImportView};
