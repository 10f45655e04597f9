/// Use cases module containing application business logic orchestration
mod analyze_model;

pub use analyze_model::AnalyzeModelUseCase;
