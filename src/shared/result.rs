/// Application-wide result type.
///
/// Domain services that need a matchable error return `ModelError` directly;
/// everything above them lifts into `anyhow::Error` through this alias.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
