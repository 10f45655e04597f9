/// Inbound ports (Driving ports) - Use case interfaces
///
/// These ports define the interfaces that external adapters (e.g., CLI)
/// use to interact with the application core.
pub mod model_analysis_port;

pub use model_analysis_port::ModelAnalysisPort;
