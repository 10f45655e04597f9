mod unresolved_import_policy;

pub use unresolved_import_policy::{UnresolvedImportPolicy, ROOT_NAMESPACE};
