//! Trait-implementor cross-reference core for the documentation site.
//! This crate owns the deferred handoff between per-trait data files and
//! the page sink that renders implementor tables.

pub mod datafile;
pub mod logging;
pub mod model;
pub mod registry;

pub use datafile::trait_data::{DataFileError, DataFileResult, TraitDataFile, DATA_FILE_ROOT};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::index::ImplementorIndex;
pub use model::record::{ImplementorRecord, RecordValidationError};
pub use registry::implementor_registry::{ImplementorRegistry, ImplementorSink, RegistryState};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
