//! Per-trait data-file builder and payload codec.
//!
//! # Responsibility
//! - Accumulate one `ImplementorIndex` for a single documented trait,
//!   validating records at this boundary.
//! - Submit the finished index to the registry exactly once.
//! - Round-trip the generator payload (library -> record list) as JSON.
//!
//! # Invariants
//! - Record order per library matches the order records were added.
//! - `submit` consumes the data file; the type system forbids a second
//!   submission.
//! - The trait path is validated at construction and never changes.

use crate::model::index::ImplementorIndex;
use crate::model::record::{is_well_formed_path, ImplementorRecord, RecordValidationError};
use crate::registry::implementor_registry::ImplementorRegistry;
use log::debug;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

/// Root directory of emitted data files, relative to the documentation root.
pub const DATA_FILE_ROOT: &str = "implementors";

const DATA_FILE_PREFIX: &str = "trait.";
const DATA_FILE_EXTENSION: &str = "js";

pub type DataFileResult<T> = Result<T, DataFileError>;

/// Producer-side errors raised while building a data file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataFileError {
    InvalidTraitPath(String),
    InvalidLibraryName(String),
    InvalidRecord(RecordValidationError),
    MalformedPayload(String),
}

impl Display for DataFileError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidTraitPath(value) => write!(f, "trait path is malformed: {value}"),
            Self::InvalidLibraryName(value) => {
                write!(f, "library name is empty or blank: {value:?}")
            }
            Self::InvalidRecord(err) => write!(f, "{err}"),
            Self::MalformedPayload(message) => {
                write!(f, "data-file payload is malformed: {message}")
            }
        }
    }
}

impl Error for DataFileError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidRecord(err) => Some(err),
            _ => None,
        }
    }
}

impl From<RecordValidationError> for DataFileError {
    fn from(value: RecordValidationError) -> Self {
        Self::InvalidRecord(value)
    }
}

/// One per-trait data file under construction.
///
/// Covers exactly the libraries relevant to one trait. The producer adds
/// records in display order, then hands the whole index off with
/// [`TraitDataFile::submit`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraitDataFile {
    trait_path: String,
    index: ImplementorIndex,
}

impl TraitDataFile {
    /// Creates a data file for the trait at `trait_path`.
    ///
    /// # Errors
    /// - `InvalidTraitPath` when the path is not a `::`-separated sequence
    ///   of identifier segments (e.g. `core::marker::Copy`).
    pub fn new(trait_path: impl Into<String>) -> DataFileResult<Self> {
        let trait_path = trait_path.into();
        if !is_well_formed_path(&trait_path) {
            return Err(DataFileError::InvalidTraitPath(trait_path));
        }
        Ok(Self {
            trait_path,
            index: ImplementorIndex::new(),
        })
    }

    /// Returns the fully qualified trait path.
    pub fn trait_path(&self) -> &str {
        &self.trait_path
    }

    /// Returns the index accumulated so far.
    pub fn index(&self) -> &ImplementorIndex {
        &self.index
    }

    /// Validates and appends one record under `library`.
    ///
    /// # Errors
    /// - `InvalidLibraryName` when `library` is blank.
    /// - `InvalidRecord` when the record fails shape validation.
    pub fn add_implementor(
        &mut self,
        library: &str,
        record: ImplementorRecord,
    ) -> DataFileResult<()> {
        let library = library.trim();
        if library.is_empty() {
            return Err(DataFileError::InvalidLibraryName(library.to_string()));
        }
        record.validate()?;
        self.index.push_record(library, record);
        Ok(())
    }

    /// Declares a library with no implementors for this trait.
    ///
    /// The key is present in the submitted index with an empty record list,
    /// which the sink renders as "no implementors" rather than omitting the
    /// library.
    pub fn declare_library(&mut self, library: &str) -> DataFileResult<()> {
        let library = library.trim();
        if library.is_empty() {
            return Err(DataFileError::InvalidLibraryName(library.to_string()));
        }
        self.index.ensure_library(library);
        Ok(())
    }

    /// Hands the finished index to the registry.
    ///
    /// Fire-and-forget: consuming `self` makes a second submission
    /// impossible, matching the one-call-per-file producer contract.
    pub fn submit(self, registry: &mut ImplementorRegistry) {
        debug!(
            "event=data_file_submitted module=datafile status=ok trait={} libraries={}",
            self.trait_path,
            self.index.len()
        );
        registry.submit(self.index);
    }

    /// Relative on-disk location of this trait's data file.
    ///
    /// Path-derived from the fully qualified trait name:
    /// `core::marker::Copy` -> `implementors/core/marker/trait.Copy.js`.
    pub fn relative_path(&self) -> PathBuf {
        let (modules, name) = match self.trait_path.rsplit_once("::") {
            Some((modules, name)) => (Some(modules), name),
            None => (None, self.trait_path.as_str()),
        };

        let mut path = PathBuf::from(DATA_FILE_ROOT);
        if let Some(modules) = modules {
            for segment in modules.split("::") {
                path.push(segment);
            }
        }
        path.push(format!("{DATA_FILE_PREFIX}{name}.{DATA_FILE_EXTENSION}"));
        path
    }

    /// Parses a generator payload into an index.
    ///
    /// The payload is the library -> record-list object the build step
    /// emits, with the wire field names `text`, `synthetic` and `types`.
    /// The html strings are carried through verbatim; their semantic
    /// correctness is the renderer's concern.
    ///
    /// # Errors
    /// - `MalformedPayload` when the payload is not valid JSON of that
    ///   shape.
    pub fn index_from_json(payload: &str) -> DataFileResult<ImplementorIndex> {
        serde_json::from_str(payload)
            .map_err(|err| DataFileError::MalformedPayload(err.to_string()))
    }

    /// Serializes an index as a generator-shaped JSON payload.
    ///
    /// # Errors
    /// - `MalformedPayload` when serialization fails.
    pub fn index_to_json(index: &ImplementorIndex) -> DataFileResult<String> {
        serde_json::to_string(index).map_err(|err| DataFileError::MalformedPayload(err.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::{DataFileError, TraitDataFile};
    use crate::model::record::{ImplementorRecord, RecordValidationError};
    use std::path::PathBuf;

    fn record(html: &str) -> ImplementorRecord {
        ImplementorRecord::new(html, vec!["demo::Probe".to_string()])
    }

    #[test]
    fn rejects_malformed_trait_path() {
        let err = TraitDataFile::new("core::marker::").expect_err("trailing :: must be rejected");
        assert!(matches!(err, DataFileError::InvalidTraitPath(_)));

        let err = TraitDataFile::new("").expect_err("empty path must be rejected");
        assert!(matches!(err, DataFileError::InvalidTraitPath(_)));
    }

    #[test]
    fn accumulates_records_in_add_order() {
        let mut file = TraitDataFile::new("core::marker::Copy").expect("valid trait path");
        file.add_implementor("demo_lib", record("first"))
            .expect("first record should validate");
        file.add_implementor("demo_lib", record("second"))
            .expect("second record should validate");

        let records = file
            .index()
            .records("demo_lib")
            .expect("library should exist");
        assert_eq!(records[0].html, "first");
        assert_eq!(records[1].html, "second");
    }

    #[test]
    fn rejects_blank_library_name() {
        let mut file = TraitDataFile::new("core::marker::Copy").expect("valid trait path");
        let err = file
            .add_implementor("   ", record("impl"))
            .expect_err("blank library must be rejected");
        assert!(matches!(err, DataFileError::InvalidLibraryName(_)));
    }

    #[test]
    fn rejects_invalid_record_at_boundary() {
        let mut file = TraitDataFile::new("core::marker::Copy").expect("valid trait path");
        let bad = ImplementorRecord::new("impl", vec![]);
        let err = file
            .add_implementor("demo_lib", bad)
            .expect_err("record without types must be rejected");
        assert_eq!(
            err,
            DataFileError::InvalidRecord(RecordValidationError::NoTypePaths)
        );
    }

    #[test]
    fn declare_library_adds_empty_entry() {
        let mut file = TraitDataFile::new("core::marker::Copy").expect("valid trait path");
        file.declare_library("quiet_lib")
            .expect("library declaration should succeed");
        assert_eq!(file.index().records("quiet_lib"), Some(&[][..]));
    }

    #[test]
    fn derives_nested_data_file_path() {
        let file = TraitDataFile::new("core::marker::Copy").expect("valid trait path");
        assert_eq!(
            file.relative_path(),
            PathBuf::from("implementors/core/marker/trait.Copy.js")
        );
    }

    #[test]
    fn derives_root_level_data_file_path() {
        let file = TraitDataFile::new("Service").expect("valid trait path");
        assert_eq!(
            file.relative_path(),
            PathBuf::from("implementors/trait.Service.js")
        );
    }

    #[test]
    fn json_round_trip_preserves_index() {
        let mut file = TraitDataFile::new("core::marker::Copy").expect("valid trait path");
        file.add_implementor("demo_lib", record("impl Copy for Probe"))
            .expect("record should validate");
        file.declare_library("quiet_lib")
            .expect("library declaration should succeed");

        let payload = TraitDataFile::index_to_json(file.index()).expect("index should serialize");
        let parsed = TraitDataFile::index_from_json(&payload).expect("payload should parse");
        assert_eq!(&parsed, file.index());
    }

    #[test]
    fn malformed_payload_is_rejected() {
        let err = TraitDataFile::index_from_json("{\"demo_lib\": 42}")
            .expect_err("non-array library value must be rejected");
        assert!(matches!(err, DataFileError::MalformedPayload(_)));
    }
}
