//! Implementor record model.
//!
//! # Responsibility
//! - Define the canonical shape of one trait-implementation fact.
//! - Provide the shape validation applied at the data-file boundary.
//!
//! # Invariants
//! - `html` is opaque payload; the core never parses it.
//! - `type_paths` keeps declaration order (implementing type first, then
//!   generic parameters).

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

static PATH_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*(::[A-Za-z_][A-Za-z0-9_]*)*$")
        .expect("valid path regex")
});

/// Returns whether `value` is a `::`-separated path of ASCII identifier
/// segments, e.g. `tower_load::peak_ewma::Cost`.
pub(crate) fn is_well_formed_path(value: &str) -> bool {
    PATH_RE.is_match(value)
}

/// One trait-implementation fact as shipped in a per-trait data file.
///
/// Wire field names (`text`, `synthetic`, `types`) match the payload emitted
/// by the documentation build step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImplementorRecord {
    /// Pre-rendered implementation heading, displayed verbatim.
    #[serde(rename = "text")]
    pub html: String,
    /// True when the implementation was derived mechanically rather than
    /// authored explicitly. Affects display grouping only.
    #[serde(rename = "synthetic")]
    pub is_synthetic: bool,
    /// Fully qualified types participating in the implementation, in
    /// declaration order.
    #[serde(rename = "types")]
    pub type_paths: Vec<String>,
}

impl ImplementorRecord {
    /// Creates an explicitly authored record.
    pub fn new(html: impl Into<String>, type_paths: Vec<String>) -> Self {
        Self {
            html: html.into(),
            is_synthetic: false,
            type_paths,
        }
    }

    /// Creates a mechanically derived record.
    pub fn synthetic(html: impl Into<String>, type_paths: Vec<String>) -> Self {
        Self {
            html: html.into(),
            is_synthetic: true,
            type_paths,
        }
    }

    /// Checks producer-side shape rules.
    ///
    /// The registry never calls this; it forwards indexes uninspected.
    /// Validation belongs to the data-file boundary.
    ///
    /// # Errors
    /// - `EmptyHtml` when the display payload is blank.
    /// - `NoTypePaths` when no participating type is listed.
    /// - `MalformedTypePath` when a listed type is not a well-formed path.
    pub fn validate(&self) -> Result<(), RecordValidationError> {
        if self.html.trim().is_empty() {
            return Err(RecordValidationError::EmptyHtml);
        }
        if self.type_paths.is_empty() {
            return Err(RecordValidationError::NoTypePaths);
        }
        for path in &self.type_paths {
            if !is_well_formed_path(path) {
                return Err(RecordValidationError::MalformedTypePath(path.clone()));
            }
        }
        Ok(())
    }
}

/// Record shape violations detected at the data-file boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordValidationError {
    EmptyHtml,
    NoTypePaths,
    MalformedTypePath(String),
}

impl Display for RecordValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyHtml => write!(f, "record html payload is empty"),
            Self::NoTypePaths => write!(f, "record lists no participating types"),
            Self::MalformedTypePath(value) => {
                write!(f, "record type path is malformed: {value}")
            }
        }
    }
}

impl Error for RecordValidationError {}
