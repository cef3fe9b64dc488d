//! Data model for the trait-implementor cross-reference index.
//!
//! # Responsibility
//! - Define the typed record and index shapes shared by data files,
//!   the registry, and the page sink.
//! - Keep wire field names aligned with the generator payload.
//!
//! # Invariants
//! - Record order inside a library is display order and is never reordered.
//! - The `html` payload is opaque: stored and forwarded verbatim.

pub mod index;
pub mod record;
