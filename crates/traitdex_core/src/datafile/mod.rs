//! Per-trait data-file producer side.
//!
//! # Responsibility
//! - Build validated implementor indexes, one data file per documented
//!   trait.
//! - Enforce the fire-and-forget, exactly-once submission contract.
//! - Derive the on-disk location the build step uses for each trait.
//!
//! # Invariants
//! - All shape validation happens here, never inside the registry.
//! - A submitted data file cannot be submitted again.

pub mod trait_data;
