//! In-process implementor registry.
//!
//! # Responsibility
//! - Hand completed implementor indexes from per-trait data files to the
//!   page sink, whichever side becomes ready first.
//!
//! # Invariants
//! - One registry instance per page/process, passed by reference; there is
//!   no ambient global lookup.
//! - All access is single-threaded; `&mut self` discipline replaces locking.

pub mod implementor_registry;
