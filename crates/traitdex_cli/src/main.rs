//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `traitdex_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use std::error::Error;
use traitdex_core::{ImplementorIndex, ImplementorRecord, ImplementorRegistry, TraitDataFile};

fn main() -> Result<(), Box<dyn Error>> {
    println!("traitdex_core version={}", traitdex_core::core_version());

    let mut registry = ImplementorRegistry::new();

    // Submit before the sink exists to exercise the pending slot on every run.
    let mut data_file = TraitDataFile::new("core::marker::Copy")?;
    data_file.add_implementor(
        "demo_lib",
        ImplementorRecord::new("impl Copy for Probe", vec!["demo_lib::Probe".to_string()]),
    )?;
    println!("data_file path={}", data_file.relative_path().display());
    data_file.submit(&mut registry);

    registry.install_sink(|index: ImplementorIndex| {
        for (library, records) in index.iter() {
            println!("library={library} implementors={}", records.len());
        }
    });
    println!("registry state={}", registry.state());

    Ok(())
}
