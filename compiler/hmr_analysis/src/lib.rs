//! Hot-update analysis for component classes
//!
//! After an incremental rebuild, decides whether the modified files can be
//! applied by re-rendering a set of component classes, or whether a full
//! rebuild is required.
//!
//! - [`HotUpdateAnalyzer`]: walks a batch of modified files and aggregates
//!   candidates; one unsupported file poisons the batch
//! - [`analyze_file`]: statement-level diff of one file's stale and updated
//!   versions
//! - [`analyze_metadata`]: field-aware diff of a component's decorator
//!   metadata
//! - [`ProgramInspector`]: what the analyzer needs from the compiler
//!
//! An empty [`CandidateSet`] always means "rebuild everything".
//!
//! # Debug Environment Variables
//!
//! - `RUST_LOG=hmr_analysis=debug`: per-batch and per-candidate decisions.
//! - `RUST_LOG=hmr_analysis=trace`: per-statement and per-field decisions.
//!
//! Call [`init_tracing`] to install a subscriber.

mod analyzer;
mod candidates;
mod fields;
mod metadata;
mod program;
mod resources;
mod stale;
mod statements;

use std::sync::Once;

pub use analyzer::{analyze_hot_update, BatchOutcome, HotUpdateAnalyzer, Poison, PoisonReason};
pub use candidates::CandidateSet;
pub use fields::{is_supported_field, SUPPORTED_FIELD_NAMES};
pub use metadata::{
    analyze_metadata, MetadataChange, MetadataIssue, SupportedFields, UnsupportedFields,
};
pub use program::{ComponentMetadata, InMemoryProgram, ProgramInspector};
pub use resources::components_for_resource;
pub use stale::StaleSourceMap;
pub use statements::{analyze_file, Unsupported, UnsupportedKind};

static TRACING_INIT: Once = Once::new();

/// Initialize tracing subscriber for debugging.
///
/// Safe to call multiple times. Does nothing unless `RUST_LOG` is set.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            // Another subscriber may already be installed by the host.
            let _ = tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .try_init();
        }
    });
}
