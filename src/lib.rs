// src/lib.rs
// Public library surface for integration tests (and potential reuse).

pub mod collect;
pub mod config;
pub mod model;
pub mod report;

// ---- Re-exports for stable public API ----
pub use crate::config::{Config, SourceConfig};
pub use crate::model::{Collected, CollectionResult, RfpRecord};
