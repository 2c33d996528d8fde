//! Service layer: the normalization pipeline and its side-effect helpers.
//!
//! ## Service map
//! - `walker.rs` — enumerate `<root>/<school>/<category>/<id>.<ext>` lazily.
//! - `table.rs` — built-in slug -> class table, merged with config entries.
//! - `classifier.rs` — class precedence (description > stored > table > null).
//! - `writer.rs` — character/action rewrite variants, errors become outcomes.
//! - `reporter.rs` — bucket outcomes into the run summary.
//! - `pipeline.rs` — glue: walk, write, report.
//! - `storage.rs` — record read, atomic canonical write, config loading.
//! - `output.rs` — JSON/text output helpers.
//!
//! ## Conventions
//! - Prefer pure helpers where possible.
//! - Side effects should be explicit and localized (`storage.rs`).
//! - Keep command handlers thin; delegate to services.

pub mod classifier;
pub mod output;
pub mod pipeline;
pub mod reporter;
pub mod storage;
pub mod table;
pub mod walker;
pub mod writer;
