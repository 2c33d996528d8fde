//! Shared data model layer (structs/constants only).
//!
//! ## Purpose
//! - Keep record, outcome and summary types in one place.
//! - Avoid cyclic imports between pipeline stages.
//! - Make `--json` output schema changes explicit and reviewable.
//!
//! ## Files
//! - `models.rs` — card types, outcomes, run summary, config file structs.
//! - `record.rs` — open-map view over one card record with a typed `class` accessor.
//! - `errors.rs` — error taxonomy shared by walker/writer/config.
//! - `constants.rs` — stable defaults (folder names, extension, listing cap).
//!
//! ## Rule of thumb
//! Domain types should be data-only: no filesystem side effects.
//!
//! ## Compatibility note
//! Changes to `RunSummary` affect `--json` output and `docs/contracts/*`.

pub mod constants;
pub mod errors;
pub mod models;
pub mod record;
