//! Command handler layer.
//!
//! This module owns CLI-oriented orchestration and output wiring.
//!
//! ## Files
//! - `normalize.rs` — fix/classes/strip/check.
//! - `lookup.rs` — table lookup for a single identifier.
//!
//! ## Principles
//! - Parse/match CLI inputs here.
//! - Delegate business logic to `services/*`.
//! - Keep behavior and output schema stable.

pub mod lookup;
pub mod normalize;

pub use lookup::handle_lookup_commands;
pub use normalize::handle_normalize_commands;
