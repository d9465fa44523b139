//! # Snapshot Testing Support
//!
//! Utilities for checking the parser via snapshot assertions and invariant
//! checks.
//!
//! - **`normalize`**: renders a `Document` as a stable, line-per-block outline
//!   for `insta` snapshots (also used by the CLI `--tree` output)
//! - **`invariants`**: runtime checks for parser correctness (every non-blank
//!   line covered exactly once, node spans ordered and disjoint)

pub mod invariants;
pub mod normalize;

pub use invariants::check as invariants;
pub use normalize::outline;
