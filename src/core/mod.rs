//! Core logic - framework-agnostic data access and recommendation rules.
//!
//! Everything here returns plain data; rendering lives in `crate::web`.

/// One-time population of an empty store
pub mod bootstrap;
/// Goal listing and selection
pub mod goal;
/// Legacy flat JSON dataset
pub mod legacy;
/// Ranked recommendations for a goal
pub mod recommendation;
/// Shareable links and slugs
pub mod share;
/// Warning severity ordering
pub mod warning;
