//! Core business logic - framework-agnostic team storage, formatting, routing,
//! pagination and the interactive page browser.

/// Reaction-driven page browser state machine
pub mod browser;
/// Team info cards and listing lines
pub mod format;
/// Page packing and wraparound navigation
pub mod pagination;
/// `team` command text routing
pub mod router;
/// Team storage and edits
pub mod team;
