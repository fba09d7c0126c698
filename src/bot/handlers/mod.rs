//! Discord interaction handlers
//!
//! Handlers for non-command interactions: the reaction-driven list browser
//! and guild role lookups used for access checks and card colors.

/// Reaction surface for the paginated team listing
pub mod browser;
/// Role lookups and elevated-access checks
pub mod roles;
