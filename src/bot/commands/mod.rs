//! Discord command implementations organized by category.

/// General utility commands
pub mod general;

/// Team management commands
pub mod team;

// Export commands
pub use general::*;
pub use team::*;
