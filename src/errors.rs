//! Unified error types and result handling.
//!
//! Expected failures (missing teams, reserved ids, permission checks, bad input)
//! carry a fixed user-facing reply. Everything else is unexpected: it is logged
//! with full detail and the user only sees a generic notice.

use thiserror::Error;

/// Crate-wide error type
#[derive(Debug, Error)]
pub enum Error {
    /// No team row exists for the given id
    #[error("Team not found: {id}")]
    TeamNotFound {
        /// The id that was looked up
        id: String,
    },

    /// An edit named a team id that is not stored
    #[error("Edit target does not exist: {id}")]
    EditTargetMissing {
        /// The id named by the edit
        id: String,
    },

    /// A team with this id is already stored
    #[error("Team already exists: {id}")]
    TeamExists {
        /// The conflicting id
        id: String,
    },

    /// The id collides with a command keyword
    #[error("Reserved team id: {id}")]
    ReservedId {
        /// The reserved word that was used as an id
        id: String,
    },

    /// `team create` was issued without an id
    #[error("No team id supplied")]
    MissingTeamId,

    /// The invoking member lacks the elevated-access role
    #[error("Missing elevated access role")]
    MissingAccess,

    /// The command text could not be routed
    #[error("Usage error: {message}")]
    Usage {
        /// User-facing usage hint
        message: String,
    },

    /// Configuration could not be read or validated
    #[error("Configuration error: {message}")]
    Config {
        /// What went wrong
        message: String,
    },

    /// Database failure
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    /// I/O failure
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Required environment variable is missing or invalid
    #[error("Environment variable error: {0}")]
    EnvVar(#[from] std::env::VarError),

    /// Serenity/Poise framework failure
    #[error("Serenity/Poise framework error: {0}")]
    Framework(Box<poise::serenity_prelude::Error>),
}

impl From<poise::serenity_prelude::Error> for Error {
    fn from(value: poise::serenity_prelude::Error) -> Self {
        Self::Framework(Box::new(value))
    }
}

/// Reply sent when an unexpected error reaches the command boundary.
pub const GENERIC_ERROR_REPLY: &str = "An unexpected error occurred.";

impl Error {
    /// Returns the fixed reply for expected error kinds, `None` for unexpected ones.
    ///
    /// `prefix` is the configured command prefix, used in usage hints.
    #[must_use]
    pub fn user_message(&self, prefix: &str) -> Option<String> {
        match self {
            Self::TeamNotFound { .. } => Some("Team not found.".to_string()),
            Self::EditTargetMissing { .. } => Some("Team ID does not exist.".to_string()),
            Self::TeamExists { .. } => Some("Team with ID already exists.".to_string()),
            Self::ReservedId { id } => Some(format!("Error: {id} is a reserved word.")),
            Self::MissingTeamId => Some("Please specify a team ID.".to_string()),
            Self::MissingAccess => {
                Some("You do not have permission to use this command.".to_string())
            }
            Self::Usage { message } => Some(message.replace("{prefix}", prefix)),
            Self::Config { .. }
            | Self::Database(_)
            | Self::Io(_)
            | Self::EnvVar(_)
            | Self::Framework(_) => None,
        }
    }

    /// Whether this error is an expected outcome of user input.
    #[must_use]
    pub fn is_expected(&self) -> bool {
        self.user_message("").is_some()
    }
}

/// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;
