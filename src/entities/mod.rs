//! Entity module - Contains the SeaORM entity definitions for the database.
//! Each entity has a Model struct for data and an Entity struct for operations.

/// Team table
pub mod team;

pub use team::{Column as TeamColumn, Entity as Team, Model as TeamModel};
