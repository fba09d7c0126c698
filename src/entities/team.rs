//! Team entity - One fantasy-basketball roster's identity and metadata.
//!
//! Teams are keyed by a lowercase, user-chosen id. Every other column is
//! nullable and starts unset when the team is created.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Team database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "teams")]
pub struct Model {
    /// Lowercase team id, immutable once created
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    /// Display name (e.g., "Bobcats Squad")
    pub name: Option<String>,
    /// Mascot name
    pub mascot: Option<String>,
    /// Discord user ID of the coach
    pub coach: Option<String>,
    /// Offense scheme ordinal (see `core::team::OffenseScheme`)
    pub offense: Option<i32>,
    /// Defense scheme ordinal (see `core::team::DefenseScheme`)
    pub defense: Option<i32>,
}

/// Teams have no relationships with other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
