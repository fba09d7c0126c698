//! Display formatting for team records.
//!
//! Produces platform-neutral payloads: the bot layer turns a [`TeamCard`] into
//! an embed. Unset fields always render as the literal `None`.

use crate::{
    core::team::{DefenseScheme, OffenseScheme},
    entities::team,
};
use std::collections::HashMap;

/// Embed color used when no matching role exists.
pub const NEUTRAL_COLOR: u32 = 0;

/// Placeholder for unset fields.
pub const UNSET: &str = "None";

/// Title of the team listing embed.
pub const LIST_TITLE: &str = "Team ID List";

/// Looks up role colors by role name.
pub trait RoleDirectory {
    /// Color of the role called `name`, if such a role exists.
    fn role_color(&self, name: &str) -> Option<u32>;
}

impl RoleDirectory for HashMap<String, u32> {
    fn role_color(&self, name: &str) -> Option<u32> {
        self.get(name).copied()
    }
}

/// A directory with no roles, for contexts outside a guild.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoRoles;

impl RoleDirectory for NoRoles {
    fn role_color(&self, _name: &str) -> Option<u32> {
        None
    }
}

/// Structured display payload for one team.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamCard {
    /// `<name> Team Info`
    pub title: String,
    /// Role color, or [`NEUTRAL_COLOR`]
    pub color: u32,
    /// `(label, value)` pairs in display order
    pub fields: Vec<(&'static str, String)>,
}

/// Name of the role whose color a team card borrows: `"<name> <mascot>"`.
///
/// `None` unless both name and mascot are set.
#[must_use]
pub fn team_role_name(team: &team::Model) -> Option<String> {
    match (&team.name, &team.mascot) {
        (Some(name), Some(mascot)) => Some(format!("{name} {mascot}")),
        _ => None,
    }
}

fn offense_label(ordinal: i32) -> &'static str {
    let scheme = OffenseScheme::from_ordinal(ordinal);
    debug_assert!(scheme.is_some(), "offense ordinal out of range: {ordinal}");
    scheme.map_or(UNSET, OffenseScheme::label)
}

fn defense_label(ordinal: i32) -> &'static str {
    let scheme = DefenseScheme::from_ordinal(ordinal);
    debug_assert!(scheme.is_some(), "defense ordinal out of range: {ordinal}");
    scheme.map_or(UNSET, DefenseScheme::label)
}

/// Builds the info card for a team.
#[must_use]
pub fn team_card<R>(team: &team::Model, roles: &R) -> TeamCard
where
    R: RoleDirectory + ?Sized,
{
    let color = team_role_name(team)
        .and_then(|role| roles.role_color(&role))
        .unwrap_or(NEUTRAL_COLOR);
    let or_unset = |value: &Option<String>| value.clone().unwrap_or_else(|| UNSET.to_string());

    TeamCard {
        title: format!("{} Team Info", team.name.as_deref().unwrap_or(UNSET)),
        color,
        fields: vec![
            ("ID", team.id.clone()),
            ("Name", or_unset(&team.name)),
            ("Mascot", or_unset(&team.mascot)),
            (
                "Coach",
                team.coach
                    .as_ref()
                    .map_or_else(|| UNSET.to_string(), |coach| format!("<@{coach}>")),
            ),
            (
                "Offense",
                team.offense.map_or(UNSET, offense_label).to_string(),
            ),
            (
                "Defense",
                team.defense.map_or(UNSET, defense_label).to_string(),
            ),
        ],
    }
}

/// One listing line: `"<id>: <name>"`.
#[must_use]
pub fn list_line(team: &team::Model) -> String {
    format!("{}: {}", team.id, team.name.as_deref().unwrap_or(UNSET))
}
