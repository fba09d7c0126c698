//! Team business logic - Store access and field edits for team records.
//!
//! Reads come in two shapes: a single team by id (`None` when absent) and the
//! full roster ordered by id. Every write is preceded by an existence check so
//! callers can tell "no such team" apart from "nothing changed".

use crate::{
    entities::{Team, team},
    errors::{Error, Result},
};
use sea_orm::{PaginatorTrait, QueryOrder, Set, prelude::*};
use std::fmt;
use tracing::{debug, info};

/// Words that route to subcommands and can never be team ids.
pub const RESERVED_IDS: [&str; 3] = ["list", "create", "edit"];

/// Offense scheme, stored as its ordinal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OffenseScheme {
    /// 5-Out motion
    FiveOut,
    /// 4-Out, 1-In
    FourOut,
    /// Isolation
    Iso,
}

impl OffenseScheme {
    /// Every scheme in ordinal order.
    pub const ALL: [Self; 3] = [Self::FiveOut, Self::FourOut, Self::Iso];

    /// Display label shown on team cards.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::FiveOut => "5-Out",
            Self::FourOut => "4-Out",
            Self::Iso => "Iso",
        }
    }

    /// Ordinal persisted in the `offense` column.
    #[must_use]
    pub const fn ordinal(self) -> i32 {
        match self {
            Self::FiveOut => 0,
            Self::FourOut => 1,
            Self::Iso => 2,
        }
    }

    /// Maps a stored ordinal back to a scheme.
    #[must_use]
    pub fn from_ordinal(ordinal: i32) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.ordinal() == ordinal)
    }

    /// Parses a label (`5-Out`) or variant name (`FiveOut`), ignoring case.
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        let input = input.trim();
        Self::ALL.into_iter().find(|s| {
            s.label().eq_ignore_ascii_case(input) || format!("{s:?}").eq_ignore_ascii_case(input)
        })
    }
}

/// Defense scheme, stored as its ordinal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefenseScheme {
    /// 1-3-1 zone
    OneThreeOne,
    /// Man-to-man
    Man,
    /// 2-3 zone
    TwoThree,
}

impl DefenseScheme {
    /// Every scheme in ordinal order.
    pub const ALL: [Self; 3] = [Self::OneThreeOne, Self::Man, Self::TwoThree];

    /// Display label shown on team cards.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::OneThreeOne => "1-3-1",
            Self::Man => "Man",
            Self::TwoThree => "2-3",
        }
    }

    /// Ordinal persisted in the `defense` column.
    #[must_use]
    pub const fn ordinal(self) -> i32 {
        match self {
            Self::OneThreeOne => 0,
            Self::Man => 1,
            Self::TwoThree => 2,
        }
    }

    /// Maps a stored ordinal back to a scheme.
    #[must_use]
    pub fn from_ordinal(ordinal: i32) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.ordinal() == ordinal)
    }

    /// Parses a label (`1-3-1`) or variant name (`OneThreeOne`), ignoring case.
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        let input = input.trim();
        Self::ALL.into_iter().find(|s| {
            s.label().eq_ignore_ascii_case(input) || format!("{s:?}").eq_ignore_ascii_case(input)
        })
    }
}

/// A single-field edit applied to an existing team.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TeamUpdate {
    /// New display name
    Name(String),
    /// New mascot
    Mascot(String),
    /// Discord user ID of the new coach
    Coach(String),
    /// New offense scheme
    Offense(OffenseScheme),
    /// New defense scheme
    Defense(DefenseScheme),
}

impl TeamUpdate {
    /// Column name used in replies and logs.
    #[must_use]
    pub const fn field_name(&self) -> &'static str {
        match self {
            Self::Name(_) => "name",
            Self::Mascot(_) => "mascot",
            Self::Coach(_) => "coach",
            Self::Offense(_) => "offense",
            Self::Defense(_) => "defense",
        }
    }
}

impl fmt::Display for TeamUpdate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Name(value) | Self::Mascot(value) => f.write_str(value),
            Self::Coach(user_id) => write!(f, "<@{user_id}>"),
            Self::Offense(scheme) => f.write_str(scheme.label()),
            Self::Defense(scheme) => f.write_str(scheme.label()),
        }
    }
}

/// Lowercases and trims a user-supplied team id.
#[must_use]
pub fn normalize_id(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Whether `id` collides with a command keyword.
#[must_use]
pub fn is_reserved(id: &str) -> bool {
    RESERVED_IDS.contains(&id)
}

/// Finds a team by id, returning None if it does not exist.
pub async fn get_team(db: &DatabaseConnection, id: &str) -> Result<Option<team::Model>> {
    Team::find_by_id(id.to_string())
        .one(db)
        .await
        .map_err(Into::into)
}

/// Finds a team by id, failing with `TeamNotFound` when it does not exist.
pub async fn require_team(db: &DatabaseConnection, id: &str) -> Result<team::Model> {
    get_team(db, id).await?.ok_or_else(|| Error::TeamNotFound { id: id.to_string() })
}

/// Retrieves every team ordered by id ascending.
pub async fn get_all_teams(db: &DatabaseConnection) -> Result<Vec<team::Model>> {
    Team::find()
        .order_by_asc(team::Column::Id)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Checks whether a team with this id is stored.
pub async fn team_exists(db: &DatabaseConnection, id: &str) -> Result<bool> {
    Ok(Team::find_by_id(id.to_string()).count(db).await? > 0)
}

/// Creates a team with every optional field unset.
///
/// Fails with `ReservedId` for command keywords and `TeamExists` when the id is
/// taken; neither case writes anything.
pub async fn create_team(db: &DatabaseConnection, id: &str) -> Result<team::Model> {
    let id = normalize_id(id);
    if id.is_empty() {
        return Err(Error::MissingTeamId);
    }
    if is_reserved(&id) {
        return Err(Error::ReservedId { id });
    }
    if team_exists(db, &id).await? {
        return Err(Error::TeamExists { id });
    }

    let team = team::ActiveModel {
        id: Set(id),
        name: Set(None),
        mascot: Set(None),
        coach: Set(None),
        offense: Set(None),
        defense: Set(None),
    };

    let created = team.insert(db).await?;
    info!(team_id = %created.id, "Created team");
    Ok(created)
}

/// Applies a single-field edit to an existing team.
///
/// Fails with `EditTargetMissing` before any write when the team does not exist.
pub async fn update_team(
    db: &DatabaseConnection,
    id: &str,
    update: TeamUpdate,
) -> Result<team::Model> {
    let existing = get_team(db, id)
        .await?
        .ok_or_else(|| Error::EditTargetMissing { id: id.to_string() })?;
    debug!(team_id = %id, field = update.field_name(), "Updating team");

    let mut active_model: team::ActiveModel = existing.into();
    match update {
        TeamUpdate::Name(name) => active_model.name = Set(Some(name)),
        TeamUpdate::Mascot(mascot) => active_model.mascot = Set(Some(mascot)),
        TeamUpdate::Coach(coach) => active_model.coach = Set(Some(coach)),
        TeamUpdate::Offense(scheme) => active_model.offense = Set(Some(scheme.ordinal())),
        TeamUpdate::Defense(scheme) => active_model.defense = Set(Some(scheme.ordinal())),
    }

    active_model.update(db).await.map_err(Into::into)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::test_utils::*;

    #[test]
    fn test_scheme_ordinals_round_trip() {
        for scheme in OffenseScheme::ALL {
            assert_eq!(OffenseScheme::from_ordinal(scheme.ordinal()), Some(scheme));
        }
        for scheme in DefenseScheme::ALL {
            assert_eq!(DefenseScheme::from_ordinal(scheme.ordinal()), Some(scheme));
        }
        assert_eq!(OffenseScheme::from_ordinal(3), None);
        assert_eq!(DefenseScheme::from_ordinal(-1), None);
    }

    #[test]
    fn test_scheme_parse_accepts_labels_and_names() {
        assert_eq!(OffenseScheme::parse("5-out"), Some(OffenseScheme::FiveOut));
        assert_eq!(OffenseScheme::parse("fourout"), Some(OffenseScheme::FourOut));
        assert_eq!(OffenseScheme::parse("ISO"), Some(OffenseScheme::Iso));
        assert_eq!(DefenseScheme::parse("1-3-1"), Some(DefenseScheme::OneThreeOne));
        assert_eq!(DefenseScheme::parse("man"), Some(DefenseScheme::Man));
        assert_eq!(DefenseScheme::parse("zone"), None);
    }

    #[test]
    fn test_normalize_and_reserved() {
        assert_eq!(normalize_id("  Lakers "), "lakers");
        assert!(is_reserved("list"));
        assert!(is_reserved("create"));
        assert!(is_reserved("edit"));
        assert!(!is_reserved("aces"));
    }

    #[tokio::test]
    async fn test_create_team_starts_unset() -> Result<()> {
        let db = setup_test_db().await?;

        let team = create_team(&db, "Aces").await?;
        assert_eq!(team.id, "aces");
        assert!(team.name.is_none());
        assert!(team.mascot.is_none());
        assert!(team.coach.is_none());
        assert!(team.offense.is_none());
        assert!(team.defense.is_none());

        assert!(team_exists(&db, "aces").await?);
        Ok(())
    }

    #[tokio::test]
    async fn test_create_reserved_id_fails_without_write() -> Result<()> {
        let db = setup_test_db().await?;

        for reserved in ["create", "list"] {
            let result = create_team(&db, reserved).await;
            assert!(matches!(result, Err(Error::ReservedId { .. })));
        }
        assert!(get_all_teams(&db).await?.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn test_create_duplicate_fails() -> Result<()> {
        let db = setup_test_db().await?;
        create_team(&db, "aces").await?;

        let result = create_team(&db, "ACES").await;
        assert!(matches!(result, Err(Error::TeamExists { id }) if id == "aces"));
        assert_eq!(get_all_teams(&db).await?.len(), 1);
        Ok(())
    }

    #[tokio::test]
    async fn test_update_missing_team_fails_without_write() -> Result<()> {
        let db = setup_test_db().await?;

        let result = update_team(&db, "lakers", TeamUpdate::Name("Lakers".to_string())).await;
        assert!(matches!(result, Err(Error::EditTargetMissing { id }) if id == "lakers"));
        assert!(get_team(&db, "lakers").await?.is_none());
        assert!(get_all_teams(&db).await?.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn test_edit_missing_team_replies_id_does_not_exist() -> Result<()> {
        let db = setup_test_db().await?;

        let err = update_team(&db, "lakers", TeamUpdate::Mascot("Lakers".to_string()))
            .await
            .unwrap_err();
        assert_eq!(err.user_message("!").as_deref(), Some("Team ID does not exist."));
        Ok(())
    }

    #[tokio::test]
    async fn test_update_each_field() -> Result<()> {
        let db = setup_test_db().await?;
        create_team(&db, "aces").await?;

        update_team(&db, "aces", TeamUpdate::Name("Aces United".to_string())).await?;
        update_team(&db, "aces", TeamUpdate::Mascot("Aces".to_string())).await?;
        update_team(&db, "aces", TeamUpdate::Coach("1234".to_string())).await?;
        update_team(&db, "aces", TeamUpdate::Offense(OffenseScheme::FiveOut)).await?;
        let team = update_team(&db, "aces", TeamUpdate::Defense(DefenseScheme::TwoThree)).await?;

        assert_eq!(team.name.as_deref(), Some("Aces United"));
        assert_eq!(team.mascot.as_deref(), Some("Aces"));
        assert_eq!(team.coach.as_deref(), Some("1234"));
        assert_eq!(team.offense, Some(0));
        assert_eq!(team.defense, Some(2));

        let stored = get_team(&db, "aces").await?.unwrap();
        assert_eq!(stored, team);
        Ok(())
    }

    #[tokio::test]
    async fn test_get_all_teams_sorted_by_id() -> Result<()> {
        let db = setup_test_db().await?;
        create_named_team(&db, "bobcats", "Bobcats Squad").await?;
        create_named_team(&db, "aces", "Aces United").await?;

        let ids: Vec<String> = get_all_teams(&db).await?.into_iter().map(|t| t.id).collect();
        assert_eq!(ids, vec!["aces".to_string(), "bobcats".to_string()]);
        Ok(())
    }

    #[tokio::test]
    async fn test_info_for_missing_team_reports_not_found() -> Result<()> {
        let db = setup_test_db().await?;

        let err = require_team(&db, "lakers").await.unwrap_err();
        assert_eq!(err.user_message("!").as_deref(), Some("Team not found."));
        assert!(get_all_teams(&db).await?.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn test_two_team_listing_is_single_self_looping_page() -> Result<()> {
        use crate::core::{
            browser::{BrowserSession, Control, Transition},
            format,
            pagination::Pages,
        };

        let db = setup_test_db().await?;
        create_named_team(&db, "bobcats", "Bobcats Squad").await?;
        create_named_team(&db, "aces", "Aces United").await?;

        let teams = get_all_teams(&db).await?;
        let pages = Pages::build(teams.iter().map(format::list_line), 300);
        assert_eq!(pages.len(), 1);
        assert_eq!(pages.get(0), Some("aces: Aces United\nbobcats: Bobcats Squad"));

        let mut session = BrowserSession::new(pages, 1, tracing::Span::none());
        assert_eq!(session.apply(1, Some(Control::Next)), Transition::Moved(0));
        Ok(())
    }

    #[tokio::test]
    async fn test_large_roster_spans_pages_in_id_order() -> Result<()> {
        use crate::core::{format, pagination::Pages};

        let db = setup_test_db().await?;
        create_numbered_teams(&db, 30).await?;

        let teams = get_all_teams(&db).await?;
        let lines: Vec<String> = teams.iter().map(format::list_line).collect();
        let pages = Pages::build(&lines, 300);

        assert!(pages.len() > 1);
        assert_eq!(lines[0], "team00: Team Number 0");
        let rejoined: Vec<&str> = pages.iter().flat_map(|page| page.split('\n')).collect();
        assert_eq!(rejoined, lines.iter().map(String::as_str).collect::<Vec<_>>());
        Ok(())
    }

    #[test]
    fn test_update_display_renders_value() {
        assert_eq!(TeamUpdate::Coach("42".to_string()).to_string(), "<@42>");
        assert_eq!(TeamUpdate::Offense(OffenseScheme::Iso).to_string(), "Iso");
        assert_eq!(TeamUpdate::Name("Aces".to_string()).field_name(), "name");
    }
}
