//! Routing for the `team` text command.
//!
//! `team <id> <subcommand> ...` puts the team id before the subcommand, which
//! does not map onto the framework's subcommand model. The raw argument text is
//! parsed here into a [`TeamCommand`] whose [`TeamRequest`] carries the resolved
//! id by value to the handler.

use crate::{
    core::team::{self, DefenseScheme, OffenseScheme, TeamUpdate},
    errors::{Error, Result},
};

/// Usage hint when no (or an unknown) subcommand is given. `{prefix}` is substituted on reply.
pub const TEAM_USAGE: &str =
    "Please specify a command to perform. See `{prefix}help team` for more info.";

/// Usage hint for malformed `edit` invocations.
pub const EDIT_USAGE: &str =
    "Command used incorrectly. Consult `{prefix}help team edit` for more info.";

/// Per-invocation context: the team the subcommand acts on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamRequest {
    /// Lowercased team id
    pub team_id: String,
}

impl TeamRequest {
    /// Builds a request, normalizing the id.
    #[must_use]
    pub fn new(raw_id: &str) -> Self {
        Self {
            team_id: team::normalize_id(raw_id),
        }
    }
}

/// Editable team fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditField {
    /// Display name
    Name,
    /// Mascot
    Mascot,
    /// Coach (user mention or id)
    Coach,
    /// Offense scheme
    Offense,
    /// Defense scheme
    Defense,
}

impl EditField {
    fn parse(token: &str) -> Option<Self> {
        match token.to_lowercase().as_str() {
            "name" => Some(Self::Name),
            "mascot" => Some(Self::Mascot),
            "coach" => Some(Self::Coach),
            "offense" => Some(Self::Offense),
            "defense" => Some(Self::Defense),
            _ => None,
        }
    }
}

/// An `edit` subcommand before its value has been validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditRequest {
    /// Field being edited
    pub field: EditField,
    /// Raw value text (rest of the line)
    pub value: String,
}

impl EditRequest {
    /// Validates the raw value and converts it into a store update.
    pub fn into_update(self) -> Result<TeamUpdate> {
        match self.field {
            EditField::Name => Ok(TeamUpdate::Name(self.value)),
            EditField::Mascot => Ok(TeamUpdate::Mascot(self.value)),
            EditField::Coach => parse_user_reference(&self.value)
                .map(|id| TeamUpdate::Coach(id.to_string()))
                .ok_or_else(|| Error::Usage {
                    message: format!("Could not find member `{}`.", self.value),
                }),
            EditField::Offense => OffenseScheme::parse(&self.value)
                .map(TeamUpdate::Offense)
                .ok_or_else(|| Error::Usage {
                    message: scheme_usage("offense", OffenseScheme::ALL.map(OffenseScheme::label)),
                }),
            EditField::Defense => DefenseScheme::parse(&self.value)
                .map(TeamUpdate::Defense)
                .ok_or_else(|| Error::Usage {
                    message: scheme_usage("defense", DefenseScheme::ALL.map(DefenseScheme::label)),
                }),
        }
    }
}

fn scheme_usage(kind: &str, labels: [&str; 3]) -> String {
    format!("Unknown {kind} scheme. Choose one of: {}.", labels.join(", "))
}

/// A routed `team` invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TeamCommand {
    /// Show a team's info card
    Info(TeamRequest),
    /// Browse all teams
    List,
    /// Create a team
    Create(TeamRequest),
    /// Edit one field of a team
    Edit(TeamRequest, EditRequest),
}

/// Splits off the first whitespace-delimited token.
fn next_token(input: &str) -> Option<(&str, &str)> {
    let input = input.trim_start();
    if input.is_empty() {
        return None;
    }
    Some(
        input
            .split_once(char::is_whitespace)
            .unwrap_or((input, "")),
    )
}

fn usage(message: &str) -> Error {
    Error::Usage {
        message: message.to_string(),
    }
}

/// Parses the text following `team`.
///
/// `list` and `create` in the id position are redirected to their
/// subcommands (`team create <id>` works like `team <id> create`).
pub fn parse_team_command(args: &str) -> Result<TeamCommand> {
    let (first, rest) = next_token(args).ok_or_else(|| usage(TEAM_USAGE))?;

    match first.to_lowercase().as_str() {
        "list" => return Ok(TeamCommand::List),
        "create" => {
            let (id, _) = next_token(rest).ok_or(Error::MissingTeamId)?;
            return Ok(TeamCommand::Create(TeamRequest::new(id)));
        }
        "edit" => return Err(usage(EDIT_USAGE)),
        _ => {}
    }

    let request = TeamRequest::new(first);
    let (subcommand, rest) = next_token(rest).ok_or_else(|| usage(TEAM_USAGE))?;

    match subcommand.to_lowercase().as_str() {
        "info" => Ok(TeamCommand::Info(request)),
        "list" => Ok(TeamCommand::List),
        "create" => Ok(TeamCommand::Create(request)),
        "edit" => {
            let (field, value) = next_token(rest).ok_or_else(|| usage(EDIT_USAGE))?;
            let field = EditField::parse(field).ok_or_else(|| usage(EDIT_USAGE))?;
            let value = value.trim();
            if value.is_empty() {
                return Err(usage(EDIT_USAGE));
            }
            Ok(TeamCommand::Edit(
                request,
                EditRequest {
                    field,
                    value: value.to_string(),
                },
            ))
        }
        _ => Err(usage(TEAM_USAGE)),
    }
}

/// Extracts a user id from a mention (`<@123>`, `<@!123>`) or a bare id.
#[must_use]
pub fn parse_user_reference(input: &str) -> Option<u64> {
    let input = input.trim();
    let digits = input
        .strip_prefix("<@")
        .and_then(|s| s.strip_suffix('>'))
        .map_or(input, |s| s.strip_prefix('!').unwrap_or(s));
    digits.parse().ok().filter(|id| *id != 0)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;

    fn req(id: &str) -> TeamRequest {
        TeamRequest {
            team_id: id.to_string(),
        }
    }

    #[test]
    fn test_info_lowercases_id() {
        assert_eq!(
            parse_team_command("Lakers info").unwrap(),
            TeamCommand::Info(req("lakers"))
        );
    }

    #[test]
    fn test_reserved_words_redirect() {
        assert_eq!(parse_team_command("list").unwrap(), TeamCommand::List);
        assert_eq!(
            parse_team_command("create Aces").unwrap(),
            TeamCommand::Create(req("aces"))
        );
        assert_eq!(
            parse_team_command("aces create").unwrap(),
            TeamCommand::Create(req("aces"))
        );
        assert!(matches!(
            parse_team_command("create"),
            Err(Error::MissingTeamId)
        ));
    }

    #[test]
    fn test_reserved_id_with_create_subcommand_reaches_store_check() {
        // `team list create` is routed to List; `team edit create` is a usage error.
        assert_eq!(parse_team_command("list create").unwrap(), TeamCommand::List);
        assert!(matches!(
            parse_team_command("edit create"),
            Err(Error::Usage { .. })
        ));
        // `team create create` makes it to create_team, which rejects the id.
        assert_eq!(
            parse_team_command("create create").unwrap(),
            TeamCommand::Create(req("create"))
        );
    }

    #[test]
    fn test_missing_subcommand_is_usage_error() {
        for input in ["", "   ", "aces", "aces bogus"] {
            let err = parse_team_command(input).unwrap_err();
            assert_eq!(
                err.user_message("!").unwrap(),
                "Please specify a command to perform. See `!help team` for more info."
            );
        }
    }

    #[test]
    fn test_edit_takes_rest_of_line() {
        assert_eq!(
            parse_team_command("aces edit name  Aces United ").unwrap(),
            TeamCommand::Edit(
                req("aces"),
                EditRequest {
                    field: EditField::Name,
                    value: "Aces United".to_string(),
                }
            )
        );
    }

    #[test]
    fn test_malformed_edit_is_usage_error() {
        for input in ["aces edit", "aces edit name", "aces edit colour red"] {
            let err = parse_team_command(input).unwrap_err();
            assert_eq!(
                err.user_message("!").unwrap(),
                "Command used incorrectly. Consult `!help team edit` for more info."
            );
        }
    }

    #[test]
    fn test_edit_values_convert_to_updates() {
        let coach = EditRequest {
            field: EditField::Coach,
            value: "<@!1234>".to_string(),
        };
        assert_eq!(
            coach.into_update().unwrap(),
            TeamUpdate::Coach("1234".to_string())
        );

        let offense = EditRequest {
            field: EditField::Offense,
            value: "4-out".to_string(),
        };
        assert_eq!(
            offense.into_update().unwrap(),
            TeamUpdate::Offense(OffenseScheme::FourOut)
        );

        let defense = EditRequest {
            field: EditField::Defense,
            value: "zone".to_string(),
        };
        assert!(matches!(defense.into_update(), Err(Error::Usage { .. })));
    }

    #[test]
    fn test_parse_user_reference() {
        assert_eq!(parse_user_reference("<@42>"), Some(42));
        assert_eq!(parse_user_reference("<@!42>"), Some(42));
        assert_eq!(parse_user_reference(" 42 "), Some(42));
        assert_eq!(parse_user_reference("<@0>"), None);
        assert_eq!(parse_user_reference("coach"), None);
        assert_eq!(parse_user_reference("<#42>"), None);
    }
}
