//! Guild role lookups.
//!
//! Team cards borrow the color of the role named after the team, and edits
//! require the configured elevated-access role.

use crate::{
    bot::Context,
    core::format::RoleDirectory,
    errors::{Error, Result},
};
use poise::serenity_prelude as serenity;
use tracing::debug;

impl RoleDirectory for serenity::Guild {
    fn role_color(&self, name: &str) -> Option<u32> {
        self.role_by_name(name).map(|role| role.colour.0)
    }
}

/// Fails with `MissingAccess` unless a guild role called `role_name` is among
/// `member_roles`.
///
/// `guild_roles` yields `(role id, role name)` pairs for every role in the guild.
pub fn check_access<'a, I>(guild_roles: I, member_roles: &[u64], role_name: &str) -> Result<()>
where
    I: IntoIterator<Item = (u64, &'a str)>,
{
    let allowed = guild_roles
        .into_iter()
        .any(|(id, name)| name == role_name && member_roles.contains(&id));

    if allowed {
        Ok(())
    } else {
        Err(Error::MissingAccess)
    }
}

/// Fails with `MissingAccess` unless the invoker holds the configured access role.
///
/// Outside a guild nobody has access.
pub async fn require_access(ctx: Context<'_>) -> Result<()> {
    let role_name = &ctx.data().settings.access_role;

    let Some(member) = ctx.author_member().await else {
        debug!(user_id = %ctx.author().id, "Access denied outside a guild");
        return Err(Error::MissingAccess);
    };
    let member_roles: Vec<u64> = member.roles.iter().map(|id| id.get()).collect();

    let result = match ctx.guild() {
        Some(guild) => check_access(
            guild
                .roles
                .values()
                .map(|role| (role.id.get(), role.name.as_str())),
            &member_roles,
            role_name,
        ),
        None => Err(Error::MissingAccess),
    };

    result.inspect_err(|_| debug!(user_id = %ctx.author().id, role = %role_name, "Access denied"))
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;

    const GUILD_ROLES: [(u64, &str); 3] = [(1, "@everyone"), (2, "Bot Access"), (3, "Aces United")];

    #[test]
    fn test_member_with_access_role_passes() {
        assert!(check_access(GUILD_ROLES, &[1, 2], "Bot Access").is_ok());
    }

    #[test]
    fn test_member_without_access_role_is_refused() {
        let err = check_access(GUILD_ROLES, &[1, 3], "Bot Access").unwrap_err();
        assert!(matches!(err, Error::MissingAccess));
        assert_eq!(
            err.user_message("!").as_deref(),
            Some("You do not have permission to use this command.")
        );
    }

    #[test]
    fn test_unknown_access_role_refuses_everyone() {
        let result = check_access(GUILD_ROLES, &[1, 2, 3], "Commissioner");
        assert!(matches!(result, Err(Error::MissingAccess)));
    }

    #[test]
    fn test_role_name_match_is_exact() {
        let result = check_access(GUILD_ROLES, &[2], "bot access");
        assert!(matches!(result, Err(Error::MissingAccess)));
    }
}
