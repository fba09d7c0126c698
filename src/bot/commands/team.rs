//! Team Discord commands - info cards, the paginated listing, creation and edits.
//!
//! The `team` text command routes its raw arguments through
//! [`router::parse_team_command`](crate::core::router::parse_team_command) and
//! hands the resolved [`TeamRequest`] to the matching handler. Expected errors
//! are answered here; anything else goes to the framework error handler.

// Inner module to suppress missing_docs warnings for poise macro-generated code
mod inner {
    #![allow(missing_docs)]

    use crate::{
        bot::{
            Context, report_error,
            handlers::{
                browser::{ReactionSurface, list_embed},
                roles,
            },
        },
        core::{
            browser::BrowserSession,
            format::{self, NoRoles, TeamCard},
            pagination::Pages,
            router::{self, EditRequest, TeamCommand, TeamRequest},
            team::{self as team_store, TeamUpdate},
        },
        errors::{Error, Result},
    };
    use poise::serenity_prelude as serenity;
    use tracing::{info, info_span};

    fn card_embed(card: &TeamCard) -> serenity::CreateEmbed {
        serenity::CreateEmbed::new()
            .title(&card.title)
            .color(card.color)
            .fields(
                card.fields
                    .iter()
                    .map(|(label, value)| (*label, value.clone(), true)),
            )
    }

    /// Create, view, edit and list teams.
    ///
    /// Usage:
    /// • `team <id> info` - show a team's info card
    /// • `team list` - browse all teams (⬅️ ➡️ to turn pages, ❌ to close)
    /// • `team <id> create` - create a new team
    /// • `team <id> edit name|mascot|coach|offense|defense <value>` - edit one field (requires the access role)
    #[poise::command(prefix_command, guild_only)]
    pub async fn team(
        ctx: Context<'_>,
        #[description = "Team id followed by a subcommand"]
        #[rest]
        args: Option<String>,
    ) -> Result<()> {
        let result = match router::parse_team_command(args.as_deref().unwrap_or_default()) {
            Ok(TeamCommand::Info(request)) => team_info(ctx, request).await,
            Ok(TeamCommand::List) => team_list(ctx).await,
            Ok(TeamCommand::Create(request)) => team_create(ctx, request).await,
            Ok(TeamCommand::Edit(request, edit)) => team_edit(ctx, request, edit).await,
            Err(e) => Err(e),
        };

        match result {
            Err(e) if e.is_expected() => {
                report_error(ctx, &e).await;
                Ok(())
            }
            other => other,
        }
    }

    async fn team_info(ctx: Context<'_>, request: TeamRequest) -> Result<()> {
        let team = team_store::require_team(&ctx.data().database, &request.team_id).await?;

        let card = match ctx.guild() {
            Some(guild) => format::team_card(&team, &*guild),
            None => format::team_card(&team, &NoRoles),
        };

        ctx.send(poise::CreateReply::default().embed(card_embed(&card)).reply(true))
            .await?;
        Ok(())
    }

    async fn team_list(ctx: Context<'_>) -> Result<()> {
        let settings = &ctx.data().settings;
        let teams = team_store::get_all_teams(&ctx.data().database).await?;
        let pages = Pages::build(teams.iter().map(format::list_line), settings.page_size);

        let first = list_embed(pages.get(0).unwrap_or_default(), &pages.footer(0));
        let handle = ctx
            .send(poise::CreateReply::default().embed(first).reply(true))
            .await?;
        let message = handle.into_message().await?;

        let span = info_span!(
            "team_list",
            viewer = %ctx.author().id,
            message_id = %message.id,
            pages = pages.len()
        );
        let session = BrowserSession::new(pages, ctx.author().id.get(), span);
        let mut surface = ReactionSurface::new(ctx.serenity_context().clone(), message);

        session.run(&mut surface, settings.list_timeout()).await?;
        Ok(())
    }

    async fn team_create(ctx: Context<'_>, request: TeamRequest) -> Result<()> {
        if ctx.data().settings.require_access_for_create {
            roles::require_access(ctx).await?;
        }

        let team = team_store::create_team(&ctx.data().database, &request.team_id).await?;
        let card = format::team_card(&team, &NoRoles);

        ctx.send(
            poise::CreateReply::default()
                .content("Team successfully created.")
                .embed(card_embed(&card))
                .reply(true),
        )
        .await?;
        Ok(())
    }

    async fn team_edit(ctx: Context<'_>, request: TeamRequest, edit: EditRequest) -> Result<()> {
        roles::require_access(ctx).await?;

        let update = edit.into_update()?;
        if let TeamUpdate::Coach(coach_id) = &update {
            ensure_member(ctx, coach_id).await?;
        }

        let field = update.field_name();
        let shown = update.to_string();
        team_store::update_team(&ctx.data().database, &request.team_id, update).await?;

        info!(team_id = %request.team_id, field, "Team edited");
        ctx.reply(format!(
            "Success. {}'s {field} successfully set to {shown}.",
            request.team_id
        ))
        .await?;
        Ok(())
    }

    async fn ensure_member(ctx: Context<'_>, user_id: &str) -> Result<()> {
        let not_found = || Error::Usage {
            message: format!("Could not find member `{user_id}`."),
        };
        let id: u64 = user_id.parse().map_err(|_| not_found())?;
        let guild_id = ctx.guild_id().ok_or_else(not_found)?;

        guild_id
            .member(ctx, serenity::UserId::new(id))
            .await
            .map(|_| ())
            .map_err(|_| not_found())
    }
}

// Re-export all commands
pub use inner::*;
