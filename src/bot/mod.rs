//! Bot layer - Discord-specific interface and command handlers
//!
//! This module provides the Discord interface for the team bot: the `team`
//! text command, general utility commands, the reaction-driven listing surface,
//! and framework wiring (error handling, logging hooks, shutdown).

/// Discord command implementations (team, general)
pub mod commands;
/// Discord interaction handlers (reaction browser, role lookups)
pub mod handlers;

use crate::{
    config::settings::Settings,
    errors::{self, Error, Result},
};
use poise::serenity_prelude as serenity;
use sea_orm::DatabaseConnection;
use std::sync::Arc;
use tracing::{error, info, instrument, warn};

/// Shared data available to all bot commands.
/// Holds the database connection and the validated settings.
pub struct BotData {
    /// Database connection for all database operations
    pub database: DatabaseConnection,
    /// Application settings
    pub settings: Arc<Settings>,
}

impl BotData {
    /// Creates a new `BotData` instance.
    #[must_use]
    pub const fn new(database: DatabaseConnection, settings: Arc<Settings>) -> Self {
        Self { database, settings }
    }
}

/// Poise context used by every command.
pub type Context<'a> = poise::Context<'a, BotData, Error>;

/// Replies to the invoker with the fixed message for an expected error.
///
/// Unexpected errors are logged with full detail and answered with a generic notice.
pub async fn report_error(ctx: Context<'_>, error: &Error) {
    let prefix = &ctx.data().settings.prefix;
    let reply = error.user_message(prefix).unwrap_or_else(|| {
        error!(
            command = %ctx.command().qualified_name,
            user_id = %ctx.author().id,
            "Unexpected error in command: {error:?}"
        );
        errors::GENERIC_ERROR_REPLY.to_string()
    });

    if let Err(e) = ctx.reply(reply).await {
        error!("Failed to send error message: {e}");
    }
}

async fn on_error(error: poise::FrameworkError<'_, BotData, Error>) {
    match error {
        poise::FrameworkError::Setup { error, .. } => {
            error!("Failed to start bot: {error:?}");
        }
        poise::FrameworkError::Command { error, ctx, .. } => {
            report_error(ctx, &error).await;
        }
        error => {
            if let Err(e) = poise::builtins::on_error(error).await {
                error!("Error while handling error: {e}");
            }
        }
    }
}

/// Gateway intents the bot needs: prefix commands, reactions and role lookups.
#[must_use]
pub fn intents() -> serenity::GatewayIntents {
    serenity::GatewayIntents::GUILDS
        | serenity::GatewayIntents::GUILD_MEMBERS
        | serenity::GatewayIntents::GUILD_MESSAGES
        | serenity::GatewayIntents::GUILD_MESSAGE_REACTIONS
        | serenity::GatewayIntents::DIRECT_MESSAGES
        | serenity::GatewayIntents::MESSAGE_CONTENT
}

/// Builds the framework and runs the client until shutdown.
///
/// Ctrl-C shuts all shards down cleanly before returning.
#[instrument(skip(token, settings, database))]
pub async fn run_bot(
    token: String,
    settings: Arc<Settings>,
    database: DatabaseConnection,
) -> Result<()> {
    let prefix = settings.prefix.clone();

    let framework = poise::Framework::builder()
        .options(poise::FrameworkOptions {
            commands: vec![commands::ping(), commands::help(), commands::team()],
            prefix_options: poise::PrefixFrameworkOptions {
                prefix: Some(prefix),
                ..Default::default()
            },
            on_error: |error| Box::pin(on_error(error)),
            pre_command: |ctx| {
                Box::pin(async move {
                    info!(
                        user = %ctx.author().name,
                        user_id = %ctx.author().id,
                        "Executing `{}`",
                        ctx.command().qualified_name
                    );
                })
            },
            ..Default::default()
        })
        .setup(move |ctx, ready, framework| {
            Box::pin(async move {
                info!("Logged in as {}", ready.user.name);
                info!("Registering commands globally...");
                poise::builtins::register_globally(ctx, &framework.options().commands).await?;
                Ok(BotData::new(database, settings))
            })
        })
        .build();

    info!("Setting up Serenity client for Poise framework...");
    let mut client = serenity::Client::builder(&token, intents())
        .framework(framework)
        .await
        .inspect_err(|e| error!("Error creating client: {e:?}"))?;

    let shard_manager = Arc::clone(&client.shard_manager);
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                info!("Shutdown requested, stopping shards...");
                shard_manager.shutdown_all().await;
            }
            Err(e) => warn!("Could not listen for shutdown signal: {e}"),
        }
    });

    info!("Starting bot client...");
    client
        .start()
        .await
        .inspect_err(|e| error!("Client error: {e:?}"))?;

    info!("Bot client stopped");
    Ok(())
}
