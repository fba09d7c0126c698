//! General Discord commands - ping and help.
//! These commands don't touch the database.

// Inner module to suppress missing_docs warnings for poise macro-generated code
mod inner {
    #![allow(missing_docs)]

    use crate::{bot::Context, errors::Result};

    /// Responds with "Pong!" to test bot connectivity.
    #[poise::command(slash_command, prefix_command)]
    pub async fn ping(ctx: Context<'_>) -> Result<()> {
        ctx.reply("Pong!").await?;
        Ok(())
    }

    /// Displays help for all commands, or for one command.
    #[poise::command(slash_command, prefix_command, track_edits)]
    pub async fn help(
        ctx: Context<'_>,
        #[description = "Command to show help for"]
        #[rest]
        command: Option<String>,
    ) -> Result<()> {
        let extra_text = format!(
            "Team commands: `{0}team <id> info`, `{0}team list`, `{0}team <id> create`, \
             `{0}team <id> edit name|mascot|coach|offense|defense <value>`",
            ctx.data().settings.prefix
        );
        poise::builtins::help(
            ctx,
            command.as_deref(),
            poise::builtins::HelpConfiguration {
                extra_text_at_bottom: &extra_text,
                ..Default::default()
            },
        )
        .await?;
        Ok(())
    }
}

// Re-export all commands
pub use inner::*;
