//! Reaction surface for the paginated team listing.
//!
//! Binds a [`BrowserSession`](crate::core::browser::BrowserSession) to a live
//! Discord message: controls are reactions, signals come from a reaction
//! collector scoped to the message, and pages are rendered by editing the embed.

use crate::{
    core::{
        browser::{BrowserSurface, Control, Signal},
        format::{LIST_TITLE, NEUTRAL_COLOR},
    },
    errors::Result,
};
use poise::serenity_prelude::{
    self as serenity,
    collector::ReactionCollector,
    futures::{StreamExt, stream::BoxStream},
};

/// Builds the listing embed for one page.
#[must_use]
pub fn list_embed(content: &str, footer: &str) -> serenity::CreateEmbed {
    serenity::CreateEmbed::new()
        .title(LIST_TITLE)
        .description(content)
        .color(NEUTRAL_COLOR)
        .footer(serenity::CreateEmbedFooter::new(footer))
}

/// Maps a reaction emoji to a navigation control.
#[must_use]
pub fn control_for(emoji: &serenity::ReactionType) -> Option<Control> {
    match emoji {
        serenity::ReactionType::Unicode(name) => Control::from_emoji(name),
        _ => None,
    }
}

/// A listing message plus the stream of reactions added to it.
pub struct ReactionSurface {
    ctx: serenity::Context,
    message: serenity::Message,
    reactions: BoxStream<'static, serenity::Reaction>,
}

impl ReactionSurface {
    /// Starts collecting reactions on `message`.
    ///
    /// The collector is registered before any control is attached so no early
    /// press is missed.
    #[must_use]
    pub fn new(ctx: serenity::Context, message: serenity::Message) -> Self {
        let reactions = ReactionCollector::new(&ctx.shard)
            .message_id(message.id)
            .stream()
            .boxed();
        Self {
            ctx,
            message,
            reactions,
        }
    }
}

impl BrowserSurface for ReactionSurface {
    type Ack = serenity::Reaction;

    async fn attach_controls(&mut self, controls: &[Control]) -> Result<()> {
        for control in controls {
            self.message
                .react(
                    &self.ctx,
                    serenity::ReactionType::Unicode(control.emoji().to_string()),
                )
                .await?;
        }
        Ok(())
    }

    async fn next_signal(&mut self) -> Option<Signal<serenity::Reaction>> {
        let reaction = self.reactions.next().await?;
        Some(Signal {
            user_id: reaction.user_id.map_or(0, serenity::UserId::get),
            control: control_for(&reaction.emoji),
            ack: reaction,
        })
    }

    async fn render(&mut self, content: &str, footer: &str) -> Result<()> {
        self.message
            .edit(
                &self.ctx,
                serenity::EditMessage::new().embed(list_embed(content, footer)),
            )
            .await?;
        Ok(())
    }

    async fn acknowledge(&mut self, ack: serenity::Reaction) -> Result<()> {
        ack.delete(&self.ctx).await?;
        Ok(())
    }

    async fn clear_controls(&mut self) -> Result<()> {
        self.message.delete_reactions(&self.ctx).await?;
        Ok(())
    }
}
