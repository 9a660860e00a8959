use serenity::all::{
    CommandInteraction, CreateEmbed, CreateInteractionResponse, CreateInteractionResponseFollowup,
    CreateInteractionResponseMessage, EditInteractionResponse,
};

/// One user-visible message. Kept independent of serenity's response builders
/// so the same page can go out as an interaction response, as the edit of a
/// deferred original, or as a follow-up message.
#[derive(Debug, Default, Clone)]
pub struct Page {
    pub content: Option<String>,
    pub embeds: Vec<CreateEmbed>,
}

impl Page {
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            content: Some(content.into()),
            embeds: Vec::new(),
        }
    }

    pub fn embeds(embeds: Vec<CreateEmbed>) -> Self {
        Self {
            content: None,
            embeds,
        }
    }

    // Everything the bot says is ephemeral.

    pub fn into_message(self) -> CreateInteractionResponseMessage {
        let mut message = CreateInteractionResponseMessage::new()
            .ephemeral(true)
            .embeds(self.embeds);
        if let Some(content) = self.content {
            message = message.content(content);
        }
        message
    }

    pub fn into_edit(self) -> EditInteractionResponse {
        let mut edit = EditInteractionResponse::new().embeds(self.embeds);
        if let Some(content) = self.content {
            edit = edit.content(content);
        }
        edit
    }

    pub fn into_followup(self) -> CreateInteractionResponseFollowup {
        let mut followup = CreateInteractionResponseFollowup::new()
            .ephemeral(true)
            .embeds(self.embeds);
        if let Some(content) = self.content {
            followup = followup.content(content);
        }
        followup
    }
}

/// What a command handler wants delivered.
#[derive(Debug)]
pub enum Reply {
    /// Small enough to go out as the interaction response itself.
    Immediate(Page),
    /// Acknowledge within Discord's 3-second window, then deliver through the
    /// follow-up webhook: the first page edits the deferred original, the
    /// rest become separate follow-up messages.
    Deferred(Vec<Page>),
}

impl Reply {
    pub fn not_found() -> Self {
        Reply::Immediate(Page::text("❌ Miscrit not found!"))
    }
}

/// Dispatcher verdict for one inbound interaction.
#[derive(Debug)]
pub enum Action {
    /// Serialize this as the HTTP response body.
    Respond(CreateInteractionResponse),
    /// Respond with a deferred acknowledgement, then deliver the pages via
    /// the interaction's webhook.
    Defer {
        interaction: Box<CommandInteraction>,
        pages: Vec<Page>,
    },
    /// Interaction kinds the bot registers nothing for.
    Ignore,
}
