pub use crate::catalog::*;
pub use crate::framework::{Action, Page, Reply};
pub use serde::{Deserialize, Serialize};
pub use serenity::all::{
    CommandInteraction, CommandOptionType, CreateAutocompleteResponse,
    CreateCommand, CreateCommandOption, CreateEmbed, CreateInteractionResponse,
    CreateInteractionResponseFollowup, CreateInteractionResponseMessage, EditInteractionResponse,
    GuildId, Interaction, ResolvedOption, ResolvedValue,
};

pub type Error = Box<dyn std::error::Error + Send + Sync>;
