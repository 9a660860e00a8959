mod info;
pub use info::*;

mod moves_and_evos;
pub use moves_and_evos::*;

mod relics;
pub use relics::*;

mod spawn_days;
pub use spawn_days::*;

mod tier_list;
pub use tier_list::*;

use serenity::all::Command;
use serenity::http::Http;

use crate::catalog::Weekday;
use crate::prelude::{CommandOptionType, CreateCommand, CreateCommandOption, Error, GuildId};

pub const TOP_LEVEL_NAME: &str = "miscrits";

/// Fallback embed colour when a record has no rarity.
pub const EMBED_COLOUR: u32 = 0x2b6cb0;

/// The `/miscrits` subcommands. Resolution goes through this enum so unknown
/// names are rejected in one place instead of falling through a string map.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MiscritsCommand {
    Info,
    MovesAndEvos,
    Relics,
    SpawnDays,
    TierList,
}

impl MiscritsCommand {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "info" => Some(Self::Info),
            "moves-and-evos" => Some(Self::MovesAndEvos),
            "relics" => Some(Self::Relics),
            "spawn-days" => Some(Self::SpawnDays),
            "tierlist" => Some(Self::TierList),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::MovesAndEvos => "moves-and-evos",
            Self::Relics => "relics",
            Self::SpawnDays => "spawn-days",
            Self::TierList => "tierlist",
        }
    }

    /// Subcommands whose `name` option offers creature-name autocomplete.
    pub fn has_name_autocomplete(self) -> bool {
        matches!(self, Self::Info | Self::MovesAndEvos | Self::Relics)
    }
}

fn creature_name_option() -> CreateCommandOption {
    CreateCommandOption::new(CommandOptionType::String, "name", "Name of the Miscrit")
        .required(true)
        .set_autocomplete(true)
}

fn miscrits_command() -> CreateCommand {
    let mut day_option = CreateCommandOption::new(CommandOptionType::String, "day", "Day of the week")
        .required(true);
    for day in Weekday::ALL {
        day_option = day_option.add_string_choice(day.name(), day.name());
    }

    CreateCommand::new(TOP_LEVEL_NAME)
        .description("Miscrits commands (info, relics, spawn-days, tierlist, moves-and-evos)")
        .add_option(
            CreateCommandOption::new(
                CommandOptionType::SubCommand,
                "info",
                "Show information about a specific Miscrit",
            )
            .add_sub_option(creature_name_option()),
        )
        .add_option(
            CreateCommandOption::new(
                CommandOptionType::SubCommand,
                "moves-and-evos",
                "Show wiki page for a specific Miscrit",
            )
            .add_sub_option(creature_name_option()),
        )
        .add_option(
            CreateCommandOption::new(
                CommandOptionType::SubCommand,
                "relics",
                "Show relics build for a specific Miscrit",
            )
            .add_sub_option(creature_name_option()),
        )
        .add_option(
            CreateCommandOption::new(
                CommandOptionType::SubCommand,
                "spawn-days",
                "Show Miscrits spawn for a specific day",
            )
            .add_sub_option(day_option),
        )
        .add_option(CreateCommandOption::new(
            CommandOptionType::SubCommand,
            "tierlist",
            "Show the Miscrits PvP tier list",
        ))
}

pub fn definitions() -> Vec<CreateCommand> {
    vec![miscrits_command()]
}

/// Registers the command tree, guild-scoped when a guild id is configured
/// (guild commands propagate instantly, global ones can take up to an hour).
pub async fn register(http: &Http, guild_id: Option<GuildId>) -> Result<(), Error> {
    match guild_id {
        Some(guild_id) => {
            guild_id.set_commands(http, definitions()).await?;
            log::info!("registered /{TOP_LEVEL_NAME} in guild {guild_id}");
        }
        None => {
            Command::set_global_commands(http, definitions()).await?;
            log::info!("registered /{TOP_LEVEL_NAME} globally");
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_resolves_known_subcommands() {
        for command in [
            MiscritsCommand::Info,
            MiscritsCommand::MovesAndEvos,
            MiscritsCommand::Relics,
            MiscritsCommand::SpawnDays,
            MiscritsCommand::TierList,
        ] {
            assert_eq!(MiscritsCommand::from_name(command.name()), Some(command));
        }
        assert_eq!(MiscritsCommand::from_name("tier-list"), None);
        assert_eq!(MiscritsCommand::from_name(""), None);
    }

    #[test]
    fn definition_carries_all_subcommands() {
        let definitions = definitions();
        assert_eq!(definitions.len(), 1);

        let json = serde_json::to_value(&definitions[0]).unwrap();
        assert_eq!(json["name"], TOP_LEVEL_NAME);

        let options = json["options"].as_array().unwrap();
        let names: Vec<&str> = options
            .iter()
            .map(|option| option["name"].as_str().unwrap())
            .collect();
        assert_eq!(
            names,
            vec!["info", "moves-and-evos", "relics", "spawn-days", "tierlist"]
        );

        // The day option carries the full weekday choice list.
        let spawn_days = &options[3]["options"][0];
        assert_eq!(spawn_days["name"], "day");
        assert_eq!(spawn_days["choices"].as_array().unwrap().len(), 7);

        // Name options are required and autocompleted.
        let info_name = &options[0]["options"][0];
        assert_eq!(info_name["required"], true);
        assert_eq!(info_name["autocomplete"], true);
    }
}
