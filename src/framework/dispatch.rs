use crate::commands::{self, MiscritsCommand, TOP_LEVEL_NAME};
use crate::prelude::*;

/// Demultiplexes one inbound interaction. Pings and autocomplete get their
/// answer synchronously; commands resolve through the [`MiscritsCommand`]
/// registry. At most one primary reply per interaction leaves this function,
/// either directly or as a deferred acknowledgement.
pub fn dispatch(interaction: Interaction, catalog: &Catalog) -> Action {
    match interaction {
        Interaction::Ping(_) => Action::Respond(CreateInteractionResponse::Pong),
        Interaction::Autocomplete(autocomplete) => {
            Action::Respond(autocomplete_response(&autocomplete, catalog))
        }
        Interaction::Command(command) => command_action(command, catalog),
        _ => Action::Ignore,
    }
}

fn command_action(command: CommandInteraction, catalog: &Catalog) -> Action {
    match run_command(&command, catalog) {
        Ok(Reply::Immediate(page)) => {
            Action::Respond(CreateInteractionResponse::Message(page.into_message()))
        }
        Ok(Reply::Deferred(pages)) => Action::Defer {
            interaction: Box::new(command),
            pages,
        },
        Err(error) => {
            log::error!("command `{}` failed: {error}", command.data.name);
            Action::Respond(CreateInteractionResponse::Message(
                Page::text("❌ Error executing command!").into_message(),
            ))
        }
    }
}

fn run_command(command: &CommandInteraction, catalog: &Catalog) -> Result<Reply, Error> {
    if command.data.name != TOP_LEVEL_NAME {
        log::warn!("unknown command `{}`", command.data.name);
        return Ok(Reply::Immediate(Page::text("❌ Unknown command!")));
    }

    let options = command.data.options();
    let Some((name, sub_options)) = subcommand(&options) else {
        return Ok(Reply::Immediate(Page::text("❌ Unknown subcommand!")));
    };
    let Some(kind) = MiscritsCommand::from_name(name) else {
        log::warn!("unknown subcommand `{name}`");
        return Ok(Reply::Immediate(Page::text("❌ Unknown subcommand!")));
    };

    match kind {
        MiscritsCommand::Info => Ok(commands::info(catalog, str_option(sub_options, "name")?)),
        MiscritsCommand::MovesAndEvos => Ok(commands::moves_and_evos(
            catalog,
            str_option(sub_options, "name")?,
        )),
        MiscritsCommand::Relics => Ok(commands::relics(catalog, str_option(sub_options, "name")?)),
        MiscritsCommand::SpawnDays => {
            let raw = str_option(sub_options, "day")?;
            let day =
                Weekday::parse(raw).ok_or_else(|| format!("unrecognised day {raw:?}"))?;
            Ok(commands::spawn_days(catalog, day))
        }
        MiscritsCommand::TierList => Ok(commands::tier_list()),
    }
}

fn autocomplete_response(
    interaction: &CommandInteraction,
    catalog: &Catalog,
) -> CreateInteractionResponse {
    let mut choices = CreateAutocompleteResponse::new();

    let options = interaction.data.options();
    let kind = subcommand(&options).and_then(|(name, _)| MiscritsCommand::from_name(name));
    if let (Some(kind), Some(focused)) = (kind, interaction.data.autocomplete()) {
        if kind.has_name_autocomplete() && focused.name == "name" {
            for name in catalog.complete(focused.value) {
                choices = choices.add_string_choice(name, name);
            }
        }
    }

    CreateInteractionResponse::Autocomplete(choices)
}

fn subcommand<'a>(
    options: &'a [ResolvedOption<'a>],
) -> Option<(&'a str, &'a [ResolvedOption<'a>])> {
    options.iter().find_map(|option| match &option.value {
        ResolvedValue::SubCommand(sub_options) => Some((option.name, sub_options.as_slice())),
        _ => None,
    })
}

fn str_option<'a>(options: &[ResolvedOption<'a>], name: &str) -> Result<&'a str, Error> {
    options
        .iter()
        .find_map(|option| match &option.value {
            ResolvedValue::String(value) if option.name == name => Some(*value),
            _ => None,
        })
        .ok_or_else(|| format!("missing required option `{name}`").into())
}
