use crate::commands::EMBED_COLOUR;
use crate::prelude::*;

fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// `/miscrits info <name>` — portrait embed plus a details embed, both
/// coloured by rarity.
pub fn info(catalog: &Catalog, name: &str) -> Reply {
    let Some(record) = catalog.find(name) else {
        return Reply::not_found();
    };

    let colour = record.rarity.map(Rarity::colour).unwrap_or(EMBED_COLOUR);

    let mut portrait = CreateEmbed::new().title(&record.name).colour(colour);
    if let Some(image_url) = &record.image_url {
        portrait = portrait.image(image_url);
    }

    let mut description = String::new();
    if let Some(pvp) = &record.pvp_desired_status {
        description.push_str(&format!("⚔️ **PVP Desired Status:** {pvp}\n"));
    }
    if let Some(days) = &record.days {
        description.push_str(&format!("📖 **Days:** {days}\n"));
    }
    if let Some(creature_type) = &record.creature_type {
        description.push_str(&format!("**Type:** {}\n", capitalize(creature_type)));
    }
    if let Some(rarity) = record.rarity {
        description.push_str(&format!(
            "**Rarity:** {} **{}**\n",
            rarity.dot(),
            rarity.label()
        ));
    }
    if record.in_shop() {
        description.push_str("**Location:** 🛒 **Shop**\n");
    } else {
        if let Some(region) = &record.region {
            description.push_str(&format!("🌍 **Region:** {region}\n"));
        }
        if let Some(spawn) = &record.spawn {
            description.push_str(&format!("**Spawn:** {spawn}\n"));
        }
    }

    let mut details = CreateEmbed::new().description(description).colour(colour);
    if let Some(location_url) = &record.location_url {
        details = details.image(location_url);
    }

    Reply::Immediate(Page::embeds(vec![portrait, details]))
}
