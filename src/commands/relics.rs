use crate::commands::EMBED_COLOUR;
use crate::prelude::*;

/// Community-maintained relics overview, used when a record has no dedicated
/// relics page.
const RELICS_OVERVIEW_URL: &str =
    "https://bow-cilantro-a4b.notion.site/25f9812adbd0802a8047fdeb9f4de21a?v=25f9812adbd0811dbc6b000c011536df";

/// `/miscrits relics <name>` — per-creature relics build link, falling back
/// to the general relics site.
pub fn relics(catalog: &Catalog, name: &str) -> Reply {
    let Some(record) = catalog.find(name) else {
        return Reply::not_found();
    };

    let description = match &record.relics_site {
        Some(relics_site) => format!("🔗 **Relics build for {}:**\n{relics_site}", record.name),
        None => format!(
            "No relics build recorded for **{}** yet.\n🔗 **Miscrit Relics Information:**\n{RELICS_OVERVIEW_URL}",
            record.name
        ),
    };

    let embed = CreateEmbed::new().description(description).colour(EMBED_COLOUR);
    Reply::Immediate(Page::embeds(vec![embed]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    fn catalog() -> Catalog {
        Catalog::from_records(vec![
            CreatureRecord {
                name: "Drakor".to_string(),
                relics_site: Some("https://example.com/relics/drakor".to_string()),
                ..Default::default()
            },
            CreatureRecord {
                name: "Flue".to_string(),
                ..Default::default()
            },
        ])
    }

    fn description(reply: Reply) -> String {
        let Reply::Immediate(page) = reply else {
            panic!("expected immediate reply");
        };
        let embed: Value = serde_json::to_value(&page.embeds[0]).unwrap();
        embed["description"].as_str().unwrap().to_string()
    }

    #[test]
    fn dedicated_relics_page_is_preferred() {
        let text = description(relics(&catalog(), "drakor"));
        assert!(text.contains("https://example.com/relics/drakor"));
        assert!(!text.contains(RELICS_OVERVIEW_URL));
    }

    #[test]
    fn falls_back_to_overview_site() {
        let text = description(relics(&catalog(), "Flue"));
        assert!(text.contains(RELICS_OVERVIEW_URL));
        assert!(text.contains("**Flue**"));
    }

    #[test]
    fn unknown_name_is_not_found() {
        let Reply::Immediate(page) = relics(&catalog(), "Missingno") else {
            panic!("expected immediate reply");
        };
        assert_eq!(page.content.as_deref(), Some("❌ Miscrit not found!"));
    }
}
