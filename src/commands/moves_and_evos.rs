use crate::commands::EMBED_COLOUR;
use crate::prelude::*;

/// `/miscrits moves-and-evos <name>` — wiki link plus evolution/move notes
/// where the catalog has them.
pub fn moves_and_evos(catalog: &Catalog, name: &str) -> Reply {
    let Some(record) = catalog.find(name) else {
        return Reply::not_found();
    };

    let mut description = match &record.wiki_page {
        Some(wiki_page) => format!("**Wiki Page:**\n{wiki_page}"),
        None => "**Wiki Page:** No wiki data available".to_string(),
    };
    if let Some(evolutions) = &record.evolutions {
        description.push_str(&format!("\n\n**Evolutions:** {evolutions}"));
    }
    if let Some(moves) = &record.moves {
        description.push_str(&format!("\n**Moves:** {moves}"));
    }

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
                name: "Cuddles".to_string(),
                wiki_page: Some("https://miscrits.wiki/cuddles".to_string()),
                evolutions: Some("Cuddles → Huggles → Bearticus → Colossus".to_string()),
                moves: Some("Scratch, Tackle, Bear Hug".to_string()),
                ..Default::default()
            },
            CreatureRecord {
                name: "Gooba".to_string(),
                ..Default::default()
            },
        ])
    }

    #[test]
    fn wiki_page_and_extras_are_listed() {
        let Reply::Immediate(page) = moves_and_evos(&catalog(), "cuddles") else {
            panic!("expected immediate reply");
        };
        let embed: Value = serde_json::to_value(&page.embeds[0]).unwrap();
        let description = embed["description"].as_str().unwrap();
        assert!(description.contains("https://miscrits.wiki/cuddles"));
        assert!(description.contains("**Evolutions:** Cuddles"));
        assert!(description.contains("**Moves:** Scratch"));
    }

    #[test]
    fn missing_wiki_data_gets_placeholder() {
        let Reply::Immediate(page) = moves_and_evos(&catalog(), "Gooba") else {
            panic!("expected immediate reply");
        };
        let embed: Value = serde_json::to_value(&page.embeds[0]).unwrap();
        assert_eq!(
            embed["description"],
            "**Wiki Page:** No wiki data available"
        );
    }

    #[test]
    fn unknown_name_is_not_found() {
        let Reply::Immediate(page) = moves_and_evos(&catalog(), "Zombified") else {
            panic!("expected immediate reply");
        };
        assert_eq!(page.content.as_deref(), Some("❌ Miscrit not found!"));
    }
}
