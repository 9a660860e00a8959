use crate::commands::EMBED_COLOUR;
use crate::prelude::*;

const TIER_LIST_TITLE: &str = "Miscrits PvP Tier List (Updated until v1.15)";
const TIER_LIST_IMAGE_URL: &str = "https://i.imgur.com/Tg3IQP4.png";

/// `/miscrits tierlist` — static tier-list image.
pub fn tier_list() -> Reply {
    let embed = CreateEmbed::new()
        .title(TIER_LIST_TITLE)
        .image(TIER_LIST_IMAGE_URL)
        .colour(EMBED_COLOUR);
    Reply::Immediate(Page::embeds(vec![embed]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    #[test]
    fn renders_the_tier_list_image() {
        let Reply::Immediate(page) = tier_list() else {
            panic!("expected immediate reply");
        };
        let embed: Value = serde_json::to_value(&page.embeds[0]).unwrap();
        assert_eq!(embed["title"], TIER_LIST_TITLE);
        assert_eq!(embed["image"]["url"], TIER_LIST_IMAGE_URL);
    }
}
