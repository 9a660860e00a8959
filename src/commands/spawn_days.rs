use ascii_table::{Align, AsciiTable};

use crate::commands::EMBED_COLOUR;
use crate::prelude::*;

pub const ROWS_PER_EMBED: usize = 30;
pub const EMBEDS_PER_MESSAGE: usize = 10;

const FOOTNOTE: &str = "\n\n*Only* **🔵 Rare** and **🟢 Epic** are shown.\n*⚪ Common, 🟣 Exotic, 🟠 Legendary and 🛒 Shop Miscrits are available every day.*";

fn spawn_table(records: &[&CreatureRecord]) -> String {
    let mut table = AsciiTable::default();
    table
        .column(0)
        .set_header("Miscrit")
        .set_align(Align::Left);
    table.column(1).set_header("Region").set_align(Align::Left);
    table.column(2).set_header("PVP").set_align(Align::Left);

    let rows: Vec<Vec<String>> = records
        .iter()
        .map(|record| {
            vec![
                format!(
                    "{} {}",
                    record.rarity.map(Rarity::dot).unwrap_or("⚪"),
                    record.name
                ),
                record.region.clone().unwrap_or_else(|| "Unknown".to_string()),
                record
                    .pvp_desired_status
                    .clone()
                    .unwrap_or_else(|| "-".to_string()),
            ]
        })
        .collect();

    table.format(rows)
}

/// `/miscrits spawn-days <day>` — rare/epic spawns for the day as monospace
/// tables. The listing can outgrow a single message, so the reply is
/// deferred and paginated: 30 rows per embed, 10 embeds per message, the
/// rest in follow-ups.
pub fn spawn_days(catalog: &Catalog, day: Weekday) -> Reply {
    let found = catalog.spawning_on(day);
    if found.is_empty() {
        return Reply::Immediate(Page::text(format!(
            "❌ No Miscrits found for **{}**.",
            day.name()
        )));
    }

    let chunks: Vec<&[&CreatureRecord]> = found.chunks(ROWS_PER_EMBED).collect();
    let total = chunks.len();

    let embeds: Vec<CreateEmbed> = chunks
        .into_iter()
        .enumerate()
        .map(|(index, chunk)| {
            let note = if index + 1 == total { FOOTNOTE } else { "" };
            CreateEmbed::new()
                .title(format!(
                    "📅 Miscrits Spawn on {} ({}/{total})",
                    day.name(),
                    index + 1
                ))
                .description(format!("```{}```{note}", spawn_table(chunk)))
                .colour(EMBED_COLOUR)
        })
        .collect();

    let pages = embeds
        .chunks(EMBEDS_PER_MESSAGE)
        .map(|batch| Page::embeds(batch.to_vec()))
        .collect();

    Reply::Deferred(pages)
}
