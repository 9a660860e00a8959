use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::prelude::Error;

/// Discord caps autocomplete responses at 25 choices.
pub const MAX_AUTOCOMPLETE_CHOICES: usize = 25;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Rarity {
    #[serde(alias = "Common")]
    Common,
    #[serde(alias = "Rare")]
    Rare,
    #[serde(alias = "Epic")]
    Epic,
    #[serde(alias = "Exotic")]
    Exotic,
    #[serde(alias = "Legendary")]
    Legendary,
}

impl Rarity {
    pub fn label(self) -> &'static str {
        match self {
            Rarity::Common => "Common",
            Rarity::Rare => "Rare",
            Rarity::Epic => "Epic",
            Rarity::Exotic => "Exotic",
            Rarity::Legendary => "Legendary",
        }
    }

    pub fn dot(self) -> &'static str {
        match self {
            Rarity::Common => "⚪",
            Rarity::Rare => "🔵",
            Rarity::Epic => "🟢",
            Rarity::Exotic => "🟣",
            Rarity::Legendary => "🟠",
        }
    }

    pub fn colour(self) -> u32 {
        match self {
            Rarity::Common => 0xaaaaaa,
            Rarity::Rare => 0x2b6cb0,
            Rarity::Epic => 0x2ecc71,
            Rarity::Exotic => 0x9b59b6,
            Rarity::Legendary => 0xe67e22,
        }
    }

    /// Only rare and epic spawns rotate by weekday; the rest are always
    /// available and stay out of the spawn-day listing.
    pub fn tracked_for_spawns(self) -> bool {
        matches!(self, Rarity::Rare | Rarity::Epic)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    pub const ALL: [Weekday; 7] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|day| day.name().eq_ignore_ascii_case(value.trim()))
    }

    pub fn name(self) -> &'static str {
        match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
            Weekday::Sunday => "Sunday",
        }
    }
}

/// One creature as stored in `data/miscrits.json`. Everything except the name
/// is optional; the embeds skip whatever is missing.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct CreatureRecord {
    pub name: String,
    #[serde(default)]
    pub rarity: Option<Rarity>,
    #[serde(default, rename = "type")]
    pub creature_type: Option<String>,
    #[serde(default)]
    pub days: Option<String>,
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub spawn: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub location_url: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub pvp_desired_status: Option<String>,
    #[serde(default)]
    pub wiki_page: Option<String>,
    #[serde(default)]
    pub relics_site: Option<String>,
    #[serde(default)]
    pub evolutions: Option<String>,
    #[serde(default)]
    pub moves: Option<String>,
}

impl CreatureRecord {
    pub fn in_shop(&self) -> bool {
        self.location
            .as_deref()
            .is_some_and(|location| location.eq_ignore_ascii_case("shop"))
    }

    /// The `days` field is free text like "Monday, Thursday" or "Everyday".
    pub fn spawns_on(&self, day: Weekday) -> bool {
        let days = self.days.as_deref().unwrap_or("").to_lowercase();
        days.contains(&day.name().to_lowercase()) || days.contains("everyday")
    }
}

/// The data file shipped in two shapes over time; accept both.
#[derive(Deserialize)]
#[serde(untagged)]
enum CatalogFile {
    Wrapped { miscrits: Vec<CreatureRecord> },
    Bare(Vec<CreatureRecord>),
}

/// In-memory creature catalog. Loaded once at startup, read-only afterwards,
/// handed to handlers by reference instead of living in a global.
#[derive(Debug, Default)]
pub struct Catalog {
    records: Vec<CreatureRecord>,
    // Lexicographically sorted names, built once for autocomplete.
    sorted_names: Vec<String>,
}

impl Catalog {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, Error> {
        let bytes = fs::read(path)?;
        let file: CatalogFile = serde_json::from_slice(&bytes)?;
        let records = match file {
            CatalogFile::Wrapped { miscrits } => miscrits,
            CatalogFile::Bare(records) => records,
        };
        Ok(Self::from_records(records))
    }

    pub fn from_records(records: Vec<CreatureRecord>) -> Self {
        let mut sorted_names: Vec<String> =
            records.iter().map(|record| record.name.clone()).collect();
        sorted_names.sort_by_key(|name| name.to_lowercase());

        Self {
            records,
            sorted_names,
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Case-insensitive exact-match lookup.
    pub fn find(&self, name: &str) -> Option<&CreatureRecord> {
        let name = name.trim();
        self.records
            .iter()
            .find(|record| record.name.eq_ignore_ascii_case(name))
    }

    /// Autocomplete choices: prefix match, case-insensitive, sorted, capped
    /// at Discord's limit. An empty prefix lists the first 25 names.
    pub fn complete(&self, prefix: &str) -> Vec<&str> {
        let prefix = prefix.trim().to_lowercase();
        self.sorted_names
            .iter()
            .filter(|name| prefix.is_empty() || name.to_lowercase().starts_with(&prefix))
            .take(MAX_AUTOCOMPLETE_CHOICES)
            .map(String::as_str)
            .collect()
    }

    /// Rare and epic creatures spawning on the given day, shop stock excluded.
    pub fn spawning_on(&self, day: Weekday) -> Vec<&CreatureRecord> {
        self.records
            .iter()
            .filter(|record| {
                record
                    .rarity
                    .is_some_and(Rarity::tracked_for_spawns)
            })
            .filter(|record| !record.in_shop())
            .filter(|record| record.spawns_on(day))
            .collect()
    }
}
