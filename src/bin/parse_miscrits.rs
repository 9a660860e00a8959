//! One-off converter: reads the raw tab-delimited miscrits dump and writes
//! `data/miscrits.json` in the schema the bot loads at startup. Not part of
//! the serving path.
//!
//! Usage: `cargo run --bin parse_miscrits [raw_file] [out_file]`

use std::error::Error;
use std::fs;

use serde_json::{json, Map, Value};

const COLUMNS: usize = 9;

/// Raw column order: name, image, region, location, location image, days,
/// type, rarity, pvp status.
fn parse_line(line: &str) -> Vec<String> {
    let mut columns: Vec<String> = split_columns(line);

    // Pad short rows, fold extra columns into the last field.
    while columns.len() < COLUMNS {
        columns.push(String::new());
    }
    if columns.len() > COLUMNS {
        let rest = columns.split_off(COLUMNS - 1).join(" ");
        columns.push(rest);
    }
    columns
}

/// Columns are separated by tabs or runs of two-plus spaces.
fn split_columns(line: &str) -> Vec<String> {
    let mut columns = Vec::new();
    let mut current = String::new();
    let mut spaces = 0usize;

    for ch in line.chars() {
        match ch {
            '\t' => {
                columns.push(std::mem::take(&mut current));
                spaces = 0;
            }
            ' ' => spaces += 1,
            _ => {
                if spaces >= 2 && !current.is_empty() {
                    columns.push(std::mem::take(&mut current));
                } else if spaces > 0 && !current.is_empty() {
                    current.push(' ');
                }
                spaces = 0;
                current.push(ch);
            }
        }
    }
    if !current.is_empty() {
        columns.push(current);
    }

    columns.into_iter().map(|c| c.trim().to_string()).collect()
}

fn record(columns: Vec<String>) -> Option<Value> {
    let name = columns[0].trim();
    if name.is_empty() {
        return None;
    }

    let mut record = Map::new();
    record.insert("name".to_string(), json!(name));
    let fields = [
        ("image_url", 1),
        ("region", 2),
        ("location", 3),
        ("location_url", 4),
        ("days", 5),
        ("type", 6),
        ("pvp_desired_status", 8),
    ];
    for (key, index) in fields {
        if !columns[index].is_empty() {
            record.insert(key.to_string(), json!(columns[index]));
        }
    }
    if !columns[7].is_empty() {
        record.insert("rarity".to_string(), json!(columns[7].to_lowercase()));
    }

    Some(Value::Object(record))
}

fn main() -> Result<(), Box<dyn Error + Send + Sync>> {
    let mut args = std::env::args().skip(1);
    let raw_path = args.next().unwrap_or_else(|| "miscrits_raw.txt".to_string());
    let out_path = args.next().unwrap_or_else(|| "data/miscrits.json".to_string());

    let raw = fs::read_to_string(&raw_path)?;
    let records: Vec<Value> = raw
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(parse_line)
        .filter_map(record)
        .collect();

    let out = json!({ "miscrits": records });
    fs::write(&out_path, serde_json::to_string_pretty(&out)?)?;
    println!("wrote {} records to {out_path}", records.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_tabs_and_space_runs() {
        let columns = split_columns("Dark Flue\thttps://img.example/df.png  Miscria Forest\tTrees");
        assert_eq!(
            columns,
            vec![
                "Dark Flue",
                "https://img.example/df.png",
                "Miscria Forest",
                "Trees"
            ]
        );
    }

    #[test]
    fn pads_short_rows_and_folds_long_ones() {
        let padded = parse_line("Flue\timg");
        assert_eq!(padded.len(), COLUMNS);
        assert_eq!(padded[0], "Flue");
        assert_eq!(padded[2], "");

        let folded = parse_line("A\tb\tc\td\te\tf\tg\th\ti\tj\tk");
        assert_eq!(folded.len(), COLUMNS);
        assert_eq!(folded[COLUMNS - 1], "i j k");
    }

    #[test]
    fn skips_nameless_rows_and_lowercases_rarity() {
        assert!(record(parse_line("\timg\tregion")).is_none());

        let value = record(parse_line(
            "Prawnja\timg.png\tSunfall Shores\tBeach\tmap.png\tMonday, Thursday\tWater\tRare\tMeta",
        ))
        .unwrap();
        assert_eq!(value["name"], "Prawnja");
        assert_eq!(value["rarity"], "rare");
        assert_eq!(value["days"], "Monday, Thursday");
        assert_eq!(value["pvp_desired_status"], "Meta");
    }
}
