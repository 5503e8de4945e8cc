use anyhow::{Context, Result};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::config::settings::CatalogSettings;
use crate::domain::{Chart, ChartCatalog, ChartType, Difficulty};
use crate::errors::catalog_context;
use crate::parsing::TitleNormalizer;

// --- Song Data Structures ---

/// Top level of the song data JSON
#[derive(Debug, Deserialize, Serialize)]
pub struct SongData {
    #[serde(default)]
    pub songs: Vec<SongEntry>,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct SongEntry {
    pub title: String,
    #[serde(default)]
    pub sheets: Vec<SheetEntry>,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct SheetEntry {
    #[serde(rename = "type", default)]
    pub sheet_type: Option<String>,
    #[serde(default)]
    pub difficulty: Option<String>,
    #[serde(rename = "internalLevelValue", default)]
    pub internal_level_value: Option<f64>,
    #[serde(rename = "noteCounts", default)]
    pub note_counts: Option<NoteCounts>,
    #[serde(default)]
    pub version: Option<String>,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct NoteCounts {
    #[serde(default)]
    pub total: Option<u32>,
}

/// Read and flatten the song data file into a catalog
pub fn load_catalog(
    path: &Path,
    settings: &CatalogSettings,
    normalizer: &TitleNormalizer,
) -> Result<ChartCatalog> {
    let json = fs::read_to_string(path).with_context(|| catalog_context(path))?;
    let catalog = parse_catalog(&json, settings, normalizer).with_context(|| catalog_context(path))?;
    info!("  → Loaded {} charts from {}", catalog.len(), path.display());
    Ok(catalog)
}

pub fn parse_catalog(
    json: &str,
    settings: &CatalogSettings,
    normalizer: &TitleNormalizer,
) -> Result<ChartCatalog> {
    let data: SongData = serde_json::from_str(json).context("Failed to parse song data")?;
    Ok(build_catalog(&data, settings, normalizer))
}

pub fn build_catalog(
    data: &SongData,
    settings: &CatalogSettings,
    normalizer: &TitleNormalizer,
) -> ChartCatalog {
    data.songs
        .iter()
        .flat_map(|song| {
            let title = normalizer.normalize(&song.title);
            song.sheets
                .iter()
                .filter_map(move |sheet| convert_sheet(&title, sheet, settings))
        })
        .collect()
}

fn convert_sheet(title: &str, sheet: &SheetEntry, settings: &CatalogSettings) -> Option<Chart> {
    let chart = try_convert_sheet(title, sheet, settings);
    if chart.is_none() {
        debug!(
            "Skipping sheet {} [{} {}]: unsupported or incomplete",
            title,
            sheet.sheet_type.as_deref().unwrap_or("?"),
            sheet.difficulty.as_deref().unwrap_or("?")
        );
    }
    chart
}

fn try_convert_sheet(title: &str, sheet: &SheetEntry, settings: &CatalogSettings) -> Option<Chart> {
    let chart_type = parse_chart_type(sheet.sheet_type.as_deref()?)?;
    let difficulty: Difficulty = sheet.difficulty.as_deref()?.parse().ok()?;
    let internal_level = sheet
        .internal_level_value
        .filter(|level| level.is_finite() && *level >= 0.0)?;
    let notes = sheet.note_counts.as_ref()?.total?;
    let max_score = notes.checked_mul(settings.max_score_per_note)?;
    let is_new = sheet
        .version
        .as_deref()
        .is_some_and(|v| settings.is_new_version(v));

    Some(Chart {
        title: title.to_string(),
        difficulty,
        internal_level,
        max_score,
        is_new,
        chart_type,
    })
}

fn parse_chart_type(sheet_type: &str) -> Option<ChartType> {
    match sheet_type {
        "std" => Some(ChartType::Standard),
        "dx" => Some(ChartType::Deluxe),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ChartKey;

    const SONG_DATA: &str = r#"{
        "songs": [
            {
                "title": "Help me, ERINNNNNN!!（Band ver.）",
                "category": "POPS＆アニメ",
                "sheets": [
                    { "type": "std", "difficulty": "expert", "internalLevelValue": 10.8,
                      "noteCounts": { "total": 500 }, "version": "maimai PLUS" },
                    { "type": "dx", "difficulty": "master", "internalLevelValue": 13.4,
                      "noteCounts": { "total": 800 }, "version": "PRiSM" }
                ]
            },
            {
                "title": "Party Song",
                "sheets": [
                    { "type": "utage", "difficulty": "【宴】", "internalLevelValue": 14.0,
                      "noteCounts": { "total": 900 } },
                    { "type": "dx", "difficulty": "remaster", "internalLevelValue": null,
                      "noteCounts": { "total": 900 } },
                    { "type": "dx", "difficulty": "basic", "internalLevelValue": 3.0 }
                ]
            }
        ]
    }"#;

    #[test]
    fn test_parse_catalog() {
        let catalog = parse_catalog(
            SONG_DATA,
            &CatalogSettings::default(),
            &TitleNormalizer::default(),
        )
        .unwrap();

        assert_eq!(catalog.len(), 2);

        let master = catalog.lookup(&ChartKey {
            title: "Help me, ERINNNNNN!!".to_string(),
            difficulty: Difficulty::Master,
            max_score: 2400,
        });
        assert_eq!(master.len(), 1);
        assert!(master[0].is_new);
        assert_eq!(master[0].chart_type, ChartType::Deluxe);
        assert_eq!(master[0].internal_level, 13.4);

        let expert = catalog.lookup(&ChartKey {
            title: "Help me, ERINNNNNN!!".to_string(),
            difficulty: Difficulty::Expert,
            max_score: 1500,
        });
        assert!(!expert[0].is_new);
        assert_eq!(expert[0].chart_type, ChartType::Standard);
    }

    #[test]
    fn test_incomplete_sheets_are_skipped() {
        let json = r#"{
            "songs": [
                {
                    "title": "Alpha",
                    "sheets": [
                        { "type": "dx", "difficulty": "master", "internalLevelValue": 13.0,
                          "noteCounts": { "total": 700 } },
                        { "difficulty": "expert", "internalLevelValue": 11.0,
                          "noteCounts": { "total": 500 } },
                        { "type": "std", "internalLevelValue": 12.0,
                          "noteCounts": { "total": 600 } }
                    ]
                }
            ]
        }"#;

        let catalog = parse_catalog(json, &CatalogSettings::default(), &TitleNormalizer::default()).unwrap();

        assert_eq!(catalog.len(), 1);
        let master = catalog.lookup(&ChartKey {
            title: "Alpha".to_string(),
            difficulty: Difficulty::Master,
            max_score: 2100,
        });
        assert_eq!(master.len(), 1);
    }

    #[test]
    fn test_overflowing_max_score_is_skipped() {
        let json = r#"{
            "songs": [
                {
                    "title": "Alpha",
                    "sheets": [
                        { "type": "dx", "difficulty": "master", "internalLevelValue": 13.0,
                          "noteCounts": { "total": 700 } }
                    ]
                }
            ]
        }"#;
        let settings = CatalogSettings {
            max_score_per_note: u32::MAX,
            ..CatalogSettings::default()
        };

        let catalog = parse_catalog(json, &settings, &TitleNormalizer::default()).unwrap();
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        let result = parse_catalog("{ not json", &CatalogSettings::default(), &TitleNormalizer::default());
        assert!(result.is_err());
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let path = std::env::temp_dir().join("maimai_rating_no_such_songdata.json");
        let result = load_catalog(&path, &CatalogSettings::default(), &TitleNormalizer::default());
        assert!(result.is_err());
    }
}
