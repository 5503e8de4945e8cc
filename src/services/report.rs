use anyhow::Result;
use log::{info, warn};
use serde::Serialize;

use crate::catalog::load_catalog;
use crate::config::settings::AppConfig;
use crate::domain::ChartCatalog;
use crate::parsing::{ScoreLogParser, TitleNormalizer};
use crate::profiles::ProfileStore;
use crate::rating::{self, BaselineRow, PlayerAggregate};
use crate::report::{self, render, Filter, ReportRow, SortKey};

/// How the score table is presented
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReportOptions {
    pub sort: SortKey,
    pub filter: Filter,
    pub json: bool,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            sort: SortKey::Rating,
            filter: Filter::All,
            json: false,
        }
    }
}

#[derive(Serialize)]
struct JsonReport<'a> {
    new_bucket_total: u32,
    old_bucket_total: u32,
    combined_total: u32,
    min_new_bucket_rating: u32,
    min_old_bucket_rating: u32,
    rows: &'a [ReportRow],
    unmatched: &'a [crate::errors::UnmatchedPlay],
}

pub struct ReportService {
    config: AppConfig,
    store: ProfileStore,
    parser: ScoreLogParser,
}

impl ReportService {
    pub fn new(config: AppConfig) -> Result<Self> {
        let normalizer = TitleNormalizer::new(&config.aliases);
        Ok(Self {
            store: ProfileStore::new(&config.profiles.profiles_path)?,
            parser: ScoreLogParser::new(normalizer)?,
            config,
        })
    }

    /// Print the rating summary and score table for a profile
    pub fn run(&self, profile: &str, options: ReportOptions) -> Result<()> {
        let aggregate = self.build_aggregate(profile)?;
        let rows = report::build_rows(&aggregate, options.sort, options.filter);

        if options.json {
            println!("{}", self.render_json(&aggregate, &rows)?);
        } else {
            println!("{}", self.render_text(&aggregate, &rows));
        }
        Ok(())
    }

    /// Print what each chart level would need to raise the rating
    pub fn run_levels(&self, profile: &str) -> Result<()> {
        let aggregate = self.build_aggregate(profile)?;
        let table = self.baseline_rows(&aggregate);

        println!("{}", report::rating_summary(&aggregate));
        println!();
        println!("Baseline improvements:");
        println!("{}", render::baseline_table(&table));
        Ok(())
    }

    pub fn list_profiles(&self) -> Result<Vec<String>> {
        self.store.list_profiles()
    }

    pub fn build_aggregate(&self, profile: &str) -> Result<PlayerAggregate> {
        info!("=== Building Report for {} ===\n", profile);

        // Step 1: Load chart catalog
        let catalog = self.load_catalog()?;

        // Step 2: Parse the profile's score logs
        let plays = self.store.load_plays(profile, &self.parser)?;

        // Step 3: Rate and select the best 50
        let aggregate = rating::aggregate(&plays, &catalog)?;
        self.log_unmatched(&aggregate);

        info!("=== Report Complete ===");
        Ok(aggregate)
    }

    fn load_catalog(&self) -> Result<ChartCatalog> {
        let settings = &self.config.catalog;
        let normalizer = TitleNormalizer::new(&self.config.aliases);
        load_catalog(&settings.song_data_path, settings, &normalizer)
    }

    fn log_unmatched(&self, aggregate: &PlayerAggregate) {
        if !aggregate.unmatched.is_empty() {
            warn!(
                "  → {} plays did not match the catalog and were left out",
                aggregate.unmatched.len()
            );
        }
    }

    fn baseline_rows(&self, aggregate: &PlayerAggregate) -> Vec<BaselineRow> {
        let rows = rating::baseline_table(aggregate);
        info!("  → {} levels can still raise the rating", rows.len());
        rows
    }

    fn render_text(&self, aggregate: &PlayerAggregate, rows: &[ReportRow]) -> String {
        let mut lines = vec![report::rating_summary(aggregate)];

        let unmatched = render::unmatched_lines(&aggregate.unmatched);
        if !unmatched.is_empty() {
            lines.push(format!("{} plays could not be matched:", unmatched.len()));
            lines.extend(unmatched);
        }

        lines.push(String::new());
        lines.push(render::score_table(rows));
        lines.join("\n")
    }

    fn render_json(&self, aggregate: &PlayerAggregate, rows: &[ReportRow]) -> Result<String> {
        let report = JsonReport {
            new_bucket_total: aggregate.new_bucket_total,
            old_bucket_total: aggregate.old_bucket_total,
            combined_total: aggregate.combined_total(),
            min_new_bucket_rating: aggregate.min_new_bucket_rating,
            min_old_bucket_rating: aggregate.min_old_bucket_rating,
            rows,
            unmatched: &aggregate.unmatched,
        };
        Ok(serde_json::to_string_pretty(&report)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Chart, ChartType, Difficulty, RawPlay};

    fn service(name: &str) -> ReportService {
        let mut config = AppConfig::new();
        config.profiles.profiles_path = std::env::temp_dir().join(format!("maimai_rating_test_{}", name));
        ReportService::new(config).unwrap()
    }

    /// One rated new chart and one play missing from the catalog
    fn sample_aggregate() -> PlayerAggregate {
        let catalog = ChartCatalog::from_charts(vec![Chart {
            title: "Alpha".to_string(),
            difficulty: Difficulty::Master,
            internal_level: 14.0,
            max_score: 1500,
            is_new: true,
            chart_type: ChartType::Deluxe,
        }]);
        let plays = vec![
            RawPlay {
                title: "Alpha".to_string(),
                accuracy: 0.99,
                score: 1485,
                max_score: 1500,
            }
            .with_difficulty(Difficulty::Master),
            RawPlay {
                title: "Gamma".to_string(),
                accuracy: 0.97,
                score: 970,
                max_score: 1000,
            }
            .with_difficulty(Difficulty::Master),
        ];
        rating::aggregate(&plays, &catalog).unwrap()
    }

    #[test]
    fn test_render_json() {
        let service = service("report_json");
        let aggregate = sample_aggregate();
        let rows = report::build_rows(&aggregate, SortKey::Rating, Filter::All);

        let json = service.render_json(&aggregate, &rows).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["combined_total"], 288);
        assert_eq!(value["new_bucket_total"], 288);
        assert_eq!(value["min_new_bucket_rating"], 0);

        let rows = value["rows"].as_array().unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0]["song"], "[N] Alpha DX");
        assert_eq!(rows[0]["rating_text"], "288 1/15");
        assert_eq!(rows[0]["improvement"]["delta_rating"], 5);
        assert_eq!(rows[0]["improvement"]["rank"]["name"], "SS+");

        let unmatched = value["unmatched"].as_array().unwrap();
        assert_eq!(unmatched.len(), 1);
        assert_eq!(unmatched[0]["title"], "Gamma");
        assert_eq!(unmatched[0]["matches"], 0);
    }

    #[test]
    fn test_render_text() {
        colored::control::set_override(false);
        let service = service("report_text");
        let aggregate = sample_aggregate();
        let rows = report::build_rows(&aggregate, SortKey::Rating, Filter::All);

        let text = service.render_text(&aggregate, &rows);
        let lines: Vec<_> = text.lines().collect();

        assert_eq!(lines[0], "Rating: 288 (288 + 0; avg 5.8)");
        assert_eq!(lines[1], "1 plays could not be matched:");
        assert_eq!(lines[2], "! Gamma [MASTER] 97.0000% max 1000 (not in catalog)");
        assert_eq!(lines[3], "");
        assert!(lines[4].starts_with("#  Song"));
        assert!(lines[5].contains("[N] Alpha DX"));
        assert!(lines[5].contains("288 1/15"));
        assert!(lines[5].ends_with("+5 for SS+"));
    }

    #[test]
    fn test_render_text_without_unmatched() {
        colored::control::set_override(false);
        let service = service("report_text_clean");
        let mut aggregate = sample_aggregate();
        aggregate.unmatched.clear();
        let rows = report::build_rows(&aggregate, SortKey::Rating, Filter::All);

        let text = service.render_text(&aggregate, &rows);

        assert!(!text.contains("could not be matched"));
        assert_eq!(text.lines().nth(1), Some(""));
    }
}
