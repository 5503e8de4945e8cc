use std::fs;
use std::path::PathBuf;

use maimai_rating::config::AppConfig;
use maimai_rating::domain::Difficulty;
use maimai_rating::rating::{self, Bucket};
use maimai_rating::report::{build_rows, Filter, SortKey};
use maimai_rating::services::{ImportService, ReportService};

const SONG_DATA: &str = r#"{
  "songs": [
    {
      "title": "Alpha",
      "sheets": [
        { "type": "dx", "difficulty": "master", "internalLevelValue": 14.0,
          "noteCounts": { "total": 500 }, "version": "PRiSM" },
        { "type": "utage", "difficulty": "master", "internalLevelValue": 13.0,
          "noteCounts": { "total": 500 }, "version": "PRiSM" }
      ]
    },
    {
      "title": "Beta",
      "sheets": [
        { "type": "std", "difficulty": "master", "internalLevelValue": 13.0,
          "noteCounts": { "total": 400 }, "version": "FESTiVAL" }
      ]
    }
  ]
}"#;

const MASTER_LOG: &str = "Alpha\n99.0000% 1,485 / 1,500\n\
Beta\n100.5000%1,200 / 1,200\n\
Gamma\n97.0000% 970 / 1,000\n";

fn setup(name: &str) -> (PathBuf, AppConfig) {
    let dir = std::env::temp_dir().join(name);
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("songdata.json"), SONG_DATA).unwrap();

    let mut config = AppConfig::new();
    config.profiles.profiles_path = dir.join("profiles");
    config.catalog.song_data_path = dir.join("songdata.json");
    (dir, config)
}

#[test]
fn test_import_then_report() {
    let (dir, config) = setup("maimai_rating_e2e_report");

    let importer = ImportService::new(&config).unwrap();
    importer
        .import_text("cherry", Difficulty::Master, MASTER_LOG)
        .unwrap();

    let service = ReportService::new(config).unwrap();
    assert_eq!(service.list_profiles().unwrap(), vec!["cherry".to_string()]);

    let aggregate = service.build_aggregate("cherry").unwrap();
    assert_eq!(aggregate.len(), 2);
    assert_eq!(aggregate.new_bucket_total, 288);
    assert_eq!(aggregate.old_bucket_total, 292);
    assert_eq!(aggregate.combined_total(), 580);
    // Neither bucket is full
    assert_eq!(aggregate.min_new_bucket_rating, 0);
    assert_eq!(aggregate.min_old_bucket_rating, 0);

    assert_eq!(aggregate.unmatched.len(), 1);
    assert_eq!(aggregate.unmatched[0].title, "Gamma");
    assert_eq!(aggregate.unmatched[0].matches, 0);

    let alpha = aggregate.plays.iter().find(|p| p.title() == "Alpha").unwrap();
    assert_eq!(alpha.bucket(), Some(Bucket::New));
    let advice = rating::advise(&aggregate, alpha).unwrap();
    assert_eq!(advice.rank.name, "SS+");
    assert_eq!(advice.delta_rating, 5);

    // Already at the cap
    let beta = aggregate.plays.iter().find(|p| p.title() == "Beta").unwrap();
    assert_eq!(beta.bucket(), Some(Bucket::Old));
    assert!(rating::advise(&aggregate, beta).is_none());

    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn test_rows_follow_sort_and_filter() {
    let (dir, config) = setup("maimai_rating_e2e_rows");

    let importer = ImportService::new(&config).unwrap();
    importer
        .import_text("cherry", Difficulty::Master, MASTER_LOG)
        .unwrap();
    let service = ReportService::new(config).unwrap();
    let aggregate = service.build_aggregate("cherry").unwrap();

    let by_rating = build_rows(&aggregate, SortKey::Rating, Filter::All);
    let titles: Vec<&str> = by_rating.iter().map(|r| r.song.as_str()).collect();
    assert_eq!(titles.len(), 2);
    assert_eq!(by_rating[0].rating, 292);
    assert_eq!(by_rating[1].rating, 288);

    let new_only = build_rows(&aggregate, SortKey::Rating, Filter::New);
    assert_eq!(new_only.len(), 1);
    assert!(new_only[0].is_new);

    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn test_baseline_table_on_empty_buckets() {
    let (dir, config) = setup("maimai_rating_e2e_levels");

    let importer = ImportService::new(&config).unwrap();
    importer
        .import_text("cherry", Difficulty::Master, MASTER_LOG)
        .unwrap();
    let service = ReportService::new(config).unwrap();
    let aggregate = service.build_aggregate("cherry").unwrap();

    let table = rating::baseline_table(&aggregate);
    assert_eq!(table.len(), 51);
    assert_eq!(table[0].level, 10.0);
    // From nothing, the cheapest rank that scores anything is A
    let first = table[0].new_chart.as_ref().unwrap();
    assert_eq!(first.rank.name, "A");
    assert_eq!(first.delta_rating, 108);

    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn test_missing_profile_is_an_error() {
    let (dir, config) = setup("maimai_rating_e2e_missing");

    let service = ReportService::new(config).unwrap();
    assert!(service.build_aggregate("nobody").is_err());

    fs::remove_dir_all(&dir).unwrap();
}
