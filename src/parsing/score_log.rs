use anyhow::{Context, Result};
use log::{debug, info};
use regex::{Captures, Regex};

use super::aliases::TitleNormalizer;
use crate::domain::RawPlay;

const ACCURACY_DECIMALS: i32 = 6;

/// Scans pasted score logs for `title` / `acc% score / max` line pairs
pub struct ScoreLogParser {
    play_regex: Regex,
    normalizer: TitleNormalizer,
}

impl ScoreLogParser {
    pub fn new(normalizer: TitleNormalizer) -> Result<Self> {
        let play_regex = Self::compile_regex()?;
        Ok(Self {
            play_regex,
            normalizer,
        })
    }

    /// Extract every play in the text, in order.
    /// Anything that does not fit the two-line pattern is skipped.
    pub fn parse(&self, raw_text: &str) -> Vec<RawPlay> {
        let mut plays = Vec::new();
        let mut skipped = 0;

        for captures in self.play_regex.captures_iter(raw_text) {
            match self.parse_play(&captures) {
                Some(play) => plays.push(play),
                None => {
                    skipped += 1;
                    debug!("Skipping malformed entry: {:?}", &captures[0]);
                }
            }
        }

        info!("  → Parsed {} plays ({} skipped)", plays.len(), skipped);
        plays
    }

    // --- Construction Helpers ---

    fn compile_regex() -> Result<Regex> {
        Regex::new(r"(.*)\n([\d.]+)% ?([\d,]+) / ([\d,]+)")
            .context("Failed to compile score log regex")
    }

    // --- Field Extraction ---

    fn parse_play(&self, captures: &Captures) -> Option<RawPlay> {
        let title = parse_title(captures.get(1)?.as_str())?;
        let accuracy = parse_accuracy(captures.get(2)?.as_str())?;
        let score = parse_grouped_number(captures.get(3)?.as_str())?;
        let max_score = parse_grouped_number(captures.get(4)?.as_str())?;

        Some(RawPlay {
            title: self.normalizer.normalize(title),
            accuracy,
            score,
            max_score,
        })
    }
}

/// Title kept verbatim apart from a CRLF carriage return
fn parse_title(line: &str) -> Option<&str> {
    let title = line.strip_suffix('\r').unwrap_or(line);
    (!title.is_empty()).then_some(title)
}

/// "99.5000" (percent) -> 0.995
fn parse_accuracy(percent: &str) -> Option<f64> {
    let value: f64 = percent.parse().ok()?;
    Some(round_to(value / 100.0, ACCURACY_DECIMALS))
}

/// "1,234,567" -> 1234567
fn parse_grouped_number(digits: &str) -> Option<u32> {
    digits.replace(',', "").parse().ok()
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}
