use colored::Colorize;

use super::view::ReportRow;
use crate::errors::UnmatchedPlay;
use crate::rating::{BaselineRow, Improvement};

type Rgb = (u8, u8, u8);

const NEW_COLOR: Rgb = (0x40, 0xa0, 0x2b);
const OLD_COLOR: Rgb = (0xdf, 0x8e, 0x1d);
const HINT_COLOR: Rgb = (0xf9, 0xe2, 0xaf);
const DIM_COLOR: Rgb = (0x80, 0x80, 0x80);

/// Table cell: plain text plus an optional colour applied after padding
#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    text: String,
    color: Option<Rgb>,
}

impl Cell {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            color: None,
        }
    }

    pub fn colored(text: impl Into<String>, color: Rgb) -> Self {
        Self {
            text: text.into(),
            color: Some(color),
        }
    }

    fn width(&self) -> usize {
        self.text.chars().count()
    }

    fn render(&self, width: usize) -> String {
        let padded = format!("{:<width$}", self.text, width = width);
        match self.color {
            Some((r, g, b)) => padded.truecolor(r, g, b).to_string(),
            None => padded,
        }
    }
}

/// Left-aligned columns separated by two spaces
pub fn render_table(headers: &[&str], rows: &[Vec<Cell>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.width());
        }
    }

    let header_cells: Vec<Cell> = headers.iter().map(|h| Cell::plain(*h)).collect();
    let mut lines = vec![render_line(&header_cells, &widths).bold().to_string()];
    lines.extend(rows.iter().map(|row| render_line(row, &widths)));
    lines.join("\n")
}

fn render_line(cells: &[Cell], widths: &[usize]) -> String {
    cells
        .iter()
        .zip(widths)
        .map(|(cell, &width)| cell.render(width))
        .collect::<Vec<_>>()
        .join("  ")
        .trim_end()
        .to_string()
}

pub fn score_table(rows: &[ReportRow]) -> String {
    let headers = [
        "#",
        "Song",
        "Difficulty",
        "Score",
        "DX Score",
        "Rating",
        "Improvement",
    ];
    let cells: Vec<Vec<Cell>> = rows.iter().map(score_cells).collect();
    render_table(&headers, &cells)
}

fn score_cells(row: &ReportRow) -> Vec<Cell> {
    let rank_color = crate::rating::ranks::find_by_name(row.rank)
        .map(|r| r.color)
        .unwrap_or(DIM_COLOR);

    vec![
        Cell::plain(row.position.to_string()),
        if row.is_new {
            Cell::colored(&row.song, NEW_COLOR)
        } else {
            Cell::plain(&row.song)
        },
        Cell::colored(&row.difficulty_text, row.difficulty.color()),
        Cell::colored(format!("{} {}", row.accuracy_text, row.rank), rank_color),
        Cell::colored(&row.dx_text, DIM_COLOR),
        rating_cell(row),
        improvement_cell(row.improvement.as_ref()),
    ]
}

fn rating_cell(row: &ReportRow) -> Cell {
    if row.rating_text.ends_with("/15") {
        Cell::colored(&row.rating_text, NEW_COLOR)
    } else if row.rating_text.ends_with("/35") {
        Cell::colored(&row.rating_text, OLD_COLOR)
    } else {
        Cell::plain(&row.rating_text)
    }
}

/// "+5 for SSS", blank when nothing would help
fn improvement_cell(improvement: Option<&Improvement>) -> Cell {
    match improvement {
        Some(improvement) => Cell::colored(improvement.to_string(), HINT_COLOR),
        None => Cell::plain(""),
    }
}

pub fn baseline_table(rows: &[BaselineRow]) -> String {
    let cells: Vec<Vec<Cell>> = rows
        .iter()
        .map(|row| {
            vec![
                Cell::plain(format!("{:.1}", row.level)),
                improvement_cell(row.new_chart.as_ref()),
                improvement_cell(row.old_chart.as_ref()),
            ]
        })
        .collect();
    render_table(&["Level", "New chart", "Old chart"], &cells)
}

pub fn unmatched_lines(unmatched: &[UnmatchedPlay]) -> Vec<String> {
    unmatched
        .iter()
        .map(|miss| {
            let reason = if miss.is_ambiguous() { "ambiguous" } else { "not in catalog" };
            format!(
                "{} {} [{}] {:.4}% max {} ({})",
                "!".red().bold(),
                miss.title,
                miss.difficulty.label(),
                miss.accuracy * 100.0,
                miss.max_score,
                reason
            )
        })
        .collect()
}
