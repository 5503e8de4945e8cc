use super::models::{Chart, ChartKey};
use std::collections::HashMap;

/// Read-only chart catalog indexed by (title, difficulty, max score)
#[derive(Debug, Clone, Default)]
pub struct ChartCatalog {
    charts: HashMap<ChartKey, Vec<Chart>>,
    len: usize,
}

impl ChartCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_charts<I: IntoIterator<Item = Chart>>(charts: I) -> Self {
        let mut catalog = Self::new();
        for chart in charts {
            catalog.add(chart);
        }
        catalog
    }

    pub fn add(&mut self, chart: Chart) {
        self.charts.entry(chart.key()).or_default().push(chart);
        self.len += 1;
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Every chart sharing the key; more than one means the key is ambiguous
    pub fn lookup(&self, key: &ChartKey) -> &[Chart] {
        self.charts.get(key).map(Vec::as_slice).unwrap_or(&[])
    }
}

impl FromIterator<Chart> for ChartCatalog {
    fn from_iter<I: IntoIterator<Item = Chart>>(iter: I) -> Self {
        Self::from_charts(iter)
    }
}
