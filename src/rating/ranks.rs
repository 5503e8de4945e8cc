use serde::Serialize;
use std::fmt;

/// Named accuracy tier carrying the constant used in the rating formula
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Rank {
    pub name: &'static str,
    pub threshold: f64,
    pub constant: f64,
    #[serde(skip)]
    pub color: (u8, u8, u8),
}

impl Rank {
    const fn new(name: &'static str, color: (u8, u8, u8), threshold: f64, constant: f64) -> Self {
        Self {
            name,
            threshold,
            constant,
            color,
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

const GREEN: (u8, u8, u8) = (0xa6, 0xe3, 0xa1);
const BLUE: (u8, u8, u8) = (0x74, 0xc7, 0xec);
const YELLOW: (u8, u8, u8) = (0xf9, 0xe2, 0xaf);
const RED: (u8, u8, u8) = (0xf3, 0x8b, 0xa8);
const GREY: (u8, u8, u8) = (0xa0, 0xa0, 0xa0);

/// Rank table sorted by descending accuracy threshold.
/// Constants below A are not known and count as zero.
pub static RANKS: [Rank; 14] = [
    Rank::new("SSS+", GREEN, 1.005, 22.4),
    Rank::new("SSS", GREEN, 1.000, 21.6),
    Rank::new("SS+", BLUE, 0.995, 21.1),
    Rank::new("SS", BLUE, 0.990, 20.8),
    Rank::new("S+", YELLOW, 0.980, 20.3),
    Rank::new("S", YELLOW, 0.970, 20.0),
    Rank::new("AAA", RED, 0.940, 16.8),
    Rank::new("AA", RED, 0.900, 15.2),
    Rank::new("A", RED, 0.800, 13.6),
    Rank::new("BBB", BLUE, 0.750, 0.0),
    Rank::new("BB", BLUE, 0.700, 0.0),
    Rank::new("B", BLUE, 0.600, 0.0),
    Rank::new("C", GREY, 0.500, 0.0),
    Rank::new("D", GREY, 0.000, 0.0),
];

pub fn lowest_rank() -> &'static Rank {
    &RANKS[RANKS.len() - 1]
}

pub fn find_by_name(name: &str) -> Option<&'static Rank> {
    RANKS.iter().find(|r| r.name == name)
}
