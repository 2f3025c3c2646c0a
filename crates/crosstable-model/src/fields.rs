//! Recognized tournament table columns.
//!
//! The column set is the one produced by the original pairing software:
//! rank, title, player name (`Nomes dos Enxadristas`), rating, points,
//! tie break, performance, plus an optional `Torneio` tag identifying the
//! source event when several tables are merged.

use serde::{Deserialize, Serialize};

/// One recognized column of a tournament result table.
///
/// Variant order is the declared schema order, so an ordered map keyed by
/// `Field` iterates cells in export order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Field {
    Rank,
    Title,
    Name,
    Rating,
    Points,
    TieBreak,
    Performance,
    Event,
}

/// Columns assigned to a file that arrives without a header row.
pub const DEFAULT_COLUMNS: [Field; 7] = [
    Field::Rank,
    Field::Title,
    Field::Name,
    Field::Rating,
    Field::Points,
    Field::TieBreak,
    Field::Performance,
];

/// Columns a table must carry to be processed at all.
pub const REQUIRED_FIELDS: [Field; 2] = [Field::Name, Field::Points];

impl Field {
    /// The header name as written by the pairing software.
    pub fn header(self) -> &'static str {
        match self {
            Field::Rank => "Rank",
            Field::Title => "Title",
            Field::Name => "Nomes dos Enxadristas",
            Field::Rating => "Rating",
            Field::Points => "Points",
            Field::TieBreak => "Tie Break",
            Field::Performance => "Performance",
            Field::Event => "Torneio",
        }
    }

    /// Matches a normalized header cell against the recognized columns.
    ///
    /// Matching is case-insensitive; unknown headers yield `None` and are
    /// ignored by ingestion.
    pub fn from_header(header: &str) -> Option<Self> {
        let header = header.trim();
        DEFAULT_COLUMNS
            .iter()
            .copied()
            .chain(std::iter::once(Field::Event))
            .find(|field| field.header().eq_ignore_ascii_case(header))
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.header())
    }
}
