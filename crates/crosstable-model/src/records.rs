//! Typed views derived from raw event tables.

use serde::{Deserialize, Serialize};

/// One participant's record after point normalization.
///
/// `points` is always present (unparseable scores are zero-filled by the
/// normalization step); `rating` stays missing when absent or unparseable.
/// Tie break and performance are carried through as raw text, unmodified.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerRecord {
    pub name: String,
    pub rating: Option<f64>,
    pub points: f64,
    pub tie_break: Option<String>,
    pub performance: Option<String>,
    /// Source event tag, set when the record came from a merged table.
    pub event: Option<String>,
}

/// A player's summed points across every event containing that name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerTotal {
    pub name: String,
    pub points: f64,
}

/// Per-event summary statistics shown in the report header.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventStats {
    pub players: usize,
    pub max_rating: Option<f64>,
    pub max_points: Option<f64>,
    /// Mean rating over rows that carry one, rounded to two decimals.
    pub mean_rating: Option<f64>,
}
