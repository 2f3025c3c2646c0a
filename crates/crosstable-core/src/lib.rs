//! Leaderboard aggregation over tournament result tables.
//!
//! Every operation here is a pure transformation over data already in
//! memory: views are recomputed in full on each call, nothing is cached,
//! and nothing is mutated in place.

pub mod aggregate;
pub mod merge;
pub mod normalize;
pub mod standings;
pub mod stats;

pub use aggregate::aggregate_by_player;
pub use merge::{MergeOutcome, merge_events};
pub use normalize::{normalize_points, parse_f64, parse_points};
pub use standings::{chart_series, filter_by_player, rank, top_n};
pub use stats::event_stats;
