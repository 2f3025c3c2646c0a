//! Per-event summary statistics.

use crosstable_model::{EventStats, PlayerRecord};

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Row count, max rating, max points, and mean rating (two decimals).
///
/// Rating figures come only from rows that carry a parseable rating; an
/// event with no ratings at all reports them as absent.
pub fn event_stats(records: &[PlayerRecord]) -> EventStats {
    let ratings: Vec<f64> = records.iter().filter_map(|record| record.rating).collect();
    let max_rating = ratings
        .iter()
        .copied()
        .reduce(f64::max);
    let mean_rating = if ratings.is_empty() {
        None
    } else {
        Some(round2(ratings.iter().sum::<f64>() / ratings.len() as f64))
    };
    let max_points = records
        .iter()
        .map(|record| record.points)
        .reduce(f64::max);
    EventStats {
        players: records.len(),
        max_rating,
        max_points,
        mean_rating,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, rating: Option<f64>, points: f64) -> PlayerRecord {
        PlayerRecord {
            name: name.to_string(),
            rating,
            points,
            tie_break: None,
            performance: None,
            event: None,
        }
    }

    #[test]
    fn stats_over_the_sample_event() {
        let records = vec![
            record("Alequis1991", Some(2306.0), 5.0),
            record("maalta7", Some(2004.0), 3.5),
            record("Capital78", Some(2119.0), 2.5),
            record("majCRVG", Some(1800.0), 2.0),
            record("ILUMINATE38", Some(2289.0), 2.0),
            record("Rogeriox", Some(1709.0), 0.0),
        ];
        let stats = event_stats(&records);
        assert_eq!(stats.players, 6);
        assert_eq!(stats.max_rating, Some(2306.0));
        assert_eq!(stats.max_points, Some(5.0));
        assert_eq!(stats.mean_rating, Some(2037.83));
    }

    #[test]
    fn stats_without_ratings_leave_rating_figures_absent() {
        let records = vec![record("X", None, 2.0), record("Y", None, 0.0)];
        let stats = event_stats(&records);
        assert_eq!(stats.max_rating, None);
        assert_eq!(stats.mean_rating, None);
        assert_eq!(stats.max_points, Some(2.0));
    }

    #[test]
    fn stats_over_empty_input_are_all_absent() {
        let stats = event_stats(&[]);
        assert_eq!(stats.players, 0);
        assert_eq!(stats.max_points, None);
    }
}
