use crate::core::{Metric, ReferenceTable, ScoredRecord};
use crate::ranking::metrics;

/// Score every candidate against one query with all five metrics.
///
/// Output is index-aligned with `table`; nothing is sorted or dropped.
pub fn score_single(table: &ReferenceTable, query: &str) -> Vec<ScoredRecord> {
    let scored: Vec<ScoredRecord> = table
        .iter()
        .map(|record| {
            Metric::ALL.iter().fold(ScoredRecord::new(record.clone()), |scored, &metric| {
                let score = metrics::compute(metric, &record.name, query);
                scored.with_score(metric, score)
            })
        })
        .collect();

    tracing::debug!("Scored {} candidates against '{}'", scored.len(), query);
    scored
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{NameRecord, Score, Sex};

    fn table() -> ReferenceTable {
        ReferenceTable::from_records(
            Sex::Female,
            2020,
            vec![
                NameRecord::new("Anna", Sex::Female, 3),
                NameRecord::new("Ann", Sex::Female, 1),
                NameRecord::new("Zoe", Sex::Female, 9),
            ],
        )
    }

    #[test]
    fn test_every_metric_for_every_candidate() {
        let scored = score_single(&table(), "Ann");

        assert_eq!(scored.len(), 3);
        for record in &scored {
            for metric in Metric::ALL {
                assert!(record.score(metric).is_some(), "{} missing {}", record.name(), metric);
            }
            assert!(record.query_scores.is_empty());
        }
    }

    #[test]
    fn test_index_aligned_with_table() {
        let table = table();
        let scored = score_single(&table, "Zoe");

        let names: Vec<&str> = scored.iter().map(|s| s.name()).collect();
        let expected: Vec<&str> = table.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, expected);
    }

    #[test]
    fn test_exact_match_scores() {
        let scored = score_single(&table(), "Ann");
        let ann = &scored[1];

        assert_eq!(ann.score(Metric::Hamming), Some(Score::Distance(0)));
        assert_eq!(ann.score(Metric::Levenshtein), Some(Score::Distance(0)));
        assert_eq!(ann.score(Metric::DamerauLevenshtein), Some(Score::Distance(0)));
        assert_eq!(ann.score(Metric::Jaro), Some(Score::Similarity(1.0)));
        assert_eq!(ann.score(Metric::JaroWinkler), Some(Score::Similarity(1.0)));
    }

    #[test]
    fn test_empty_table() {
        let empty = ReferenceTable::from_records(Sex::Male, 2020, Vec::new());
        assert!(score_single(&empty, "Ann").is_empty());
    }
}
