use std::cmp::Ordering;

use crate::core::{Metric, Order, RankedResult, ScoredRecord};

/// Select the `n` records with the most extreme `metric` values.
///
/// Equal scores keep their input order. Records without a `metric` score
/// are left out. `n` above the record count returns everything.
pub fn top_n(records: &[ScoredRecord], metric: Metric, n: usize, order: Order) -> RankedResult {
    let mut ranked: Vec<(f64, &ScoredRecord)> = records
        .iter()
        .filter_map(|r| r.score(metric).map(|s| (s.as_f64(), r)))
        .collect();

    // sort_by is stable
    ranked.sort_by(|(a, _), (b, _)| {
        let ord = a.partial_cmp(b).unwrap_or(Ordering::Equal);
        match order {
            Order::Largest => ord.reverse(),
            Order::Smallest => ord,
        }
    });

    let records: Vec<ScoredRecord> = ranked
        .into_iter()
        .take(n)
        .map(|(_, r)| r.clone())
        .collect();

    RankedResult {
        metric,
        order,
        records,
    }
}
