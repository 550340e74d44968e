use super::model::FrequencyTable;

/// Number of bars in the ranked chart.
pub const DEFAULT_TOP_N: usize = 20;

/// Sort by count descending and keep the first `top_n` records.
///
/// The sort is stable: records with equal counts keep their input order.
pub fn rank(table: &FrequencyTable, top_n: usize) -> FrequencyTable {
    let mut records = table.records().to_vec();
    records.sort_by(|a, b| b.count.cmp(&a.count));
    records.truncate(top_n);
    FrequencyTable::from_records(records)
}

/// Full descending re-sort, no truncation.
pub fn sort_descending(table: &FrequencyTable) -> FrequencyTable {
    rank(table, table.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::FrequencyRecord;

    fn table(rows: &[(&str, u64)]) -> FrequencyTable {
        rows.iter().map(|&(w, c)| FrequencyRecord::new(w, c)).collect()
    }

    #[test]
    fn test_rank_top_one() {
        let filtered = table(&[("grace", 45), ("love", 30)]);
        assert_eq!(rank(&filtered, 1), table(&[("grace", 45)]));
    }

    #[test]
    fn test_rank_is_stable_for_ties() {
        let input = table(&[("a", 5), ("b", 7), ("c", 5), ("d", 7), ("e", 1)]);
        let out = rank(&input, 10);

        assert_eq!(
            out,
            table(&[("b", 7), ("d", 7), ("a", 5), ("c", 5), ("e", 1)])
        );
    }

    #[test]
    fn test_rank_length_is_min_of_bound_and_input() {
        let input = table(&[("a", 1), ("b", 2), ("c", 3)]);

        assert_eq!(rank(&input, 0).len(), 0);
        assert_eq!(rank(&input, 2).len(), 2);
        assert_eq!(rank(&input, 20).len(), 3);
        assert!(rank(&FrequencyTable::default(), 5).is_empty());
    }

    #[test]
    fn test_rank_output_sorted_descending() {
        let input = table(&[("x", 3), ("y", 90), ("z", 12), ("w", 40)]);
        let out = rank(&input, DEFAULT_TOP_N);

        let counts: Vec<u64> = out.iter().map(|r| r.count).collect();
        assert_eq!(counts, vec![90, 40, 12, 3]);
    }

    #[test]
    fn test_sort_descending_keeps_everything() {
        let input = table(&[("x", 3), ("y", 90)]);
        assert_eq!(sort_descending(&input), table(&[("y", 90), ("x", 3)]));
    }
}
