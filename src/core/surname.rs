/// Surname resolution — maps a foreign family name to a localized surname.

use log::debug;
use rand::Rng;

use crate::core::reference::SurnameTable;
use crate::schema::surname::SurnameEntry;

/// Returned when neither the initial's list nor `DEFAULT` has entries.
pub fn fallback_surname() -> SurnameEntry {
    SurnameEntry::new("이", "李", 1.0)
}

/// Fixed mapping for the family name "Smith".
pub fn smith_surname() -> SurnameEntry {
    SurnameEntry::new("송", "宋", 1.0)
}

/// Running totals of entry weights, used for weighted selection.
///
/// Negative or non-finite weights count as zero, as does any weight that
/// would push the running total past `f64::MAX`.
#[derive(Debug, Clone, PartialEq)]
pub struct CumulativeWeights {
    bounds: Vec<f64>,
}

impl CumulativeWeights {
    pub fn new<I>(weights: I) -> Self
    where
        I: IntoIterator<Item = f64>,
    {
        let mut running = 0.0;
        let bounds = weights
            .into_iter()
            .map(|w| {
                if w.is_finite() && w > 0.0 && (running + w).is_finite() {
                    running += w;
                }
                running
            })
            .collect();
        Self { bounds }
    }

    pub fn total(&self) -> f64 {
        self.bounds.last().copied().unwrap_or(0.0)
    }

    /// Index of the first entry whose cumulative weight reaches `draw`.
    /// A draw past every bound maps to the last entry.
    pub fn index_for(&self, draw: f64) -> Option<usize> {
        if self.bounds.is_empty() {
            return None;
        }
        Some(
            self.bounds
                .iter()
                .position(|bound| *bound >= draw)
                .unwrap_or(self.bounds.len() - 1),
        )
    }

    /// Draw uniformly in `[0, total)` and map the draw to an index.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<usize> {
        let total = self.total();
        let draw = if total > 0.0 && total.is_finite() {
            rng.gen::<f64>() * total
        } else {
            0.0
        };
        self.index_for(draw)
    }
}

/// Pick one entry with probability proportional to its weight.
pub fn pick_weighted<'a, R: Rng + ?Sized>(
    entries: &'a [SurnameEntry],
    rng: &mut R,
) -> Option<&'a SurnameEntry> {
    let weights = CumulativeWeights::new(entries.iter().map(|e| e.weight));
    weights.sample(rng).map(|i| &entries[i])
}

/// Resolve the localized surname for a foreign family name.
///
/// - empty name: weighted pick from `DEFAULT`
/// - "Smith" in any case: the fixed `송`/`宋` entry
/// - otherwise: weighted pick among surnames sharing the uppercase initial,
///   or `DEFAULT` when the initial has none
pub fn resolve_surname<R: Rng + ?Sized>(
    table: &SurnameTable,
    last_name: &str,
    rng: &mut R,
) -> SurnameEntry {
    let Some(first) = last_name.chars().next() else {
        return pick_weighted(table.default_list(), rng)
            .cloned()
            .unwrap_or_else(fallback_surname);
    };

    if last_name.to_uppercase() == "SMITH" {
        return smith_surname();
    }

    let initial: String = first.to_uppercase().collect();
    match pick_weighted(table.candidates_for(&initial), rng) {
        Some(entry) => entry.clone(),
        None => {
            debug!("surname table empty for '{}', using built-in fallback", initial);
            fallback_surname()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::reference::parse_surnames;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn test_table() -> SurnameTable {
        parse_surnames(
            r#"{
                "K": [
                    {"korean": "김", "hanja": "金", "weight": 3},
                    {"korean": "강", "hanja": "姜", "weight": 1}
                ],
                "P": [{"korean": "박", "hanja": "朴", "weight": 5}],
                "DEFAULT": [
                    {"korean": "이", "hanja": "李", "weight": 2},
                    {"korean": "최", "hanja": "崔"}
                ]
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn smith_is_fixed_for_every_seed() {
        let table = test_table();
        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            for name in ["Smith", "SMITH", "smith", "sMiTh"] {
                let entry = resolve_surname(&table, name, &mut rng);
                assert_eq!(entry.korean, "송");
                assert_eq!(entry.hanja, "宋");
            }
        }
    }

    #[test]
    fn initial_is_case_insensitive() {
        let table = test_table();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            assert_eq!(resolve_surname(&table, "park", &mut rng).korean, "박");
            assert_eq!(resolve_surname(&table, "Parker", &mut rng).korean, "박");
        }
    }

    #[test]
    fn unknown_initial_and_empty_name_use_default() {
        let table = test_table();
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..50 {
            let entry = resolve_surname(&table, "Zimmer", &mut rng);
            assert!(entry.korean == "이" || entry.korean == "최");
            let entry = resolve_surname(&table, "", &mut rng);
            assert!(entry.korean == "이" || entry.korean == "최");
        }
    }

    #[test]
    fn never_fabricates_entries() {
        let table = test_table();
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..200 {
            let entry = resolve_surname(&table, "Kowalski", &mut rng);
            assert!(
                table.candidates_for("K").contains(&entry),
                "unexpected surname {:?}",
                entry
            );
        }
    }

    #[test]
    fn frequencies_follow_weights() {
        let table = test_table();
        let mut rng = StdRng::seed_from_u64(42);
        let draws = 20_000;
        let kim = (0..draws)
            .filter(|_| resolve_surname(&table, "Kim", &mut rng).korean == "김")
            .count();
        let observed = kim as f64 / draws as f64;
        assert!(
            (observed - 0.75).abs() < 0.02,
            "expected ~0.75 for weight 3/4, got {}",
            observed
        );
    }

    #[test]
    fn empty_tables_use_builtin_fallback() {
        let table = SurnameTable::default();
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(resolve_surname(&table, "", &mut rng), fallback_surname());
        assert_eq!(resolve_surname(&table, "Nguyen", &mut rng), fallback_surname());
        assert_eq!(resolve_surname(&table, "Smith", &mut rng), smith_surname());
    }

    #[test]
    fn draw_past_every_bound_maps_to_last() {
        let weights = CumulativeWeights::new([1.0, 2.0, 3.0]);
        assert!((weights.total() - 6.0).abs() < f64::EPSILON);
        assert_eq!(weights.index_for(0.0), Some(0));
        assert_eq!(weights.index_for(1.0), Some(0));
        assert_eq!(weights.index_for(1.5), Some(1));
        assert_eq!(weights.index_for(6.0), Some(2));
        assert_eq!(weights.index_for(6.000_001), Some(2));
        assert_eq!(CumulativeWeights::new([]).index_for(0.0), None);
    }

    #[test]
    fn bad_weights_count_as_zero() {
        let weights = CumulativeWeights::new([f64::NAN, -4.0, 2.0]);
        assert!((weights.total() - 2.0).abs() < f64::EPSILON);
        let mut rng = StdRng::seed_from_u64(5);
        for _ in 0..100 {
            let idx = weights.sample(&mut rng).unwrap();
            // Only the positive-weight entry can win a nonzero draw.
            assert!(idx == 2 || idx == 0);
        }
    }

    #[test]
    fn overflowing_weights_keep_total_finite() {
        let weights = CumulativeWeights::new([1e308, 1e308, f64::MAX]);
        assert!(weights.total().is_finite());
        assert_eq!(weights.total(), 1e308);
        let mut rng = StdRng::seed_from_u64(6);
        for _ in 0..100 {
            assert_eq!(weights.sample(&mut rng), Some(0));
        }

        let table = parse_surnames(
            r#"{"K": [
                {"korean": "김", "hanja": "金", "weight": 1e308},
                {"korean": "강", "hanja": "姜", "weight": 1e308}
            ]}"#,
        )
        .unwrap();
        for _ in 0..20 {
            assert_eq!(resolve_surname(&table, "Kim", &mut rng).korean, "김");
        }
    }

    #[test]
    fn all_zero_weights_pick_first() {
        let entries = vec![
            SurnameEntry::new("김", "金", 0.0),
            SurnameEntry::new("이", "李", 0.0),
        ];
        let mut rng = StdRng::seed_from_u64(9);
        assert_eq!(pick_weighted(&entries, &mut rng).unwrap().korean, "김");
    }
}
