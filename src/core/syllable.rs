/// Given-name syllable selection from the tag-indexed pool.

use log::debug;
use rand::seq::SliceRandom;
use rand::Rng;
use thiserror::Error;

use crate::core::reference::SyllablePool;
use crate::schema::syllable::SyllableEntry;

#[derive(Debug, Error)]
pub enum SyllableError {
    #[error("syllable pool is empty")]
    EmptyPool,
}

/// Pick uniformly among the tag's common syllables, or among all of
/// them when none is marked common.
pub fn pick_preferring_common<'a, R: Rng + ?Sized>(
    options: &'a [SyllableEntry],
    rng: &mut R,
) -> Option<&'a SyllableEntry> {
    let common: Vec<&SyllableEntry> = options.iter().filter(|s| s.common).collect();
    if common.is_empty() {
        options.choose(rng)
    } else {
        common.choose(rng).copied()
    }
}

/// Select the two given-name syllables for one candidate.
///
/// Up to two distinct caller tags are chosen at random and each
/// contributes one syllable. If that yields fewer than two, syllables
/// from random pool tags fill the gap, so any non-empty pool succeeds.
pub fn select_syllables<'a, R: Rng + ?Sized>(
    pool: &'a SyllablePool,
    tags: &[String],
    rng: &mut R,
) -> Result<[&'a SyllableEntry; 2], SyllableError> {
    if pool.is_empty() {
        return Err(SyllableError::EmptyPool);
    }

    let mut distinct: Vec<&str> = Vec::with_capacity(tags.len());
    for tag in tags {
        if !distinct.contains(&tag.as_str()) {
            distinct.push(tag.as_str());
        }
    }

    let mut chosen: Vec<&str> = distinct.choose_multiple(rng, 2).copied().collect();
    chosen.shuffle(rng);

    let mut picked: Vec<&SyllableEntry> = Vec::with_capacity(2);
    for tag in chosen {
        let entry = pool
            .get(tag)
            .and_then(|options| pick_preferring_common(options, rng));
        if let Some(entry) = entry {
            picked.push(entry);
        }
    }

    while picked.len() < 2 {
        let entry = pool
            .tags()
            .choose(rng)
            .and_then(|tag| pool.get(tag))
            .and_then(|options| options.choose(rng))
            .ok_or(SyllableError::EmptyPool)?;
        debug!("filled syllable slot from tag '{}'", entry.tag);
        picked.push(entry);
    }

    <[&SyllableEntry; 2]>::try_from(picked).map_err(|_| SyllableError::EmptyPool)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn test_pool() -> SyllablePool {
        SyllablePool::from_entries(vec![
            SyllableEntry::new("명", "明", "명랑", "밝음", true),
            SyllableEntry::new("휘", "輝", "찬란", "밝음", false),
            SyllableEntry::new("지", "智", "현명", "지혜", true),
            SyllableEntry::new("현", "賢", "어질", "지혜", true),
            SyllableEntry::new("솔", "率", "솔직", "용기", false),
            SyllableEntry::new("건", "健", "건강", "용기", false),
        ])
    }

    fn tags(list: &[&str]) -> Vec<String> {
        list.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn two_tags_give_one_syllable_each() {
        let pool = test_pool();
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..100 {
            let picked = select_syllables(&pool, &tags(&["밝음", "지혜"]), &mut rng).unwrap();
            let mut picked_tags: Vec<&str> = picked.iter().map(|s| s.tag.as_str()).collect();
            picked_tags.sort_unstable();
            assert_eq!(picked_tags, vec!["밝음", "지혜"]);
        }
    }

    #[test]
    fn common_syllables_are_preferred() {
        let pool = test_pool();
        let mut rng = StdRng::seed_from_u64(2);
        for _ in 0..100 {
            let picked = select_syllables(&pool, &tags(&["밝음", "지혜"]), &mut rng).unwrap();
            assert!(picked.iter().all(|s| s.common), "picked {:?}", picked);
            assert!(picked.iter().all(|s| s.syllable != "휘"));
        }
    }

    #[test]
    fn tag_without_common_uses_any_entry() {
        let pool = test_pool();
        let mut rng = StdRng::seed_from_u64(3);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..200 {
            let options = pool.get("용기").unwrap();
            seen.insert(pick_preferring_common(options, &mut rng).unwrap().syllable.clone());
        }
        assert_eq!(seen.len(), 2);
    }

    #[test]
    fn unknown_tags_refill_from_pool_entries() {
        let pool = test_pool();
        let mut rng = StdRng::seed_from_u64(4);
        for tag_list in [vec![], tags(&["없음"]), tags(&["없음", "모름", "밝음"])] {
            for _ in 0..50 {
                let picked = select_syllables(&pool, &tag_list, &mut rng).unwrap();
                for entry in picked {
                    assert!(pool.tags().contains(&entry.tag), "tag {} not in pool", entry.tag);
                    assert!(
                        pool.get(&entry.tag).is_some_and(|list| list.contains(entry)),
                        "syllable {} not in pool",
                        entry.syllable
                    );
                }
            }
        }
    }

    #[test]
    fn known_tag_takes_first_slot_beside_unknown() {
        let pool = test_pool();
        let mut rng = StdRng::seed_from_u64(10);
        for tag_list in [tags(&["없음", "지혜"]), tags(&["지혜", "없음"])] {
            for _ in 0..50 {
                let picked = select_syllables(&pool, &tag_list, &mut rng).unwrap();
                assert_eq!(picked[0].tag, "지혜");
                assert!(picked[0].common);
                assert!(pool.tags().contains(&picked[1].tag));
            }
        }
    }

    #[test]
    fn single_tag_is_topped_up_from_pool() {
        let pool = test_pool();
        let mut rng = StdRng::seed_from_u64(5);
        for _ in 0..50 {
            let picked = select_syllables(&pool, &tags(&["지혜"]), &mut rng).unwrap();
            assert_eq!(picked[0].tag, "지혜");
            assert!(picked[0].common);
        }
    }

    #[test]
    fn duplicate_tags_count_once() {
        let pool = test_pool();
        let mut rng = StdRng::seed_from_u64(6);
        let mut other_tag_seen = false;
        for _ in 0..100 {
            let picked = select_syllables(&pool, &tags(&["지혜", "지혜"]), &mut rng).unwrap();
            assert_eq!(picked[0].tag, "지혜");
            if picked[1].tag != "지혜" {
                other_tag_seen = true;
            }
        }
        assert!(other_tag_seen, "second slot should come from the whole pool");
    }

    #[test]
    fn empty_pool_is_an_error() {
        let pool = SyllablePool::default();
        let mut rng = StdRng::seed_from_u64(7);
        assert!(matches!(
            select_syllables(&pool, &tags(&["밝음"]), &mut rng),
            Err(SyllableError::EmptyPool)
        ));
    }

    #[test]
    fn same_seed_same_selection() {
        let pool = test_pool();
        let tag_list = tags(&["밝음", "용기", "지혜"]);
        let a = select_syllables(&pool, &tag_list, &mut StdRng::seed_from_u64(99)).unwrap();
        let b = select_syllables(&pool, &tag_list, &mut StdRng::seed_from_u64(99)).unwrap();
        assert_eq!(a, b);
    }
}
