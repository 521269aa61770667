/// Meaning lookups and summary sentences for candidates.

use crate::schema::syllable::SyllableEntry;

/// Used when a surname's script form is not in the meaning table.
pub const DEFAULT_SURNAME_MEANING: &str = "Noble family lineage";

/// Used when a summary cannot be built from exactly two meanings.
pub const DEFAULT_SUMMARY: &str = "품격 있고 아름다운 이름";

/// Meaning of a surname, keyed by its script (hanja) form.
pub fn surname_meaning(hanja: &str) -> &'static str {
    match hanja {
        "宋" => "Pine tree - symbol of longevity and resilience",
        "李" => "Plum tree - symbol of beauty and perseverance",
        "金" => "Gold - symbol of value and nobility",
        "朴" => "Simple wood - symbol of honesty and humility",
        "崔" => "High mountain - symbol of greatness",
        "鄭" => "Upright - symbol of righteousness",
        "韓" => "Great nation - symbol of leadership",
        "徐" => "Slow and steady - symbol of patience",
        "姜" => "Ginger - symbol of strength and vitality",
        _ => DEFAULT_SURNAME_MEANING,
    }
}

/// One-line summary of a given name: "{m1}하고 {m2}한 사람".
pub fn name_summary(syllables: &[&SyllableEntry]) -> String {
    match syllables {
        [first, second] => format!("{}하고 {}한 사람", first.meaning, second.meaning),
        _ => DEFAULT_SUMMARY.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_surname_meaning() {
        assert_eq!(
            surname_meaning("宋"),
            "Pine tree - symbol of longevity and resilience"
        );
        assert_eq!(surname_meaning("金"), "Gold - symbol of value and nobility");
    }

    #[test]
    fn unknown_surname_meaning_falls_back() {
        assert_eq!(surname_meaning("龍"), DEFAULT_SURNAME_MEANING);
        assert_eq!(surname_meaning(""), DEFAULT_SURNAME_MEANING);
        assert_eq!(surname_meaning("龍"), surname_meaning("龍"));
    }

    #[test]
    fn summary_from_two_meanings() {
        let a = SyllableEntry::new("명", "明", "명랑", "밝음", true);
        let b = SyllableEntry::new("지", "智", "현명", "지혜", true);
        assert_eq!(name_summary(&[&a, &b]), "명랑하고 현명한 사람");
    }

    #[test]
    fn summary_falls_back_for_other_counts() {
        let a = SyllableEntry::new("명", "明", "명랑", "밝음", true);
        assert_eq!(name_summary(&[]), DEFAULT_SUMMARY);
        assert_eq!(name_summary(&[&a]), DEFAULT_SUMMARY);
        assert_eq!(name_summary(&[&a, &a, &a]), DEFAULT_SUMMARY);
    }
}
