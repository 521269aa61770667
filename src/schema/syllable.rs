use serde::{Deserialize, Deserializer, Serialize};

/// One given-name syllable from the reference pool.
///
/// The engine does not interpret tag semantics; it uses the tag solely
/// to index the pool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyllableEntry {
    pub syllable: String,
    pub hanja: String,
    #[serde(default)]
    pub meaning: String,
    pub tag: String,
    #[serde(default, deserialize_with = "flag_from_bool_or_int")]
    pub common: bool,
}

impl SyllableEntry {
    pub fn new(syllable: &str, hanja: &str, meaning: &str, tag: &str, common: bool) -> Self {
        Self {
            syllable: syllable.to_string(),
            hanja: hanja.to_string(),
            meaning: meaning.to_string(),
            tag: tag.to_string(),
            common,
        }
    }
}

/// Reference files mark `common` either as a JSON bool or as `0`/`1`.
fn flag_from_bool_or_int<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Flag {
        Bool(bool),
        Int(i64),
    }

    Ok(match Flag::deserialize(deserializer)? {
        Flag::Bool(b) => b,
        Flag::Int(n) => n == 1,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn common_flag_accepts_int() {
        let entry: SyllableEntry = serde_json::from_str(
            r#"{"syllable": "현", "hanja": "賢", "meaning": "어진", "tag": "지혜", "common": 1}"#,
        )
        .unwrap();
        assert!(entry.common);

        let entry: SyllableEntry = serde_json::from_str(
            r#"{"syllable": "현", "hanja": "賢", "meaning": "어진", "tag": "지혜", "common": 0}"#,
        )
        .unwrap();
        assert!(!entry.common);
    }

    #[test]
    fn common_flag_accepts_bool_and_defaults_false() {
        let entry: SyllableEntry = serde_json::from_str(
            r#"{"syllable": "솔", "hanja": "率", "meaning": "거느리는", "tag": "용기", "common": true}"#,
        )
        .unwrap();
        assert!(entry.common);

        let entry: SyllableEntry =
            serde_json::from_str(r#"{"syllable": "솔", "hanja": "率", "tag": "용기"}"#).unwrap();
        assert!(!entry.common);
        assert!(entry.meaning.is_empty());
    }
}
