use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize};

/// The family-name part of a candidate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FamilyName {
    pub localized: String,
    pub script_form: String,
    pub meaning: String,
}

/// One given-name syllable of a candidate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GivenSyllable {
    pub syllable: String,
    pub script_form: String,
    pub meaning: String,
}

/// A suggested localized name.
///
/// `given` always holds two syllables and `script_forms` three
/// entries, surname first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameCandidate {
    pub name_localized: String,
    pub name_display: String,
    pub script_forms: [String; 3],
    pub family: FamilyName,
    pub given: [GivenSyllable; 2],
    pub summary: String,
}

/// Gender hint supplied with a name request.
///
/// Requests carry it as free text; anything unrecognized reads as `Neutral`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    #[default]
    Neutral,
}

impl Gender {
    /// Case-insensitive parse; never fails.
    pub fn parse(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "male" | "m" => Gender::Male,
            "female" | "f" => Gender::Female,
            _ => Gender::Neutral,
        }
    }
}

impl<'de> Deserialize<'de> for Gender {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Hint {
            Text(String),
            Other(IgnoredAny),
        }

        Ok(match Hint::deserialize(deserializer)? {
            Hint::Text(text) => Gender::parse(&text),
            Hint::Other(_) => Gender::Neutral,
        })
    }
}

/// Caller options for a name request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NameOptions {
    #[serde(default)]
    pub tags: Option<Vec<String>>,
    #[serde(default)]
    pub gender: Gender,
}

impl NameOptions {
    pub fn with_tags(tags: &[&str]) -> Self {
        Self {
            tags: Some(tags.iter().map(|t| t.to_string()).collect()),
            gender: Gender::Neutral,
        }
    }
}

/// The input name echoed back alongside the candidates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OriginalName {
    pub first_name: String,
    pub last_name: String,
}

/// Response envelope for a name request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuggestResponse {
    pub candidates: Vec<NameCandidate>,
    pub original: OriginalName,
}
