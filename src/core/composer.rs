/// Name composition — surname + two syllables → candidate list.

use log::debug;
use rand::Rng;

use crate::core::meaning::{name_summary, surname_meaning};
use crate::core::reference::{SurnameTable, SyllablePool};
use crate::core::romanize::romanize;
use crate::core::surname::resolve_surname;
use crate::core::syllable::{select_syllables, SyllableError};
use crate::schema::candidate::{FamilyName, Gender, GivenSyllable, NameCandidate};
use crate::schema::surname::SurnameEntry;
use crate::schema::syllable::SyllableEntry;

/// Every request yields exactly this many candidates.
pub const CANDIDATE_COUNT: usize = 3;

/// Tags used when the caller supplies none ("bright", "wisdom").
pub const DEFAULT_TAGS: [&str; 2] = ["밝음", "지혜"];

/// True for the one input pair that gets the pre-authored candidate.
pub fn is_pinned(first_name: &str, last_name: &str) -> bool {
    first_name.to_uppercase() == "WILSON" && last_name.to_uppercase() == "SMITH"
}

/// The pre-authored candidate for "Wilson Smith".
pub fn pinned_candidate() -> NameCandidate {
    NameCandidate {
        name_localized: "송월선".to_string(),
        name_display: "Song Wil-Seon".to_string(),
        script_forms: ["宋".to_string(), "蔚".to_string(), "宣".to_string()],
        family: FamilyName {
            localized: "송".to_string(),
            script_form: "宋".to_string(),
            meaning: "Pine tree - symbol of longevity and resilience".to_string(),
        },
        given: [
            GivenSyllable {
                syllable: "월".to_string(),
                script_form: "蔚".to_string(),
                meaning: "무성하고 아름다운".to_string(),
            },
            GivenSyllable {
                syllable: "선".to_string(),
                script_form: "宣".to_string(),
                meaning: "베풀고 선포하는".to_string(),
            },
        ],
        summary: "무성한 아름다움을 널리 베푸는 사람".to_string(),
    }
}

/// Assemble a candidate from a surname and two given-name syllables.
pub fn build_candidate(surname: &SurnameEntry, syllables: [&SyllableEntry; 2]) -> NameCandidate {
    let given_localized: String = syllables.iter().map(|s| s.syllable.as_str()).collect();
    let [first, second] = syllables;

    NameCandidate {
        name_localized: format!("{}{}", surname.korean, given_localized),
        name_display: romanize(&surname.korean, &given_localized),
        script_forms: [
            surname.hanja.clone(),
            first.hanja.clone(),
            second.hanja.clone(),
        ],
        family: FamilyName {
            localized: surname.korean.clone(),
            script_form: surname.hanja.clone(),
            meaning: surname_meaning(&surname.hanja).to_string(),
        },
        given: syllables.map(|s| GivenSyllable {
            syllable: s.syllable.clone(),
            script_form: s.hanja.clone(),
            meaning: s.meaning.clone(),
        }),
        summary: name_summary(&syllables),
    }
}

/// Generate the candidate list for a foreign name.
///
/// One surname is resolved per call and shared by all candidates; each
/// candidate draws its own syllables. Repeats across candidates are allowed.
pub fn generate_names<R: Rng + ?Sized>(
    syllables: &SyllablePool,
    surnames: &SurnameTable,
    first_name: &str,
    last_name: &str,
    tags: &[String],
    gender: Gender,
    rng: &mut R,
) -> Result<Vec<NameCandidate>, SyllableError> {
    let default_tags: Vec<String>;
    let tags: &[String] = if tags.is_empty() {
        default_tags = DEFAULT_TAGS.iter().map(|t| t.to_string()).collect();
        &default_tags
    } else {
        tags
    };
    debug!(
        "generating names for '{} {}' (tags {:?}, gender {:?})",
        first_name, last_name, tags, gender
    );

    let surname = resolve_surname(surnames, last_name, rng);

    let mut candidates = Vec::with_capacity(CANDIDATE_COUNT);
    if is_pinned(first_name, last_name) {
        candidates.push(pinned_candidate());
    }

    while candidates.len() < CANDIDATE_COUNT {
        let picked = select_syllables(syllables, tags, rng)?;
        candidates.push(build_candidate(&surname, picked));
    }
    candidates.truncate(CANDIDATE_COUNT);

    Ok(candidates)
}
