//! WASM bindings for naeilum — powers the browser front-end.

use rand::rngs::StdRng;
use rand::SeedableRng;
use wasm_bindgen::prelude::*;

use naeilum::core::fortune::parse_tag_list;
use naeilum::core::reference::{parse_fortunes, parse_surnames, parse_syllables, ReferenceData};
use naeilum::schema::candidate::NameOptions;
use naeilum::NaeilumEngine;

// ---------------------------------------------------------------------------
// Embedded reference data
// ---------------------------------------------------------------------------
mod data {
    pub const SYLLABLES: &str = include_str!("../../data/syllables.json");
    pub const SURNAMES: &str = include_str!("../../data/surnames.json");
    pub const FORTUNES: &str = include_str!("../../data/fortunes.json");
}

// ---------------------------------------------------------------------------
// JSON helper types for communication across the WASM boundary
// ---------------------------------------------------------------------------
#[derive(serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct SuggestInput {
    #[serde(default)]
    first_name: String,
    #[serde(default)]
    last_name: String,
    #[serde(default)]
    options: NameOptions,
}

#[derive(serde::Serialize)]
struct TagInfo<'a> {
    syllable_tags: &'a [String],
    fortune_tags: Vec<&'a str>,
    default_tags: &'a [String],
}

fn reference_data() -> Result<ReferenceData, JsError> {
    Ok(ReferenceData {
        syllables: parse_syllables(data::SYLLABLES)
            .map_err(|e| JsError::new(&format!("Syllable table error: {e}")))?,
        surnames: parse_surnames(data::SURNAMES)
            .map_err(|e| JsError::new(&format!("Surname table error: {e}")))?,
        fortunes: parse_fortunes(data::FORTUNES)
            .map_err(|e| JsError::new(&format!("Fortune table error: {e}")))?,
    })
}

// ---------------------------------------------------------------------------
// Naeilum — the main exported struct
// ---------------------------------------------------------------------------
#[wasm_bindgen]
pub struct Naeilum {
    engine: NaeilumEngine,
    rng: StdRng,
}

#[wasm_bindgen]
impl Naeilum {
    /// Create an instance backed by the embedded tables. A seed of 0
    /// means "seed from entropy".
    #[wasm_bindgen(constructor)]
    pub fn new(seed: u64) -> Result<Naeilum, JsError> {
        let mut builder = NaeilumEngine::builder().with_reference(reference_data()?);
        if seed != 0 {
            builder = builder.seed(seed);
        }
        let engine = builder
            .build()
            .map_err(|e| JsError::new(&format!("Engine build error: {e}")))?;
        let rng = engine.rng();
        Ok(Naeilum { engine, rng })
    }

    /// Suggest names for a request described by a JSON string.
    ///
    /// Expected JSON shape:
    /// ```json
    /// {
    ///   "firstName": "Wilson",
    ///   "lastName": "Smith",
    ///   "options": { "tags": ["밝음", "지혜"], "gender": "neutral" }
    /// }
    /// ```
    /// Returns `{ "candidates": [...], "original": {...} }` as JSON.
    pub fn suggest_names(&mut self, request_json: &str) -> Result<String, JsError> {
        let input: SuggestInput = serde_json::from_str(request_json)
            .map_err(|e| JsError::new(&format!("Invalid request JSON: {e}")))?;
        let response = self
            .engine
            .suggest_response(
                input.first_name.trim(),
                input.last_name.trim(),
                &input.options,
                &mut self.rng,
            )
            .map_err(|e| JsError::new(&format!("Name generation error: {e}")))?;
        serde_json::to_string(&response)
            .map_err(|e| JsError::new(&format!("Serialization error: {e}")))
    }

    /// Compose a fortune. `tags` is comma-separated; an empty string uses
    /// the configured fortune tags. `date` is `YYYY/MM/DD`, or today when absent.
    pub fn fortune(&mut self, tags: &str, date: Option<String>) -> Result<String, JsError> {
        let mut tag_list = parse_tag_list(tags);
        if tag_list.is_empty() {
            tag_list = self.engine.fortune_tags().to_vec();
        }
        let fortune = self
            .engine
            .fortune(&tag_list, date.as_deref(), &mut self.rng);
        serde_json::to_string(&fortune)
            .map_err(|e| JsError::new(&format!("Serialization error: {e}")))
    }

    /// Return JSON describing the available tags.
    pub fn tags(&self) -> Result<String, JsError> {
        let reference = self.engine.reference();
        let info = TagInfo {
            syllable_tags: reference.syllables.tags(),
            fortune_tags: reference.fortunes.tags(),
            default_tags: self.engine.default_tags(),
        };
        serde_json::to_string(&info)
            .map_err(|e| JsError::new(&format!("Serialization error: {e}")))
    }

    /// Reseed the generator.
    pub fn reset(&mut self, seed: u64) {
        self.rng = StdRng::seed_from_u64(seed);
    }
}
