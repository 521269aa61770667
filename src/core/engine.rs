/// The engine facade: reference tables + configuration → names and fortunes.
///
/// Built via `NaeilumEngine::builder()`. The engine holds only read-only
/// tables, so one instance can serve any number of concurrent callers.

use log::info;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::path::Path;
use thiserror::Error;

use crate::core::composer::generate_names;
use crate::core::config::{ConfigError, EngineConfig};
use crate::core::fortune::generate_fortune;
use crate::core::reference::{
    self, FortuneTable, ReferenceData, ReferenceError, SurnameTable, SyllablePool,
    FORTUNES_FILE, SURNAMES_FILE, SYLLABLES_FILE,
};
use crate::core::syllable::SyllableError;
use crate::schema::candidate::{NameCandidate, NameOptions, OriginalName, SuggestResponse};
use crate::schema::fortune::FortuneResult;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("reference data error: {0}")]
    Reference(#[from] ReferenceError),
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
    #[error("syllable error: {0}")]
    Syllable(#[from] SyllableError),
    #[error("syllable pool is empty (data dir '{0}'); name generation cannot run")]
    EmptySyllablePool(String),
}

pub struct NaeilumEngine {
    reference: ReferenceData,
    default_tags: Vec<String>,
    fortune_tags: Vec<String>,
    seed: Option<u64>,
}

/// Builder for constructing a `NaeilumEngine`.
pub struct NaeilumEngineBuilder {
    config: EngineConfig,
    /// Directly provided tables (for testing without files).
    syllables: Option<SyllablePool>,
    surnames: Option<SurnameTable>,
    fortunes: Option<FortuneTable>,
}

impl NaeilumEngine {
    pub fn builder() -> NaeilumEngineBuilder {
        NaeilumEngineBuilder {
            config: EngineConfig::default(),
            syllables: None,
            surnames: None,
            fortunes: None,
        }
    }

    pub fn reference(&self) -> &ReferenceData {
        &self.reference
    }

    pub fn default_tags(&self) -> &[String] {
        &self.default_tags
    }

    pub fn fortune_tags(&self) -> &[String] {
        &self.fortune_tags
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// A generator for one request: seeded when the engine has a seed,
    /// from entropy otherwise.
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }

    /// Suggest exactly three localized names for a foreign name.
    pub fn suggest_names<R: Rng + ?Sized>(
        &self,
        first_name: &str,
        last_name: &str,
        options: &NameOptions,
        rng: &mut R,
    ) -> Result<Vec<NameCandidate>, EngineError> {
        let tags: &[String] = match options.tags.as_deref() {
            Some(tags) if !tags.is_empty() => tags,
            _ => &self.default_tags,
        };
        let candidates = generate_names(
            &self.reference.syllables,
            &self.reference.surnames,
            first_name,
            last_name,
            tags,
            options.gender,
            rng,
        )?;
        Ok(candidates)
    }

    /// `suggest_names` wrapped with the echoed input name.
    pub fn suggest_response<R: Rng + ?Sized>(
        &self,
        first_name: &str,
        last_name: &str,
        options: &NameOptions,
        rng: &mut R,
    ) -> Result<SuggestResponse, EngineError> {
        Ok(SuggestResponse {
            candidates: self.suggest_names(first_name, last_name, options, rng)?,
            original: OriginalName {
                first_name: first_name.to_string(),
                last_name: last_name.to_string(),
            },
        })
    }

    /// Compose a daily fortune. `date` defaults to today.
    pub fn fortune<R: Rng + ?Sized>(
        &self,
        tags: &[String],
        date: Option<&str>,
        rng: &mut R,
    ) -> FortuneResult {
        generate_fortune(&self.reference.fortunes, tags, date, rng)
    }
}

impl NaeilumEngineBuilder {
    pub fn config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    /// Load the configuration from a RON file.
    pub fn config_file(self, path: &Path) -> Result<Self, EngineError> {
        let config = EngineConfig::load(path)?;
        Ok(self.config(config))
    }

    pub fn data_dir(mut self, path: &str) -> Self {
        self.config.data_dir = path.to_string();
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = Some(seed);
        self
    }

    pub fn default_tags(mut self, tags: &[&str]) -> Self {
        self.config.default_tags = tags.iter().map(|s| s.to_string()).collect();
        self
    }

    /// Provide all tables directly (for testing without files).
    pub fn with_reference(mut self, reference: ReferenceData) -> Self {
        self.syllables = Some(reference.syllables);
        self.surnames = Some(reference.surnames);
        self.fortunes = Some(reference.fortunes);
        self
    }

    pub fn with_syllables(mut self, syllables: SyllablePool) -> Self {
        self.syllables = Some(syllables);
        self
    }

    pub fn with_surnames(mut self, surnames: SurnameTable) -> Self {
        self.surnames = Some(surnames);
        self
    }

    pub fn with_fortunes(mut self, fortunes: FortuneTable) -> Self {
        self.fortunes = Some(fortunes);
        self
    }

    /// Load any table not provided directly from the data directory
    /// (degrading to empty on failure), then check the syllable pool.
    pub fn build(self) -> Result<NaeilumEngine, EngineError> {
        let dir = Path::new(&self.config.data_dir);

        let syllables = self.syllables.unwrap_or_else(|| {
            reference::or_empty(
                reference::load_syllables(&dir.join(SYLLABLES_FILE)),
                SYLLABLES_FILE,
            )
        });
        let surnames = self.surnames.unwrap_or_else(|| {
            reference::or_empty(reference::load_surnames(&dir.join(SURNAMES_FILE)), SURNAMES_FILE)
        });
        let fortunes = self.fortunes.unwrap_or_else(|| {
            reference::or_empty(reference::load_fortunes(&dir.join(FORTUNES_FILE)), FORTUNES_FILE)
        });

        if syllables.is_empty() {
            return Err(EngineError::EmptySyllablePool(self.config.data_dir));
        }

        info!(
            "engine ready: {} syllables in {} tags, {} surname keys, {} fortune tags",
            syllables.len(),
            syllables.tags().len(),
            surnames.initials().len(),
            fortunes.tags().len()
        );

        Ok(NaeilumEngine {
            reference: ReferenceData {
                syllables,
                surnames,
                fortunes,
            },
            default_tags: self.config.default_tags,
            fortune_tags: self.config.fortune_tags,
            seed: self.config.seed,
        })
    }
}
