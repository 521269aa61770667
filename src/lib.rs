//! Naeilum — localized Korean name suggestions and daily fortunes.
//!
//! Maps a foreign name plus a set of thematic tags to Korean name
//! candidates (surname, two given-name syllables, romanization and
//! meanings), and composes tag-driven fortune messages, all from static
//! reference tables.

pub mod core;
pub mod schema;

pub use crate::core::engine::{EngineError, NaeilumEngine};
pub use crate::schema::candidate::{NameCandidate, NameOptions};
pub use crate::schema::fortune::FortuneResult;
