pub mod composer;
pub mod config;
pub mod engine;
pub mod fortune;
pub mod meaning;
pub mod reference;
pub mod romanize;
pub mod surname;
pub mod syllable;
