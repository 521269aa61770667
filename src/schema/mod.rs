pub mod candidate;
pub mod fortune;
pub mod surname;
pub mod syllable;
