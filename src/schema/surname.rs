use serde::{Deserialize, Serialize};

/// A localized family name with its selection weight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurnameEntry {
    pub korean: String,
    pub hanja: String,
    #[serde(default = "default_weight")]
    pub weight: f64,
}

fn default_weight() -> f64 {
    1.0
}

impl SurnameEntry {
    pub fn new(korean: &str, hanja: &str, weight: f64) -> Self {
        Self {
            korean: korean.to_string(),
            hanja: hanja.to_string(),
            weight,
        }
    }
}
