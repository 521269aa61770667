use serde::{Deserialize, Serialize};

/// A composed daily fortune.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FortuneResult {
    pub date: String,
    pub cosmic_cookie: String,
    pub lucky_snack: String,
    pub deeper_look: String,
}
