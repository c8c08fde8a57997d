use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DetectedLanguage {
    pub code: String,
    pub name: String,
    pub confidence: f64,
    pub reliable: bool,
}
