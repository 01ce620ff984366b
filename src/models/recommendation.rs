use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum UnitType {
    #[serde(rename = "1-bed")]
    OneBed,
    #[serde(rename = "2-bed")]
    TwoBed,
    #[serde(rename = "3-bed")]
    ThreeBed,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Recommendation {
    pub recommended_types: Vec<UnitType>,
    pub note: String,
}

impl Recommendation {
    pub fn new(recommended_types: Vec<UnitType>, note: &str) -> Self {
        Self {
            recommended_types,
            note: note.to_string(),
        }
    }
}
