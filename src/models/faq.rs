use serde::{Deserialize, Serialize};

/// The fixed set of questions the agent may answer without escalating.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum FaqTopic {
    ConstructionTimeline,
    RentalReturns,
    ForeignBuyers,
    Finance,
    Customisation,
    Parking,
}

impl FaqTopic {
    pub fn answer(&self) -> &'static str {
        match self {
            FaqTopic::ConstructionTimeline => {
                "Start target late 2025; completion targeted Q4 2027 (indicative)."
            }
            FaqTopic::RentalReturns => {
                "No rental guarantees; we can refer you to a property manager."
            }
            FaqTopic::ForeignBuyers => {
                "Foreign buyers may face extra approval/taxes; we can refer, but do not advise."
            }
            FaqTopic::Finance => "We can refer you to a broker; no personal finance advice.",
            FaqTopic::Customisation => {
                "Limited customisation windows, subject to availability/cost."
            }
            FaqTopic::Parking => "Parking is limited for 1-beds and paid extra; not guaranteed.",
        }
    }
}
