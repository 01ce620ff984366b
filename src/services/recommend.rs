use crate::models::{Recommendation, UnitType};

/// Below this, only 1-beds fit.
pub const ENTRY_CEILING: i64 = 650_000;
/// Upper bound (inclusive) of the mid band.
pub const MID_CEILING: i64 = 1_100_000;

pub fn recommend_by_budget(budget: Option<i64>) -> Recommendation {
    let Some(budget) = budget else {
        return Recommendation::new(vec![], "No budget provided.");
    };

    if budget < ENTRY_CEILING {
        Recommendation::new(
            vec![UnitType::OneBed],
            "Note: parking is limited and costs extra for most 1-beds.",
        )
    } else if budget <= MID_CEILING {
        Recommendation::new(vec![UnitType::OneBed, UnitType::TwoBed], "")
    } else {
        Recommendation::new(
            vec![UnitType::TwoBed, UnitType::ThreeBed],
            "Confirm two car spaces are required for 3-bed options.",
        )
    }
}
