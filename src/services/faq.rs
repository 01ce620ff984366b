use crate::models::FaqTopic;

struct FaqRule {
    keywords: &'static [&'static str],
    topic: FaqTopic,
}

/// Checked top to bottom; the first rule with a keyword in the text wins.
/// "finish" appears twice and resolves to the construction timeline.
const RULES: &[FaqRule] = &[
    FaqRule {
        keywords: &["construction", "complete", "completion", "build", "finish"],
        topic: FaqTopic::ConstructionTimeline,
    },
    FaqRule {
        keywords: &["yield", "rental", "rent", "return"],
        topic: FaqTopic::RentalReturns,
    },
    FaqRule {
        keywords: &["firb", "foreign", "overseas", "stamp duty", "surcharge"],
        topic: FaqTopic::ForeignBuyers,
    },
    FaqRule {
        keywords: &[
            "finance",
            "broker",
            "mortgage",
            "loan",
            "pre-approval",
            "pre approved",
            "preapproved",
        ],
        topic: FaqTopic::Finance,
    },
    FaqRule {
        keywords: &["finish", "upgrade", "custom"],
        topic: FaqTopic::Customisation,
    },
    FaqRule {
        // Trailing space keeps "card" and "carpet" out.
        keywords: &["parking", "car ", "carpark"],
        topic: FaqTopic::Parking,
    },
];

pub fn match_topic(user_text: Option<&str>) -> Option<FaqTopic> {
    let text = user_text.filter(|t| !t.is_empty())?.to_lowercase();
    RULES
        .iter()
        .find(|rule| rule.keywords.iter().any(|k| text.contains(k)))
        .map(|rule| rule.topic)
}

/// Canonical answer for the question, or `None` when the agent should escalate.
pub fn answer_faq(user_text: Option<&str>) -> Option<&'static str> {
    let topic = match_topic(user_text);
    if topic.is_none() {
        tracing::debug!(text = user_text.unwrap_or_default(), "no canonical answer, escalating");
    }
    topic.map(|t| t.answer())
}
