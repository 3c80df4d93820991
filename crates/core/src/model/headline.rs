use serde::{Deserialize, Serialize};

/// One headline card shown by the app mockup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentItem {
    pub title: String,
    pub summary: String,
    pub question: String,
    pub answer: String,
    pub why_it_matters: String,
}

impl ContentItem {
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        summary: impl Into<String>,
        question: impl Into<String>,
        answer: impl Into<String>,
        why_it_matters: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            summary: summary.into(),
            question: question.into(),
            answer: answer.into(),
            why_it_matters: why_it_matters.into(),
        }
    }
}

/// The fixed, ordered headline set rotated by the landing page mockup.
#[must_use]
pub fn headline_catalog() -> Vec<ContentItem> {
    vec![
        ContentItem::new(
            "Global Climate Summit",
            "Leaders from 195 countries agree on new emissions targets",
            "How does this affect renewable energy investments?",
            "The new climate agreement is likely to accelerate investments in renewable energy, \
             particularly solar and wind. Analysts predict up to 30% growth in the sector by 2025.",
            "This could impact your investment portfolio if you own stocks in energy companies.",
        ),
        ContentItem::new(
            "Tech Giant Launches AI Assistant",
            "New AI tool aims to simplify complex tasks for everyday users",
            "Is this different from existing assistants?",
            "Yes, it's built on a more advanced neural network and can understand context better \
             than previous models, making it more useful for complex tasks.",
            "This could change how you interact with technology in your daily life.",
        ),
        ContentItem::new(
            "Housing Market Update",
            "Mortgage rates drop to 3.5%, lowest in six months",
            "Is now a good time to buy?",
            "While rates are favorable, housing prices remain high in most markets. Experts \
             suggest waiting for price corrections in overheated markets.",
            "This could save you thousands if you're planning to buy a home soon.",
        ),
    ]
}
