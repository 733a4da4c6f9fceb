use serde::Deserialize;

use crate::error::QuestionBankError;

/// DOM id of the `<script type="application/json">` block that may override
/// the built-in questions.
pub const QUESTION_BANK_ELEMENT_ID: &str = "question-bank";

const DEFAULT_QUESTIONS: [&str; 3] = [
    "What is Python?",
    "Explain Django ORM.",
    "How do you handle team communication?",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub text: String,
    pub topic: Option<String>,
    pub difficulty: Option<String>,
}

impl Question {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            topic: None,
            difficulty: None,
        }
    }

    #[must_use]
    pub fn with_topic(mut self, topic: impl Into<String>) -> Self {
        self.topic = Some(topic.into());
        self
    }

    #[must_use]
    pub fn with_difficulty(mut self, difficulty: impl Into<String>) -> Self {
        self.difficulty = Some(difficulty.into());
        self
    }
}

// Either `"What is Rust?"` or `{ "text": "...", "topic": "...", "difficulty": "..." }`.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawQuestion {
    Text(String),
    Full {
        text: String,
        #[serde(default)]
        topic: Option<String>,
        #[serde(default)]
        difficulty: Option<String>,
    },
}

// A bare array, or the `{ "questions": [...] }` envelope question generators emit.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawBank {
    List(Vec<RawQuestion>),
    Envelope { questions: Vec<RawQuestion> },
}

fn label(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// The questions asked when the page embeds no bank of its own.
pub fn default_questions() -> Vec<Question> {
    DEFAULT_QUESTIONS.iter().map(|q| Question::new(*q)).collect()
}

/// Parse an embedded question bank.
///
/// # Errors
///
/// Returns `QuestionBankError` for malformed JSON, an empty list, or an entry
/// whose text is blank.
pub fn parse_question_bank(json: &str) -> Result<Vec<Question>, QuestionBankError> {
    let raw = match serde_json::from_str::<RawBank>(json)? {
        RawBank::List(list) => list,
        RawBank::Envelope { questions } => questions,
    };

    if raw.is_empty() {
        return Err(QuestionBankError::Empty);
    }

    raw.into_iter()
        .enumerate()
        .map(|(index, entry)| {
            let (text, topic, difficulty) = match entry {
                RawQuestion::Text(text) => (text, None, None),
                RawQuestion::Full {
                    text,
                    topic,
                    difficulty,
                } => (text, topic, difficulty),
            };
            let text = text.trim();
            if text.is_empty() {
                return Err(QuestionBankError::BlankQuestion { index });
            }
            Ok(Question {
                text: text.to_string(),
                topic: label(topic),
                difficulty: label(difficulty),
            })
        })
        .collect()
}
