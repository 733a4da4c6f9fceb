//! Error types for the interview walker and question bank.

use thiserror::Error;

/// Errors emitted by `QuestionWalker`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum WalkerError {
    /// The answer was empty or only whitespace. Nothing changed.
    #[error("Please enter an answer")]
    EmptyAnswer,
    #[error("an interview needs at least one question")]
    NoQuestions,
}

/// Errors emitted while parsing an embedded question bank.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum QuestionBankError {
    #[error("question bank is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("question bank has no questions")]
    Empty,
    #[error("question {index} has no text")]
    BlankQuestion { index: usize },
}
