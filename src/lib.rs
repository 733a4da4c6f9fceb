pub mod error;
pub mod questions;
pub mod walker;

pub use error::{QuestionBankError, WalkerError};
pub use questions::{default_questions, parse_question_bank, Question, QUESTION_BANK_ELEMENT_ID};
pub use walker::{Prompt, QuestionWalker, Step, WalkerState, COMPLETION_MESSAGE};
