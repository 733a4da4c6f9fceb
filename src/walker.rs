//! The interview loop: one question at a time until the list runs out.
//!
//! `QuestionWalker` is a pure state machine. It never touches the page; the
//! caller renders `prompt()` after each `submit`.

use crate::error::WalkerError;
use crate::questions::Question;

/// Shown in place of a question once every question has been answered.
pub const COMPLETION_MESSAGE: &str = "Interview Completed. Thank you!";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WalkerState {
    Active,
    Completed,
}

/// What the prompt region should currently display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Prompt<'a> {
    Question(&'a Question),
    Completed,
}

impl<'a> Prompt<'a> {
    pub fn text(&self) -> &'a str {
        match self {
            Prompt::Question(q) => q.text.as_str(),
            Prompt::Completed => COMPLETION_MESSAGE,
        }
    }
}

/// Outcome of an accepted submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Moved on to the question at this cursor.
    Advanced { cursor: usize },
    /// The last question was answered.
    Completed,
    /// Already completed; the submission was dropped.
    Ignored,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionWalker {
    questions: Vec<Question>,
    cursor: usize,
}

impl QuestionWalker {
    /// Start an interview at the first question.
    ///
    /// # Errors
    ///
    /// Returns `WalkerError::NoQuestions` when `questions` is empty.
    pub fn new(questions: Vec<Question>) -> Result<Self, WalkerError> {
        if questions.is_empty() {
            return Err(WalkerError::NoQuestions);
        }
        Ok(Self {
            questions,
            cursor: 0,
        })
    }

    /// Accept an answer and move to the next question.
    ///
    /// The answer text is only checked for blankness and then dropped.
    ///
    /// # Errors
    ///
    /// Returns `WalkerError::EmptyAnswer` for an empty or whitespace-only
    /// answer; the walker is left untouched.
    pub fn submit(&mut self, answer: &str) -> Result<Step, WalkerError> {
        if answer.trim().is_empty() {
            return Err(WalkerError::EmptyAnswer);
        }
        if self.is_complete() {
            return Ok(Step::Ignored);
        }

        self.cursor += 1;
        if self.is_complete() {
            Ok(Step::Completed)
        } else {
            Ok(Step::Advanced {
                cursor: self.cursor,
            })
        }
    }

    pub fn prompt(&self) -> Prompt<'_> {
        match self.questions.get(self.cursor) {
            Some(q) => Prompt::Question(q),
            None => Prompt::Completed,
        }
    }

    pub fn state(&self) -> WalkerState {
        if self.is_complete() {
            WalkerState::Completed
        } else {
            WalkerState::Active
        }
    }

    pub fn is_complete(&self) -> bool {
        self.cursor >= self.questions.len()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    // Never true: construction rejects an empty list.
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// `(answered, total)`.
    pub fn progress(&self) -> (usize, usize) {
        (self.cursor, self.questions.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn walker(texts: &[&str]) -> QuestionWalker {
        QuestionWalker::new(texts.iter().map(|t| Question::new(*t)).collect()).unwrap()
    }

    #[test]
    fn starts_on_first_question() {
        let w = walker(&["Q0", "Q1"]);
        assert_eq!(w.cursor(), 0);
        assert_eq!(w.prompt().text(), "Q0");
        assert_eq!(w.state(), WalkerState::Active);
        assert_eq!(w.progress(), (0, 2));
    }

    #[test]
    fn empty_sequence_is_rejected() {
        assert_eq!(QuestionWalker::new(vec![]), Err(WalkerError::NoQuestions));
    }

    #[test]
    fn blank_answers_change_nothing() {
        let mut w = walker(&["Q0", "Q1"]);
        for blank in ["", " ", "\n\t  "] {
            assert_eq!(w.submit(blank), Err(WalkerError::EmptyAnswer));
            assert_eq!(w.cursor(), 0);
            assert_eq!(w.prompt().text(), "Q0");
        }
    }

    #[test]
    fn answer_advances_by_one() {
        let mut w = walker(&["Q0", "Q1", "Q2"]);
        assert_eq!(w.submit("because"), Ok(Step::Advanced { cursor: 1 }));
        assert_eq!(w.prompt().text(), "Q1");
        assert_eq!(w.progress(), (1, 3));
    }

    #[test]
    fn last_answer_completes() {
        let mut w = walker(&["Only"]);
        assert_eq!(w.submit("done"), Ok(Step::Completed));
        assert_eq!(w.cursor(), 1);
        assert_eq!(w.state(), WalkerState::Completed);
        assert_eq!(w.prompt(), Prompt::Completed);
        assert_eq!(w.prompt().text(), COMPLETION_MESSAGE);
    }

    #[test]
    fn submissions_after_completion_are_ignored() {
        let mut w = walker(&["Q0"]);
        w.submit("a").unwrap();
        for _ in 0..3 {
            assert_eq!(w.submit("again"), Ok(Step::Ignored));
            assert_eq!(w.cursor(), 1);
            assert_eq!(w.prompt().text(), COMPLETION_MESSAGE);
        }
        // Blank is still reported so the field behaves the same in both states.
        assert_eq!(w.submit(""), Err(WalkerError::EmptyAnswer));
        assert_eq!(w.cursor(), 1);
    }

    #[test]
    fn prompt_exposes_labels() {
        let q = Question::new("Explain ownership.").with_topic("Rust");
        let w = QuestionWalker::new(vec![q.clone()]).unwrap();
        assert_eq!(w.prompt(), Prompt::Question(&q));
    }
}
