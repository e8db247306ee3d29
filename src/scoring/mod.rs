pub mod mbti;
pub mod ocean;
pub mod validation;

pub use mbti::{score_mbti, MbtiReport};
pub use ocean::{score_ocean, OceanReport, TraitLevel, HIGH_THRESHOLD};
pub use validation::validate_bank;

use std::fmt;

use crate::bank::QuestionBank;

/// An answer set that cannot be scored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreError {
    /// A Likert response outside the 1-5 scale. `position` is 1-based.
    AnswerOutOfRange { position: usize, value: u8 },
}

impl fmt::Display for ScoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScoreError::AnswerOutOfRange { position, value } => {
                write!(f, "answer {} is {}, expected 1-5", position, value)
            }
        }
    }
}

impl std::error::Error for ScoreError {}

/// Result of a completed questionnaire, either kind.
#[derive(Debug, Clone)]
pub enum TestOutcome {
    Mbti(MbtiReport),
    Ocean(OceanReport),
}

/// Scoring engine over a borrowed question bank.
///
/// Scoring never mutates the bank; every call is a pure function of the
/// bank and the answers.
pub struct Scorer<'a> {
    bank: &'a QuestionBank,
}

impl<'a> Scorer<'a> {
    pub fn new(bank: &'a QuestionBank) -> Self {
        Self { bank }
    }

    /// Score MBTI answers, given as 0-based option indices paired
    /// positionally with the bank's MBTI questions.
    pub fn score_mbti(&self, answers: &[usize]) -> MbtiReport {
        mbti::score_mbti(&self.bank.mbti, answers)
    }

    /// Score Big Five Likert responses (1-5) paired positionally with the
    /// bank's Big Five questions.
    pub fn score_ocean(&self, answers: &[u8]) -> Result<OceanReport, ScoreError> {
        ocean::score_ocean(&self.bank.ocean, answers)
    }
}
