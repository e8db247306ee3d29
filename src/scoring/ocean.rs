use std::collections::BTreeMap;

use serde::Serialize;

use super::ScoreError;
use crate::bank::{OceanQuestion, OceanTrait};

/// Score above which a trait reads as High. Exactly 3.5 is Low.
pub const HIGH_THRESHOLD: f64 = 3.5;

/// Qualitative reading of a trait score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TraitLevel {
    High,
    Low,
}

impl TraitLevel {
    pub fn classify(score: f64) -> TraitLevel {
        if score > HIGH_THRESHOLD {
            TraitLevel::High
        } else {
            TraitLevel::Low
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TraitLevel::High => "High",
            TraitLevel::Low => "Low",
        }
    }
}

/// Outcome of scoring a Big Five answer set.
#[derive(Debug, Clone, Serialize)]
pub struct OceanReport {
    /// Average response per trait on the 1-5 scale; 0.0 for a trait no
    /// scored answer touched
    pub scores: BTreeMap<OceanTrait, f64>,

    /// High/Low reading of each score
    pub interpretation: BTreeMap<OceanTrait, TraitLevel>,

    /// Number of answers actually scored
    pub answered: usize,
}

/// Score Likert responses against the question list.
///
/// Responses pair positionally with the questions; responses beyond the
/// question list are ignored. A reverse-keyed item counts a response x as
/// 6 - x. Each trait's score is the average over its items.
///
/// # Errors
///
/// Returns [`ScoreError::AnswerOutOfRange`] for a scored response outside
/// 1-5. Positions in the error are 1-based.
pub fn score_ocean(
    questions: &[OceanQuestion],
    answers: &[u8],
) -> Result<OceanReport, ScoreError> {
    let mut sums: BTreeMap<OceanTrait, u32> = BTreeMap::new();
    let mut counts: BTreeMap<OceanTrait, u32> = BTreeMap::new();

    let answered = answers.len().min(questions.len());
    for (i, (question, &value)) in questions.iter().zip(answers).enumerate() {
        if !(1..=5).contains(&value) {
            return Err(ScoreError::AnswerOutOfRange {
                position: i + 1,
                value,
            });
        }
        let score = if question.reverse { 6 - value } else { value };
        *sums.entry(question.dimension).or_insert(0) += u32::from(score);
        *counts.entry(question.dimension).or_insert(0) += 1;
    }

    let mut scores = BTreeMap::new();
    let mut interpretation = BTreeMap::new();
    for trait_ in OceanTrait::ALL {
        let count = counts.get(&trait_).copied().unwrap_or(0);
        let score = if count > 0 {
            f64::from(sums.get(&trait_).copied().unwrap_or(0)) / f64::from(count)
        } else {
            0.0
        };
        scores.insert(trait_, score);
        interpretation.insert(trait_, TraitLevel::classify(score));
    }

    Ok(OceanReport {
        scores,
        interpretation,
        answered,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bank::{QuestionBank, LIKERT_OPTIONS};

    fn item(id: u32, dimension: OceanTrait, reverse: bool) -> OceanQuestion {
        OceanQuestion {
            id,
            text: format!("Statement {}", id),
            options: LIKERT_OPTIONS.iter().map(|s| s.to_string()).collect(),
            dimension,
            reverse,
        }
    }

    fn extraversion_items() -> Vec<OceanQuestion> {
        vec![
            item(1, OceanTrait::Extraversion, false),
            item(2, OceanTrait::Extraversion, false),
            item(3, OceanTrait::Extraversion, false),
            item(4, OceanTrait::Extraversion, false),
            item(5, OceanTrait::Extraversion, true),
        ]
    }

    #[test]
    fn test_reverse_keyed_average() {
        // Four agrees plus a reversed disagree: (4+4+4+4+4)/5 = 4.0
        let report = score_ocean(&extraversion_items(), &[4, 4, 4, 4, 2]).unwrap();
        assert_eq!(report.scores[&OceanTrait::Extraversion], 4.0);
        assert_eq!(
            report.interpretation[&OceanTrait::Extraversion],
            TraitLevel::High
        );
        assert_eq!(report.answered, 5);
    }

    #[test]
    fn test_reverse_item_inverts_extremes() {
        let items = vec![item(1, OceanTrait::Neuroticism, true)];
        let report = score_ocean(&items, &[5]).unwrap();
        assert_eq!(report.scores[&OceanTrait::Neuroticism], 1.0);
        let report = score_ocean(&items, &[1]).unwrap();
        assert_eq!(report.scores[&OceanTrait::Neuroticism], 5.0);
    }

    #[test]
    fn test_threshold_is_strict() {
        let items = vec![
            item(1, OceanTrait::Openness, false),
            item(2, OceanTrait::Openness, false),
        ];
        // (3+4)/2 = 3.5 sits exactly on the threshold
        let report = score_ocean(&items, &[3, 4]).unwrap();
        assert_eq!(report.scores[&OceanTrait::Openness], 3.5);
        assert_eq!(report.interpretation[&OceanTrait::Openness], TraitLevel::Low);

        let report = score_ocean(&items, &[4, 4]).unwrap();
        assert_eq!(report.interpretation[&OceanTrait::Openness], TraitLevel::High);
    }

    #[test]
    fn test_empty_answers_score_zero() {
        let report = score_ocean(&extraversion_items(), &[]).unwrap();
        assert_eq!(report.answered, 0);
        for trait_ in OceanTrait::ALL {
            assert_eq!(report.scores[&trait_], 0.0);
            assert_eq!(report.interpretation[&trait_], TraitLevel::Low);
        }
    }

    #[test]
    fn test_untouched_trait_scores_zero() {
        let report = score_ocean(&extraversion_items(), &[5, 5, 5, 5, 1]).unwrap();
        assert_eq!(report.scores[&OceanTrait::Extraversion], 5.0);
        assert_eq!(report.scores[&OceanTrait::Openness], 0.0);
        assert_eq!(report.scores[&OceanTrait::Agreeableness], 0.0);
    }

    #[test]
    fn test_out_of_range_rejected() {
        let err = score_ocean(&extraversion_items(), &[0]).unwrap_err();
        assert_eq!(
            err,
            ScoreError::AnswerOutOfRange {
                position: 1,
                value: 0
            }
        );

        let err = score_ocean(&extraversion_items(), &[5, 6]).unwrap_err();
        assert_eq!(
            err,
            ScoreError::AnswerOutOfRange {
                position: 2,
                value: 6
            }
        );
    }

    #[test]
    fn test_extra_answers_ignored() {
        let items = vec![item(1, OceanTrait::Openness, false)];
        let report = score_ocean(&items, &[5, 5, 5]).unwrap();
        assert_eq!(report.answered, 1);
        assert_eq!(report.scores[&OceanTrait::Openness], 5.0);
    }

    #[test]
    fn test_out_of_range_beyond_questions_ignored() {
        // Only the scored prefix is validated
        let items = vec![item(1, OceanTrait::Openness, false)];
        let report = score_ocean(&items, &[5, 9]).unwrap();
        assert_eq!(report.answered, 1);
    }

    #[test]
    fn test_builtin_bank_all_neutral() {
        // 6 - 3 = 3, so reverse keying cannot move a neutral answer
        let bank = QuestionBank::builtin();
        let answers = vec![3u8; bank.ocean.len()];
        let report = score_ocean(&bank.ocean, &answers).unwrap();
        for trait_ in OceanTrait::ALL {
            assert_eq!(report.scores[&trait_], 3.0);
            assert_eq!(report.interpretation[&trait_], TraitLevel::Low);
        }
        assert_eq!(report.answered, 39);
    }
}
