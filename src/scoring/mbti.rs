use std::collections::BTreeMap;

use serde::Serialize;

use crate::bank::{MbtiLetter, MbtiQuestion};

/// Outcome of scoring an MBTI answer set.
#[derive(Debug, Clone, Serialize)]
pub struct MbtiReport {
    /// Four-letter type code, e.g. "INFP"
    pub mbti_type: String,

    /// How clearly the answers lean, in [0.5, 1.0]
    pub confidence: f64,

    /// Each letter's share of its axis; a pair's two entries sum to 1.0
    pub breakdown: BTreeMap<MbtiLetter, f64>,

    /// Number of answers actually scored
    pub answered: usize,
}

/// Score MBTI answers against the question list.
///
/// Answers are 0-based option indices, paired positionally with the
/// questions (first answer, first question). Answers beyond the question
/// list are ignored; an index outside a question's option list counts as
/// the first option. Each pick credits one point to the dimension letter
/// aligned with that option.
///
/// Axes are decided by strict majority, so a tied axis falls to the second
/// letter of its pair (I, N, F, P). Confidence starts at 0.5 and grows with
/// the margin on each axis, capped at 1.0. An axis no answer touched reports
/// 0.5 for both letters.
pub fn score_mbti(questions: &[MbtiQuestion], answers: &[usize]) -> MbtiReport {
    let mut counts: BTreeMap<MbtiLetter, u32> = BTreeMap::new();

    let answered = answers.len().min(questions.len());
    for (question, &pick) in questions.iter().zip(answers) {
        // Unknown picks fall back to the first option
        let letter = question
            .dimensions
            .get(pick)
            .or_else(|| question.dimensions.first());
        if let Some(&letter) = letter {
            *counts.entry(letter).or_insert(0) += 1;
        }
    }
    let count = |letter: MbtiLetter| counts.get(&letter).copied().unwrap_or(0);

    let mut mbti_type = String::with_capacity(4);
    let mut confidence = 0.5;
    let mut breakdown = BTreeMap::new();

    for (first, second) in MbtiLetter::AXES {
        let (a, b) = (count(first), count(second));

        let winner = if a > b { first } else { second };
        mbti_type.push(winner.as_char());

        if answered > 0 {
            confidence += f64::from(a.abs_diff(b)) / (2.0 * answered as f64);
        }

        let axis_total = a + b;
        if axis_total > 0 {
            breakdown.insert(first, f64::from(a) / f64::from(axis_total));
            breakdown.insert(second, f64::from(b) / f64::from(axis_total));
        } else {
            breakdown.insert(first, 0.5);
            breakdown.insert(second, 0.5);
        }
    }

    MbtiReport {
        mbti_type,
        confidence: confidence.min(1.0),
        breakdown,
        answered,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bank::QuestionBank;
    use MbtiLetter::{E, F, I, J, N, P, S, T};

    fn question(id: u32, first: MbtiLetter, second: MbtiLetter) -> MbtiQuestion {
        MbtiQuestion {
            id,
            text: format!("Question {}", id),
            options: vec!["First".to_string(), "Second".to_string()],
            dimensions: vec![first, second],
        }
    }

    /// Two questions per axis, in axis order.
    fn paired_questions() -> Vec<MbtiQuestion> {
        vec![
            question(1, E, I),
            question(2, E, I),
            question(3, S, N),
            question(4, S, N),
            question(5, T, F),
            question(6, T, F),
            question(7, J, P),
            question(8, J, P),
        ]
    }

    #[test]
    fn test_all_first_options() {
        let report = score_mbti(&paired_questions(), &[0; 8]);
        assert_eq!(report.mbti_type, "ESTJ");
        // 0.5 + 4 * (2 / (2*8)) = 1.0
        assert_eq!(report.confidence, 1.0);
        assert_eq!(report.answered, 8);
        assert_eq!(report.breakdown[&E], 1.0);
        assert_eq!(report.breakdown[&I], 0.0);
    }

    #[test]
    fn test_all_second_options() {
        let report = score_mbti(&paired_questions(), &[1; 8]);
        assert_eq!(report.mbti_type, "INFP");
        assert_eq!(report.confidence, 1.0);
    }

    #[test]
    fn test_mixed_answers() {
        // E/I: both E. S/N: split. T/F: both F. J/P: split.
        let answers = [0, 0, 0, 1, 1, 1, 0, 1];
        let report = score_mbti(&paired_questions(), &answers);
        assert_eq!(report.mbti_type, "ENFP");
        // 0.5 + (2 + 0 + 2 + 0) / (2*8) = 0.75
        assert_eq!(report.confidence, 0.75);
        assert_eq!(report.breakdown[&E], 1.0);
        assert_eq!(report.breakdown[&S], 0.5);
        assert_eq!(report.breakdown[&N], 0.5);
        assert_eq!(report.breakdown[&F], 1.0);
        assert_eq!(report.breakdown[&T], 0.0);
    }

    #[test]
    fn test_ties_fall_to_second_letter() {
        // One question per axis pair, alternating picks so every axis ties
        let questions = vec![
            question(1, E, I),
            question(2, I, E),
            question(3, S, N),
            question(4, N, S),
            question(5, T, F),
            question(6, F, T),
            question(7, J, P),
            question(8, P, J),
        ];
        let report = score_mbti(&questions, &[0; 8]);
        assert_eq!(report.mbti_type, "INFP");
        assert_eq!(report.confidence, 0.5);
        for (_, share) in &report.breakdown {
            assert_eq!(*share, 0.5);
        }
    }

    #[test]
    fn test_empty_answers_neutral_defaults() {
        let report = score_mbti(&paired_questions(), &[]);
        assert_eq!(report.mbti_type, "INFP");
        assert_eq!(report.confidence, 0.5);
        assert_eq!(report.answered, 0);
        for (_, share) in &report.breakdown {
            assert_eq!(*share, 0.5);
        }
    }

    #[test]
    fn test_out_of_range_pick_counts_first_option() {
        let questions = vec![question(1, E, I)];
        let report = score_mbti(&questions, &[7]);
        assert_eq!(report.answered, 1);
        assert_eq!(report.breakdown[&E], 1.0);
        assert!(report.mbti_type.starts_with('E'));
    }

    #[test]
    fn test_extra_answers_ignored() {
        let questions = vec![question(1, E, I), question(2, J, P)];
        let report = score_mbti(&questions, &[0, 0, 1, 1, 0]);
        assert_eq!(report.answered, 2);
        assert_eq!(report.breakdown[&E], 1.0);
        assert_eq!(report.breakdown[&J], 1.0);
    }

    #[test]
    fn test_partial_answers_leave_other_axes_neutral() {
        let report = score_mbti(&paired_questions(), &[0, 0]);
        assert_eq!(report.answered, 2);
        assert_eq!(report.breakdown[&E], 1.0);
        // Untouched axes report the neutral split
        assert_eq!(report.breakdown[&S], 0.5);
        assert_eq!(report.breakdown[&J], 0.5);
        // 0.5 + 2/(2*2) = 1.0, so a short clear answer set is still capped
        assert_eq!(report.confidence, 1.0);
    }

    #[test]
    fn test_builtin_bank_all_first_options() {
        let bank = QuestionBank::builtin();
        let report = score_mbti(&bank.mbti, &[0; 20]);
        assert_eq!(report.mbti_type, "ESTJ");
        // 0.5 + (2 + 1 + 5 + 4) / (2*20) = 0.8
        assert!((report.confidence - 0.8).abs() < 1e-9);
        assert_eq!(report.answered, 20);
    }

    #[test]
    fn test_axis_letters_and_pair_sums() {
        let bank = QuestionBank::builtin();
        let answers: Vec<usize> = (0..20).map(|i| i % 4).collect();
        let report = score_mbti(&bank.mbti, &answers);

        let type_letters: Vec<char> = report.mbti_type.chars().collect();
        assert_eq!(type_letters.len(), 4);
        for (i, (first, second)) in MbtiLetter::AXES.iter().enumerate() {
            assert!(type_letters[i] == first.as_char() || type_letters[i] == second.as_char());
            let pair_sum = report.breakdown[first] + report.breakdown[second];
            assert!((pair_sum - 1.0).abs() < 1e-9);
        }
        assert!(report.confidence >= 0.5 && report.confidence <= 1.0);
    }
}
