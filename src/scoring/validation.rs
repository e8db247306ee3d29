use std::collections::HashSet;

use crate::bank::{QuestionBank, LIKERT_OPTIONS};

/// Validate a question bank at startup.
/// Returns all validation errors at once (not just the first).
pub fn validate_bank(bank: &QuestionBank) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    if bank.mbti.is_empty() {
        errors.push("mbti: question list is empty".to_string());
    }
    if bank.ocean.is_empty() {
        errors.push("ocean: question list is empty".to_string());
    }

    // Validate MBTI questions
    let mut mbti_ids = HashSet::new();
    for (i, question) in bank.mbti.iter().enumerate() {
        if question.text.trim().is_empty() {
            errors.push(format!("mbti[{}].text: must not be empty", i));
        }
        if question.options.is_empty() {
            errors.push(format!("mbti[{}].options: must not be empty", i));
        } else if question.options.len() != question.dimensions.len() {
            errors.push(format!(
                "mbti[{}].dimensions: {} dimensions for {} options",
                i,
                question.dimensions.len(),
                question.options.len()
            ));
        }
        if !mbti_ids.insert(question.id) {
            errors.push(format!("mbti[{}].id: duplicate id {}", i, question.id));
        }
    }

    // Validate Big Five questions
    let mut ocean_ids = HashSet::new();
    for (i, question) in bank.ocean.iter().enumerate() {
        if question.text.trim().is_empty() {
            errors.push(format!("ocean[{}].text: must not be empty", i));
        }
        if question.options.len() != LIKERT_OPTIONS.len() {
            errors.push(format!(
                "ocean[{}].options: expected {} Likert options, found {}",
                i,
                LIKERT_OPTIONS.len(),
                question.options.len()
            ));
        }
        if !ocean_ids.insert(question.id) {
            errors.push(format!("ocean[{}].id: duplicate id {}", i, question.id));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bank::{MbtiLetter, MbtiQuestion, OceanQuestion, OceanTrait};

    fn valid_mbti_question(id: u32) -> MbtiQuestion {
        MbtiQuestion {
            id,
            text: format!("Question {}", id),
            options: vec!["Yes".to_string(), "No".to_string()],
            dimensions: vec![MbtiLetter::E, MbtiLetter::I],
        }
    }

    fn valid_ocean_question(id: u32) -> OceanQuestion {
        OceanQuestion {
            id,
            text: format!("Statement {}", id),
            options: LIKERT_OPTIONS.iter().map(|s| s.to_string()).collect(),
            dimension: OceanTrait::Openness,
            reverse: false,
        }
    }

    fn valid_bank() -> QuestionBank {
        QuestionBank {
            mbti: vec![valid_mbti_question(1)],
            ocean: vec![valid_ocean_question(1)],
        }
    }

    #[test]
    fn test_valid_bank() {
        assert!(validate_bank(&valid_bank()).is_ok());
    }

    #[test]
    fn test_empty_lists_rejected() {
        let bank = QuestionBank {
            mbti: vec![],
            ocean: vec![],
        };
        let errors = validate_bank(&bank).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert!(errors[0].contains("mbti"));
        assert!(errors[1].contains("ocean"));
    }

    #[test]
    fn test_dimension_count_mismatch() {
        let mut bank = valid_bank();
        bank.mbti[0].dimensions.pop();
        let result = validate_bank(&bank);
        assert!(result.is_err());
        let errors = result.unwrap_err();
        assert!(errors[0].contains("mbti[0].dimensions"));
        assert!(errors[0].contains("1 dimensions for 2 options"));
    }

    #[test]
    fn test_empty_options_rejected() {
        let mut bank = valid_bank();
        bank.mbti[0].options.clear();
        bank.mbti[0].dimensions.clear();
        let result = validate_bank(&bank);
        assert!(result.is_err());
        let errors = result.unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("mbti[0].options"));
    }

    #[test]
    fn test_likert_option_count_enforced() {
        let mut bank = valid_bank();
        bank.ocean[0].options.pop();
        let result = validate_bank(&bank);
        assert!(result.is_err());
        let errors = result.unwrap_err();
        assert!(errors[0].contains("ocean[0].options"));
        assert!(errors[0].contains("expected 5 Likert options, found 4"));
    }

    #[test]
    fn test_blank_text_rejected() {
        let mut bank = valid_bank();
        bank.ocean[0].text = "   ".to_string();
        let errors = validate_bank(&bank).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("ocean[0].text"));
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let mut bank = valid_bank();
        bank.mbti.push(valid_mbti_question(1));
        bank.ocean.push(valid_ocean_question(1));
        let errors = validate_bank(&bank).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert!(errors[0].contains("mbti[1].id: duplicate id 1"));
        assert!(errors[1].contains("ocean[1].id: duplicate id 1"));
    }

    #[test]
    fn test_collects_all_errors() {
        let mut bank = valid_bank();
        bank.mbti[0].text = "  ".to_string(); // Error 1
        bank.mbti[0].dimensions.pop(); // Error 2
        bank.ocean[0].options.pop(); // Error 3
        let result = validate_bank(&bank);
        assert!(result.is_err());
        let errors = result.unwrap_err();
        assert_eq!(errors.len(), 3);
    }
}
