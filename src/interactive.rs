use std::io::{BufRead, Write};

use anyhow::{Context, Result};

use crate::bank::{MbtiQuestion, OceanQuestion};

/// Prompt with a message and return the trimmed input line.
/// Fails on end of input, so a piped answer file that runs short aborts
/// instead of looping.
fn prompt(message: &str) -> Result<String> {
    print!("{}", message);
    std::io::stdout()
        .flush()
        .context("Failed to flush stdout")?;
    let mut input = String::new();
    let bytes = std::io::stdin()
        .lock()
        .read_line(&mut input)
        .context("Failed to read input")?;
    if bytes == 0 {
        anyhow::bail!("Input ended before the questionnaire was complete");
    }
    Ok(input.trim().to_string())
}

/// Parse a 1-based option number into a 0-based pick.
fn parse_pick(input: &str, option_count: usize) -> Result<usize, String> {
    match input.parse::<usize>() {
        Ok(n) if (1..=option_count).contains(&n) => Ok(n - 1),
        _ => Err(format!(
            "Invalid: must be a number between 1 and {}. Try again.",
            option_count
        )),
    }
}

/// Parse a Likert rating on the 1-5 scale.
fn parse_rating(input: &str) -> Result<u8, String> {
    match input.parse::<u8>() {
        Ok(n) if (1..=5).contains(&n) => Ok(n),
        _ => Err("Invalid: must be a number between 1 and 5. Try again.".to_string()),
    }
}

/// Ask each MBTI question on stdin and collect 0-based option picks.
pub fn run_mbti(questions: &[MbtiQuestion]) -> Result<Vec<usize>> {
    let mut picks = Vec::with_capacity(questions.len());
    for (i, question) in questions.iter().enumerate() {
        println!();
        println!("Question {} of {}", i + 1, questions.len());
        println!("{}", question.text);
        for (j, option) in question.options.iter().enumerate() {
            println!("  {}) {}", j + 1, option);
        }
        let pick = loop {
            let input = prompt("> ")?;
            match parse_pick(&input, question.options.len()) {
                Ok(pick) => break pick,
                Err(msg) => println!("  {}", msg),
            }
        };
        picks.push(pick);
    }
    Ok(picks)
}

/// Ask each Big Five statement on stdin and collect 1-5 ratings.
pub fn run_ocean(questions: &[OceanQuestion]) -> Result<Vec<u8>> {
    if let Some(first) = questions.first() {
        println!();
        println!("Rate each statement from 1 to 5:");
        for (i, label) in first.options.iter().enumerate() {
            println!("  {} = {}", i + 1, label);
        }
    }
    let mut ratings = Vec::with_capacity(questions.len());
    for (i, question) in questions.iter().enumerate() {
        println!();
        println!("Statement {} of {}", i + 1, questions.len());
        println!("{}", question.text);
        let rating = loop {
            let input = prompt("> ")?;
            match parse_rating(&input) {
                Ok(rating) => break rating,
                Err(msg) => println!("  {}", msg),
            }
        };
        ratings.push(rating);
    }
    Ok(ratings)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_pick_valid() {
        assert_eq!(parse_pick("1", 4), Ok(0));
        assert_eq!(parse_pick("4", 4), Ok(3));
    }

    #[test]
    fn test_parse_pick_out_of_range() {
        assert!(parse_pick("0", 4).is_err());
        assert!(parse_pick("5", 4).is_err());
    }

    #[test]
    fn test_parse_pick_not_a_number() {
        let err = parse_pick("abc", 4).unwrap_err();
        assert!(err.contains("between 1 and 4"));
        assert!(parse_pick("", 4).is_err());
    }

    #[test]
    fn test_parse_rating_valid() {
        assert_eq!(parse_rating("1"), Ok(1));
        assert_eq!(parse_rating("5"), Ok(5));
    }

    #[test]
    fn test_parse_rating_rejects_out_of_scale() {
        assert!(parse_rating("0").is_err());
        assert!(parse_rating("6").is_err());
        assert!(parse_rating("yes").is_err());
    }
}
