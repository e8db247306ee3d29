use std::io::IsTerminal;

use owo_colors::OwoColorize;
use terminal_size::{terminal_size, Width};

use crate::bank::{MbtiLetter, MbtiQuestion, OceanQuestion, OceanTrait};
use crate::report::profiles::TypeProfile;
use crate::scoring::{MbtiReport, OceanReport, TraitLevel};

/// Bar width for the per-axis MBTI breakdown
const AXIS_BAR_WIDTH: usize = 10;

/// Bar width for Big Five trait scores
const TRAIT_BAR_WIDTH: usize = 20;

/// Top of the Likert scale, for scaling trait bars
const LIKERT_MAX: f64 = 5.0;

/// Format an MBTI report as a multi-line summary
/// Shows the type heading, one bar pair per axis, and the confidence
pub fn format_mbti_report(report: &MbtiReport, use_colors: bool) -> String {
    let profile = TypeProfile::lookup(&report.mbti_type);

    let mut lines = Vec::new();
    let heading = match profile {
        Some(profile) => format!("{} - {}", report.mbti_type, profile.name),
        None => report.mbti_type.clone(),
    };
    if use_colors {
        lines.push(format!("{}", heading.bold()));
    } else {
        lines.push(heading);
    }
    if let Some(profile) = profile {
        if use_colors {
            lines.push(format!("{}", profile.description.dimmed()));
        } else {
            lines.push(profile.description.to_string());
        }
    }
    lines.push(String::new());

    for (first, second) in MbtiLetter::AXES {
        let share_first = report.breakdown.get(&first).copied().unwrap_or(0.5);
        let share_second = report.breakdown.get(&second).copied().unwrap_or(0.5);
        if use_colors {
            lines.push(format!(
                "{} {} {:>3.0}%   {} {} {:>3.0}%",
                first.as_char(),
                ratio_bar(share_first, AXIS_BAR_WIDTH).cyan(),
                share_first * 100.0,
                second.as_char(),
                ratio_bar(share_second, AXIS_BAR_WIDTH).cyan(),
                share_second * 100.0
            ));
        } else {
            lines.push(format!(
                "{} {} {:>3.0}%   {} {} {:>3.0}%",
                first.as_char(),
                ratio_bar(share_first, AXIS_BAR_WIDTH),
                share_first * 100.0,
                second.as_char(),
                ratio_bar(share_second, AXIS_BAR_WIDTH),
                share_second * 100.0
            ));
        }
    }

    lines.push(String::new());
    lines.push(format!("Confidence: {:.0}%", report.confidence * 100.0));
    if report.answered == 0 {
        lines.push("No answers were scored; this is the neutral default.".to_string());
    } else {
        lines.push(format!("Based on {} answers", report.answered));
    }

    lines.join("\n")
}

/// Format a Big Five report as one bar line per trait
pub fn format_ocean_report(report: &OceanReport, use_colors: bool) -> String {
    let name_width = OceanTrait::ALL
        .iter()
        .map(|t| t.name().len())
        .max()
        .unwrap_or(0);

    let mut lines = Vec::new();
    for trait_ in OceanTrait::ALL {
        let score = report.scores.get(&trait_).copied().unwrap_or(0.0);
        let level = report
            .interpretation
            .get(&trait_)
            .copied()
            .unwrap_or(TraitLevel::Low);
        let name = format!("{:<width$}", trait_.name(), width = name_width);
        let bar = ratio_bar(score / LIKERT_MAX, TRAIT_BAR_WIDTH);
        if use_colors {
            let level_label = match level {
                TraitLevel::High => format!("{}", "High".green()),
                TraitLevel::Low => format!("{}", "Low".yellow()),
            };
            lines.push(format!("{}  {:.1}  {}  {}", name, score, bar.cyan(), level_label));
        } else {
            lines.push(format!("{}  {:.1}  {}  {}", name, score, bar, level.as_str()));
        }
    }

    lines.push(String::new());
    if report.answered == 0 {
        lines.push("No answers were scored.".to_string());
    } else {
        lines.push(format!("Based on {} answers", report.answered));
    }

    lines.join("\n")
}

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// Get terminal width, defaulting to None for pipes (unlimited)
fn get_terminal_width() -> Option<usize> {
    terminal_size().map(|(Width(w), _)| w as usize)
}

/// Truncate text to fit available width, accounting for Unicode
fn truncate_text(text: &str, max_width: usize) -> String {
    let chars: Vec<char> = text.chars().collect();
    if chars.len() <= max_width {
        text.to_string()
    } else if max_width > 3 {
        format!("{}...", chars[..max_width - 3].iter().collect::<String>())
    } else {
        chars[..max_width].iter().collect()
    }
}

/// A fill/empty bar for a ratio in [0, 1]
fn ratio_bar(ratio: f64, width: usize) -> String {
    let ratio = ratio.clamp(0.0, 1.0);
    let filled = ((ratio * width as f64).round() as usize).min(width);
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format MBTI questions as numbered prompts with their options
/// Dimension letters are internal and not shown here
pub fn format_mbti_questions(questions: &[MbtiQuestion], use_colors: bool) -> String {
    if questions.is_empty() {
        return "No questions in the bank.".to_string();
    }

    let mut lines = Vec::new();
    for question in questions {
        let header = format!("{:>2}. {}", question.id, question.text);
        if use_colors {
            lines.push(format!("{}", header.bold()));
        } else {
            lines.push(header);
        }
        for (i, option) in question.options.iter().enumerate() {
            lines.push(format!("     {}) {}", i + 1, option));
        }
        lines.push(String::new());
    }
    // Drop the trailing blank line
    lines.pop();
    lines.join("\n")
}

/// Format Big Five statements as a numbered list under a shared scale line
pub fn format_ocean_questions(questions: &[OceanQuestion], use_colors: bool) -> String {
    if questions.is_empty() {
        return "No questions in the bank.".to_string();
    }

    let mut lines = Vec::new();
    if let Some(first) = questions.first() {
        let scale = first
            .options
            .iter()
            .enumerate()
            .map(|(i, label)| format!("{} {}", i + 1, label))
            .collect::<Vec<_>>()
            .join("  ");
        let header = format!("Rate 1-5: {}", scale);
        if use_colors {
            lines.push(format!("{}", header.dimmed()));
        } else {
            lines.push(header);
        }
        lines.push(String::new());
    }
    for question in questions {
        lines.push(format!("{:>2}. {}", question.id, question.text));
    }
    lines.join("\n")
}

/// Format MBTI questions as tab-separated values for scripting
/// Columns: id, text, options joined by '|', dimension letters (no headers)
pub fn format_mbti_questions_tsv(questions: &[MbtiQuestion]) -> String {
    if questions.is_empty() {
        return String::new();
    }

    questions
        .iter()
        .map(|question| {
            let letters: String = question.dimensions.iter().map(|d| d.as_char()).collect();
            format!(
                "{}\t{}\t{}\t{}",
                question.id,
                question.text,
                question.options.join("|"),
                letters
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format Big Five questions as tab-separated values for scripting
/// Columns: id, text, trait letter, reverse flag (no headers)
pub fn format_ocean_questions_tsv(questions: &[OceanQuestion]) -> String {
    if questions.is_empty() {
        return String::new();
    }

    questions
        .iter()
        .map(|question| {
            format!(
                "{}\t{}\t{}\t{}",
                question.id,
                question.text,
                question.dimension.letter(),
                question.reverse
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format the type catalog as an aligned table: code, name, description
pub fn format_types_table(profiles: &[TypeProfile], use_colors: bool) -> String {
    if profiles.is_empty() {
        return String::new();
    }

    let term_width = get_terminal_width();
    let name_width = profiles.iter().map(|p| p.name.len()).max().unwrap_or(0);

    profiles
        .iter()
        .map(|profile| {
            let code = format!("{:<4}", profile.code);
            let name = format!("{:<width$}", profile.name, width = name_width);

            // code + separator + name + separator
            let fixed_width = 4 + 2 + name_width + 2;
            let description = match term_width {
                Some(width) if width > fixed_width + 10 => {
                    truncate_text(profile.description, width - fixed_width)
                }
                Some(_) => truncate_text(profile.description, 30),
                None => profile.description.to_string(),
            };

            if use_colors {
                format!("{}  {}  {}", code.bold(), name, description)
            } else {
                format!("{}  {}  {}", code, name, description)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format the type catalog as tab-separated values for scripting
/// Columns: code, name, description (no headers, no colors)
pub fn format_types_tsv(profiles: &[TypeProfile]) -> String {
    profiles
        .iter()
        .map(|profile| format!("{}\t{}\t{}", profile.code, profile.name, profile.description))
        .collect::<Vec<_>>()
        .join("\n")
}
