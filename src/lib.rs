//! Personality questionnaires in the terminal: MBTI typing and Big Five
//! trait scores with deterministic, bank-driven scoring.

pub mod bank;
pub mod interactive;
pub mod predictor;
pub mod report;
pub mod scoring;
pub mod tui;
