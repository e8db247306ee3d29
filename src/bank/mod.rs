mod builtin;
mod types;

pub use types::{
    MbtiLetter, MbtiQuestion, OceanQuestion, OceanTrait, QuestionBank, LIKERT_OPTIONS,
};

use anyhow::{Context, Result};
use rand::seq::SliceRandom;
use std::fs;
use std::path::{Path, PathBuf};

/// Get the config directory path (~/.config/traitcheck/)
pub fn get_config_dir() -> PathBuf {
    let home = dirs::home_dir().expect("Could not determine home directory");
    home.join(".config").join("traitcheck")
}

/// Get the default question bank path (~/.config/traitcheck/questions.yaml)
pub fn get_bank_path() -> PathBuf {
    get_config_dir().join("questions.yaml")
}

/// Load the question bank.
///
/// # Arguments
///
/// * `path` - Optional path to a bank file. If None, uses the default path
///   when a file exists there and falls back to the built-in bank otherwise.
///
/// # Errors
///
/// Returns an error if an explicitly given file does not exist, cannot be
/// read, or contains invalid YAML.
pub fn load_bank(path: Option<PathBuf>) -> Result<QuestionBank> {
    match path {
        Some(bank_path) => {
            if !bank_path.exists() {
                anyhow::bail!("Question bank not found at {}", bank_path.display());
            }
            read_bank_file(&bank_path)
        }
        None => {
            let default_path = get_bank_path();
            if default_path.exists() {
                read_bank_file(&default_path)
            } else {
                Ok(QuestionBank::builtin())
            }
        }
    }
}

fn read_bank_file(path: &Path) -> Result<QuestionBank> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read question bank at {}", path.display()))?;

    let mut bank: QuestionBank = serde_saphyr::from_str(&content)
        .with_context(|| format!("Failed to parse question bank: invalid YAML in {}", path.display()))?;

    // A list left out of the file keeps the built-in questions
    let builtin = QuestionBank::builtin();
    if bank.mbti.is_empty() {
        bank.mbti = builtin.mbti;
    }
    if bank.ocean.is_empty() {
        bank.ocean = builtin.ocean;
    }

    Ok(bank)
}

/// Write the built-in bank as an editable YAML file.
///
/// Refuses to overwrite an existing file unless `force` is set. Returns the
/// path written.
pub fn write_default_bank(path: Option<PathBuf>, force: bool) -> Result<PathBuf> {
    let bank_path = path.unwrap_or_else(get_bank_path);

    if bank_path.exists() && !force {
        anyhow::bail!(
            "Question bank already exists at {} (use --force to overwrite)",
            bank_path.display()
        );
    }

    let yaml = serde_saphyr::to_string(&QuestionBank::builtin())
        .map_err(|e| anyhow::anyhow!("Failed to serialize question bank: {}", e))?;

    if let Some(parent) = bank_path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }

    fs::write(&bank_path, &yaml)
        .with_context(|| format!("Failed to write question bank to {}", bank_path.display()))?;

    Ok(bank_path)
}

impl QuestionBank {
    /// Up to `count` distinct MBTI questions, selected without replacement.
    ///
    /// A count larger than the bank clamps to the bank size. The order of the
    /// returned questions is not stable; scoring always pairs answers with
    /// the bank order, not a sampled order.
    pub fn sample_mbti(&self, count: usize) -> Vec<MbtiQuestion> {
        let mut rng = rand::thread_rng();
        self.mbti
            .choose_multiple(&mut rng, count)
            .cloned()
            .collect()
    }

    /// Up to `count` distinct Big Five questions, selected without replacement.
    pub fn sample_ocean(&self, count: usize) -> Vec<OceanQuestion> {
        let mut rng = rand::thread_rng();
        self.ocean
            .choose_multiple(&mut rng, count)
            .cloned()
            .collect()
    }
}
