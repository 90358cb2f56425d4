//! Question bank loading.
//!
//! The bank is a trusted, read-only JSON document of the form
//! `{ "totalQuestions": N, "qaBank": [...] }`. A default bank ships inside
//! the binary; `--data <path>` points at an alternative file. The document
//! is validated on load: the declared count must match the record count and
//! ids must be unique, since every other module relies on stable ids.

use crate::error::{CramError, Result};
use crate::model::QuestionBank;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

const DEFAULT_BANK: &str = include_str!("../../data/questions.json");

/// Load the bank embedded in the binary.
pub fn load_default() -> Result<QuestionBank> {
    parse(DEFAULT_BANK)
}

/// Load a bank from a JSON file on disk.
pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<QuestionBank> {
    let content = fs::read_to_string(path).map_err(CramError::Io)?;
    parse(&content)
}

fn parse(content: &str) -> Result<QuestionBank> {
    let bank: QuestionBank = serde_json::from_str(content).map_err(CramError::Serialization)?;
    validate(&bank)?;
    Ok(bank)
}

fn validate(bank: &QuestionBank) -> Result<()> {
    if bank.total_questions != bank.qa_bank.len() {
        return Err(CramError::Bank(format!(
            "totalQuestions is {} but the bank holds {} records",
            bank.total_questions,
            bank.qa_bank.len()
        )));
    }
    let mut seen = HashSet::new();
    for record in &bank.qa_bank {
        if !seen.insert(record.id) {
            return Err(CramError::Bank(format!(
                "duplicate question id: {}",
                record.id
            )));
        }
    }
    Ok(())
}
