use serde::{Deserialize, Serialize};

/// A single study question. Immutable once the bank is loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionRecord {
    pub id: u32,
    pub question: String,
    pub answer: String,
    /// Tag order is display-only; duplicates are permitted.
    #[serde(default)]
    pub tags: Vec<String>,
}

impl QuestionRecord {
    pub fn new(id: u32, question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            id,
            question: question.into(),
            answer: answer.into(),
            tags: Vec::new(),
        }
    }

    pub fn with_tags(mut self, tags: &[&str]) -> Self {
        self.tags = tags.iter().map(|t| t.to_string()).collect();
        self
    }
}

/// The full, ordered question bank. Loaded once at startup, never mutated.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionBank {
    pub total_questions: usize,
    pub qa_bank: Vec<QuestionRecord>,
}

impl QuestionBank {
    /// Build a bank directly from records, keeping the count consistent.
    pub fn from_records(records: Vec<QuestionRecord>) -> Self {
        Self {
            total_questions: records.len(),
            qa_bank: records,
        }
    }

    pub fn len(&self) -> usize {
        self.qa_bank.len()
    }

    pub fn is_empty(&self) -> bool {
        self.qa_bank.is_empty()
    }

    pub fn get(&self, pos: usize) -> Option<&QuestionRecord> {
        self.qa_bank.get(pos)
    }
}

/// Which screen the user is currently on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Menu,
    Flashcard,
    Revision,
}
