//! The filter engine: a pure function deriving the visible subset of
//! questions from the working order, the active criteria, and the mastered
//! set. Called on every state change that could affect membership; an empty
//! result is a valid, displayable state, not an error.

use crate::model::{QuestionBank, QuestionRecord};
use crate::progress::MasteredSet;

/// Tag selection: everything, or a single tag present in the bank.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TagFilter {
    #[default]
    All,
    Tag(String),
}

impl TagFilter {
    pub fn label(&self) -> &str {
        match self {
            TagFilter::All => "all",
            TagFilter::Tag(tag) => tag,
        }
    }

    fn matches(&self, record: &QuestionRecord) -> bool {
        match self {
            TagFilter::All => true,
            TagFilter::Tag(tag) => record.tags.iter().any(|t| t == tag),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct FilterCriteria {
    /// Case-insensitive substring match against question and answer text.
    pub search: String,
    pub tag: TagFilter,
    pub unmastered_only: bool,
}

impl FilterCriteria {
    pub fn is_active(&self) -> bool {
        !self.search.is_empty() || self.tag != TagFilter::All || self.unmastered_only
    }
}

/// Derive the visible subsequence. Output preserves the order of `questions`,
/// which may itself be shuffled or in insertion order.
pub fn filter<'a>(
    questions: &[&'a QuestionRecord],
    criteria: &FilterCriteria,
    mastered: &MasteredSet,
) -> Vec<&'a QuestionRecord> {
    let term = criteria.search.to_lowercase();
    questions
        .iter()
        .copied()
        .filter(|record| {
            let matches_search = term.is_empty()
                || record.question.to_lowercase().contains(&term)
                || record.answer.to_lowercase().contains(&term);
            let matches_mastered = !criteria.unmastered_only || !mastered.contains(record.id);
            matches_search && criteria.tag.matches(record) && matches_mastered
        })
        .collect()
}

/// Unique tags across the bank in first-seen order, for the tag selector.
pub fn all_tags(bank: &QuestionBank) -> Vec<String> {
    let mut tags = Vec::new();
    for record in &bank.qa_bank {
        for tag in &record.tags {
            if !tags.contains(tag) {
                tags.push(tag.clone());
            }
        }
    }
    tags
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::QuestionRecord;

    fn sample() -> Vec<QuestionRecord> {
        vec![
            QuestionRecord::new(1, "What is a perceptron?", "The simplest Neural Network unit.")
                .with_tags(&["ml", "neural-networks"]),
            QuestionRecord::new(2, "What is A*?", "An informed search algorithm.")
                .with_tags(&["search"]),
            QuestionRecord::new(3, "What is overfitting?", "Memorizing the training data.")
                .with_tags(&["ml"]),
        ]
    }

    fn refs(records: &[QuestionRecord]) -> Vec<&QuestionRecord> {
        records.iter().collect()
    }

    #[test]
    fn empty_criteria_passes_everything_in_order() {
        let records = sample();
        let out = filter(&refs(&records), &FilterCriteria::default(), &MasteredSet::new());
        let ids: Vec<u32> = out.iter().map(|q| q.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn search_is_case_insensitive_over_answer_text() {
        let records = sample();
        let criteria = FilterCriteria {
            search: "neural".to_string(),
            ..Default::default()
        };
        let out = filter(&refs(&records), &criteria, &MasteredSet::new());
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].id, 1);
    }

    #[test]
    fn search_matches_question_text_too() {
        let records = sample();
        let criteria = FilterCriteria {
            search: "OVERFITTING".to_string(),
            ..Default::default()
        };
        let out = filter(&refs(&records), &criteria, &MasteredSet::new());
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].id, 3);
    }

    #[test]
    fn tag_filter_requires_membership() {
        let records = sample();
        let criteria = FilterCriteria {
            tag: TagFilter::Tag("ml".to_string()),
            ..Default::default()
        };
        let out = filter(&refs(&records), &criteria, &MasteredSet::new());
        let ids: Vec<u32> = out.iter().map(|q| q.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn unmastered_only_excludes_mastered_ids() {
        let records = sample();
        let mut mastered = MasteredSet::new();
        mastered.toggle(1);
        mastered.toggle(3);
        let criteria = FilterCriteria {
            unmastered_only: true,
            ..Default::default()
        };
        let out = filter(&refs(&records), &criteria, &mastered);
        let ids: Vec<u32> = out.iter().map(|q| q.id).collect();
        assert_eq!(ids, vec![2]);
    }

    #[test]
    fn all_predicates_compose() {
        let records = sample();
        let mut mastered = MasteredSet::new();
        mastered.toggle(3);
        let criteria = FilterCriteria {
            search: "what".to_string(),
            tag: TagFilter::Tag("ml".to_string()),
            unmastered_only: true,
        };
        let out = filter(&refs(&records), &criteria, &mastered);
        let ids: Vec<u32> = out.iter().map(|q| q.id).collect();
        assert_eq!(ids, vec![1]);
    }

    #[test]
    fn empty_result_is_valid() {
        let records = sample();
        let criteria = FilterCriteria {
            search: "no such text anywhere".to_string(),
            ..Default::default()
        };
        let out = filter(&refs(&records), &criteria, &MasteredSet::new());
        assert!(out.is_empty());
    }

    #[test]
    fn output_preserves_shuffled_input_order() {
        let records = sample();
        let reordered: Vec<&QuestionRecord> = vec![&records[2], &records[0], &records[1]];
        let criteria = FilterCriteria {
            tag: TagFilter::Tag("ml".to_string()),
            ..Default::default()
        };
        let out = filter(&reordered, &criteria, &MasteredSet::new());
        let ids: Vec<u32> = out.iter().map(|q| q.id).collect();
        assert_eq!(ids, vec![3, 1]);
    }

    #[test]
    fn all_tags_unique_in_first_seen_order() {
        let bank = QuestionBank::from_records(sample());
        assert_eq!(all_tags(&bank), vec!["ml", "neural-networks", "search"]);
    }
}
