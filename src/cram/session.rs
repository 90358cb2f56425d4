//! Session state: the working order over the bank (insertion order or a
//! shuffled permutation), the cursor into the filtered view, and the
//! answer-reveal flag. Ordering operations act on the unfiltered working
//! order; the filter engine is reapplied on top of it.

use crate::model::{QuestionBank, QuestionRecord};
use rand::seq::SliceRandom;
use rand::Rng;

#[derive(Debug, Clone)]
pub struct Session {
    /// Permutation of positions into the bank.
    order: Vec<usize>,
    shuffled: bool,
    /// Index into the *filtered* view, not the bank.
    current: usize,
    answer_revealed: bool,
}

impl Session {
    pub fn new(bank_len: usize) -> Self {
        Self {
            order: (0..bank_len).collect(),
            shuffled: false,
            current: 0,
            answer_revealed: false,
        }
    }

    /// The bank in working order, ready to be filtered.
    pub fn ordered<'a>(&self, bank: &'a QuestionBank) -> Vec<&'a QuestionRecord> {
        self.order.iter().filter_map(|&pos| bank.get(pos)).collect()
    }

    /// Fisher-Yates over the full bank order, independent of the current
    /// filter. Rewinds to the first question and hides the answer.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.order.shuffle(rng);
        self.shuffled = true;
        self.rewind();
    }

    /// Restore the bank's insertion order.
    pub fn reset(&mut self) {
        self.order = (0..self.order.len()).collect();
        self.shuffled = false;
        self.rewind();
    }

    fn rewind(&mut self) {
        self.current = 0;
        self.answer_revealed = false;
    }

    pub fn is_shuffled(&self) -> bool {
        self.shuffled
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn answer_revealed(&self) -> bool {
        self.answer_revealed
    }

    /// Advance within a filtered view of `filtered_len` questions. No-op at
    /// the last question.
    pub fn next(&mut self, filtered_len: usize) {
        if self.current + 1 < filtered_len {
            self.current += 1;
            self.answer_revealed = false;
        }
    }

    /// Step back. No-op at the first question.
    pub fn previous(&mut self) {
        if self.current > 0 {
            self.current -= 1;
            self.answer_revealed = false;
        }
    }

    /// Jump directly to a position in the filtered view, clamped to its
    /// bounds (see DESIGN.md).
    pub fn jump_to(&mut self, index: usize, filtered_len: usize) {
        self.current = if filtered_len == 0 {
            0
        } else {
            index.min(filtered_len - 1)
        };
        self.answer_revealed = false;
    }

    /// Re-clamp the cursor after the filtered view changed size.
    pub fn clamp(&mut self, filtered_len: usize) {
        if filtered_len == 0 {
            self.current = 0;
        } else if self.current >= filtered_len {
            self.current = filtered_len - 1;
        }
    }

    pub fn toggle_answer(&mut self) {
        self.answer_revealed = !self.answer_revealed;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{QuestionBank, QuestionRecord};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn bank(n: u32) -> QuestionBank {
        let records = (1..=n)
            .map(|i| QuestionRecord::new(i, format!("q{}", i), format!("a{}", i)))
            .collect();
        QuestionBank::from_records(records)
    }

    fn ids(session: &Session, bank: &QuestionBank) -> Vec<u32> {
        session.ordered(bank).iter().map(|q| q.id).collect()
    }

    #[test]
    fn shuffle_then_reset_restores_original_order() {
        let bank = bank(12);
        let mut session = Session::new(bank.len());
        let original = ids(&session, &bank);

        let mut rng = StdRng::seed_from_u64(42);
        session.shuffle(&mut rng);
        assert!(session.is_shuffled());

        session.reset();
        assert!(!session.is_shuffled());
        assert_eq!(ids(&session, &bank), original);
    }

    #[test]
    fn shuffle_keeps_every_question_exactly_once() {
        let bank = bank(20);
        let mut session = Session::new(bank.len());
        let mut rng = StdRng::seed_from_u64(7);
        session.shuffle(&mut rng);

        let mut shuffled = ids(&session, &bank);
        shuffled.sort_unstable();
        assert_eq!(shuffled, (1..=20).collect::<Vec<u32>>());
    }

    #[test]
    fn shuffle_rewinds_cursor_and_hides_answer() {
        let mut session = Session::new(10);
        session.next(10);
        session.next(10);
        session.toggle_answer();

        let mut rng = StdRng::seed_from_u64(1);
        session.shuffle(&mut rng);
        assert_eq!(session.current(), 0);
        assert!(!session.answer_revealed());
    }

    #[test]
    fn next_and_previous_are_noops_on_single_element_view() {
        let mut session = Session::new(5);
        session.next(1);
        assert_eq!(session.current(), 0);
        session.previous();
        assert_eq!(session.current(), 0);
    }

    #[test]
    fn next_stops_at_last_index() {
        let mut session = Session::new(5);
        session.next(3);
        session.next(3);
        session.next(3);
        session.next(3);
        assert_eq!(session.current(), 2);
    }

    #[test]
    fn navigation_clears_revealed_answer() {
        let mut session = Session::new(5);
        session.toggle_answer();
        assert!(session.answer_revealed());
        session.next(5);
        assert!(!session.answer_revealed());

        session.toggle_answer();
        session.previous();
        assert!(!session.answer_revealed());
    }

    #[test]
    fn failed_navigation_keeps_answer_revealed() {
        let mut session = Session::new(5);
        session.toggle_answer();
        session.previous();
        assert!(session.answer_revealed());
    }

    #[test]
    fn jump_to_clamps_to_filtered_length() {
        let mut session = Session::new(10);
        session.jump_to(5, 3);
        assert_eq!(session.current(), 2);

        session.jump_to(1, 3);
        assert_eq!(session.current(), 1);

        session.jump_to(4, 0);
        assert_eq!(session.current(), 0);
    }

    #[test]
    fn clamp_pulls_cursor_back_when_view_shrinks() {
        let mut session = Session::new(10);
        session.jump_to(7, 10);
        session.clamp(4);
        assert_eq!(session.current(), 3);

        session.clamp(0);
        assert_eq!(session.current(), 0);
    }
}
