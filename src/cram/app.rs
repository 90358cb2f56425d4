//! The top-level application controller. One explicit [`App`] value owns all
//! mutable state — bank, working order, filter criteria, mastered set,
//! preferences — and the UI layer dispatches every input event to a method
//! on it. Rendering reads from it and never mutates.
//!
//! Generic over [`DataStore`] so tests run against `InMemoryStore` while the
//! binary uses `FileStore`.

use crate::filter::{self, FilterCriteria, TagFilter};
use crate::model::{Mode, QuestionBank, QuestionRecord};
use crate::progress::MasteredSet;
use crate::session::Session;
use crate::store::{DataStore, Preferences};

pub struct App<S: DataStore> {
    bank: QuestionBank,
    session: Session,
    criteria: FilterCriteria,
    mastered: MasteredSet,
    prefs: Preferences,
    store: S,
    mode: Mode,
    /// Unique bank tags in first-seen order; the tag selector cycles these.
    tags: Vec<String>,
    searching: bool,
    should_quit: bool,
}

impl<S: DataStore> App<S> {
    /// Build the controller, loading persisted state. Storage failures
    /// degrade silently to defaults rather than interrupting startup.
    pub fn new(bank: QuestionBank, store: S) -> Self {
        let prefs = store.load_prefs().unwrap_or_default();
        let mastered = store.load_mastered().unwrap_or_default();
        let tags = filter::all_tags(&bank);
        let session = Session::new(bank.len());
        Self {
            bank,
            session,
            criteria: FilterCriteria::default(),
            mastered,
            prefs,
            store,
            mode: Mode::Menu,
            tags,
            searching: false,
            should_quit: false,
        }
    }

    // --- Derived views ---

    /// The filtered view: recomputed from scratch on every call, so it can
    /// never go stale against the criteria or the mastered set.
    pub fn filtered(&self) -> Vec<&QuestionRecord> {
        let ordered = self.session.ordered(&self.bank);
        filter::filter(&ordered, &self.criteria, &self.mastered)
    }

    pub fn current_question(&self) -> Option<&QuestionRecord> {
        self.filtered().get(self.session.current()).copied()
    }

    pub fn progress_ratio(&self) -> f64 {
        self.mastered.ratio(self.bank.total_questions)
    }

    // --- Accessors ---

    pub fn bank(&self) -> &QuestionBank {
        &self.bank
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn mastered(&self) -> &MasteredSet {
        &self.mastered
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn dark_mode(&self) -> bool {
        self.prefs.dark_mode
    }

    pub fn is_searching(&self) -> bool {
        self.searching
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    // --- Mode and lifecycle ---

    pub fn go_to(&mut self, mode: Mode) {
        self.mode = mode;
        self.searching = false;
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    // --- Navigation ---

    pub fn next(&mut self) {
        let len = self.filtered().len();
        self.session.next(len);
    }

    pub fn previous(&mut self) {
        self.session.previous();
    }

    pub fn jump_to(&mut self, index: usize) {
        let len = self.filtered().len();
        self.session.jump_to(index, len);
    }

    pub fn toggle_answer(&mut self) {
        self.session.toggle_answer();
    }

    // --- Ordering ---

    pub fn shuffle(&mut self) {
        self.session.shuffle(&mut rand::rng());
    }

    pub fn reset_order(&mut self) {
        self.session.reset();
    }

    // --- Filter criteria ---
    //
    // Every mutation reclamps the cursor against the new filtered length,
    // so a shrinking view can never leave it out of bounds.

    pub fn start_search(&mut self) {
        self.searching = true;
    }

    pub fn end_search(&mut self) {
        self.searching = false;
    }

    pub fn push_search_char(&mut self, c: char) {
        self.criteria.search.push(c);
        self.reclamp();
    }

    pub fn pop_search_char(&mut self) {
        self.criteria.search.pop();
        self.reclamp();
    }

    pub fn clear_search(&mut self) {
        self.criteria.search.clear();
        self.searching = false;
        self.reclamp();
    }

    /// Cycle the tag selector: all -> first tag -> ... -> last tag -> all.
    pub fn cycle_tag(&mut self) {
        let next = match &self.criteria.tag {
            TagFilter::All => self.tags.first().cloned().map(TagFilter::Tag),
            TagFilter::Tag(current) => self
                .tags
                .iter()
                .position(|t| t == current)
                .and_then(|pos| self.tags.get(pos + 1))
                .cloned()
                .map(TagFilter::Tag),
        };
        self.criteria.tag = next.unwrap_or(TagFilter::All);
        self.reclamp();
    }

    pub fn toggle_unmastered_only(&mut self) {
        self.criteria.unmastered_only = !self.criteria.unmastered_only;
        self.reclamp();
    }

    fn reclamp(&mut self) {
        let len = self.filtered().len();
        self.session.clamp(len);
    }

    // --- Progress ---

    /// Toggle mastery of the question under the cursor.
    pub fn toggle_mastered_current(&mut self) {
        if let Some(id) = self.current_question().map(|q| q.id) {
            self.toggle_mastered(id);
        }
    }

    /// Toggle mastery of an id and write through. A failed write is ignored:
    /// the in-memory set stays authoritative for the session.
    pub fn toggle_mastered(&mut self, id: u32) {
        self.mastered.toggle(id);
        let _ = self.store.save_mastered(&self.mastered);
        // Mastery changes filtered membership when the unmastered filter is on.
        self.reclamp();
    }

    // --- Preferences ---

    pub fn toggle_dark_mode(&mut self) {
        self.prefs.dark_mode = !self.prefs.dark_mode;
        let _ = self.store.save_prefs(&self.prefs);
    }

    /// One-session override (e.g. the `--dark` flag); not written back.
    pub fn set_dark_mode(&mut self, dark: bool) {
        self.prefs.dark_mode = dark;
    }
}
