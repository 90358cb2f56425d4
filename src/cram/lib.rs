//! # Cram Architecture
//!
//! Cram is a **UI-agnostic study library** with a terminal front end. The
//! split matters: everything a study session can do — filtering, ordering,
//! mastery tracking, preferences — lives in plain Rust types with no terminal
//! assumptions, and the `ui` module is a thin ratatui shell over it.
//!
//! ## The Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  UI Layer (ui/, wired by main.rs)                           │
//! │  - Raw mode, the event loop, per-screen rendering           │
//! │  - The ONLY place that knows about the terminal             │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Controller (app.rs)                                        │
//! │  - One App value owns all mutable session state             │
//! │  - Every key press maps to exactly one App method           │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Domain (bank, filter, session, progress)                   │
//! │  - Pure functions and small state machines                  │
//! │  - No I/O assumptions whatsoever                            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - Abstract DataStore trait                                 │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: the View Is Always Derived
//!
//! The filtered question list is never cached. [`app::App::filtered`]
//! recomputes it from the session order, the filter criteria, and the
//! mastered set on every call, so there is no stale-view state to manage —
//! only the cursor needs reclamping when the view shrinks.
//!
//! ## Testing Strategy
//!
//! Domain modules carry unit tests next to the logic. `app.rs` tests the
//! controller against [`store::memory::InMemoryStore`], which also counts
//! writes so persistence behavior is observable. The `tests/` directory
//! drives whole study flows through the public API.
//!
//! ## Module Overview
//!
//! - [`app`]: The session controller — entry point for all operations
//! - [`bank`]: Question bank loading and validation
//! - [`filter`]: Search, tag, and mastery filtering
//! - [`session`]: Cursor, ordering (shuffle/reset), answer reveal
//! - [`progress`]: The persisted mastered set
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: Core data types (`QuestionRecord`, `QuestionBank`, `Mode`)
//! - [`error`]: Error types
//! - [`ui`]: Terminal rendering and key dispatch for the binary

pub mod app;
pub mod bank;
pub mod error;
pub mod filter;
pub mod model;
pub mod progress;
pub mod session;
pub mod store;
pub mod ui;
