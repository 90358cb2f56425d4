//! Terminal front end: raw-mode setup, the event loop, and per-screen key
//! dispatch. Everything here is presentation — state transitions happen on
//! [`App`] methods, and each screen renders purely from the current state.

mod flashcard;
mod menu;
mod revision;
pub mod theme;

use crate::app::App;
use crate::error::Result;
use crate::model::Mode;
use crate::store::DataStore;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::{Frame, Terminal};
use std::io;
use std::time::Duration;
use theme::Theme;
use unicode_width::UnicodeWidthChar;

pub type Tui = Terminal<CrosstermBackend<io::Stdout>>;

/// Run the full-screen session: set up the terminal, drive the event loop,
/// and restore the terminal even when the loop errors.
pub fn run<S: DataStore>(app: &mut App<S>) -> Result<()> {
    let mut terminal = init()?;
    let result = event_loop(&mut terminal, app);
    let restored = restore(&mut terminal);
    first_error(result, restored)
}

/// An event-loop error outranks a teardown error; teardown is best-effort.
fn first_error(result: Result<()>, restored: Result<()>) -> Result<()> {
    match result {
        Err(e) => Err(e),
        Ok(()) => restored,
    }
}

fn init() -> Result<Tui> {
    enable_raw_mode()?;
    execute!(io::stdout(), EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;
    terminal.hide_cursor()?;
    Ok(terminal)
}

fn restore(terminal: &mut Tui) -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

fn event_loop<S: DataStore>(terminal: &mut Tui, app: &mut App<S>) -> Result<()> {
    while !app.should_quit() {
        terminal.draw(|frame| render(frame, app))?;
        if event::poll(Duration::from_millis(250))? {
            // Only key presses: crossterm also emits release and repeat
            // events on some platforms.
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    handle_key(app, key);
                }
            }
        }
    }
    Ok(())
}

fn render<S: DataStore>(frame: &mut Frame, app: &App<S>) {
    let theme = Theme::select(app.dark_mode());
    let base = Block::default().style(Style::default().bg(theme.bg).fg(theme.fg));
    frame.render_widget(base, frame.area());

    match app.mode() {
        Mode::Menu => menu::render(frame, app, &theme),
        Mode::Flashcard => flashcard::render(frame, app, &theme),
        Mode::Revision => revision::render(frame, app, &theme),
    }
}

fn handle_key<S: DataStore>(app: &mut App<S>, key: KeyEvent) {
    // Ctrl+C always quits, even while the search bar is focused.
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.quit();
        return;
    }

    if app.is_searching() {
        handle_search_key(app, key);
        return;
    }

    match app.mode() {
        Mode::Menu => handle_menu_key(app, key),
        Mode::Flashcard => handle_flashcard_key(app, key),
        Mode::Revision => handle_revision_key(app, key),
    }
}

fn handle_search_key<S: DataStore>(app: &mut App<S>, key: KeyEvent) {
    match key.code {
        KeyCode::Enter | KeyCode::Esc => app.end_search(),
        KeyCode::Backspace => app.pop_search_char(),
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.push_search_char(c)
        }
        _ => {}
    }
}

fn handle_menu_key<S: DataStore>(app: &mut App<S>, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.quit(),
        KeyCode::Char('f') | KeyCode::Char('1') => app.go_to(Mode::Flashcard),
        KeyCode::Char('r') | KeyCode::Char('2') => app.go_to(Mode::Revision),
        KeyCode::Char('d') => app.toggle_dark_mode(),
        _ => {}
    }
}

fn handle_flashcard_key<S: DataStore>(app: &mut App<S>, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') => app.go_to(Mode::Menu),
        KeyCode::Left | KeyCode::Char('h') => app.previous(),
        KeyCode::Right | KeyCode::Char('l') => app.next(),
        KeyCode::Char(' ') | KeyCode::Enter => app.toggle_answer(),
        KeyCode::Char('m') => app.toggle_mastered_current(),
        KeyCode::Char('s') => app.shuffle(),
        KeyCode::Char('r') => app.reset_order(),
        KeyCode::Char('/') => app.start_search(),
        KeyCode::Char('t') => app.cycle_tag(),
        KeyCode::Char('u') => app.toggle_unmastered_only(),
        KeyCode::Char('d') => app.toggle_dark_mode(),
        KeyCode::Char(ch) if ('1'..='5').contains(&ch) => {
            // Quick-jump: digits address the visible window around the cursor.
            let slot = (ch as usize) - ('1' as usize);
            let start = app.session().current().saturating_sub(2);
            app.jump_to(start + slot);
        }
        _ => {}
    }
}

fn handle_revision_key<S: DataStore>(app: &mut App<S>, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') => app.go_to(Mode::Menu),
        KeyCode::Up | KeyCode::Char('k') => app.previous(),
        KeyCode::Down | KeyCode::Char('j') => app.next(),
        KeyCode::Char('m') => app.toggle_mastered_current(),
        KeyCode::Char('s') => app.shuffle(),
        KeyCode::Char('r') => app.reset_order(),
        KeyCode::Char('/') => app.start_search(),
        KeyCode::Char('t') => app.cycle_tag(),
        KeyCode::Char('u') => app.toggle_unmastered_only(),
        KeyCode::Char('d') => app.toggle_dark_mode(),
        _ => {}
    }
}

/// The filter bar shared by the flashcard and revision screens: search term,
/// tag selection, unmastered toggle, and the shuffle marker.
fn filter_bar<'a, S: DataStore>(
    app: &App<S>,
    theme: &Theme,
) -> ratatui::widgets::Paragraph<'a> {
    use ratatui::style::Modifier;
    use ratatui::text::{Line, Span};
    use ratatui::widgets::Paragraph;

    let criteria = app.criteria();
    let mut spans = vec![Span::styled("Search: ", Style::default().fg(theme.muted))];
    if app.is_searching() {
        spans.push(Span::styled(
            format!("{}▏", criteria.search),
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        ));
    } else if criteria.search.is_empty() {
        spans.push(Span::styled(
            "(press / to type)",
            Style::default().fg(theme.muted),
        ));
    } else {
        spans.push(Span::raw(criteria.search.clone()));
    }

    spans.push(Span::styled("   Tag: ", Style::default().fg(theme.muted)));
    spans.push(Span::styled(
        criteria.tag.label().to_string(),
        Style::default().fg(theme.accent),
    ));

    if criteria.unmastered_only {
        spans.push(Span::styled(
            "   [unmastered only]",
            Style::default().fg(theme.mastered),
        ));
    }
    if app.session().is_shuffled() {
        spans.push(Span::styled(
            "   [shuffled]",
            Style::default().fg(theme.accent),
        ));
    }

    Paragraph::new(Line::from(spans))
        .block(Block::bordered().border_style(Style::default().fg(theme.muted)))
}

/// Center a box of the given percentage size within `area`.
pub(crate) fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}

/// Truncate to a display width, appending an ellipsis when cut short.
pub(crate) fn truncate_to_width(s: &str, max_width: usize) -> String {
    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CramError;
    use crate::model::{QuestionBank, QuestionRecord};
    use crate::progress::MasteredSet;
    use crate::store::memory::InMemoryStore;
    use ratatui::backend::TestBackend;

    #[test]
    fn loop_error_outranks_teardown_error() {
        let result = first_error(
            Err(CramError::Store("loop failed".to_string())),
            Err(CramError::Store("teardown failed".to_string())),
        );
        assert!(matches!(result, Err(CramError::Store(msg)) if msg == "loop failed"));

        assert!(first_error(Ok(()), Ok(())).is_ok());
        let teardown_only = first_error(Ok(()), Err(CramError::Store("x".to_string())));
        assert!(teardown_only.is_err());
    }

    #[test]
    fn every_screen_renders_with_stale_mastered_ids() {
        // A persisted set larger than the loaded bank must not break the
        // progress gauge or any other widget.
        let mut store = InMemoryStore::new();
        let mut persisted = MasteredSet::new();
        for id in 1..=10 {
            persisted.toggle(id);
        }
        store.save_mastered(&persisted).unwrap();

        let bank = QuestionBank::from_records(vec![
            QuestionRecord::new(1, "What is a heuristic?", "A guiding estimate.")
                .with_tags(&["search"]),
            QuestionRecord::new(2, "What is entropy?", "A measure of uncertainty."),
        ]);
        let mut app = App::new(bank, store);

        let mut terminal = Terminal::new(TestBackend::new(40, 16)).unwrap();
        for mode in [Mode::Menu, Mode::Flashcard, Mode::Revision] {
            app.go_to(mode);
            terminal.draw(|frame| render(frame, &app)).unwrap();
        }
    }

    #[test]
    fn truncate_leaves_short_strings_alone() {
        assert_eq!(truncate_to_width("short", 20), "short");
    }

    #[test]
    fn truncate_cuts_at_display_width_with_ellipsis() {
        let cut = truncate_to_width("a rather long question text", 10);
        assert!(cut.ends_with('…'));
        assert!(cut.chars().count() <= 10);
    }
}
