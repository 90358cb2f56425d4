use super::{centered_rect, theme::Theme};
use crate::app::App;
use crate::store::DataStore;
use ratatui::layout::{Alignment, Constraint, Direction, Layout};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Gauge, Paragraph};
use ratatui::Frame;

pub fn render<S: DataStore>(frame: &mut Frame, app: &App<S>, theme: &Theme) {
    let area = centered_rect(70, 80, frame.area());
    let outer = Block::bordered().border_style(Style::default().fg(theme.muted));
    let inner = outer.inner(area);
    frame.render_widget(outer, area);

    let sections = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // title block
            Constraint::Length(5), // mode launchers
            Constraint::Length(3), // progress
            Constraint::Min(0),
            Constraint::Length(1), // hints
        ])
        .split(inner);

    let title = Paragraph::new(vec![
        Line::from(Span::styled(
            "cram",
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "flashcard and revision study tool",
            Style::default().fg(theme.fg),
        )),
        Line::from(Span::styled(
            format!("{} questions available", app.bank().total_questions),
            Style::default().fg(theme.muted),
        )),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(title, sections[0]);

    let launchers = Paragraph::new(vec![
        Line::from(""),
        Line::from(vec![
            Span::styled("[f] ", Style::default().fg(theme.accent)),
            Span::raw("Flashcards — step through one card at a time, reveal answers"),
        ]),
        Line::from(vec![
            Span::styled("[r] ", Style::default().fg(theme.accent)),
            Span::raw("Revision — browse every question with its answer"),
        ]),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(launchers, sections[1]);

    let mastered = app.mastered().len();
    let total = app.bank().total_questions;
    let progress_rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1)])
        .split(sections[2]);
    let label = Paragraph::new(Line::from(vec![
        Span::styled("Mastered: ", Style::default().fg(theme.fg)),
        Span::styled(
            format!("{} / {}", mastered, total),
            Style::default()
                .fg(theme.mastered)
                .add_modifier(Modifier::BOLD),
        ),
    ]))
    .alignment(Alignment::Center);
    frame.render_widget(label, progress_rows[0]);

    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(theme.mastered).bg(theme.bg))
        .ratio(app.progress_ratio())
        .label(format!("{:.0}%", app.progress_ratio() * 100.0));
    frame.render_widget(gauge, progress_rows[1]);

    let hints = Paragraph::new(Span::styled(
        "[f] flashcards  [r] revision  [d] dark mode  [q] quit",
        Style::default().fg(theme.muted),
    ))
    .alignment(Alignment::Center);
    frame.render_widget(hints, sections[4]);
}
