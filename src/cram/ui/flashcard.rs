use super::{filter_bar, theme::Theme, truncate_to_width};
use crate::app::App;
use crate::store::DataStore;
use ratatui::layout::{Alignment, Constraint, Direction, Layout};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Wrap};
use ratatui::Frame;
use unicode_width::UnicodeWidthStr;

pub fn render<S: DataStore>(frame: &mut Frame, app: &App<S>, theme: &Theme) {
    let sections = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // filter bar
            Constraint::Length(1), // position
            Constraint::Min(7),    // the card
            Constraint::Length(1), // quick-jump window
            Constraint::Length(1), // hints
        ])
        .split(frame.area());

    frame.render_widget(filter_bar(app, theme), sections[0]);

    let filtered = app.filtered();
    let current = app.session().current();

    let position = if filtered.is_empty() {
        "No questions match your filters".to_string()
    } else {
        format!("Question {} of {}", current + 1, filtered.len())
    };
    let position = Paragraph::new(Span::styled(
        position,
        Style::default()
            .fg(theme.accent)
            .add_modifier(Modifier::BOLD),
    ))
    .alignment(Alignment::Center);
    frame.render_widget(position, sections[1]);

    let card_block = Block::bordered().border_style(Style::default().fg(theme.muted));
    let card_area = card_block.inner(sections[2]);
    frame.render_widget(card_block, sections[2]);

    match filtered.get(current) {
        Some(question) => {
            let mut lines = Vec::new();
            let mastered_mark = if app.mastered().contains(question.id) {
                Span::styled("  ✓ mastered", Style::default().fg(theme.mastered))
            } else {
                Span::raw("")
            };
            lines.push(Line::from(vec![
                Span::styled(
                    format!("Q{}", question.id),
                    Style::default()
                        .fg(theme.accent)
                        .add_modifier(Modifier::BOLD),
                ),
                mastered_mark,
            ]));
            lines.push(Line::from(""));

            if app.session().answer_revealed() {
                lines.push(Line::from(Span::styled(
                    "ANSWER",
                    Style::default().fg(theme.muted),
                )));
                lines.push(Line::from(Span::raw(question.answer.clone())));
            } else {
                lines.push(Line::from(Span::styled(
                    question.question.clone(),
                    Style::default().add_modifier(Modifier::BOLD),
                )));
                if !question.tags.is_empty() {
                    lines.push(Line::from(""));
                    lines.push(Line::from(Span::styled(
                        format!("tags: {}", question.tags.join(", ")),
                        Style::default().fg(theme.muted),
                    )));
                }
            }
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                if app.session().answer_revealed() {
                    "press space to see the question"
                } else {
                    "press space to reveal the answer"
                },
                Style::default().fg(theme.muted),
            )));

            let card = Paragraph::new(lines).wrap(Wrap { trim: true });
            frame.render_widget(card, card_area);
        }
        None => {
            let notice = Paragraph::new(Span::styled(
                "Nothing to study here — loosen the search, tag, or mastered filter.",
                Style::default().fg(theme.muted),
            ))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
            frame.render_widget(notice, card_area);
        }
    }

    frame.render_widget(
        jump_window(app, &filtered, theme, sections[3].width as usize),
        sections[3],
    );

    let hints = Paragraph::new(Span::styled(
        "[space] answer  [←/→] nav  [1-5] jump  [m] mastered  [s] shuffle  [r] reset  \
         [/] search  [t] tag  [u] unmastered  [d] dark  [esc] menu",
        Style::default().fg(theme.muted),
    ))
    .alignment(Alignment::Center);
    frame.render_widget(hints, sections[4]);
}

/// The quick-jump strip: up to five slots around the cursor (current±2),
/// addressed by the digit keys. Mastered entries are tinted.
fn jump_window<'a, S: DataStore>(
    app: &App<S>,
    filtered: &[&crate::model::QuestionRecord],
    theme: &Theme,
    max_width: usize,
) -> Paragraph<'a> {
    if filtered.is_empty() {
        return Paragraph::new("");
    }

    let current = app.session().current();
    let start = current.saturating_sub(2);
    let end = (current + 3).min(filtered.len());

    let mut spans = Vec::new();
    for (slot, index) in (start..end).enumerate() {
        let question = filtered[index];
        let label = if index == current {
            format!("({}) ", index + 1)
        } else {
            format!("[{}:{}] ", slot + 1, index + 1)
        };
        let style = if index == current {
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD)
        } else if app.mastered().contains(question.id) {
            Style::default().fg(theme.mastered)
        } else {
            Style::default().fg(theme.fg)
        };
        spans.push(Span::styled(label, style));
    }

    let text: String = spans.iter().map(|s| s.content.as_ref()).collect();
    if text.width() > max_width {
        return Paragraph::new(Span::styled(
            truncate_to_width(&text, max_width),
            Style::default().fg(theme.fg),
        ))
        .alignment(Alignment::Center);
    }

    Paragraph::new(Line::from(spans)).alignment(Alignment::Center)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::App;
    use crate::model::{QuestionBank, QuestionRecord};
    use crate::store::memory::InMemoryStore;
    use ratatui::buffer::Buffer;
    use ratatui::layout::Rect;
    use ratatui::widgets::Widget;

    fn app_with(n: u32) -> App<InMemoryStore> {
        let records = (1..=n)
            .map(|i| QuestionRecord::new(i, format!("q{}", i), format!("a{}", i)))
            .collect();
        App::new(QuestionBank::from_records(records), InMemoryStore::new())
    }

    fn rendered(paragraph: Paragraph, width: u16) -> String {
        let area = Rect::new(0, 0, width, 1);
        let mut buffer = Buffer::empty(area);
        paragraph.render(area, &mut buffer);
        (0..width).map(|x| buffer[(x, 0)].symbol()).collect()
    }

    #[test]
    fn jump_strip_marks_the_current_slot() {
        let mut app = app_with(9);
        app.jump_to(4);
        let filtered = app.filtered();
        let strip = jump_window(&app, &filtered, &Theme::dark(), 60);

        let line = rendered(strip, 60);
        assert!(line.contains("(5)"));
        assert!(line.contains("[1:3]"));
        assert!(line.contains("[5:7]"));
    }

    #[test]
    fn jump_strip_truncates_by_display_width() {
        let mut app = app_with(9);
        app.jump_to(4);
        let filtered = app.filtered();
        let strip = jump_window(&app, &filtered, &Theme::dark(), 12);

        let line = rendered(strip, 14);
        assert!(line.contains('…'));
    }

    #[test]
    fn jump_strip_is_empty_without_questions() {
        let app = app_with(0);
        let filtered = app.filtered();
        let strip = jump_window(&app, &filtered, &Theme::dark(), 40);
        assert_eq!(rendered(strip, 40).trim(), "");
    }
}
