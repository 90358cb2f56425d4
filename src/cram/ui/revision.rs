use super::{filter_bar, theme::Theme, truncate_to_width};
use crate::app::App;
use crate::store::DataStore;
use ratatui::layout::{Alignment, Constraint, Direction, Layout};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, List, ListItem, ListState, Paragraph, Wrap};
use ratatui::Frame;

pub fn render<S: DataStore>(frame: &mut Frame, app: &App<S>, theme: &Theme) {
    let sections = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),      // filter bar
            Constraint::Length(1),      // counter
            Constraint::Min(5),         // question list
            Constraint::Length(10),     // selected question detail
            Constraint::Length(1),      // hints
        ])
        .split(frame.area());

    frame.render_widget(filter_bar(app, theme), sections[0]);

    let filtered = app.filtered();
    let counter_text = if app.criteria().is_active() {
        format!(
            "Showing {} of {} questions",
            filtered.len(),
            app.bank().total_questions
        )
    } else {
        format!("{} questions", filtered.len())
    };
    let counter = Paragraph::new(Span::styled(
        counter_text,
        Style::default().fg(theme.muted),
    ));
    frame.render_widget(counter, sections[1]);

    let list_block = Block::bordered().border_style(Style::default().fg(theme.muted));
    let list_width = list_block.inner(sections[2]).width as usize;

    if filtered.is_empty() {
        let inner = list_block.inner(sections[2]);
        frame.render_widget(list_block, sections[2]);
        let notice = Paragraph::new(Span::styled(
            "No questions match your filters",
            Style::default().fg(theme.muted),
        ))
        .alignment(Alignment::Center);
        frame.render_widget(notice, inner);
        frame.render_widget(hints(theme), sections[4]);
        return;
    }

    let items: Vec<ListItem> = filtered
        .iter()
        .map(|question| {
            let mark = if app.mastered().contains(question.id) {
                Span::styled("✓ ", Style::default().fg(theme.mastered))
            } else {
                Span::raw("  ")
            };
            let label = truncate_to_width(
                &format!("Q{} {}", question.id, question.question),
                list_width.saturating_sub(2),
            );
            ListItem::new(Line::from(vec![mark, Span::raw(label)]))
        })
        .collect();

    let list = List::new(items)
        .block(list_block)
        .highlight_style(
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("» ");

    let mut state = ListState::default();
    state.select(Some(app.session().current()));
    frame.render_stateful_widget(list, sections[2], &mut state);

    let detail_block = Block::bordered().border_style(Style::default().fg(theme.muted));
    let detail_area = detail_block.inner(sections[3]);
    frame.render_widget(detail_block, sections[3]);

    if let Some(question) = filtered.get(app.session().current()) {
        let mut lines = vec![
            Line::from(Span::styled(
                question.question.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::raw(question.answer.clone())),
        ];
        if !question.tags.is_empty() {
            lines.push(Line::from(Span::styled(
                format!("tags: {}", question.tags.join(", ")),
                Style::default().fg(theme.muted),
            )));
        }
        let detail = Paragraph::new(lines).wrap(Wrap { trim: true });
        frame.render_widget(detail, detail_area);
    }

    frame.render_widget(hints(theme), sections[4]);
}

fn hints<'a>(theme: &Theme) -> Paragraph<'a> {
    Paragraph::new(Span::styled(
        "[j/k] move  [m] mastered  [s] shuffle  [r] reset  [/] search  [t] tag  \
         [u] unmastered  [d] dark  [esc] menu",
        Style::default().fg(theme.muted),
    ))
    .alignment(Alignment::Center)
}
