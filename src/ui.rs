use itertools::Itertools;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};
use unicode_width::UnicodeWidthStr;

use crate::content::LookupError;
use crate::{App, AppState};

const HORIZONTAL_MARGIN: u16 = 5;

impl Widget for &App {
    fn render(self, area: Rect, buf: &mut Buffer) {
        match self.state {
            AppState::Practice => render_practice(self, area, buf),
            AppState::VerbPicker => render_picker(self, area, buf),
        }
    }
}

fn render_practice(app: &App, area: Rect, buf: &mut Buffer) {
    let bold_style = Style::default().add_modifier(Modifier::BOLD);
    let dim_style = Style::default().add_modifier(Modifier::DIM);
    let italic_dim_style = Style::default()
        .patch(dim_style)
        .add_modifier(Modifier::ITALIC);
    let magenta_bold_style = Style::default().patch(bold_style).fg(Color::Magenta);

    let question = sentence_or_diagnostic(app.session.question());
    let max_chars_per_line = area.width.saturating_sub(HORIZONTAL_MARGIN * 2).max(1);
    let mut question_lines =
        ((question.0.width() as f64 / max_chars_per_line as f64).ceil() + 1.0) as u16;
    if question.0.width() <= max_chars_per_line as usize {
        question_lines = 1;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .horizontal_margin(HORIZONTAL_MARGIN)
        .constraints(
            [
                Constraint::Min(1),
                Constraint::Length(1),              // selected verbs
                Constraint::Length(1),              // spacer
                Constraint::Length(question_lines), // english sentence
                Constraint::Length(1),              // spacer
                Constraint::Length(question_lines), // hebrew answer / hint
                Constraint::Min(1),
                Constraint::Length(1), // key hints
            ]
            .as_ref(),
        )
        .split(area);

    let selected = Paragraph::new(Span::styled(
        format!("practicing: {}", app.session.selection().verbs().iter().join(", ")),
        italic_dim_style,
    ))
    .alignment(Alignment::Center);
    selected.render(chunks[1], buf);

    let question_widget = Paragraph::new(Span::styled(question.0, question_style(question.1, bold_style)))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    question_widget.render(chunks[3], buf);

    let answer_widget = if app.session.answer_visible() {
        let answer = sentence_or_diagnostic(app.session.answer());
        Paragraph::new(Span::styled(
            answer.0,
            question_style(answer.1, magenta_bold_style),
        ))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
    } else {
        Paragraph::new(Span::styled("· · ·", dim_style)).alignment(Alignment::Center)
    };
    answer_widget.render(chunks[5], buf);

    let hints = Paragraph::new(Span::styled(
        "(space) answer  (n) next  (v) verbs  (esc) quit",
        italic_dim_style,
    ))
    .alignment(Alignment::Center);
    hints.render(chunks[7], buf);
}

fn render_picker(app: &App, area: Rect, buf: &mut Buffer) {
    let bold_style = Style::default().add_modifier(Modifier::BOLD);
    let italic_dim_style = Style::default()
        .add_modifier(Modifier::DIM)
        .add_modifier(Modifier::ITALIC);
    let green_style = Style::default().fg(Color::Green);

    let verbs = &app.session.tables().verbs;
    let rows = verbs.len() as u16;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .horizontal_margin(HORIZONTAL_MARGIN)
        .constraints(
            [
                Constraint::Min(1),
                Constraint::Length(1), // title
                Constraint::Length(1), // spacer
                Constraint::Length(rows),
                Constraint::Min(1),
                Constraint::Length(1), // key hints
            ]
            .as_ref(),
        )
        .split(area);

    let title = Paragraph::new(Span::styled("select verbs to practice", bold_style))
        .alignment(Alignment::Center);
    title.render(chunks[1], buf);

    let lines: Vec<Line> = verbs
        .iter()
        .enumerate()
        .map(|(idx, verb)| {
            let cursor = if idx == app.picker.cursor { "> " } else { "  " };
            let selected = app.session.selection().contains(&verb.name);
            let marker = if selected { "[x] " } else { "[ ] " };
            let style = if selected {
                green_style
            } else {
                Style::default()
            };
            Line::from(vec![
                Span::raw(cursor.to_string()),
                Span::styled(format!("{marker}{}", verb.name), style),
            ])
        })
        .collect();

    let list = Paragraph::new(lines).alignment(Alignment::Center);
    list.render(chunks[3], buf);

    let hints = Paragraph::new(Span::styled(
        "(enter) toggle  (up/down) move  (b) back",
        italic_dim_style,
    ))
    .alignment(Alignment::Center);
    hints.render(chunks[5], buf);
}

// A failed lookup is a content defect; show it instead of a blank sentence.
fn sentence_or_diagnostic(result: Result<String, LookupError>) -> (String, bool) {
    match result {
        Ok(sentence) => (sentence, false),
        Err(err) => (format!("content error: {err}"), true),
    }
}

fn question_style(is_diagnostic: bool, normal: Style) -> Style {
    if is_diagnostic {
        Style::default().fg(Color::Red)
    } else {
        normal
    }
}
