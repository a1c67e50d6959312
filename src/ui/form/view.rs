//! Rendering for the registration form.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::registration::FieldName;
use crate::ui::theme::{ACCENT, ACTIVE_HIGHLIGHT, GLOBAL_BORDER, MUTED_TEXT, STATUS_ERROR, STATUS_OK, TEXT};

use super::controls::{label_for, FOOD_CHOICES, LANGUAGE_CHOICES};
use super::state::{Focus, FormState};

/// Spinner animation frames.
const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub fn render_form(frame: &mut Frame, area: Rect, state: &FormState, tick: u8) {
    let block = Block::default()
        .title(" Create an Account ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GLOBAL_BORDER));

    let paragraph = Paragraph::new(form_lines(state, tick))
        .block(block)
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

/// Every line of the form body, top to bottom.
pub fn form_lines(state: &FormState, tick: u8) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    if let Some(message) = state.feedback().success() {
        lines.push(Line::from(Span::styled(
            format!(" ✓ {}", message),
            Style::default().fg(STATUS_OK).add_modifier(Modifier::BOLD),
        )));
    }
    if let Some(message) = state.feedback().failure() {
        lines.push(Line::from(Span::styled(
            format!(" ✗ {}", message),
            Style::default().fg(STATUS_ERROR).add_modifier(Modifier::BOLD),
        )));
    }
    lines.push(Line::from(""));

    for field in FieldName::ALL {
        let focused = state.focus() == Focus::Field(field);
        lines.push(field_line(state, field, focused));
        if let Some(message) = state.errors().get(field) {
            lines.push(Line::from(Span::styled(
                format!("     {}", message),
                Style::default().fg(STATUS_ERROR),
            )));
        }
        lines.push(Line::from(""));
    }

    lines.push(submit_line(state, tick));
    lines
}

fn marker(focused: bool) -> Span<'static> {
    if focused {
        Span::styled(" › ", Style::default().fg(ACCENT))
    } else {
        Span::raw("   ")
    }
}

fn label(text: &'static str, focused: bool) -> Span<'static> {
    let style = if focused {
        Style::default()
            .fg(TEXT)
            .bg(ACTIVE_HIGHLIGHT)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(TEXT)
    };
    Span::styled(text, style)
}

fn field_line(state: &FormState, field: FieldName, focused: bool) -> Line<'static> {
    let values = state.values();
    let mut spans = vec![marker(focused)];

    match field {
        FieldName::Username => {
            spans.push(label("Username:", focused));
            spans.push(Span::raw(" "));
            if values.username.is_empty() && !focused {
                spans.push(Span::styled("Type Username", Style::default().fg(MUTED_TEXT)));
            } else {
                spans.push(Span::styled(values.username.clone(), Style::default().fg(TEXT)));
            }
            if focused {
                spans.push(Span::styled("▏", Style::default().fg(ACCENT)));
            }
        }
        FieldName::FavLanguage => {
            spans.push(label("Favorite Language:", focused));
            for choice in LANGUAGE_CHOICES {
                let bullet = if values.fav_language == choice.value {
                    "(•)"
                } else {
                    "( )"
                };
                spans.push(Span::styled(
                    format!(" {} {}", bullet, choice.label),
                    Style::default().fg(TEXT),
                ));
            }
        }
        FieldName::FavFood => {
            spans.push(label("Favorite Food:", focused));
            let shown = label_for(FOOD_CHOICES, &values.fav_food).unwrap_or("-- Select Favorite Food --");
            let style = if values.fav_food.is_empty() {
                Style::default().fg(MUTED_TEXT)
            } else {
                Style::default().fg(TEXT)
            };
            spans.push(Span::styled(format!(" ‹ {} ›", shown), style));
        }
        FieldName::Agreement => {
            let mark = if values.agreement { "[x]" } else { "[ ]" };
            spans.push(Span::styled(format!("{} ", mark), Style::default().fg(TEXT)));
            spans.push(label("Agree to our terms", focused));
        }
    }

    Line::from(spans)
}

fn submit_line(state: &FormState, tick: u8) -> Line<'static> {
    let focused = state.focus() == Focus::Submit;
    let text = if state.submission_in_progress() {
        let spinner = SPINNER_FRAMES[(tick as usize) % SPINNER_FRAMES.len()];
        format!("[ Submitting {} ]", spinner)
    } else {
        "[ Submit ]".to_string()
    };

    let style = if state.can_submit() {
        let style = Style::default().fg(TEXT).add_modifier(Modifier::BOLD);
        if focused {
            style.bg(ACCENT)
        } else {
            style
        }
    } else {
        Style::default().fg(MUTED_TEXT).add_modifier(Modifier::DIM)
    };

    Line::from(vec![marker(focused), Span::styled(text, style)])
}
