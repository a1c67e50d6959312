use crate::ui::theme::{GLOBAL_BORDER, TEXT};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");
const HINTS: &str = " Tab/↑↓: Move │ ←/→/Space: Choose │ Enter: Submit │ Esc: Quit";

/// Key hints on the left, version on the right.
pub fn footer_widget(area: Rect) -> Paragraph<'static> {
    let version = format!("v{} ", VERSION);

    // Char count, not byte count: the hints contain box-drawing characters.
    let content_width = area.width.saturating_sub(2) as usize;
    let padding = content_width
        .saturating_sub(HINTS.chars().count())
        .saturating_sub(version.chars().count());

    let text_style = Style::default().fg(TEXT).add_modifier(Modifier::DIM);

    let line = Line::from(vec![
        Span::styled(HINTS, text_style),
        Span::styled(" ".repeat(padding), text_style),
        Span::styled(version, text_style),
    ]);

    Paragraph::new(line)
        .style(text_style)
        .alignment(Alignment::Left)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
}
