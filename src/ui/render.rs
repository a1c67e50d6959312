use crate::ui::app::App;
use crate::ui::footer::footer_widget;
use crate::ui::form::view::render_form;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::Frame;

/// Widest the form grows on large terminals.
const FORM_MAX_WIDTH: u16 = 72;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let (body, footer) = layout_regions(frame.area());
    render_form(frame, form_rect(body), app.form(), app.tick());
    frame.render_widget(footer_widget(footer), footer);
}

/// Split the screen into the form body and a three-row footer.
pub fn layout_regions(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(3.min(area.height))])
        .split(area);
    (chunks[0], chunks[1])
}

/// Horizontally centered column inside `body`.
pub fn form_rect(body: Rect) -> Rect {
    let width = body.width.min(FORM_MAX_WIDTH);
    Rect {
        x: body.x + (body.width - width) / 2,
        y: body.y,
        width,
        height: body.height,
    }
}
