use crate::registration::{ControlEvent, FieldName};
use crate::ui::app::App;
use crate::ui::form::controls::step_event;
use crate::ui::form::Focus;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'c') || is_ctrl_char(key, 'q') || key.code == KeyCode::Esc {
        app.request_quit();
        return;
    }

    match key.code {
        KeyCode::Tab | KeyCode::Down => {
            app.focus_next();
            return;
        }
        KeyCode::BackTab | KeyCode::Up => {
            app.focus_prev();
            return;
        }
        // Enter submits from any control, like a browser form.
        KeyCode::Enter => {
            app.on_submit();
            return;
        }
        _ => {}
    }

    match app.form().focus() {
        Focus::Field(FieldName::Username) => edit_username(app, key),
        Focus::Field(field @ (FieldName::FavLanguage | FieldName::FavFood)) => {
            let forward = match key.code {
                KeyCode::Right | KeyCode::Char(' ') => true,
                KeyCode::Left => false,
                _ => return,
            };
            if let Some(event) = step_event(field, app.form().values(), forward) {
                app.on_field_change(field, event);
            }
        }
        Focus::Field(FieldName::Agreement) => {
            if key.code == KeyCode::Char(' ') {
                let checked = !app.form().values().agreement;
                app.on_field_change(FieldName::Agreement, ControlEvent::Checkbox { checked });
            }
        }
        Focus::Submit => {
            if key.code == KeyCode::Char(' ') {
                app.on_submit();
            }
        }
    }
}

fn edit_username(app: &mut App, key: KeyEvent) {
    let mut value = app.form().values().username.clone();
    match key.code {
        KeyCode::Char(ch) if !key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => {
            value.push(ch);
        }
        KeyCode::Backspace => {
            if value.pop().is_none() {
                return;
            }
        }
        _ => return,
    }
    app.on_field_change(FieldName::Username, ControlEvent::Text { value });
}

fn is_ctrl_char(key: KeyEvent, ch: char) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL)
        && matches!(key.code, KeyCode::Char(c) if c.eq_ignore_ascii_case(&ch))
}
