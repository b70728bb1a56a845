use crate::ui::app::App;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

/// Route one key press.
///
/// Order: quit chord, registered listeners (dialog Escape), the topmost open
/// dialog, then the main screen. An open dialog swallows everything it gets.
pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'q') || is_ctrl_char(key, 'c') {
        app.request_quit();
        return;
    }

    if app.on_listener_key(key) {
        return;
    }

    if let Some(kind) = app.topmost_modal() {
        app.on_modal_key(kind, key);
        return;
    }

    if is_ctrl_char(key, 'u') {
        app.clear_url();
        return;
    }

    match key.code {
        KeyCode::F(2) => {
            app.fetch_health();
        }
        KeyCode::F(3) => {
            app.fetch_model();
        }
        KeyCode::Enter => {
            app.submit();
        }
        KeyCode::Backspace => app.backspace(),
        KeyCode::Delete => app.delete(),
        KeyCode::Left => app.move_cursor(-1),
        KeyCode::Right => app.move_cursor(1),
        KeyCode::Home => app.cursor_home(),
        KeyCode::End => app.cursor_end(),
        KeyCode::Char(ch)
            if !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            app.insert_char(ch);
        }
        _ => {}
    }
}

/// Only left-button presses matter; they are hit-tested against the topmost
/// dialog.
pub fn handle_mouse(app: &mut App, mouse: MouseEvent) {
    if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
        app.on_pointer_press(mouse.column, mouse.row);
    }
}

pub fn handle_paste(app: &mut App, text: &str) {
    if app.topmost_modal().is_some() {
        return;
    }
    app.insert_str(text);
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
        && !key.modifiers.contains(KeyModifiers::SHIFT)
}
