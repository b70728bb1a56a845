use crate::orchestrator::{Applied, Completion, Orchestrator, ViewState};
use crate::ui::listeners::KeyListeners;
use crate::ui::modal::{Modal, ModalLayout, ModalResponse};
use crossterm::event::KeyEvent;
use ratatui::layout::Rect;
use serde_json::Value;

const DEFAULT_SIZE: (u16, u16) = (80, 24);

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum DialogKind {
    Health,
    Model,
}

impl DialogKind {
    /// Render order; later entries draw on top.
    pub const STACK: [DialogKind; 2] = [DialogKind::Health, DialogKind::Model];

    fn placeholder(self) -> &'static str {
        match self {
            DialogKind::Health => "No health response yet.",
            DialogKind::Model => "No model metadata yet.",
        }
    }
}

pub struct App {
    should_quit: bool,
    size: (u16, u16),
    orchestrator: Orchestrator,
    listeners: KeyListeners,
    health_modal: Modal,
    model_modal: Modal,
    /// Cursor position in the URL field, in chars.
    cursor: usize,
    animation_tick: u8,
}

impl App {
    pub fn new(orchestrator: Orchestrator) -> Self {
        let cursor = orchestrator.url().chars().count();
        Self {
            should_quit: false,
            size: DEFAULT_SIZE,
            orchestrator,
            listeners: KeyListeners::new(),
            health_modal: Modal::new("Health"),
            model_modal: Modal::new("Model"),
            cursor,
            animation_tick: 0,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn orchestrator(&self) -> &Orchestrator {
        &self.orchestrator
    }

    pub fn view(&self) -> &ViewState {
        self.orchestrator.view()
    }

    pub fn listeners(&self) -> &KeyListeners {
        &self.listeners
    }

    pub fn modal(&self, kind: DialogKind) -> &Modal {
        match kind {
            DialogKind::Health => &self.health_modal,
            DialogKind::Model => &self.model_modal,
        }
    }

    fn modal_mut(&mut self, kind: DialogKind) -> &mut Modal {
        match kind {
            DialogKind::Health => &mut self.health_modal,
            DialogKind::Model => &mut self.model_modal,
        }
    }

    /// The dialog that receives keys and pointer presses, if any is open.
    pub fn topmost_modal(&self) -> Option<DialogKind> {
        DialogKind::STACK
            .into_iter()
            .rev()
            .find(|kind| self.modal(*kind).is_open())
    }

    pub fn on_tick(&mut self) {
        if self.orchestrator.is_loading() {
            self.animation_tick = self.animation_tick.wrapping_add(1);
        }
    }

    pub fn animation_tick(&self) -> u8 {
        self.animation_tick
    }

    pub fn on_resize(&mut self, cols: u16, rows: u16) {
        self.size = (cols, rows);
    }

    /// The full terminal area, as last reported.
    pub fn area(&self) -> Rect {
        Rect::new(0, 0, self.size.0, self.size.1)
    }

    pub fn on_completion(&mut self, completion: Completion) -> Applied {
        let applied = self.orchestrator.apply(completion);
        self.sync_modals();
        applied
    }

    pub fn fetch_health(&mut self) -> u64 {
        self.orchestrator.fetch_health()
    }

    pub fn fetch_model(&mut self) -> u64 {
        self.orchestrator.fetch_model()
    }

    /// Submit the URL unless a classification is already running.
    pub fn submit(&mut self) -> bool {
        if self.orchestrator.is_loading() {
            return false;
        }
        self.orchestrator.classify_url();
        self.animation_tick = 0;
        true
    }

    /// On-close callback shared by both dialogs.
    pub fn close_dialog(&mut self, kind: DialogKind) {
        match kind {
            DialogKind::Health => self.orchestrator.close_health_dialog(),
            DialogKind::Model => self.orchestrator.close_model_dialog(),
        }
        self.sync_modals();
    }

    fn sync_modals(&mut self) {
        let health_open = self.orchestrator.view().health_dialog_open;
        let model_open = self.orchestrator.view().model_dialog_open;
        self.health_modal.sync(health_open, &mut self.listeners);
        self.model_modal.sync(model_open, &mut self.listeners);
    }

    /// Route a key through the listener registry. Returns true if any
    /// listener fired.
    pub fn on_listener_key(&mut self, key: KeyEvent) -> bool {
        let fired = self.listeners.dispatch(&key);
        if fired.is_empty() {
            return false;
        }
        for kind in DialogKind::STACK {
            if fired.iter().any(|id| self.modal(kind).owns_listener(*id)) {
                self.close_dialog(kind);
            }
        }
        true
    }

    pub fn on_modal_key(&mut self, kind: DialogKind, key: KeyEvent) {
        let layout = self.modal_layout(kind);
        let lines = self.dialog_content(kind).len();
        if self.modal_mut(kind).handle_key(key, &layout, lines) == ModalResponse::CloseRequested {
            self.close_dialog(kind);
        }
    }

    pub fn on_pointer_press(&mut self, column: u16, row: u16) {
        let Some(kind) = self.topmost_modal() else {
            return;
        };
        let Some(target) = self.modal_layout(kind).hit_test(column, row) else {
            return;
        };
        if self.modal(kind).handle_pointer(target) == ModalResponse::CloseRequested {
            self.close_dialog(kind);
        }
    }

    pub fn dialog_content(&self, kind: DialogKind) -> Vec<String> {
        let view = self.orchestrator.view();
        let body = match kind {
            DialogKind::Health => view.health.as_ref(),
            DialogKind::Model => view.model.as_ref(),
        };
        match body {
            Some(value) => pretty_lines(value),
            None => vec![kind.placeholder().to_string()],
        }
    }

    pub fn modal_layout(&self, kind: DialogKind) -> ModalLayout {
        let content = self.dialog_content(kind);
        let width = content
            .iter()
            .map(|line| line.chars().count())
            .max()
            .unwrap_or(0);
        ModalLayout::compute(
            self.area(),
            u16::try_from(width).unwrap_or(u16::MAX),
            u16::try_from(content.len()).unwrap_or(u16::MAX),
        )
    }

    // ========================================================================
    // URL field editing
    // ========================================================================

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn insert_char(&mut self, ch: char) {
        let mut url: Vec<char> = self.orchestrator.url().chars().collect();
        let at = self.cursor.min(url.len());
        url.insert(at, ch);
        self.orchestrator.set_url(url.into_iter().collect::<String>());
        self.cursor = at + 1;
    }

    /// Insert pasted text; line breaks are dropped.
    pub fn insert_str(&mut self, text: &str) {
        for ch in text.chars().filter(|c| !c.is_control()) {
            self.insert_char(ch);
        }
    }

    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let mut url: Vec<char> = self.orchestrator.url().chars().collect();
        let at = self.cursor.min(url.len());
        if at == 0 {
            self.cursor = 0;
            return;
        }
        url.remove(at - 1);
        self.orchestrator.set_url(url.into_iter().collect::<String>());
        self.cursor = at - 1;
    }

    pub fn delete(&mut self) {
        let mut url: Vec<char> = self.orchestrator.url().chars().collect();
        if self.cursor >= url.len() {
            return;
        }
        url.remove(self.cursor);
        self.orchestrator.set_url(url.into_iter().collect::<String>());
    }

    pub fn clear_url(&mut self) {
        self.orchestrator.set_url(String::new());
        self.cursor = 0;
    }

    pub fn move_cursor(&mut self, delta: isize) {
        let len = self.orchestrator.url().chars().count();
        self.cursor = self.cursor.saturating_add_signed(delta).min(len);
    }

    pub fn cursor_home(&mut self) {
        self.cursor = 0;
    }

    pub fn cursor_end(&mut self) {
        self.cursor = self.orchestrator.url().chars().count();
    }

    /// Cancel in-flight calls before the screen goes away.
    pub fn teardown(&mut self) {
        self.orchestrator.teardown();
    }
}

fn pretty_lines(value: &Value) -> Vec<String> {
    serde_json::to_string_pretty(value)
        .unwrap_or_else(|_| value.to_string())
        .lines()
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ApiClient;
    use crate::config::ServiceConfig;
    use crate::orchestrator::completion_channel;
    use serde_json::json;

    fn make_app(url: &str) -> App {
        let client = ApiClient::new(&ServiceConfig::default()).unwrap();
        let (tx, _rx) = completion_channel();
        App::new(Orchestrator::new(client, url, tx))
    }

    #[test]
    fn cursor_starts_at_end_of_url() {
        let app = make_app("abc");
        assert_eq!(app.cursor(), 3);
    }

    #[test]
    fn editing_respects_cursor() {
        let mut app = make_app("ac");
        app.move_cursor(-1);
        app.insert_char('b');
        assert_eq!(app.view().url, "abc");
        assert_eq!(app.cursor(), 2);
        app.backspace();
        assert_eq!(app.view().url, "ac");
        app.cursor_home();
        app.delete();
        assert_eq!(app.view().url, "c");
        app.cursor_end();
        assert_eq!(app.cursor(), 1);
    }

    #[test]
    fn editing_handles_multibyte_chars() {
        let mut app = make_app("héllo");
        app.move_cursor(-3);
        app.backspace();
        assert_eq!(app.view().url, "hllo");
        app.insert_str("é\n");
        assert_eq!(app.view().url, "héllo");
    }

    #[test]
    fn cursor_movement_is_clamped() {
        let mut app = make_app("ab");
        app.move_cursor(10);
        assert_eq!(app.cursor(), 2);
        app.move_cursor(-10);
        assert_eq!(app.cursor(), 0);
        app.backspace();
        assert_eq!(app.view().url, "ab");
    }

    #[test]
    fn clear_url_resets_cursor() {
        let mut app = make_app("https://example.com");
        app.clear_url();
        assert_eq!(app.view().url, "");
        assert_eq!(app.cursor(), 0);
    }

    #[test]
    fn dialog_content_placeholder_and_body() {
        let app = make_app("");
        assert_eq!(
            app.dialog_content(DialogKind::Health),
            vec!["No health response yet.".to_string()]
        );
        assert_eq!(
            app.dialog_content(DialogKind::Model),
            vec!["No model metadata yet.".to_string()]
        );
        assert_eq!(
            pretty_lines(&json!({"ok": true})),
            vec!["{".to_string(), "  \"ok\": true".to_string(), "}".to_string()]
        );
    }

    #[test]
    fn no_modal_is_topmost_initially() {
        let app = make_app("");
        assert_eq!(app.topmost_modal(), None);
        assert!(app.listeners().is_empty());
    }
}
