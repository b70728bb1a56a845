//! Shared test utilities.

#![allow(dead_code, unused_imports)]

pub mod mock_backend;

use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use newsbias::api::ApiClient;
use newsbias::config::ServiceConfig;
use newsbias::orchestrator::{
    completion_channel, Applied, Completion, CompletionReceiver, Orchestrator,
};
use newsbias::ui::app::App;
use std::net::TcpListener;
use std::time::Duration;

pub const ARTICLE_URL: &str = "https://example.com/news/story";

/// Find an available port for testing.
pub fn free_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind to free port");
    listener.local_addr().unwrap().port()
}

/// A base URL nothing listens on.
pub fn unreachable_base_url() -> String {
    format!("http://127.0.0.1:{}", free_port())
}

pub fn make_orchestrator(base_url: &str) -> (Orchestrator, CompletionReceiver) {
    let client = ApiClient::new(&ServiceConfig {
        base_url: base_url.to_string(),
        request_timeout_secs: Some(10),
    })
    .expect("client");
    let (tx, rx) = completion_channel();
    (Orchestrator::new(client, ARTICLE_URL, tx), rx)
}

pub fn make_app(base_url: &str) -> (App, CompletionReceiver) {
    let (orchestrator, rx) = make_orchestrator(base_url);
    let mut app = App::new(orchestrator);
    app.on_resize(100, 40);
    (app, rx)
}

pub async fn next_completion(rx: &mut CompletionReceiver) -> Completion {
    tokio::time::timeout(Duration::from_secs(10), rx.recv())
        .await
        .expect("timed out waiting for completion")
        .expect("completion channel closed")
}

/// Wait for the next completion and apply it.
pub async fn settle(orchestrator: &mut Orchestrator, rx: &mut CompletionReceiver) -> Applied {
    let completion = next_completion(rx).await;
    orchestrator.apply(completion)
}

pub fn press(code: KeyCode) -> KeyEvent {
    KeyEvent {
        code,
        modifiers: KeyModifiers::empty(),
        kind: KeyEventKind::Press,
        state: KeyEventState::empty(),
    }
}

pub fn ctrl(ch: char) -> KeyEvent {
    KeyEvent {
        code: KeyCode::Char(ch),
        modifiers: KeyModifiers::CONTROL,
        kind: KeyEventKind::Press,
        state: KeyEventState::empty(),
    }
}

pub fn click(column: u16, row: u16) -> MouseEvent {
    MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column,
        row,
        modifiers: KeyModifiers::empty(),
    }
}
