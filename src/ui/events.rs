use std::time::Duration;

use crossterm::event::{Event, EventStream, KeyEvent, MouseEvent};
use futures::StreamExt;
use tokio::time::{interval, Interval, MissedTickBehavior};

use crate::orchestrator::{Completion, CompletionReceiver};

pub enum AppEvent {
    Key(KeyEvent),
    Mouse(MouseEvent),
    Paste(String),
    Resize(u16, u16),
    Tick,
    /// A service call settled.
    Completion(Completion),
    /// SIGTERM or the terminal went away.
    Shutdown,
}

/// Merges terminal input, settled service calls and the UI tick into one
/// stream consumed by the runtime loop.
pub struct EventHandler {
    terminal: EventStream,
    completions: CompletionReceiver,
    ticker: Interval,
    terminate: TerminateSignal,
}

impl EventHandler {
    pub fn new(tick_rate: Duration, completions: CompletionReceiver) -> Self {
        let mut ticker = interval(tick_rate);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
        Self {
            terminal: EventStream::new(),
            completions,
            ticker,
            terminate: TerminateSignal::install(),
        }
    }

    pub async fn next(&mut self) -> AppEvent {
        loop {
            tokio::select! {
                input = self.terminal.next() => match input {
                    Some(Ok(event)) => {
                        if let Some(event) = translate(event) {
                            return event;
                        }
                    }
                    Some(Err(err)) => {
                        tracing::error!(error = %err, "terminal input failed");
                        return AppEvent::Shutdown;
                    }
                    None => return AppEvent::Shutdown,
                },
                Some(completion) = self.completions.recv() => {
                    return AppEvent::Completion(completion);
                }
                _ = self.ticker.tick() => return AppEvent::Tick,
                _ = self.terminate.recv() => {
                    tracing::info!("termination signal received");
                    return AppEvent::Shutdown;
                }
            }
        }
    }
}

fn translate(event: Event) -> Option<AppEvent> {
    match event {
        Event::Key(key) => Some(AppEvent::Key(key)),
        Event::Mouse(mouse) => Some(AppEvent::Mouse(mouse)),
        Event::Paste(text) => Some(AppEvent::Paste(text)),
        Event::Resize(cols, rows) => Some(AppEvent::Resize(cols, rows)),
        Event::FocusGained | Event::FocusLost => None,
    }
}

#[cfg(unix)]
struct TerminateSignal(Option<tokio::signal::unix::Signal>);

#[cfg(unix)]
impl TerminateSignal {
    fn install() -> Self {
        use tokio::signal::unix::{signal, SignalKind};
        Self(signal(SignalKind::terminate()).ok())
    }

    async fn recv(&mut self) {
        match &mut self.0 {
            Some(signal) => {
                signal.recv().await;
            }
            None => std::future::pending().await,
        }
    }
}

#[cfg(not(unix))]
struct TerminateSignal;

#[cfg(not(unix))]
impl TerminateSignal {
    fn install() -> Self {
        Self
    }

    async fn recv(&mut self) {
        std::future::pending().await
    }
}
