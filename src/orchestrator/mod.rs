//! Request orchestration for the three service flows.
//!
//! ```text
//! invoke ──→ spawn(call) ──→ Completion ──→ channel ──→ apply ──→ ViewState
//! ```
//!
//! Invocations mutate the view state synchronously (clearing `error`,
//! raising `loading`) and spawn the network call. The call never touches
//! state itself: its [`Completion`] travels back over a channel and is applied
//! on the UI loop, where stale generations and cancelled scopes are filtered
//! out.

mod flow;
mod scope;
mod state;

use std::future::Future;

use serde_json::Value;
use tokio::sync::mpsc;
use tracing::{debug, warn};

use crate::api::{ApiClient, ApiError, ResponseBody};

pub use flow::{Completion, Flow, Generations};
pub use scope::CancelScope;
pub use state::ViewState;

pub type CompletionSender = mpsc::UnboundedSender<Completion>;
pub type CompletionReceiver = mpsc::UnboundedReceiver<Completion>;

pub fn completion_channel() -> (CompletionSender, CompletionReceiver) {
    mpsc::unbounded_channel()
}

/// What [`Orchestrator::apply`] did with a completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Applied {
    /// The view state was updated.
    Updated,
    /// A newer invocation of the same flow was issued; dropped.
    Stale,
    /// The orchestrator was torn down; dropped.
    Cancelled,
}

pub struct Orchestrator {
    client: ApiClient,
    view: ViewState,
    generations: Generations,
    scope: CancelScope,
    completions: CompletionSender,
}

impl Orchestrator {
    pub fn new(client: ApiClient, url: impl Into<String>, completions: CompletionSender) -> Self {
        Self {
            client,
            view: ViewState::new(url),
            generations: Generations::default(),
            scope: CancelScope::new(),
            completions,
        }
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn base_url(&self) -> &str {
        self.client.base_url()
    }

    pub fn url(&self) -> &str {
        &self.view.url
    }

    pub fn set_url(&mut self, url: impl Into<String>) {
        self.view.url = url.into();
    }

    pub fn is_loading(&self) -> bool {
        self.view.loading
    }

    pub fn latest_generation(&self, flow: Flow) -> u64 {
        self.generations.latest(flow)
    }

    /// Start a health check. Returns the generation of this invocation.
    pub fn fetch_health(&mut self) -> u64 {
        self.view.error.clear();
        let client = self.client.clone();
        self.start(Flow::Health, async move { client.health().await })
    }

    /// Start a model metadata fetch. Returns the generation of this invocation.
    pub fn fetch_model(&mut self) -> u64 {
        self.view.error.clear();
        let client = self.client.clone();
        self.start(Flow::Model, async move { client.model().await })
    }

    /// Submit the current URL for classification.
    ///
    /// `loading` stays raised until the latest classify invocation settles.
    /// Concurrent calls are accepted; only the newest one lands.
    pub fn classify_url(&mut self) -> u64 {
        self.view.error.clear();
        self.view.loading = true;
        self.view.result = None;
        let client = self.client.clone();
        let url = self.view.url.clone();
        self.start(Flow::Classify, async move { client.predict_url(&url).await })
    }

    pub fn close_health_dialog(&mut self) {
        self.view.health_dialog_open = false;
    }

    pub fn close_model_dialog(&mut self) {
        self.view.model_dialog_open = false;
    }

    /// Apply a settled call to the view state.
    pub fn apply(&mut self, completion: Completion) -> Applied {
        let Completion {
            flow,
            generation,
            outcome,
        } = completion;

        if self.scope.is_cancelled() {
            debug!(flow = flow.label(), generation, "dropping completion after teardown");
            return Applied::Cancelled;
        }
        if !self.generations.is_current(flow, generation) {
            debug!(
                flow = flow.label(),
                generation,
                latest = self.generations.latest(flow),
                "dropping stale completion"
            );
            return Applied::Stale;
        }

        match outcome {
            Ok(body) => self.store(flow, body),
            Err(err) => self.fail(flow, err),
        }
        if flow == Flow::Classify {
            self.view.loading = false;
        }
        Applied::Updated
    }

    /// Cancel every in-flight call. Completions arriving afterwards are dropped.
    pub fn teardown(&mut self) {
        self.scope.cancel();
    }

    pub fn is_torn_down(&self) -> bool {
        self.scope.is_cancelled()
    }

    fn store(&mut self, flow: Flow, body: Value) {
        debug!(flow = flow.label(), "flow succeeded");
        match flow {
            Flow::Health => {
                self.view.health = Some(body);
                self.view.health_dialog_open = true;
            }
            Flow::Model => {
                self.view.model = Some(body);
                self.view.model_dialog_open = true;
            }
            Flow::Classify => {
                self.view.result = Some(ResponseBody::classify(body));
            }
        }
    }

    fn fail(&mut self, flow: Flow, err: ApiError) {
        warn!(flow = flow.label(), error = %err, "flow failed");
        self.view.error = err.to_string();
    }

    fn start<F>(&mut self, flow: Flow, call: F) -> u64
    where
        F: Future<Output = Result<Value, ApiError>> + Send + 'static,
    {
        let generation = self.generations.issue(flow);
        debug!(flow = flow.label(), generation, "flow started");

        let scope = self.scope.clone();
        let completions = self.completions.clone();
        tokio::spawn(async move {
            tokio::select! {
                _ = scope.cancelled() => {
                    debug!(flow = flow.label(), generation, "call abandoned");
                }
                outcome = call => {
                    if scope.is_cancelled() {
                        return;
                    }
                    // The receiver only goes away when the UI loop has exited.
                    let _ = completions.send(Completion { flow, generation, outcome });
                }
            }
        });

        generation
    }
}

impl Drop for Orchestrator {
    fn drop(&mut self) {
        self.scope.cancel();
    }
}
