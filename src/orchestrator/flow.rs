use serde_json::Value;

use crate::api::ApiError;

/// One of the three independent request/response cycles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Flow {
    Health,
    Model,
    Classify,
}

impl Flow {
    pub const ALL: [Flow; 3] = [Flow::Health, Flow::Model, Flow::Classify];

    pub fn label(self) -> &'static str {
        match self {
            Flow::Health => "health",
            Flow::Model => "model",
            Flow::Classify => "classify",
        }
    }

    fn index(self) -> usize {
        match self {
            Flow::Health => 0,
            Flow::Model => 1,
            Flow::Classify => 2,
        }
    }
}

/// A settled call, tagged with the invocation that issued it.
#[derive(Debug)]
pub struct Completion {
    pub flow: Flow,
    pub generation: u64,
    pub outcome: Result<Value, ApiError>,
}

/// Per-flow monotonically increasing invocation counters.
///
/// Generation 0 is never issued, so a fresh counter treats every completion
/// as stale until the first invocation.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Generations {
    latest: [u64; 3],
}

impl Generations {
    /// Issue the next generation for `flow`.
    pub fn issue(&mut self, flow: Flow) -> u64 {
        let slot = &mut self.latest[flow.index()];
        *slot += 1;
        *slot
    }

    pub fn latest(&self, flow: Flow) -> u64 {
        self.latest[flow.index()]
    }

    pub fn is_current(&self, flow: Flow, generation: u64) -> bool {
        generation != 0 && self.latest(flow) == generation
    }
}
