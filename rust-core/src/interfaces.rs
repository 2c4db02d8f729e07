// Definitions that are used throughout all modules

use serde::{Deserialize, Serialize};

// Lifecycle of one averaging pass. States are visited strictly in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EngineState {
    Initializing,
    Accumulating,
    Finalizing,
    Done,
}

impl EngineState {
    /// The state that must follow this one, `None` once the pass is done.
    pub fn next(self) -> Option<EngineState> {
        match self {
            EngineState::Initializing => Some(EngineState::Accumulating),
            EngineState::Accumulating => Some(EngineState::Finalizing),
            EngineState::Finalizing => Some(EngineState::Done),
            EngineState::Done => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            EngineState::Initializing => "initializing",
            EngineState::Accumulating => "accumulating",
            EngineState::Finalizing => "finalizing",
            EngineState::Done => "done",
        }
    }
}
