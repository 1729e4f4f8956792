use std::fmt;

use tracing::{
    debug,
    info,
    warn,
};

use super::{
    tasks::TaskHandle,
    AnalyseError,
    AnalysisRequest,
    AnalysisResult,
};

/// Identifies one submission. Only the most recently issued id may change state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RequestId(u64);

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum UiState {
    Idle,
    Loading { id: RequestId, name: String },
    Success(AnalysisResult),
    Failed(String),
}

impl UiState {
    pub fn is_loading(&self) -> bool {
        matches!(self, UiState::Loading { .. })
    }

    pub fn result(&self) -> Option<&AnalysisResult> {
        match self {
            UiState::Success(result) => Some(result),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            UiState::Failed(message) => Some(message),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    Applied,
    Stale,
}

/// Owns the UI state and decides which completions are allowed to land.
pub struct Orchestrator {
    state: UiState,
    last_issued: u64,
    in_flight: Option<TaskHandle>,
}

impl Orchestrator {
    pub fn new() -> Self {
        Self { state: UiState::Idle, last_issued: 0, in_flight: None }
    }

    pub fn state(&self) -> &UiState {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        self.state.is_loading()
    }

    /// Validates `raw` and moves to `Loading`. Blank input leaves the state
    /// untouched. A request still in flight is cancelled; whatever it
    /// reports afterwards is stale.
    pub fn begin(&mut self, raw: &str) -> Result<(RequestId, AnalysisRequest), AnalyseError> {
        let request = AnalysisRequest::new(raw)?;

        if let Some(previous) = self.in_flight.take() {
            debug!("Cancelling superseded analysis request");
            previous.cancel();
        }

        self.last_issued += 1;
        let id = RequestId(self.last_issued);
        self.state = UiState::Loading { id, name: request.name().to_string() };

        info!(request = %id, chars = request.name().chars().count(), "Analysis requested");
        Ok((id, request))
    }

    pub fn track(&mut self, handle: TaskHandle) {
        self.in_flight = Some(handle);
    }

    pub fn complete(
        &mut self,
        id: RequestId,
        outcome: Result<AnalysisResult, AnalyseError>,
    ) -> Completion {
        let current = match &self.state {
            UiState::Loading { id: loading, .. } => *loading == id,
            _ => false,
        };

        if !current || id.0 != self.last_issued {
            debug!(request = %id, "Discarding stale analysis result");
            return Completion::Stale;
        }

        self.in_flight = None;
        self.state = match outcome {
            Ok(result) => {
                info!(request = %id, language = %result.language, "Analysis complete");
                UiState::Success(result)
            }
            Err(error) => {
                if error.is_timeout() {
                    warn!(request = %id, "Analysis timed out");
                } else {
                    warn!(request = %id, status = ?error.status(), "Analysis failed: {}", error);
                }
                UiState::Failed(error.to_string())
            }
        };

        Completion::Applied
    }

    /// Back to `Idle`; ignored while loading.
    pub fn clear(&mut self) {
        if !self.is_loading() {
            self.state = UiState::Idle;
        }
    }
}

impl Default for Orchestrator {
    fn default() -> Self {
        Self::new()
    }
}
