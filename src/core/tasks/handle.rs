use std::sync::{
    atomic::{
        AtomicBool,
        Ordering,
    },
    mpsc,
    Arc,
};

use tokio::task::JoinHandle;
use tracing::debug;

use super::{
    Repaint,
    TaskResult,
};
use crate::core::{
    orchestrator::RequestId,
    AnalyseError,
    AnalysisResult,
};

/// Cancellable handle to a task spawned on the manager's runtime.
pub struct TaskHandle {
    cancel_token: Arc<AtomicBool>,
    join_handle: Option<JoinHandle<()>>,
}

impl TaskHandle {
    pub fn new(cancel_token: Arc<AtomicBool>, join_handle: JoinHandle<()>) -> Self {
        Self { cancel_token, join_handle: Some(join_handle) }
    }

    pub fn cancel(&self) {
        self.cancel_token.store(true, Ordering::Relaxed);
        if let Some(handle) = &self.join_handle {
            handle.abort();
        }
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel_token.load(Ordering::Relaxed)
    }

    pub fn is_finished(&self) -> bool {
        self.join_handle.as_ref().map(|h| h.is_finished()).unwrap_or(true)
    }
}

/// Periodic example rotation. Stops when dropped.
pub struct RotationTimer {
    handle: TaskHandle,
}

impl RotationTimer {
    pub(super) fn new(handle: TaskHandle) -> Self {
        Self { handle }
    }

    pub fn is_running(&self) -> bool {
        !self.handle.is_finished()
    }
}

impl Drop for RotationTimer {
    fn drop(&mut self) {
        debug!("Stopping example rotation timer");
        self.handle.cancel();
    }
}

/// Guarantees exactly one report per analysis task. If the task ends without
/// calling [`CompletionGuard::complete`] (abort, panic) the drop reports
/// `Interrupted` for its request id.
pub(super) struct CompletionGuard {
    id: RequestId,
    sender: Option<mpsc::Sender<TaskResult>>,
    repaint: Repaint,
}

impl CompletionGuard {
    pub(super) fn new(id: RequestId, sender: mpsc::Sender<TaskResult>, repaint: Repaint) -> Self {
        Self { id, sender: Some(sender), repaint }
    }

    pub(super) fn complete(mut self, outcome: Result<AnalysisResult, AnalyseError>) {
        self.send(outcome);
    }

    fn send(&mut self, outcome: Result<AnalysisResult, AnalyseError>) {
        if let Some(sender) = self.sender.take() {
            let _ = sender.send(TaskResult::Analysis { id: self.id, outcome });
            (self.repaint)();
        }
    }
}

impl Drop for CompletionGuard {
    fn drop(&mut self) {
        self.send(Err(AnalyseError::Interrupted));
    }
}
