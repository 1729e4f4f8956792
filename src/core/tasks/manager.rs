use std::{
    sync::{
        atomic::{
            AtomicBool,
            Ordering,
        },
        mpsc,
        Arc,
    },
    time::Duration,
};

use tokio::{
    runtime::{
        Builder,
        Runtime,
    },
    time::{
        Instant,
        MissedTickBehavior,
    },
};
use tracing::{
    debug,
    info,
};

use super::{
    handle::CompletionGuard,
    Repaint,
    RotationTimer,
    TaskHandle,
    TaskResult,
};
use crate::core::{
    config::ANALYSE_TIMEOUT,
    http::{
        analyse_name,
        check_health,
        AnalysisTransport,
    },
    orchestrator::RequestId,
    AnalysisRequest,
    SaynameError,
};

const HEALTH_TIMEOUT: Duration = Duration::from_secs(5);

/// Runs network work off the UI thread and hands results back through a
/// channel drained once per frame.
pub struct TaskManager {
    runtime: Runtime,
    receiver: mpsc::Receiver<TaskResult>,
    sender: mpsc::Sender<TaskResult>,
    transport: Arc<dyn AnalysisTransport>,
    repaint: Repaint,
    timeout: Duration,
    health_pending: Arc<AtomicBool>,
}

impl TaskManager {
    pub fn new(transport: Arc<dyn AnalysisTransport>, repaint: Repaint) -> Result<Self, SaynameError> {
        let runtime = Builder::new_multi_thread()
            .worker_threads(2)
            .thread_name("sayname-tasks")
            .enable_all()
            .build()
            .map_err(|e| SaynameError::Runtime(e.to_string()))?;

        let (sender, receiver) = mpsc::channel();

        Ok(Self {
            runtime,
            receiver,
            sender,
            transport,
            repaint,
            timeout: ANALYSE_TIMEOUT,
            health_pending: Arc::new(AtomicBool::new(false)),
        })
    }

    #[cfg(test)]
    fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Requests already in flight keep the transport they started with.
    pub fn set_transport(&mut self, transport: Arc<dyn AnalysisTransport>) {
        self.transport = transport;
    }

    pub fn poll_results(&mut self) -> Vec<TaskResult> {
        let mut results = Vec::new();

        while let Ok(result) = self.receiver.try_recv() {
            results.push(result);
        }

        results
    }

    fn task_context(&self) -> (mpsc::Sender<TaskResult>, Arc<dyn AnalysisTransport>, Repaint) {
        (self.sender.clone(), Arc::clone(&self.transport), Arc::clone(&self.repaint))
    }

    pub fn analyse(&self, id: RequestId, request: AnalysisRequest) -> TaskHandle {
        let (sender, transport, repaint) = self.task_context();
        let timeout = self.timeout;

        let cancel_token = Arc::new(AtomicBool::new(false));
        let cancelled = Arc::clone(&cancel_token);

        // Created outside the task so an abort before the first poll still reports.
        let guard = CompletionGuard::new(id, sender, repaint);

        let join_handle = self.runtime.spawn(async move {
            let outcome = analyse_name(transport.as_ref(), &request, timeout).await;

            if cancelled.load(Ordering::Relaxed) {
                debug!(request = %id, "Analysis finished after cancellation");
                return;
            }

            guard.complete(outcome);
        });

        TaskHandle::new(cancel_token, join_handle)
    }

    /// At most one probe is outstanding at a time.
    pub fn check_health(&self) {
        if self.health_pending.swap(true, Ordering::AcqRel) {
            return;
        }

        let (sender, transport, repaint) = self.task_context();
        let pending = Arc::clone(&self.health_pending);

        self.runtime.spawn(async move {
            let healthy = check_health(transport.as_ref(), HEALTH_TIMEOUT).await;
            pending.store(false, Ordering::Release);

            let _ = sender.send(TaskResult::ServiceHealth(healthy));
            repaint();
        });
    }

    pub fn start_rotation(&self, period: Duration) -> RotationTimer {
        let (sender, _, repaint) = self.task_context();

        let cancel_token = Arc::new(AtomicBool::new(false));
        let cancelled = Arc::clone(&cancel_token);

        info!("Rotating examples every {:?}", period);

        let join_handle = self.runtime.spawn(async move {
            let mut interval = tokio::time::interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                interval.tick().await;
                if cancelled.load(Ordering::Relaxed) {
                    break;
                }
                if sender.send(TaskResult::RotateExample).is_err() {
                    break;
                }
                repaint();
            }
        });

        RotationTimer::new(TaskHandle::new(cancel_token, join_handle))
    }

    #[cfg(test)]
    fn wait_for_result(&self, timeout: Duration) -> Option<TaskResult> {
        self.receiver.recv_timeout(timeout).ok()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::AtomicUsize;

    use super::*;
    use crate::core::{
        http::testing::MockTransport,
        orchestrator::{
            Completion,
            Orchestrator,
        },
        AnalyseError,
    };

    const SMITH: &str = r#"{"name":"Smith","language":"English","ipa":"/smɪθ/"}"#;
    const WAIT: Duration = Duration::from_secs(5);

    fn manager(transport: MockTransport) -> TaskManager {
        TaskManager::new(Arc::new(transport), Arc::new(|| {})).unwrap()
    }

    fn submit(orchestrator: &mut Orchestrator, manager: &TaskManager, name: &str) -> RequestId {
        let (id, request) = orchestrator.begin(name).unwrap();
        orchestrator.track(manager.analyse(id, request));
        id
    }

    #[test]
    fn test_analysis_result_is_delivered() {
        let mut orchestrator = Orchestrator::new();
        let manager = manager(MockTransport::ok(SMITH));
        let id = submit(&mut orchestrator, &manager, "Smith");

        match manager.wait_for_result(WAIT) {
            Some(TaskResult::Analysis { id: reported, outcome }) => {
                assert_eq!(reported, id);
                assert_eq!(orchestrator.complete(reported, outcome), Completion::Applied);
            }
            other => panic!("Expected analysis result, got {:?}", other),
        }

        assert_eq!(orchestrator.state().result().map(|r| r.name.as_str()), Some("Smith"));
    }

    #[test]
    fn test_repaint_is_requested() {
        let repaints = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&repaints);
        let manager = TaskManager::new(
            Arc::new(MockTransport::ok(SMITH)),
            Arc::new(move || {
                counter.fetch_add(1, Ordering::SeqCst);
            }),
        )
        .unwrap();

        let mut orchestrator = Orchestrator::new();
        submit(&mut orchestrator, &manager, "Smith");
        assert!(manager.wait_for_result(WAIT).is_some());
        assert!(repaints.load(Ordering::SeqCst) >= 1);
    }

    #[test]
    fn test_panicking_task_still_clears_loading() {
        let mut orchestrator = Orchestrator::new();
        let manager = manager(MockTransport::panicking());
        submit(&mut orchestrator, &manager, "Smith");

        match manager.wait_for_result(WAIT) {
            Some(TaskResult::Analysis { id, outcome }) => {
                assert_eq!(outcome, Err(AnalyseError::Interrupted));
                orchestrator.complete(id, outcome);
            }
            other => panic!("Expected analysis result, got {:?}", other),
        }

        assert!(!orchestrator.is_loading());
        assert!(orchestrator.state().error().is_some());
    }

    #[test]
    fn test_timeout_is_reported() {
        let mut orchestrator = Orchestrator::new();
        let manager = manager(MockTransport::ok(SMITH).with_delay(Duration::from_secs(10)))
            .with_timeout(Duration::from_millis(50));
        submit(&mut orchestrator, &manager, "Smith");

        match manager.wait_for_result(WAIT) {
            Some(TaskResult::Analysis { id, outcome }) => {
                assert!(outcome.as_ref().is_err_and(|e| e.is_timeout()));
                orchestrator.complete(id, outcome);
            }
            other => panic!("Expected analysis result, got {:?}", other),
        }

        assert!(orchestrator.state().error().unwrap().starts_with("Request timed out"));
    }

    #[test]
    fn test_superseding_request_wins() {
        let mut orchestrator = Orchestrator::new();
        let mut manager = manager(MockTransport::ok(SMITH).with_delay(Duration::from_secs(10)));
        let first = submit(&mut orchestrator, &manager, "李白");

        manager.set_transport(Arc::new(MockTransport::ok(
            r#"{"name":"杜甫","language":"Chinese","ipa":"/tu˥˩ fu˨˩˦/"}"#,
        )));
        let second = submit(&mut orchestrator, &manager, "杜甫");

        let mut seen_second = false;
        while !seen_second {
            match manager.wait_for_result(WAIT) {
                Some(TaskResult::Analysis { id, outcome }) => {
                    if id == first {
                        assert_eq!(orchestrator.complete(id, outcome), Completion::Stale);
                    } else {
                        assert_eq!(id, second);
                        assert_eq!(orchestrator.complete(id, outcome), Completion::Applied);
                        seen_second = true;
                    }
                }
                other => panic!("Expected analysis result, got {:?}", other),
            }
        }

        assert_eq!(orchestrator.state().result().map(|r| r.name.as_str()), Some("杜甫"));
    }

    #[test]
    fn test_health_check() {
        let manager = manager(MockTransport::ok(r#"{"status":"healthy"}"#));
        manager.check_health();

        match manager.wait_for_result(WAIT) {
            Some(TaskResult::ServiceHealth(healthy)) => assert!(healthy),
            other => panic!("Expected health result, got {:?}", other),
        }
    }

    #[test]
    fn test_rotation_timer_stops_on_drop() {
        let mut manager = manager(MockTransport::ok(SMITH));
        let timer = manager.start_rotation(Duration::from_millis(20));

        assert!(matches!(manager.wait_for_result(WAIT), Some(TaskResult::RotateExample)));
        assert!(timer.is_running());

        drop(timer);
        std::thread::sleep(Duration::from_millis(60));
        manager.poll_results();

        assert!(manager.wait_for_result(Duration::from_millis(150)).is_none());
    }
}
