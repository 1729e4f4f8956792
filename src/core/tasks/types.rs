use crate::core::{
    orchestrator::RequestId,
    AnalyseError,
    AnalysisResult,
};

#[derive(Debug, Clone)]
pub enum TaskResult {
    Analysis { id: RequestId, outcome: Result<AnalysisResult, AnalyseError> },
    ServiceHealth(bool),
    RotateExample,
}

impl TaskResult {
    pub fn task_type(&self) -> &'static str {
        match self {
            TaskResult::Analysis { .. } => "analysis",
            TaskResult::ServiceHealth(_) => "service_health",
            TaskResult::RotateExample => "rotate_example",
        }
    }
}
