pub mod catalogue;
pub mod config;
pub mod errors;
pub mod http;
pub mod input;
pub mod models;
pub mod orchestrator;
pub mod rotation;
pub mod tasks;
pub mod view;

pub use catalogue::{
    Catalogue,
    ExampleEntry,
};
pub use config::Settings;
pub use errors::{
    AnalyseError,
    SaynameError,
};
pub use models::{
    AnalysisRequest,
    AnalysisResult,
};
pub use orchestrator::{
    Orchestrator,
    RequestId,
    UiState,
};
