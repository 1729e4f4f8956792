mod handle;
mod manager;
pub mod types;

use std::sync::Arc;

pub use handle::{
    RotationTimer,
    TaskHandle,
};
pub use manager::TaskManager;
pub use types::TaskResult;

/// Wakes the UI after a result has been queued.
pub type Repaint = Arc<dyn Fn() + Send + Sync>;
