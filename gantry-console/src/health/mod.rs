//! Health-source metric path configuration
//!
//! Dependent-dropdown navigation over the monitoring provider's metric
//! tree: each selection narrows the next level's query scope and extends a
//! `|`-delimited path.

mod browser;
mod path_picker;

pub use browser::HealthSourceBrowser;
pub use path_picker::{DISPLAY_SEPARATOR, MetricPathPicker, PATH_SEPARATOR, PathLevel};

use shared::error::AppError;
use thiserror::Error;

/// Health-source flow errors
#[derive(Debug, Error)]
pub enum HealthSourceError {
    #[error("level {index} does not exist (have {len})")]
    LevelOutOfRange { index: usize, len: usize },

    #[error("{0}")]
    Api(AppError),
}
