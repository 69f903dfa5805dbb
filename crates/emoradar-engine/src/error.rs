use emoradar_core::{Concern, InterventionType};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Catalog deserialization failed: {0}")]
    Catalog(#[from] serde_json::Error),
    #[error("Catalog could not be read: {0}")]
    Io(#[from] std::io::Error),
    #[error("Catalog contains no concerns")]
    EmptyCatalog,
    #[error("Concern '{0}' is listed more than once")]
    DuplicateConcern(Concern),
    #[error("Concern '{concern}' has no strategies")]
    EmptyStrategy { concern: Concern },
    #[error("Intervention '{intervention}' is listed more than once for '{concern}'")]
    DuplicateIntervention {
        concern: Concern,
        intervention: InterventionType,
    },
    #[error("No actions for '{concern}' / '{intervention}'")]
    EmptyActions {
        concern: Concern,
        intervention: InterventionType,
    },
    #[error("Duplicate action '{action}' for '{concern}' / '{intervention}'")]
    DuplicateAction {
        concern: Concern,
        intervention: InterventionType,
        action: String,
    },
}

pub type Result<T> = std::result::Result<T, EngineError>;
