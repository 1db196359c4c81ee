use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    #[error("Invalid scenario: {0}")]
    InvalidScenario(String),
    #[error("Unknown preset: {id}")]
    UnknownPreset { id: String },
}
