use thiserror::Error;

/// Rejected construction inputs.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("Invalid roster for '{team}': {reason}")]
    InvalidRoster { team: String, reason: String },

    #[error("Invalid duration: {minutes} minutes")]
    InvalidDuration { minutes: u32 },

    #[error("Invalid quarter count: {quarters}")]
    InvalidQuarters { quarters: u32 },

    #[error("Invalid player '{player}': {reason}")]
    InvalidPlayer { player: String, reason: String },

    #[error("Invalid engine tuning: {0}")]
    InvalidTuning(String),
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionError {
    #[error("Cannot pick from an empty population")]
    EmptyPopulation,
}

#[derive(Error, Debug)]
pub enum MatchError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Selection(#[from] SelectionError),

    #[error("Unsupported schema version: found {found}, expected {expected}")]
    UnsupportedSchema { found: u8, expected: u8 },

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for MatchError {
    fn from(err: serde_json::Error) -> Self {
        if err.is_data() || err.is_syntax() || err.is_eof() {
            MatchError::Deserialization(err.to_string())
        } else {
            MatchError::Serialization(err.to_string())
        }
    }
}

impl From<serde_yaml::Error> for MatchError {
    fn from(err: serde_yaml::Error) -> Self {
        MatchError::Deserialization(err.to_string())
    }
}

impl MatchError {
    /// Errors the caller can fix by changing the request.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            MatchError::Config(_)
                | MatchError::UnsupportedSchema { .. }
                | MatchError::Deserialization(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, MatchError>;
