use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Event not found: {id}")]
    NotFound { id: String },

    #[error("Invalid event data: {0}")]
    InvalidData(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Invalid event ID: {0}")]
    InvalidId(String),
}
