use thiserror::Error;

#[derive(Error, Debug)]
pub enum HearthError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Input stream closed")]
    InputClosed,

    #[error("Failed to load module '{identity}': {reason}")]
    ModuleLoad { identity: String, reason: String },

    #[error("Command '{0}' not found.")]
    UnknownCommand(String),

    #[error("No help available for '{0}': command not found.")]
    UnknownHelpTopic(String),

    #[error("Error executing command '{command}': {reason}")]
    Execution { command: String, reason: String },

    #[error("Table construction error: {0}")]
    TableConstruction(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
