use thiserror::Error;

#[derive(Error, Debug)]
pub enum LivestockAiError {
    #[error("Config error: {0}")]
    Config(String),

    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Folder not found: {0}")]
    FolderNotFound(String),

    #[error("No images found in: {0}")]
    NoImagesFound(String),

    #[error("Failed to read image: {0}")]
    ImageLoad(String),

    #[error("Classification request failed: {0}")]
    ApiCall(String),

    #[error("Record not found: {0}")]
    RecordNotFound(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, LivestockAiError>;
