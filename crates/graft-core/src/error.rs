use thiserror::Error;

#[derive(Debug, Error)]
pub enum GraftError {
    #[error("selector error: {0}")]
    Selector(String),

    #[error("render error: {0}")]
    Render(String),

    #[error("config error: {0}")]
    Config(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type GraftResult<T> = Result<T, GraftError>;
