use thiserror::Error;

#[derive(Debug, Error)]
pub enum PaymentResourceError {
    #[error("invalid value {1:?} for {0}")]
    InvalidEnumValue(&'static str, String),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("logger setup failed: {0}")]
    Logger(#[from] log::SetLoggerError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
