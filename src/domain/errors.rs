/// Crate-wide error type. The KPI engine itself never fails; only configuration
/// parsing and upstream payload ingestion can.
#[derive(Debug, Clone, PartialEq)]
pub enum AppError {
    ConfigurationError(String),
    IngestionError(String),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::ConfigurationError(msg) => write!(f, "Configuration Error: {}", msg),
            AppError::IngestionError(msg) => write!(f, "Ingestion Error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

impl From<serde_json::Error> for AppError {
    fn from(error: serde_json::Error) -> Self {
        AppError::IngestionError(error.to_string())
    }
}

// Simple convenience type alias
pub type KpiResult<T> = Result<T, AppError>;
