#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AppError {
    #[error("Data error: {0}")]
    DataError(String),

    #[error("Source error: {0}")]
    SourceError(String),

    /// The only error the price provider hands to its callers.
    #[error("Failed to fetch electricity prices")]
    FetchFailed,
}
