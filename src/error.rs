use thiserror::Error;

/// Request-scoped failures of the catalog pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("invalid color format: {0:?}")]
    InvalidColorFormat(String),
    #[error("app not found: {0}")]
    AppNotFound(String),
    #[error("app {0} has no icon colors")]
    EmptyIconColors(String),
}

pub type Result<T> = std::result::Result<T, CatalogError>;
