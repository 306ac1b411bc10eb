use recipe_ranking::RankingError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Catalog file not found: {0}")]
    CatalogNotFound(String),

    #[error("Failed to read catalog: {0}")]
    CatalogIo(#[from] std::io::Error),

    #[error("Malformed catalog: {0}")]
    CatalogParse(#[from] serde_json::Error),

    #[error("Invalid catalog entry '{name}': {reason}")]
    InvalidCatalogEntry { name: String, reason: String },

    #[error(transparent)]
    Ranking(#[from] RankingError),
}
