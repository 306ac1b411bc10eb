use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum RankingError {
    #[error("Pantry is empty: enter at least one ingredient")]
    EmptyPantry,
}
