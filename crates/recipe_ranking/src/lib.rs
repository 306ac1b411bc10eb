pub mod catalog;
pub mod engine;
pub mod error;
pub mod pantry;

pub use catalog::Recipe;
pub use engine::{rank, ScoredRecipe};
pub use error::RankingError;
pub use pantry::Pantry;
