use crate::pantry::normalize_token;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Recipe data needed by the ranking engine.
///
/// Records are supplied by whatever loads the catalog (file, database,
/// fixture) and are read-only to the engine. `complexity` is a step count
/// carried through for display; it does not participate in scoring.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recipe {
    pub name: String,
    /// Normalized ingredient tokens. `BTreeSet` keeps iteration (and any
    /// missing-ingredient display derived from it) deterministic.
    pub ingredients: BTreeSet<String>,
    /// Community popularity rating, semantically in [0, 5].
    pub rating: f32,
    /// Number of preparation steps, display-only.
    pub complexity: u32,
}

impl Recipe {
    /// Build a recipe, normalizing each ingredient token the same way
    /// pantry text is normalized. Empty tokens are dropped; an empty
    /// ingredient set is allowed (the engine applies a documented
    /// admission policy for it).
    pub fn new(
        name: impl Into<String>,
        ingredients: impl IntoIterator<Item = impl AsRef<str>>,
        rating: f32,
        complexity: u32,
    ) -> Self {
        let ingredients = ingredients
            .into_iter()
            .map(|token| normalize_token(token.as_ref()))
            .filter(|token| !token.is_empty())
            .collect();

        Recipe {
            name: name.into(),
            ingredients,
            rating,
            complexity,
        }
    }
}
