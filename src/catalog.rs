use crate::error::AppError;
use recipe_ranking::Recipe;
use serde::Deserialize;
use std::path::Path;
use validator::Validate;

/// One recipe record as stored in the catalog file, before normalization.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CatalogEntry {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    /// Raw ingredient strings; normalized (trim + lowercase) on conversion.
    /// An empty list is allowed — the engine applies its documented
    /// admission policy for such recipes.
    pub ingredients: Vec<String>,
    #[validate(range(min = 0.0, max = 5.0, message = "rating must be within 0..=5"))]
    pub rating: f32,
    pub complexity: u32,
}

impl From<CatalogEntry> for Recipe {
    fn from(entry: CatalogEntry) -> Self {
        Recipe::new(entry.name, entry.ingredients, entry.rating, entry.complexity)
    }
}

/// Load and validate a recipe catalog from a JSON file.
///
/// The file holds an array of [`CatalogEntry`] records. Loading is atomic:
/// the first malformed or invalid entry fails the whole load, no partial
/// catalog is returned.
pub fn load_catalog(path: &Path) -> Result<Vec<Recipe>, AppError> {
    if !path.exists() {
        return Err(AppError::CatalogNotFound(path.display().to_string()));
    }

    let raw = std::fs::read_to_string(path)?;
    let entries: Vec<CatalogEntry> = serde_json::from_str(&raw)?;

    let mut recipes = Vec::with_capacity(entries.len());
    for entry in entries {
        entry
            .validate()
            .map_err(|e| AppError::InvalidCatalogEntry {
                name: entry.name.clone(),
                reason: e.to_string(),
            })?;
        recipes.push(Recipe::from(entry));
    }

    tracing::info!(count = recipes.len(), path = %path.display(), "Catalog loaded");
    Ok(recipes)
}
