use crate::catalog::Recipe;
use crate::pantry::Pantry;
use std::collections::BTreeSet;

/// Reward per ingredient shared between the pantry and a recipe.
pub const INGREDIENT_MATCH_WEIGHT: f32 = 20.0;

/// Penalty per ingredient the recipe needs but the pantry lacks. Weighted
/// 2.5x the match reward so recipes requiring many extra purchases rank
/// low even with several shared ingredients.
pub const MISSING_INGREDIENT_PENALTY: f32 = 50.0;

/// Fixed bonus for recipes the user can make immediately (no missing
/// ingredients), pushing fully-coverable recipes above partially-coverable
/// ones with similar raw match counts.
pub const PERFECT_MATCH_BONUS: f32 = 50.0;

/// Small tie-breaking contribution from community rating. Bounded by the
/// [0, 5] rating range so it can separate near-equal recipes but never
/// override a match/penalty gap.
pub const POPULARITY_WEIGHT: f32 = 2.0;

/// A recipe paired with its computed ranking score for one pantry.
///
/// Borrows the source recipe: the engine reads the catalog and produces
/// wrappers, it never mutates or copies recipe records.
#[derive(Debug, Clone)]
pub struct ScoredRecipe<'a> {
    pub recipe: &'a Recipe,
    /// The ranking key. Always strictly positive for returned entries.
    pub score: f32,
    /// `recipe.ingredients − pantry`, sorted for stable display.
    pub missing_ingredients: BTreeSet<String>,
}

impl ScoredRecipe<'_> {
    pub fn missing_count(&self) -> usize {
        self.missing_ingredients.len()
    }

    /// True when the pantry covers the full ingredient list.
    pub fn is_perfect_match(&self) -> bool {
        self.missing_ingredients.is_empty()
    }
}

/// Rank a catalog of recipes against a pantry.
///
/// For each recipe the score is
///
/// ```text
/// |common| * 20 − |missing| * 50 + (50 if nothing missing) + rating * 2
/// ```
///
/// Recipes scoring <= 0 are dropped; survivors are sorted by score
/// descending with ties keeping catalog order (stable sort). The result is
/// the full filtered ranking — callers slice to their own display limit.
///
/// Edge-case policy: a recipe with an empty ingredient list has nothing in
/// common and nothing missing, so the arithmetic alone would admit it on
/// the perfect-match bonus. Such recipes are admitted only when their
/// rating is positive.
///
/// Pure function of its inputs: no hidden state, clock, or randomness, so
/// repeated calls return identical output.
pub fn rank<'a>(pantry: &Pantry, catalog: &'a [Recipe]) -> Vec<ScoredRecipe<'a>> {
    let mut ranked: Vec<ScoredRecipe<'a>> = catalog
        .iter()
        .filter_map(|recipe| score_recipe(pantry, recipe))
        .collect();

    // Stable sort: equal scores retain catalog order.
    ranked.sort_by(|a, b| b.score.total_cmp(&a.score));
    ranked
}

/// Score one recipe, returning `None` when it does not pass the admission
/// gate (score <= 0, or the empty-ingredient-list policy).
fn score_recipe<'a>(pantry: &Pantry, recipe: &'a Recipe) -> Option<ScoredRecipe<'a>> {
    if recipe.ingredients.is_empty() && recipe.rating <= 0.0 {
        return None;
    }

    let common_count = recipe
        .ingredients
        .intersection(pantry.as_set())
        .count();
    let missing_ingredients: BTreeSet<String> = recipe
        .ingredients
        .difference(pantry.as_set())
        .cloned()
        .collect();

    let ingredient_match_score = common_count as f32 * INGREDIENT_MATCH_WEIGHT;
    let missing_penalty = missing_ingredients.len() as f32 * MISSING_INGREDIENT_PENALTY;
    let perfect_match_bonus = if missing_ingredients.is_empty() {
        PERFECT_MATCH_BONUS
    } else {
        0.0
    };
    let popularity_bonus = recipe.rating * POPULARITY_WEIGHT;

    let score = ingredient_match_score - missing_penalty + perfect_match_bonus + popularity_bonus;

    if score <= 0.0 {
        return None;
    }

    Some(ScoredRecipe {
        recipe,
        score,
        missing_ingredients,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pantry(raw: &str) -> Pantry {
        Pantry::parse(raw).expect("test pantry should parse")
    }

    fn recipe(name: &str, ingredients: &[&str], rating: f32) -> Recipe {
        Recipe::new(name, ingredients.iter().copied(), rating, 5)
    }

    #[test]
    fn test_full_coverage_scores_match_plus_bonus() {
        let pantry = pantry("chicken breast, rice, onion");
        let catalog = vec![recipe(
            "Chicken Rice",
            &["chicken breast", "rice", "onion"],
            4.0,
        )];

        let ranked = rank(&pantry, &catalog);

        assert_eq!(ranked.len(), 1);
        // 3 * 20 - 0 + 50 + 4.0 * 2 = 118
        assert_eq!(ranked[0].score, 118.0);
        assert_eq!(ranked[0].missing_count(), 0);
        assert!(ranked[0].is_perfect_match());
    }

    #[test]
    fn test_heavy_missing_penalty_excludes_recipe() {
        let pantry = pantry("chicken breast, rice, onion");
        let catalog = vec![recipe(
            "Chicken Soup",
            &["chicken breast", "rice", "onion", "beef broth", "celery"],
            4.0,
        )];

        // 3 * 20 - 2 * 50 + 0 + 8 = -32 -> dropped
        let ranked = rank(&pantry, &catalog);

        assert!(ranked.is_empty(), "Negative score should be filtered out");
    }

    #[test]
    fn test_zero_overlap_is_never_admitted() {
        let pantry = pantry("rice");
        let catalog = vec![recipe("Brownies", &["flour", "cocoa", "sugar"], 5.0)];

        let ranked = rank(&pantry, &catalog);

        assert!(ranked.is_empty());
    }

    #[test]
    fn test_empty_ingredient_list_admitted_on_positive_rating() {
        let pantry = pantry("rice");
        let catalog = vec![Recipe::new("Mystery Dish", Vec::<&str>::new(), 3.0, 1)];

        let ranked = rank(&pantry, &catalog);

        assert_eq!(ranked.len(), 1);
        // 0 - 0 + 50 + 3.0 * 2 = 56
        assert_eq!(ranked[0].score, 56.0);
        assert_eq!(ranked[0].missing_count(), 0);
    }

    #[test]
    fn test_empty_ingredient_list_rejected_on_zero_rating() {
        let pantry = pantry("rice");
        let catalog = vec![Recipe::new("Unrated Mystery", Vec::<&str>::new(), 0.0, 1)];

        let ranked = rank(&pantry, &catalog);

        assert!(
            ranked.is_empty(),
            "Empty ingredient list needs a positive rating to be admitted"
        );
    }

    #[test]
    fn test_missing_ingredients_are_recipe_minus_pantry() {
        let pantry = pantry("rice, egg, soy sauce, onion, garlic");
        let catalog = vec![recipe(
            "Fried Rice",
            &["rice", "egg", "soy sauce", "scallion"],
            4.2,
        )];

        let ranked = rank(&pantry, &catalog);

        assert_eq!(ranked.len(), 1);
        let missing: Vec<&str> = ranked[0]
            .missing_ingredients
            .iter()
            .map(String::as_str)
            .collect();
        assert_eq!(missing, vec!["scallion"]);
    }

    #[test]
    fn test_popularity_separates_equal_matches() {
        let pantry = pantry("rice, egg");
        let catalog = vec![
            recipe("Plain Omelette", &["rice", "egg"], 2.0),
            recipe("Golden Omelette", &["rice", "egg"], 5.0),
        ];

        let ranked = rank(&pantry, &catalog);

        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0].recipe.name, "Golden Omelette");
        assert_eq!(ranked[0].score, 100.0);
        assert_eq!(ranked[1].score, 94.0);
    }
}
