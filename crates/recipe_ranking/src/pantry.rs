use crate::error::RankingError;
use std::collections::BTreeSet;

/// Normalize a single ingredient token: trim surrounding whitespace and
/// lower-case. Pantry text and catalog ingredients both go through this so
/// set intersection is meaningful.
pub(crate) fn normalize_token(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// The normalized set of ingredient tokens a user has on hand.
///
/// A `Pantry` can only be built through [`Pantry::parse`], which rejects
/// input that normalizes to nothing. The ranking engine therefore never
/// sees an empty pantry; "please enter some ingredients" is a parse
/// failure, not an engine state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pantry {
    ingredients: BTreeSet<String>,
}

impl Pantry {
    /// Parse raw comma-separated pantry text into a normalized set.
    ///
    /// Tokens are trimmed and lower-cased, empty pieces are dropped, and
    /// duplicates collapse (order and repetition carry no meaning).
    ///
    /// # Errors
    /// Returns [`RankingError::EmptyPantry`] when nothing usable remains
    /// after normalization (empty or whitespace-only input included).
    pub fn parse(raw: &str) -> Result<Self, RankingError> {
        let ingredients: BTreeSet<String> = raw
            .split(',')
            .map(normalize_token)
            .filter(|token| !token.is_empty())
            .collect();

        if ingredients.is_empty() {
            return Err(RankingError::EmptyPantry);
        }

        Ok(Pantry { ingredients })
    }

    /// Number of distinct ingredients on hand.
    pub fn len(&self) -> usize {
        self.ingredients.len()
    }

    /// Always false: an empty pantry cannot be constructed. Kept so the
    /// type plays well with generic callers expecting the pair.
    pub fn is_empty(&self) -> bool {
        self.ingredients.is_empty()
    }

    pub fn contains(&self, ingredient: &str) -> bool {
        self.ingredients.contains(ingredient)
    }

    pub fn iter(&self) -> impl Iterator<Item = &String> {
        self.ingredients.iter()
    }

    pub(crate) fn as_set(&self) -> &BTreeSet<String> {
        &self.ingredients
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_splits_trims_and_lowercases() {
        let pantry = Pantry::parse("Chicken Breast,  RICE , onion").expect("should parse");

        assert_eq!(pantry.len(), 3);
        assert!(pantry.contains("chicken breast"));
        assert!(pantry.contains("rice"));
        assert!(pantry.contains("onion"));
    }

    #[test]
    fn test_parse_collapses_duplicates() {
        let pantry = Pantry::parse("rice, Rice, RICE ,rice").expect("should parse");

        assert_eq!(pantry.len(), 1, "Duplicates should collapse into a set");
    }

    #[test]
    fn test_parse_drops_empty_pieces() {
        let pantry = Pantry::parse(",rice,, onion ,").expect("should parse");

        assert_eq!(pantry.len(), 2);
        assert!(!pantry.contains(""));
    }

    #[test]
    fn test_parse_empty_input_is_rejected() {
        assert_eq!(Pantry::parse("").unwrap_err(), RankingError::EmptyPantry);
        assert_eq!(Pantry::parse("   ").unwrap_err(), RankingError::EmptyPantry);
        assert_eq!(Pantry::parse(",, ,").unwrap_err(), RankingError::EmptyPantry);
    }

    #[test]
    fn test_interior_whitespace_is_preserved() {
        // Only leading/trailing whitespace is trimmed; multi-word tokens
        // stay intact.
        let pantry = Pantry::parse("  beef broth  ").expect("should parse");

        assert!(pantry.contains("beef broth"));
    }
}
