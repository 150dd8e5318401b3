//! Memo table for computed inflections.
//!
//! One concurrent map per direction. Entries live until the next rule
//! mutation, which clears both maps in full.

use dashmap::DashMap;

/// Which primitive produced a cached answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Plural,
    Singular,
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Plural => write!(f, "plural"),
            Self::Singular => write!(f, "singular"),
        }
    }
}

/// Word → result maps for both directions.
#[derive(Debug, Default)]
pub struct InflectionCache {
    plural: DashMap<String, String>,
    singular: DashMap<String, String>,
}

impl InflectionCache {
    pub fn new() -> Self {
        Self::default()
    }

    fn map(&self, direction: Direction) -> &DashMap<String, String> {
        match direction {
            Direction::Plural => &self.plural,
            Direction::Singular => &self.singular,
        }
    }

    pub fn get(&self, direction: Direction, word: &str) -> Option<String> {
        self.map(direction).get(word).map(|entry| entry.value().clone())
    }

    pub fn insert(&self, direction: Direction, word: &str, result: String) {
        self.map(direction).insert(word.to_string(), result);
    }

    /// Number of cached answers in one direction.
    pub fn len(&self, direction: Direction) -> usize {
        self.map(direction).len()
    }

    pub fn is_empty(&self) -> bool {
        self.plural.is_empty() && self.singular.is_empty()
    }

    /// Drop every cached answer in both directions.
    pub fn clear(&self) {
        let dropped = self.plural.len() + self.singular.len();
        self.plural.clear();
        self.singular.clear();
        tracing::debug!(dropped, "inflection cache cleared");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directions_are_independent() {
        let cache = InflectionCache::new();
        cache.insert(Direction::Plural, "news", "newses".into());
        assert_eq!(cache.get(Direction::Plural, "news").as_deref(), Some("newses"));
        assert_eq!(cache.get(Direction::Singular, "news"), None);
        assert_eq!(cache.len(Direction::Plural), 1);
        assert_eq!(cache.len(Direction::Singular), 0);
    }

    #[test]
    fn clear_empties_both_directions() {
        let cache = InflectionCache::new();
        cache.insert(Direction::Plural, "cat", "cats".into());
        cache.insert(Direction::Singular, "cats", "cat".into());
        assert!(!cache.is_empty());
        cache.clear();
        assert!(cache.is_empty());
        assert_eq!(cache.get(Direction::Plural, "cat"), None);
    }
}
