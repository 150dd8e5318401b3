//! Engine facade: the public inflection API.
//!
//! The [`Inflector`] owns its rule tables and a memo table. It is `Send + Sync`
//! and meant to be built once and shared (by reference or behind `Arc`).
//! Lookups take a read lock on the tables for the whole compute-and-cache
//! step; [`Inflector::add_rules`] takes the write lock for the whole
//! mutate-and-clear step, so a cached answer never outlives the tables that
//! produced it.

use std::path::{Path, PathBuf};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::cache::{Direction, InflectionCache};
use crate::case;
use crate::error::InflectResult;
use crate::rules::file::RuleFile;
use crate::rules::{RuleBatch, RuleSet};

/// Configuration for an [`Inflector`].
#[derive(Debug, Clone)]
pub struct InflectorConfig {
    /// Extra rules applied on top of the built-in tables.
    pub rules_file: Option<PathBuf>,
    /// Memoize pluralize/singularize results (default: true).
    pub cache: bool,
}

impl Default for InflectorConfig {
    fn default() -> Self {
        Self {
            rules_file: None,
            cache: true,
        }
    }
}

/// A count that decides between singular and plural.
///
/// Equality with one is numeric, so `1`, `1u64` and `1.0` all select the
/// singular form.
pub trait Count {
    fn is_one(&self) -> bool;
}

macro_rules! impl_count_int {
    ($($t:ty),*) => {
        $(impl Count for $t {
            fn is_one(&self) -> bool {
                *self == 1
            }
        })*
    };
}

impl_count_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl Count for f32 {
    fn is_one(&self) -> bool {
        *self == 1.0
    }
}

impl Count for f64 {
    fn is_one(&self) -> bool {
        *self == 1.0
    }
}

/// English noun inflection with memoized results and extensible tables.
#[derive(Debug)]
pub struct Inflector {
    rules: RwLock<RuleSet>,
    cache: InflectionCache,
    caching: bool,
}

impl Default for Inflector {
    fn default() -> Self {
        Self::with_rules(RuleSet::defaults())
    }
}

impl Inflector {
    /// Build an inflector from the built-in tables plus the configured
    /// rules file, if any.
    pub fn new(config: InflectorConfig) -> InflectResult<Self> {
        let mut rules = RuleSet::defaults();
        if let Some(path) = &config.rules_file {
            for batch in RuleFile::load(path)?.into_batches() {
                rules.extend(batch)?;
            }
        }
        Ok(Self {
            rules: RwLock::new(rules),
            cache: InflectionCache::new(),
            caching: config.cache,
        })
    }

    /// Build an inflector over the given tables, with caching on.
    pub fn with_rules(rules: RuleSet) -> Self {
        Self {
            rules: RwLock::new(rules),
            cache: InflectionCache::new(),
            caching: true,
        }
    }

    fn read_rules(&self) -> RwLockReadGuard<'_, RuleSet> {
        self.rules.read().expect("rule tables lock poisoned")
    }

    fn write_rules(&self) -> RwLockWriteGuard<'_, RuleSet> {
        self.rules.write().expect("rule tables lock poisoned")
    }

    /// Plural form of `word`.
    pub fn pluralize(&self, word: &str) -> String {
        self.lookup(Direction::Plural, word)
    }

    /// Singular form of `word`.
    pub fn singularize(&self, word: &str) -> String {
        self.lookup(Direction::Singular, word)
    }

    /// `word` unchanged when `count` is one, its plural otherwise.
    pub fn inflect(&self, word: &str, count: impl Count) -> String {
        if count.is_one() {
            word.to_string()
        } else {
            self.pluralize(word)
        }
    }

    fn lookup(&self, direction: Direction, word: &str) -> String {
        let rules = self.read_rules();
        if self.caching {
            if let Some(hit) = self.cache.get(direction, word) {
                return hit;
            }
        }

        let result = match direction {
            Direction::Plural => rules.pluralize(word),
            Direction::Singular => rules.singularize(word),
        };

        if self.caching {
            self.cache.insert(direction, word, result.clone());
        }
        result
    }

    /// Whether `word` has a single form for both numbers.
    pub fn is_uncountable(&self, word: &str) -> bool {
        self.read_rules().is_uncountable(word)
    }

    /// Merge a batch of rules into one table and clear the cache.
    ///
    /// New plural and singular patterns take precedence over the existing
    /// ones: they are checked first, in the order given, ahead of the
    /// built-in rules. A pattern identical to an existing one replaces it in
    /// place. Irregular entries replace by base form or are appended, and new
    /// uncountables are checked first.
    ///
    /// A batch containing any malformed entry is rejected whole: the tables
    /// and the cache are left as they were.
    pub fn add_rules(&self, batch: RuleBatch) -> InflectResult<()> {
        let kind = batch.kind();
        let count = batch.len();
        let mut rules = self.write_rules();
        rules.extend(batch)?;
        self.cache.clear();
        tracing::debug!(%kind, count, "rule table extended");
        Ok(())
    }

    /// Apply every section of a rules file. All-or-nothing across sections.
    pub fn apply_rule_file(&self, file: RuleFile) -> InflectResult<()> {
        let mut rules = self.write_rules();
        let mut staged = rules.clone();
        for batch in file.into_batches() {
            staged.extend(batch)?;
        }
        *rules = staged;
        self.cache.clear();
        Ok(())
    }

    /// Load a rules file from disk and apply it.
    pub fn load_rules_file(&self, path: &Path) -> InflectResult<()> {
        self.apply_rule_file(RuleFile::load(path)?)
    }

    /// Snapshot of the active tables, in rule order.
    pub fn export_rules(&self) -> RuleFile {
        RuleFile::from_rules(&self.read_rules())
    }

    /// The memo table, for inspection.
    pub fn cache(&self) -> &InflectionCache {
        &self.cache
    }

    /// Convert a `ClassName` into a plural `table_name`.
    pub fn tableize(&self, class_name: &str) -> String {
        self.pluralize(&case::underscore(class_name))
    }

    /// Convert a `table_name` into a singular `ClassName`.
    pub fn classify(&self, table_name: &str) -> String {
        case::camelize(&self.singularize(table_name), "_")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::InflectError;

    fn uncached() -> Inflector {
        Inflector::new(InflectorConfig {
            cache: false,
            ..Default::default()
        })
        .unwrap()
    }

    #[test]
    fn irregular_table() {
        let inflector = Inflector::default();
        assert_eq!(inflector.pluralize("person"), "people");
        assert_eq!(inflector.pluralize("Person"), "People");
        assert_eq!(inflector.singularize("people"), "person");
        assert_eq!(inflector.singularize("People"), "Person");
        assert_eq!(inflector.pluralize("child"), "children");
        assert_eq!(inflector.singularize("children"), "child");
        assert_eq!(inflector.pluralize("snowgoose"), "snowgeese");
        assert_eq!(inflector.singularize("meatloaves"), "meatloaf");
        assert_eq!(inflector.singularize("eyeteeth"), "eyetooth");
    }

    #[test]
    fn case_is_preserved() {
        let inflector = Inflector::default();
        assert_eq!(inflector.pluralize("Country"), "Countries");
        assert_eq!(inflector.singularize("Countries"), "Country");
        assert_eq!(inflector.pluralize("Sheep"), "Sheep");
        assert_eq!(inflector.singularize("Sheep"), "Sheep");
    }

    #[test]
    fn inflect_dispatches_on_count() {
        let inflector = Inflector::default();
        assert_eq!(inflector.inflect("hat", 1), "hat");
        assert_eq!(inflector.inflect("hat", 2), "hats");
        assert_eq!(inflector.inflect("hat", 1.0), "hat");
        assert_eq!(inflector.inflect("hat", 0), "hats");
        assert_eq!(inflector.inflect("hat", 1.5f32), "hats");
        assert_eq!(inflector.inflect("child", 3usize), "children");
        assert!(inflector.cache().len(Direction::Plural) > 0);
    }

    #[test]
    fn results_are_cached_per_direction() {
        let inflector = Inflector::default();
        assert!(inflector.cache().is_empty());
        inflector.pluralize("cat");
        inflector.pluralize("cat");
        assert_eq!(inflector.cache().len(Direction::Plural), 1);
        assert_eq!(inflector.cache().len(Direction::Singular), 0);
        inflector.singularize("cats");
        assert_eq!(inflector.cache().len(Direction::Singular), 1);
    }

    #[test]
    fn cached_matches_uncached() {
        let cached = Inflector::default();
        let fresh = uncached();
        for word in ["status", "person", "Country", "box", "sheep", "", "xyz123", "octopus", "wife"] {
            let first = cached.pluralize(word);
            assert_eq!(cached.pluralize(word), first);
            assert_eq!(first, fresh.pluralize(word));
            assert_eq!(cached.singularize(&first), fresh.singularize(&first));
        }
        assert!(fresh.cache().is_empty());
    }

    #[test]
    fn add_rules_invalidates_cached_answers() {
        let inflector = Inflector::default();
        assert_eq!(inflector.pluralize("octopus"), "octopuses");
        assert_eq!(inflector.singularize("pokemon"), "pokemon");
        assert_eq!(inflector.pluralize("software"), "softwares");

        inflector
            .add_rules(RuleBatch::irregular([("octopus", "octopodes")]))
            .unwrap();
        assert!(inflector.cache().is_empty());
        assert_eq!(inflector.pluralize("octopus"), "octopodes");

        inflector
            .add_rules(RuleBatch::uncountable(["software"]))
            .unwrap();
        assert_eq!(inflector.pluralize("software"), "software");
    }

    #[test]
    fn add_plural_and_singular_rules() {
        let inflector = Inflector::default();
        assert_eq!(inflector.pluralize("cherub"), "cherubs");
        inflector
            .add_rules(RuleBatch::plural([(r"(?i)(cherub)$", "${1}im")]))
            .unwrap();
        inflector
            .add_rules(RuleBatch::singular([(r"(?i)(cherub)im$", "${1}")]))
            .unwrap();
        assert_eq!(inflector.pluralize("Cherub"), "Cherubim");
        assert_eq!(inflector.singularize("cherubim"), "cherub");
    }

    #[test]
    fn added_patterns_take_precedence_over_builtins() {
        let inflector = Inflector::default();
        assert_eq!(inflector.pluralize("virus"), "viruses");
        inflector
            .add_rules(RuleBatch::plural([(r"(?i)(vir)us$", "${1}i")]))
            .unwrap();
        assert_eq!(inflector.pluralize("virus"), "viri");
        assert_eq!(inflector.export_rules().plural[0].pattern, r"(?i)(vir)us$");
    }

    #[test]
    fn rejected_batch_keeps_cache_and_tables() {
        let inflector = Inflector::default();
        inflector.pluralize("cat");
        let err = inflector
            .add_rules(RuleBatch::singular([("([", "")]))
            .unwrap_err();
        assert!(matches!(err, InflectError::InvalidPattern { .. }));
        assert_eq!(inflector.cache().len(Direction::Plural), 1);
        assert_eq!(inflector.singularize("cats"), "cat");
    }

    #[test]
    fn apply_rule_file_is_all_or_nothing() {
        let inflector = Inflector::default();
        let file = RuleFile::from_toml_str(
            r#"
uncountable = ["("]
[[irregular]]
singular = "octopus"
plural = "octopodes"
"#,
            "<test>",
        )
        .unwrap();
        assert!(inflector.apply_rule_file(file).is_err());
        assert_eq!(inflector.pluralize("octopus"), "octopuses");
    }

    #[test]
    fn export_round_trips_into_fresh_engine() {
        let inflector = Inflector::default();
        inflector
            .add_rules(RuleBatch::irregular([("octopus", "octopodes")]))
            .unwrap();
        inflector
            .add_rules(RuleBatch::uncountable(["software"]))
            .unwrap();
        let exported = inflector.export_rules();

        let reloaded = Inflector::default();
        reloaded.apply_rule_file(exported.clone()).unwrap();
        assert_eq!(reloaded.export_rules(), exported);
        assert_eq!(reloaded.pluralize("octopus"), "octopodes");
    }

    #[test]
    fn tableize_and_classify() {
        let inflector = Inflector::default();
        assert_eq!(inflector.tableize("RedApple"), "red_apples");
        assert_eq!(inflector.tableize("RedApples"), "red_apples");
        assert_eq!(inflector.tableize("SalesPerson"), "sales_people");
        assert_eq!(inflector.classify("red_apples"), "RedApple");
        assert_eq!(inflector.classify("red_apple"), "RedApple");
        assert_eq!(inflector.classify("sales_people"), "SalesPerson");
    }

    #[test]
    fn empty_tables_pass_words_through() {
        let inflector = Inflector::with_rules(RuleSet::empty());
        assert_eq!(inflector.pluralize("cat"), "cat");
        assert_eq!(inflector.singularize("cats"), "cats");
    }
}
