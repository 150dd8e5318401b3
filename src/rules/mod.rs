//! Rule tables and the match-and-apply algorithm.
//!
//! A [`RuleSet`] owns the four tables that drive inflection:
//!
//! - **Irregular map**: base form ↔ plural pairs matched as word suffixes
//! - **Plural rules**: ordered (pattern, replacement) list, first match wins
//! - **Singular rules**: the approximate inverse of the plural list
//! - **Uncountables**: whole-word matchers for nouns with a single form
//!
//! The `RuleSet` itself is uncached and single-owner; [`crate::engine::Inflector`]
//! wraps it with a lock and a memo table.

pub mod defaults;
pub mod file;

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;

use crate::case::capitalize;
use crate::error::{InflectError, InflectResult};

/// The four rule tables, as named when extending them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleKind {
    Irregular,
    Plural,
    Singular,
    Uncountable,
}

impl std::fmt::Display for RuleKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Irregular => write!(f, "irregular"),
            Self::Plural => write!(f, "plural"),
            Self::Singular => write!(f, "singular"),
            Self::Uncountable => write!(f, "uncountable"),
        }
    }
}

impl std::str::FromStr for RuleKind {
    type Err = InflectError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "irregular" => Ok(Self::Irregular),
            "plural" => Ok(Self::Plural),
            "singular" => Ok(Self::Singular),
            "uncountable" => Ok(Self::Uncountable),
            _ => Err(InflectError::UnknownRuleKind { kind: s.into() }),
        }
    }
}

/// A batch of new rules for one table, as accepted by
/// [`Inflector::add_rules`](crate::engine::Inflector::add_rules).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleBatch {
    /// (base form, plural) pairs.
    Irregular(Vec<(String, String)>),
    /// (pattern, replacement) pairs for the plural table.
    Plural(Vec<(String, String)>),
    /// (pattern, replacement) pairs for the singular table.
    Singular(Vec<(String, String)>),
    /// Whole-word matchers.
    Uncountable(Vec<String>),
}

impl RuleBatch {
    pub fn irregular<I, S, P>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, P)>,
        S: Into<String>,
        P: Into<String>,
    {
        Self::Irregular(collect_pairs(entries))
    }

    pub fn plural<I, S, P>(rules: I) -> Self
    where
        I: IntoIterator<Item = (S, P)>,
        S: Into<String>,
        P: Into<String>,
    {
        Self::Plural(collect_pairs(rules))
    }

    pub fn singular<I, S, P>(rules: I) -> Self
    where
        I: IntoIterator<Item = (S, P)>,
        S: Into<String>,
        P: Into<String>,
    {
        Self::Singular(collect_pairs(rules))
    }

    pub fn uncountable<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Uncountable(words.into_iter().map(Into::into).collect())
    }

    /// Which table this batch extends.
    pub fn kind(&self) -> RuleKind {
        match self {
            Self::Irregular(_) => RuleKind::Irregular,
            Self::Plural(_) => RuleKind::Plural,
            Self::Singular(_) => RuleKind::Singular,
            Self::Uncountable(_) => RuleKind::Uncountable,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Self::Irregular(v) | Self::Plural(v) | Self::Singular(v) => v.len(),
            Self::Uncountable(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn collect_pairs<I, S, P>(pairs: I) -> Vec<(String, String)>
where
    I: IntoIterator<Item = (S, P)>,
    S: Into<String>,
    P: Into<String>,
{
    pairs
        .into_iter()
        .map(|(a, b)| (a.into(), b.into()))
        .collect()
}

// ---------------------------------------------------------------------------
// Pattern rules
// ---------------------------------------------------------------------------

/// A compiled (matcher, replacement) pair.
#[derive(Debug, Clone)]
pub struct PatternRule {
    regex: Regex,
    replacement: String,
}

impl PatternRule {
    /// Compile a rule. `kind` only labels the error.
    pub fn new(kind: RuleKind, pattern: &str, replacement: &str) -> InflectResult<Self> {
        let regex = Regex::new(pattern).map_err(|e| InflectError::InvalidPattern {
            kind,
            pattern: pattern.into(),
            message: e.to_string(),
        })?;
        Ok(Self {
            regex,
            replacement: replacement.into(),
        })
    }

    /// The pattern source, which also identifies the rule when merging.
    pub fn pattern(&self) -> &str {
        self.regex.as_str()
    }

    pub fn replacement(&self) -> &str {
        &self.replacement
    }

    /// Rewrite `word` if the matcher succeeds.
    pub fn apply(&self, word: &str) -> Option<String> {
        if !self.regex.is_match(word) {
            return None;
        }
        Some(
            self.regex
                .replace_all(word, self.replacement.as_str())
                .into_owned(),
        )
    }
}

/// Merge `incoming` into an ordered rule list: a rule whose pattern already
/// exists replaces it in place, the rest go in front, in their given order,
/// so they take precedence over every existing rule including the catch-all.
fn merge_patterns(existing: &mut Vec<PatternRule>, incoming: Vec<PatternRule>) {
    let mut fresh = Vec::new();
    for rule in incoming {
        match existing.iter_mut().find(|r| r.pattern() == rule.pattern()) {
            Some(slot) => *slot = rule,
            None => fresh.push(rule),
        }
    }
    fresh.append(existing);
    *existing = fresh;
}

fn compile_patterns(kind: RuleKind, rules: &[(String, String)]) -> InflectResult<Vec<PatternRule>> {
    rules
        .iter()
        .map(|(pattern, replacement)| PatternRule::new(kind, pattern, replacement))
        .collect()
}

// ---------------------------------------------------------------------------
// Irregular map
// ---------------------------------------------------------------------------

/// Which way an irregular lookup converts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Conversion {
    ToPlural,
    ToSingular,
}

/// Ordered, bidirectional base form ↔ plural table. All entries lowercase.
#[derive(Debug, Clone, Default)]
pub struct IrregularMap {
    entries: Vec<(String, String)>,
    by_singular: HashMap<String, usize>,
    by_plural: HashMap<String, usize>,
}

impl IrregularMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the entry keyed by `singular`.
    pub fn insert(&mut self, singular: &str, plural: &str) {
        let singular = singular.to_lowercase();
        let plural = plural.to_lowercase();
        match self.by_singular.get(&singular) {
            Some(&idx) => self.entries[idx].1 = plural,
            None => self.entries.push((singular, plural)),
        }
        self.reindex();
    }

    fn reindex(&mut self) {
        self.by_singular.clear();
        self.by_plural.clear();
        for (idx, (singular, plural)) in self.entries.iter().enumerate() {
            self.by_singular.entry(singular.clone()).or_insert(idx);
            self.by_plural.entry(plural.clone()).or_insert(idx);
        }
    }

    pub fn entries(&self) -> &[(String, String)] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Irregular plural of `word`, if it ends with a known base form.
    pub fn pluralize(&self, word: &str) -> Option<String> {
        self.convert(word, Conversion::ToPlural)
    }

    /// Irregular base form of `word`, if it ends with a known plural.
    pub fn singularize(&self, word: &str) -> Option<String> {
        self.convert(word, Conversion::ToSingular)
    }

    /// Scan suffixes longest first, case-insensitively. The first suffix
    /// naming a known form decides: the convertible form is swapped for its
    /// counterpart, a form already in the target number is kept as is. A
    /// capital on the matched suffix carries over to the replacement.
    fn convert(&self, word: &str, conversion: Conversion) -> Option<String> {
        let (from, to) = match conversion {
            Conversion::ToPlural => (&self.by_singular, &self.by_plural),
            Conversion::ToSingular => (&self.by_plural, &self.by_singular),
        };

        for (start, _) in word.char_indices() {
            let suffix = &word[start..];
            let lower = suffix.to_lowercase();

            if let Some(&idx) = from.get(&lower) {
                let (singular, plural) = &self.entries[idx];
                let replacement = match conversion {
                    Conversion::ToPlural => plural,
                    Conversion::ToSingular => singular,
                };
                let starts_upper = suffix.chars().next().is_some_and(char::is_uppercase);
                let replacement = if starts_upper {
                    capitalize(replacement)
                } else {
                    replacement.clone()
                };
                return Some(format!("{}{replacement}", &word[..start]));
            }

            if to.contains_key(&lower) {
                return Some(word.to_string());
            }
        }
        None
    }
}

// ---------------------------------------------------------------------------
// Uncountables
// ---------------------------------------------------------------------------

/// Ordered whole-word matchers, compiled into one anchored alternation.
#[derive(Debug, Clone)]
pub struct UncountableSet {
    sources: Vec<String>,
    matcher: Option<Regex>,
}

impl UncountableSet {
    pub fn new(sources: Vec<String>) -> InflectResult<Self> {
        for source in &sources {
            anchored(&[source.as_str()])?;
        }
        let matcher = if sources.is_empty() {
            None
        } else {
            let parts: Vec<&str> = sources.iter().map(String::as_str).collect();
            Some(anchored(&parts)?)
        };
        Ok(Self { sources, matcher })
    }

    pub fn is_match(&self, word: &str) -> bool {
        self.matcher.as_ref().is_some_and(|re| re.is_match(word))
    }

    pub fn sources(&self) -> &[String] {
        &self.sources
    }

    pub fn len(&self) -> usize {
        self.sources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }

    /// A copy with `incoming` checked first. Duplicates of an incoming entry
    /// further down are dropped.
    fn prepend(&self, incoming: Vec<String>) -> InflectResult<Self> {
        let mut sources = incoming;
        for existing in &self.sources {
            if !sources.contains(existing) {
                sources.push(existing.clone());
            }
        }
        Self::new(sources)
    }
}

fn anchored(parts: &[&str]) -> InflectResult<Regex> {
    let alternation = parts
        .iter()
        .map(|p| format!("(?:{p})"))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&format!("(?i)^(?:{alternation})$")).map_err(|e| InflectError::InvalidPattern {
        kind: RuleKind::Uncountable,
        pattern: parts.join("|"),
        message: e.to_string(),
    })
}

// ---------------------------------------------------------------------------
// Rule set
// ---------------------------------------------------------------------------

static DEFAULT_RULES: LazyLock<RuleSet> = LazyLock::new(|| {
    let compile = |kind, table: &[(&str, &str)]| -> Vec<PatternRule> {
        table
            .iter()
            .map(|(pattern, replacement)| {
                PatternRule::new(kind, pattern, replacement).expect("built-in rule must compile")
            })
            .collect()
    };

    let mut irregular = IrregularMap::new();
    for (singular, plural) in defaults::IRREGULAR {
        irregular.insert(singular, plural);
    }
    let uncountable = UncountableSet::new(
        defaults::UNCOUNTABLE
            .iter()
            .map(|s| s.to_string())
            .collect(),
    )
    .expect("built-in uncountables must compile");

    let rules = RuleSet {
        irregular,
        plural: compile(RuleKind::Plural, defaults::PLURAL),
        singular: compile(RuleKind::Singular, defaults::SINGULAR),
        uncountable,
    };
    tracing::debug!(
        irregular = rules.irregular.len(),
        plural = rules.plural.len(),
        singular = rules.singular.len(),
        uncountable = rules.uncountable.len(),
        "compiled default rule tables"
    );
    rules
});

/// The complete set of inflection tables.
#[derive(Debug, Clone)]
pub struct RuleSet {
    irregular: IrregularMap,
    plural: Vec<PatternRule>,
    singular: Vec<PatternRule>,
    uncountable: UncountableSet,
}

impl Default for RuleSet {
    fn default() -> Self {
        Self::defaults()
    }
}

impl RuleSet {
    /// The built-in English tables. Compiled once per process, cloned after.
    pub fn defaults() -> Self {
        DEFAULT_RULES.clone()
    }

    /// Tables with no rules at all. Every word passes through unchanged.
    pub fn empty() -> Self {
        Self {
            irregular: IrregularMap::new(),
            plural: Vec::new(),
            singular: Vec::new(),
            uncountable: UncountableSet {
                sources: Vec::new(),
                matcher: None,
            },
        }
    }

    pub fn irregular(&self) -> &IrregularMap {
        &self.irregular
    }

    pub fn plural_rules(&self) -> &[PatternRule] {
        &self.plural
    }

    pub fn singular_rules(&self) -> &[PatternRule] {
        &self.singular
    }

    pub fn uncountable(&self) -> &UncountableSet {
        &self.uncountable
    }

    pub fn is_uncountable(&self, word: &str) -> bool {
        self.uncountable.is_match(word)
    }

    /// Plural of `word`, without caching.
    pub fn pluralize(&self, word: &str) -> String {
        if self.is_uncountable(word) {
            return word.to_string();
        }
        if let Some(plural) = self.irregular.pluralize(word) {
            return plural;
        }
        apply_first(&self.plural, word, RuleKind::Plural)
    }

    /// Singular of `word`, without caching.
    pub fn singularize(&self, word: &str) -> String {
        if self.is_uncountable(word) {
            return word.to_string();
        }
        if let Some(singular) = self.irregular.singularize(word) {
            return singular;
        }
        apply_first(&self.singular, word, RuleKind::Singular)
    }

    /// Merge a batch into the tables. The batch is validated as a whole
    /// first; on error the tables are untouched.
    pub fn extend(&mut self, batch: RuleBatch) -> InflectResult<()> {
        match batch {
            RuleBatch::Irregular(entries) => {
                if let Some((singular, plural)) = entries
                    .iter()
                    .find(|(s, p)| s.trim().is_empty() || p.trim().is_empty())
                {
                    return Err(InflectError::EmptyIrregular {
                        singular: singular.clone(),
                        plural: plural.clone(),
                    });
                }
                for (singular, plural) in &entries {
                    self.irregular.insert(singular.trim(), plural.trim());
                }
            }
            RuleBatch::Plural(rules) => {
                let compiled = compile_patterns(RuleKind::Plural, &rules)?;
                merge_patterns(&mut self.plural, compiled);
            }
            RuleBatch::Singular(rules) => {
                let compiled = compile_patterns(RuleKind::Singular, &rules)?;
                merge_patterns(&mut self.singular, compiled);
            }
            RuleBatch::Uncountable(words) => {
                self.uncountable = self.uncountable.prepend(words)?;
            }
        }
        Ok(())
    }
}

/// First-match-wins over an ordered rule list. A word no rule accepts is
/// returned unchanged.
fn apply_first(rules: &[PatternRule], word: &str, kind: RuleKind) -> String {
    for rule in rules {
        if let Some(result) = rule.apply(word) {
            tracing::trace!(%kind, word, rule = rule.pattern(), %result, "rule matched");
            return result;
        }
    }
    word.to_string()
}
