//! Rules files: extra inflection rules loaded from TOML.
//!
//! ## Example TOML
//!
//! ```toml
//! uncountable = ["pokemon", "sea[- ]bass"]
//!
//! [[irregular]]
//! singular = "octopus"
//! plural = "octopodes"
//!
//! [[plural]]
//! pattern = "(?i)(quiz)$"
//! replacement = "${1}zes"
//!
//! [[singular]]
//! pattern = "(?i)(quiz)zes$"
//! replacement = "${1}"
//! ```
//!
//! Every section is optional. All sections are arrays, so an exported file
//! keeps the rule order of the tables it was taken from. A rules file is applied through the same merge
//! path as runtime extension, so its plural and singular rules fire before the
//! built-in ones and its uncountables are checked first.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{RuleBatch, RuleSet};
use crate::error::{InflectError, InflectResult};

/// One irregular base form / plural pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IrregularEntry {
    pub singular: String,
    pub plural: String,
}

/// One ordered pattern rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternEntry {
    pub pattern: String,
    pub replacement: String,
}

/// The on-disk shape of a rules file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleFile {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub uncountable: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub irregular: Vec<IrregularEntry>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub plural: Vec<PatternEntry>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub singular: Vec<PatternEntry>,
}

impl RuleFile {
    /// Parse a rules file from a TOML string. `origin` names the source in
    /// error messages.
    pub fn from_toml_str(toml_str: &str, origin: &str) -> InflectResult<Self> {
        toml::from_str(toml_str).map_err(|e| InflectError::RuleFileParse {
            path: origin.into(),
            message: e.to_string(),
        })
    }

    /// Read and parse a rules file from disk.
    pub fn load(path: &Path) -> InflectResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| InflectError::RuleFileIo {
            path: path.display().to_string(),
            source: e,
        })?;
        let file = Self::from_toml_str(&content, &path.display().to_string())?;
        tracing::info!(
            path = %path.display(),
            irregular = file.irregular.len(),
            plural = file.plural.len(),
            singular = file.singular.len(),
            uncountable = file.uncountable.len(),
            "loaded rules file"
        );
        Ok(file)
    }

    /// Render as TOML, in the same shape [`RuleFile::from_toml_str`] reads.
    pub fn to_toml_string(&self) -> InflectResult<String> {
        toml::to_string(self).map_err(|e| InflectError::RuleFileSerialize {
            message: e.to_string(),
        })
    }

    /// Snapshot the tables of a rule set, preserving rule order.
    pub fn from_rules(rules: &RuleSet) -> Self {
        let to_entries = |list: &[super::PatternRule]| {
            list.iter()
                .map(|r| PatternEntry {
                    pattern: r.pattern().to_string(),
                    replacement: r.replacement().to_string(),
                })
                .collect()
        };
        Self {
            uncountable: rules.uncountable().sources().to_vec(),
            irregular: rules
                .irregular()
                .entries()
                .iter()
                .map(|(singular, plural)| IrregularEntry {
                    singular: singular.clone(),
                    plural: plural.clone(),
                })
                .collect(),
            plural: to_entries(rules.plural_rules()),
            singular: to_entries(rules.singular_rules()),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.uncountable.is_empty()
            && self.irregular.is_empty()
            && self.plural.is_empty()
            && self.singular.is_empty()
    }

    /// The file as extension batches, in application order: irregular,
    /// plural, singular, uncountable. Empty sections are skipped.
    pub fn into_batches(self) -> Vec<RuleBatch> {
        let pairs = |list: Vec<PatternEntry>| {
            list.into_iter()
                .map(|e| (e.pattern, e.replacement))
                .collect::<Vec<_>>()
        };
        let batches = vec![
            RuleBatch::Irregular(
                self.irregular
                    .into_iter()
                    .map(|e| (e.singular, e.plural))
                    .collect(),
            ),
            RuleBatch::Plural(pairs(self.plural)),
            RuleBatch::Singular(pairs(self.singular)),
            RuleBatch::Uncountable(self.uncountable),
        ];
        batches.into_iter().filter(|b| !b.is_empty()).collect()
    }
}
