//! # noun-inflect
//!
//! English noun inflection for code generators, ORMs and UI text: plural and
//! singular forms, plus the identifier case conversions that go with them
//! (`RedApple` ↔ `red_apples`).
//!
//! ## Architecture
//!
//! - **Rule tables** (`rules`): irregular map, ordered plural/singular
//!   pattern rules, uncountable matchers; first match wins
//! - **Engine** (`engine`): `Inflector`, a lock-guarded rule set plus a
//!   per-direction memo table, extensible at runtime
//! - **Rules files** (`rules::file`): extra rules loaded from TOML
//! - **Case helpers** (`case`): snake/kebab/camel/human conversions
//!
//! ## Library usage
//!
//! ```
//! use noun_inflect::engine::Inflector;
//! use noun_inflect::rules::RuleBatch;
//!
//! let inflector = Inflector::default();
//! assert_eq!(inflector.pluralize("Person"), "People");
//! assert_eq!(inflector.singularize("countries"), "country");
//! assert_eq!(inflector.inflect("hat", 1), "hat");
//! assert_eq!(inflector.tableize("RedApple"), "red_apples");
//!
//! inflector
//!     .add_rules(RuleBatch::irregular([("octopus", "octopodes")]))
//!     .unwrap();
//! assert_eq!(inflector.pluralize("octopus"), "octopodes");
//! ```

pub mod cache;
pub mod case;
pub mod engine;
pub mod error;
pub mod rules;
