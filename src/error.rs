//! Rich diagnostic error types for the inflection engine.
//!
//! Inflecting a word never fails. Errors only arise when the rule tables are
//! extended at runtime or loaded from a rules file, so every variant here
//! describes a malformed rule or an unreadable file, with a `#[diagnostic]`
//! code and help text telling the caller how to fix it.

use miette::Diagnostic;
use thiserror::Error;

use crate::rules::RuleKind;

#[derive(Debug, Error, Diagnostic)]
pub enum InflectError {
    #[error("invalid {kind} pattern \"{pattern}\": {message}")]
    #[diagnostic(
        code(inflect::rules::invalid_pattern),
        help(
            "Patterns use the `regex` crate syntax. Prefix with `(?i)` for \
             case-insensitive matching and reference capture groups in the \
             replacement as `${{1}}`. Look-around assertions are not supported: \
             rewrite `(?<!u)(m)an$` as `(^|[^u])(m)an$` and carry the extra \
             group into the replacement."
        )
    )]
    InvalidPattern {
        kind: RuleKind,
        pattern: String,
        message: String,
    },

    #[error("irregular entry has an empty side: \"{singular}\" => \"{plural}\"")]
    #[diagnostic(
        code(inflect::rules::empty_irregular),
        help(
            "Irregular entries map a non-empty base form to a non-empty plural, \
             e.g. `octopus = \"octopodes\"`."
        )
    )]
    EmptyIrregular { singular: String, plural: String },

    #[error("unknown rule kind: \"{kind}\"")]
    #[diagnostic(
        code(inflect::rules::unknown_kind),
        help("Valid rule kinds: \"irregular\", \"plural\", \"singular\", \"uncountable\".")
    )]
    UnknownRuleKind { kind: String },

    #[error("failed to read rules file {path}: {source}")]
    #[diagnostic(
        code(inflect::config::io),
        help("Check that the rules file exists and is readable.")
    )]
    RuleFileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid rules file {path}: {message}")]
    #[diagnostic(
        code(inflect::config::parse),
        help(
            "A rules file is TOML with optional sections: a top-level \
             `uncountable = [..]` array, `[[irregular]]` entries each \
             carrying `singular` and `plural`, and `[[plural]]` / \
             `[[singular]]` entries each carrying `pattern` and `replacement`."
        )
    )]
    RuleFileParse { path: String, message: String },

    #[error("failed to serialize rule tables: {message}")]
    #[diagnostic(
        code(inflect::config::serialize),
        help("The active rule tables could not be rendered as TOML.")
    )]
    RuleFileSerialize { message: String },
}

/// Result type for rule mutation and rules-file operations.
pub type InflectResult<T> = std::result::Result<T, InflectError>;
