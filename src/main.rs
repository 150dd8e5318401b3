//! inflect CLI: English noun inflection and identifier case conversion.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use miette::Result;

use noun_inflect::case;
use noun_inflect::engine::{Inflector, InflectorConfig};
use noun_inflect::rules::RuleKind;
use noun_inflect::rules::file::RuleFile;

#[derive(Parser)]
#[command(name = "inflect", version, about = "English noun inflection")]
struct Cli {
    /// TOML file with extra irregular/plural/singular/uncountable rules.
    #[arg(long, global = true)]
    rules: Option<PathBuf>,

    /// Recompute every word instead of memoizing results.
    #[arg(long, global = true)]
    no_cache: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Plural form of each word.
    Pluralize { words: Vec<String> },

    /// Singular form of each word.
    Singularize { words: Vec<String> },

    /// Each word as it reads next to a count.
    Inflect {
        /// The count; exactly one keeps the word singular.
        #[arg(long, short = 'n', allow_negative_numbers = true)]
        count: f64,
        words: Vec<String>,
    },

    /// ClassName → plural table_name.
    Tableize { words: Vec<String> },

    /// table_name → singular ClassName.
    Classify { words: Vec<String> },

    /// delimited_words → CamelCase.
    Camelize {
        #[arg(long, short = 'd', default_value = "_")]
        delimiter: String,
        words: Vec<String>,
    },

    /// delimited_words → Human Readable Words.
    Humanize {
        #[arg(long, short = 'd', default_value = "_")]
        delimiter: String,
        words: Vec<String>,
    },

    /// CamelCase → snake_case.
    Underscore { words: Vec<String> },

    /// CamelCase → kebab-case.
    Dasherize { words: Vec<String> },

    /// Anything → camelBack.
    Variable { words: Vec<String> },

    /// Print the active rule tables as TOML.
    Rules {
        /// Only this table (irregular, plural, singular, uncountable).
        #[arg(long)]
        kind: Option<RuleKind>,
    },
}

fn main() -> Result<()> {
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(3)
                .build(),
        )
    }))
    .ok(); // Ignore error if hook already set (e.g., in tests)

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    let inflector = Inflector::new(InflectorConfig {
        rules_file: cli.rules,
        cache: !cli.no_cache,
    })?;

    match cli.command {
        Commands::Pluralize { words } => print_each(&words, |w| inflector.pluralize(w)),
        Commands::Singularize { words } => print_each(&words, |w| inflector.singularize(w)),
        Commands::Inflect { count, words } => {
            print_each(&words, |w| inflector.inflect(w, count))
        }
        Commands::Tableize { words } => print_each(&words, |w| inflector.tableize(w)),
        Commands::Classify { words } => print_each(&words, |w| inflector.classify(w)),
        Commands::Camelize { delimiter, words } => {
            print_each(&words, |w| case::camelize(w, &delimiter))
        }
        Commands::Humanize { delimiter, words } => {
            print_each(&words, |w| case::humanize(w, &delimiter))
        }
        Commands::Underscore { words } => print_each(&words, case::underscore),
        Commands::Dasherize { words } => print_each(&words, case::dasherize),
        Commands::Variable { words } => print_each(&words, case::variable),
        Commands::Rules { kind } => {
            let exported = select_tables(inflector.export_rules(), kind);
            print!("{}", exported.to_toml_string()?);
        }
    }

    Ok(())
}

fn print_each(words: &[String], f: impl Fn(&str) -> String) {
    for word in words {
        println!("{}", f(word));
    }
}

/// Keep only the requested table of an exported rule set.
fn select_tables(file: RuleFile, kind: Option<RuleKind>) -> RuleFile {
    match kind {
        None => file,
        Some(RuleKind::Irregular) => RuleFile {
            irregular: file.irregular,
            ..Default::default()
        },
        Some(RuleKind::Plural) => RuleFile {
            plural: file.plural,
            ..Default::default()
        },
        Some(RuleKind::Singular) => RuleFile {
            singular: file.singular,
            ..Default::default()
        },
        Some(RuleKind::Uncountable) => RuleFile {
            uncountable: file.uncountable,
            ..Default::default()
        },
    }
}
