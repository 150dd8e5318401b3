//! Built-in English rule tables.
//!
//! Order is load-bearing in the pattern tables: the first matching rule wins,
//! so specific rules (`status`, `quiz`, `ox`) sit ahead of the generic suffix
//! rules they would otherwise lose to. Patterns use `regex` crate syntax;
//! replacements reference capture groups as `${n}`.

/// Base form → plural, both lowercase.
pub const IRREGULAR: &[(&str, &str)] = &[
    ("atlas", "atlases"),
    ("beef", "beefs"),
    ("brief", "briefs"),
    ("brother", "brothers"),
    ("cafe", "cafes"),
    ("child", "children"),
    ("cookie", "cookies"),
    ("corpus", "corpuses"),
    ("cow", "cows"),
    ("criterion", "criteria"),
    ("ganglion", "ganglions"),
    ("genie", "genies"),
    ("genus", "genera"),
    ("graffito", "graffiti"),
    ("hoof", "hoofs"),
    ("loaf", "loaves"),
    ("man", "men"),
    ("money", "monies"),
    ("mongoose", "mongooses"),
    ("move", "moves"),
    ("mythos", "mythoi"),
    ("niche", "niches"),
    ("numen", "numina"),
    ("occiput", "occiputs"),
    ("octopus", "octopuses"),
    ("opus", "opuses"),
    ("ox", "oxen"),
    ("penis", "penises"),
    ("person", "people"),
    ("sex", "sexes"),
    ("soliloquy", "soliloquies"),
    ("testis", "testes"),
    ("trilby", "trilbys"),
    ("turf", "turfs"),
    ("potato", "potatoes"),
    ("hero", "heroes"),
    ("tooth", "teeth"),
    ("goose", "geese"),
    ("foot", "feet"),
    ("foe", "foes"),
    ("sieve", "sieves"),
    ("cache", "caches"),
];

/// Ordered (pattern, replacement) pairs for pluralization. The last three
/// rules are the catch-all: words already ending in `s` stay put, the empty
/// string maps to itself, everything else gains an `s`.
pub const PLURAL: &[(&str, &str)] = &[
    (r"(?i)(s)tatus$", "${1}tatuses"),
    (r"(?i)(quiz)$", "${1}zes"),
    (r"(?i)^(ox)$", "${1}en"),
    (r"(?i)([m|l])ouse$", "${1}ice"),
    (r"(?i)(matr|vert)(ix|ex)$", "${1}ices"),
    (r"(?i)(x|ch|ss|sh)$", "${1}es"),
    (r"(?i)([^aeiouy]|qu)y$", "${1}ies"),
    (r"(?i)(hive)$", "${1}s"),
    (r"(?i)(chef)$", "${1}s"),
    (r"(?i)(?:([^f])fe|([lre])f)$", "${1}${2}ves"),
    (r"(?i)sis$", "ses"),
    (r"(?i)([ti])um$", "${1}a"),
    (r"(?i)(p)erson$", "${1}eople"),
    (r"(?i)(^|[^u])(m)an$", "${1}${2}en"),
    (r"(?i)(c)hild$", "${1}hildren"),
    (r"(?i)(buffal|tomat)o$", "${1}oes"),
    (
        r"(?i)(alumn|bacill|cact|foc|fung|nucle|radi|stimul|syllab|termin)us$",
        "${1}i",
    ),
    (r"(?i)us$", "uses"),
    (r"(?i)(alias)$", "${1}es"),
    (r"(?i)(ax|cris|test)is$", "${1}es"),
    (r"s$", "s"),
    (r"^$", ""),
    (r"$", "s"),
];

/// Ordered (pattern, replacement) pairs for singularization. A word matching
/// none of these is already singular and is returned unchanged.
pub const SINGULAR: &[(&str, &str)] = &[
    (r"(?i)(s)tatuses$", "${1}tatus"),
    (r"(?i)^(.*)(menu)s$", "${1}${2}"),
    (r"(?i)(quiz)zes$", "${1}"),
    (r"(?i)(matr)ices$", "${1}ix"),
    (r"(?i)(vert|ind)ices$", "${1}ex"),
    (r"(?i)^(ox)en", "${1}"),
    (r"(?i)(alias)(es)*$", "${1}"),
    (
        r"(?i)(alumn|bacill|cact|foc|fung|nucle|radi|stimul|syllab|termin|viri?)i$",
        "${1}us",
    ),
    (r"(?i)([ftw]ax)es", "${1}"),
    (r"(?i)(cris|ax|test)es$", "${1}is"),
    (r"(?i)(shoe)s$", "${1}"),
    (r"(?i)(o)es$", "${1}"),
    (r"ouses$", "ouse"),
    (r"([^a])uses$", "${1}us"),
    (r"(?i)([m|l])ice$", "${1}ouse"),
    (r"(?i)(x|ch|ss|sh)es$", "${1}"),
    (r"(?i)(m)ovies$", "${1}ovie"),
    (r"(?i)(s)eries$", "${1}eries"),
    (r"(?i)([^aeiouy]|qu)ies$", "${1}y"),
    (r"(?i)(tive)s$", "${1}"),
    (r"(?i)(hive)s$", "${1}"),
    (r"(?i)(drive)s$", "${1}"),
    (r"(?i)([le])ves$", "${1}f"),
    (r"(?i)([^rfoa])ves$", "${1}fe"),
    (r"(?i)(^analy)ses$", "${1}sis"),
    (
        r"(?i)(analy|diagno|^ba|(p)arenthe|(p)rogno|(s)ynop|(t)he)ses$",
        "${1}sis",
    ),
    (r"(?i)([ti])a$", "${1}um"),
    (r"(?i)(p)eople$", "${1}erson"),
    (r"(?i)(m)en$", "${1}an"),
    (r"(?i)(c)hildren$", "${1}hild"),
    (r"(?i)(n)ews$", "${1}ews"),
    (r"eaus$", "eau"),
    (r"^(.*us)$", "${1}"),
    (r"(?i)s$", ""),
];

/// Whole-word matchers for nouns without a distinct plural. Each entry is
/// anchored at both ends and matched case-insensitively.
pub const UNCOUNTABLE: &[&str] = &[
    ".*[nrlm]ese",
    ".*data",
    ".*deer",
    ".*fish",
    ".*measles",
    ".*ois",
    ".*pox",
    ".*sheep",
    "feedback",
    "stadia",
    ".*?media",
    "chassis",
    "clippers",
    "debris",
    "diabetes",
    "equipment",
    "gallows",
    "graffiti",
    "headquarters",
    "information",
    "innings",
    "news",
    "nexus",
    "pokemon",
    "proceedings",
    "research",
    "sea[- ]bass",
    "series",
    "species",
    "weather",
];
