//! Case-conversion helpers for identifiers.
//!
//! Plain character transforms between `snake_case`, `kebab-case`,
//! `CamelCase`, `camelBack` and "Human Readable" phrases. None of these touch
//! the rule tables; [`Inflector::tableize`](crate::engine::Inflector::tableize)
//! and [`Inflector::classify`](crate::engine::Inflector::classify) combine them
//! with pluralization.

/// Capitalize the first letter of a string.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => {
            let upper: String = c.to_uppercase().collect();
            upper + chars.as_str()
        }
    }
}

/// Lowercase the first letter of a string.
pub fn decapitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => {
            let lower: String = c.to_lowercase().collect();
            lower + chars.as_str()
        }
    }
}

/// Replace `delimiter` with spaces and capitalize each word.
///
/// - "this_is_a_test" → "This Is A Test"
/// - "this-is-a-test" with `"-"` → "This Is A Test"
pub fn humanize(s: &str, delimiter: &str) -> String {
    let spaced = if delimiter.is_empty() {
        s.to_string()
    } else {
        s.replace(delimiter, " ")
    };

    let mut out = String::with_capacity(spaced.len());
    let mut word_start = true;
    for c in spaced.chars() {
        if word_start {
            out.extend(c.to_uppercase());
        } else {
            out.push(c);
        }
        word_start = c.is_whitespace();
    }
    out
}

/// Convert a delimited string into `CamelCase`.
pub fn camelize(s: &str, delimiter: &str) -> String {
    humanize(s, delimiter).replace(' ', "")
}

/// Insert `delimiter` before every uppercase letter that follows a word
/// character, then lowercase the whole string.
pub fn delimit(s: &str, delimiter: &str) -> String {
    let mut out = String::with_capacity(s.len() + 4);
    let mut prev: Option<char> = None;
    for c in s.chars() {
        if c.is_ascii_uppercase() && prev.is_some_and(is_word_char) {
            out.push_str(delimiter);
        }
        out.push(c);
        prev = Some(c);
    }
    out.to_lowercase()
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Convert a string into `snake_case`.
pub fn underscore(s: &str) -> String {
    delimit(&s.replace('-', "_"), "_")
}

/// Convert a string into `kebab-case`.
pub fn dasherize(s: &str) -> String {
    delimit(&s.replace('_', "-"), "-")
}

/// Convert a string into `camelBack`.
pub fn variable(s: &str) -> String {
    decapitalize(&camelize(&underscore(s), "_"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capitalize_works() {
        assert_eq!(capitalize("hello"), "Hello");
        assert_eq!(capitalize(""), "");
        assert_eq!(capitalize("Hello"), "Hello");
        assert_eq!(decapitalize("Hello"), "hello");
        assert_eq!(decapitalize(""), "");
    }

    #[test]
    fn humanize_with_delimiters() {
        assert_eq!(humanize("this_is_a_test_string", "_"), "This Is A Test String");
        assert_eq!(humanize("this-is-a-test-string", "-"), "This Is A Test String");
        assert_eq!(humanize("already spaced", "_"), "Already Spaced");
        assert_eq!(humanize("", "_"), "");
    }

    #[test]
    fn camelize_with_delimiters() {
        assert_eq!(camelize("this_is_a_test_string", "_"), "ThisIsATestString");
        assert_eq!(camelize("this-is-a-test-string", "-"), "ThisIsATestString");
        assert_eq!(camelize("red_apple", "_"), "RedApple");
    }

    #[test]
    fn underscore_and_dasherize() {
        assert_eq!(underscore("ThisIsATestString"), "this_is_a_test_string");
        assert_eq!(underscore("this-is-kebab"), "this_is_kebab");
        assert_eq!(underscore("HTMLParser"), "h_t_m_l_parser");
        assert_eq!(dasherize("ThisIsATestString"), "this-is-a-test-string");
        assert_eq!(dasherize("snake_case_name"), "snake-case-name");
    }

    #[test]
    fn delimit_only_after_word_characters() {
        assert_eq!(delimit("Leading", "_"), "leading");
        assert_eq!(delimit("two Words", "_"), "two words");
        assert_eq!(delimit("v2Api", "-"), "v2-api");
    }

    #[test]
    fn variable_is_camel_back() {
        assert_eq!(variable("this_is_a_test_string"), "thisIsATestString");
        assert_eq!(variable("ThisIsATestString"), "thisIsATestString");
        assert_eq!(variable("kebab-case-name"), "kebabCaseName");
    }
}
