//! Concrete cleaner implementations.

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

use crate::num2words::num_to_words;

/// Abbreviations expanded by `english_cleaners`. Matched lower-case with a
/// trailing period.
const ABBREVIATIONS: &[(&str, &str)] = &[
    ("mrs", "misess"),
    ("mr", "mister"),
    ("dr", "doctor"),
    ("st", "saint"),
    ("co", "company"),
    ("jr", "junior"),
    ("maj", "major"),
    ("gen", "general"),
    ("drs", "doctors"),
    ("rev", "reverend"),
    ("lt", "lieutenant"),
    ("hon", "honorable"),
    ("sgt", "sergeant"),
    ("capt", "captain"),
    ("esq", "esquire"),
    ("ltd", "limited"),
    ("col", "colonel"),
    ("ft", "fort"),
];

/// Basic pipeline: lowercase and collapse whitespace, no transliteration.
pub fn basic_cleaners(text: &str) -> String {
    collapse_whitespace(&lowercase(text))
}

/// Pipeline for non-English text: transliterate to ASCII, then lowercase
/// and collapse whitespace.
pub fn transliteration_cleaners(text: &str) -> String {
    collapse_whitespace(&lowercase(&convert_to_ascii(text)))
}

/// Pipeline for English text, including number and abbreviation expansion.
pub fn english_cleaners(text: &str) -> String {
    let text = lowercase(&convert_to_ascii(text));
    let text = expand_numbers(&text);
    let text = expand_abbreviations(&text);
    collapse_whitespace(&text)
}

fn lowercase(text: &str) -> String {
    text.to_lowercase()
}

/// Collapse runs of whitespace into single spaces and trim.
fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Transliterate to ASCII: NFKD decomposition, then drop combining marks
/// and any remaining non-ASCII characters.
fn convert_to_ascii(text: &str) -> String {
    text.nfkd()
        .filter(|c| !is_combining_mark(*c) && c.is_ascii())
        .collect()
}

/// Expand known abbreviations ("dr." -> "doctor"). Expects lower-cased
/// input; tokens that do not exactly match an entry plus a trailing period
/// pass through unchanged.
fn expand_abbreviations(text: &str) -> String {
    text.split(' ')
        .map(|word| {
            let stem = match word.strip_suffix('.') {
                Some(stem) => stem,
                None => return word.to_string(),
            };
            ABBREVIATIONS
                .iter()
                .find(|(abbr, _)| *abbr == stem)
                .map(|(_, full)| full.to_string())
                .unwrap_or_else(|| word.to_string())
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Expand contiguous digit runs into English cardinal words. Runs too long
/// to fit an i64 are left untouched.
fn expand_numbers(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut digits = String::new();

    for c in text.chars() {
        if c.is_ascii_digit() {
            digits.push(c);
            continue;
        }
        flush_digits(&mut out, &mut digits);
        out.push(c);
    }
    flush_digits(&mut out, &mut digits);
    out
}

fn flush_digits(out: &mut String, digits: &mut String) {
    if digits.is_empty() {
        return;
    }
    match digits.parse::<i64>() {
        Ok(num) => out.push_str(&num_to_words(num)),
        Err(_) => out.push_str(digits),
    }
    digits.clear();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_cleaners() {
        assert_eq!(basic_cleaners("  Hello   World  "), "hello world");
    }

    #[test]
    fn test_transliteration_cleaners() {
        assert_eq!(transliteration_cleaners("Crème Brûlée"), "creme brulee");
        assert_eq!(transliteration_cleaners("naïve café"), "naive cafe");
    }

    #[test]
    fn test_english_cleaners_abbreviations() {
        assert_eq!(english_cleaners("Dr. Smith"), "doctor smith");
        assert_eq!(english_cleaners("Mrs. Jones and Mr. Brown"), "misess jones and mister brown");
    }

    #[test]
    fn test_english_cleaners_numbers() {
        assert_eq!(english_cleaners("I have 2 cats"), "i have two cats");
        assert_eq!(
            english_cleaners("room 101"),
            "room one hundred one"
        );
    }

    #[test]
    fn test_english_cleaners_trillion_range() {
        assert_eq!(
            english_cleaners("the debt is 2000000000000 dollars"),
            "the debt is two trillion dollars"
        );
    }

    #[test]
    fn test_expand_numbers_overflow_passthrough() {
        let long = "9".repeat(30);
        assert_eq!(expand_numbers(&long), long);
    }

    #[test]
    fn test_expand_numbers_i64_boundary() {
        // Largest digit run that still parses as i64.
        let max = i64::MAX.to_string();
        assert!(expand_numbers(&max).starts_with("nine quintillion"));
        // One past it falls back to passthrough.
        let over = "9223372036854775808";
        assert_eq!(expand_numbers(over), over);
    }

    #[test]
    fn test_collapse_whitespace_handles_tabs_and_newlines() {
        assert_eq!(collapse_whitespace("a\tb\n c"), "a b c");
    }
}
