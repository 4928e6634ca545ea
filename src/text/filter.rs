// src/text/filter.rs
//
// Validity gate for normalized tokens. A token counts when
//
//     script_ok AND NOT (stopword OR punctuation OR digit OR single char)
//
// with every predicate looking at the same stripped form (see `strip`).

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

static PUNCT_ONLY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\p{P}*$").expect("hardcoded regex pattern is valid"));
static WORD_CHAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\w").expect("hardcoded regex pattern is valid"));
static LEADING_DIGIT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d").expect("hardcoded regex pattern is valid"));

/// How strict the "is this a word in our script" gate is.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ScriptPolicy {
    /// At least one Unicode word character anywhere. Admits Cyrillic, Han, etc.
    #[default]
    AnyWordChar,
    /// At least one Latin letter, and no letter from another script.
    LatinOnly,
}

/// Surrounding whitespace first, then single quotes.
pub fn strip(token: &str) -> &str {
    token.trim().trim_matches('\'')
}

/// True for the empty string as well.
pub fn is_punctuation(token: &str) -> bool {
    PUNCT_ONLY.is_match(strip(token))
}

pub fn is_digit(token: &str) -> bool {
    LEADING_DIGIT.is_match(strip(token))
}

pub fn is_single_char(token: &str) -> bool {
    let mut chars = strip(token).chars();
    chars.next().is_some() && chars.next().is_none()
}

pub fn is_script_ok(token: &str, policy: ScriptPolicy) -> bool {
    let t = strip(token);
    match policy {
        ScriptPolicy::AnyWordChar => WORD_CHAR.is_match(t),
        ScriptPolicy::LatinOnly => {
            let mut saw_latin = false;
            for c in t.chars().filter(|c| c.is_alphabetic()) {
                if !is_latin_letter(c) {
                    return false;
                }
                saw_latin = true;
            }
            saw_latin
        }
    }
}

/// Basic Latin through Latin Extended-B, IPA, and Latin Extended Additional.
fn is_latin_letter(c: char) -> bool {
    matches!(c,
        'A'..='Z' | 'a'..='z'
        | '\u{00AA}' | '\u{00BA}'
        | '\u{00C0}'..='\u{00D6}' | '\u{00D8}'..='\u{00F6}' | '\u{00F8}'..='\u{024F}'
        | '\u{0250}'..='\u{02AF}'
        | '\u{1E00}'..='\u{1EFF}'
        | '\u{2C60}'..='\u{2C7F}' | '\u{A720}'..='\u{A7FF}'
        | '\u{FB00}'..='\u{FB06}'
    )
}

/// The composite predicate, bound to one stopword set and script policy.
#[derive(Clone, Debug)]
pub struct TokenFilter {
    stopwords: HashSet<String>,
    script: ScriptPolicy,
}

impl TokenFilter {
    /// Stopwords are stored lowercased.
    pub fn new<I, S>(stopwords: I, script: ScriptPolicy) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let stopwords = stopwords
            .into_iter()
            .map(|w| w.as_ref().trim().to_lowercase())
            .collect();
        Self { stopwords, script }
    }

    pub fn is_stopword(&self, token: &str) -> bool {
        self.stopwords.contains(&strip(token).to_lowercase())
    }

    pub fn is_valid(&self, token: &str) -> bool {
        is_script_ok(token, self.script)
            && !(self.is_stopword(token)
                || is_punctuation(token)
                || is_digit(token)
                || is_single_char(token))
    }

    pub fn script(&self) -> ScriptPolicy {
        self.script
    }

    pub fn stopword_count(&self) -> usize {
        self.stopwords.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn english() -> TokenFilter {
        TokenFilter::new(["the", "and", "you"], ScriptPolicy::AnyWordChar)
    }

    #[test]
    fn strip_trims_space_then_single_quotes() {
        assert_eq!(strip("  'quoted'  "), "quoted");
        assert_eq!(strip("'it's'"), "it's");
        assert_eq!(strip("\"it's\""), "\"it's\"");
        assert_eq!(strip("''"), "");
    }

    #[test]
    fn punctuation_predicate() {
        assert!(is_punctuation("!"));
        assert!(is_punctuation("..."));
        assert!(is_punctuation("«»"));
        assert!(is_punctuation(""));
        assert!(!is_punctuation("a."));
        // currency and math symbols are category S, not P
        assert!(!is_punctuation("$"));
    }

    #[test]
    fn digit_means_leading_digit() {
        assert!(is_digit("123"));
        assert!(is_digit("4th"));
        assert!(!is_digit("v2"));
    }

    #[test]
    fn single_char_counts_chars_not_bytes() {
        assert!(is_single_char("u"));
        assert!(is_single_char(" 'é' "));
        assert!(!is_single_char("ok"));
        assert!(!is_single_char(""));
    }

    #[test]
    fn script_policies_differ_on_cyrillic() {
        assert!(is_script_ok("привет", ScriptPolicy::AnyWordChar));
        assert!(!is_script_ok("привет", ScriptPolicy::LatinOnly));
        assert!(is_script_ok("café", ScriptPolicy::LatinOnly));
        assert!(!is_script_ok("--", ScriptPolicy::AnyWordChar));
        assert!(!is_script_ok("123", ScriptPolicy::LatinOnly));
    }

    #[test]
    fn composite_verdict() {
        let f = english();
        assert!(f.is_valid("delivery"));
        assert!(!f.is_valid("The"));
        assert!(!f.is_valid("u"));
        assert!(!f.is_valid("2020"));
        assert!(!f.is_valid("?!"));
        // clitic survives: three chars, has word chars, not listed
        assert!(f.is_valid("n't"));
    }
}
