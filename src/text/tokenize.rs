// src/text/tokenize.rs
//
// Treebank-flavoured word splitting on top of Unicode word boundaries:
// whitespace dropped, each punctuation mark its own token, hyphenated
// compounds kept whole, and the English clitics peeled off the word they are
// attached to ("don't" -> "do" "n't").

use unicode_segmentation::UnicodeSegmentation;

const NEGATION: &str = "n't";
const CLITICS: [&str; 6] = ["'s", "'re", "'ve", "'ll", "'d", "'m"];

pub fn tokenize(text: &str) -> Vec<String> {
    let mut out = Vec::new();
    for word in words(text) {
        match clitic_split(&word) {
            Some(at) => {
                out.push(s!(&word[..at]));
                out.push(s!(&word[at..]));
            }
            None => out.push(word),
        }
    }
    out
}

/// Word-bound segments minus whitespace, with hyphenated compounds glued
/// back together: "e-mail", "well-known", "mother-in-law".
fn words(text: &str) -> Vec<String> {
    let segs: Vec<&str> = text.split_word_bounds().collect();
    let mut out = Vec::with_capacity(segs.len());
    let mut i = 0;

    while i < segs.len() {
        let seg = segs[i];
        i += 1;
        if seg.chars().all(char::is_whitespace) {
            continue;
        }
        let mut word = s!(seg);
        if has_alnum(seg) {
            while i + 1 < segs.len() && segs[i] == "-" && has_alnum(segs[i + 1]) {
                word.push('-');
                word.push_str(segs[i + 1]);
                i += 2;
            }
        }
        out.push(word);
    }
    out
}

fn has_alnum(seg: &str) -> bool {
    seg.chars().any(char::is_alphanumeric)
}

/// Byte offset where a trailing clitic starts, if the word has one and
/// something is left in front of it.
fn clitic_split(word: &str) -> Option<usize> {
    suffix_at(word, NEGATION).or_else(|| CLITICS.iter().find_map(|c| suffix_at(word, c)))
}

fn suffix_at(word: &str, suffix: &str) -> Option<usize> {
    let curly = suffix.replace('\'', "\u{2019}");
    for variant in [suffix, curly.as_str()] {
        let Some(at) = word.len().checked_sub(variant.len()) else { continue };
        if at == 0 {
            continue;
        }
        if word.get(at..).is_some_and(|tail| tail.eq_ignore_ascii_case(variant)) {
            return Some(at);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn punctuation_is_split_out() {
        assert_eq!(tokenize("Running quickly!"), strs!["Running", "quickly", "!"]);
        assert_eq!(tokenize("Fast,cheap"), strs!["Fast", ",", "cheap"]);
    }

    #[test]
    fn clitics_are_split_off() {
        assert_eq!(
            tokenize("I don't think it's 'great'"),
            strs!["I", "do", "n't", "think", "it", "'s", "'", "great", "'"]
        );
        assert_eq!(tokenize("WON'T"), strs!["WO", "N'T"]);
        assert_eq!(tokenize("we’ll"), strs!["we", "’ll"]);
    }

    #[test]
    fn blank_input_yields_nothing() {
        assert!(tokenize("").is_empty());
        assert!(tokenize(" \n\t ").is_empty());
    }

    #[test]
    fn hyphenated_compounds_stay_whole() {
        assert_eq!(
            tokenize("Well-known e-mail support"),
            strs!["Well-known", "e-mail", "support"]
        );
        assert_eq!(tokenize("my mother-in-law's parcel"), strs!["my", "mother-in-law", "'s", "parcel"]);
    }

    #[test]
    fn loose_hyphens_are_still_split() {
        assert_eq!(tokenize("fast - cheap"), strs!["fast", "-", "cheap"]);
        assert_eq!(tokenize("pre- and post-sale"), strs!["pre", "-", "and", "post-sale"]);
        assert_eq!(tokenize("--fast"), strs!["-", "-", "fast"]);
    }

    #[test]
    fn decimals_stay_whole() {
        assert_eq!(tokenize("rated 4.5 stars"), strs!["rated", "4.5", "stars"]);
    }
}
