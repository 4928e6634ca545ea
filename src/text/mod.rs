// src/text/mod.rs
//! Review text to countable lemmas.
//!
//! ```text
//! text ─▶ tokenize ─▶ tag ─▶ strip + lowercase ─▶ lemmatize(class) ─▶ filter ─▶ Vec<Token>
//! ```
//!
//! A [`Normalizer`] holds only read-only resources (stopwords, lexicon,
//! tagger), so `normalize` can be called any number of times and always
//! recomputes from scratch.
//!
//! Feeding the output back in (joined with spaces) is not idempotent: a
//! lemma re-tagged without its original neighbours can land in another word
//! class and lemmatize differently.

pub mod filter;
pub mod frequency;
pub mod lemmatizer;
pub mod stopwords;
pub mod tagger;
pub mod tokenize;

pub use filter::{ScriptPolicy, TokenFilter};
pub use frequency::{aggregate, FrequencyTable};
pub use lemmatizer::{Lexicon, LexiconError, WordClass};
pub use tagger::{PosTagger, RuleTagger};
pub use tokenize::tokenize;

use crate::config::options::TextOptions;

/// One surviving word: its base form and the class that chose the rule.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Token {
    pub lemma: String,
    pub class: WordClass,
}

pub struct Normalizer<T: PosTagger = RuleTagger> {
    filter: TokenFilter,
    lexicon: Lexicon,
    tagger: T,
}

impl Normalizer<RuleTagger> {
    /// English stopwords, built-in lexicon, rule tagger, any-word-char script gate.
    pub fn english() -> Self {
        Self::new(
            TokenFilter::new(stopwords::ENGLISH, ScriptPolicy::default()),
            Lexicon::builtin(),
            RuleTagger::new(),
        )
    }

    /// Build from user options. Fails only when a lexicon directory is set and unreadable.
    pub fn from_options(opts: &TextOptions) -> Result<Self, LexiconError> {
        let lexicon = Lexicon::load(opts.lexicon_dir.as_deref())?;
        let filter = TokenFilter::new(stopwords::english_with(&opts.extra_stopwords), opts.script);
        logd!(
            "Text: stopwords={} script={:?} lemmas={}",
            filter.stopword_count(),
            filter.script(),
            lexicon.lemma_count()
        );
        Ok(Self::new(filter, lexicon, RuleTagger::new()))
    }
}

impl<T: PosTagger> Normalizer<T> {
    pub fn new(filter: TokenFilter, lexicon: Lexicon, tagger: T) -> Self {
        Self { filter, lexicon, tagger }
    }

    pub fn normalize(&self, text: &str) -> Vec<Token> {
        let tokens = tokenize(text);
        let tags = self.tagger.tag(&tokens);

        tokens
            .iter()
            .zip(tags)
            .filter_map(|(token, tag)| {
                let word = filter::strip(token).to_lowercase();
                let class = WordClass::from_penn_tag(tag);
                let lemma = self.lexicon.lemmatize(&word, class);
                self.filter.is_valid(&lemma).then_some(Token { lemma, class })
            })
            .collect()
    }

    /// Just the lemma strings, in text order.
    pub fn lemmas(&self, text: &str) -> Vec<String> {
        self.normalize(text).into_iter().map(|t| t.lemma).collect()
    }

    pub fn filter(&self) -> &TokenFilter {
        &self.filter
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Tags everything as a noun, to check the tagger really is pluggable.
    struct AllNouns;
    impl PosTagger for AllNouns {
        fn tag(&self, tokens: &[String]) -> Vec<&'static str> {
            vec!["NN"; tokens.len()]
        }
    }

    #[test]
    fn class_travels_with_the_lemma() {
        let n = Normalizer::english();
        let toks = n.normalize("Running quickly!");
        assert_eq!(
            toks,
            vec![
                Token { lemma: s!("run"), class: WordClass::Verb },
                Token { lemma: s!("quickly"), class: WordClass::Adverb },
            ]
        );
    }

    #[test]
    fn custom_tagger_changes_the_lemma() {
        let n = Normalizer::new(
            TokenFilter::new(stopwords::ENGLISH, ScriptPolicy::AnyWordChar),
            Lexicon::builtin(),
            AllNouns,
        );
        // as a noun "running" has no rule that reaches "run"
        assert_eq!(n.lemmas("running"), strs!["running"]);
    }

    #[test]
    fn hyphenated_words_are_counted_whole() {
        let n = Normalizer::english();
        assert_eq!(n.lemmas("Well-known e-mail support"), strs!["well-known", "e-mail", "support"]);
    }

    #[test]
    fn extra_stopwords_from_options() {
        let opts = TextOptions { extra_stopwords: strs!["Acme"], ..TextOptions::default() };
        let n = Normalizer::from_options(&opts).unwrap();
        assert_eq!(n.lemmas("Acme delivery"), strs!["delivery"]);
    }
}
