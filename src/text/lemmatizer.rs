// src/text/lemmatizer.rs
//
// WordNet-style lemmatization ("morphy"):
//   1. a word listed in the class's exception file maps to its listed bases;
//   2. otherwise suffix rules are applied, first once (keeping the word
//      itself as a candidate), then repeatedly on the rewritten forms until
//      some candidate is a known lemma or nothing is left to rewrite;
//   3. candidates are only kept if the lexicon knows them for that class.
// The shortest surviving candidate wins; a word nothing matches comes back as is.

use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Coarse grammatical class the lemmatizer keys its rules and lexicon on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum WordClass {
    Noun,
    Verb,
    Adjective,
    Adverb,
}

impl WordClass {
    pub const ALL: [WordClass; 4] = [WordClass::Noun, WordClass::Verb, WordClass::Adjective, WordClass::Adverb];

    /// `NN*` noun, `VB*` verb, `JJ*` adjective, `RB*` adverb; anything else noun.
    pub fn from_penn_tag(tag: &str) -> Self {
        if tag.starts_with("VB") {
            WordClass::Verb
        } else if tag.starts_with("JJ") {
            WordClass::Adjective
        } else if tag.starts_with("RB") {
            WordClass::Adverb
        } else {
            WordClass::Noun
        }
    }

    /// File-name suffix WordNet uses for this class (`index.adj`, `adj.exc`, ...).
    pub fn wordnet_name(&self) -> &'static str {
        match self {
            WordClass::Noun => "noun",
            WordClass::Verb => "verb",
            WordClass::Adjective => "adj",
            WordClass::Adverb => "adv",
        }
    }

    fn idx(&self) -> usize {
        match self {
            WordClass::Noun => 0,
            WordClass::Verb => 1,
            WordClass::Adjective => 2,
            WordClass::Adverb => 3,
        }
    }

    fn rules(&self) -> &'static [(&'static str, &'static str)] {
        match self {
            WordClass::Noun => NOUN_RULES,
            WordClass::Verb => VERB_RULES,
            WordClass::Adjective => ADJ_RULES,
            WordClass::Adverb => &[],
        }
    }
}

const NOUN_RULES: &[(&str, &str)] = &[
    ("s", ""), ("ses", "s"), ("ves", "f"), ("xes", "x"), ("zes", "z"),
    ("ches", "ch"), ("shes", "sh"), ("men", "man"), ("ies", "y"),
];
const VERB_RULES: &[(&str, &str)] = &[
    ("s", ""), ("ies", "y"), ("es", "e"), ("es", ""),
    ("ed", "e"), ("ed", ""), ("ing", "e"), ("ing", ""),
];
const ADJ_RULES: &[(&str, &str)] = &[("er", ""), ("est", ""), ("er", "e"), ("est", "e")];

const BUILTIN_INDEX: [&str; 4] = [
    include_str!("../../data/lexicon/index.noun"),
    include_str!("../../data/lexicon/index.verb"),
    include_str!("../../data/lexicon/index.adj"),
    include_str!("../../data/lexicon/index.adv"),
];
const BUILTIN_EXC: [&str; 4] = [
    include_str!("../../data/lexicon/noun.exc"),
    include_str!("../../data/lexicon/verb.exc"),
    include_str!("../../data/lexicon/adj.exc"),
    include_str!("../../data/lexicon/adv.exc"),
];

#[derive(Debug, Error)]
pub enum LexiconError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("no lemmas found under {0}")]
    Empty(PathBuf),
}

/// Known lemmas and irregular forms, per word class.
#[derive(Clone, Debug, Default)]
pub struct Lexicon {
    lemmas: [HashSet<String>; 4],
    exceptions: [HashMap<String, Vec<String>>; 4],
}

impl Lexicon {
    /// Compact English lexicon compiled into the binary.
    pub fn builtin() -> Self {
        let mut lex = Lexicon::default();
        for class in WordClass::ALL {
            lex.load_index(class, BUILTIN_INDEX[class.idx()]);
            lex.load_exceptions(class, BUILTIN_EXC[class.idx()]);
        }
        lex
    }

    /// Load a WordNet `dict/` directory (`index.noun`, `noun.exc`, ... ).
    /// Every index file is required; a missing exception file is treated as empty.
    pub fn from_wordnet_dir(dir: &Path) -> Result<Self, LexiconError> {
        let mut lex = Lexicon::default();
        for class in WordClass::ALL {
            let index_path = dir.join(format!("index.{}", class.wordnet_name()));
            let index = fs::read_to_string(&index_path)
                .map_err(|source| LexiconError::Io { path: index_path.clone(), source })?;
            lex.load_index(class, &index);

            let exc_path = dir.join(format!("{}.exc", class.wordnet_name()));
            match fs::read_to_string(&exc_path) {
                Ok(text) => lex.load_exceptions(class, &text),
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                    logd!("Lexicon: no exception list path={}", exc_path.display());
                }
                Err(source) => return Err(LexiconError::Io { path: exc_path, source }),
            }
        }
        if lex.lemma_count() == 0 {
            return Err(LexiconError::Empty(dir.to_path_buf()));
        }
        logf!("Lexicon: loaded dir={} lemmas={}", dir.display(), lex.lemma_count());
        Ok(lex)
    }

    /// `dir` when given, else the built-in lexicon.
    pub fn load(dir: Option<&Path>) -> Result<Self, LexiconError> {
        match dir {
            Some(d) => Self::from_wordnet_dir(d),
            None => Ok(Self::builtin()),
        }
    }

    // License preamble lines in WordNet index files start with spaces.
    fn load_index(&mut self, class: WordClass, text: &str) {
        let set = &mut self.lemmas[class.idx()];
        for line in text.lines() {
            if line.starts_with(char::is_whitespace) || line.starts_with('#') {
                continue;
            }
            if let Some(lemma) = line.split_whitespace().next() {
                set.insert(lemma.to_lowercase());
            }
        }
    }

    fn load_exceptions(&mut self, class: WordClass, text: &str) {
        let map = &mut self.exceptions[class.idx()];
        for line in text.lines() {
            let mut fields = line.split_whitespace();
            let Some(form) = fields.next() else { continue };
            if form.starts_with('#') {
                continue;
            }
            map.entry(form.to_lowercase())
                .or_default()
                .extend(fields.map(str::to_lowercase));
        }
    }

    pub fn add_lemma(&mut self, lemma: &str, class: WordClass) {
        self.lemmas[class.idx()].insert(lemma.to_lowercase());
    }

    pub fn contains(&self, lemma: &str, class: WordClass) -> bool {
        self.lemmas[class.idx()].contains(lemma)
    }

    pub fn lemma_count(&self) -> usize {
        self.lemmas.iter().map(HashSet::len).sum()
    }

    /// Known candidates, in discovery order, deduplicated.
    fn known(&self, class: WordClass, forms: &[String]) -> Vec<String> {
        let mut seen = HashSet::new();
        forms
            .iter()
            .filter(|f| self.contains(f, class) && seen.insert(f.as_str()))
            .cloned()
            .collect()
    }

    /// Every base form the lexicon accepts for `form`; empty when none.
    pub fn morphy(&self, form: &str, class: WordClass) -> Vec<String> {
        if let Some(bases) = self.exceptions[class.idx()].get(form) {
            let mut candidates = vec![s!(form)];
            candidates.extend(bases.iter().cloned());
            return self.known(class, &candidates);
        }

        let rules = class.rules();
        let mut forms = apply_rules(&[s!(form)], rules);

        let mut first = vec![s!(form)];
        first.extend(forms.iter().cloned());
        let found = self.known(class, &first);
        if !found.is_empty() {
            return found;
        }

        while !forms.is_empty() {
            forms = apply_rules(&forms, rules);
            let found = self.known(class, &forms);
            if !found.is_empty() {
                return found;
            }
        }
        Vec::new()
    }

    /// Shortest base form, or `word` unchanged when the lexicon has none.
    pub fn lemmatize(&self, word: &str, class: WordClass) -> String {
        self.morphy(word, class)
            .into_iter()
            .min_by_key(|l| l.chars().count())
            .unwrap_or_else(|| s!(word))
    }
}

/// One rewrite step over every form, deduplicated, first occurrence kept.
/// Each rule either shortens the form or (`men` -> `man`) can fire only once,
/// so repeated application always runs dry.
fn apply_rules(forms: &[String], rules: &[(&str, &str)]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut out = Vec::new();
    for form in forms {
        for (old, new) in rules {
            if let Some(stem) = form.strip_suffix(old) {
                let candidate = format!("{stem}{new}");
                if seen.insert(candidate.clone()) {
                    out.push(candidate);
                }
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lex() -> Lexicon {
        Lexicon::builtin()
    }

    #[test]
    fn tag_mapping_defaults_to_noun() {
        assert_eq!(WordClass::from_penn_tag("NNS"), WordClass::Noun);
        assert_eq!(WordClass::from_penn_tag("VBG"), WordClass::Verb);
        assert_eq!(WordClass::from_penn_tag("JJR"), WordClass::Adjective);
        assert_eq!(WordClass::from_penn_tag("RBS"), WordClass::Adverb);
        assert_eq!(WordClass::from_penn_tag("IN"), WordClass::Noun);
        assert_eq!(WordClass::from_penn_tag("."), WordClass::Noun);
    }

    #[test]
    fn regular_noun_plurals() {
        let l = lex();
        assert_eq!(l.lemmatize("deliveries", WordClass::Noun), "delivery");
        assert_eq!(l.lemmatize("boxes", WordClass::Noun), "box");
        assert_eq!(l.lemmatize("items", WordClass::Noun), "item");
        assert_eq!(l.lemmatize("addresses", WordClass::Noun), "address");
    }

    #[test]
    fn exceptions_come_first() {
        let l = lex();
        assert_eq!(l.lemmatize("running", WordClass::Verb), "run");
        assert_eq!(l.lemmatize("women", WordClass::Noun), "woman");
        assert_eq!(l.lemmatize("was", WordClass::Verb), "be");
        assert_eq!(l.lemmatize("better", WordClass::Adjective), "good");
    }

    #[test]
    fn verb_suffixes() {
        let l = lex();
        assert_eq!(l.lemmatize("ordered", WordClass::Verb), "order");
        assert_eq!(l.lemmatize("arrived", WordClass::Verb), "arrive");
        assert_eq!(l.lemmatize("replies", WordClass::Verb), "reply");
        assert_eq!(l.lemmatize("waiting", WordClass::Verb), "wait");
    }

    #[test]
    fn class_selects_the_rules() {
        let l = lex();
        // adverbs have no detachment rules
        assert_eq!(l.lemmatize("ordered", WordClass::Adverb), "ordered");
        assert_eq!(l.lemmatize("cheaper", WordClass::Adjective), "cheap");
        assert_eq!(l.lemmatize("cheaper", WordClass::Noun), "cheaper");
    }

    #[test]
    fn unknown_words_pass_through() {
        let l = lex();
        assert_eq!(l.lemmatize("trustpilot", WordClass::Noun), "trustpilot");
        assert_eq!(l.lemmatize("", WordClass::Noun), "");
    }

    #[test]
    fn shortest_candidate_wins() {
        let mut l = Lexicon::default();
        l.add_lemma("axe", WordClass::Noun);
        l.add_lemma("ax", WordClass::Noun);
        // "axes": s -> "axe", xes -> "ax"
        assert_eq!(l.morphy("axes", WordClass::Noun), strs!["axe", "ax"]);
        assert_eq!(l.lemmatize("axes", WordClass::Noun), "ax");
    }

    #[test]
    fn repeated_rules_reach_deeper_stems() {
        let mut l = Lexicon::default();
        l.add_lemma("box", WordClass::Noun);
        // "boxess" -> "boxes" (unknown) -> "box"
        assert_eq!(l.lemmatize("boxess", WordClass::Noun), "box");
    }

    #[test]
    fn builtin_exception_targets_are_known() {
        let l = lex();
        for class in WordClass::ALL {
            for bases in l.exceptions[class.idx()].values() {
                for base in bases {
                    assert!(l.contains(base, class), "{base} missing from index.{}", class.wordnet_name());
                }
            }
        }
    }

    #[test]
    fn missing_dir_is_an_io_error() {
        let dir = std::env::temp_dir().join("review_wordcloud_no_such_wordnet");
        assert!(matches!(Lexicon::from_wordnet_dir(&dir), Err(LexiconError::Io { .. })));
    }
}
