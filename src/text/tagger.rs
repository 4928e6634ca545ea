// src/text/tagger.rs
//
// Part-of-speech tagging with Penn Treebank labels.
//
// `RuleTagger` is a small deterministic tagger: closed-class lookup, then a
// suffix guess for open-class words, then one left-to-right pass of context
// fixes. It is tuned for what the lemmatizer needs (noun vs verb vs
// adjective vs adverb), not for full Penn accuracy.

use std::collections::HashMap;

/// Anything that can label a token sequence with Penn tags, one per token.
pub trait PosTagger {
    fn tag(&self, tokens: &[String]) -> Vec<&'static str>;
}

/// Closed-class words and frequent irregular forms.
const LEXICON: &[(&str, &str)] = &[
    // determiners
    ("the", "DT"), ("a", "DT"), ("an", "DT"), ("this", "DT"), ("that", "DT"),
    ("these", "DT"), ("those", "DT"), ("every", "DT"), ("each", "DT"), ("some", "DT"),
    ("any", "DT"), ("no", "DT"), ("all", "DT"), ("another", "DT"), ("both", "DT"),
    ("either", "DT"), ("neither", "DT"),
    // pronouns
    ("i", "PRP"), ("you", "PRP"), ("he", "PRP"), ("she", "PRP"), ("it", "PRP"),
    ("we", "PRP"), ("they", "PRP"), ("me", "PRP"), ("him", "PRP"), ("us", "PRP"),
    ("them", "PRP"), ("myself", "PRP"), ("yourself", "PRP"), ("itself", "PRP"),
    ("ourselves", "PRP"), ("themselves", "PRP"),
    ("my", "PRP$"), ("your", "PRP$"), ("his", "PRP$"), ("her", "PRP$"), ("its", "PRP$"),
    ("our", "PRP$"), ("their", "PRP$"),
    ("which", "WDT"), ("what", "WP"), ("who", "WP"), ("whom", "WP"), ("whose", "WP$"),
    ("when", "WRB"), ("where", "WRB"), ("why", "WRB"), ("how", "WRB"),
    // prepositions, conjunctions
    ("of", "IN"), ("in", "IN"), ("on", "IN"), ("at", "IN"), ("by", "IN"), ("for", "IN"),
    ("with", "IN"), ("from", "IN"), ("about", "IN"), ("into", "IN"), ("over", "IN"),
    ("after", "IN"), ("before", "IN"), ("under", "IN"), ("between", "IN"),
    ("through", "IN"), ("during", "IN"), ("without", "IN"), ("because", "IN"),
    ("if", "IN"), ("while", "IN"), ("than", "IN"), ("since", "IN"), ("until", "IN"),
    ("though", "IN"), ("although", "IN"), ("as", "IN"), ("like", "IN"), ("upon", "IN"),
    ("per", "IN"), ("against", "IN"), ("within", "IN"), ("around", "IN"),
    ("whether", "IN"),
    ("to", "TO"),
    ("and", "CC"), ("or", "CC"), ("but", "CC"), ("nor", "CC"),
    // modals
    ("can", "MD"), ("could", "MD"), ("will", "MD"), ("would", "MD"), ("shall", "MD"),
    ("should", "MD"), ("may", "MD"), ("might", "MD"), ("must", "MD"), ("ca", "MD"),
    ("wo", "MD"),
    // be / have / do
    ("be", "VB"), ("am", "VBP"), ("is", "VBZ"), ("are", "VBP"), ("was", "VBD"),
    ("were", "VBD"), ("been", "VBN"), ("being", "VBG"),
    ("have", "VBP"), ("has", "VBZ"), ("had", "VBD"), ("having", "VBG"),
    ("do", "VBP"), ("does", "VBZ"), ("did", "VBD"), ("done", "VBN"), ("doing", "VBG"),
    // irregular past forms common in reviews
    ("got", "VBD"), ("went", "VBD"), ("came", "VBD"), ("took", "VBD"), ("made", "VBD"),
    ("said", "VBD"), ("gave", "VBD"), ("found", "VBD"), ("told", "VBD"),
    ("bought", "VBD"), ("sent", "VBD"), ("paid", "VBD"), ("kept", "VBD"),
    ("felt", "VBD"), ("thought", "VBD"), ("knew", "VBD"), ("saw", "VBD"),
    ("gone", "VBN"), ("given", "VBN"), ("taken", "VBN"), ("known", "VBN"),
    // adverbs
    ("not", "RB"), ("very", "RB"), ("too", "RB"), ("so", "RB"), ("just", "RB"),
    ("also", "RB"), ("never", "RB"), ("always", "RB"), ("often", "RB"),
    ("really", "RB"), ("still", "RB"), ("even", "RB"), ("again", "RB"), ("here", "RB"),
    ("there", "EX"), ("now", "RB"), ("then", "RB"), ("only", "RB"), ("quite", "RB"),
    ("well", "RB"), ("already", "RB"), ("ever", "RB"), ("soon", "RB"), ("back", "RB"),
    ("almost", "RB"), ("yet", "RB"), ("once", "RB"), ("twice", "RB"),
    // adjectives
    ("good", "JJ"), ("great", "JJ"), ("bad", "JJ"), ("new", "JJ"), ("old", "JJ"),
    ("excellent", "JJ"), ("poor", "JJ"), ("fast", "JJ"), ("slow", "JJ"),
    ("easy", "JJ"), ("happy", "JJ"), ("nice", "JJ"), ("friendly", "JJ"),
    ("quick", "JJ"), ("late", "JJ"), ("long", "JJ"), ("cheap", "JJ"), ("free", "JJ"),
    ("better", "JJR"), ("worse", "JJR"), ("best", "JJS"), ("worst", "JJS"),
    ("more", "JJR"), ("most", "JJS"), ("less", "JJR"), ("few", "JJ"), ("many", "JJ"),
    ("other", "JJ"), ("same", "JJ"), ("such", "JJ"), ("own", "JJ"),
    // clitics split off by the tokenizer
    ("n't", "RB"), ("'s", "POS"), ("'re", "VBP"), ("'ve", "VBP"), ("'ll", "MD"),
    ("'d", "MD"), ("'m", "VBP"),
    ("yes", "UH"), ("ok", "UH"), ("okay", "UH"), ("please", "UH"), ("thanks", "UH"),
];

/// Open-class guesses by ending, tried in order; the first hit wins.
/// The number is the minimum word length (in chars) for the rule to apply.
const SUFFIXES: &[(&str, usize, &str)] = &[
    ("ing", 5, "VBG"),
    ("ed", 4, "VBD"),
    ("ly", 4, "RB"),
    ("ness", 5, "NN"), ("ment", 5, "NN"), ("tion", 5, "NN"), ("sion", 5, "NN"),
    ("ity", 5, "NN"), ("ship", 5, "NN"), ("ance", 5, "NN"), ("ence", 5, "NN"),
    ("ism", 5, "NN"), ("ist", 5, "NN"),
    ("ous", 5, "JJ"), ("ful", 5, "JJ"), ("able", 5, "JJ"), ("ible", 5, "JJ"),
    ("ive", 5, "JJ"), ("less", 6, "JJ"), ("ical", 6, "JJ"), ("ish", 5, "JJ"),
    ("est", 6, "JJS"),
    ("ss", 3, "NN"), ("us", 4, "NN"), ("is", 4, "NN"),
    ("s", 3, "NNS"),
];

const HAVE_FORMS: &[&str] = &["have", "has", "had", "having", "'ve", "'d"];
const BE_FORMS: &[&str] = &["be", "am", "is", "are", "was", "were", "been", "being", "'m", "'re"];
const THIRD_PERSON: &[&str] = &["he", "she", "it"];

#[derive(Clone, Debug)]
pub struct RuleTagger {
    lexicon: HashMap<&'static str, &'static str>,
}

impl Default for RuleTagger {
    fn default() -> Self {
        Self::new()
    }
}

impl RuleTagger {
    pub fn new() -> Self {
        Self { lexicon: LEXICON.iter().copied().collect() }
    }

    /// Tag one token without looking at its neighbours.
    /// The bool is true when the tag came from the closed-class lexicon.
    fn lexical(&self, token: &str, lower: &str) -> (&'static str, bool) {
        if let Some(tag) = self.lexicon.get(lower) {
            return (*tag, true);
        }
        let curly = lower.replace('\u{2019}', "'");
        if let Some(tag) = self.lexicon.get(curly.as_str()) {
            return (*tag, true);
        }
        if let Some(first) = token.chars().next() {
            if first.is_ascii_digit() {
                return ("CD", true);
            }
            if !token.chars().any(char::is_alphanumeric) {
                return (punct_tag(token), true);
            }
        }
        (suffix_guess(lower), false)
    }
}

fn punct_tag(token: &str) -> &'static str {
    match token {
        "." | "!" | "?" => ".",
        "," => ",",
        ":" | ";" | "-" | "--" | "…" => ":",
        "(" | "[" | "{" => "(",
        ")" | "]" | "}" => ")",
        "\"" | "“" | "”" | "'" | "‘" | "’" => "''",
        "$" | "€" | "£" => "$",
        "#" => "#",
        _ => "SYM",
    }
}

fn suffix_guess(lower: &str) -> &'static str {
    let len = lower.chars().count();
    SUFFIXES
        .iter()
        .find(|(suffix, min, _)| len >= *min && lower.ends_with(suffix))
        .map(|(_, _, tag)| *tag)
        .unwrap_or("NN")
}

fn is_verb(tag: &str) -> bool {
    tag.starts_with("VB")
}

fn is_noun(tag: &str) -> bool {
    tag.starts_with("NN")
}

impl PosTagger for RuleTagger {
    fn tag(&self, tokens: &[String]) -> Vec<&'static str> {
        let lowered: Vec<String> = tokens.iter().map(|t| t.to_lowercase()).collect();
        let mut tags: Vec<&'static str> = Vec::with_capacity(tokens.len());

        for (i, token) in tokens.iter().enumerate() {
            let lower = lowered[i].as_str();
            let (mut tag, closed) = self.lexical(token, lower);

            if !closed {
                let prev = i.checked_sub(1).map(|p| (tags[p], lowered[p].as_str()));
                tag = match prev {
                    // "to ship", "will order"
                    Some(("TO" | "MD", _)) if tag != "RB" => "VB",
                    // "the delivery", "my order", "the shipping"
                    Some(("DT" | "PRP$" | "POS", _)) if is_verb(tag) => {
                        if tag == "VBG" || !lower.ends_with('s') { "NN" } else { "NNS" }
                    }
                    // "has arrived", "was delivered"
                    Some((_, p)) if tag == "VBD" && (HAVE_FORMS.contains(&p) || BE_FORMS.contains(&p)) => "VBN",
                    // "I love", "it works"
                    Some(("PRP", p)) if is_noun(tag) => {
                        if THIRD_PERSON.contains(&p) && lower.ends_with('s') { "VBZ" } else { "VBP" }
                    }
                    _ => tag,
                };

                // Capitalised mid-sentence: proper noun.
                let sentence_start = i == 0 || matches!(tags[i - 1], "." | ":");
                if !sentence_start
                    && is_noun(tag)
                    && token.chars().next().is_some_and(char::is_uppercase)
                {
                    tag = if tag == "NNS" { "NNPS" } else { "NNP" };
                }
            }

            tags.push(tag);
        }
        tags
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tag(words: &[&str]) -> Vec<&'static str> {
        let tokens: Vec<String> = words.iter().map(|w| s!(*w)).collect();
        RuleTagger::new().tag(&tokens)
    }

    #[test]
    fn one_tag_per_token() {
        assert!(tag(&[]).is_empty());
        assert_eq!(tag(&["Running", "quickly", "!"]), vec!["VBG", "RB", "."]);
    }

    #[test]
    fn closed_class_and_numbers() {
        assert_eq!(tag(&["The", "parcel", "was", "2", "days", "late"]),
            vec!["DT", "NN", "VBD", "CD", "NNS", "JJ"]);
    }

    #[test]
    fn context_turns_verbs_into_nouns_after_determiners() {
        assert_eq!(tag(&["the", "shipping"]), vec!["DT", "NN"]);
        assert_eq!(tag(&["my", "ordered"]), vec!["PRP$", "NN"]);
    }

    #[test]
    fn context_after_modal_and_pronoun() {
        assert_eq!(tag(&["will", "order"]), vec!["MD", "VB"]);
        assert_eq!(tag(&["I", "love", "it"]), vec!["PRP", "VBP", "PRP"]);
        assert_eq!(tag(&["it", "works"]), vec!["PRP", "VBZ"]);
        assert_eq!(tag(&["has", "arrived"]), vec!["VBZ", "VBN"]);
    }

    #[test]
    fn proper_nouns_mid_sentence() {
        assert_eq!(tag(&["ordered", "from", "Amazon"]), vec!["VBD", "IN", "NNP"]);
    }
}
