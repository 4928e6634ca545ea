// tests/normalize.rs
//
// End-to-end properties of the text pipeline and the counting step.
use review_wordcloud::config::options::TextSource;
use review_wordcloud::data::ReviewRecord;
use review_wordcloud::runner::word_frequencies;
use review_wordcloud::text::{aggregate, FrequencyTable, Normalizer, ScriptPolicy, TokenFilter};

fn lemmas(text: &str) -> Vec<String> {
    Normalizer::english().lemmas(text)
}

#[test]
fn empty_text_gives_nothing() {
    assert!(lemmas("").is_empty());
    assert!(lemmas("   \n\t").is_empty());
}

#[test]
fn single_chars_digits_and_stopwords_are_dropped() {
    assert!(lemmas("u").is_empty());
    assert!(lemmas("123").is_empty());
    assert!(lemmas("the").is_empty());
    assert!(lemmas("The 2 of u , and !!").is_empty());
}

#[test]
fn verbs_and_adverbs_keep_their_class() {
    let out = lemmas("Running quickly!");
    assert!(out.contains(&"run".to_string()));
    assert!(out.contains(&"quickly".to_string()));
    assert!(!out.iter().any(|w| w == "!"));
}

#[test]
fn plural_nouns_are_lemmatized() {
    let out = lemmas("The deliveries and the boxes");
    assert_eq!(out, ["delivery", "box"]);
}

#[test]
fn compounds_are_not_broken_up() {
    let out = lemmas("Well-known e-mail support");
    assert!(out.contains(&"e-mail".to_string()));
    assert!(out.contains(&"well-known".to_string()));
    assert!(!out.iter().any(|w| w == "mail" || w == "know"));
}

#[test]
fn every_output_passes_the_filter() {
    let n = Normalizer::english();
    let text = "Ordered 3 items on Monday, they weren't delivered until the 12th... \
                Customer service didn't reply to my e-mails! Never again :(";
    for lemma in n.lemmas(text) {
        assert!(n.filter().is_valid(&lemma), "{lemma:?} should have been filtered");
        assert_eq!(lemma, lemma.to_lowercase());
    }
}

#[test]
fn second_pass_output_is_still_valid() {
    // Re-normalising lemmas may change them; only validity is guaranteed.
    let n = Normalizer::english();
    let once = n.lemmas("The couriers were leaving parcels outside, boxes everywhere");
    let twice = n.lemmas(&once.join(" "));
    assert!(twice.iter().all(|l| n.filter().is_valid(l)));
}

#[test]
fn latin_only_drops_other_scripts() {
    let any = Normalizer::english();
    assert_eq!(any.lemmas("отлично service"), ["отлично", "service"]);

    let latin = Normalizer::new(
        TokenFilter::new(review_wordcloud::text::stopwords::ENGLISH, ScriptPolicy::LatinOnly),
        review_wordcloud::text::Lexicon::builtin(),
        review_wordcloud::text::RuleTagger::new(),
    );
    assert_eq!(latin.lemmas("отлично service"), ["service"]);
}

#[test]
fn aggregate_sums_counts() {
    let table = aggregate([vec!["a", "b", "a"], vec!["a"]]);
    assert_eq!(table.get("a"), 3);
    assert_eq!(table.get("b"), 1);
    assert_eq!(table.len(), 2);
    assert_eq!(table.total(), 4);
}

#[test]
fn aggregate_ignores_document_order() {
    let docs = [vec!["x", "y"], vec!["y"], vec!["z", "x", "x"]];
    let forward = aggregate(docs.iter().cloned());
    let backward = aggregate(docs.iter().rev().cloned());
    assert_eq!(forward, backward);
}

#[test]
fn aggregate_of_nothing_is_empty() {
    let docs: Vec<Vec<String>> = Vec::new();
    assert_eq!(aggregate(docs), FrequencyTable::new());
}

#[test]
fn word_frequencies_follow_text_source() {
    let records = vec![
        ReviewRecord {
            review_title: "Great delivery".into(),
            review_text: "Boxes arrived damaged".into(),
            ..ReviewRecord::default()
        },
        ReviewRecord {
            review_title: "Slow delivery".into(),
            review_text: String::new(),
            ..ReviewRecord::default()
        },
    ];
    let n = Normalizer::english();

    let body = word_frequencies(&n, &records, TextSource::Body);
    assert_eq!(body.get("box"), 1);
    assert_eq!(body.get("delivery"), 0);

    let both = word_frequencies(&n, &records, TextSource::TitleAndBody);
    assert_eq!(both.get("delivery"), 2);
    assert_eq!(both.get("box"), 1);
}
