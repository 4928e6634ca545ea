// src/text/frequency.rs
use std::collections::HashMap;

/// Lemma -> number of occurrences across every document fed in.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: HashMap<String, u64>,
}

impl FrequencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, lemma: &str) {
        match self.counts.get_mut(lemma) {
            Some(n) => *n += 1,
            None => {
                self.counts.insert(s!(lemma), 1);
            }
        }
    }

    pub fn add_doc<I, S>(&mut self, doc: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for lemma in doc {
            self.add(lemma.as_ref());
        }
    }

    /// Sum another table into this one.
    pub fn merge(&mut self, other: &FrequencyTable) {
        for (lemma, n) in &other.counts {
            *self.counts.entry(lemma.clone()).or_insert(0) += n;
        }
    }

    pub fn get(&self, lemma: &str) -> u64 {
        self.counts.get(lemma).copied().unwrap_or(0)
    }

    /// Distinct lemmas.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts.
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    /// Most frequent first; ties broken alphabetically so output is stable.
    pub fn ranked(&self) -> Vec<(&str, u64)> {
        let mut out: Vec<(&str, u64)> = self.iter().collect();
        out.sort_unstable_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        out
    }

    pub fn top(&self, n: usize) -> Vec<(&str, u64)> {
        let mut ranked = self.ranked();
        ranked.truncate(n);
        ranked
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.counts.iter().map(|(k, v)| (k.as_str(), *v))
    }
}

impl<S: AsRef<str>> Extend<S> for FrequencyTable {
    fn extend<T: IntoIterator<Item = S>>(&mut self, iter: T) {
        self.add_doc(iter);
    }
}

/// Count every lemma of every document. Document order does not matter.
pub fn aggregate<D, I, S>(docs: D) -> FrequencyTable
where
    D: IntoIterator<Item = I>,
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut table = FrequencyTable::new();
    for doc in docs {
        table.add_doc(doc);
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_across_documents() {
        let t = aggregate(vec![vec!["a", "b", "a"], vec!["a"]]);
        assert_eq!(t.get("a"), 3);
        assert_eq!(t.get("b"), 1);
        assert_eq!(t.get("c"), 0);
        assert_eq!(t.len(), 2);
        assert_eq!(t.total(), 4);
    }

    #[test]
    fn ranking_is_count_then_alpha() {
        let t = aggregate([["pear", "fig", "apple", "fig"]]);
        assert_eq!(t.ranked(), vec![("fig", 2), ("apple", 1), ("pear", 1)]);
        assert_eq!(t.top(1), vec![("fig", 2)]);
        assert_eq!(t.top(10).len(), 3);
    }

    #[test]
    fn merge_adds_counts() {
        let mut a = aggregate([["x", "y"]]);
        let b = aggregate([["y", "z"]]);
        a.merge(&b);
        assert_eq!(a, aggregate([["x", "y", "y", "z"]]));
    }

    #[test]
    fn extend_counts_like_add() {
        let mut t = FrequencyTable::new();
        t.extend(["ok", "ok"]);
        t.extend(vec![s!("fine")]);
        assert_eq!(t.get("ok"), 2);
        assert_eq!(t.get("fine"), 1);
    }
}
