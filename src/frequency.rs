use fnv::FnvHashMap;

/// Phrase occurrence counts that remember the order in which each distinct
/// phrase was first seen.
///
/// That order is the tie-break for [`PhraseCounter::most_common`]: among
/// phrases with equal counts, the one seen earlier ranks higher.
#[derive(Debug, Default, Clone)]
pub struct PhraseCounter {
    index: FnvHashMap<String, usize>,
    entries: Vec<(String, usize)>,
    total: usize,
}

impl PhraseCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_phrases<I, S>(phrases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut counter = Self::new();
        for phrase in phrases {
            counter.add(phrase);
        }
        counter
    }

    pub fn add<S: Into<String>>(&mut self, phrase: S) {
        let phrase = phrase.into();
        self.total += 1;

        if let Some(&slot) = self.index.get(&phrase) {
            self.entries[slot].1 += 1;
            return;
        }

        self.index.insert(phrase.clone(), self.entries.len());
        self.entries.push((phrase, 1));
    }

    pub fn count(&self, phrase: &str) -> usize {
        self.index
            .get(phrase)
            .map(|&slot| self.entries[slot].1)
            .unwrap_or(0)
    }

    /// Number of distinct phrases.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of phrase instances counted, repeats included.
    pub fn total(&self) -> usize {
        self.total
    }

    /// The `n` most frequent phrases, highest count first.
    pub fn most_common(&self, n: usize) -> Vec<(String, usize)> {
        let mut ranked: Vec<&(String, usize)> = self.entries.iter().collect();
        // Stable sort keeps first-seen order within equal counts.
        ranked.sort_by(|a, b| b.1.cmp(&a.1));

        ranked
            .into_iter()
            .take(n)
            .map(|(phrase, count)| (phrase.clone(), *count))
            .collect()
    }
}
