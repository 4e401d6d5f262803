use serde::{Deserialize, Serialize};

use crate::random::UniformSource;

/// Ordered wheel labels. Position decides which segment a label occupies.
///
/// Duplicates are allowed; the stats ledger merges them by label text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OptionList {
    items: Vec<String>,
}

impl OptionList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_labels<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            items: labels.into_iter().map(Into::into).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn labels(&self) -> &[String] {
        &self.items
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.items.get(index).map(String::as_str)
    }

    /// Appends a trimmed label. Blank input is ignored.
    pub fn add(&mut self, raw: &str) -> bool {
        let label = raw.trim();
        if label.is_empty() {
            return false;
        }
        self.items.push(label.to_string());
        true
    }

    pub fn remove(&mut self, index: usize) -> Option<String> {
        if index < self.items.len() {
            Some(self.items.remove(index))
        } else {
            None
        }
    }

    /// Fisher-Yates shuffle.
    pub fn shuffle<R: UniformSource + ?Sized>(&mut self, rng: &mut R) {
        for i in (1..self.items.len()).rev() {
            let j = rng.next_index(i + 1);
            self.items.swap(i, j);
        }
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn replace<I, S>(&mut self, labels: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.items = labels.into_iter().map(Into::into).collect();
    }
}
