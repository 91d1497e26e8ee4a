use std::collections::HashMap;

use crate::{Error, Result};

/// Bidirectional mapping between external node labels and dense indices
///
/// Indices are handed out in insertion order, so the `n` labels of a graph
/// always occupy `[0, n)`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NodeLabels {
    labels: Vec<String>,
    indices: HashMap<String, usize>,
}

impl NodeLabels {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a label and returns its index; known labels keep their index
    pub fn insert(&mut self, label: impl Into<String>) -> usize {
        let label = label.into();
        if let Some(&index) = self.indices.get(&label) {
            return index;
        }
        let index = self.labels.len();
        self.indices.insert(label.clone(), index);
        self.labels.push(label);
        index
    }

    pub fn index_of(&self, label: &str) -> Result<usize> {
        self.indices
            .get(label)
            .copied()
            .ok_or_else(|| Error::UnknownLabel(label.to_string()))
    }

    pub fn label_of(&self, index: usize) -> Result<&str> {
        self.labels
            .get(index)
            .map(String::as_str)
            .ok_or(Error::IndexOutOfRange {
                index,
                size: self.labels.len(),
            })
    }

    pub fn contains(&self, label: &str) -> bool {
        self.indices.contains_key(label)
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Iterates over `(index, label)` in index order
    pub fn iter(&self) -> impl Iterator<Item = (usize, &str)> + '_ {
        self.labels.iter().map(String::as_str).enumerate()
    }
}

impl<S: Into<String>> FromIterator<S> for NodeLabels {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut labels = NodeLabels::new();
        for label in iter {
            labels.insert(label);
        }
        labels
    }
}

/// Spreadsheet-style label for an index: `A`..`Z`, then `AA`, `AB`, ...
pub fn alphabetic_label(index: usize) -> String {
    let mut remaining = index + 1;
    let mut letters = Vec::new();
    while remaining > 0 {
        let offset = ((remaining - 1) % 26) as u8;
        letters.push((b'A' + offset) as char);
        remaining = (remaining - 1) / 26;
    }
    letters.iter().rev().collect()
}
