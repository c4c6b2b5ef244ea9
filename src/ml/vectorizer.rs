use std::collections::HashMap;

use serde::Deserialize;

/// A sparse feature vector: (column, weight) pairs sorted by column.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SparseVector {
    entries: Vec<(usize, f64)>,
}

impl SparseVector {
    /// Builds a vector from unsorted (column, weight) pairs.
    pub fn new(mut entries: Vec<(usize, f64)>) -> Self {
        entries.sort_unstable_by_key(|&(column, _)| column);
        Self { entries }
    }

    pub fn entries(&self) -> &[(usize, f64)] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Dot product via merge over the sorted column indices.
    pub fn dot(&self, other: &SparseVector) -> f64 {
        let mut sum = 0.0;
        let (mut i, mut j) = (0, 0);
        while i < self.entries.len() && j < other.entries.len() {
            let (left, left_weight) = self.entries[i];
            let (right, right_weight) = other.entries[j];
            match left.cmp(&right) {
                std::cmp::Ordering::Less => i += 1,
                std::cmp::Ordering::Greater => j += 1,
                std::cmp::Ordering::Equal => {
                    sum += left_weight * right_weight;
                    i += 1;
                    j += 1;
                }
            }
        }
        sum
    }

    pub fn norm(&self) -> f64 {
        self.entries
            .iter()
            .map(|&(_, weight)| weight * weight)
            .sum::<f64>()
            .sqrt()
    }
}

/// Frozen TF-IDF transform produced by an external training pipeline.
///
/// The vocabulary and idf weights are read from a serialized artifact and
/// never refitted here; the only capability this system uses is `transform`.
#[derive(Debug, Clone, Deserialize)]
pub struct TfidfVectorizer {
    /// Token to matrix column.
    vocabulary: HashMap<String, usize>,
    /// Inverse document frequency per column.
    idf: Vec<f64>,
}

impl TfidfVectorizer {
    /// Number of columns in the transform's output space.
    pub fn dimensions(&self) -> usize {
        self.idf.len()
    }

    /// Maps text to an L2-normalized TF-IDF vector.
    ///
    /// Tokens are lowercased alphanumeric runs of at least two characters,
    /// the convention the artifact was trained with. Out-of-vocabulary
    /// tokens are dropped.
    pub fn transform(&self, text: &str) -> SparseVector {
        let mut counts: HashMap<usize, usize> = HashMap::new();
        for token in tokenize(text) {
            if let Some(&column) = self.vocabulary.get(&token) {
                *counts.entry(column).or_insert(0) += 1;
            }
        }

        let mut entries: Vec<(usize, f64)> = counts
            .into_iter()
            .map(|(column, count)| {
                let idf = self.idf.get(column).copied().unwrap_or(1.0);
                (column, count as f64 * idf)
            })
            .collect();
        entries.sort_unstable_by_key(|&(column, _)| column);

        l2_normalize(&mut entries);
        SparseVector { entries }
    }

    /// Transforms one document per input text, preserving order.
    pub fn transform_all(&self, texts: &[String]) -> Vec<SparseVector> {
        texts.iter().map(|text| self.transform(text)).collect()
    }
}

fn tokenize(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|token| token.chars().count() >= 2)
        .map(|token| token.to_lowercase())
}

fn l2_normalize(entries: &mut [(usize, f64)]) {
    let norm = entries
        .iter()
        .map(|&(_, weight)| weight * weight)
        .sum::<f64>()
        .sqrt();
    if norm > 0.0 {
        for entry in entries.iter_mut() {
            entry.1 /= norm;
        }
    }
}
