use serde::Deserialize;

use crate::ml::vectorizer::SparseVector;

/// Frozen linear genre classifier produced by an external training pipeline.
///
/// One coefficient row and intercept per class; probabilities come from a
/// softmax over the decision scores. Like the vectorizer, the artifact is
/// consumed read-only and never trained here.
#[derive(Debug, Clone, Deserialize)]
pub struct GenreClassifier {
    classes: Vec<String>,
    coefficients: Vec<Vec<f64>>,
    intercepts: Vec<f64>,
}

impl GenreClassifier {
    /// Softmax-normalized class probabilities for a feature vector.
    pub fn predict_probabilities(&self, vector: &SparseVector) -> Vec<f64> {
        let scores: Vec<f64> = self
            .coefficients
            .iter()
            .zip(&self.intercepts)
            .map(|(row, intercept)| {
                intercept
                    + vector
                        .entries()
                        .iter()
                        .map(|&(column, weight)| weight * row.get(column).copied().unwrap_or(0.0))
                        .sum::<f64>()
            })
            .collect();
        softmax(&scores)
    }

    /// Predicted label with the winning class probability.
    ///
    /// Returns `None` for a degenerate artifact with no classes.
    pub fn predict(&self, vector: &SparseVector) -> Option<(&str, f64)> {
        let probabilities = self.predict_probabilities(vector);
        probabilities
            .iter()
            .enumerate()
            .max_by(|a, b| a.1.partial_cmp(b.1).unwrap_or(std::cmp::Ordering::Equal))
            .and_then(|(index, &probability)| {
                self.classes
                    .get(index)
                    .map(|class| (class.as_str(), probability))
            })
    }
}

/// Max-shifted softmax, stable for large decision scores.
fn softmax(scores: &[f64]) -> Vec<f64> {
    let max = scores.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let exponentials: Vec<f64> = scores.iter().map(|score| (score - max).exp()).collect();
    let total: f64 = exponentials.iter().sum();
    if total > 0.0 {
        exponentials.iter().map(|e| e / total).collect()
    } else {
        vec![0.0; scores.len()]
    }
}
