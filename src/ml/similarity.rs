use crate::ml::vectorizer::SparseVector;

/// Dense symmetric matrix of pairwise cosine similarity scores, row-major.
///
/// Computed once when a catalog is built and read-only afterward. Memory is
/// O(n²), which is the accepted scaling limit: this serves catalogs of
/// thousands of items, not millions.
#[derive(Debug, Clone)]
pub struct SimilarityMatrix {
    size: usize,
    scores: Vec<f64>,
}

impl SimilarityMatrix {
    /// Computes cosine similarity between every pair of feature vectors.
    ///
    /// Vectors with zero norm (no in-vocabulary tokens) score 0 against
    /// everything, including themselves.
    pub fn from_vectors(vectors: &[SparseVector]) -> Self {
        let size = vectors.len();
        let norms: Vec<f64> = vectors.iter().map(SparseVector::norm).collect();
        let mut scores = vec![0.0; size * size];

        for i in 0..size {
            if norms[i] > 0.0 {
                scores[i * size + i] = 1.0;
            }
            for j in (i + 1)..size {
                let denominator = norms[i] * norms[j];
                let score = if denominator > 0.0 {
                    vectors[i].dot(&vectors[j]) / denominator
                } else {
                    0.0
                };
                scores[i * size + j] = score;
                scores[j * size + i] = score;
            }
        }

        Self { size, scores }
    }

    pub fn len(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Similarity of every movie against the one at `index`.
    ///
    /// Panics if `index` is out of range; callers resolve indices against
    /// the same catalog this matrix was built from.
    pub fn row(&self, index: usize) -> &[f64] {
        &self.scores[index * self.size..(index + 1) * self.size]
    }
}
