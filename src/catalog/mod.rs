mod features;
mod loader;

pub use features::{combined_feature_text, extract_names};
pub use loader::{load, LoadError};

use crate::ml::{GenreClassifier, SimilarityMatrix, SparseVector, TfidfVectorizer};
use crate::models::{Movie, MovieRow};

/// Immutable bundle of everything the query paths read: movie records,
/// combined feature texts, feature vectors, the frozen models, and the
/// pairwise similarity matrix.
///
/// A catalog is built exactly once per load and never mutated; queries
/// borrow it read-only, so concurrent reads need no coordination. Reloading
/// means building a whole new catalog and swapping the handle.
#[derive(Debug)]
pub struct Catalog {
    movies: Vec<Movie>,
    feature_texts: Vec<String>,
    feature_vectors: Vec<SparseVector>,
    similarity: SimilarityMatrix,
    vectorizer: TfidfVectorizer,
    classifier: Option<GenreClassifier>,
}

impl Catalog {
    /// Assembles a catalog from raw rows and the frozen model artifacts.
    ///
    /// Pure with respect to I/O: `load` reads the files and calls this.
    pub fn build(
        rows: Vec<MovieRow>,
        vectorizer: TfidfVectorizer,
        classifier: Option<GenreClassifier>,
    ) -> Self {
        let mut movies = Vec::with_capacity(rows.len());
        let mut feature_texts = Vec::with_capacity(rows.len());
        for row in rows {
            let (movie, features) = features::extract(row);
            movies.push(movie);
            feature_texts.push(features);
        }

        let feature_vectors = vectorizer.transform_all(&feature_texts);
        let similarity = SimilarityMatrix::from_vectors(&feature_vectors);

        Self {
            movies,
            feature_texts,
            feature_vectors,
            similarity,
            vectorizer,
            classifier,
        }
    }

    pub fn movies(&self) -> &[Movie] {
        &self.movies
    }

    pub fn movie(&self, index: usize) -> Option<&Movie> {
        self.movies.get(index)
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }

    pub fn feature_texts(&self) -> &[String] {
        &self.feature_texts
    }

    pub fn feature_vectors(&self) -> &[SparseVector] {
        &self.feature_vectors
    }

    pub fn similarity(&self) -> &SimilarityMatrix {
        &self.similarity
    }

    pub fn vectorizer(&self) -> &TfidfVectorizer {
        &self.vectorizer
    }

    /// `None` when the genre classifier artifact was not loaded; genre
    /// prediction is then permanently unavailable for this catalog.
    pub fn classifier(&self) -> Option<&GenreClassifier> {
        self.classifier.as_ref()
    }
}
