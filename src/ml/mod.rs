pub mod classifier;
pub mod similarity;
pub mod vectorizer;

pub use classifier::GenreClassifier;
pub use similarity::SimilarityMatrix;
pub use vectorizer::{SparseVector, TfidfVectorizer};
