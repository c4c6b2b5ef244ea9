use thiserror::Error;

use crate::catalog::Catalog;
use crate::models::{Movie, Recommendation};

/// Neighbors returned when the caller does not ask for a specific count.
pub const DEFAULT_RECOMMENDATIONS: usize = 10;

/// Failures of a recommendation query.
///
/// `NotFound` is client-correctable (try another title); the other variants
/// are not. Message text is what reaches the user.
#[derive(Debug, Error, PartialEq)]
pub enum RecommendError {
    #[error("Movie not found in database")]
    NotFound,

    #[error("Please enter a movie title")]
    EmptyQuery,

    #[error("Error generating recommendations: {0}")]
    Internal(String),
}

/// Resolves a free-text title query to a catalog row.
///
/// Case-insensitive exact match first; failing that, the query must appear
/// as a substring of a title. Ties always go to the first row in dataset
/// order, deterministic but not quality-ranked.
pub fn resolve_title(movies: &[Movie], query: &str) -> Option<usize> {
    let needle = query.to_lowercase();
    movies
        .iter()
        .position(|movie| movie.title.to_lowercase() == needle)
        .or_else(|| {
            movies
                .iter()
                .position(|movie| movie.title.to_lowercase().contains(&needle))
        })
}

/// Ranks every other movie against the one at `index` by similarity score.
///
/// The query row is excluded by position, never by score, so a duplicate
/// title with an identical score still appears in the output. Equal scores
/// keep dataset order (stable sort). Returns at most `k` records.
pub fn rank(
    movies: &[Movie],
    similarity_row: &[f64],
    index: usize,
    k: usize,
) -> Vec<Recommendation> {
    let mut scored: Vec<(usize, f64)> = similarity_row
        .iter()
        .copied()
        .enumerate()
        .filter(|&(candidate, _)| candidate != index)
        .collect();
    scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

    scored
        .into_iter()
        .take(k)
        .filter_map(|(candidate, score)| {
            movies
                .get(candidate)
                .map(|movie| Recommendation::new(movie, score))
        })
        .collect()
}

/// Full recommendation query: validate the input, resolve the title, rank
/// neighbors.
///
/// Blank queries are rejected up front; the substring fallback would
/// otherwise match every title. An inconsistency between the movie list and
/// the similarity matrix is downgraded to an internal error instead of a
/// panic in the request path.
pub fn recommend(
    catalog: &Catalog,
    query: &str,
    k: usize,
) -> Result<Vec<Recommendation>, RecommendError> {
    if query.trim().is_empty() {
        return Err(RecommendError::EmptyQuery);
    }

    let index = resolve_title(catalog.movies(), query).ok_or(RecommendError::NotFound)?;
    if index >= catalog.similarity().len() {
        tracing::error!(index, matrix_size = catalog.similarity().len(), "Similarity row missing");
        return Err(RecommendError::Internal(
            "similarity data out of sync with catalog".to_string(),
        ));
    }

    Ok(rank(catalog.movies(), catalog.similarity().row(index), index, k))
}
