use serde::Serialize;

use super::Movie;

/// Overview length above which the display text is cut.
const OVERVIEW_LIMIT: usize = 200;

/// Shown for display fields with no source data.
const PLACEHOLDER: &str = "N/A";

/// A single ranked neighbor, shaped for direct display.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Recommendation {
    pub title: String,
    pub overview: String,
    pub genres: String,
    pub release_date: String,
    pub vote_average: Option<f64>,
    pub popularity: f64,
    pub similarity_score: f64,
}

impl Recommendation {
    /// Builds a display record from a catalog movie and its similarity score.
    pub fn new(movie: &Movie, score: f64) -> Self {
        let genres = if movie.genre_names.is_empty() {
            PLACEHOLDER.to_string()
        } else {
            movie.genre_names.join(", ")
        };

        Self {
            title: movie.title.clone(),
            overview: truncate_overview(&movie.overview),
            genres,
            release_date: movie
                .release_date
                .clone()
                .unwrap_or_else(|| PLACEHOLDER.to_string()),
            vote_average: movie.vote_average,
            popularity: round_to(movie.popularity.unwrap_or(0.0), 1),
            similarity_score: round_to(score, 3),
        }
    }
}

/// Predicted genre label with the classifier's confidence in it.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct GenrePrediction {
    pub genre: String,
    pub confidence: f64,
}

impl GenrePrediction {
    pub fn new(genre: String, confidence: f64) -> Self {
        Self {
            genre,
            confidence: round_to(confidence, 3),
        }
    }
}

/// Truncation counts characters, not bytes, so multi-byte overviews are
/// never split mid-codepoint.
fn truncate_overview(overview: &str) -> String {
    if overview.chars().count() > OVERVIEW_LIMIT {
        let mut cut: String = overview.chars().take(OVERVIEW_LIMIT).collect();
        cut.push_str("...");
        cut
    } else {
        overview.to_string()
    }
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}
