use serde::{Deserialize, Serialize};

/// Raw row shape of the movie metadata CSV export.
///
/// The `genres`, `keywords`, and `production_companies` columns hold
/// JSON-encoded arrays serialized into the CSV. They are parsed defensively
/// during feature extraction, not here, so a bad column never fails the row.
/// Columns the recommender does not use are ignored by the reader.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MovieRow {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub overview: String,
    #[serde(default)]
    pub genres: String,
    #[serde(default)]
    pub keywords: String,
    #[serde(default)]
    pub production_companies: String,
    #[serde(default)]
    pub release_date: String,
    #[serde(default)]
    pub popularity: Option<f64>,
    #[serde(default)]
    pub vote_average: Option<f64>,
}

/// A movie in the loaded catalog, identified by its row position.
///
/// The derived name-lists are always present, possibly empty, regardless of
/// how malformed the source columns were.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Movie {
    pub title: String,
    pub overview: String,
    pub genre_names: Vec<String>,
    pub keyword_names: Vec<String>,
    pub company_names: Vec<String>,
    pub release_date: Option<String>,
    pub popularity: Option<f64>,
    pub vote_average: Option<f64>,
}
