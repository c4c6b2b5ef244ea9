use serde::Deserialize;

use crate::models::{Movie, MovieRow};

/// How many names are drawn from each nested field.
pub const GENRE_LIMIT: usize = 5;
pub const KEYWORD_LIMIT: usize = 10;
pub const COMPANY_LIMIT: usize = 3;

/// Entry shape of the nested metadata columns: `[{"id": 28, "name": "Action"}, ...]`.
#[derive(Debug, Deserialize)]
struct NamedEntry {
    #[serde(default)]
    name: Option<String>,
}

/// Extracts up to `limit` names from a JSON-encoded list column.
///
/// Absent, empty, and unparseable input all yield an empty list; a bad
/// column must never fail the record. Entries without a `name` key are
/// skipped.
pub fn extract_names(raw: &str, limit: usize) -> Vec<String> {
    if raw.trim().is_empty() {
        return Vec::new();
    }
    let entries: Vec<NamedEntry> = match serde_json::from_str(raw) {
        Ok(entries) => entries,
        Err(_) => return Vec::new(),
    };
    entries
        .into_iter()
        .filter_map(|entry| entry.name)
        .take(limit)
        .collect()
}

/// Derives the catalog record and its combined feature text from a raw row.
pub fn extract(row: MovieRow) -> (Movie, String) {
    let release_date = if row.release_date.trim().is_empty() {
        None
    } else {
        Some(row.release_date)
    };

    let movie = Movie {
        title: row.title,
        overview: row.overview,
        genre_names: extract_names(&row.genres, GENRE_LIMIT),
        keyword_names: extract_names(&row.keywords, KEYWORD_LIMIT),
        company_names: extract_names(&row.production_companies, COMPANY_LIMIT),
        release_date,
        popularity: row.popularity,
        vote_average: row.vote_average,
    };
    let features = combined_feature_text(&movie);
    (movie, features)
}

/// Space-joined feature blob fed to the vectorizer.
///
/// Field order and the single-space separator are part of the similarity
/// contract: genre names, keyword names, overview, company names.
pub fn combined_feature_text(movie: &Movie) -> String {
    format!(
        "{} {} {} {}",
        movie.genre_names.join(" "),
        movie.keyword_names.join(" "),
        movie.overview,
        movie.company_names.join(" ")
    )
}
