use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use thiserror::Error;

use crate::catalog::Catalog;
use crate::config::Config;
use crate::ml::{GenreClassifier, TfidfVectorizer};
use crate::models::MovieRow;

/// Failures of the one-time load phase.
///
/// Every variant is fatal: a system that cannot read its movie data or its
/// vectorizer refuses to become ready instead of serving from an empty
/// transform. Only the genre classifier is optional, and its absence is not
/// an error here.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Movie data unreadable at {path}: {source}")]
    DataSource {
        path: String,
        #[source]
        source: csv::Error,
    },

    #[error("Vectorizer artifact unusable at {path}: {reason}")]
    Vectorizer { path: String, reason: String },
}

/// Loads the movie data and model artifacts into a fresh catalog.
///
/// On failure nothing is published: the caller either gets a fully built
/// catalog or an error and no partial state.
pub fn load(config: &Config) -> Result<Catalog, LoadError> {
    let rows = read_movie_rows(&config.movie_data_path)?;
    tracing::info!(
        movie_count = rows.len(),
        path = %config.movie_data_path,
        "Movie data loaded"
    );

    let vectorizer = read_vectorizer(&config.vectorizer_path)?;
    tracing::info!(
        dimensions = vectorizer.dimensions(),
        path = %config.vectorizer_path,
        "Vectorizer artifact loaded"
    );

    let classifier = match read_classifier(&config.genre_model_path) {
        Ok(classifier) => Some(classifier),
        Err(reason) => {
            tracing::warn!(
                path = %config.genre_model_path,
                %reason,
                "Genre classifier not loaded; genre prediction will not be available"
            );
            None
        }
    };

    let catalog = Catalog::build(rows, vectorizer, classifier);
    tracing::info!(
        movie_count = catalog.len(),
        genre_prediction = catalog.classifier().is_some(),
        "Catalog ready"
    );
    Ok(catalog)
}

fn read_movie_rows(path: &str) -> Result<Vec<MovieRow>, LoadError> {
    let data_source = |source| LoadError::DataSource {
        path: path.to_string(),
        source,
    };

    let mut reader = csv::Reader::from_path(Path::new(path)).map_err(data_source)?;
    let mut rows = Vec::new();
    for record in reader.deserialize() {
        rows.push(record.map_err(data_source)?);
    }
    Ok(rows)
}

fn read_vectorizer(path: &str) -> Result<TfidfVectorizer, LoadError> {
    let vectorizer_error = |reason: String| LoadError::Vectorizer {
        path: path.to_string(),
        reason,
    };

    let file = File::open(path).map_err(|e| vectorizer_error(e.to_string()))?;
    serde_json::from_reader(BufReader::new(file)).map_err(|e| vectorizer_error(e.to_string()))
}

fn read_classifier(path: &str) -> Result<GenreClassifier, String> {
    let file = File::open(path).map_err(|e| e.to_string())?;
    serde_json::from_reader(BufReader::new(file)).map_err(|e| e.to_string())
}
