use crate::catalog::Catalog;
use crate::models::GenrePrediction;

/// Predicts a genre label for free text using the catalog's frozen models.
///
/// Returns `None` whenever prediction cannot be served: the classifier
/// artifact was never loaded (a permanent condition for this catalog), or
/// the model produced no label for this input. Callers see a single
/// unavailable state either way.
pub fn predict_genre(catalog: &Catalog, text: &str) -> Option<GenrePrediction> {
    let classifier = catalog.classifier()?;
    let vector = catalog.vectorizer().transform(text);

    match classifier.predict(&vector) {
        Some((genre, confidence)) => Some(GenrePrediction::new(genre.to_string(), confidence)),
        None => {
            tracing::warn!("Genre classifier returned no label");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ml::{GenreClassifier, TfidfVectorizer};
    use crate::models::MovieRow;
    use serde_json::json;

    fn fixture_vectorizer() -> TfidfVectorizer {
        serde_json::from_value(json!({
            "vocabulary": {"explosion": 0, "love": 1},
            "idf": [1.0, 1.0]
        }))
        .expect("fixture vectorizer should deserialize")
    }

    fn fixture_classifier() -> GenreClassifier {
        serde_json::from_value(json!({
            "classes": ["Action", "Romance"],
            "coefficients": [[3.0, 0.0], [0.0, 3.0]],
            "intercepts": [0.0, 0.0]
        }))
        .expect("fixture classifier should deserialize")
    }

    fn catalog(classifier: Option<GenreClassifier>) -> Catalog {
        Catalog::build(vec![MovieRow::default()], fixture_vectorizer(), classifier)
    }

    #[test]
    fn test_predicts_label_and_confidence() {
        let catalog = catalog(Some(fixture_classifier()));

        let prediction =
            predict_genre(&catalog, "an explosion levels the city").expect("should predict");
        assert_eq!(prediction.genre, "Action");
        assert!(prediction.confidence > 0.5);
        assert!(prediction.confidence <= 1.0);
    }

    #[test]
    fn test_unavailable_without_classifier_on_every_call() {
        let catalog = catalog(None);

        for _ in 0..3 {
            assert!(predict_genre(&catalog, "an explosion levels the city").is_none());
        }
    }
}
