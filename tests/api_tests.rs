use axum_test::TestServer;
use serde_json::json;

use cinematch_api::api::{create_router, AppState};
use cinematch_api::catalog::Catalog;
use cinematch_api::ml::{GenreClassifier, TfidfVectorizer};
use cinematch_api::models::MovieRow;

fn fixture_vectorizer() -> TfidfVectorizer {
    serde_json::from_value(json!({
        "vocabulary": {"dream": 0, "heist": 1, "space": 2, "wormhole": 3},
        "idf": [1.0, 1.2, 1.5, 2.0]
    }))
    .unwrap()
}

fn fixture_classifier() -> GenreClassifier {
    serde_json::from_value(json!({
        "classes": ["Sci-Fi", "Crime"],
        "coefficients": [[2.0, 0.0, 2.0, 2.0], [0.0, 2.0, 0.0, 0.0]],
        "intercepts": [0.0, 0.0]
    }))
    .unwrap()
}

fn fixture_rows() -> Vec<MovieRow> {
    vec![
        MovieRow {
            title: "Inception".to_string(),
            overview: "A thief pulls off a dream heist".to_string(),
            genres: r#"[{"id": 878, "name": "Science Fiction"}]"#.to_string(),
            release_date: "2010-07-16".to_string(),
            popularity: Some(29.0878),
            vote_average: Some(8.3),
            ..Default::default()
        },
        MovieRow {
            title: "The Matrix".to_string(),
            overview: "A hacker wakes from a dream into space".to_string(),
            genres: r#"[{"id": 28, "name": "Action"}]"#.to_string(),
            release_date: "1999-03-30".to_string(),
            popularity: Some(104.309993),
            vote_average: Some(7.9),
            ..Default::default()
        },
        MovieRow {
            title: "Interstellar".to_string(),
            overview: "Explorers cross space through a wormhole".to_string(),
            genres: r#"[{"id": 12, "name": "Adventure"}]"#.to_string(),
            release_date: "2014-11-05".to_string(),
            popularity: Some(724.247784),
            vote_average: Some(8.1),
            ..Default::default()
        },
    ]
}

fn create_test_server(classifier: Option<GenreClassifier>) -> TestServer {
    let catalog = Catalog::build(fixture_rows(), fixture_vectorizer(), classifier);
    let state = AppState::new(catalog);
    let app = create_router(state);
    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn test_health_check() {
    let server = create_test_server(None);
    let response = server.get("/health").await;
    response.assert_status_ok();
}

#[tokio::test]
async fn test_search_matches_substring_case_insensitively() {
    let server = create_test_server(None);

    let response = server.get("/search").add_query_param("q", "matrix").await;
    response.assert_status_ok();
    let titles: Vec<String> = response.json();
    assert_eq!(titles, vec!["The Matrix"]);
}

#[tokio::test]
async fn test_search_rejects_short_queries_with_empty_list() {
    let server = create_test_server(None);

    let response = server.get("/search").add_query_param("q", "m").await;
    response.assert_status_ok();
    let titles: Vec<String> = response.json();
    assert!(titles.is_empty());
}

#[tokio::test]
async fn test_recommend_returns_ranked_neighbors() {
    let server = create_test_server(None);

    let response = server.get("/api/recommend/inception").await;
    response.assert_status_ok();
    let body: serde_json::Value = response.json();

    assert_eq!(body["movie"], "inception");
    let recommendations = body["recommendations"].as_array().unwrap();
    assert_eq!(recommendations.len(), 2);
    // The Matrix shares the "dream" feature with Inception; Interstellar
    // shares nothing.
    assert_eq!(recommendations[0]["title"], "The Matrix");
    assert!(recommendations.iter().all(|r| r["title"] != "Inception"));
    for record in recommendations {
        assert!(record["similarity_score"].is_number());
        assert!(record["genres"].is_string());
    }
}

#[tokio::test]
async fn test_recommend_honors_k_parameter() {
    let server = create_test_server(None);

    let response = server
        .get("/api/recommend/inception")
        .add_query_param("k", 1)
        .await;
    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["recommendations"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_recommend_unknown_title_is_404() {
    let server = create_test_server(None);

    let response = server.get("/api/recommend/Paddington").await;
    response.assert_status(axum::http::StatusCode::NOT_FOUND);
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"], "Movie not found in database");
}

#[tokio::test]
async fn test_recommend_blank_title_is_400() {
    let server = create_test_server(None);

    let response = server.get("/api/recommend/%20%20").await;
    response.assert_status(axum::http::StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"], "Please enter a movie title");
}

#[tokio::test]
async fn test_predict_genre_with_classifier() {
    let server = create_test_server(Some(fixture_classifier()));

    let response = server
        .post("/api/predict-genre")
        .json(&json!({"text": "explorers fly through space and a wormhole"}))
        .await;
    response.assert_status_ok();
    let body: serde_json::Value = response.json();

    assert_eq!(body["genre"], "Sci-Fi");
    let confidence = body["confidence"].as_f64().unwrap();
    assert!(confidence > 0.5 && confidence <= 1.0);
}

#[tokio::test]
async fn test_predict_genre_without_classifier_is_unavailable() {
    let server = create_test_server(None);

    // Permanently unavailable, not intermittently.
    for _ in 0..2 {
        let response = server
            .post("/api/predict-genre")
            .json(&json!({"text": "a perfectly ordinary description"}))
            .await;
        response.assert_status(axum::http::StatusCode::SERVICE_UNAVAILABLE);
        let body: serde_json::Value = response.json();
        assert_eq!(body["error"], "Genre prediction not available");
    }
}

#[tokio::test]
async fn test_predict_genre_rejects_empty_text() {
    let server = create_test_server(Some(fixture_classifier()));

    let response = server
        .post("/api/predict-genre")
        .json(&json!({"text": "   "}))
        .await;
    response.assert_status(axum::http::StatusCode::BAD_REQUEST);
}
