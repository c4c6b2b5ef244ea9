use serde::Deserialize;

/// Application configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Path to the movie metadata CSV export
    #[serde(default = "default_movie_data_path")]
    pub movie_data_path: String,

    /// Path to the pretrained TF-IDF vectorizer artifact
    #[serde(default = "default_vectorizer_path")]
    pub vectorizer_path: String,

    /// Path to the pretrained genre classifier artifact
    #[serde(default = "default_genre_model_path")]
    pub genre_model_path: String,

    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_movie_data_path() -> String {
    "tmdb_5000_movies.csv".to_string()
}

fn default_vectorizer_path() -> String {
    "vectorizer.json".to_string()
}

fn default_genre_model_path() -> String {
    "genre_model.json".to_string()
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        envy::from_env::<Config>().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))
    }
}
