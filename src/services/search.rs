use crate::catalog::Catalog;

/// Most titles an autocomplete query returns.
const SEARCH_LIMIT: usize = 10;

/// Queries shorter than this return nothing rather than matching half the
/// catalog.
const MIN_QUERY_CHARS: usize = 2;

/// Case-insensitive substring search over catalog titles, in dataset order.
pub fn search_titles(catalog: &Catalog, query: &str) -> Vec<String> {
    let needle = query.trim().to_lowercase();
    if needle.chars().count() < MIN_QUERY_CHARS {
        return Vec::new();
    }

    catalog
        .movies()
        .iter()
        .filter(|movie| movie.title.to_lowercase().contains(&needle))
        .map(|movie| movie.title.clone())
        .take(SEARCH_LIMIT)
        .collect()
}
