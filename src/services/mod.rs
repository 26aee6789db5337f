pub mod artist;
pub mod show;
pub mod venue;

/// Failures a caller is expected to tell apart from plain database errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ServiceError {
    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: i64 },
    #[error("Invalid input: {0}")]
    Validation(String),
}

impl ServiceError {
    pub fn venue_not_found(id: i64) -> Self {
        Self::NotFound { entity: "Venue", id }
    }

    pub fn artist_not_found(id: i64) -> Self {
        Self::NotFound {
            entity: "Artist",
            id,
        }
    }

    fn invalid(errors: &validator::ValidationErrors) -> Self {
        Self::Validation(crate::forms::error_messages(errors).join(", "))
    }
}

/// A venue or artist as shown in listings and search results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub id: i64,
    pub name: String,
    pub num_upcoming_shows: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResults {
    pub count: usize,
    pub data: Vec<Summary>,
}

/// Case-insensitive substring match on a record name. Folding is done in
/// Rust so non-ASCII letters compare equal regardless of case, and `%` or
/// `_` in the term only ever match literally. An empty term matches all.
pub(crate) fn name_matches(name: &str, search_term: &str) -> bool {
    let search_term = search_term.trim();
    search_term.is_empty() || name.to_lowercase().contains(&search_term.to_lowercase())
}
