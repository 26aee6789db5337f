use serde::Deserialize;

pub mod artists;
pub mod pages;
pub mod shows;
pub mod venues;

#[derive(Debug, Default, Deserialize)]
pub struct SearchForm {
    #[serde(default)]
    pub search_term: String,
}
