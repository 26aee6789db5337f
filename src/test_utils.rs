use std::sync::Arc;

use chrono::{DateTime, Duration, SubsecRound, Utc};
use sea_orm::{ConnectOptions, Database as SeaDatabase};

use crate::database::Database;
use crate::forms::{ArtistForm, VenueForm};

pub async fn test_db() -> Arc<Database> {
    // A single connection, so every query sees the same in-memory database
    let mut opt = ConnectOptions::new("sqlite::memory:");
    opt.max_connections(1).min_connections(1).sqlx_logging(false);

    let conn = SeaDatabase::connect(opt).await.unwrap();
    Arc::new(Database::from_connection(conn).await.unwrap())
}

pub fn venue_form(name: &str, city: &str, state: &str) -> VenueForm {
    VenueForm {
        name: name.to_string(),
        city: city.to_string(),
        state: state.to_string(),
        address: "1015 Folsom Street".to_string(),
        phone: "123-123-1234".to_string(),
        genres: vec!["Jazz".to_string(), "Reggae".to_string()],
        image_link: None,
        facebook_link: Some("https://www.facebook.com/TheMusicalHop".to_string()),
        website: None,
        seeking_talent: true,
        seeking_description: Some("We are on the lookout for a local artist".to_string()),
    }
}

pub fn artist_form(name: &str) -> ArtistForm {
    ArtistForm {
        name: name.to_string(),
        city: "San Francisco".to_string(),
        state: "CA".to_string(),
        phone: "326-123-5000".to_string(),
        genres: vec!["Rock n Roll".to_string()],
        image_link: Some("https://example.com/artist.jpg".to_string()),
        facebook_link: None,
        website: None,
        seeking_venue: false,
        seeking_description: None,
    }
}

pub fn days_from_now(days: i64) -> DateTime<Utc> {
    Utc::now().trunc_subsecs(0) + Duration::days(days)
}
