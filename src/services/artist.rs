use std::sync::Arc;

use chrono::{DateTime, Utc};
use color_eyre::eyre::{Result, WrapErr};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, IntoActiveModel, QueryFilter, QueryOrder, Set,
};
use tracing::instrument;
use validator::Validate;

use crate::database::Database;
use crate::entities::{artist, genres::Genres, show, venue};
use crate::forms::ArtistForm;
use crate::services::show::{Partitioned, partition_shows, upcoming_counts};
use crate::services::{SearchResults, ServiceError, Summary, name_matches};

/// A show as listed on an artist page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtistShow {
    pub venue_id: i64,
    pub venue_name: String,
    pub venue_image_link: Option<String>,
    pub start_time: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtistDetail {
    pub artist: artist::Model,
    pub past_shows: Vec<ArtistShow>,
    pub upcoming_shows: Vec<ArtistShow>,
}

impl ArtistDetail {
    pub fn past_shows_count(&self) -> usize {
        self.past_shows.len()
    }

    pub fn upcoming_shows_count(&self) -> usize {
        self.upcoming_shows.len()
    }
}

fn apply_form(model: &mut artist::ActiveModel, form: ArtistForm) {
    model.name = Set(form.name);
    model.city = Set(form.city);
    model.state = Set(form.state);
    model.phone = Set(form.phone);
    model.genres = Set(Genres(form.genres));
    model.image_link = Set(form.image_link);
    model.facebook_link = Set(form.facebook_link);
    model.website = Set(form.website);
    model.seeking_venue = Set(form.seeking_venue);
    model.seeking_description = Set(form.seeking_description);
}

pub struct ArtistService {
    db: Arc<Database>,
}

impl ArtistService {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    /// All artists ordered by name.
    #[instrument(skip(self))]
    pub async fn list(&self) -> Result<Vec<artist::Model>> {
        artist::Entity::find()
            .order_by_asc(artist::Column::Name)
            .order_by_asc(artist::Column::Id)
            .all(&self.db.conn)
            .await
            .wrap_err("Failed to fetch artists")
    }

    /// Artists whose name contains `search_term`, ignoring case.
    #[instrument(skip(self))]
    pub async fn search(&self, search_term: &str, now: DateTime<Utc>) -> Result<SearchResults> {
        let artists = artist::Entity::find()
            .order_by_asc(artist::Column::Name)
            .all(&self.db.conn)
            .await
            .wrap_err("Failed to search artists")?;

        let counts = upcoming_counts(&self.db.conn, show::Column::ArtistId, now).await?;

        let data: Vec<Summary> = artists
            .into_iter()
            .filter(|artist| name_matches(&artist.name, search_term))
            .map(|artist| Summary {
                num_upcoming_shows: counts.get(&artist.id).copied().unwrap_or(0),
                id: artist.id,
                name: artist.name,
            })
            .collect();

        Ok(SearchResults {
            count: data.len(),
            data,
        })
    }

    pub async fn get(&self, artist_id: i64) -> Result<artist::Model> {
        let artist = artist::Entity::find_by_id(artist_id)
            .one(&self.db.conn)
            .await
            .wrap_err("Failed to fetch artist")?
            .ok_or(ServiceError::artist_not_found(artist_id))?;

        Ok(artist)
    }

    /// The artist with its shows split into past and upcoming.
    #[instrument(skip(self))]
    pub async fn get_detail(&self, artist_id: i64, now: DateTime<Utc>) -> Result<ArtistDetail> {
        let artist = self.get(artist_id).await?;

        let shows = show::Entity::find()
            .filter(show::Column::ArtistId.eq(artist_id))
            .find_also_related(venue::Entity)
            .order_by_asc(show::Column::ShowTime)
            .all(&self.db.conn)
            .await
            .wrap_err("Failed to fetch artist shows")?;

        let shows = shows.into_iter().filter_map(|(show, venue)| {
            venue.map(|venue| ArtistShow {
                venue_id: venue.id,
                venue_name: venue.name,
                venue_image_link: venue.image_link,
                start_time: show.show_time,
            })
        });

        let Partitioned { past, upcoming } = partition_shows(shows, now, |show| show.start_time);

        Ok(ArtistDetail {
            artist,
            past_shows: past,
            upcoming_shows: upcoming,
        })
    }

    #[instrument(skip(self, form), fields(name = %form.name))]
    pub async fn create(&self, form: ArtistForm) -> Result<artist::Model> {
        form.validate().map_err(|e| ServiceError::invalid(&e))?;

        let mut artist = artist::ActiveModel {
            ..Default::default()
        };
        apply_form(&mut artist, form);

        let model = artist
            .insert(&self.db.conn)
            .await
            .wrap_err("Failed to insert artist")?;

        log::info!("Artist created: '{}' (ID: {})", model.name, model.id);
        Ok(model)
    }

    #[instrument(skip(self, form), fields(name = %form.name))]
    pub async fn update(&self, artist_id: i64, form: ArtistForm) -> Result<artist::Model> {
        form.validate().map_err(|e| ServiceError::invalid(&e))?;

        let mut artist = self.get(artist_id).await?.into_active_model();
        apply_form(&mut artist, form);

        let model = artist
            .update(&self.db.conn)
            .await
            .wrap_err("Failed to update artist")?;

        log::info!("Artist updated: '{}' (ID: {})", model.name, model.id);
        Ok(model)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::NewShow;
    use crate::services::show::ShowService;
    use crate::services::venue::VenueService;
    use crate::test_utils::{artist_form, days_from_now, test_db, venue_form};

    #[tokio::test]
    async fn test_list_is_ordered_by_name() {
        let db = test_db().await;
        let service = ArtistService::new(db);

        for name in ["The Wild Sax Band", "Guns N Petals", "Matt Quevedo"] {
            service.create(artist_form(name)).await.unwrap();
        }

        let names: Vec<_> = service
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|artist| artist.name)
            .collect();
        assert_eq!(names, vec!["Guns N Petals", "Matt Quevedo", "The Wild Sax Band"]);
    }

    #[tokio::test]
    async fn test_search_counts_upcoming_shows() {
        let db = test_db().await;
        let service = ArtistService::new(db.clone());
        let petals = service.create(artist_form("Guns N Petals")).await.unwrap();
        service.create(artist_form("Matt Quevedo")).await.unwrap();
        service.create(artist_form("The Wild Sax Band")).await.unwrap();

        let venue = VenueService::new(db.clone())
            .create(venue_form("The Musical Hop", "San Francisco", "CA"))
            .await
            .unwrap();
        let shows = ShowService::new(db);
        for days in [2, 4, -4] {
            shows
                .create(NewShow {
                    artist_id: petals.id,
                    venue_id: venue.id,
                    show_time: days_from_now(days),
                })
                .await
                .unwrap();
        }

        let results = service.search("A", Utc::now()).await.unwrap();
        let names: Vec<_> = results.data.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(results.count, 3);
        assert_eq!(names, vec!["Guns N Petals", "Matt Quevedo", "The Wild Sax Band"]);

        let results = service.search("band", Utc::now()).await.unwrap();
        assert_eq!(results.count, 1);
        assert_eq!(results.data[0].name, "The Wild Sax Band");

        let results = service.search("petals", Utc::now()).await.unwrap();
        assert_eq!(
            results.data,
            vec![Summary {
                id: petals.id,
                name: "Guns N Petals".to_string(),
                num_upcoming_shows: 2,
            }]
        );

        let results = service.search("nobody", Utc::now()).await.unwrap();
        assert_eq!(results.count, 0);
        assert!(results.data.is_empty());
    }

    #[tokio::test]
    async fn test_detail_partitions_shows() {
        let db = test_db().await;
        let service = ArtistService::new(db.clone());
        let artist = service.create(artist_form("Matt Quevedo")).await.unwrap();
        let venue = VenueService::new(db.clone())
            .create(venue_form("The Dueling Pianos Bar", "New York", "NY"))
            .await
            .unwrap();

        let shows = ShowService::new(db);
        let past = days_from_now(-400);
        for show_time in [days_from_now(10), past, days_from_now(20)] {
            shows
                .create(NewShow {
                    artist_id: artist.id,
                    venue_id: venue.id,
                    show_time,
                })
                .await
                .unwrap();
        }

        let detail = service.get_detail(artist.id, Utc::now()).await.unwrap();
        assert_eq!(detail.past_shows_count(), 1);
        assert_eq!(detail.upcoming_shows_count(), 2);
        assert_eq!(detail.past_shows[0].start_time, past);
        assert_eq!(detail.past_shows[0].venue_name, "The Dueling Pianos Bar");
        assert!(
            detail.upcoming_shows[0].start_time < detail.upcoming_shows[1].start_time,
            "upcoming shows are ordered by start time"
        );
    }

    #[tokio::test]
    async fn test_detail_without_shows() {
        let db = test_db().await;
        let service = ArtistService::new(db);
        let artist = service.create(artist_form("Guns N Petals")).await.unwrap();

        let detail = service.get_detail(artist.id, Utc::now()).await.unwrap();
        assert_eq!(detail.artist.name, "Guns N Petals");
        assert!(detail.past_shows.is_empty());
        assert!(detail.upcoming_shows.is_empty());
    }

    #[tokio::test]
    async fn test_update_artist() {
        let db = test_db().await;
        let service = ArtistService::new(db);
        let artist = service.create(artist_form("Guns N Petals")).await.unwrap();

        let mut form = ArtistForm::from(artist.clone());
        form.city = "Oakland".to_string();
        form.seeking_venue = true;
        form.seeking_description = Some("Looking for shows in the Bay Area".to_string());

        service.update(artist.id, form).await.unwrap();

        let fetched = service.get(artist.id).await.unwrap();
        assert_eq!(fetched.city, "Oakland");
        assert!(fetched.seeking_venue);
        assert_eq!(
            fetched.seeking_description.as_deref(),
            Some("Looking for shows in the Bay Area")
        );
    }

    #[tokio::test]
    async fn test_update_rejects_invalid_form() {
        let db = test_db().await;
        let service = ArtistService::new(db);
        let artist = service.create(artist_form("Guns N Petals")).await.unwrap();

        let mut form = ArtistForm::from(artist.clone());
        form.name = "Renamed".to_string();
        form.state = "XX".to_string();

        let err = service.update(artist.id, form).await.unwrap_err();
        assert_eq!(
            err.downcast_ref::<ServiceError>(),
            Some(&ServiceError::Validation("Provide a valid state".to_string()))
        );
        assert_eq!(service.get(artist.id).await.unwrap().name, "Guns N Petals");
    }

    #[tokio::test]
    async fn test_update_missing_artist() {
        let db = test_db().await;
        let service = ArtistService::new(db);

        let err = service.update(8, artist_form("Ghost")).await.unwrap_err();
        assert_eq!(
            err.downcast_ref::<ServiceError>(),
            Some(&ServiceError::artist_not_found(8))
        );
    }
}
