use std::sync::Arc;

use chrono::{DateTime, Utc};
use color_eyre::eyre::{Result, WrapErr};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, IntoActiveModel, QueryFilter, QueryOrder, Set,
    TransactionTrait,
};
use tracing::instrument;
use validator::Validate;

use crate::database::Database;
use crate::entities::{artist, genres::Genres, show, venue};
use crate::forms::VenueForm;
use crate::services::show::{Partitioned, partition_shows, upcoming_counts};
use crate::services::{SearchResults, ServiceError, Summary, name_matches};

/// Venues sharing a city and state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Area {
    pub city: String,
    pub state: String,
    pub venues: Vec<Summary>,
}

/// A show as listed on a venue page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VenueShow {
    pub artist_id: i64,
    pub artist_name: String,
    pub artist_image_link: Option<String>,
    pub start_time: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VenueDetail {
    pub venue: venue::Model,
    pub past_shows: Vec<VenueShow>,
    pub upcoming_shows: Vec<VenueShow>,
}

impl VenueDetail {
    pub fn past_shows_count(&self) -> usize {
        self.past_shows.len()
    }

    pub fn upcoming_shows_count(&self) -> usize {
        self.upcoming_shows.len()
    }
}

/// Groups venues that are already ordered by (state, city) into areas.
fn group_by_area(venues: Vec<(venue::Model, u64)>) -> Vec<Area> {
    let mut areas: Vec<Area> = Vec::new();

    for (venue, num_upcoming_shows) in venues {
        let summary = Summary {
            id: venue.id,
            name: venue.name,
            num_upcoming_shows,
        };

        match areas.last_mut() {
            Some(area) if area.city == venue.city && area.state == venue.state => {
                area.venues.push(summary)
            }
            _ => areas.push(Area {
                city: venue.city,
                state: venue.state,
                venues: vec![summary],
            }),
        }
    }

    areas
}

fn apply_form(model: &mut venue::ActiveModel, form: VenueForm) {
    model.name = Set(form.name);
    model.city = Set(form.city);
    model.state = Set(form.state);
    model.address = Set(form.address);
    model.phone = Set(form.phone);
    model.genres = Set(Genres(form.genres));
    model.image_link = Set(form.image_link);
    model.facebook_link = Set(form.facebook_link);
    model.website = Set(form.website);
    model.seeking_talent = Set(form.seeking_talent);
    model.seeking_description = Set(form.seeking_description);
}

pub struct VenueService {
    db: Arc<Database>,
}

impl VenueService {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    /// All venues grouped by (city, state), each with its upcoming show count.
    #[instrument(skip(self))]
    pub async fn list_areas(&self, now: DateTime<Utc>) -> Result<Vec<Area>> {
        let venues = venue::Entity::find()
            .order_by_asc(venue::Column::State)
            .order_by_asc(venue::Column::City)
            .order_by_asc(venue::Column::Name)
            .all(&self.db.conn)
            .await
            .wrap_err("Failed to fetch venues")?;

        let counts = upcoming_counts(&self.db.conn, show::Column::VenueId, now).await?;

        Ok(group_by_area(
            venues
                .into_iter()
                .map(|venue| {
                    let count = counts.get(&venue.id).copied().unwrap_or(0);
                    (venue, count)
                })
                .collect(),
        ))
    }

    /// Venues whose name contains `search_term`, ignoring case.
    #[instrument(skip(self))]
    pub async fn search(&self, search_term: &str, now: DateTime<Utc>) -> Result<SearchResults> {
        let venues = venue::Entity::find()
            .order_by_asc(venue::Column::Name)
            .all(&self.db.conn)
            .await
            .wrap_err("Failed to search venues")?;

        let counts = upcoming_counts(&self.db.conn, show::Column::VenueId, now).await?;

        let data: Vec<Summary> = venues
            .into_iter()
            .filter(|venue| name_matches(&venue.name, search_term))
            .map(|venue| Summary {
                num_upcoming_shows: counts.get(&venue.id).copied().unwrap_or(0),
                id: venue.id,
                name: venue.name,
            })
            .collect();

        Ok(SearchResults {
            count: data.len(),
            data,
        })
    }

    pub async fn get(&self, venue_id: i64) -> Result<venue::Model> {
        let venue = venue::Entity::find_by_id(venue_id)
            .one(&self.db.conn)
            .await
            .wrap_err("Failed to fetch venue")?
            .ok_or(ServiceError::venue_not_found(venue_id))?;

        Ok(venue)
    }

    /// The venue with its shows split into past and upcoming.
    #[instrument(skip(self))]
    pub async fn get_detail(&self, venue_id: i64, now: DateTime<Utc>) -> Result<VenueDetail> {
        let venue = self.get(venue_id).await?;

        let shows = show::Entity::find()
            .filter(show::Column::VenueId.eq(venue_id))
            .find_also_related(artist::Entity)
            .order_by_asc(show::Column::ShowTime)
            .all(&self.db.conn)
            .await
            .wrap_err("Failed to fetch venue shows")?;

        let shows = shows.into_iter().filter_map(|(show, artist)| {
            artist.map(|artist| VenueShow {
                artist_id: artist.id,
                artist_name: artist.name,
                artist_image_link: artist.image_link,
                start_time: show.show_time,
            })
        });

        let Partitioned { past, upcoming } = partition_shows(shows, now, |show| show.start_time);

        Ok(VenueDetail {
            venue,
            past_shows: past,
            upcoming_shows: upcoming,
        })
    }

    #[instrument(skip(self, form), fields(name = %form.name))]
    pub async fn create(&self, form: VenueForm) -> Result<venue::Model> {
        form.validate().map_err(|e| ServiceError::invalid(&e))?;

        let mut venue = venue::ActiveModel {
            ..Default::default()
        };
        apply_form(&mut venue, form);

        let model = venue
            .insert(&self.db.conn)
            .await
            .wrap_err("Failed to insert venue")?;

        log::info!("Venue created: '{}' (ID: {})", model.name, model.id);
        Ok(model)
    }

    #[instrument(skip(self, form), fields(name = %form.name))]
    pub async fn update(&self, venue_id: i64, form: VenueForm) -> Result<venue::Model> {
        form.validate().map_err(|e| ServiceError::invalid(&e))?;

        let mut venue = self.get(venue_id).await?.into_active_model();
        apply_form(&mut venue, form);

        let model = venue
            .update(&self.db.conn)
            .await
            .wrap_err("Failed to update venue")?;

        log::info!("Venue updated: '{}' (ID: {})", model.name, model.id);
        Ok(model)
    }

    /// Deletes the venue together with all of its shows.
    #[instrument(skip(self))]
    pub async fn delete(&self, venue_id: i64) -> Result<()> {
        let venue = self.get(venue_id).await?;

        // Dropping the transaction on error rolls it back
        let txn = self
            .db
            .conn
            .begin()
            .await
            .wrap_err("Failed to start transaction")?;

        let removed_shows = show::Entity::delete_many()
            .filter(show::Column::VenueId.eq(venue_id))
            .exec(&txn)
            .await
            .wrap_err("Failed to delete venue shows")?;

        venue::Entity::delete_by_id(venue_id)
            .exec(&txn)
            .await
            .wrap_err("Failed to delete venue")?;

        txn.commit().await.wrap_err("Failed to commit venue deletion")?;

        log::info!(
            "Venue deleted: '{}' (ID: {}) with {} show(s)",
            venue.name,
            venue.id,
            removed_shows.rows_affected
        );
        Ok(())
    }
}
