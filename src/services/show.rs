use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use color_eyre::eyre::{Result, WrapErr};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, QuerySelect, Set,
};
use tracing::instrument;

use crate::database::Database;
use crate::entities::{artist, show, venue};
use crate::forms::NewShow;
use crate::services::ServiceError;

/// A show is upcoming only while its start time is strictly in the future.
pub fn is_upcoming(show_time: DateTime<Utc>, now: DateTime<Utc>) -> bool {
    show_time > now
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Partitioned<T> {
    pub past: Vec<T>,
    pub upcoming: Vec<T>,
}

/// Splits shows into past and upcoming relative to `now`, keeping their order.
pub fn partition_shows<T>(
    shows: impl IntoIterator<Item = T>,
    now: DateTime<Utc>,
    show_time: impl Fn(&T) -> DateTime<Utc>,
) -> Partitioned<T> {
    let (upcoming, past) = shows
        .into_iter()
        .partition(|show| is_upcoming(show_time(show), now));
    Partitioned { past, upcoming }
}

/// Number of upcoming shows per owner, keyed by the id held in `owner`
/// (`VenueId` or `ArtistId`). Owners without upcoming shows are absent.
pub(crate) async fn upcoming_counts<C>(
    conn: &C,
    owner: show::Column,
    now: DateTime<Utc>,
) -> Result<HashMap<i64, u64>>
where
    C: sea_orm::ConnectionTrait,
{
    let counts: Vec<(i64, i64)> = show::Entity::find()
        .select_only()
        .column(owner)
        .column_as(show::Column::Id.count(), "upcoming")
        .filter(show::Column::ShowTime.gt(now))
        .group_by(owner)
        .into_tuple()
        .all(conn)
        .await
        .wrap_err("Failed to count upcoming shows")?;

    Ok(counts
        .into_iter()
        .map(|(id, count)| (id, count as u64))
        .collect())
}

/// A show joined with the venue and artist it belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShowListing {
    pub venue_id: i64,
    pub venue_name: String,
    pub artist_id: i64,
    pub artist_name: String,
    pub artist_image_link: Option<String>,
    pub start_time: DateTime<Utc>,
}

pub struct ShowService {
    db: Arc<Database>,
}

impl ShowService {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    /// Every show with its venue and artist, earliest first.
    #[instrument(skip(self))]
    pub async fn list(&self) -> Result<Vec<ShowListing>> {
        let shows = show::Entity::find()
            .find_also_related(venue::Entity)
            .order_by_asc(show::Column::ShowTime)
            .order_by_asc(show::Column::Id)
            .all(&self.db.conn)
            .await
            .wrap_err("Failed to fetch shows")?;

        let artist_ids: Vec<i64> = shows.iter().map(|(show, _)| show.artist_id).collect();
        let artists: HashMap<i64, artist::Model> = artist::Entity::find()
            .filter(artist::Column::Id.is_in(artist_ids))
            .all(&self.db.conn)
            .await
            .wrap_err("Failed to fetch show artists")?
            .into_iter()
            .map(|artist| (artist.id, artist))
            .collect();

        let listings = shows
            .into_iter()
            .filter_map(|(show, venue)| {
                let (Some(venue), Some(artist)) = (venue, artists.get(&show.artist_id)) else {
                    log::warn!("Skipping show {} with a missing venue or artist", show.id);
                    return None;
                };

                Some(ShowListing {
                    venue_id: venue.id,
                    venue_name: venue.name,
                    artist_id: artist.id,
                    artist_name: artist.name.clone(),
                    artist_image_link: artist.image_link.clone(),
                    start_time: show.show_time,
                })
            })
            .collect();

        Ok(listings)
    }

    /// Inserts a show after checking that its venue and artist exist.
    #[instrument(skip(self))]
    pub async fn create(&self, new_show: NewShow) -> Result<show::Model> {
        venue::Entity::find_by_id(new_show.venue_id)
            .one(&self.db.conn)
            .await
            .wrap_err("Failed to find venue")?
            .ok_or(ServiceError::venue_not_found(new_show.venue_id))?;

        artist::Entity::find_by_id(new_show.artist_id)
            .one(&self.db.conn)
            .await
            .wrap_err("Failed to find artist")?
            .ok_or(ServiceError::artist_not_found(new_show.artist_id))?;

        let show = show::ActiveModel {
            venue_id: Set(new_show.venue_id),
            artist_id: Set(new_show.artist_id),
            show_time: Set(new_show.show_time),
            ..Default::default()
        };

        let model = show
            .insert(&self.db.conn)
            .await
            .wrap_err("Failed to create show")?;

        log::info!(
            "Show created: venue {} / artist {} (ID: {})",
            model.venue_id,
            model.artist_id,
            model.id
        );
        Ok(model)
    }
}
