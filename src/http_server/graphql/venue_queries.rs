use async_graphql::{Context, Object, SimpleObject};
use chrono::{DateTime, Utc};

use crate::entities::venue;
use crate::http_server::graphql::context::venue_service;
use crate::http_server::graphql::{RecordSummary, SearchResponse};
use crate::http_server::graphql_error::{GraphqlErrorWrapper, GraphqlResult};
use crate::services::{self, venue::Area};

#[derive(Debug, Clone, SimpleObject)]
pub struct Venue {
    pub id: i64,
    pub name: String,
    pub genres: Vec<String>,
    pub city: String,
    pub state: String,
    pub address: String,
    pub phone: String,
    pub image_link: Option<String>,
    pub facebook_link: Option<String>,
    pub website: Option<String>,
    pub seeking_talent: bool,
    pub seeking_description: Option<String>,
}

impl From<venue::Model> for Venue {
    fn from(model: venue::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            genres: model.genres.0,
            city: model.city,
            state: model.state,
            address: model.address,
            phone: model.phone,
            image_link: model.image_link,
            facebook_link: model.facebook_link,
            website: model.website,
            seeking_talent: model.seeking_talent,
            seeking_description: model.seeking_description,
        }
    }
}

#[derive(Debug, Clone, SimpleObject)]
pub struct VenueShow {
    pub artist_id: i64,
    pub artist_name: String,
    pub artist_image_link: Option<String>,
    pub start_time: DateTime<Utc>,
}

#[derive(Debug, Clone, SimpleObject)]
pub struct VenueDetail {
    pub venue: Venue,
    pub past_shows: Vec<VenueShow>,
    pub upcoming_shows: Vec<VenueShow>,
    pub past_shows_count: i64,
    pub upcoming_shows_count: i64,
}

#[derive(Debug, Clone, SimpleObject)]
pub struct VenueArea {
    pub city: String,
    pub state: String,
    pub venues: Vec<RecordSummary>,
}

impl From<Area> for VenueArea {
    fn from(area: Area) -> Self {
        Self {
            city: area.city,
            state: area.state,
            venues: area.venues.into_iter().map(Into::into).collect(),
        }
    }
}

fn map_show(show: services::venue::VenueShow) -> VenueShow {
    VenueShow {
        artist_id: show.artist_id,
        artist_name: show.artist_name,
        artist_image_link: show.artist_image_link,
        start_time: show.start_time,
    }
}

#[derive(Default)]
pub struct VenueQuery;

#[Object]
impl VenueQuery {
    /// Venues grouped by city and state.
    async fn venue_areas(&self, ctx: &Context<'_>) -> GraphqlResult<Vec<VenueArea>> {
        let service = venue_service(ctx)?;
        let areas = service.list_areas(Utc::now()).await?;

        Ok(areas.into_iter().map(Into::into).collect())
    }

    async fn venue(&self, ctx: &Context<'_>, id: i64) -> GraphqlResult<Option<VenueDetail>> {
        let service = venue_service(ctx)?;
        let detail = match service.get_detail(id, Utc::now()).await {
            Ok(detail) => detail,
            Err(err) => {
                let err = GraphqlErrorWrapper::from(err);
                return if err.is_not_found() { Ok(None) } else { Err(err) };
            }
        };

        Ok(Some(VenueDetail {
            past_shows_count: detail.past_shows_count() as i64,
            upcoming_shows_count: detail.upcoming_shows_count() as i64,
            venue: detail.venue.into(),
            past_shows: detail.past_shows.into_iter().map(map_show).collect(),
            upcoming_shows: detail.upcoming_shows.into_iter().map(map_show).collect(),
        }))
    }

    async fn search_venues(&self, ctx: &Context<'_>, term: String) -> GraphqlResult<SearchResponse> {
        let service = venue_service(ctx)?;
        let results = service.search(&term, Utc::now()).await?;

        Ok(results.into())
    }
}
