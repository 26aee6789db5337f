use async_graphql::{Context, Object, SimpleObject};
use chrono::{DateTime, Utc};

use crate::entities::artist;
use crate::http_server::graphql::context::artist_service;
use crate::http_server::graphql::SearchResponse;
use crate::http_server::graphql_error::{GraphqlErrorWrapper, GraphqlResult};
use crate::services;

#[derive(Debug, Clone, SimpleObject)]
pub struct Artist {
    pub id: i64,
    pub name: String,
    pub city: String,
    pub state: String,
    pub phone: String,
    pub genres: Vec<String>,
    pub image_link: Option<String>,
    pub facebook_link: Option<String>,
    pub website: Option<String>,
    pub seeking_venue: bool,
    pub seeking_description: Option<String>,
}

impl From<artist::Model> for Artist {
    fn from(model: artist::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            city: model.city,
            state: model.state,
            phone: model.phone,
            genres: model.genres.0,
            image_link: model.image_link,
            facebook_link: model.facebook_link,
            website: model.website,
            seeking_venue: model.seeking_venue,
            seeking_description: model.seeking_description,
        }
    }
}

#[derive(Debug, Clone, SimpleObject)]
pub struct ArtistShow {
    pub venue_id: i64,
    pub venue_name: String,
    pub venue_image_link: Option<String>,
    pub start_time: DateTime<Utc>,
}

#[derive(Debug, Clone, SimpleObject)]
pub struct ArtistDetail {
    pub artist: Artist,
    pub past_shows: Vec<ArtistShow>,
    pub upcoming_shows: Vec<ArtistShow>,
    pub past_shows_count: i64,
    pub upcoming_shows_count: i64,
}

fn map_show(show: services::artist::ArtistShow) -> ArtistShow {
    ArtistShow {
        venue_id: show.venue_id,
        venue_name: show.venue_name,
        venue_image_link: show.venue_image_link,
        start_time: show.start_time,
    }
}

#[derive(Default)]
pub struct ArtistQuery;

#[Object]
impl ArtistQuery {
    /// Every artist, ordered by name.
    async fn artists(&self, ctx: &Context<'_>) -> GraphqlResult<Vec<Artist>> {
        let service = artist_service(ctx)?;
        let artists = service.list().await?;

        Ok(artists.into_iter().map(Into::into).collect())
    }

    async fn artist(&self, ctx: &Context<'_>, id: i64) -> GraphqlResult<Option<ArtistDetail>> {
        let service = artist_service(ctx)?;
        let detail = match service.get_detail(id, Utc::now()).await {
            Ok(detail) => detail,
            Err(err) => {
                let err = GraphqlErrorWrapper::from(err);
                return if err.is_not_found() { Ok(None) } else { Err(err) };
            }
        };

        Ok(Some(ArtistDetail {
            past_shows_count: detail.past_shows_count() as i64,
            upcoming_shows_count: detail.upcoming_shows_count() as i64,
            artist: detail.artist.into(),
            past_shows: detail.past_shows.into_iter().map(map_show).collect(),
            upcoming_shows: detail.upcoming_shows.into_iter().map(map_show).collect(),
        }))
    }

    async fn search_artists(
        &self,
        ctx: &Context<'_>,
        term: String,
    ) -> GraphqlResult<SearchResponse> {
        let service = artist_service(ctx)?;
        let results = service.search(&term, Utc::now()).await?;

        Ok(results.into())
    }
}
