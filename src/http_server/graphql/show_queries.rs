use async_graphql::{Context, Object, SimpleObject};
use chrono::{DateTime, Utc};

use crate::http_server::graphql::context::show_service;
use crate::http_server::graphql_error::GraphqlResult;
use crate::services::show::ShowListing;

#[derive(Debug, Clone, SimpleObject)]
pub struct Show {
    pub venue_id: i64,
    pub venue_name: String,
    pub artist_id: i64,
    pub artist_name: String,
    pub artist_image_link: Option<String>,
    pub start_time: DateTime<Utc>,
}

impl From<ShowListing> for Show {
    fn from(listing: ShowListing) -> Self {
        Self {
            venue_id: listing.venue_id,
            venue_name: listing.venue_name,
            artist_id: listing.artist_id,
            artist_name: listing.artist_name,
            artist_image_link: listing.artist_image_link,
            start_time: listing.start_time,
        }
    }
}

#[derive(Default)]
pub struct ShowQuery;

#[Object]
impl ShowQuery {
    /// Every show, earliest first.
    async fn shows(&self, ctx: &Context<'_>) -> GraphqlResult<Vec<Show>> {
        let service = show_service(ctx)?;
        let shows = service.list().await?;

        Ok(shows.into_iter().map(Into::into).collect())
    }
}
