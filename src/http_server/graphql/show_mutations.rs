use async_graphql::{Context, InputObject, Object, SimpleObject};
use chrono::{DateTime, Utc};

use crate::forms::NewShow;
use crate::http_server::graphql::context::show_service;
use crate::http_server::graphql_error::GraphqlResult;

#[derive(Debug, Clone, InputObject)]
pub struct ShowInput {
    pub artist_id: i64,
    pub venue_id: i64,
    pub start_time: DateTime<Utc>,
}

#[derive(Debug, Clone, SimpleObject)]
pub struct CreatedShow {
    pub id: i64,
    pub artist_id: i64,
    pub venue_id: i64,
    pub start_time: DateTime<Utc>,
}

#[derive(Default)]
pub struct ShowMutation;

#[Object]
impl ShowMutation {
    /// Books an artist at a venue. Both must already exist.
    async fn create_show(&self, ctx: &Context<'_>, input: ShowInput) -> GraphqlResult<CreatedShow> {
        let service = show_service(ctx)?;
        let model = service
            .create(NewShow {
                artist_id: input.artist_id,
                venue_id: input.venue_id,
                show_time: input.start_time,
            })
            .await?;

        Ok(CreatedShow {
            id: model.id,
            artist_id: model.artist_id,
            venue_id: model.venue_id,
            start_time: model.show_time,
        })
    }
}
