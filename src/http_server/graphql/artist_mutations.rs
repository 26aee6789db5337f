use async_graphql::{Context, InputObject, Object};

use crate::forms::{ArtistForm, blank_to_none};
use crate::http_server::graphql::artist_queries::Artist;
use crate::http_server::graphql::context::artist_service;
use crate::http_server::graphql_error::GraphqlResult;

#[derive(Debug, Clone, InputObject)]
pub struct ArtistInput {
    pub name: String,
    pub city: String,
    pub state: String,
    pub phone: String,
    pub genres: Vec<String>,
    pub image_link: Option<String>,
    pub facebook_link: Option<String>,
    pub website: Option<String>,
    #[graphql(default)]
    pub seeking_venue: bool,
    pub seeking_description: Option<String>,
}

impl From<ArtistInput> for ArtistForm {
    fn from(input: ArtistInput) -> Self {
        Self {
            name: input.name.trim().to_string(),
            city: input.city.trim().to_string(),
            state: input.state,
            phone: input.phone.trim().to_string(),
            genres: input.genres,
            image_link: blank_to_none(input.image_link),
            facebook_link: blank_to_none(input.facebook_link),
            website: blank_to_none(input.website),
            seeking_venue: input.seeking_venue,
            seeking_description: blank_to_none(input.seeking_description),
        }
    }
}

#[derive(Default)]
pub struct ArtistMutation;

#[Object]
impl ArtistMutation {
    async fn create_artist(&self, ctx: &Context<'_>, input: ArtistInput) -> GraphqlResult<Artist> {
        let service = artist_service(ctx)?;
        let model = service.create(input.into()).await?;

        Ok(model.into())
    }
}
