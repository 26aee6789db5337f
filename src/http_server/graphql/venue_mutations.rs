use async_graphql::{Context, InputObject, Object};

use crate::forms::{VenueForm, blank_to_none};
use crate::http_server::graphql::context::venue_service;
use crate::http_server::graphql::venue_queries::Venue;
use crate::http_server::graphql_error::GraphqlResult;

#[derive(Debug, Clone, InputObject)]
pub struct VenueInput {
    pub name: String,
    pub city: String,
    pub state: String,
    pub address: String,
    pub phone: String,
    pub genres: Vec<String>,
    pub image_link: Option<String>,
    pub facebook_link: Option<String>,
    pub website: Option<String>,
    #[graphql(default)]
    pub seeking_talent: bool,
    pub seeking_description: Option<String>,
}

impl From<VenueInput> for VenueForm {
    fn from(input: VenueInput) -> Self {
        Self {
            name: input.name.trim().to_string(),
            city: input.city.trim().to_string(),
            state: input.state,
            address: input.address.trim().to_string(),
            phone: input.phone.trim().to_string(),
            genres: input.genres,
            image_link: blank_to_none(input.image_link),
            facebook_link: blank_to_none(input.facebook_link),
            website: blank_to_none(input.website),
            seeking_talent: input.seeking_talent,
            seeking_description: blank_to_none(input.seeking_description),
        }
    }
}

#[derive(Default)]
pub struct VenueMutation;

#[Object]
impl VenueMutation {
    async fn create_venue(&self, ctx: &Context<'_>, input: VenueInput) -> GraphqlResult<Venue> {
        let service = venue_service(ctx)?;
        let model = service.create(input.into()).await?;

        Ok(model.into())
    }

    /// Deletes the venue and every show booked there.
    async fn delete_venue(&self, ctx: &Context<'_>, id: i64) -> GraphqlResult<bool> {
        let service = venue_service(ctx)?;
        service.delete(id).await?;
        Ok(true)
    }
}
