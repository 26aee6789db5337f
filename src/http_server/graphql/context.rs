use std::sync::Arc;

use async_graphql::Context;

use crate::http_server::{graphql_error::GraphqlError, state::AppState};
use crate::services::{artist::ArtistService, show::ShowService, venue::VenueService};

fn get_app_state<'a>(ctx: &Context<'a>) -> Result<&'a Arc<AppState>, GraphqlError> {
    ctx.data::<Arc<AppState>>()
        .map_err(|_| GraphqlError::FailedToGetAppState)
}

pub fn venue_service(ctx: &Context<'_>) -> Result<VenueService, GraphqlError> {
    Ok(VenueService::new(get_app_state(ctx)?.db.clone()))
}

pub fn artist_service(ctx: &Context<'_>) -> Result<ArtistService, GraphqlError> {
    Ok(ArtistService::new(get_app_state(ctx)?.db.clone()))
}

pub fn show_service(ctx: &Context<'_>) -> Result<ShowService, GraphqlError> {
    Ok(ShowService::new(get_app_state(ctx)?.db.clone()))
}
