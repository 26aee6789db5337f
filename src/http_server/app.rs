use std::sync::Arc;

use async_graphql_axum::GraphQL;
use axum::{
    Router,
    routing::{get, post},
};
use color_eyre::eyre::{Context, eyre};
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::{
    database::Database,
    http_server::{
        graphql,
        http_routes::{artists, pages, shows, venues},
        state::AppState,
    },
};

pub fn router(app_state: Arc<AppState>) -> Router {
    let schema = graphql::create_schema(app_state.clone());

    #[cfg(debug_assertions)]
    let cors_layer = CorsLayer::permissive();

    // Same-origin only outside of development
    #[cfg(not(debug_assertions))]
    let cors_layer = CorsLayer::new();

    Router::new()
        .route("/", get(pages::index))
        .route("/venues", get(venues::venues))
        .route("/venues/search", post(venues::search_venues))
        .route(
            "/venues/create",
            get(venues::create_venue_form).post(venues::create_venue_submission),
        )
        .route(
            "/venues/{venue_id}",
            get(venues::show_venue).delete(venues::delete_venue),
        )
        .route(
            "/venues/{venue_id}/edit",
            get(venues::edit_venue_form).post(venues::edit_venue_submission),
        )
        .route("/venues/{venue_id}/delete", post(venues::delete_venue))
        .route("/artists", get(artists::artists))
        .route("/artists/search", post(artists::search_artists))
        .route(
            "/artists/create",
            get(artists::create_artist_form).post(artists::create_artist_submission),
        )
        .route("/artists/{artist_id}", get(artists::show_artist))
        .route(
            "/artists/{artist_id}/edit",
            get(artists::edit_artist_form).post(artists::edit_artist_submission),
        )
        .route("/shows", get(shows::shows))
        .route(
            "/shows/create",
            get(shows::create_show_form).post(shows::create_show_submission),
        )
        .route(
            "/graphql",
            get(graphql::graphiql).post_service(GraphQL::new(schema)),
        )
        .fallback(pages::not_found)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors_layer),
        )
        .with_state(app_state)
}

pub async fn start(port: u16, database: Database) -> color_eyre::Result<()> {
    let app_state = Arc::new(AppState {
        db: Arc::new(database),
    });
    let app = router(app_state);

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", port))
        .await
        .wrap_err_with(|| eyre!("Failed to bind to port {}", port))?;
    log::info!("Listening on http://localhost:{}", port);

    axum::serve(listener, app)
        .await
        .wrap_err("Failed to start HTTP server")?;

    Ok(())
}
