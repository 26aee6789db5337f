use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::{CookieJar, Form};
use chrono::Utc;
use validator::Validate;

use crate::forms::{ArtistForm, error_messages};
use crate::http_server::{
    error::Report, flash, http_routes::SearchForm, state::AppState, views,
};
use crate::services::artist::ArtistService;

pub async fn artists(
    State(app_state): State<Arc<AppState>>,
    jar: CookieJar,
) -> Result<impl IntoResponse, Report> {
    let service = ArtistService::new(app_state.db.clone());
    let artists = service.list().await?;

    Ok(flash::render(jar, |message| {
        views::artists::list_page(message, &artists)
    }))
}

pub async fn search_artists(
    State(app_state): State<Arc<AppState>>,
    Form(search): Form<SearchForm>,
) -> Result<impl IntoResponse, Report> {
    let service = ArtistService::new(app_state.db.clone());
    let results = service.search(&search.search_term, Utc::now()).await?;

    Ok(views::search_page("/artists", &search.search_term, &results))
}

pub async fn show_artist(
    State(app_state): State<Arc<AppState>>,
    Path(artist_id): Path<i64>,
    jar: CookieJar,
) -> Result<impl IntoResponse, Report> {
    let service = ArtistService::new(app_state.db.clone());
    let detail = service.get_detail(artist_id, Utc::now()).await?;

    Ok(flash::render(jar, |message| {
        views::artists::detail_page(message, &detail)
    }))
}

pub async fn create_artist_form() -> impl IntoResponse {
    views::artists::form_page(
        "List a new artist",
        "/artists/create",
        &ArtistForm::default(),
        &[],
    )
}

pub async fn create_artist_submission(
    State(app_state): State<Arc<AppState>>,
    jar: CookieJar,
    Form(form): Form<ArtistForm>,
) -> Response {
    if let Err(errors) = form.validate() {
        return (
            StatusCode::BAD_REQUEST,
            views::artists::form_page(
                "List a new artist",
                "/artists/create",
                &form,
                &error_messages(&errors),
            ),
        )
            .into_response();
    }

    let name = form.name.clone();
    let service = ArtistService::new(app_state.db.clone());
    let jar = match service.create(form).await {
        Ok(artist) => flash::set(
            jar,
            format!("Artist {} was successfully listed!", artist.name),
        ),
        Err(err) => {
            log::error!("Failed to create artist '{name}': {err:?}");
            flash::set(
                jar,
                format!("An error occurred. Artist {name} could not be listed."),
            )
        }
    };

    (jar, Redirect::to("/")).into_response()
}

pub async fn edit_artist_form(
    State(app_state): State<Arc<AppState>>,
    Path(artist_id): Path<i64>,
) -> Result<impl IntoResponse, Report> {
    let service = ArtistService::new(app_state.db.clone());
    let artist = service.get(artist_id).await?;

    Ok(views::artists::form_page(
        "Edit artist",
        &format!("/artists/{artist_id}/edit"),
        &ArtistForm::from(artist),
        &[],
    ))
}

pub async fn edit_artist_submission(
    State(app_state): State<Arc<AppState>>,
    Path(artist_id): Path<i64>,
    jar: CookieJar,
    Form(form): Form<ArtistForm>,
) -> Result<Response, Report> {
    if let Err(errors) = form.validate() {
        return Ok((
            StatusCode::BAD_REQUEST,
            views::artists::form_page(
                "Edit artist",
                &format!("/artists/{artist_id}/edit"),
                &form,
                &error_messages(&errors),
            ),
        )
            .into_response());
    }

    let name = form.name.clone();
    let service = ArtistService::new(app_state.db.clone());
    let jar = match service.update(artist_id, form).await {
        Ok(artist) => flash::set(
            jar,
            format!("Artist {} was successfully updated!", artist.name),
        ),
        Err(err) => {
            let report = Report::from(err);
            if report.is_not_found() {
                return Err(report);
            }
            log::error!("Failed to update artist {artist_id}: {report:?}");
            flash::set(
                jar,
                format!("An error occurred. Artist {name} could not be updated."),
            )
        }
    };

    Ok((jar, Redirect::to(&format!("/artists/{artist_id}"))).into_response())
}
