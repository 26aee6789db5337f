use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::{CookieJar, Form};
use chrono::Utc;
use validator::Validate;

use crate::forms::{VenueForm, error_messages};
use crate::http_server::{
    error::Report, flash, http_routes::SearchForm, state::AppState, views,
};
use crate::services::venue::VenueService;

pub async fn venues(
    State(app_state): State<Arc<AppState>>,
    jar: CookieJar,
) -> Result<impl IntoResponse, Report> {
    let service = VenueService::new(app_state.db.clone());
    let areas = service.list_areas(Utc::now()).await?;

    Ok(flash::render(jar, |message| {
        views::venues::areas_page(message, &areas)
    }))
}

pub async fn search_venues(
    State(app_state): State<Arc<AppState>>,
    Form(search): Form<SearchForm>,
) -> Result<impl IntoResponse, Report> {
    let service = VenueService::new(app_state.db.clone());
    let results = service.search(&search.search_term, Utc::now()).await?;

    Ok(views::search_page("/venues", &search.search_term, &results))
}

pub async fn show_venue(
    State(app_state): State<Arc<AppState>>,
    Path(venue_id): Path<i64>,
    jar: CookieJar,
) -> Result<impl IntoResponse, Report> {
    let service = VenueService::new(app_state.db.clone());
    let detail = service.get_detail(venue_id, Utc::now()).await?;

    Ok(flash::render(jar, |message| {
        views::venues::detail_page(message, &detail)
    }))
}

pub async fn create_venue_form() -> impl IntoResponse {
    views::venues::form_page("List a new venue", "/venues/create", &VenueForm::default(), &[])
}

pub async fn create_venue_submission(
    State(app_state): State<Arc<AppState>>,
    jar: CookieJar,
    Form(form): Form<VenueForm>,
) -> Response {
    if let Err(errors) = form.validate() {
        return (
            StatusCode::BAD_REQUEST,
            views::venues::form_page(
                "List a new venue",
                "/venues/create",
                &form,
                &error_messages(&errors),
            ),
        )
            .into_response();
    }

    let name = form.name.clone();
    let service = VenueService::new(app_state.db.clone());
    let jar = match service.create(form).await {
        Ok(venue) => flash::set(jar, format!("Venue {} was successfully listed!", venue.name)),
        Err(err) => {
            log::error!("Failed to create venue '{name}': {err:?}");
            flash::set(
                jar,
                format!("An error occurred. Venue {name} could not be listed."),
            )
        }
    };

    (jar, Redirect::to("/")).into_response()
}

pub async fn edit_venue_form(
    State(app_state): State<Arc<AppState>>,
    Path(venue_id): Path<i64>,
) -> Result<impl IntoResponse, Report> {
    let service = VenueService::new(app_state.db.clone());
    let venue = service.get(venue_id).await?;

    Ok(views::venues::form_page(
        "Edit venue",
        &format!("/venues/{venue_id}/edit"),
        &VenueForm::from(venue),
        &[],
    ))
}

pub async fn edit_venue_submission(
    State(app_state): State<Arc<AppState>>,
    Path(venue_id): Path<i64>,
    jar: CookieJar,
    Form(form): Form<VenueForm>,
) -> Result<Response, Report> {
    if let Err(errors) = form.validate() {
        return Ok((
            StatusCode::BAD_REQUEST,
            views::venues::form_page(
                "Edit venue",
                &format!("/venues/{venue_id}/edit"),
                &form,
                &error_messages(&errors),
            ),
        )
            .into_response());
    }

    let name = form.name.clone();
    let service = VenueService::new(app_state.db.clone());
    let jar = match service.update(venue_id, form).await {
        Ok(venue) => flash::set(jar, format!("Venue {} was successfully updated!", venue.name)),
        Err(err) => {
            let report = Report::from(err);
            if report.is_not_found() {
                return Err(report);
            }
            log::error!("Failed to update venue {venue_id}: {report:?}");
            flash::set(
                jar,
                format!("An error occurred. Venue {name} could not be updated."),
            )
        }
    };

    Ok((jar, Redirect::to(&format!("/venues/{venue_id}"))).into_response())
}

/// Serves both `DELETE /venues/{id}` and the HTML form fallback.
pub async fn delete_venue(
    State(app_state): State<Arc<AppState>>,
    Path(venue_id): Path<i64>,
    jar: CookieJar,
) -> Result<Response, Report> {
    let service = VenueService::new(app_state.db.clone());
    let jar = match service.delete(venue_id).await {
        Ok(()) => flash::set(jar, format!("Venue {venue_id} was successfully deleted.")),
        Err(err) => {
            let report = Report::from(err);
            if report.is_not_found() {
                return Err(report);
            }
            log::error!("Failed to delete venue {venue_id}: {report:?}");
            flash::set(
                jar,
                format!("An error occurred. Venue {venue_id} could not be deleted."),
            )
        }
    };

    Ok((jar, Redirect::to("/")).into_response())
}
