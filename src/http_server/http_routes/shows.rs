use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::{CookieJar, Form};

use crate::forms::{ShowForm, error_messages};
use crate::http_server::{error::Report, flash, state::AppState, views};
use crate::services::show::ShowService;

pub async fn shows(
    State(app_state): State<Arc<AppState>>,
    jar: CookieJar,
) -> Result<impl IntoResponse, Report> {
    let service = ShowService::new(app_state.db.clone());
    let shows = service.list().await?;

    Ok(flash::render(jar, |message| {
        views::shows::list_page(message, &shows)
    }))
}

pub async fn create_show_form() -> impl IntoResponse {
    views::shows::form_page(&ShowForm::default(), &[])
}

pub async fn create_show_submission(
    State(app_state): State<Arc<AppState>>,
    jar: CookieJar,
    Form(form): Form<ShowForm>,
) -> Response {
    let new_show = match form.parse() {
        Ok(new_show) => new_show,
        Err(errors) => {
            return (
                StatusCode::BAD_REQUEST,
                views::shows::form_page(&form, &error_messages(&errors)),
            )
                .into_response();
        }
    };

    let service = ShowService::new(app_state.db.clone());
    let jar = match service.create(new_show).await {
        Ok(_) => flash::set(jar, "Show was successfully listed!"),
        Err(err) => {
            log::error!("Failed to create show: {err:?}");
            flash::set(jar, "An error occurred. Show could not be listed.")
        }
    };

    (jar, Redirect::to("/")).into_response()
}
