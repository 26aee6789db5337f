use axum::{http::StatusCode, response::IntoResponse};
use axum_extra::extract::CookieJar;

use crate::http_server::{flash, views};

pub async fn index(jar: CookieJar) -> impl IntoResponse {
    flash::render(jar, views::pages::home)
}

pub async fn not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, views::pages::not_found())
}
