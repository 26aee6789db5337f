use axum::{
    body::Body,
    http::{Response, StatusCode},
    response::IntoResponse,
};

use crate::http_server::views;
use crate::services::ServiceError;

// A generic error report
// Produced via `Err(some_err).wrap_err("Some context")`
// or `Err(color_eyre::eyre::Report::new(SomeError))`
pub struct Report(color_eyre::Report);

impl Report {
    pub fn is_not_found(&self) -> bool {
        matches!(
            self.0.downcast_ref::<ServiceError>(),
            Some(ServiceError::NotFound { .. })
        )
    }
}

impl std::fmt::Debug for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl<E> From<E> for Report
where
    E: Into<color_eyre::Report>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}

// Tell axum how to convert `Report` into a response.
impl IntoResponse for Report {
    fn into_response(self) -> Response<Body> {
        if self.is_not_found() {
            log::info!("{}", self.0);
            return (StatusCode::NOT_FOUND, views::pages::not_found()).into_response();
        }

        log::error!("{:?}", self.0);

        // Fallback
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            views::pages::server_error(),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use color_eyre::eyre::eyre;

    use super::*;

    #[test]
    fn test_not_found_maps_to_404() {
        let report = Report::from(ServiceError::venue_not_found(3));
        assert!(report.is_not_found());
        assert_eq!(report.into_response().status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_other_errors_map_to_500() {
        let report = Report::from(eyre!("database is locked"));
        assert!(!report.is_not_found());
        assert_eq!(
            report.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );

        let report = Report::from(ServiceError::Validation("Name is required".to_string()));
        assert_eq!(
            report.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
