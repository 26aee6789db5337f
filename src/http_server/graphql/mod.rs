use std::sync::Arc;

use async_graphql::http::GraphiQLSource;
use async_graphql::{EmptySubscription, MergedObject, Schema, SimpleObject};
use axum::response::{Html, IntoResponse};

use crate::http_server::state::AppState;
use crate::services::{SearchResults, Summary};

mod artist_mutations;
mod artist_queries;
mod context;
mod show_mutations;
mod show_queries;
mod venue_mutations;
mod venue_queries;

use artist_mutations::ArtistMutation;
use artist_queries::ArtistQuery;
use show_mutations::ShowMutation;
use show_queries::ShowQuery;
use venue_mutations::VenueMutation;
use venue_queries::VenueQuery;

/// A venue or artist with the number of shows it still has ahead of it.
#[derive(Debug, Clone, SimpleObject)]
pub struct RecordSummary {
    pub id: i64,
    pub name: String,
    pub num_upcoming_shows: i64,
}

impl From<Summary> for RecordSummary {
    fn from(summary: Summary) -> Self {
        Self {
            id: summary.id,
            name: summary.name,
            num_upcoming_shows: summary.num_upcoming_shows as i64,
        }
    }
}

#[derive(Debug, Clone, SimpleObject)]
pub struct SearchResponse {
    pub count: i64,
    pub data: Vec<RecordSummary>,
}

impl From<SearchResults> for SearchResponse {
    fn from(results: SearchResults) -> Self {
        Self {
            count: results.count as i64,
            data: results.data.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Default, MergedObject)]
pub struct Query(VenueQuery, ArtistQuery, ShowQuery);

#[derive(Default, MergedObject)]
pub struct Mutation(VenueMutation, ArtistMutation, ShowMutation);

pub type FyyurSchema = Schema<Query, Mutation, EmptySubscription>;

pub async fn graphiql() -> impl IntoResponse {
    Html(GraphiQLSource::build().endpoint("/graphql").finish())
}

pub fn create_schema(app_state: Arc<AppState>) -> FyyurSchema {
    Schema::build(Query::default(), Mutation::default(), EmptySubscription)
        .data(app_state)
        .finish()
}

#[cfg(test)]
mod tests {
    use async_graphql::Value;
    use serde_json::json;

    use super::*;
    use crate::test_utils::test_db;

    async fn schema() -> FyyurSchema {
        create_schema(Arc::new(AppState { db: test_db().await }))
    }

    async fn execute(schema: &FyyurSchema, query: &str) -> serde_json::Value {
        let response = schema.execute(query).await;
        assert!(response.errors.is_empty(), "{:?}", response.errors);
        response.data.into_json().unwrap()
    }

    const CREATE_VENUE: &str = r#"mutation {
        createVenue(input: {
            name: "The Musical Hop",
            city: "San Francisco",
            state: "CA",
            address: "1015 Folsom Street",
            phone: "123-123-1234",
            genres: ["Jazz", "Reggae"],
            facebookLink: "",
            seekingTalent: true
        }) { id name facebookLink seekingTalent }
    }"#;

    #[tokio::test]
    async fn test_create_and_search_venue() {
        let schema = schema().await;

        let data = execute(&schema, CREATE_VENUE).await;
        assert_eq!(
            data,
            json!({
                "createVenue": {
                    "id": 1,
                    "name": "The Musical Hop",
                    "facebookLink": null,
                    "seekingTalent": true
                }
            })
        );

        let data = execute(
            &schema,
            r#"{ searchVenues(term: "hop") { count data { id name numUpcomingShows } } }"#,
        )
        .await;
        assert_eq!(
            data,
            json!({
                "searchVenues": {
                    "count": 1,
                    "data": [{ "id": 1, "name": "The Musical Hop", "numUpcomingShows": 0 }]
                }
            })
        );

        let data = execute(&schema, "{ venueAreas { city state venues { name } } }").await;
        assert_eq!(
            data,
            json!({
                "venueAreas": [{
                    "city": "San Francisco",
                    "state": "CA",
                    "venues": [{ "name": "The Musical Hop" }]
                }]
            })
        );
    }

    #[tokio::test]
    async fn test_create_show_and_view_detail() {
        let schema = schema().await;
        execute(&schema, CREATE_VENUE).await;
        execute(
            &schema,
            r#"mutation {
                createArtist(input: {
                    name: "Guns N Petals",
                    city: "San Francisco",
                    state: "CA",
                    phone: "326-123-5000",
                    genres: ["Rock n Roll"]
                }) { id }
            }"#,
        )
        .await;

        let data = execute(
            &schema,
            r#"mutation {
                createShow(input: { artistId: 1, venueId: 1, startTime: "2035-04-01T20:00:00Z" }) {
                    id artistId venueId
                }
            }"#,
        )
        .await;
        assert_eq!(
            data,
            json!({ "createShow": { "id": 1, "artistId": 1, "venueId": 1 } })
        );

        let data = execute(
            &schema,
            r#"{
                artist(id: 1) {
                    artist { name }
                    pastShowsCount
                    upcomingShowsCount
                    upcomingShows { venueName }
                }
                shows { artistName venueName }
            }"#,
        )
        .await;
        assert_eq!(
            data,
            json!({
                "artist": {
                    "artist": { "name": "Guns N Petals" },
                    "pastShowsCount": 0,
                    "upcomingShowsCount": 1,
                    "upcomingShows": [{ "venueName": "The Musical Hop" }]
                },
                "shows": [{ "artistName": "Guns N Petals", "venueName": "The Musical Hop" }]
            })
        );
    }

    #[tokio::test]
    async fn test_missing_records() {
        let schema = schema().await;

        let data = execute(&schema, "{ venue(id: 9) { venue { name } } artist(id: 9) { pastShowsCount } }").await;
        assert_eq!(data, json!({ "venue": null, "artist": null }));

        let response = schema
            .execute(
                r#"mutation { createShow(input: { artistId: 1, venueId: 1, startTime: "2035-04-01T20:00:00Z" }) { id } }"#,
            )
            .await;
        assert_eq!(response.errors.len(), 1);
        assert_eq!(response.errors[0].message, "Venue 1 not found");
        let code = response.errors[0]
            .extensions
            .as_ref()
            .and_then(|extensions| extensions.get("code").cloned());
        assert_eq!(code, Some(Value::from("NOT_FOUND")));
    }

    #[tokio::test]
    async fn test_invalid_input_is_rejected() {
        let schema = schema().await;

        let response = schema
            .execute(
                r#"mutation {
                    createArtist(input: {
                        name: "Matt Quevedo",
                        city: "New York",
                        state: "NY",
                        phone: "300-400-5000",
                        genres: ["Polka"]
                    }) { id }
                }"#,
            )
            .await;
        assert_eq!(response.errors.len(), 1);
        assert_eq!(
            response.errors[0].message,
            "Invalid input: Provide valid genres"
        );

        let data = execute(&schema, "{ artists { name } }").await;
        assert_eq!(data, json!({ "artists": [] }));
    }

    #[tokio::test]
    async fn test_delete_venue() {
        let schema = schema().await;
        execute(&schema, CREATE_VENUE).await;

        let data = execute(&schema, "mutation { deleteVenue(id: 1) }").await;
        assert_eq!(data, json!({ "deleteVenue": true }));

        let data = execute(&schema, "{ venueAreas { city } }").await;
        assert_eq!(data, json!({ "venueAreas": [] }));
    }
}
