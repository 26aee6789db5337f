pub mod app;
mod error;
mod flash;
mod graphql;
mod graphql_error;
mod http_routes;
mod state;
mod views;
