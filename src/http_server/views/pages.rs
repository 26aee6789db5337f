use axum::response::Html;

use super::layout;

pub fn home(flash: Option<&str>) -> Html<String> {
    layout(
        "Home",
        flash,
        r#"<h1>Fyyur</h1>
<p>Find venues and artists, and book the next show.</p>
<p><a href="/venues/create">Post a venue</a> <a href="/artists/create">Post an artist</a> <a href="/shows/create">Post a show</a></p>"#,
    )
}

pub fn not_found() -> Html<String> {
    layout(
        "Not found",
        None,
        r#"<h1>404</h1><p>The page you are looking for does not exist.</p><p><a href="/">Back home</a></p>"#,
    )
}

pub fn server_error() -> Html<String> {
    layout(
        "Server error",
        None,
        r#"<h1>500</h1><p>Something went wrong on our side. Please try again.</p><p><a href="/">Back home</a></p>"#,
    )
}
