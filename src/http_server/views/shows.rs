use std::fmt::Write;

use axum::response::Html;

use super::{escape, form, format_start_time, image, layout};
use crate::forms::ShowForm;
use crate::services::show::ShowListing;

pub fn list_page(flash: Option<&str>, shows: &[ShowListing]) -> Html<String> {
    let mut content = String::from("<h1>Shows</h1><ul class=\"shows\">");
    if shows.is_empty() {
        content.push_str("<li>No shows listed yet.</li>");
    }

    for show in shows {
        let image = image(show.artist_image_link.as_deref(), "");
        let _ = write!(
            content,
            r#"<li>{image}<time>{time}</time> <a href="/artists/{artist_id}">{artist_name}</a> playing at <a href="/venues/{venue_id}">{venue_name}</a></li>"#,
            time = format_start_time(&show.start_time),
            artist_id = show.artist_id,
            artist_name = escape(&show.artist_name),
            venue_id = show.venue_id,
            venue_name = escape(&show.venue_name),
        );
    }
    content.push_str("</ul>");

    layout("Shows", flash, &content)
}

pub fn form_page(show: &ShowForm, errors: &[String]) -> Html<String> {
    let content = format!(
        r#"<h1>List a new show</h1>
{errors}<form method="post" action="/shows/create">
{artist}{venue}{time}<button type="submit">Create show</button>
</form>"#,
        errors = form::errors(errors),
        artist = form::text_input("artist_id", "Artist ID", &show.artist_id),
        venue = form::text_input("venue_id", "Venue ID", &show.venue_id),
        time = form::text_input("show_time", "Start time (YYYY-MM-DD HH:MM:SS)", &show.show_time),
    );

    layout("New show", None, &content)
}
