use std::fmt::Write;

use axum::response::Html;

use super::{escape, form, format_start_time, genre_list, image, layout, optional_link};
use crate::entities::artist;
use crate::forms::{ArtistForm, GENRE_CHOICES, STATE_CHOICES};
use crate::services::artist::{ArtistDetail, ArtistShow};

pub fn list_page(flash: Option<&str>, artists: &[artist::Model]) -> Html<String> {
    let mut content = String::from("<h1>Artists</h1><ul>");
    for artist in artists {
        let _ = write!(
            content,
            r#"<li><a href="/artists/{}">{}</a></li>"#,
            artist.id,
            escape(&artist.name)
        );
    }
    content.push_str("</ul>");

    layout("Artists", flash, &content)
}

fn show_list(heading: &str, shows: &[ArtistShow]) -> String {
    let mut html = format!("<h3>{} {heading}</h3><ul class=\"shows\">", shows.len());
    for show in shows {
        let image = image(show.venue_image_link.as_deref(), "");
        let _ = write!(
            html,
            r#"<li>{image}<a href="/venues/{id}">{name}</a> <time>{time}</time></li>"#,
            id = show.venue_id,
            name = escape(&show.venue_name),
            time = format_start_time(&show.start_time),
        );
    }
    html.push_str("</ul>");
    html
}

pub fn detail_page(flash: Option<&str>, detail: &ArtistDetail) -> Html<String> {
    let artist = &detail.artist;
    let seeking = if artist.seeking_venue {
        format!(
            r#"<p class="seeking">Currently seeking performance venues: {}</p>"#,
            escape(artist.seeking_description.as_deref().unwrap_or_default())
        )
    } else {
        r#"<p class="seeking">Not currently seeking performance venues</p>"#.to_string()
    };
    let image = image(artist.image_link.as_deref(), "Artist image");

    let content = format!(
        r#"<h1>{name}</h1>
<p class="subtitle">ID: {id}</p>
{genres}
<p>{city}, {state}</p>
<p>{phone}</p>
{website}{facebook}{seeking}{image}
{past}
{upcoming}
<p><a href="/artists/{id}/edit">Edit</a></p>"#,
        id = artist.id,
        name = escape(&artist.name),
        genres = genre_list(artist.genres.as_slice()),
        city = escape(&artist.city),
        state = escape(&artist.state),
        phone = escape(&artist.phone),
        website = optional_link("Website", artist.website.as_deref()),
        facebook = optional_link("Facebook", artist.facebook_link.as_deref()),
        past = show_list("Past Shows", &detail.past_shows),
        upcoming = show_list("Upcoming Shows", &detail.upcoming_shows),
    );

    layout(&artist.name, flash, &content)
}

pub fn form_page(title: &str, action: &str, artist: &ArtistForm, errors: &[String]) -> Html<String> {
    let content = format!(
        r#"<h1>{heading}</h1>
{errors}<form method="post" action="{action}">
{name}{city}{state}{phone}{genres}{image}{facebook}{website}{seeking}{description}<button type="submit">{heading}</button>
</form>"#,
        heading = escape(title),
        action = escape(action),
        errors = form::errors(errors),
        name = form::text_input("name", "Name", &artist.name),
        city = form::text_input("city", "City", &artist.city),
        state = form::select("state", "State", &STATE_CHOICES, &artist.state),
        phone = form::text_input("phone", "Phone", &artist.phone),
        genres = form::multi_select("genres", "Genres", &GENRE_CHOICES, &artist.genres),
        image = form::optional_input("image_link", "Image link", artist.image_link.as_deref()),
        facebook = form::optional_input(
            "facebook_link",
            "Facebook link",
            artist.facebook_link.as_deref()
        ),
        website = form::optional_input("website", "Website", artist.website.as_deref()),
        seeking = form::checkbox("seeking_venue", "Seeking venue", artist.seeking_venue),
        description = form::optional_input(
            "seeking_description",
            "Seeking description",
            artist.seeking_description.as_deref()
        ),
    );

    layout(title, None, &content)
}
