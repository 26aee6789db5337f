use std::fmt::Write;

use axum::response::Html;

use super::{escape, form, format_start_time, genre_list, image, layout, optional_link};
use crate::forms::{GENRE_CHOICES, STATE_CHOICES, VenueForm};
use crate::services::venue::{Area, VenueDetail, VenueShow};

pub fn areas_page(flash: Option<&str>, areas: &[Area]) -> Html<String> {
    let mut content = String::from("<h1>Venues</h1>");
    if areas.is_empty() {
        content.push_str("<p>No venues listed yet.</p>");
    }

    for area in areas {
        let _ = write!(
            content,
            "<h3>{}, {}</h3><ul>",
            escape(&area.city),
            escape(&area.state)
        );
        for venue in &area.venues {
            let _ = write!(
                content,
                r#"<li><a href="/venues/{id}">{name}</a> <span>{upcoming} upcoming show(s)</span></li>"#,
                id = venue.id,
                name = escape(&venue.name),
                upcoming = venue.num_upcoming_shows,
            );
        }
        content.push_str("</ul>");
    }

    layout("Venues", flash, &content)
}

fn show_list(heading: &str, shows: &[VenueShow]) -> String {
    let mut html = format!("<h3>{} {heading}</h3><ul class=\"shows\">", shows.len());
    for show in shows {
        let image = image(show.artist_image_link.as_deref(), "");
        let _ = write!(
            html,
            r#"<li>{image}<a href="/artists/{id}">{name}</a> <time>{time}</time></li>"#,
            id = show.artist_id,
            name = escape(&show.artist_name),
            time = format_start_time(&show.start_time),
        );
    }
    html.push_str("</ul>");
    html
}

pub fn detail_page(flash: Option<&str>, detail: &VenueDetail) -> Html<String> {
    let venue = &detail.venue;
    let seeking = if venue.seeking_talent {
        format!(
            r#"<p class="seeking">Currently seeking talent: {}</p>"#,
            escape(venue.seeking_description.as_deref().unwrap_or_default())
        )
    } else {
        r#"<p class="seeking">Not currently seeking talent</p>"#.to_string()
    };
    let image = image(venue.image_link.as_deref(), "Venue image");

    let content = format!(
        r#"<h1>{name}</h1>
<p class="subtitle">ID: {id}</p>
{genres}
<p>{address}<br>{city}, {state}</p>
<p>{phone}</p>
{website}{facebook}{seeking}{image}
{past}
{upcoming}
<p><a href="/venues/{id}/edit">Edit</a></p>
<form method="post" action="/venues/{id}/delete"><button type="submit">Delete</button></form>"#,
        id = venue.id,
        name = escape(&venue.name),
        genres = genre_list(venue.genres.as_slice()),
        address = escape(&venue.address),
        city = escape(&venue.city),
        state = escape(&venue.state),
        phone = escape(&venue.phone),
        website = optional_link("Website", venue.website.as_deref()),
        facebook = optional_link("Facebook", venue.facebook_link.as_deref()),
        past = show_list("Past Shows", &detail.past_shows),
        upcoming = show_list("Upcoming Shows", &detail.upcoming_shows),
    );

    layout(&venue.name, flash, &content)
}

/// The venue form, used both for listing a new venue and editing one.
pub fn form_page(title: &str, action: &str, venue: &VenueForm, errors: &[String]) -> Html<String> {
    let content = format!(
        r#"<h1>{heading}</h1>
{errors}<form method="post" action="{action}">
{name}{city}{state}{address}{phone}{genres}{image}{facebook}{website}{seeking}{description}<button type="submit">{heading}</button>
</form>"#,
        heading = escape(title),
        action = escape(action),
        errors = form::errors(errors),
        name = form::text_input("name", "Name", &venue.name),
        city = form::text_input("city", "City", &venue.city),
        state = form::select("state", "State", &STATE_CHOICES, &venue.state),
        address = form::text_input("address", "Address", &venue.address),
        phone = form::text_input("phone", "Phone", &venue.phone),
        genres = form::multi_select("genres", "Genres", &GENRE_CHOICES, &venue.genres),
        image = form::optional_input("image_link", "Image link", venue.image_link.as_deref()),
        facebook = form::optional_input(
            "facebook_link",
            "Facebook link",
            venue.facebook_link.as_deref()
        ),
        website = form::optional_input("website", "Website", venue.website.as_deref()),
        seeking = form::checkbox("seeking_talent", "Seeking talent", venue.seeking_talent),
        description = form::optional_input(
            "seeking_description",
            "Seeking description",
            venue.seeking_description.as_deref()
        ),
    );

    layout(title, None, &content)
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;
    use crate::entities::{genres::Genres, venue};
    use crate::services::Summary;

    fn hop() -> venue::Model {
        venue::Model {
            id: 1,
            name: "The Musical Hop".to_string(),
            genres: Genres(vec!["Jazz".to_string(), "Reggae".to_string()]),
            city: "San Francisco".to_string(),
            state: "CA".to_string(),
            address: "1015 Folsom Street".to_string(),
            phone: "123-123-1234".to_string(),
            image_link: None,
            facebook_link: Some("https://www.facebook.com/TheMusicalHop".to_string()),
            website: None,
            seeking_talent: true,
            seeking_description: Some("We are on the lookout for a local artist".to_string()),
        }
    }

    #[test]
    fn test_areas_page() {
        let areas = vec![Area {
            city: "San Francisco".to_string(),
            state: "CA".to_string(),
            venues: vec![Summary {
                id: 1,
                name: "The Musical Hop".to_string(),
                num_upcoming_shows: 2,
            }],
        }];

        let Html(page) = areas_page(None, &areas);
        assert!(page.contains("<h3>San Francisco, CA</h3>"));
        assert!(page.contains(r#"<a href="/venues/1">The Musical Hop</a> <span>2 upcoming show(s)</span>"#));
    }

    #[test]
    fn test_detail_page() {
        let detail = VenueDetail {
            venue: hop(),
            past_shows: vec![VenueShow {
                artist_id: 4,
                artist_name: "Guns N Petals".to_string(),
                artist_image_link: None,
                start_time: Utc.with_ymd_and_hms(2019, 5, 21, 21, 30, 0).unwrap(),
            }],
            upcoming_shows: vec![],
        };

        let Html(page) = detail_page(Some("Venue was updated"), &detail);
        assert!(page.contains("<h1>The Musical Hop</h1>"));
        assert!(page.contains("<li>Jazz</li><li>Reggae</li>"));
        assert!(page.contains("<h3>1 Past Shows</h3>"));
        assert!(page.contains("<h3>0 Upcoming Shows</h3>"));
        assert!(page.contains(r#"<a href="/artists/4">Guns N Petals</a>"#));
        assert!(page.contains("Currently seeking talent: We are on the lookout for a local artist"));
        assert!(page.contains("Venue was updated"));
    }

    #[test]
    fn test_form_page_prefills_values() {
        let form = VenueForm::from(hop());
        let errors = vec!["Phone number not valid!".to_string()];

        let Html(page) = form_page("Edit venue", "/venues/1/edit", &form, &errors);
        assert!(page.contains(r#"action="/venues/1/edit""#));
        assert!(page.contains(r#"value="The Musical Hop""#));
        assert!(page.contains(r#"<option value="CA" selected>CA</option>"#));
        assert!(page.contains(r#"<option value="Reggae" selected>"#));
        assert!(page.contains(r#"name="seeking_talent" value="y" checked"#));
        assert!(page.contains("<li>Phone number not valid!</li>"));
    }
}
