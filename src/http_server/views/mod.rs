//! Server-rendered HTML. Every value coming from the database or the
//! request goes through [`escape`] before it lands in a page.

use std::fmt::Write;

use axum::response::Html;
use chrono::{DateTime, Utc};

use crate::services::SearchResults;

pub mod artists;
pub mod form;
pub mod pages;
pub mod shows;
pub mod venues;

pub fn escape(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

pub fn format_start_time(time: &DateTime<Utc>) -> String {
    time.format("%A %B %-d, %Y at %-I:%M%p").to_string()
}

pub fn layout(title: &str, flash: Option<&str>, content: &str) -> Html<String> {
    let flash = flash
        .map(|message| format!(r#"<div class="alert">{}</div>"#, escape(message)))
        .unwrap_or_default();

    Html(format!(
        r#"<!doctype html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{title} | Fyyur</title>
</head>
<body>
<nav>
<a href="/">Fyyur</a>
<a href="/venues">Venues</a>
<a href="/artists">Artists</a>
<a href="/shows">Shows</a>
<form method="post" action="/venues/search"><input type="search" name="search_term" placeholder="Find a venue"></form>
<form method="post" action="/artists/search"><input type="search" name="search_term" placeholder="Find an artist"></form>
</nav>
{flash}
<main>
{content}
</main>
</body>
</html>
"#,
        title = escape(title),
    ))
}

pub(crate) fn genre_list(genres: &[String]) -> String {
    let mut html = String::from(r#"<ul class="genres">"#);
    for genre in genres {
        let _ = write!(html, "<li>{}</li>", escape(genre));
    }
    html.push_str("</ul>");
    html
}

/// Keeps only http(s) links, so stored values never become script URLs.
fn web_link(link: Option<&str>) -> Option<&str> {
    link.map(str::trim).filter(|link| {
        let lowered = link.to_ascii_lowercase();
        lowered.starts_with("http://") || lowered.starts_with("https://")
    })
}

pub(crate) fn image(link: Option<&str>, alt: &str) -> String {
    match web_link(link) {
        Some(link) => format!(r#"<img src="{}" alt="{}">"#, escape(link), escape(alt)),
        None => String::new(),
    }
}

pub(crate) fn optional_link(label: &str, link: Option<&str>) -> String {
    match web_link(link) {
        Some(link) => format!(
            r#"<p><a href="{href}">{label}</a></p>"#,
            href = escape(link),
            label = escape(label)
        ),
        None => String::new(),
    }
}

/// Result page shared by the venue and artist searches. `base_path` is
/// where the matched records live, e.g. `/venues`.
pub fn search_page(
    base_path: &str,
    search_term: &str,
    results: &SearchResults,
) -> Html<String> {
    let mut content = format!(
        "<h3>Number of search results for \"{}\": {}</h3><ul>",
        escape(search_term),
        results.count
    );
    for item in &results.data {
        let _ = write!(
            content,
            r#"<li><a href="{base_path}/{id}">{name}</a> <span>{upcoming} upcoming show(s)</span></li>"#,
            id = item.id,
            name = escape(&item.name),
            upcoming = item.num_upcoming_shows,
        );
    }
    content.push_str("</ul>");

    layout("Search", None, &content)
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;
    use crate::services::Summary;

    #[test]
    fn test_escape() {
        assert_eq!(
            escape(r#"<script>alert("Rock & 'Roll'")</script>"#),
            "&lt;script&gt;alert(&quot;Rock &amp; &#x27;Roll&#x27;&quot;)&lt;/script&gt;"
        );
        assert_eq!(escape("The Musical Hop"), "The Musical Hop");
    }

    #[test]
    fn test_format_start_time() {
        let time = Utc.with_ymd_and_hms(2019, 5, 21, 21, 30, 0).unwrap();
        assert_eq!(format_start_time(&time), "Tuesday May 21, 2019 at 9:30PM");
    }

    #[test]
    fn test_layout_shows_escaped_flash() {
        let Html(page) = layout("Home", Some("Venue <b> was listed"), "<p>hi</p>");
        assert!(page.contains(r#"<div class="alert">Venue &lt;b&gt; was listed</div>"#));
        assert!(page.contains("<p>hi</p>"));
        assert!(page.contains("<title>Home | Fyyur</title>"));

        let Html(page) = layout("Home", None, "");
        assert!(!page.contains("alert"));
    }

    #[test]
    fn test_links_only_render_http_urls() {
        assert_eq!(
            optional_link("Website", Some("https://www.themusicalhop.com")),
            r#"<p><a href="https://www.themusicalhop.com">Website</a></p>"#
        );
        assert_eq!(optional_link("Facebook", Some("javascript:alert(1)")), "");
        assert_eq!(optional_link("Facebook", Some(" JavaScript:alert(1)")), "");
        assert_eq!(optional_link("Website", None), "");

        assert_eq!(
            image(Some("HTTP://example.com/a.jpg"), "Venue image"),
            r#"<img src="HTTP://example.com/a.jpg" alt="Venue image">"#
        );
        assert_eq!(image(Some("data:text/html,<script>"), ""), "");
    }

    #[test]
    fn test_search_page_lists_results() {
        let results = SearchResults {
            count: 1,
            data: vec![Summary {
                id: 2,
                name: "The Dueling Pianos Bar".to_string(),
                num_upcoming_shows: 0,
            }],
        };

        let Html(page) = search_page("/venues", "Bar", &results);
        assert!(page.contains("Number of search results for \"Bar\": 1"));
        assert!(page.contains(r#"<a href="/venues/2">The Dueling Pianos Bar</a>"#));
    }
}
