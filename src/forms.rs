//! Form payloads and the validation rules applied before anything is written.

use std::borrow::Cow;
use std::sync::LazyLock;

use chrono::{DateTime, NaiveDateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Deserializer};
use validator::{Validate, ValidateUrl, ValidationError, ValidationErrors};

use crate::entities;

pub const GENRE_CHOICES: [&str; 19] = [
    "Alternative",
    "Blues",
    "Classical",
    "Country",
    "Electronic",
    "Folk",
    "Funk",
    "Hip-Hop",
    "Heavy Metal",
    "Instrumental",
    "Jazz",
    "Musical Theatre",
    "Pop",
    "Punk",
    "R&B",
    "Reggae",
    "Rock n Roll",
    "Soul",
    "Other",
];

pub const STATE_CHOICES: [&str; 51] = [
    "AL", "AK", "AZ", "AR", "CA", "CO", "CT", "DE", "DC", "FL", "GA", "HI", "ID", "IL", "IN", "IA",
    "KS", "KY", "LA", "ME", "MT", "NE", "NV", "NH", "NJ", "NM", "NY", "NC", "ND", "OH", "OK", "OR",
    "MD", "MA", "MI", "MN", "MS", "MO", "PA", "RI", "SC", "SD", "TN", "TX", "UT", "VT", "VA", "WA",
    "WV", "WI", "WY",
];

static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{3}-[0-9]{3}-[0-9]{4}$").expect("valid phone regex"));

/// Formats accepted for a show's start time when no offset is given. Times are UTC.
const SHOW_TIME_FORMATS: [&str; 4] = [
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
];

fn validate_state(state: &str) -> Result<(), ValidationError> {
    if STATE_CHOICES.contains(&state) {
        Ok(())
    } else {
        Err(ValidationError::new("state").with_message(Cow::from("Provide a valid state")))
    }
}

fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        Err(ValidationError::new("not_blank"))
    } else {
        Ok(())
    }
}

/// Only absolute http(s) links are rendered into `href` and `src` attributes.
fn validate_web_link(link: &str) -> Result<(), ValidationError> {
    let lowered = link.trim().to_ascii_lowercase();
    let web_scheme = lowered.starts_with("http://") || lowered.starts_with("https://");
    if web_scheme && link.trim().validate_url() {
        Ok(())
    } else {
        Err(ValidationError::new("web_link"))
    }
}

fn validate_genres(genres: &[String]) -> Result<(), ValidationError> {
    if genres
        .iter()
        .all(|genre| GENRE_CHOICES.contains(&genre.as_str()))
    {
        Ok(())
    } else {
        Err(ValidationError::new("genres").with_message(Cow::from("Provide valid genres")))
    }
}

fn validate_id(id: &str) -> Result<(), ValidationError> {
    match id.trim().parse::<i64>() {
        Ok(id) if id > 0 => Ok(()),
        _ => Err(ValidationError::new("id").with_message(Cow::from("Provide a valid id"))),
    }
}

fn validate_show_time(show_time: &str) -> Result<(), ValidationError> {
    parse_show_time(show_time).map(|_| ()).ok_or_else(|| {
        ValidationError::new("show_time")
            .with_message(Cow::from("Start time must look like YYYY-MM-DD HH:MM:SS"))
    })
}

pub fn parse_show_time(input: &str) -> Option<DateTime<Utc>> {
    let input = input.trim();
    if let Ok(time) = DateTime::parse_from_rfc3339(input) {
        return Some(time.with_timezone(&Utc));
    }

    SHOW_TIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(input, format).ok())
        .map(|time| time.and_utc())
}

/// Blank inputs are treated as absent
pub fn blank_to_none(value: Option<String>) -> Option<String> {
    value
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(blank_to_none(Option::<String>::deserialize(deserializer)?))
}

fn trimmed<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(String::deserialize(deserializer)?.trim().to_string())
}

/// HTML checkboxes are only submitted when ticked, whatever their value
fn checkbox<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.is_some())
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Validate)]
pub struct VenueForm {
    #[serde(default, deserialize_with = "trimmed")]
    #[validate(custom(function = "validate_not_blank", message = "Name is required"))]
    pub name: String,
    #[serde(default, deserialize_with = "trimmed")]
    #[validate(custom(function = "validate_not_blank", message = "City is required"))]
    pub city: String,
    #[serde(default)]
    #[validate(custom(function = "validate_state"))]
    pub state: String,
    #[serde(default, deserialize_with = "trimmed")]
    #[validate(custom(function = "validate_not_blank", message = "Address is required"))]
    pub address: String,
    #[serde(default)]
    #[validate(regex(path = *PHONE_RE, message = "Phone number not valid!"))]
    pub phone: String,
    #[serde(default)]
    #[validate(
        length(min = 1, message = "Pick at least one genre"),
        custom(function = "validate_genres")
    )]
    pub genres: Vec<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    #[validate(custom(function = "validate_web_link", message = "Image link must be an http(s) URL"))]
    pub image_link: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    #[validate(custom(function = "validate_web_link", message = "Facebook link must be a valid URL"))]
    pub facebook_link: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    #[validate(custom(function = "validate_web_link", message = "Website must be an http(s) URL"))]
    pub website: Option<String>,
    #[serde(default, deserialize_with = "checkbox")]
    pub seeking_talent: bool,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub seeking_description: Option<String>,
}

impl From<entities::venue::Model> for VenueForm {
    fn from(venue: entities::venue::Model) -> Self {
        Self {
            name: venue.name,
            city: venue.city,
            state: venue.state,
            address: venue.address,
            phone: venue.phone,
            genres: venue.genres.0,
            image_link: venue.image_link,
            facebook_link: venue.facebook_link,
            website: venue.website,
            seeking_talent: venue.seeking_talent,
            seeking_description: venue.seeking_description,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Validate)]
pub struct ArtistForm {
    #[serde(default, deserialize_with = "trimmed")]
    #[validate(custom(function = "validate_not_blank", message = "Name is required"))]
    pub name: String,
    #[serde(default, deserialize_with = "trimmed")]
    #[validate(custom(function = "validate_not_blank", message = "City is required"))]
    pub city: String,
    #[serde(default)]
    #[validate(custom(function = "validate_state"))]
    pub state: String,
    #[serde(default)]
    #[validate(regex(path = *PHONE_RE, message = "Phone number not valid!"))]
    pub phone: String,
    #[serde(default)]
    #[validate(
        length(min = 1, message = "Pick at least one genre"),
        custom(function = "validate_genres")
    )]
    pub genres: Vec<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    #[validate(custom(function = "validate_web_link", message = "Image link must be an http(s) URL"))]
    pub image_link: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    #[validate(custom(function = "validate_web_link", message = "Facebook link must be a valid URL"))]
    pub facebook_link: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    #[validate(custom(function = "validate_web_link", message = "Website must be an http(s) URL"))]
    pub website: Option<String>,
    #[serde(default, deserialize_with = "checkbox")]
    pub seeking_venue: bool,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub seeking_description: Option<String>,
}

impl From<entities::artist::Model> for ArtistForm {
    fn from(artist: entities::artist::Model) -> Self {
        Self {
            name: artist.name,
            city: artist.city,
            state: artist.state,
            phone: artist.phone,
            genres: artist.genres.0,
            image_link: artist.image_link,
            facebook_link: artist.facebook_link,
            website: artist.website,
            seeking_venue: artist.seeking_venue,
            seeking_description: artist.seeking_description,
        }
    }
}

/// Raw show submission. Ids stay strings so a typo is reported as a
/// validation error rather than rejected by the extractor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Validate)]
pub struct ShowForm {
    #[serde(default)]
    #[validate(custom(function = "validate_id"))]
    pub artist_id: String,
    #[serde(default)]
    #[validate(custom(function = "validate_id"))]
    pub venue_id: String,
    #[serde(default)]
    #[validate(custom(function = "validate_show_time"))]
    pub show_time: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NewShow {
    pub artist_id: i64,
    pub venue_id: i64,
    pub show_time: DateTime<Utc>,
}

impl ShowForm {
    /// Validates the form and converts it into typed values.
    pub fn parse(&self) -> Result<NewShow, ValidationErrors> {
        self.validate()?;

        // validate() has already checked every field below
        let invalid = |field: &'static str| {
            let mut errors = ValidationErrors::new();
            errors.add(field, ValidationError::new(field));
            errors
        };

        Ok(NewShow {
            artist_id: self
                .artist_id
                .trim()
                .parse()
                .map_err(|_| invalid("artist_id"))?,
            venue_id: self
                .venue_id
                .trim()
                .parse()
                .map_err(|_| invalid("venue_id"))?,
            show_time: parse_show_time(&self.show_time).ok_or_else(|| invalid("show_time"))?,
        })
    }
}

/// Flattens validation errors into sorted, human readable lines.
pub fn error_messages(errors: &ValidationErrors) -> Vec<String> {
    let mut messages: Vec<String> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, field_errors)| {
            field_errors.iter().map(move |error| match &error.message {
                Some(message) => message.to_string(),
                None => format!("{field} is invalid"),
            })
        })
        .collect();
    messages.sort();
    messages.dedup();
    messages
}
