//! One-shot messages carried across a redirect in a cookie.

use axum::response::Html;
use axum_extra::extract::cookie::{Cookie, CookieJar};

const FLASH_COOKIE: &str = "flash";

/// Stores `message` for the next rendered page.
pub fn set(jar: CookieJar, message: impl AsRef<str>) -> CookieJar {
    let cookie = Cookie::build((
        FLASH_COOKIE,
        urlencoding::encode(message.as_ref()).into_owned(),
    ))
    .path("/")
    .http_only(true);

    jar.add(cookie)
}

/// Reads the pending message, if any, and clears it.
pub fn take(jar: CookieJar) -> (CookieJar, Option<String>) {
    let Some(value) = jar.get(FLASH_COOKIE).map(|cookie| cookie.value().to_string()) else {
        return (jar, None);
    };

    let message = match urlencoding::decode(&value) {
        Ok(message) => message.into_owned(),
        Err(_) => value,
    };

    (jar.remove(Cookie::build(FLASH_COOKIE).path("/")), Some(message))
}

/// Renders a page with the pending message shown, then clears it.
pub fn render(
    jar: CookieJar,
    page: impl FnOnce(Option<&str>) -> Html<String>,
) -> (CookieJar, Html<String>) {
    let (jar, message) = take(jar);
    let html = page(message.as_deref());
    (jar, html)
}
