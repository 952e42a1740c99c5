//! Cookie mirror codec.
//!
//! The mirror cookie is the assignment a page script makes to
//! `document.cookie`:
//!
//! ```text
//! shopify_wishlist=%5B%7B%22id%22...; SameSite=Lax; Path=/; Expires=Fri, 15 Oct 2027 09:00:00 GMT
//! ```
//!
//! and is read back from a `document.cookie`-style header (`a=1; b=2`).
//! Building, parsing and header splitting go through the `cookie` crate; this
//! module only adds the wishlist's attributes and the value encoding.

use chrono::{DateTime, Duration, Utc};
use cookie::{Cookie, SameSite};
use time::OffsetDateTime;

use super::StorageError;

/// Lifetime of the mirror cookie.
pub const MIRROR_LIFETIME_DAYS: i64 = 365;

/// A cookie assignment owned by a jar.
pub type SetCookie = Cookie<'static>;

/// Build the wishlist mirror cookie: value percent-encoded, site-wide path,
/// `SameSite=Lax`, expiring [`MIRROR_LIFETIME_DAYS`] after `now`.
///
/// # Errors
///
/// Returns [`StorageError::CookieExpiry`] if the expiry is out of range.
pub fn build(name: &str, raw_value: &str, now: DateTime<Utc>) -> Result<SetCookie, StorageError> {
    let expires = now
        .checked_add_signed(Duration::days(MIRROR_LIFETIME_DAYS))
        .ok_or_else(|| {
            StorageError::CookieExpiry(format!("{now} + {MIRROR_LIFETIME_DAYS} days"))
        })?;
    let expires = OffsetDateTime::from_unix_timestamp(expires.timestamp())
        .map_err(|e| StorageError::CookieExpiry(e.to_string()))?;

    Ok(Cookie::build((
        name.to_string(),
        urlencoding::encode(raw_value).into_owned(),
    ))
    .path("/")
    .same_site(SameSite::Lax)
    .expires(expires)
    .build())
}

/// Whether the cookie is still live at `now`. Session cookies always are.
#[must_use]
pub fn is_live_at(cookie: &Cookie<'_>, now: DateTime<Utc>) -> bool {
    cookie
        .expires_datetime()
        .is_none_or(|expires| expires.unix_timestamp() > now.timestamp())
}

/// Parse one stored `Set-Cookie`-style line.
#[must_use]
pub fn parse_line(line: &str) -> Option<SetCookie> {
    Cookie::parse(line.to_string()).ok()
}

/// Find a cookie's raw value in a `document.cookie`-style header.
#[must_use]
pub fn find_in_header(header: &str, name: &str) -> Option<String> {
    Cookie::split_parse(header)
        .filter_map(Result::ok)
        .find(|cookie| cookie.name() == name)
        .map(|cookie| cookie.value().to_string())
}

/// Percent-decode a cookie value.
///
/// # Errors
///
/// Returns [`StorageError::CookieDecode`] if the decoded bytes are not UTF-8.
pub fn decode_value(raw: &str) -> Result<String, StorageError> {
    urlencoding::decode(raw)
        .map(std::borrow::Cow::into_owned)
        .map_err(|e| StorageError::CookieDecode(e.to_string()))
}
