//! One-shot notifications carried across a redirect in a cookie.
//!
//! The submit handler writes the success toast into the `flash` cookie on
//! the same 303 response that performs the navigation; the next page reads
//! it once and clears it.

use axum::http::header::SET_COOKIE;
use axum::http::{HeaderMap, HeaderValue};
use url::form_urlencoded;

use crate::application::forms::{Notification, Severity};
use crate::utils::cookies::get_cookie;

pub const FLASH_COOKIE: &str = "flash";

/// Seconds a flash survives if never displayed.
const FLASH_MAX_AGE: u32 = 60;

/// Encodes a notification as a cookie-safe form-urlencoded string.
pub fn encode(notification: &Notification) -> String {
    form_urlencoded::Serializer::new(String::new())
        .append_pair("severity", notification.severity.as_str())
        .append_pair("title", &notification.title)
        .append_pair("description", &notification.description)
        .finish()
}

/// Decodes a value produced by [`encode`]. Unknown or incomplete values yield `None`.
pub fn decode(value: &str) -> Option<Notification> {
    let mut severity = None;
    let mut title = None;
    let mut description = None;

    for (key, val) in form_urlencoded::parse(value.as_bytes()) {
        match key.as_ref() {
            "severity" => severity = Severity::parse(&val),
            "title" => title = Some(val.into_owned()),
            "description" => description = Some(val.into_owned()),
            _ => {}
        }
    }

    Some(Notification {
        severity: severity?,
        title: title?,
        description: description?,
    })
}

/// `Set-Cookie` header value storing `notification`.
///
/// `secure` adds the `Secure` attribute, as for the session cookie.
pub fn set_cookie(notification: &Notification, secure: bool) -> Option<HeaderValue> {
    let cookie = format!(
        "{FLASH_COOKIE}={}; Path=/; HttpOnly; SameSite=Lax; Max-Age={FLASH_MAX_AGE}{}",
        encode(notification),
        secure_suffix(secure)
    );
    HeaderValue::from_str(&cookie).ok()
}

/// `Set-Cookie` header value deleting the flash cookie.
pub fn clear_cookie(secure: bool) -> HeaderValue {
    if secure {
        HeaderValue::from_static("flash=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0; Secure")
    } else {
        HeaderValue::from_static("flash=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0")
    }
}

fn secure_suffix(secure: bool) -> &'static str {
    if secure { "; Secure" } else { "" }
}

/// Reads the pending flash from the request.
///
/// Returns the notification (if any) and the response headers that clear the
/// cookie, so the toast is shown exactly once.
pub fn take(request_headers: &HeaderMap, secure: bool) -> (Option<Notification>, HeaderMap) {
    let mut response_headers = HeaderMap::new();

    let Some(value) = get_cookie(request_headers, FLASH_COOKIE) else {
        return (None, response_headers);
    };

    response_headers.append(SET_COOKIE, clear_cookie(secure));
    (decode(&value), response_headers)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::header::COOKIE;

    #[test]
    fn test_round_trip_with_special_characters() {
        let notification = Notification::success("Saved; 100% done, \"nice\" & fast");

        let decoded = decode(&encode(&notification)).unwrap();
        assert_eq!(decoded, notification);
    }

    #[test]
    fn test_encoded_value_is_cookie_safe() {
        let encoded = encode(&Notification::error("a; b, c \"d\""));

        assert!(!encoded.contains(';'));
        assert!(!encoded.contains(','));
        assert!(!encoded.contains(' '));
        assert!(!encoded.contains('"'));
        assert!(set_cookie(&Notification::error("x"), false).is_some());
    }

    #[test]
    fn test_decode_rejects_incomplete_values() {
        assert!(decode("").is_none());
        assert!(decode("severity=success&title=Hi").is_none());
        assert!(decode("severity=warning&title=Hi&description=x").is_none());
    }

    #[test]
    fn test_take_reads_and_clears() {
        let notification = Notification::success("Created");
        let mut headers = HeaderMap::new();
        headers.insert(
            COOKIE,
            HeaderValue::from_str(&format!("flash={}", encode(&notification))).unwrap(),
        );

        let (taken, response_headers) = take(&headers, false);

        assert_eq!(taken, Some(notification));
        let cleared = response_headers.get(SET_COOKIE).unwrap().to_str().unwrap();
        assert!(cleared.starts_with("flash=;"));
        assert!(cleared.contains("Max-Age=0"));
        assert!(!cleared.contains("Secure"));
    }

    #[test]
    fn test_secure_flag_on_set_and_clear() {
        let notification = Notification::success("Created");

        let set = set_cookie(&notification, true).unwrap();
        assert!(set.to_str().unwrap().ends_with("; Secure"));

        let plain = set_cookie(&notification, false).unwrap();
        assert!(!plain.to_str().unwrap().contains("Secure"));

        assert!(clear_cookie(true).to_str().unwrap().ends_with("; Secure"));
        assert!(!clear_cookie(false).to_str().unwrap().contains("Secure"));

        let mut headers = HeaderMap::new();
        headers.insert(
            COOKIE,
            HeaderValue::from_str(&format!("flash={}", encode(&notification))).unwrap(),
        );
        let (_, response_headers) = take(&headers, true);
        let cleared = response_headers.get(SET_COOKIE).unwrap().to_str().unwrap();
        assert!(cleared.ends_with("; Secure"));
    }

    #[test]
    fn test_take_without_cookie() {
        let (taken, response_headers) = take(&HeaderMap::new(), false);

        assert!(taken.is_none());
        assert!(response_headers.is_empty());
    }
}
