//! Cookie header parsing.

use axum::http::HeaderMap;
use axum::http::header::COOKIE;

/// Returns the value of cookie `name` from the request headers.
///
/// Handles several `Cookie` headers and several cookies per header
/// (`a=1; b=2`). The first match wins.
pub fn get_cookie(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|header| header.to_str().ok())
        .flat_map(|cookie_str| cookie_str.split(';'))
        .find_map(|cookie| {
            let (key, value) = cookie.trim().split_once('=')?;
            (key == name).then(|| value.to_string())
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn test_single_cookie() {
        let mut headers = HeaderMap::new();
        headers.insert(COOKIE, HeaderValue::from_static("session=abc"));

        assert_eq!(get_cookie(&headers, "session").as_deref(), Some("abc"));
        assert!(get_cookie(&headers, "flash").is_none());
    }

    #[test]
    fn test_multiple_cookies() {
        let mut headers = HeaderMap::new();
        headers.insert(
            COOKIE,
            HeaderValue::from_static("theme=dark; session=a.b=c;flash=x"),
        );

        assert_eq!(get_cookie(&headers, "session").as_deref(), Some("a.b=c"));
        assert_eq!(get_cookie(&headers, "flash").as_deref(), Some("x"));
        assert_eq!(get_cookie(&headers, "theme").as_deref(), Some("dark"));
    }

    #[test]
    fn test_multiple_headers() {
        let mut headers = HeaderMap::new();
        headers.append(COOKIE, HeaderValue::from_static("theme=dark"));
        headers.append(COOKIE, HeaderValue::from_static("session=xyz"));

        assert_eq!(get_cookie(&headers, "session").as_deref(), Some("xyz"));
    }

    #[test]
    fn test_no_cookie_header() {
        assert!(get_cookie(&HeaderMap::new(), "session").is_none());
    }
}
