//! Session cookie handling.

use cookie::time::Duration;
use cookie::{Cookie, SameSite};
use http::header::COOKIE;
use http::HeaderMap;
use storefront_core::StorefrontConfig;
use storefront_locale::SessionId;

/// Value of the first cookie named `name` across every `Cookie` header.
///
/// Malformed pairs are skipped.
pub(crate) fn read_cookie(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(Cookie::split_parse)
        .filter_map(Result::ok)
        .find(|cookie| cookie.name() == name)
        .map(|cookie| cookie.value().to_string())
}

/// `Set-Cookie` value that binds `session` to the client.
pub(crate) fn session_cookie(session: &SessionId, config: &StorefrontConfig) -> String {
    let max_age = i64::try_from(config.session_ttl_secs).unwrap_or(i64::MAX);

    Cookie::build((config.session_cookie.clone(), session.as_str().to_string()))
        .path("/")
        .max_age(Duration::seconds(max_age))
        .same_site(SameSite::Lax)
        .http_only(true)
        .build()
        .to_string()
}

/// The request's session, or a fresh one when the cookie is missing or forged.
///
/// The flag is `true` when the session was just generated and must be set.
pub(crate) fn resolve_session(headers: &HeaderMap, config: &StorefrontConfig) -> (SessionId, bool) {
    match read_cookie(headers, &config.session_cookie)
        .as_deref()
        .and_then(SessionId::from_cookie_value)
    {
        Some(session) => (session, false),
        None => (SessionId::generate(), true),
    }
}

#[cfg(test)]
mod tests {
    use http::HeaderValue;

    use super::*;

    fn headers(cookies: &[&str]) -> HeaderMap {
        let mut headers = HeaderMap::new();
        for cookie in cookies {
            headers.append(COOKIE, HeaderValue::from_str(cookie).unwrap());
        }
        headers
    }

    #[test]
    fn test_read_cookie() {
        let headers = headers(&["theme=dark; _storefront_session=sess_abc123"]);

        assert_eq!(
            read_cookie(&headers, "_storefront_session").as_deref(),
            Some("sess_abc123")
        );
        assert_eq!(read_cookie(&headers, "missing"), None);
    }

    #[test]
    fn test_read_cookie_across_headers() {
        let headers = headers(&["a=1", "b=2"]);
        assert_eq!(read_cookie(&headers, "b").as_deref(), Some("2"));
    }

    #[test]
    fn test_existing_session_kept() {
        let config = StorefrontConfig::default();
        let headers = headers(&["_storefront_session=sess_abc123"]);

        let (session, created) = resolve_session(&headers, &config);

        assert_eq!(session.as_str(), "sess_abc123");
        assert!(!created);
    }

    #[test]
    fn test_forged_session_replaced() {
        let config = StorefrontConfig::default();
        let headers = headers(&["_storefront_session=../etc/passwd"]);

        let (session, created) = resolve_session(&headers, &config);

        assert!(session.as_str().starts_with("sess_"));
        assert!(created);
    }

    #[test]
    fn test_session_cookie_attributes() {
        let config = StorefrontConfig::default();
        let value = session_cookie(&SessionId::new("sess_abc"), &config);

        assert!(value.starts_with("_storefront_session=sess_abc"));
        assert!(value.contains("Path=/"));
        assert!(value.contains("HttpOnly"));
        assert!(value.contains("SameSite=Lax"));
        assert!(value.contains("Max-Age=31536000"));
    }
}
