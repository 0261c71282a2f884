//! Session cookie formatting and parsing.
//!
//! Both issuance paths use the same attribute set: `HttpOnly; Secure;
//! SameSite=None` (the stricter of the two sets the service
//! historically emitted).

use axum::http::HeaderMap;
use axum::http::header::COOKIE;
use hart_auth::SESSION_COOKIE;

/// `Set-Cookie` value carrying a session token.
pub fn session_cookie(token: &str, max_age_secs: u64) -> String {
    format!(
        "{SESSION_COOKIE}={token}; Path=/; Max-Age={max_age_secs}; HttpOnly; Secure; SameSite=None"
    )
}

/// `Set-Cookie` value that discards the session cookie client-side.
pub fn clear_session_cookie() -> String {
    format!("{SESSION_COOKIE}=; Path=/; Max-Age=0; HttpOnly; Secure; SameSite=None")
}

/// Extract the raw session token from a request's `Cookie` header.
pub fn session_token(headers: &HeaderMap) -> Option<String> {
    let raw = headers.get(COOKIE)?.to_str().ok()?;
    raw.split(';').map(str::trim).find_map(|pair| {
        pair.strip_prefix(SESSION_COOKIE)
            .and_then(|rest| rest.strip_prefix('='))
            .map(str::to_string)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers_with_cookie(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(COOKIE, HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn extracts_session_token() {
        let headers = headers_with_cookie("hart=abc.def.ghi");
        assert_eq!(session_token(&headers).as_deref(), Some("abc.def.ghi"));
    }

    #[test]
    fn finds_token_among_other_cookies() {
        let headers = headers_with_cookie("theme=dark; hart=tok; lang=en");
        assert_eq!(session_token(&headers).as_deref(), Some("tok"));
    }

    #[test]
    fn ignores_prefix_named_cookies() {
        let headers = headers_with_cookie("hartbeat=nope");
        assert_eq!(session_token(&headers), None);
    }

    #[test]
    fn missing_header_yields_none() {
        assert_eq!(session_token(&HeaderMap::new()), None);
    }

    #[test]
    fn set_cookie_attributes() {
        let cookie = session_cookie("tok", 3600);
        assert!(cookie.starts_with("hart=tok;"));
        assert!(cookie.contains("Max-Age=3600"));
        assert!(cookie.contains("HttpOnly"));
        assert!(cookie.contains("Secure"));
        assert!(cookie.contains("SameSite=None"));

        let cleared = clear_session_cookie();
        assert!(cleared.contains("Max-Age=0"));
    }
}
