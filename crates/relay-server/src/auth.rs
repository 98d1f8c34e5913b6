//! Session gate: every matched request passes through here before its route
//! handler. Authorization is the presence of the session cookie; the login
//! route is the only thing that ever sets it.

use axum::{
    extract::Request,
    http::{header, HeaderMap},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};

pub const SESSION_COOKIE: &str = "relay_auth";
pub const SESSION_COOKIE_VALUE: &str = "1";
/// Seven days.
pub const SESSION_TTL_SECS: u64 = 60 * 60 * 24 * 7;

/// Path prefixes that skip the gate: the login flow, the platform-routed
/// backend path, and static assets.
const GATE_ALLOWLIST: &[&str] = &[
    "/login",
    "/api/login",
    "/api/backend",
    "/static/",
    "/favicon.ico",
];

pub fn is_allowlisted(path: &str) -> bool {
    GATE_ALLOWLIST.iter().any(|prefix| path.starts_with(prefix))
}

/// True iff the request carries the session cookie with the expected value.
pub fn has_session(headers: &HeaderMap) -> bool {
    let Some(cookies) = headers.get(header::COOKIE).and_then(|v| v.to_str().ok()) else {
        return false;
    };

    cookies.split(';').any(|cookie| {
        let mut parts = cookie.trim().splitn(2, '=');
        parts.next() == Some(SESSION_COOKIE) && parts.next() == Some(SESSION_COOKIE_VALUE)
    })
}

/// Build the `Set-Cookie` value issued on successful login.
pub fn session_cookie(secure: bool) -> String {
    let mut cookie = format!(
        "{SESSION_COOKIE}={SESSION_COOKIE_VALUE}; HttpOnly; SameSite=Lax; Max-Age={SESSION_TTL_SECS}; Path=/"
    );
    if secure {
        cookie.push_str("; Secure");
    }
    cookie
}

pub async fn session_gate(req: Request, next: Next) -> Response {
    let path = req.uri().path();
    if is_allowlisted(path) || has_session(req.headers()) {
        return next.run(req).await;
    }

    let return_to = match req.uri().query() {
        Some(query) => format!("{path}?{query}"),
        None => path.to_string(),
    };
    tracing::info!("unauthenticated request to {}, redirecting to login", path);

    Redirect::temporary(&format!("/login?from={}", urlencoding::encode(&return_to)))
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers_with_cookie(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::COOKIE, HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn test_allowlist_prefixes() {
        assert!(is_allowlisted("/login"));
        assert!(is_allowlisted("/login?from=%2F"));
        assert!(is_allowlisted("/api/login"));
        assert!(is_allowlisted("/api/backend/chat"));
        assert!(is_allowlisted("/static/app.css"));
        assert!(is_allowlisted("/favicon.ico"));

        assert!(!is_allowlisted("/"));
        assert!(!is_allowlisted("/api/chat"));
        assert!(!is_allowlisted("/api"));
    }

    #[test]
    fn test_has_session() {
        assert!(has_session(&headers_with_cookie("relay_auth=1")));
        assert!(has_session(&headers_with_cookie(
            "theme=dark; relay_auth=1; lang=en"
        )));

        assert!(!has_session(&HeaderMap::new()));
        assert!(!has_session(&headers_with_cookie("relay_auth=0")));
        assert!(!has_session(&headers_with_cookie("relay_auth=")));
        assert!(!has_session(&headers_with_cookie("other=1")));
        // Cookie names are exact, not prefixes
        assert!(!has_session(&headers_with_cookie("relay_auth_old=1")));
    }

    #[test]
    fn test_session_cookie_attributes() {
        let cookie = session_cookie(false);
        assert_eq!(
            cookie,
            "relay_auth=1; HttpOnly; SameSite=Lax; Max-Age=604800; Path=/"
        );

        let secure = session_cookie(true);
        assert!(secure.ends_with("; Secure"));
    }
}
