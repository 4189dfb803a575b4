//! Session cookie builders.

use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use time::Duration;

/// Cookie name carrying the opaque session id.
pub const SESSION_COOKIE: &str = "hostel_sid";

/// Attributes applied to the session cookie.
#[derive(Debug, Clone)]
pub struct CookieSettings {
    /// Set `Secure`; enable in production behind TLS.
    pub secure: bool,
    pub domain: Option<String>,
    pub max_age_secs: i64,
}

fn base(value: String, settings: &CookieSettings) -> Cookie<'static> {
    let mut cookie = Cookie::build((SESSION_COOKIE, value))
        .path("/")
        .http_only(true)
        .secure(settings.secure)
        .same_site(SameSite::Lax)
        .build();
    if let Some(domain) = settings.domain.clone() {
        cookie.set_domain(domain);
    }
    cookie
}

/// Session id presented by the client, if any.
pub fn session_id(jar: &CookieJar) -> Option<String> {
    jar.get(SESSION_COOKIE)
        .map(|c| c.value().to_owned())
        .filter(|v| !v.is_empty())
}

/// Set the session cookie on the jar.
///
/// ```
/// use axum_extra::extract::cookie::{CookieJar, SameSite};
/// use hostel_session::cookie::{set_session_cookie, CookieSettings, SESSION_COOKIE};
///
/// let settings = CookieSettings { secure: true, domain: None, max_age_secs: 86400 };
/// let jar = set_session_cookie(CookieJar::new(), "abc".to_string(), &settings);
/// let cookie = jar.get(SESSION_COOKIE).unwrap();
/// assert_eq!(cookie.value(), "abc");
/// assert_eq!(cookie.path(), Some("/"));
/// assert_eq!(cookie.max_age(), Some(time::Duration::seconds(86400)));
/// assert_eq!(cookie.same_site(), Some(SameSite::Lax));
/// assert!(cookie.http_only().unwrap_or(false));
/// assert!(cookie.secure().unwrap_or(false));
/// ```
pub fn set_session_cookie(jar: CookieJar, session_id: String, settings: &CookieSettings) -> CookieJar {
    let mut cookie = base(session_id, settings);
    cookie.set_max_age(Duration::seconds(settings.max_age_secs));
    jar.add(cookie)
}

/// Expire the session cookie.
///
/// ```
/// use axum_extra::extract::cookie::CookieJar;
/// use hostel_session::cookie::{
///     clear_session_cookie, set_session_cookie, CookieSettings, SESSION_COOKIE,
/// };
///
/// let settings = CookieSettings {
///     secure: false,
///     domain: Some("hostel.example".to_string()),
///     max_age_secs: 86400,
/// };
/// let jar = set_session_cookie(CookieJar::new(), "abc".to_string(), &settings);
/// let jar = clear_session_cookie(jar, &settings);
/// let cookie = jar.get(SESSION_COOKIE).unwrap();
/// assert_eq!(cookie.value(), "");
/// assert_eq!(cookie.domain(), Some("hostel.example"));
/// assert_eq!(cookie.max_age(), Some(time::Duration::ZERO));
/// ```
pub fn clear_session_cookie(jar: CookieJar, settings: &CookieSettings) -> CookieJar {
    let mut cookie = base(String::new(), settings);
    cookie.set_max_age(Duration::ZERO);
    jar.add(cookie)
}
