use std::time::Duration;

use axum::http::{HeaderValue, Method};
use tower_http::cors::{AllowHeaders, AllowOrigin, CorsLayer};
use tracing::warn;

pub const WILDCARD_ORIGIN: &str = "*";

/// Origins the desktop/browser frontend is served from during development.
/// The trailing wildcard keeps every other origin readable as well.
pub const DEFAULT_ORIGINS: [&str; 7] = [
    "http://localhost",
    "http://localhost:5173",
    "http://localhost:4173",
    "http://127.0.0.1",
    "http://127.0.0.1:5173",
    "http://127.0.0.1:4173",
    WILDCARD_ORIGIN,
];

/// Methods advertised on preflight responses
pub const ALLOWED_METHODS: [Method; 7] = [
    Method::GET,
    Method::POST,
    Method::PUT,
    Method::PATCH,
    Method::DELETE,
    Method::HEAD,
    Method::OPTIONS,
];

/// How long browsers may cache a preflight answer
pub const PREFLIGHT_MAX_AGE: Duration = Duration::from_secs(600);

/// Cross-origin policy applied to every route
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorsPolicy {
    pub origins: Vec<String>,
    pub allow_credentials: bool,
}

impl CorsPolicy {
    /// Build a policy from a comma separated origin list, e.g. the `CORS_ORIGINS` variable
    pub fn from_origin_list(list: &str, allow_credentials: bool) -> Self {
        let origins = list
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(str::to_string)
            .collect();
        Self { origins, allow_credentials }
    }

    pub fn allows_any_origin(&self) -> bool {
        self.origins.iter().any(|origin| origin == WILDCARD_ORIGIN)
    }

    /// Short description of the origin mode, for startup logs
    pub fn describe(&self) -> String {
        match (self.allows_any_origin(), self.allow_credentials) {
            (true, true) => "any origin (mirrored), credentials allowed".to_string(),
            (true, false) => "any origin (*)".to_string(),
            (false, credentials) => format!(
                "{} listed origin(s), credentials {}",
                self.origins.len(),
                if credentials { "allowed" } else { "not allowed" }
            ),
        }
    }

    fn allow_origin(&self) -> AllowOrigin {
        if self.allows_any_origin() {
            // A literal `*` is not valid together with credentials, so echo the caller's origin.
            if self.allow_credentials {
                AllowOrigin::mirror_request()
            } else {
                AllowOrigin::any()
            }
        } else {
            let origins: Vec<HeaderValue> = self
                .origins
                .iter()
                .filter_map(|origin| match HeaderValue::from_str(origin) {
                    Ok(value) => Some(value),
                    Err(e) => {
                        warn!("Ignoring invalid CORS origin '{}': {}", origin, e);
                        None
                    }
                })
                .collect();
            AllowOrigin::list(origins)
        }
    }

    /// Build the tower-http layer. `OPTIONS` requests are answered by the
    /// layer with an empty 200 response and never reach a handler.
    pub fn layer(&self) -> CorsLayer {
        CorsLayer::new()
            .allow_origin(self.allow_origin())
            .allow_methods(ALLOWED_METHODS.to_vec())
            .allow_headers(AllowHeaders::mirror_request())
            .allow_credentials(self.allow_credentials)
            .max_age(PREFLIGHT_MAX_AGE)
    }
}

impl Default for CorsPolicy {
    fn default() -> Self {
        Self {
            origins: DEFAULT_ORIGINS.iter().map(|origin| origin.to_string()).collect(),
            allow_credentials: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_policy_lists_dev_origins_and_wildcard() {
        let policy = CorsPolicy::default();
        assert!(policy.origins.contains(&"http://localhost:5173".to_string()));
        assert!(policy.allows_any_origin());
        assert!(policy.allow_credentials);
    }

    #[test]
    fn origin_list_is_trimmed_and_skips_empty_entries() {
        let policy = CorsPolicy::from_origin_list(" http://a.test , ,http://b.test,", false);
        assert_eq!(policy.origins, vec!["http://a.test", "http://b.test"]);
        assert!(!policy.allows_any_origin());
    }

    #[test]
    fn wildcard_anywhere_in_list_allows_any_origin() {
        let policy = CorsPolicy::from_origin_list("http://a.test,*", true);
        assert!(policy.allows_any_origin());
        assert_eq!(policy.describe(), "any origin (mirrored), credentials allowed");
    }

    #[test]
    fn layer_builds_for_every_mode() {
        // tower-http panics on invalid wildcard/credential combinations when layering
        for policy in [
            CorsPolicy::default(),
            CorsPolicy::from_origin_list("*", false),
            CorsPolicy::from_origin_list("http://a.test,not a valid\nheader", true),
        ] {
            let _ = tower::ServiceBuilder::new()
                .layer(policy.layer())
                .service(tower::service_fn(|_: axum::http::Request<axum::body::Body>| async {
                    Ok::<_, std::convert::Infallible>(axum::http::Response::new(axum::body::Body::empty()))
                }));
        }
    }
}
