//! Integration test harness for the Ubermelon storefront.
//!
//! Tests drive the full router in-process, middleware included, and carry
//! the session cookie from one request to the next like a browser would.
//!
//! # Example
//!
//! ```rust,ignore
//! let mut visitor = TestApp::new().visitor();
//! let resp = visitor.get("/add_to_cart/cren").await;
//! assert_eq!(resp.location(), Some("/cart"));
//! assert!(visitor.get("/cart").await.body.contains("Crenshaw"));
//! ```

use axum::{
    Router,
    body::Body,
    http::{HeaderMap, Method, Request, StatusCode, header},
};
use tower::ServiceExt;
use tower_sessions::MemoryStore;
use ubermelon_storefront::config::StorefrontConfig;
use ubermelon_storefront::routes;
use ubermelon_storefront::state::AppState;
use ubermelon_storefront::stores::{Catalog, CustomerStore};

/// Catalog fixture, in display order.
pub const MELONS: &str = "\
cren|Crenshaw|Crenshaw|2.00|http://example.com/crenshaw.jpg|green|0
yell|Watermelon|Yellow Watermelon|7.50|http://example.com/yellow.jpg|yellow|1
musk|Muskmelon|Musk|4.25|http://example.com/musk.jpg|orange|0
";

/// Customer fixture.
pub const CUSTOMERS: &str = "\
Mel|Onhead|mel@ubermelon.com|watermelon
Cant|Aloupe|cant@ubermelon.com|orangeflesh
";

/// One storefront instance with its own session store.
#[derive(Clone)]
pub struct TestApp {
    router: Router,
    sessions: MemoryStore,
}

impl TestApp {
    /// Build the app over the fixture catalog and customers.
    ///
    /// # Panics
    ///
    /// Panics if the fixtures fail to parse.
    #[must_use]
    pub fn new() -> Self {
        Self::with_catalog(MELONS, MemoryStore::default())
    }

    /// Build the app over `melons` and an existing session store.
    ///
    /// # Panics
    ///
    /// Panics if `melons` or the customer fixture fail to parse.
    #[must_use]
    #[allow(clippy::unwrap_used)]
    pub fn with_catalog(melons: &str, sessions: MemoryStore) -> Self {
        let catalog = Catalog::parse(melons).unwrap();
        let customers = CustomerStore::parse(CUSTOMERS).unwrap();
        let state = AppState::new(StorefrontConfig::default(), catalog, customers);
        Self {
            router: routes::app_with_session_store(state, sessions.clone()),
            sessions,
        }
    }

    /// The same visitors' sessions served against a different catalog, as
    /// after a restart with an edited melon file.
    ///
    /// # Panics
    ///
    /// Panics if `melons` fails to parse.
    #[must_use]
    pub fn with_new_catalog(&self, melons: &str) -> Self {
        Self::with_catalog(melons, self.sessions.clone())
    }

    /// A fresh visitor with no session cookie.
    #[must_use]
    pub fn visitor(&self) -> Visitor {
        Visitor {
            router: self.router.clone(),
            cookie: None,
        }
    }
}

impl Default for TestApp {
    fn default() -> Self {
        Self::new()
    }
}

/// A browser-like client that remembers its session cookie.
pub struct Visitor {
    router: Router,
    cookie: Option<String>,
}

impl Visitor {
    /// Send a GET request.
    pub async fn get(&mut self, path: &str) -> TestResponse {
        self.send(Method::GET, path, Body::empty(), None).await
    }

    /// Send a form POST. Values are sent as-is, so keep them URL-safe.
    pub async fn post_form(&mut self, path: &str, fields: &[(&str, &str)]) -> TestResponse {
        let body = fields
            .iter()
            .map(|(name, value)| format!("{name}={value}"))
            .collect::<Vec<_>>()
            .join("&");
        self.send(
            Method::POST,
            path,
            Body::from(body),
            Some("application/x-www-form-urlencoded"),
        )
        .await
    }

    /// Log in with the given credentials.
    pub async fn log_in(&mut self, email: &str, password: &str) -> TestResponse {
        self.post_form("/login", &[("email", email), ("password", password)])
            .await
    }

    /// Keep this visitor's cookie but send its requests to `app`.
    pub fn switch_to(&mut self, app: &TestApp) {
        self.router = app.router.clone();
    }

    /// A second client sharing this visitor's session, as another browser
    /// tab would.
    #[must_use]
    pub fn fork(&self) -> Self {
        Self {
            router: self.router.clone(),
            cookie: self.cookie.clone(),
        }
    }

    /// Whether the visitor has been issued a session cookie.
    #[must_use]
    pub const fn has_session(&self) -> bool {
        self.cookie.is_some()
    }

    #[allow(clippy::unwrap_used)]
    async fn send(
        &mut self,
        method: Method,
        path: &str,
        body: Body,
        content_type: Option<&str>,
    ) -> TestResponse {
        let mut builder = Request::builder().method(method).uri(path);
        if let Some(cookie) = &self.cookie {
            builder = builder.header(header::COOKIE, cookie);
        }
        if let Some(content_type) = content_type {
            builder = builder.header(header::CONTENT_TYPE, content_type);
        }
        let request = builder.body(body).unwrap();

        let response = self.router.clone().oneshot(request).await.unwrap();

        if let Some(cookie) = response
            .headers()
            .get(header::SET_COOKIE)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.split(';').next())
        {
            // An emptied session is cleared with a blank cookie value
            self.cookie = cookie
                .split_once('=')
                .filter(|(_, value)| !value.is_empty())
                .map(|_| cookie.to_string());
        }

        let status = response.status();
        let headers = response.headers().clone();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();

        TestResponse {
            status,
            headers,
            body: String::from_utf8_lossy(&bytes).into_owned(),
        }
    }
}

/// A fully buffered response.
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: String,
}

impl TestResponse {
    /// The redirect target, if any.
    #[must_use]
    pub fn location(&self) -> Option<&str> {
        self.headers
            .get(header::LOCATION)
            .and_then(|v| v.to_str().ok())
    }

    /// A response header as text.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }
}
