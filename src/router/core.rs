use http::Method;
use std::borrow::Cow;
use tracing::debug;

/// A request the site knows how to serve.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// `GET /`
    Home,
    /// `POST /window/add`
    AddWindow,
    /// `GET /window/add/post/{filename}`
    AddPost { filename: String },
    /// `DELETE /window/delete/{id}`
    DeleteWindow { id: String },
    /// `GET /preview/{filename}`
    Preview { filename: String },
    /// `GET {image prefix}{path}`
    Image { path: String },
}

impl Route {
    /// Stable name used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            Route::Home => "home",
            Route::AddWindow => "add_window",
            Route::AddPost { .. } => "add_post",
            Route::DeleteWindow { .. } => "delete_window",
            Route::Preview { .. } => "preview",
            Route::Image { .. } => "image",
        }
    }
}

/// Result of matching a method and path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteOutcome {
    Matched(Route),
    /// The path exists but not for this verb; carries the `Allow` value.
    MethodNotAllowed { allow: &'static str },
    NotFound,
}

/// Maps `(method, path)` to a [`Route`].
///
/// Path parameters are the raw remainder after the route prefix,
/// percent-decoded. They are deliberately *not* validated here: handlers
/// own sanitization so that rejected names surface as 404s from the
/// resource, not as unknown routes.
#[derive(Debug, Clone)]
pub struct Router {
    image_prefix: String,
}

const ADD_POST_PREFIX: &str = "/window/add/post/";
const DELETE_PREFIX: &str = "/window/delete/";
const PREVIEW_PREFIX: &str = "/preview/";

impl Router {
    pub fn new(image_prefix: &str) -> Self {
        let mut image_prefix = image_prefix.trim().to_string();
        if !image_prefix.starts_with('/') {
            image_prefix.insert(0, '/');
        }
        if !image_prefix.ends_with('/') {
            image_prefix.push('/');
        }
        Self { image_prefix }
    }

    fn decode(raw: &str) -> String {
        urlencoding::decode(raw)
            .map(Cow::into_owned)
            .unwrap_or_else(|_| raw.to_string())
    }

    /// Which verb a path accepts, and the route it maps to.
    fn match_path(&self, path: &str) -> Option<(Method, Route)> {
        if path == "/" {
            return Some((Method::GET, Route::Home));
        }
        if path == "/window/add" {
            return Some((Method::POST, Route::AddWindow));
        }
        if let Some(rest) = path.strip_prefix(ADD_POST_PREFIX) {
            let filename = Self::decode(rest);
            return Some((Method::GET, Route::AddPost { filename }));
        }
        if let Some(rest) = path.strip_prefix(DELETE_PREFIX) {
            if rest.is_empty() {
                return None;
            }
            let id = Self::decode(rest);
            return Some((Method::DELETE, Route::DeleteWindow { id }));
        }
        if let Some(rest) = path.strip_prefix(PREVIEW_PREFIX) {
            let filename = Self::decode(rest);
            return Some((Method::GET, Route::Preview { filename }));
        }
        if let Some(rest) = path.strip_prefix(self.image_prefix.as_str()) {
            let path = Self::decode(rest);
            return Some((Method::GET, Route::Image { path }));
        }
        None
    }

    pub fn route(&self, method: &Method, path: &str) -> RouteOutcome {
        let Some((allowed, route)) = self.match_path(path) else {
            debug!(method = %method, path = %path, "no route");
            return RouteOutcome::NotFound;
        };
        if *method == allowed {
            return RouteOutcome::Matched(route);
        }
        let allow = allow_header(&allowed);
        debug!(method = %method, path = %path, allow, "method not allowed");
        RouteOutcome::MethodNotAllowed { allow }
    }
}

fn allow_header(method: &Method) -> &'static str {
    match *method {
        Method::POST => "POST",
        Method::DELETE => "DELETE",
        _ => "GET",
    }
}
