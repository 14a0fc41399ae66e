use super::request::{parse_request, ParsedRequest};
use super::response::{write_response, HandlerResponse};
use crate::error::SiteError;
use crate::handlers::{dispatch, SiteState};
use crate::router::{RouteOutcome, Router};
use http::Method;
use may_minihttp::{HttpService, Request, Response};
use std::io;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, error, info, info_span};

/// The `may_minihttp` service. Cloned once per connection; all clones share
/// the same router and site state.
#[derive(Clone)]
pub struct AppService {
    pub router: Arc<Router>,
    pub state: Arc<SiteState>,
}

impl AppService {
    pub fn new(router: Router, state: SiteState) -> Self {
        Self {
            router: Arc::new(router),
            state: Arc::new(state),
        }
    }

    /// Route and run one request. Every failure is turned into a response
    /// here; nothing escapes to the connection loop.
    pub fn handle(&self, req: &ParsedRequest) -> HandlerResponse {
        let method = match Method::from_bytes(req.method.as_bytes()) {
            Ok(m) => m,
            Err(_) => {
                debug!(method = %req.method, "unrecognised method token");
                return HandlerResponse::from_error(&SiteError::NotFound);
            }
        };

        let result = match self.router.route(&method, &req.path) {
            RouteOutcome::Matched(route) => {
                debug!(route = route.name(), "route matched");
                dispatch(&self.state, route, req)
            }
            RouteOutcome::MethodNotAllowed { allow } => Err(SiteError::MethodNotAllowed { allow }),
            RouteOutcome::NotFound => Err(SiteError::NotFound),
        };

        match result {
            Ok(res) => res,
            Err(err) => {
                if err.status() >= 500 {
                    error!(error = %err, "request failed");
                } else {
                    debug!(error = %err, status = err.status(), "request rejected");
                }
                HandlerResponse::from_error(&err)
            }
        }
    }
}

impl HttpService for AppService {
    fn call(&mut self, req: Request, res: &mut Response) -> io::Result<()> {
        let parsed = parse_request(req);
        let span = info_span!("request", method = %parsed.method, path = %parsed.path);
        let _entered = span.enter();

        let started = Instant::now();
        let response = self.handle(&parsed);
        info!(
            status = response.status,
            body_bytes = response.body.len(),
            latency_us = started.elapsed().as_micros() as u64,
            "request complete"
        );
        write_response(res, response);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::test_support::{posts_dir, state_with, StubRenderer};

    fn service(dir: &std::path::Path) -> AppService {
        AppService::new(Router::new("/images/"), state_with(Arc::new(StubRenderer), dir))
    }

    #[test]
    fn test_unknown_path_is_404() {
        let dir = posts_dir(&[]);
        let svc = service(dir.path());
        let res = svc.handle(&ParsedRequest::new("GET", "/nope"));
        assert_eq!(res.status, 404);
        assert_eq!(res.body_str(), "Not Found");
    }

    #[test]
    fn test_wrong_verb_is_405() {
        let dir = posts_dir(&[]);
        let svc = service(dir.path());
        let res = svc.handle(&ParsedRequest::new("GET", "/window/add"));
        assert_eq!(res.status, 405);
        assert!(res.headers.contains(&"Allow: POST"));
    }

    #[test]
    fn test_spawn_then_delete_round_trip() {
        let dir = posts_dir(&[("a.md", "# A")]);
        let svc = service(dir.path());
        let res = svc.handle(&ParsedRequest::new("POST", "/window/add"));
        assert_eq!(res.status, 200);
        let id = svc.state.registry.list()[0].id().to_string();

        let res = svc.handle(&ParsedRequest::new("DELETE", &format!("/window/delete/{id}")));
        assert_eq!(res.status, 200);
        assert!(svc.state.registry.is_empty());
    }

    #[test]
    fn test_home_lists_registered() {
        let dir = posts_dir(&[]);
        let svc = service(dir.path());
        svc.handle(&ParsedRequest::new("POST", "/window/add"));
        let res = svc.handle(&ParsedRequest::new("GET", "/?tab=1"));
        assert_eq!(res.body_str(), "<home windows=1 folders=0>");
    }

    #[test]
    fn test_garbage_method_is_404() {
        let dir = posts_dir(&[]);
        let svc = service(dir.path());
        let res = svc.handle(&ParsedRequest::new("GE T", "/"));
        assert_eq!(res.status, 404);
    }
}
