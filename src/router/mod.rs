//! # Router Module
//!
//! Matches an HTTP method and path to one of the site's fixed [`Route`]s.
//! The route table is small and static, so matching is a handful of prefix
//! checks; a path that exists under a different verb yields
//! [`RouteOutcome::MethodNotAllowed`] so the server can answer 405.

mod core;

pub use self::core::{Route, RouteOutcome, Router};
