//! HTTP plumbing: request extraction, response writing, the
//! `may_minihttp` service and the server wrapper.

pub mod http_server;
pub mod request;
pub mod response;
pub mod service;

pub use http_server::{HttpServer, ServerHandle};
pub use request::{parse_request, ParsedRequest, Z_INDEX_HINT_HEADER};
pub use response::{write_response, HandlerResponse};
pub use service::AppService;
