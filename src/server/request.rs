use may_minihttp::Request;
use std::collections::HashMap;
use std::io::Read;
use tracing::debug;

/// Header the client uses to report the highest z-index it is showing.
pub const Z_INDEX_HINT_HEADER: &str = "x-highest-z-index";

/// Parsed HTTP request data used by `AppService`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ParsedRequest {
    /// HTTP method (GET, POST, etc.)
    pub method: String,
    /// Request path without the query string
    pub path: String,
    /// HTTP headers (lowercase keys)
    pub headers: HashMap<String, String>,
    /// Raw request body
    pub body: Vec<u8>,
}

impl ParsedRequest {
    /// Build a request by hand (tests, internal calls).
    pub fn new(method: &str, path: &str) -> Self {
        Self {
            method: method.to_string(),
            path: strip_query(path).to_string(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        self.headers
            .insert(name.to_ascii_lowercase(), value.to_string());
        self
    }

    /// Case-insensitive header lookup.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .map(String::as_str)
    }

    /// The client's `X-Highest-Z-Index`, if present and numeric.
    pub fn z_index_hint(&self) -> Option<i64> {
        let raw = self.header(Z_INDEX_HINT_HEADER)?;
        match raw.trim().parse::<i64>() {
            Ok(v) => Some(v),
            Err(err) => {
                debug!(value = %raw, error = %err, "ignoring unparsable z-index hint");
                None
            }
        }
    }
}

fn strip_query(raw_path: &str) -> &str {
    raw_path.split('?').next().unwrap_or("/")
}

/// Extract everything the handlers need from a `may_minihttp::Request`.
///
/// Headers are copied out before the body is read, since reading the body
/// consumes the request.
pub fn parse_request(req: Request) -> ParsedRequest {
    let method = req.method().to_string();
    let path = strip_query(req.path()).to_string();

    let headers: HashMap<String, String> = req
        .headers()
        .iter()
        .map(|h| {
            (
                h.name.to_ascii_lowercase(),
                String::from_utf8_lossy(h.value).to_string(),
            )
        })
        .collect();

    debug!(
        header_count = headers.len(),
        header_names = ?headers.keys().take(20).collect::<Vec<_>>(),
        "Headers extracted"
    );

    let mut body = Vec::new();
    if let Err(err) = req.body().read_to_end(&mut body) {
        debug!(error = %err, "failed to read request body");
        body.clear();
    }
    if !body.is_empty() {
        debug!(body_size_bytes = body.len(), "Request body read");
    }

    ParsedRequest {
        method,
        path,
        headers,
        body,
    }
}
