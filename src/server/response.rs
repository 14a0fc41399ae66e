use crate::error::SiteError;
use may_minihttp::Response;

pub const HTML_CONTENT_TYPE: &str = "Content-Type: text/html; charset=utf-8";
pub const TEXT_CONTENT_TYPE: &str = "Content-Type: text/plain; charset=utf-8";

/// What a handler wants written back to the client.
///
/// Header entries are complete `Name: value` lines, which is the form
/// `may_minihttp` accepts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandlerResponse {
    pub status: u16,
    pub headers: Vec<&'static str>,
    pub body: Vec<u8>,
}

impl HandlerResponse {
    pub fn html(body: String) -> Self {
        Self {
            status: 200,
            headers: vec![HTML_CONTENT_TYPE],
            body: body.into_bytes(),
        }
    }

    /// 200 with no body.
    pub fn empty() -> Self {
        Self {
            status: 200,
            headers: Vec::new(),
            body: Vec::new(),
        }
    }

    pub fn bytes(content_type_header: &'static str, body: Vec<u8>) -> Self {
        Self {
            status: 200,
            headers: vec![content_type_header],
            body,
        }
    }

    /// Plain-text error response. Only the public message is sent.
    pub fn from_error(err: &SiteError) -> Self {
        let mut headers = vec![TEXT_CONTENT_TYPE];
        if let SiteError::MethodNotAllowed { allow } = err {
            headers.push(allow_header_line(allow));
        }
        Self {
            status: err.status(),
            headers,
            body: err.public_message().as_bytes().to_vec(),
        }
    }

    pub fn body_str(&self) -> std::borrow::Cow<'_, str> {
        String::from_utf8_lossy(&self.body)
    }
}

fn allow_header_line(allow: &str) -> &'static str {
    match allow {
        "POST" => "Allow: POST",
        "DELETE" => "Allow: DELETE",
        _ => "Allow: GET",
    }
}

fn status_reason(status: u16) -> &'static str {
    match status {
        200 => "OK",
        201 => "Created",
        400 => "Bad Request",
        404 => "Not Found",
        405 => "Method Not Allowed",
        500 => "Internal Server Error",
        _ => "OK",
    }
}

pub fn write_response(res: &mut Response, response: HandlerResponse) {
    res.status_code(response.status as usize, status_reason(response.status));
    for header in response.headers {
        res.header(header);
    }
    res.body_vec(response.body);
}
