use std::fmt;
use std::io;

/// Failure of a single request.
///
/// Every variant is terminal for the request that produced it. The
/// [`fmt::Display`] text is for server-side logs only; clients get the
/// generic [`SiteError::public_message`].
#[derive(Debug)]
pub enum SiteError {
    /// A post (or other named file) does not exist or its name was rejected.
    PostNotFound {
        /// The name as requested, before sanitization
        name: String,
    },
    /// No route or static file matches the path.
    NotFound,
    /// The path matches a route that does not accept this verb.
    MethodNotAllowed {
        /// Value for the `Allow` response header
        allow: &'static str,
    },
    /// Template or markup rendering failed.
    Render {
        /// Template that failed
        template: String,
        /// Underlying renderer error text
        message: String,
    },
    /// Reading a file that does exist failed.
    Io(io::Error),
}

impl SiteError {
    pub fn render(template: &str, message: impl fmt::Display) -> Self {
        SiteError::Render {
            template: template.to_string(),
            message: message.to_string(),
        }
    }

    #[must_use]
    pub fn status(&self) -> u16 {
        match self {
            SiteError::PostNotFound { .. } | SiteError::NotFound => 404,
            SiteError::MethodNotAllowed { .. } => 405,
            SiteError::Render { .. } | SiteError::Io(_) => 500,
        }
    }

    /// Body text sent to the client.
    #[must_use]
    pub fn public_message(&self) -> &'static str {
        match self {
            SiteError::PostNotFound { .. } => "Post not found",
            SiteError::NotFound => "Not Found",
            SiteError::MethodNotAllowed { .. } => "Method Not Allowed",
            SiteError::Render { .. } | SiteError::Io(_) => "Internal Server Error",
        }
    }
}

impl fmt::Display for SiteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SiteError::PostNotFound { name } => write!(f, "post not found: '{name}'"),
            SiteError::NotFound => write!(f, "no route or file matches the request path"),
            SiteError::MethodNotAllowed { allow } => {
                write!(f, "method not allowed (allowed: {allow})")
            }
            SiteError::Render { template, message } => {
                write!(f, "failed to render template '{template}': {message}")
            }
            SiteError::Io(err) => write!(f, "I/O error: {err}"),
        }
    }
}

impl std::error::Error for SiteError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SiteError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for SiteError {
    fn from(err: io::Error) -> Self {
        SiteError::Io(err)
    }
}
