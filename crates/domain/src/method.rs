//! Web API method names and HTTP verbs

use std::fmt;

/// HTTP verbs used to call Web API methods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpVerb {
    /// Arguments travel in the query string.
    Get,
    /// Arguments travel in a form-encoded body.
    Post,
}

impl HttpVerb {
    /// Returns the verb as a static string.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
        }
    }
}

impl fmt::Display for HttpVerb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Web API methods of the stars resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ApiMethod {
    /// `stars.add`
    StarsAdd,
    /// `stars.remove`
    StarsRemove,
    /// `stars.list`
    StarsList,
}

impl ApiMethod {
    /// Returns the dotted method name used as the URL path segment.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::StarsAdd => "stars.add",
            Self::StarsRemove => "stars.remove",
            Self::StarsList => "stars.list",
        }
    }

    /// Returns the verb this client uses for the method.
    #[must_use]
    pub const fn verb(self) -> HttpVerb {
        match self {
            Self::StarsAdd | Self::StarsRemove => HttpVerb::Post,
            Self::StarsList => HttpVerb::Get,
        }
    }
}

impl fmt::Display for ApiMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
