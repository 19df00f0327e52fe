//! Pure request routing for the `/prompt` proxy.
//!
//! The service is mounted behind a single wildcard route, so dispatch on
//! method and path happens here rather than in the HTTP framework. The
//! functions in this module take plain strings and return a [`Route`],
//! which keeps them testable without any transport.

use std::borrow::Cow;

use thiserror::Error;

use crate::prompt::RESERVED_VERSIONING;

/// Path prefix under which all prompt routes live.
pub const ROUTE_PREFIX: &str = "/prompt";

/// A parsed prompt operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// `GET /prompt/{reference}`
    Latest { reference: String },
    /// `GET /prompt/{reference}/{versioning}`
    Get {
        reference: String,
        versioning: String,
    },
    /// `GET /prompt/{reference}/versions`
    Versions { reference: String },
    /// `PUT|POST /prompt/{reference}/{versioning}`
    Put {
        reference: String,
        versioning: String,
    },
}

/// Errors produced while routing a request.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RouteError {
    #[error("No route for {method} {path}")]
    NotFound { method: String, path: String },
    #[error("Invalid path segment '{0}': not valid percent-encoded UTF-8")]
    InvalidSegment(String),
}

/// Routes a request whose path is still percent-encoded (as seen on the wire).
///
/// Segments are URL-decoded after splitting, so an encoded `/` (`%2F`)
/// stays inside its segment.
pub fn parse_route(method: &str, path: &str) -> Result<Route, RouteError> {
    let raw = split_segments(method, path)?;
    let segments = raw
        .into_iter()
        .map(|segment| {
            urlencoding::decode(segment)
                .map_err(|_| RouteError::InvalidSegment(segment.to_string()))
        })
        .collect::<Result<Vec<_>, _>>()?;

    match_route(method, path, segments)
}

/// Routes a request whose path was already decoded by the transport
/// (API Gateway proxy events carry decoded paths).
pub fn parse_decoded_route(method: &str, path: &str) -> Result<Route, RouteError> {
    let segments = split_segments(method, path)?
        .into_iter()
        .map(Cow::Borrowed)
        .collect();

    match_route(method, path, segments)
}

/// Splits the part of `path` after [`ROUTE_PREFIX`] into non-empty segments.
fn split_segments<'a>(method: &str, path: &'a str) -> Result<Vec<&'a str>, RouteError> {
    let not_found = || RouteError::NotFound {
        method: method.to_string(),
        path: path.to_string(),
    };

    let rest = path.strip_prefix(ROUTE_PREFIX).ok_or_else(not_found)?;
    let rest = rest.strip_prefix('/').ok_or_else(not_found)?;
    // One trailing slash is tolerated.
    let rest = rest.strip_suffix('/').unwrap_or(rest);

    let segments: Vec<&str> = rest.split('/').collect();
    if segments.iter().any(|s| s.is_empty()) {
        return Err(not_found());
    }

    Ok(segments)
}

fn match_route(method: &str, path: &str, segments: Vec<Cow<'_, str>>) -> Result<Route, RouteError> {
    let method = method.to_ascii_uppercase();

    match (method.as_str(), segments.as_slice()) {
        ("GET", [reference]) => Ok(Route::Latest {
            reference: reference.to_string(),
        }),
        ("GET", [reference, versions]) if versions == RESERVED_VERSIONING => {
            Ok(Route::Versions {
                reference: reference.to_string(),
            })
        }
        ("GET", [reference, versioning]) => Ok(Route::Get {
            reference: reference.to_string(),
            versioning: versioning.to_string(),
        }),
        ("PUT" | "POST", [reference, versioning]) => Ok(Route::Put {
            reference: reference.to_string(),
            versioning: versioning.to_string(),
        }),
        _ => Err(RouteError::NotFound {
            method,
            path: path.to_string(),
        }),
    }
}
