//! The ordered route table and forward resolution.
//!
//! A [`RouteTable`] is built once at startup from an ordered list of
//! [`Route`] records and is immutable afterwards. Resolution is first-match
//! in declaration order against the normalized request path; everything
//! else about request handling (dispatch, 404 responses, handler errors)
//! belongs to the embedding framework.

use std::collections::HashSet;
use std::fmt;

use percent_encoding::percent_decode_str;
use tracing::debug;

use crate::error::{RoutingError, RoutingResult};
use crate::route::Route;

/// The result of resolving a request path against a [`RouteTable`].
///
/// Borrows from the table; the embedding dispatcher reads the handler
/// reference and invokes it however it sees fit.
pub struct RouteMatch<'a, H> {
    handler: &'a H,
    route: &'a str,
    name: &'a str,
}

impl<H> RouteMatch<'_, H> {
    /// Returns the matched handler reference.
    pub const fn handler(&self) -> &H {
        self.handler
    }

    /// Returns the declared route string that matched.
    pub const fn route(&self) -> &str {
        self.route
    }

    /// Returns the symbolic name of the matched route.
    pub const fn name(&self) -> &str {
        self.name
    }
}

impl<H> fmt::Debug for RouteMatch<'_, H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RouteMatch")
            .field("route", &self.route)
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// An ordered, immutable collection of routes.
///
/// Symbolic names are unique within a table; construction fails on a
/// duplicate. Route strings may repeat (the later entry is unreachable by
/// first-match ordering; [`checks`](crate::checks) flags it).
pub struct RouteTable<H> {
    routes: Vec<Route<H>>,
}

impl<H> RouteTable<H> {
    /// Builds a table from routes in declaration order.
    ///
    /// # Errors
    ///
    /// Returns [`RoutingError::ImproperlyConfigured`] if two routes share a
    /// symbolic name.
    pub fn new(routes: Vec<Route<H>>) -> RoutingResult<Self> {
        let mut seen = HashSet::new();
        for route in &routes {
            if !seen.insert(route.name()) {
                return Err(RoutingError::ImproperlyConfigured(format!(
                    "duplicate route name '{}'",
                    route.name()
                )));
            }
        }
        Ok(Self { routes })
    }

    /// Returns the routes in declaration order.
    pub fn routes(&self) -> &[Route<H>] {
        &self.routes
    }

    /// Returns an iterator over the routes in declaration order.
    pub fn iter(&self) -> std::slice::Iter<'_, Route<H>> {
        self.routes.iter()
    }

    /// Returns the number of routes in the table.
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    /// Returns `true` if the table has no routes.
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Resolves a request path to a [`RouteMatch`].
    ///
    /// The path is taken as it appears on the wire: leading slash,
    /// percent-encoded. It is normalized (the single leading slash stripped,
    /// percent-escapes decoded) and compared against each declared route in
    /// order; the first exact match wins.
    ///
    /// # Errors
    ///
    /// Returns [`RoutingError::NotFound`] if no route matches, or if the
    /// path's percent-encoding does not decode to valid UTF-8.
    pub fn resolve(&self, path: &str) -> RoutingResult<RouteMatch<'_, H>> {
        let Some(target) = normalize_request_path(path) else {
            debug!(path, "request path does not decode to valid UTF-8");
            return Err(RoutingError::NotFound(path.to_string()));
        };

        for route in &self.routes {
            if route.route() == target {
                debug!(path, name = route.name(), "route matched");
                return Ok(RouteMatch {
                    handler: route.handler(),
                    route: route.route(),
                    name: route.name(),
                });
            }
        }

        debug!(path, "no route matched");
        Err(RoutingError::NotFound(path.to_string()))
    }
}

impl<H> fmt::Debug for RouteTable<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RouteTable")
            .field("routes", &self.routes)
            .finish()
    }
}

impl<'a, H> IntoIterator for &'a RouteTable<H> {
    type Item = &'a Route<H>;
    type IntoIter = std::slice::Iter<'a, Route<H>>;

    fn into_iter(self) -> Self::IntoIter {
        self.routes.iter()
    }
}

/// Normalizes a request path for matching: strips the single leading slash
/// and decodes percent-escapes. Declared routes are compared against the
/// decoded form byte for byte.
fn normalize_request_path(path: &str) -> Option<String> {
    let trimmed = path.strip_prefix('/').unwrap_or(path);
    percent_decode_str(trimmed)
        .decode_utf8()
        .ok()
        .map(std::borrow::Cow::into_owned)
}
