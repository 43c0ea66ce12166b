//! Reverse URL lookup.
//!
//! Generates an absolute path from a route's symbolic name, so the rest of
//! the application never hard-codes URLs.

use tracing::debug;

use crate::error::{RoutingError, RoutingResult};
use crate::table::RouteTable;

impl<H> RouteTable<H> {
    /// Returns the absolute path for the route with the given symbolic name.
    ///
    /// The result is the declared route with a leading slash: the root route
    /// (`""`) reverses to `"/"`, `"increment/"` reverses to `"/increment/"`.
    ///
    /// # Errors
    ///
    /// Returns [`RoutingError::NoReverseMatch`] if no route carries the name.
    ///
    /// # Examples
    ///
    /// ```
    /// use iryna_routing::{path, RouteTable};
    ///
    /// let table = RouteTable::new(vec![path("about/", "about-view", "about")]).unwrap();
    /// assert_eq!(table.reverse("about").unwrap(), "/about/");
    /// ```
    pub fn reverse(&self, name: &str) -> RoutingResult<String> {
        for route in self {
            if route.name() == name {
                debug!(name, route = route.route(), "reverse lookup hit");
                return Ok(format!("/{}", route.route()));
            }
        }
        Err(RoutingError::NoReverseMatch(name.to_string()))
    }
}
