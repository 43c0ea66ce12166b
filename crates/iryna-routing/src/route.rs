//! Route records and the [`path()`] constructor.
//!
//! A [`Route`] binds a declared path to a handler reference and a symbolic
//! name. Routes are declared in the framework's style: without a leading
//! slash, with the empty string standing for the site root.

use std::fmt;

/// A single binding from a declared path to a named handler reference.
///
/// The handler type `H` is opaque to this library: routes carry whatever
/// reference the embedding application dispatches on and never invoke or
/// inspect it. Routes are constructed once at startup and are immutable
/// thereafter.
pub struct Route<H> {
    /// The declared route string (e.g. `"increment/"`, or `""` for the root).
    route: String,
    /// The externally defined handler reference.
    handler: H,
    /// The symbolic name used for reverse URL lookup.
    name: String,
}

impl<H> Route<H> {
    /// Creates a new route binding.
    pub fn new(route: impl Into<String>, handler: H, name: impl Into<String>) -> Self {
        Self {
            route: route.into(),
            handler,
            name: name.into(),
        }
    }

    /// Returns the declared route string.
    pub fn route(&self) -> &str {
        &self.route
    }

    /// Returns the symbolic name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns a reference to the handler.
    pub const fn handler(&self) -> &H {
        &self.handler
    }
}

impl<H> fmt::Debug for Route<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Route")
            .field("route", &self.route)
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

impl<H: Clone> Clone for Route<H> {
    fn clone(&self) -> Self {
        Self {
            route: self.route.clone(),
            handler: self.handler.clone(),
            name: self.name.clone(),
        }
    }
}

/// Creates a route binding in URL-configuration style.
///
/// # Examples
///
/// ```
/// use iryna_routing::path;
///
/// let route = path("increment/", "increment-view", "increment");
/// assert_eq!(route.route(), "increment/");
/// assert_eq!(route.name(), "increment");
/// ```
pub fn path<H>(route: &str, handler: H, name: &str) -> Route<H> {
    Route::new(route, handler, name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_accessors() {
        let r = path("reset/", "reset-view", "reset");
        assert_eq!(r.route(), "reset/");
        assert_eq!(r.name(), "reset");
        assert_eq!(*r.handler(), "reset-view");
    }

    #[test]
    fn test_root_route_is_empty_string() {
        let r = path("", "index-view", "index");
        assert_eq!(r.route(), "");
        assert_eq!(r.name(), "index");
    }

    #[test]
    fn test_debug_skips_handler() {
        let r = path("reset/", "reset-view", "reset");
        let debug = format!("{r:?}");
        assert!(debug.contains("reset/"));
        assert!(!debug.contains("reset-view"));
    }
}
