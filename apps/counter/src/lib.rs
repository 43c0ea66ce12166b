//! URL configuration for the counter application.
//!
//! Binds the four counter paths to named handler references:
//!
//! | Route | Name |
//! |---|---|
//! | `` (root) | `index` |
//! | `increment/` | `increment` |
//! | `decrement/` | `decrement` |
//! | `reset/` | `reset` |
//!
//! The view implementations live in the embedding application; this crate
//! only declares the table, so the handler type stays generic and the
//! caller injects whatever references its dispatcher invokes.

use iryna_routing::{path, RouteTable, RoutingResult};

/// The handler references for the four counter views, supplied by the
/// embedding application.
#[derive(Debug, Clone)]
pub struct CounterViews<H> {
    /// Renders the counter state.
    pub index: H,
    /// Increases the counter.
    pub increment: H,
    /// Decreases the counter.
    pub decrement: H,
    /// Resets the counter.
    pub reset: H,
}

/// Builds the counter URL table.
///
/// # Errors
///
/// Propagates the table constructor's duplicate-name error. The four fixed
/// routes carry distinct names, so construction succeeds for any `views`.
pub fn urlpatterns<H>(views: CounterViews<H>) -> RoutingResult<RouteTable<H>> {
    RouteTable::new(vec![
        path("", views.index, "index"),
        path("increment/", views.increment, "increment"),
        path("decrement/", views.decrement, "decrement"),
        path("reset/", views.reset, "reset"),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_views() -> CounterViews<&'static str> {
        CounterViews {
            index: "index-view",
            increment: "increment-view",
            decrement: "decrement-view",
            reset: "reset-view",
        }
    }

    #[test]
    fn test_urlpatterns_builds() {
        let table = urlpatterns(sample_views()).unwrap();
        assert_eq!(table.len(), 4);
    }

    #[test]
    fn test_resolves_index() {
        let table = urlpatterns(sample_views()).unwrap();
        let m = table.resolve("/").unwrap();
        assert_eq!(m.name(), "index");
        assert_eq!(*m.handler(), "index-view");
    }

    #[test]
    fn test_resolves_actions() {
        let table = urlpatterns(sample_views()).unwrap();
        assert_eq!(table.resolve("/increment/").unwrap().name(), "increment");
        assert_eq!(table.resolve("/decrement/").unwrap().name(), "decrement");
        assert_eq!(table.resolve("/reset/").unwrap().name(), "reset");
    }

    #[test]
    fn test_no_match_for_unknown_path() {
        let table = urlpatterns(sample_views()).unwrap();
        assert!(table.resolve("/double/").is_err());
    }

    #[test]
    fn test_reverse_by_name() {
        let table = urlpatterns(sample_views()).unwrap();
        assert_eq!(table.reverse("index").unwrap(), "/");
        assert_eq!(table.reverse("increment").unwrap(), "/increment/");
    }
}
