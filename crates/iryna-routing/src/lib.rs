//! # iryna-routing
//!
//! Route table, forward resolution, and reverse URL lookup for the iryna
//! counter application.
//!
//! A [`RouteTable`] is an ordered, immutable collection of [`Route`] records
//! built once at startup: each record binds a declared path to an opaque
//! handler reference and a symbolic name. Request dispatch belongs to the
//! embedding framework; the table resolves a request path to the first
//! matching record and generates URLs from symbolic names, nothing more.
//!
//! ## Modules
//!
//! - [`route`] - route records and the `path()` constructor
//! - [`table`] - the ordered table and forward resolution
//! - [`checks`] - configuration checks over a constructed table
//! - [`error`] - error types and result alias
//!
//! ## Examples
//!
//! ```
//! use iryna_routing::{path, RouteTable};
//!
//! let table = RouteTable::new(vec![
//!     path("", "index-view", "index"),
//!     path("about/", "about-view", "about"),
//! ])
//! .unwrap();
//!
//! // Forward resolution
//! let m = table.resolve("/about/").unwrap();
//! assert_eq!(m.name(), "about");
//! assert_eq!(*m.handler(), "about-view");
//!
//! // Reverse resolution
//! assert_eq!(table.reverse("about").unwrap(), "/about/");
//! ```

pub mod checks;
pub mod error;
mod reverse;
pub mod route;
pub mod table;

// Re-export the most commonly used types at the crate root.
pub use error::{RoutingError, RoutingResult};
pub use route::{path, Route};
pub use table::{RouteMatch, RouteTable};
