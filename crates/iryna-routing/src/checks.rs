//! Configuration checks for route tables.
//!
//! [`check_route_table`] inspects a constructed table for declarations that
//! are legal but almost certainly mistakes. Checks never fail construction;
//! they produce [`CheckMessage`] records for the operator, typically run at
//! startup next to the rest of the application's self-checks.
//!
//! # Check ids
//!
//! - `urls.W001`: route declared with a leading `/` (can never match)
//! - `urls.W002`: route shadowed by an identical earlier route
//! - `urls.W003`: route contains consecutive slashes

use std::collections::HashMap;
use std::fmt;

use crate::table::RouteTable;

/// Severity level for a check message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CheckLevel {
    /// Informational message.
    Info,
    /// A potential problem.
    Warning,
    /// A definite problem that should be fixed.
    Error,
}

impl fmt::Display for CheckLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Info => write!(f, "INFO"),
            Self::Warning => write!(f, "WARNING"),
            Self::Error => write!(f, "ERROR"),
        }
    }
}

/// A diagnostic message produced by a configuration check.
#[derive(Debug, Clone)]
pub struct CheckMessage {
    /// The severity level.
    pub level: CheckLevel,
    /// The human-readable message describing the issue.
    pub msg: String,
    /// An optional hint on how to fix the issue.
    pub hint: Option<String>,
    /// The symbolic name of the route the issue relates to.
    pub obj: Option<String>,
    /// The stable identifier of the check that produced this message.
    pub id: &'static str,
}

impl CheckMessage {
    /// Creates a warning-level message.
    pub fn warning(
        msg: impl Into<String>,
        hint: Option<&str>,
        obj: Option<&str>,
        id: &'static str,
    ) -> Self {
        Self {
            level: CheckLevel::Warning,
            msg: msg.into(),
            hint: hint.map(String::from),
            obj: obj.map(String::from),
            id,
        }
    }
}

impl fmt::Display for CheckMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}) {}: {}", self.id, self.level, self.msg)?;
        if let Some(hint) = &self.hint {
            write!(f, " HINT: {hint}")?;
        }
        Ok(())
    }
}

/// Runs all route-table checks and returns the messages found.
pub fn check_route_table<H>(table: &RouteTable<H>) -> Vec<CheckMessage> {
    let mut messages = Vec::new();
    let mut first_seen: HashMap<&str, &str> = HashMap::new();

    for route in table {
        if route.route().starts_with('/') {
            messages.push(CheckMessage::warning(
                format!(
                    "route '{}' begins with a '/'; request paths are matched \
                     without their leading slash, so this route can never match",
                    route.route()
                ),
                Some("remove the leading '/'"),
                Some(route.name()),
                "urls.W001",
            ));
        }

        if route.route().contains("//") {
            messages.push(CheckMessage::warning(
                format!("route '{}' contains consecutive slashes", route.route()),
                None,
                Some(route.name()),
                "urls.W003",
            ));
        }

        if let Some(earlier) = first_seen.get(route.route()) {
            messages.push(CheckMessage::warning(
                format!(
                    "route '{}' is shadowed by the earlier route '{}' with the \
                     same path",
                    route.name(),
                    earlier
                ),
                Some("remove one of the duplicate declarations or reorder them"),
                Some(route.name()),
                "urls.W002",
            ));
        } else {
            first_seen.insert(route.route(), route.name());
        }
    }

    messages
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::route::path;

    #[test]
    fn test_clean_table_produces_no_messages() {
        let table = RouteTable::new(vec![
            path("", "index-view", "index"),
            path("about/", "about-view", "about"),
        ])
        .unwrap();
        assert!(check_route_table(&table).is_empty());
    }

    #[test]
    fn test_leading_slash_flagged() {
        let table = RouteTable::new(vec![path("/about/", "about-view", "about")]).unwrap();
        let messages = check_route_table(&table);
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].id, "urls.W001");
        assert_eq!(messages[0].level, CheckLevel::Warning);
        assert_eq!(messages[0].obj.as_deref(), Some("about"));
        // The flagged route really is unreachable
        assert!(table.resolve("/about/").is_err());
    }

    #[test]
    fn test_shadowed_route_flagged() {
        let table = RouteTable::new(vec![
            path("about/", "first-view", "first"),
            path("about/", "second-view", "second"),
        ])
        .unwrap();
        let messages = check_route_table(&table);
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].id, "urls.W002");
        assert_eq!(messages[0].obj.as_deref(), Some("second"));
    }

    #[test]
    fn test_consecutive_slashes_flagged() {
        let table = RouteTable::new(vec![path("a//b/", "view", "broken")]).unwrap();
        let messages = check_route_table(&table);
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].id, "urls.W003");
    }

    #[test]
    fn test_message_display() {
        let msg = CheckMessage::warning(
            "something looks off",
            Some("fix it"),
            Some("index"),
            "urls.W001",
        );
        let rendered = msg.to_string();
        assert!(rendered.contains("urls.W001"));
        assert!(rendered.contains("WARNING"));
        assert!(rendered.contains("HINT: fix it"));
    }
}
