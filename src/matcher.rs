//! Predicate engine deciding which collected routes enter the document.

use crate::route::Route;

/// A pure route predicate.
///
/// Rules must be stateless and side-effect free; the matcher may
/// short-circuit, so a rule cannot rely on being evaluated. Any closure
/// `Fn(&Route) -> bool` is a rule.
pub trait MatcherRule {
    fn matches(&self, route: &Route) -> bool;
}

impl<F> MatcherRule for F
where
    F: Fn(&Route) -> bool,
{
    fn matches(&self, route: &Route) -> bool {
        self(route)
    }
}

/// Built-in rule keeping routes of one host-assigned class.
pub struct KindRule {
    kind: String,
}

impl KindRule {
    pub fn new(kind: impl Into<String>) -> Self {
        Self { kind: kind.into() }
    }
}

impl MatcherRule for KindRule {
    fn matches(&self, route: &Route) -> bool {
        route.info.kind == self.kind
    }
}

/// Ordered rule list; a route passes when every rule accepts it.
///
/// The empty matcher accepts everything. Evaluation short-circuits on the
/// first failing rule, which is observationally identical to running all
/// rules because rules are pure.
#[derive(Default)]
pub struct RouteMatcher {
    rules: Vec<Box<dyn MatcherRule>>,
}

impl RouteMatcher {
    /// Create a matcher with no rules
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a rule, preserving registration order
    pub fn with_rule(mut self, rule: impl MatcherRule + 'static) -> Self {
        self.rules.push(Box::new(rule));
        self
    }

    /// Whether every registered rule accepts the route
    pub fn matches(&self, route: &Route) -> bool {
        self.rules.iter().all(|rule| rule.matches(route))
    }

    /// Number of registered rules
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether the matcher has no rules
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn route(kind: &str, path: &str) -> Route {
        Route::new(path, "GET", "handler").kind(kind)
    }

    #[test]
    fn test_empty_matcher_accepts_everything() {
        let matcher = RouteMatcher::new();
        assert!(matcher.is_empty());
        assert!(matcher.matches(&route("content-api", "/articles")));
        assert!(matcher.matches(&route("admin", "/admin/users")));
    }

    #[test]
    fn test_kind_rule() {
        let matcher = RouteMatcher::new().with_rule(KindRule::new("content-api"));
        assert!(matcher.matches(&route("content-api", "/articles")));
        assert!(!matcher.matches(&route("admin", "/admin/users")));
    }

    #[test]
    fn test_closure_rules_and_conjunction() {
        let matcher = RouteMatcher::new()
            .with_rule(KindRule::new("content-api"))
            .with_rule(|r: &Route| r.path.starts_with("/articles"));

        assert_eq!(matcher.len(), 2);
        assert!(matcher.matches(&route("content-api", "/articles/:id")));
        // Fails the second rule
        assert!(!matcher.matches(&route("content-api", "/categories")));
        // Fails the first rule
        assert!(!matcher.matches(&route("admin", "/articles")));
    }
}
