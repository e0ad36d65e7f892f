//! Screen routing as a simple stack: the current route is on top, `back` pops it.

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};
use std::str::FromStr;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Route {
    Home,
    Products,
    Settings,
}

impl Route {
    pub const ALL: [Route; 3] = [Route::Home, Route::Products, Route::Settings];

    pub fn name(&self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::Products => "Products",
            Route::Settings => "Settings",
        }
    }
}

impl Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Route {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Route::ALL
            .into_iter()
            .find(|route| route.name() == s)
            .ok_or_else(|| format!("Unknown route: {}", s))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigator {
    stack: Vec<Route>,
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new(Route::Home)
    }
}

impl Navigator {
    pub fn new(initial: Route) -> Self {
        Self {
            stack: vec![initial],
        }
    }

    pub fn current(&self) -> Route {
        // The stack is never empty: `back` refuses to pop the root.
        self.stack.last().copied().unwrap_or(Route::Home)
    }

    /// Pushes `route` unless it is already current. Returns whether the route changed.
    pub fn navigate(&mut self, route: Route) -> bool {
        if self.current() == route {
            return false;
        }
        debug!(from = %self.current(), to = %route, "Navigate");
        self.stack.push(route);
        true
    }

    /// Pops the current route. Returns the route now shown, or `None` at the root.
    pub fn back(&mut self) -> Option<Route> {
        if self.stack.len() <= 1 {
            return None;
        }
        self.stack.pop();
        Some(self.current())
    }

    /// Whether the nav item for `route` should be highlighted.
    pub fn is_active(&self, route: Route) -> bool {
        self.current() == route
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_on_home() {
        let nav = Navigator::default();
        assert_eq!(nav.current(), Route::Home);
        assert!(nav.is_active(Route::Home));
        assert!(!nav.is_active(Route::Products));
    }

    #[test]
    fn test_navigate_and_back() {
        let mut nav = Navigator::default();
        assert!(nav.navigate(Route::Products));
        assert!(!nav.navigate(Route::Products));
        assert!(nav.is_active(Route::Products));

        assert_eq!(nav.back(), Some(Route::Home));
        assert_eq!(nav.back(), None);
        assert_eq!(nav.current(), Route::Home);
    }

    #[test]
    fn test_route_names() {
        assert_eq!("Settings".parse::<Route>(), Ok(Route::Settings));
        assert!("#".parse::<Route>().is_err());
    }
}
