//! Route resolution for the dashboard shell.

/// Every page the shell can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Login,
    Dashboard,
    Products,
    Sales,
    Settings,
}

impl Route {
    pub fn path(&self) -> &'static str {
        match self {
            Route::Login => "/login",
            Route::Dashboard => "/dashboard",
            Route::Products => "/products",
            Route::Sales => "/sales",
            Route::Settings => "/settings",
        }
    }

    /// Exact match on a known path, ignoring one trailing slash.
    pub fn parse(path: &str) -> Option<Route> {
        let path = match path.strip_suffix('/') {
            Some(trimmed) if !trimmed.is_empty() => trimmed,
            _ => path,
        };
        match path {
            "/login" => Some(Route::Login),
            "/dashboard" => Some(Route::Dashboard),
            "/products" => Some(Route::Products),
            "/sales" => Some(Route::Sales),
            "/settings" => Some(Route::Settings),
            _ => None,
        }
    }

    /// Everything except the login page needs a session.
    pub fn is_protected(&self) -> bool {
        !matches!(self, Route::Login)
    }
}

/// Where a request for `path` ends up.
///
/// `/` and unknown paths fall through to the dashboard; protected pages
/// redirect to login without a session. The login page stays reachable
/// while signed in.
pub fn resolve(path: &str, is_authenticated: bool) -> Route {
    let route = Route::parse(path).unwrap_or(Route::Dashboard);
    if route.is_protected() && !is_authenticated {
        Route::Login
    } else {
        route
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_paths_round_trip() {
        for route in [
            Route::Login,
            Route::Dashboard,
            Route::Products,
            Route::Sales,
            Route::Settings,
        ] {
            assert_eq!(Route::parse(route.path()), Some(route));
        }
        assert_eq!(Route::parse("/sales/"), Some(Route::Sales));
    }

    #[test]
    fn root_and_unknown_go_to_dashboard() {
        assert_eq!(resolve("/", true), Route::Dashboard);
        assert_eq!(resolve("/nope", true), Route::Dashboard);
        assert_eq!(resolve("", true), Route::Dashboard);
    }

    #[test]
    fn protected_pages_need_a_session() {
        assert_eq!(resolve("/products", false), Route::Login);
        assert_eq!(resolve("/", false), Route::Login);
        assert_eq!(resolve("/login", false), Route::Login);
        assert_eq!(resolve("/login", true), Route::Login);
        assert_eq!(resolve("/settings", true), Route::Settings);
    }
}
