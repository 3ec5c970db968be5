//! Path-based routing between the onboarding screens
//!
//! The router is a four-state machine. A static table maps paths to
//! routes and any path missing from the table resolves to the welcome
//! screen.

/// Screen selected by the router
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Route {
    #[default]
    Welcome,
    Login,
    CreateAccount,
    Account,
}

/// Path table, checked in order
const ROUTES: &[(&str, Route)] = &[
    ("/", Route::Welcome),
    ("/login", Route::Login),
    ("/create", Route::CreateAccount),
    ("/account", Route::Account),
];

/// Catch-all entry for unmatched paths
const FALLBACK_ROUTE: Route = Route::Welcome;

impl Route {
    /// Canonical path for this route
    pub fn path(self) -> &'static str {
        match self {
            Self::Welcome => "/",
            Self::Login => "/login",
            Self::CreateAccount => "/create",
            Self::Account => "/account",
        }
    }

    /// Human readable screen name
    pub fn label(self) -> &'static str {
        match self {
            Self::Welcome => "Welcome",
            Self::Login => "Login",
            Self::CreateAccount => "Create Account",
            Self::Account => "Account Settings",
        }
    }

    /// Look a path up in the route table.
    ///
    /// Returns `None` when no entry matches. Query strings and fragments are
    /// ignored, trailing slashes are dropped and matching is case-insensitive.
    pub fn lookup(path: &str) -> Option<Self> {
        let normalized = normalize_path(path);
        ROUTES
            .iter()
            .find(|(pattern, _)| pattern.eq_ignore_ascii_case(&normalized))
            .map(|(_, route)| *route)
    }

    /// Resolve a path to a route, using the catch-all for unknown paths
    pub fn resolve(path: &str) -> Self {
        Self::lookup(path).unwrap_or(FALLBACK_ROUTE)
    }
}

/// Strip query/fragment and trailing slashes; an empty path becomes "/"
fn normalize_path(path: &str) -> String {
    let path = path.trim();
    let end = path.find(['?', '#']).unwrap_or(path.len());
    let trimmed = path[..end].trim_end_matches('/');

    if trimmed.is_empty() {
        "/".to_string()
    } else if trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{trimmed}")
    }
}

/// Navigation state: the current path and the route it resolved to
#[derive(Debug, Clone)]
pub struct Router {
    path: String,
    route: Route,
}

impl Router {
    pub fn new(path: &str) -> Self {
        let path = path.trim().to_string();
        let route = Route::resolve(&path);
        Self { path, route }
    }

    /// Current path as requested (not normalized)
    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn route(&self) -> Route {
        self.route
    }

    /// True when the current path only matched the catch-all
    pub fn is_fallback(&self) -> bool {
        Route::lookup(&self.path).is_none()
    }

    /// Move to `path` and return the route it resolved to
    pub fn navigate(&mut self, path: &str) -> Route {
        let from = self.route;
        self.path = path.trim().to_string();
        self.route = Route::resolve(&self.path);

        tracing::info!(
            path = %self.path,
            from = from.label(),
            to = self.route.label(),
            fallback = self.is_fallback(),
            "navigate"
        );

        self.route
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new("/")
    }
}
