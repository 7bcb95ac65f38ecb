// 🧭 Router - Path to Page Mapping

/// The four pages of the site
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Home,
    Board,
    Events,
    Resources,
}

impl Route {
    pub const ALL: [Route; 4] = [Route::Home, Route::Board, Route::Events, Route::Resources];

    /// Exact-path match only; anything else is unmapped
    pub fn from_path(path: &str) -> Option<Route> {
        match path {
            "/" => Some(Route::Home),
            "/board" => Some(Route::Board),
            "/events" => Some(Route::Events),
            "/resources" => Some(Route::Resources),
            _ => None,
        }
    }

    pub fn path(&self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Board => "/board",
            Route::Events => "/events",
            Route::Resources => "/resources",
        }
    }

    /// Navigation label
    pub fn label(&self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::Board => "Board",
            Route::Events => "Events",
            Route::Resources => "Resources",
        }
    }

    pub fn next(&self) -> Self {
        match self {
            Route::Home => Route::Board,
            Route::Board => Route::Events,
            Route::Events => Route::Resources,
            Route::Resources => Route::Home,
        }
    }

    pub fn previous(&self) -> Self {
        match self {
            Route::Home => Route::Resources,
            Route::Board => Route::Home,
            Route::Events => Route::Board,
            Route::Resources => Route::Events,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_paths_map() {
        assert_eq!(Route::from_path("/"), Some(Route::Home));
        assert_eq!(Route::from_path("/board"), Some(Route::Board));
        assert_eq!(Route::from_path("/events"), Some(Route::Events));
        assert_eq!(Route::from_path("/resources"), Some(Route::Resources));
    }

    #[test]
    fn test_unknown_paths_unmapped() {
        assert_eq!(Route::from_path("/board/"), None);
        assert_eq!(Route::from_path("/about"), None);
        assert_eq!(Route::from_path(""), None);
    }

    #[test]
    fn test_page_cycle_covers_all_routes() {
        let mut route = Route::Home;
        for _ in 0..4 {
            assert_eq!(route.next().previous(), route);
            route = route.next();
        }
        assert_eq!(route, Route::Home);
    }
}
