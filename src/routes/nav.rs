use regex::Regex;
use tracing::info;

/// Application routes. The details segment is kept as the raw path
/// string; parsing it as a book id (and mapping failures to the
/// not-found state) is the details page's job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    Catalog,
    About,
    Contact,
    BookDetails { book_id: String },
}

pub struct NavLink {
    pub path: &'static str,
    pub label: &'static str,
}

/// Navbar entries, in display order.
pub const NAV_LINKS: [NavLink; 4] = [
    NavLink { path: "/", label: "Home" },
    NavLink { path: "/book-catalog", label: "Book Catalog" },
    NavLink { path: "/about-us", label: "About Us" },
    NavLink { path: "/contact", label: "Contact" },
];

impl Route {
    pub fn parse(path: &str) -> Option<Route> {
        match path {
            "/" => Some(Route::Home),
            "/book-catalog" => Some(Route::Catalog),
            "/about-us" => Some(Route::About),
            "/contact" => Some(Route::Contact),
            _ => {
                let details_re = Regex::new(r"^/books/([^/]+)$").unwrap();
                details_re.captures(path).map(|cap| Route::BookDetails {
                    book_id: cap[1].to_string(),
                })
            }
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::Catalog => "/book-catalog".to_string(),
            Route::About => "/about-us".to_string(),
            Route::Contact => "/contact".to_string(),
            Route::BookDetails { book_id } => format!("/books/{}", book_id),
        }
    }
}

/// Session navigation stack. Starts on the home route; `back` pops to
/// the previous route and stays put at the bottom of the stack.
#[derive(Debug)]
pub struct NavHistory {
    stack: Vec<Route>,
}

impl NavHistory {
    pub fn new() -> Self {
        Self {
            stack: vec![Route::Home],
        }
    }

    pub fn current(&self) -> &Route {
        self.stack.last().expect("navigation stack is never empty")
    }

    pub fn navigate(&mut self, route: Route) {
        info!("Navigating to {}", route.path());
        self.stack.push(route);
    }

    pub fn back(&mut self) -> &Route {
        if self.stack.len() > 1 {
            self.stack.pop();
        }
        self.current()
    }
}

impl Default for NavHistory {
    fn default() -> Self {
        Self::new()
    }
}
