use std::io::{self, BufRead, Write};

use tracing::{error, info};

use bookvista::models::views::{BookDetailsView, CatalogHeading, CatalogView};
use bookvista::routes::catalog::CatalogPage;
use bookvista::routes::details::book_details;
use bookvista::routes::nav::{NavHistory, Route, NAV_LINKS};
use bookvista::services::catalog::Catalog;
use bookvista::utils::stars::Star;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter("bookvista=info")
        .init();

    let catalog = match Catalog::builtin() {
        Ok(catalog) => catalog,
        Err(e) => {
            error!("Failed to load catalog data: {}", e);
            std::process::exit(1);
        }
    };
    info!("Catalog loaded with {} books", catalog.len());

    let mut nav = NavHistory::new();
    let mut page = CatalogPage::new();

    render(&nav, &page, &catalog);
    print_prompt();

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(_) => break,
        };

        let input = line.trim();
        let (command, rest) = match input.split_once(' ') {
            Some((command, rest)) => (command, rest.trim()),
            None => (input, ""),
        };

        match command {
            "" => {}
            "search" | "s" => {
                page.set_term(rest);
                if *nav.current() != Route::Catalog {
                    nav.navigate(Route::Catalog);
                }
                render(&nav, &page, &catalog);
            }
            "clear" => {
                page.clear();
                render(&nav, &page, &catalog);
            }
            "open" => {
                nav.navigate(Route::BookDetails {
                    book_id: rest.to_string(),
                });
                render(&nav, &page, &catalog);
            }
            "go" => match Route::parse(rest) {
                Some(route) => {
                    nav.navigate(route);
                    render(&nav, &page, &catalog);
                }
                None => println!("No page at '{}'", rest),
            },
            "back" => {
                nav.back();
                render(&nav, &page, &catalog);
            }
            "links" => {
                for link in &NAV_LINKS {
                    println!("  {:<14} {}", link.label, link.path);
                }
            }
            "help" => print_help(),
            "quit" | "exit" => break,
            _ => println!("Unknown command '{}', try 'help'", command),
        }

        print_prompt();
    }
}

fn print_prompt() {
    print!("> ");
    let _ = io::stdout().flush();
}

fn print_help() {
    println!("Commands:");
    println!("  search <term>   filter the catalog (alias: s)");
    println!("  clear           clear the search and show all books");
    println!("  open <id>       open a book's details page");
    println!("  go <path>       navigate to a path, e.g. /book-catalog");
    println!("  back            return to the previous page");
    println!("  links           list navbar links");
    println!("  quit            leave");
}

fn render(nav: &NavHistory, page: &CatalogPage, catalog: &Catalog) {
    render_navbar(nav.current());

    match nav.current() {
        Route::Home => {
            println!("Welcome to BookVista.");
            println!("Try 'go /book-catalog' or 'search <term>' to browse the collection.");
        }
        Route::Catalog => render_catalog(&page.view(catalog)),
        Route::BookDetails { book_id } => render_details(&book_details(book_id, catalog)),
        Route::About => println!("BookVista is a small independent bookshop on the web."),
        Route::Contact => println!("Reach us at hello@bookvista.example."),
    }
}

fn render_navbar(current: &Route) {
    let links: Vec<String> = NAV_LINKS
        .iter()
        .map(|link| {
            if current.path() == link.path {
                format!("[{}]", link.label)
            } else {
                link.label.to_string()
            }
        })
        .collect();
    println!("== BookVista | {} ==", links.join(" | "));
}

fn render_catalog(view: &CatalogView) {
    if !view.suggestions.is_empty() {
        println!("Suggestions:");
        for suggestion in &view.suggestions {
            println!(
                "  > {} - {}  (open {})",
                suggestion.title, suggestion.author, suggestion.id
            );
        }
    }

    match view.heading {
        CatalogHeading::Library => println!("Our Library"),
        CatalogHeading::SearchResults { count } => println!("Search Results ({})", count),
    }

    if view.results.is_empty() {
        println!("No books found matching your search");
        println!("Type 'clear' to clear the search and show all books");
        return;
    }

    for card in &view.results {
        println!(
            "  #{:<3} {} - {} [{}] ${:.2} {:.1}*",
            card.id, card.title, card.author, card.category, card.price, card.rating
        );
    }
}

fn render_details(view: &BookDetailsView) {
    let details = match view {
        BookDetailsView::Found(details) => details,
        BookDetailsView::NotFound { book_id } => {
            println!("Book Not Found ('{}')", book_id);
            println!("Type 'back' to return to the catalog");
            return;
        }
    };

    let book = &details.book;
    println!("[{}]", book.category);
    println!("{}", book.title);
    println!("by {}", book.author);
    println!("${:.2}", book.price);
    if book.stock > 0 {
        println!("In Stock ({} available)", book.stock);
    } else {
        println!("Out of Stock");
    }
    println!(
        "{}  {:.1} ({} reviews)",
        star_line(&details.stars),
        book.rating,
        details.review_count
    );
    println!("(Add to Cart) (Preview)");
    println!();
    println!("{}", book.description);
    println!();
    println!("Publisher: {}", book.publisher);
    println!("Published: {}", book.published_year);
    println!("Pages:     {}", book.pages);
    println!("Language:  {}", book.language);
    println!("ISBN:      {}", book.isbn);

    if !details.related.is_empty() {
        println!();
        println!("Related to '{}'", book.title);
        for card in &details.related {
            println!("  #{:<3} {} - {}", card.id, card.title, card.author);
        }
    }
}

fn star_line(stars: &[Star; 5]) -> String {
    stars
        .iter()
        .map(|star| match star {
            Star::Full => '★',
            Star::Half => '⯨',
            Star::Empty => '☆',
        })
        .collect()
}
