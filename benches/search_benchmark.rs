use criterion::{black_box, criterion_group, criterion_main, Criterion};

use bookvista::models::book::BookRecord;
use bookvista::services::search::{filter_books, suggestions};

fn sample_book(id: u32, title: &str, author: &str, category: &str) -> BookRecord {
    BookRecord {
        id,
        title: title.to_string(),
        author: author.to_string(),
        category: category.to_string(),
        description: format!("{} by {}", title, author),
        cover_image: format!("/images/books/{}.jpg", id),
        price: 9.99,
        stock: 10,
        rating: 4.0,
        publisher: "Bench Press".to_string(),
        published_year: 1900,
        pages: 300,
        language: "English".to_string(),
        isbn: format!("isbn-{}", id),
    }
}

fn create_sample_catalog() -> Vec<BookRecord> {
    let mut books = vec![
        sample_book(1, "Pride and Prejudice", "Jane Austen", "Classic"),
        sample_book(2, "Frankenstein", "Mary Wollstonecraft Shelley", "Gothic"),
    ];

    // Add more books for benchmarking
    for i in 1000..2000 {
        books.push(sample_book(
            i,
            &format!("Test Book {}", i),
            &format!("Test Author {}", i % 50),
            if i % 2 == 0 { "Classic" } else { "Gothic" },
        ));
    }

    books
}

fn bench_filter_books(c: &mut Criterion) {
    let books = create_sample_catalog();

    c.bench_function("filter_empty_term", |b| {
        b.iter(|| filter_books(black_box(&books), black_box("")))
    });

    c.bench_function("filter_rare_match", |b| {
        b.iter(|| filter_books(black_box(&books), black_box("pride")))
    });

    c.bench_function("filter_broad_match", |b| {
        b.iter(|| filter_books(black_box(&books), black_box("test")))
    });

    c.bench_function("filter_no_match", |b| {
        b.iter(|| filter_books(black_box(&books), black_box("zzzzzz")))
    });
}

fn bench_suggestions(c: &mut Criterion) {
    let books = create_sample_catalog();
    let filtered = filter_books(&books, "test");

    c.bench_function("suggestions_from_broad_match", |b| {
        b.iter(|| suggestions(black_box("test"), black_box(&filtered)))
    });
}

criterion_group!(benches, bench_filter_books, bench_suggestions);
criterion_main!(benches);
