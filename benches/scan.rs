use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use std::hint::black_box;

use contact_book::prelude::{Contact, ContactBook, MemStorage};

// Book prepopulated with `n` contacts, in-memory only so the measured
// numbers reflect the duplicate scan rather than disk I/O.
fn make_book_with_n(n: usize) -> ContactBook {
    let contacts = (0..n)
        .map(|i| {
            Contact::new(
                format!("User{i}"),
                format!("Surname{i}"),
                "12 Elm Road".to_string(),
                format!("user{i}@example.com"),
                format!("{:010}", i),
            )
        })
        .collect();

    ContactBook::with_storage(Box::new(MemStorage::with_contacts(contacts)))
        .expect("book not created")
}

// Add-benchmark: one validated insert against a 5k-contact book.
fn bench_add(c: &mut Criterion) {
    c.bench_function("add one contact into 5k", |b| {
        b.iter_batched(
            || make_book_with_n(5_000),
            |mut book| {
                let contact = Contact::new(
                    "Zoe".to_string(),
                    "Welch".to_string(),
                    "4 Oak Lane".to_string(),
                    "zoe@example.com".to_string(),
                    "0888549952".to_string(),
                );
                book.add(contact).expect("add failed");
                black_box(book.list().len());
            },
            BatchSize::SmallInput,
        );
    });
}

// Duplicate-scan benchmark: worst case, no field matches so all three
// passes run over the full collection.
fn bench_find_duplicate(c: &mut Criterion) {
    let book = make_book_with_n(5_000);

    c.bench_function("find_duplicate miss over 5k", |b| {
        b.iter(|| {
            black_box(book.find_duplicate(
                "nobody@nowhere.org",
                "9999999999",
                "Nobody",
                "Nowhere",
            ))
        });
    });
}

criterion_group!(benches, bench_add, bench_find_duplicate);
criterion_main!(benches);
