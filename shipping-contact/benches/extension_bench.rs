//! Benchmarks for persisting and rendering shipping contact fields.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use shipping_contact::prelude::*;

fn extension_benchmark(c: &mut Criterion) {
    let extension = ShippingContactExtension::default();
    let submitted = SubmittedFormData::from_pairs([
        ("shipping_email", "customer@example.com"),
        ("shipping_phone", "<b>+1 (555)</b> 010-9999"),
    ]);

    c.bench_function("persist", |b| {
        let store = InMemoryMetadataStore::new();
        b.iter(|| extension.persist(black_box(OrderId::new(1)), black_box(&submitted), &store));
    });

    let store = InMemoryMetadataStore::new();
    let _ = extension.persist(OrderId::new(1), &submitted, &store);
    c.bench_function("render_html", |b| {
        b.iter(|| extension.render(black_box(OrderId::new(1)), &store).to_html());
    });
}

criterion_group!(benches, extension_benchmark);
criterion_main!(benches);
