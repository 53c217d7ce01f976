use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use roadpost_engine::parsing::parse_text;

fn typical_post(sections: usize) -> String {
    let mut doc = String::new();
    for i in 0..sections {
        doc.push_str(&format!("## Section {i}\n\n"));
        doc.push_str("Some prose about life on the road.\nA second flowing line.\n\n");
        doc.push_str("- first takeaway\n- second takeaway\n\n");
        doc.push_str("1. hook up\n2. check lights\n3. roll out\n\n");
    }
    doc
}

fn bench_parse(c: &mut Criterion) {
    let small = typical_post(5);
    let large = typical_post(200);

    c.bench_function("parse_text_small_post", |b| {
        b.iter(|| parse_text(black_box(&small)))
    });
    c.bench_function("parse_text_large_post", |b| {
        b.iter(|| parse_text(black_box(&large)))
    });
}

criterion_group!(benches, bench_parse);
criterion_main!(benches);
