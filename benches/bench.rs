use criterion::{black_box, criterion_group, criterion_main, Criterion};
use surly::Url;

criterion_group!(
    benches,
    bench_parse,
    bench_resolve,
    bench_json_encode,
    bench_json_decode,
);
criterion_main!(benches);

const PARSE_CASE: &str = "https://user@example.com/search?q=%E6%B5%8B%E8%AF%95#fragment";

fn bench_parse(c: &mut Criterion) {
    c.bench_function("parse", |b| b.iter(|| Url::parse(black_box(PARSE_CASE))));
}

fn bench_resolve(c: &mut Criterion) {
    let base = Url::parse_or_panic("http://a/b/c/d;p?q");
    let reference = Url::parse_or_panic("../../g");
    c.bench_function("resolve", |b| {
        b.iter(|| black_box(&base).resolve_reference(black_box(&reference)))
    });
}

fn bench_json_encode(c: &mut Criterion) {
    let url = Url::parse_or_panic(PARSE_CASE);
    c.bench_function("json_encode", |b| {
        b.iter(|| serde_json::to_string(black_box(&url)))
    });
}

fn bench_json_decode(c: &mut Criterion) {
    let json = serde_json::to_string(PARSE_CASE).unwrap();
    c.bench_function("json_decode", |b| {
        b.iter(|| serde_json::from_str::<Url>(black_box(&json)))
    });
}
