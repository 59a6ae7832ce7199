use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use hostrt::JsString;

fn sample(len: usize) -> JsString {
    let unit = "path/to/😀file-";
    let text: String = unit.chars().cycle().take(len).collect();
    JsString::from(text.as_str())
}

fn bench_codec(c: &mut Criterion) {
    let mut group = c.benchmark_group("codec");

    for len in [16usize, 256, 4096] {
        let text: String = "héllo wörld 😀 ".chars().cycle().take(len).collect();
        group.bench_with_input(BenchmarkId::new("from_str", len), &text, |b, text| {
            b.iter(|| JsString::from(black_box(text.as_str())));
        });

        let js = JsString::from(text.as_str());
        group.bench_with_input(BenchmarkId::new("to_utf8", len), &js, |b, js| {
            b.iter(|| black_box(js).to_utf8());
        });
    }

    group.finish();
}

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("search");

    let haystack = sample(4096) + "needle";

    group.bench_function("index_of_hit", |b| {
        b.iter(|| black_box(&haystack).index_of(black_box("needle"), 0));
    });

    group.bench_function("index_of_miss", |b| {
        b.iter(|| black_box(&haystack).index_of(black_box("absent"), 0));
    });

    group.bench_function("last_index_of", |b| {
        b.iter(|| black_box(&haystack).last_index_of(black_box("/"), None));
    });

    group.bench_function("split", |b| {
        b.iter(|| black_box(&haystack).split(black_box("/"), None));
    });

    group.finish();
}

fn bench_transform(c: &mut Criterion) {
    let mut group = c.benchmark_group("transform");

    let text = sample(1024);
    let padded = JsString::from("  \t") + &text + "\n  ";

    group.bench_function("to_upper_case", |b| {
        b.iter(|| black_box(&text).to_upper_case());
    });

    group.bench_function("replace_all", |b| {
        b.iter(|| black_box(&text).replace_all(black_box("/"), black_box("\\")));
    });

    group.bench_function("trim", |b| {
        b.iter(|| black_box(&padded).trim());
    });

    group.bench_function("pad_start", |b| {
        b.iter(|| black_box(&text).pad_start(2048, None));
    });

    group.bench_function("slice", |b| {
        b.iter(|| black_box(&text).slice(black_box(10), Some(black_box(-10))));
    });

    group.finish();
}

criterion_group!(benches, bench_codec, bench_search, bench_transform);
criterion_main!(benches);
