use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use outline_pdf::{render, Config};

const SMALL_HTML: &str = include_str!("fixtures/small.html");
const MEDIUM_HTML: &str = include_str!("fixtures/medium.html");
const LARGE_HTML: &str = include_str!("fixtures/large.html");

fn fixtures() -> Vec<(&'static str, &'static str)> {
    vec![
        ("small", SMALL_HTML),
        ("medium", MEDIUM_HTML),
        ("large", LARGE_HTML),
    ]
}

fn bench_full_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_pipeline");

    for (name, html) in fixtures() {
        group.throughput(Throughput::Bytes(html.len() as u64));

        group.bench_with_input(BenchmarkId::new("render", name), &html, |b, html| {
            b.iter(|| render(black_box(html), Config::new()).unwrap());
        });
    }

    group.finish();
}

fn bench_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("scaling");
    let html = MEDIUM_HTML;

    for scale in [1.0, 2.0, 3.0] {
        group.bench_with_input(
            BenchmarkId::new("render", format!("{scale}x")),
            &scale,
            |b, &scale| {
                b.iter(|| render(black_box(html), Config::new().scale(scale)).unwrap());
            },
        );
    }

    group.finish();
}

fn bench_page_counts(c: &mut Criterion) {
    let mut group = c.benchmark_group("page_counts");

    for pages in [1_usize, 4, 16] {
        // One content box is 1027px tall under the default config
        let mut html = String::from("<html><body style=\"margin: 0;\">");
        for i in 0..pages {
            html.push_str(&format!(
                "<div style=\"height: 1027px;\"><h2>Section {i}</h2><p>Body text.</p></div>"
            ));
        }
        html.push_str("</body></html>");

        group.throughput(Throughput::Elements(pages as u64));
        group.bench_with_input(
            BenchmarkId::new("render", format!("{pages}p")),
            &html,
            |b, html| {
                b.iter(|| render(black_box(html), Config::new()).unwrap());
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_full_pipeline, bench_scaling, bench_page_counts);
criterion_main!(benches);
