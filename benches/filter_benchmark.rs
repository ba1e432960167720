//! Performance benchmarks for the filter/recompute cycle.
//!
//! Recompute runs on every keystroke while searching, so it has to stay
//! cheap even for feeds far larger than a personal blog.
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use lectern::feed::{recompute, strip_markup};
use lectern::models::Post;

/// Generate a feed of `count` posts with markup-heavy bodies.
fn generate_posts(count: usize) -> Vec<Post> {
    (0..count)
        .map(|i| Post {
            slug: format!("post-{i}"),
            title: format!("Notes on topic {i}"),
            content: format!(
                "<p>Paragraph one of post {i} with <b>bold</b> and <em>emphasis</em>.</p>\
                 <p>A second paragraph with a <a href=\"posts/other.html\">link</a> \
                 and some <code>inline code</code> for good measure.</p>"
            ),
            categories: vec![format!("tag-{}", i % 5)],
            formatted_date: "10 de junho de 2024".to_string(),
        })
        .collect()
}

fn bench_recompute(c: &mut Criterion) {
    let mut group = c.benchmark_group("recompute");

    for size in [10, 100, 1000].iter() {
        let posts = generate_posts(*size);
        group.throughput(Throughput::Elements(*size as u64));

        group.bench_with_input(BenchmarkId::new("unfiltered", size), &posts, |b, posts| {
            b.iter(|| recompute(black_box(posts), "all", "", 1));
        });

        group.bench_with_input(BenchmarkId::new("search", size), &posts, |b, posts| {
            b.iter(|| recompute(black_box(posts), "all", "paragraph", 1));
        });

        group.bench_with_input(BenchmarkId::new("category", size), &posts, |b, posts| {
            b.iter(|| recompute(black_box(posts), "tag-3", "", 1));
        });
    }

    group.finish();
}

fn bench_strip_markup(c: &mut Criterion) {
    let posts = generate_posts(1);
    let content = &posts[0].content;

    c.bench_function("strip_markup", |b| {
        b.iter(|| strip_markup(black_box(content)));
    });
}

criterion_group!(benches, bench_recompute, bench_strip_markup);
criterion_main!(benches);
