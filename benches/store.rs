use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use news_server::{ArticleDraft, ArticleStore};
use url::Url;
use uuid::Uuid;

fn draft() -> ArticleDraft {
    ArticleDraft {
        id: None,
        author: "John Doe".to_string(),
        title: "New Article".to_string(),
        summary: "This is a summary of the new article.".to_string(),
        content: "This is the content of the new article.".to_string(),
        tags: vec!["tag1".to_string(), "tag2".to_string()],
        source: Url::parse("https://example.org/news").unwrap(),
    }
}

fn populated(count: usize) -> ArticleStore {
    let store = ArticleStore::new();
    for _ in 0..count {
        store.create(draft());
    }
    store
}

fn bench_store(c: &mut Criterion) {
    let store = ArticleStore::new();
    c.bench_function("create", |b| b.iter(|| store.create(black_box(draft()))));

    let store = populated(1_000);
    let last = store.list().last().map(|a| a.id).unwrap_or_else(Uuid::nil);

    c.bench_function("get_last_of_1000", |b| {
        b.iter(|| store.get(black_box(last)))
    });
    c.bench_function("list_1000", |b| b.iter(|| store.list()));
}

criterion_group!(benches, bench_store);
criterion_main!(benches);
