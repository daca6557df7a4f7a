//! Performance benchmarks for frame rendering
//!
//! Measures full-frame render time (the whole screen is rebuilt every
//! frame) at different list sizes. Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use ratatui::{backend::TestBackend, Terminal};
use std::sync::Arc;

use taskdeck::adapters::MockHttpClient;
use taskdeck::api::TodoApiClient;
use taskdeck::app::App;
use taskdeck::models::{TodoId, TodoItem};
use taskdeck::ui;

/// Build an app holding `count` todos, a third of them completed.
fn build_app(count: i64) -> App {
    let api = Arc::new(TodoApiClient::with_http(
        "http://localhost:3000",
        Arc::new(MockHttpClient::new()),
    ));
    let mut app = App::new(api);
    let todos = (0..count)
        .map(|i| TodoItem {
            id: TodoId::Int(i),
            title: format!("task number {}", i),
            completed: i % 3 == 0,
            edit: false,
        })
        .collect();
    app.store.set_todos(todos);
    app
}

fn bench_full_frame_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_frame_render");

    for size in [10, 100, 1000].iter() {
        let mut app = build_app(*size);
        let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();

        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}_todos", size)),
            size,
            |b, _| {
                b.iter(|| {
                    terminal
                        .draw(|f| ui::render(f, black_box(&mut app)))
                        .unwrap();
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_full_frame_render);
criterion_main!(benches);
