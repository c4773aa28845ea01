//! Performance benchmarks for page rendering
//!
//! Measures a full frame for the compose form with growing email text and
//! for the result panel with growing replies, plus the word wrapper alone.
//! Run with: cargo bench

use std::sync::Arc;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use ratatui::{backend::TestBackend, Terminal};
use triagem::adapters::mock::{InMemoryClipboard, MockHttpClient};
use triagem::app::App;
use triagem::config::AppConfig;
use triagem::models::AnalysisResult;
use triagem::ui::{render, wrap_text};

/// Generate an email body with the given number of paragraphs
fn generate_email(paragraphs: usize) -> String {
    let paragraph = "Prezados, gostaria de saber o status da minha solicitação de reembolso \
        aberta na semana passada. Já enviei os comprovantes por e-mail e ainda não \
        recebi retorno. Aguardo uma posição.";
    (0..paragraphs)
        .map(|i| format!("{}. {}", i + 1, paragraph))
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn bench_app() -> App {
    App::new(
        AppConfig::default(),
        Arc::new(MockHttpClient::new()),
        Arc::new(InMemoryClipboard::new()),
    )
}

/// Benchmark a frame of the compose form
fn bench_render_compose(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_compose");

    for size in [0, 10, 100].iter() {
        let mut app = bench_app();
        app.form.text.insert_str(&generate_email(*size));
        let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();

        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}_paragraphs", size)),
            size,
            |b, _| {
                b.iter(|| {
                    terminal.draw(|f| render(f, &mut app)).unwrap();
                });
            },
        );
    }

    group.finish();
}

/// Benchmark a frame of the result panel
fn bench_render_result(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_result");

    for size in [1, 10, 50].iter() {
        let mut app = bench_app();
        app.show_result(AnalysisResult {
            category: Some("Produtivo".to_string()),
            suggested_reply: Some(generate_email(*size)),
            suggested_actions: vec!["Encaminhar ao financeiro".to_string(); 3],
            ..Default::default()
        });
        let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();

        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}_paragraphs", size)),
            size,
            |b, _| {
                b.iter(|| {
                    terminal.draw(|f| render(f, &mut app)).unwrap();
                });
            },
        );
    }

    group.finish();
}

/// Benchmark word wrapping of long replies
fn bench_wrap_text(c: &mut Criterion) {
    let mut group = c.benchmark_group("wrap_text");

    for size in [1, 10, 100].iter() {
        let content = generate_email(*size);
        group.throughput(Throughput::Bytes(content.len() as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}_paragraphs", size)),
            &content,
            |b, content| {
                b.iter(|| black_box(wrap_text(black_box(content), 76)));
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_render_compose,
    bench_render_result,
    bench_wrap_text
);
criterion_main!(benches);
